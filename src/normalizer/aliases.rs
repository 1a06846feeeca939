// Static label tables. Order matters: equal-length substring matches resolve to the earlier entry.
use crate::model::CanonicalCategory::{self, *};

/// A raw label and the category it denotes.
pub type LabelAlias = (&'static str, CanonicalCategory);

/// Label that names both communication buckets; the course prefix decides.
pub const DUAL_LANGUAGE_LABEL: &str = "Understanding Communication";

/// Course prefix that selects the Arabic bucket for [`DUAL_LANGUAGE_LABEL`].
pub const ARABIC_SUBJECT_PREFIX: &str = "ARAB";

pub static LABEL_ALIASES: &[LabelAlias] = &[
    // database values pass through
    ("Engl. Communication", EnglishCommunication),
    ("Arab. Communication", ArabicCommunication),
    ("Human Values", HumanValues),
    ("Cultures & Histories", CulturesHistories),
    ("Societies & Individuals", SocietiesIndividuals),
    ("Understanding the World", UnderstandingTheWorld),
    ("Elective", Elective),
    ("CEL", CommunityEngagedLearning),
    // bucket names used in the app
    ("English Communication", EnglishCommunication),
    ("Arabic Communication", ArabicCommunication),
    ("Cultures and Histories", CulturesHistories),
    ("Societies and Individuals", SocietiesIndividuals),
    ("Community Engaged Learning", CommunityEngagedLearning),
    ("Technical Elective", Elective),
    // catalog PDF spellings
    ("Community-Engaged Learning", CommunityEngagedLearning),
    // catalog labels without a bucket of their own
    ("Social Inequalities", SocietiesIndividuals),
    ("History of Ideas", CulturesHistories),
    ("Writing in the Discipline", EnglishCommunication),
    ("Quantitative Reasoning", UnderstandingTheWorld),
    // pre-fall 2023 labels
    ("Arabic Communications Skills", ArabicCommunication),
    ("English Communications Skills", EnglishCommunication),
    ("Humanities List I", CulturesHistories),
    ("Humanities List II", CulturesHistories),
    ("Social Sciences List I", SocietiesIndividuals),
    ("Social Sciences List II", SocietiesIndividuals),
    ("Natural Sciences", UnderstandingTheWorld),
];

/// Phrases that show up glued to the real bucket text in the attribute cell.
pub static SECONDARY_TAGS: &[&str] = &[
    "Social Inequalities",
    "History of Ideas",
    "Writing in the Discipline",
];
