// Normalizer module: maps raw catalog labels onto canonical categories.

pub mod aliases;

use crate::model::{CanonicalCategory, NormalizeError};
use crate::utils::normalize_whitespace;
use aliases::{
    ARABIC_SUBJECT_PREFIX, DUAL_LANGUAGE_LABEL, LABEL_ALIASES, LabelAlias, SECONDARY_TAGS,
};
use tracing::{debug, info};

/// Outcome of resolving one attribute cell.
///
/// `title` is the row title, extended with any text that was glued onto the
/// category label in the source cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub category: Option<CanonicalCategory>,
    pub title: String,
}

struct AliasMatch {
    category: CanonicalCategory,
    start: usize,
    end: usize,
}

pub struct LabelNormalizer {
    aliases: &'static [LabelAlias],
    secondary_tags: &'static [&'static str],
}

impl LabelNormalizer {
    pub fn new() -> Self {
        Self::with_table(LABEL_ALIASES, SECONDARY_TAGS)
    }

    pub fn with_table(
        aliases: &'static [LabelAlias],
        secondary_tags: &'static [&'static str],
    ) -> Self {
        Self {
            aliases,
            secondary_tags,
        }
    }

    /// Resolves a raw attribute to a category, using the course for the
    /// dual-language label and salvaging glued text into the title.
    pub fn resolve(
        &self,
        raw_attribute: &str,
        course: &str,
        title: &str,
    ) -> Result<Resolution, NormalizeError> {
        let text = normalize_whitespace(raw_attribute);
        let found = |category| Resolution {
            category: Some(category),
            title: title.to_string(),
        };

        if text.is_empty() {
            return Ok(Resolution {
                category: None,
                title: title.to_string(),
            });
        }

        if text == DUAL_LANGUAGE_LABEL {
            let category = if normalize_whitespace(course).starts_with(ARABIC_SUBJECT_PREFIX) {
                CanonicalCategory::ArabicCommunication
            } else {
                CanonicalCategory::EnglishCommunication
            };
            return Ok(found(category));
        }

        if let Some(category) = self.exact(&text) {
            return Ok(found(category));
        }

        if let Some(m) = self.longest_contained(&text) {
            let leftover = normalize_whitespace(&format!("{} {}", &text[..m.start], &text[m.end..]));
            let mut revised = title.to_string();
            if !leftover.is_empty()
                && !title.to_lowercase().contains(&leftover.to_lowercase())
            {
                info!("Moving '{}' from attribute into title of '{}'", leftover, title);
                revised = normalize_whitespace(&format!("{} {}", title, leftover));
            }
            return Ok(Resolution {
                category: Some(m.category),
                title: revised,
            });
        }

        let mut cleaned = text.clone();
        for tag in self.secondary_tags {
            cleaned = cleaned.replace(tag, " ");
        }
        let cleaned = normalize_whitespace(&cleaned);
        debug!("Retrying '{}' without secondary tags as '{}'", text, cleaned);

        if let Some(category) = self.exact(&cleaned) {
            return Ok(found(category));
        }
        if let Some(m) = self.longest_contained(&cleaned) {
            return Ok(found(m.category));
        }

        Err(NormalizeError::Unmappable(raw_attribute.to_string()))
    }

    fn exact(&self, text: &str) -> Option<CanonicalCategory> {
        self.aliases
            .iter()
            .find(|(key, _)| *key == text)
            .map(|(_, category)| *category)
    }

    /// Longest alias key found anywhere in `text`; the earlier alias wins a length tie.
    fn longest_contained(&self, text: &str) -> Option<AliasMatch> {
        let mut best: Option<(usize, AliasMatch)> = None;
        for (key, category) in self.aliases {
            let Some(start) = text.find(key) else {
                continue;
            };
            if best.as_ref().is_none_or(|(len, _)| key.len() > *len) {
                best = Some((
                    key.len(),
                    AliasMatch {
                        category: *category,
                        start,
                        end: start + key.len(),
                    },
                ));
            }
        }
        best.map(|(_, m)| m)
    }
}
