use crate::model::{DEFAULT_CREDITS, NormalizeError, OutputRecord, SourceRow};
use crate::normalizer::LabelNormalizer;
use crate::utils::{derive_subject_code, normalize_whitespace};
use std::collections::HashSet;
use tracing::info;

/// Builds one record per row, stopping at the first label that cannot be mapped.
pub fn transform_rows(
    rows: &[SourceRow],
    normalizer: &LabelNormalizer,
) -> Result<Vec<OutputRecord>, NormalizeError> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let course = normalize_whitespace(&row.course);
        let title = normalize_whitespace(&row.title);
        let resolution = normalizer.resolve(&row.fall_2023_attribute, &course, &title)?;

        records.push(OutputRecord {
            code: derive_subject_code(&course),
            name: resolution.title,
            credits: DEFAULT_CREDITS,
            attribute: resolution.category,
        });
    }

    Ok(records)
}

/// Keeps the first record for every (code, name) pair, in input order.
pub fn dedupe(records: Vec<OutputRecord>) -> Vec<OutputRecord> {
    let total = records.len();
    let mut seen = HashSet::new();
    let unique: Vec<OutputRecord> = records
        .into_iter()
        .filter(|r| seen.insert((r.code.clone(), r.name.clone())))
        .collect();

    if unique.len() < total {
        info!("Dropped {} duplicate (code, name) rows", total - unique.len());
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CanonicalCategory;

    fn row(course: &str, title: &str, attribute: &str) -> SourceRow {
        SourceRow {
            course: course.into(),
            title: title.into(),
            fall_2023_attribute: attribute.into(),
        }
    }

    #[test]
    fn exact_duplicates_collapse_to_one_record() {
        let rows = vec![
            row("ARAB 201", "Intro to Arabic", "Arab. Communication"),
            row("ARAB 201", "Intro to Arabic", "Arab. Communication"),
        ];
        let records = dedupe(transform_rows(&rows, &LabelNormalizer::new()).unwrap());
        assert_eq!(
            records,
            vec![OutputRecord {
                code: "ARAB".into(),
                name: "Intro to Arabic".into(),
                credits: 3,
                attribute: Some(CanonicalCategory::ArabicCommunication),
            }]
        );
    }

    #[test]
    fn fields_are_whitespace_normalized() {
        let rows = vec![row(" HIST\n210 / POLS 210", "World \n History", "")];
        let records = transform_rows(&rows, &LabelNormalizer::new()).unwrap();
        assert_eq!(records[0].code, "HIST");
        assert_eq!(records[0].name, "World History");
        assert_eq!(records[0].attribute, None);
    }

    #[test]
    fn salvaged_text_becomes_part_of_the_name() {
        let rows = vec![row("SOC 101", "Intro", "Social Inequalities extra text")];
        let records = transform_rows(&rows, &LabelNormalizer::new()).unwrap();
        assert_eq!(records[0].name, "Intro extra text");
        assert_eq!(
            records[0].attribute,
            Some(CanonicalCategory::SocietiesIndividuals)
        );
    }

    #[test]
    fn unmappable_row_aborts_the_batch() {
        let rows = vec![
            row("ENGL 101", "Writing", "English Communication"),
            row("XYZ 100", "Mystery", "Completely Unknown Label"),
            row("PHIL 100", "Ethics", "Human Values"),
        ];
        let err = transform_rows(&rows, &LabelNormalizer::new()).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::Unmappable("Completely Unknown Label".into())
        );
    }

    #[test]
    fn dedupe_keeps_first_occurrence_and_is_idempotent() {
        let rows = vec![
            row("PHIL 100", "Ethics", "Human Values"),
            row("ENGL 101", "Writing", "English Communication"),
            row("PHIL 200", "Ethics", "Cultures and Histories"),
            row("ENGL 102", "Writing II", "Writing in the Discipline"),
        ];
        let once = dedupe(transform_rows(&rows, &LabelNormalizer::new()).unwrap());
        assert_eq!(once.len(), 3);
        assert_eq!(once[0].attribute, Some(CanonicalCategory::HumanValues));
        assert_eq!(once[1].name, "Writing");
        assert_eq!(once[2].name, "Writing II");

        let twice = dedupe(once.clone());
        assert_eq!(twice, once);
    }
}
