// Utility functions

/// Collapses newlines and whitespace runs into single spaces and trims.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the subject prefix from a course identifier, e.g. `ARAB 201 / ARAB 301` -> `ARAB`.
pub fn derive_subject_code(course: &str) -> String {
    let course = normalize_whitespace(course);
    let first_part = course.split('/').next().unwrap_or("");
    first_part
        .split(' ')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}
