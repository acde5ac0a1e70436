use super::camel::split_on_separators;

/// Convert separator-delimited text to dot.case.
///
/// Runs of whitespace, underscores, and hyphens delimit words; words are
/// lowercased and joined with dots ("SCREEN_NAME" -> "screen.name").
pub fn to_dot_case(input: &str) -> String {
    split_on_separators(input)
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}
