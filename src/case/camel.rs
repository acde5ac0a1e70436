/// Convert separator-delimited text to camelCase.
///
/// Runs of whitespace, underscores, and hyphens delimit words; every word is
/// lowercased and all but the first get a leading capital
/// ("SCREEN_NAME" -> "screenName").
pub fn to_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for (idx, word) in split_on_separators(input).enumerate() {
        let word = word.to_lowercase();
        if idx == 0 {
            result.push_str(&word);
        } else {
            result.push_str(&capitalize(&word));
        }
    }

    result
}

pub(super) fn split_on_separators(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
