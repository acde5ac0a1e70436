use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose to NFKD and drop combining marks, so accented letters fall back
/// to their unaccented base ("naïve" -> "naive").
pub fn strip_diacritics(input: &str) -> String {
    input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            // Caseless letters (CJK etc.) group with lowercase
            CharClass::Lower
        } else {
            CharClass::Other
        }
    }
}

/// Split text into words, preserving original casing and left-to-right order.
///
/// Runs of non-alphanumeric characters separate words. Within an
/// alphanumeric run, a word boundary falls:
/// - before an uppercase letter that follows a lowercase letter or digit
///   ("fooBar", "v2Endpoint");
/// - before the last uppercase letter of an acronym when a lowercase letter
///   follows it ("XMLHttp" -> "XML" + "Http").
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = strip_diacritics(input).chars().collect();

    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Other;

    for (i, &c) in chars.iter().enumerate() {
        let class = CharClass::of(c);

        if class == CharClass::Other {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = CharClass::Other;
            continue;
        }

        let boundary = match (prev, class) {
            (CharClass::Lower | CharClass::Digit, CharClass::Upper) => true,
            (CharClass::Upper, CharClass::Upper) => {
                // Acronym runs end where the next word starts
                chars
                    .get(i + 1)
                    .is_some_and(|&next| CharClass::of(next) == CharClass::Lower)
            }
            _ => false,
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev = class;
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("naïve"), "naive");
        assert_eq!(strip_diacritics("Héllö Wörld"), "Hello World");
        assert_eq!(strip_diacritics("plain"), "plain");
    }

    #[test]
    fn test_camel_boundaries() {
        assert_eq!(split_words("screenName"), vec!["screen", "Name"]);
        assert_eq!(split_words("ScreenName"), vec!["Screen", "Name"]);
    }

    #[test]
    fn test_acronym_boundaries() {
        assert_eq!(split_words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(split_words("HTTP"), vec!["HTTP"]);
    }

    #[test]
    fn test_digits_stay_attached() {
        assert_eq!(split_words("v2Endpoint"), vec!["v2", "Endpoint"]);
        assert_eq!(split_words("sha256sum"), vec!["sha256sum"]);
    }

    #[test]
    fn test_separator_runs() {
        assert_eq!(split_words("end__of--line! "), vec!["end", "of", "line"]);
        assert_eq!(split_words("  foo   bar  "), vec!["foo", "bar"]);
    }

    #[test]
    fn test_nothing_left() {
        assert!(split_words("").is_empty());
        assert!(split_words("--- !!! ---").is_empty());
    }
}
