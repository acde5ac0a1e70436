use super::tokenizer::split_words;

/// Convert any text to kebab-case.
///
/// Punctuation and whitespace runs collapse into single hyphens, camelCase
/// and acronym boundaries split into separate tokens, and diacritics are
/// stripped. The result never starts or ends with a hyphen and never
/// contains two hyphens in a row; re-converting the output is a no-op.
///
/// ```
/// use recase::to_kebab_case;
///
/// assert_eq!(to_kebab_case("First Name"), "first-name");
/// assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
/// assert_eq!(to_kebab_case("naïve value"), "naive-value");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_normalization() {
        assert_eq!(to_kebab_case("First Name"), "first-name");
        assert_eq!(to_kebab_case("user_id"), "user-id");
        assert_eq!(to_kebab_case("mobile-number"), "mobile-number");
        assert_eq!(to_kebab_case("end_of_line!"), "end-of-line");
        assert_eq!(to_kebab_case(" foo   bar "), "foo-bar");
    }

    #[test]
    fn test_camel_and_pascal() {
        assert_eq!(to_kebab_case("screenName"), "screen-name");
        assert_eq!(to_kebab_case("ScreenName"), "screen-name");
        assert_eq!(to_kebab_case("camelCaseValue"), "camel-case-value");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(to_kebab_case("SCREEN_NAME"), "screen-name");
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(to_kebab_case("v2Endpoint"), "v2-endpoint");
        assert_eq!(to_kebab_case("area51"), "area51");
    }

    #[test]
    fn test_diacritics() {
        assert_eq!(to_kebab_case("naïve value"), "naive-value");
        assert_eq!(to_kebab_case("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(to_kebab_case(""), "");
        assert_eq!(to_kebab_case("!!!"), "");
        assert_eq!(to_kebab_case("   "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "First Name",
            "XMLHttpRequest",
            "naïve value",
            " weird -- input__42 ",
            "v2Endpoint",
        ];
        for input in inputs {
            let once = to_kebab_case(input);
            assert_eq!(to_kebab_case(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_shape() {
        let inputs = ["  --Weird__ÏnPut!! 123abcDEF--", "a", "", "É", "__"];
        for input in inputs {
            let out = to_kebab_case(input);
            assert!(!out.starts_with('-'), "leading hyphen in {out:?}");
            assert!(!out.ends_with('-'), "trailing hyphen in {out:?}");
            assert!(!out.contains("--"), "doubled hyphen in {out:?}");
            assert!(
                out.chars().all(|c| !c.is_uppercase()),
                "uppercase in {out:?}"
            );
        }
    }
}
