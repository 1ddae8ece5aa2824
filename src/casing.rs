/// Uppercase the first character of `text`, leaving the rest untouched.
///
/// Empty input is returned as is.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_lowercase_word() {
        assert_eq!(capitalize("apple"), "Apple");
    }

    #[test]
    fn capitalize_already_capitalized() {
        assert_eq!(capitalize("Apple"), "Apple");
    }

    #[test]
    fn capitalize_only_touches_first_character() {
        assert_eq!(capitalize("hello wORLD"), "Hello wORLD");
    }

    #[test]
    fn capitalize_non_letter_first() {
        assert_eq!(capitalize("3 apples"), "3 apples");
    }

    #[test]
    fn capitalize_non_ascii_first() {
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    proptest! {
        #[test]
        fn capitalize_is_idempotent(s in "[a-zA-Zà-ÿ0-9 ]{0,20}") {
            let once = capitalize(&s);
            prop_assert_eq!(capitalize(&once), once);
        }

        #[test]
        fn capitalize_keeps_ascii_tail(s in "[a-z][a-zA-Z ]{0,20}") {
            let result = capitalize(&s);
            prop_assert_eq!(result.len(), s.len());
            prop_assert_eq!(&result[1..], &s[1..]);
        }
    }
}
