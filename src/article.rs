/// Prefix `noun` with "a" or "an".
///
/// Only the first letter is looked at, so words like "hour" or "university"
/// get the wrong article.
pub fn a_or_an(noun: &str) -> String {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U') => format!("an {noun}"),
        _ => format!("a {noun}"),
    }
}
