//! Pluralization utilities.

use std::borrow::Cow;

/// Pluralize a singular noun using the regular English suffixes.
///
/// # Examples
///
/// - `plural("box")` -> `"boxes"`
/// - `plural("city")` -> `"cities"`
/// - `plural("cat")` -> `"cats"`
///
/// Irregular nouns ("ox", "potato", "half", "deer") come out wrong.
pub fn plural(noun: &str) -> String {
    if noun.ends_with(&['s', 'x', 'z'][..]) || noun.ends_with("ch") || noun.ends_with("sh") {
        return format!("{noun}es");
    }
    match noun.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{noun}s"),
    }
}

/// Format a count followed by the matching form of a noun.
///
/// The plural form is derived with [`plural`] unless one is given.
///
/// # Examples
///
/// - `count(1, "apple", None)` -> `"1 apple"`
/// - `count(3, "apple", None)` -> `"3 apples"`
/// - `count(2, "mouse", Some("mice"))` -> `"2 mice"`
pub fn count(num: i64, singular: &str, plural_form: Option<&str>) -> String {
    let noun = match plural_form.filter(|form| !form.is_empty()) {
        _ if num == 1 => Cow::Borrowed(singular),
        Some(form) => Cow::Borrowed(form),
        None => Cow::Owned(plural(singular)),
    };
    format!("{num} {noun}")
}
