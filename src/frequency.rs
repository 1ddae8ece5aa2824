/// Describe how many times something happens, optionally paired with a verb.
///
/// 0, 1 and 2 have their own adverbs ("never", "once", "twice"); anything else,
/// negatives included, becomes "`count` times".
///
/// When a verb is given, "never" goes before it ("never try") and every other
/// adverb goes after it ("try once"). An empty verb counts as no verb.
pub fn times(count: i64, verb: Option<&str>) -> String {
    let adverb = match count {
        0 => "never".to_string(),
        1 => "once".to_string(),
        2 => "twice".to_string(),
        n => format!("{n} times"),
    };

    match verb.filter(|verb| !verb.is_empty()) {
        None => adverb,
        Some(verb) if count == 0 => format!("{adverb} {verb}"),
        Some(verb) => format!("{verb} {adverb}"),
    }
}
