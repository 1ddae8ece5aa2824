/// Render `num` as an ordinal number, e.g. 312 becomes "312th".
pub fn order(num: u64) -> String {
    let suffix = match (num % 100, num % 10) {
        (5..=20, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{num}{suffix}")
}
