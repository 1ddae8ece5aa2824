const DEFAULT_CONJUNCTION: &str = "and";

/// Join `items` into an English list.
///
/// Two items are joined by the conjunction alone ("apples and oranges"). Three
/// or more get commas and a serial comma before the conjunction ("apples,
/// oranges, and bananas"). The conjunction defaults to "and", which is also
/// used when an empty one is passed.
pub fn list<S: AsRef<str>>(items: &[S], conjunction: Option<&str>) -> String {
    let conjunction = format!(
        " {} ",
        conjunction
            .filter(|conjunction| !conjunction.is_empty())
            .unwrap_or(DEFAULT_CONJUNCTION)
    );
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();

    match items.split_last() {
        Some((last, start)) if start.len() >= 2 => {
            format!("{},{}{}", start.join(", "), conjunction, last)
        }
        _ => items.join(conjunction.as_str()),
    }
}
