/// Formats items as a one-based numbered list, one item per line.
pub fn format_enumerated_list<D: AsRef<str>>(items: &[D]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
