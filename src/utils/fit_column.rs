/// Truncates `text` to `max_chars` characters and left-aligns it in a column of `width`.
pub fn fit_column(text: &str, width: usize, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();

    format!("{:<width$}", truncated, width = width)
}
