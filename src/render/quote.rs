//! Quote line breaking

/// Characters per line for a text block `available_width` wide
pub fn max_chars_per_line(available_width: f32, average_char_width: f32) -> usize {
    if average_char_width <= 0.0 {
        return 1;
    }
    ((available_width / average_char_width).floor() as usize).max(1)
}

/// Greedy word wrap; words longer than a line are split
pub fn wrap_quote(quote: &str, max_chars: usize) -> Vec<String> {
    textwrap::wrap(quote, max_chars.max(1))
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}
