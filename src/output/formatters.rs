//! Formatting utilities for terminal output

use crate::core::Word;

/// Join ladder words with arrows
#[must_use]
pub fn format_ladder<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" → ")
}

/// Position of the single letter that changed between two ladder rungs
///
/// Returns `None` unless the words are exactly one substitution apart.
#[must_use]
pub fn changed_position(previous: &str, next: &str) -> Option<usize> {
    match Word::new(previous).differing_positions(&Word::new(next)).as_slice() {
        [position] => Some(*position),
        _ => None,
    }
}

/// Render a rung with its changed letter upper-cased, e.g. `cOt`
#[must_use]
pub fn highlight_change(previous: &str, next: &str) -> String {
    let Some(position) = changed_position(previous, next) else {
        return next.to_string();
    };

    next.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let upper: Vec<char> = if i == position {
                c.to_uppercase().collect()
            } else {
                vec![c]
            };
            upper
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
