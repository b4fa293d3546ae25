//! Formatting utilities for terminal output

/// The word for a yes/no answer
#[must_use]
pub const fn answer_word(answer: bool) -> &'static str {
    if answer { "yes" } else { "no" }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a mean depth as a bar scaled against the worst case
#[must_use]
pub fn depth_bar(depth: f64, worst: f64, width: usize) -> String {
    if worst <= 0.0 {
        return "░".repeat(width);
    }
    create_progress_bar(depth, worst, width)
}
