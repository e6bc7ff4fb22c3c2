//! Text measurement and truncation helpers.

use eframe::egui;

/// Truncates `text` so its galley fits in `max_width`, appending an
/// ellipsis when anything was cut. Returns the input unchanged when it
/// already fits.
pub fn fit_text(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure = |s: String| -> f32 {
        painter
            .layout_no_wrap(s, font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if measure(text.to_string()) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    let ellipsis_width = measure(ellipsis.to_string());
    if ellipsis_width >= max_width {
        return String::new();
    }
    let budget = max_width - ellipsis_width;

    // Binary search over the char count for the longest fitting prefix
    let chars: Vec<char> = text.chars().collect();
    let mut low = 0usize;
    let mut high = chars.len();
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if measure(prefix) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect();
    result.push_str(ellipsis);
    result
}
