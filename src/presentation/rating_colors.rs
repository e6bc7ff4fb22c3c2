//! Color mapping for rating badges and theme palette access.

use egui::Color32;
use rflicks::{ThemeColors, ThemeManager};

/// Returns the current theme's palette, falling back to Dark.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.get_theme("Dark").unwrap().colors)
}

/// Returns the badge color for a 0-10 vote average.
///
/// Buckets follow the usual review-aggregate reading: green is good,
/// yellow mixed, orange weak, red bad; unrated entries stay neutral.
pub fn rating_color(vote_average: f64, colors: &ThemeColors) -> Color32 {
    if vote_average <= 0.0 {
        colors.gray
    } else if vote_average >= 7.5 {
        colors.green
    } else if vote_average >= 6.0 {
        colors.yellow
    } else if vote_average >= 4.5 {
        colors.orange
    } else {
        colors.red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rflicks::ThemeManager;

    #[test]
    fn test_rating_buckets() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, "Dark");

        assert_eq!(rating_color(8.4, colors), colors.green);
        assert_eq!(rating_color(6.5, colors), colors.yellow);
        assert_eq!(rating_color(5.0, colors), colors.orange);
        assert_eq!(rating_color(2.1, colors), colors.red);
        assert_eq!(rating_color(0.0, colors), colors.gray);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let manager = ThemeManager::new();
        let fallback = theme_colors(&manager, "NoSuchTheme");
        let dark = theme_colors(&manager, "Dark");
        assert_eq!(fallback.background, dark.background);
    }
}
