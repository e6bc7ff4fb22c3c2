//! Theme support for the flicks GUI.
//!
//! Provides built-in color schemes (Light, Dark, Dracula, Nord) and a
//! centralized manager that applies a theme's palette to egui visuals.

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all UI elements.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Color32,
    pub panel_background: Color32,
    pub card_background: Color32,

    // Foregrounds
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accents
    pub accent: Color32,
    pub favorite: Color32,

    // Semantic scale (used for rating badges and status text)
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub cyan: Color32,
    pub gray: Color32,
}

/// A theme definition with metadata and palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a manager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme(), nord_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// All theme names, sorted for stable menu order.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's palette to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.cyan;
        visuals.error_fg_color = colors.red;
        visuals.warn_fg_color = colors.orange;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(246, 246, 246),
            card_background: Color32::from_rgb(235, 235, 238),

            text: Color32::from_rgb(20, 20, 20),
            text_dim: Color32::from_rgb(115, 115, 115),
            text_strong: Color32::from_rgb(0, 0, 0),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(222, 222, 225),
            border: Color32::from_rgb(165, 165, 165),

            accent: Color32::from_rgb(40, 100, 200),
            favorite: Color32::from_rgb(220, 60, 90),

            red: Color32::from_rgb(200, 40, 40),
            orange: Color32::from_rgb(230, 120, 20),
            yellow: Color32::from_rgb(180, 140, 0),
            green: Color32::from_rgb(40, 160, 40),
            cyan: Color32::from_rgb(0, 160, 180),
            gray: Color32::from_rgb(120, 120, 120),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(16, 16, 18),
            panel_background: Color32::from_rgb(32, 32, 36),
            card_background: Color32::from_rgb(46, 46, 52),

            text: Color32::from_rgb(235, 235, 235),
            text_dim: Color32::from_rgb(155, 155, 160),
            text_strong: Color32::from_rgb(255, 255, 255),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(62, 62, 70),
            border: Color32::from_rgb(95, 95, 100),

            accent: Color32::from_rgb(82, 152, 219),
            favorite: Color32::from_rgb(255, 105, 135),

            red: Color32::from_rgb(231, 76, 60),
            orange: Color32::from_rgb(243, 156, 18),
            yellow: Color32::from_rgb(241, 196, 15),
            green: Color32::from_rgb(46, 204, 113),
            cyan: Color32::from_rgb(26, 188, 156),
            gray: Color32::from_rgb(149, 165, 166),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#21222c"),
            panel_background: hex_to_color32("#282a36"),
            card_background: hex_to_color32("#343746"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            accent: hex_to_color32("#bd93f9"),
            favorite: hex_to_color32("#ff79c6"),

            red: hex_to_color32("#ff5555"),
            orange: hex_to_color32("#ffb86c"),
            yellow: hex_to_color32("#f1fa8c"),
            green: hex_to_color32("#50fa7b"),
            cyan: hex_to_color32("#8be9fd"),
            gray: hex_to_color32("#6272a4"),
        },
    }
}

/// Official colors from: https://www.nordtheme.com/docs/colors-and-palettes
fn nord_theme() -> Theme {
    Theme {
        name: "Nord".to_string(),
        description: "Nord arctic color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#242933"),
            panel_background: hex_to_color32("#2e3440"),
            card_background: hex_to_color32("#3b4252"),

            text: hex_to_color32("#d8dee9"),
            text_dim: hex_to_color32("#7b88a1"),
            text_strong: hex_to_color32("#eceff4"),

            selection: hex_to_color32("#434c5e"),
            hover: hex_to_color32("#434c5e"),
            border: hex_to_color32("#4c566a"),

            accent: hex_to_color32("#88c0d0"),
            favorite: hex_to_color32("#b48ead"),

            red: hex_to_color32("#bf616a"),
            orange: hex_to_color32("#d08770"),
            yellow: hex_to_color32("#ebcb8b"),
            green: hex_to_color32("#a3be8c"),
            cyan: hex_to_color32("#8fbcbb"),
            gray: hex_to_color32("#4c566a"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#ff5555"), Color32::from_rgb(255, 85, 85));
        assert_eq!(hex_to_color32("2e3440"), Color32::from_rgb(46, 52, 64));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_builtin_themes_present() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light", "Nord"]);
        assert!(manager.get_theme("Nord").is_some());
        assert!(manager.get_theme("Missing").is_none());
    }
}
