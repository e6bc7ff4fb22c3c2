//! Status bar rendering.
//!
//! Bottom bar with process memory usage, catalog source statistics, and
//! the current error message if any.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_count, format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if state.catalog.has_source() {
            ui.label(RichText::new("|").strong());

            let loaded = state.catalog.movies().len();
            let total = state.catalog.total_results();
            ui.label(RichText::new(format!(
                "{} | Loaded: {} of {} | Page: {}",
                state.catalog.source_name(),
                format_count(loaded as u64),
                format_count(total),
                state.catalog.current_page(),
            ))
            .strong());

            // Show the filtered count when a genre selection is active
            if !state.filters.selected_genres().is_empty() {
                let filtered = state
                    .catalog
                    .display_movies(state.filters.selected_genres())
                    .len();
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!("Filtered: {} / {} movies", filtered, loaded))
                        .strong()
                        .color(egui::Color32::YELLOW),
                );
            }

            if state.favorites.count() > 0 {
                ui.label(RichText::new("|").strong());
                ui.label(RichText::new(format!("♥ {}", state.favorites.count())).strong());
            }
        } else {
            ui.label(RichText::new("| No catalog source selected").strong());
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(error).color(egui::Color32::LIGHT_RED));
        }
    });
}
