//! Header panel rendering.
//!
//! Top bar with catalog source controls, the search box, genre filter
//! chips, and the theme selector.

use eframe::egui;
use egui::RichText;
use std::path::PathBuf;

use crate::app::AppState;

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User clicked "Online (TMDB)"
    OpenTmdbRequested,
    /// User clicked "Offline Catalog"
    OpenVirtualCatalogRequested,
    /// User picked a snapshot file to open
    OpenSnapshotRequested(PathBuf),
}

/// Renders the application header.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("🌐 Online (TMDB)").clicked() {
            interaction = Some(HeaderInteraction::OpenTmdbRequested);
        }
        if ui.button("🔮 Offline Catalog").clicked() {
            interaction = Some(HeaderInteraction::OpenVirtualCatalogRequested);
        }
        if ui.button("📁 Open Snapshot").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Catalog Snapshots", &["rfcat", "br"]);
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }
            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenSnapshotRequested(path));
            }
        }

        ui.separator();

        // Search box; every edit bumps the filter revision, which drives
        // both the refetch and the grid's scroll reset
        ui.label("Search:");
        let mut search = state.filters.search().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .desired_width(220.0)
                .hint_text("Title…"),
        );
        if response.changed() {
            state.filters.set_search(search);
        }

        ui.separator();

        // Theme selector
        let current = state.theme.current_theme_name().to_string();
        let theme_names: Vec<String> = state
            .theme
            .theme_manager()
            .list_themes()
            .iter()
            .map(|s| s.to_string())
            .collect();
        egui::ComboBox::from_label("Theme")
            .selected_text(current.clone())
            .show_ui(ui, |ui| {
                for name in theme_names {
                    if ui.selectable_label(current == name, &name).clicked() {
                        state.theme.set_theme(name.clone());
                    }
                }
            });
    });

    // Genre filter chips, shown once the source's genre table is loaded
    let genres = state.catalog.genres().to_vec();
    if !genres.is_empty() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Genres:").weak());
            for genre in &genres {
                let selected = state.filters.is_genre_selected(genre.id);
                if ui.selectable_label(selected, &genre.name).clicked() {
                    state.filters.toggle_genre(genre.id);
                }
            }
            if state.filters.has_active_filters() && ui.small_button("✖ Clear").clicked() {
                state.filters.reset();
            }
        });
    }

    interaction
}
