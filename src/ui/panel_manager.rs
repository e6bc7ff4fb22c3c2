//! Panel orchestration and layout management.
//!
//! Coordinates the header, movies grid, details, and status panels and
//! funnels their interactions back to the application coordinator.

use eframe::egui;
use std::path::PathBuf;

use rflicks::MovieId;

use crate::app::AppState;
use crate::presentation::rating_colors;
use crate::ui::egui_surface::{EguiGridSurface, EguiVisibilityHost};
use crate::ui::grid_view::GridView;
use crate::ui::{details_panel, header, movies_panel, status_bar};

/// Result of panel interactions handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested the TMDB source
    OpenTmdbRequested,
    /// User requested the offline generated catalog
    OpenVirtualCatalogRequested,
    /// User requested a snapshot file
    OpenSnapshotRequested(PathBuf),
    /// A movie card was selected
    MovieSelected(MovieId),
    /// A favorite toggle was clicked (card or details panel)
    FavoriteToggled(MovieId),
    /// The infinite-scroll sentinel requested the next page
    LoadMoreRequested,
    /// The empty state asked for filters to be cleared
    ResetFiltersRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders every panel. Main entry point called from
    /// `eframe::App::update`.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        grid: &mut GridView,
        surface: &mut EguiGridSurface,
        visibility: &mut EguiVisibilityHost,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = rating_colors::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenTmdbRequested => {
                        PanelInteraction::OpenTmdbRequested
                    }
                    header::HeaderInteraction::OpenVirtualCatalogRequested => {
                        PanelInteraction::OpenVirtualCatalogRequested
                    }
                    header::HeaderInteraction::OpenSnapshotRequested(path) => {
                        PanelInteraction::OpenSnapshotRequested(path)
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::SidePanel::right("details_panel")
            .default_width(ctx.content_rect().width() * 0.28)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Details");
                ui.separator();
                if let Some(details_panel::DetailsPanelInteraction::FavoriteToggled(id)) =
                    details_panel::render_details_panel(ui, state, &theme_colors)
                {
                    interaction = Some(PanelInteraction::FavoriteToggled(id));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !state.catalog.has_source() {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("No catalog source selected");
                    ui.label("Pick Online (TMDB), Offline Catalog, or open a snapshot file.");
                });
                return;
            }

            if let Some(panel_interaction) =
                movies_panel::render_movies_panel(ui, state, grid, surface, visibility, &theme_colors)
            {
                interaction = Some(match panel_interaction {
                    movies_panel::MoviesPanelInteraction::MovieSelected(id) => {
                        PanelInteraction::MovieSelected(id)
                    }
                    movies_panel::MoviesPanelInteraction::FavoriteToggled(id) => {
                        PanelInteraction::FavoriteToggled(id)
                    }
                    movies_panel::MoviesPanelInteraction::LoadMoreRequested => {
                        PanelInteraction::LoadMoreRequested
                    }
                    movies_panel::MoviesPanelInteraction::ResetFiltersRequested => {
                        PanelInteraction::ResetFiltersRequested
                    }
                });
            }
        });

        interaction
    }
}
