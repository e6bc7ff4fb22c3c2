//! Details panel rendering.
//!
//! Right-hand panel showing the selected movie: catalog data immediately,
//! extended details once their background fetch lands.

use eframe::egui;
use egui::RichText;

use rflicks::{Movie, MovieId, ThemeColors};

use crate::app::AppState;
use crate::presentation::rating_colors;
use crate::utils::{format_count, format_rating, formatting::format_runtime};

/// Result of user interaction with the details panel.
pub enum DetailsPanelInteraction {
    /// The favorite toggle was clicked
    FavoriteToggled(MovieId),
}

/// Renders the details panel for the current selection.
pub fn render_details_panel(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<DetailsPanelInteraction> {
    let mut interaction = None;

    let Some(movie_id) = state.selection.selected_movie_id() else {
        ui.label(RichText::new("Select a movie to see details").color(theme_colors.text_dim));
        return None;
    };

    let Some(movie) = find_movie(state, movie_id) else {
        ui.label(RichText::new("Movie is no longer loaded").color(theme_colors.text_dim));
        return None;
    };

    egui::ScrollArea::vertical().id_salt("details_panel").show(ui, |ui| {
        ui.heading(&movie.title);
        if movie.original_title != movie.title && !movie.original_title.is_empty() {
            ui.label(RichText::new(&movie.original_title).italics().color(theme_colors.text_dim));
        }

        ui.horizontal(|ui| {
            if let Some(year) = movie.release_year() {
                ui.label(RichText::new(year).color(theme_colors.text_dim));
            }
            if movie.vote_average > 0.0 {
                ui.label(
                    RichText::new(format!("★ {}", format_rating(movie.vote_average)))
                        .color(rating_colors::rating_color(movie.vote_average, theme_colors)),
                );
                ui.label(
                    RichText::new(format!("({} votes)", format_count(movie.vote_count)))
                        .color(theme_colors.text_dim),
                );
            }
        });

        // Genre names resolved through the source's genre table
        let genre_names: Vec<&str> = movie
            .genre_ids
            .iter()
            .filter_map(|&id| state.catalog.genre_name(id))
            .collect();
        if !genre_names.is_empty() {
            ui.label(RichText::new(genre_names.join(" · ")).color(theme_colors.text_dim));
        }

        ui.add_space(4.0);
        let is_favorite = state.favorites.is_favorite(movie.id);
        let favorite_label = if is_favorite {
            RichText::new("♥ Favorited").color(theme_colors.favorite)
        } else {
            RichText::new("♡ Add to favorites")
        };
        if ui.button(favorite_label).clicked() {
            interaction = Some(DetailsPanelInteraction::FavoriteToggled(movie.id));
        }

        if !movie.overview.is_empty() {
            ui.add_space(8.0);
            ui.label(&movie.overview);
        }

        ui.add_space(8.0);
        if state.selection.is_details_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading details…").color(theme_colors.text_dim));
            });
        } else if let Some(details) = state.selection.details() {
            ui.separator();
            if !details.tagline.is_empty() {
                ui.label(RichText::new(format!("“{}”", details.tagline)).italics());
            }
            if let Some(runtime) = details.runtime {
                ui.label(format!("Runtime: {}", format_runtime(runtime)));
            }
            if !details.status.is_empty() {
                ui.label(format!("Status: {}", details.status));
            }
            if details.budget > 0 {
                ui.label(format!("Budget: ${}", format_count(details.budget)));
            }
            if details.revenue > 0 {
                ui.label(format!("Revenue: ${}", format_count(details.revenue)));
            }
            if !details.homepage.is_empty() {
                ui.hyperlink(&details.homepage);
            }
        }
    });

    interaction
}

/// Looks the movie up in the loaded catalog, falling back to favorites so
/// a favorited movie stays viewable after the list refetches.
fn find_movie(state: &AppState, id: MovieId) -> Option<Movie> {
    state
        .catalog
        .movies()
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .or_else(|| {
            state
                .favorites
                .to_persisted()
                .into_iter()
                .find(|m| m.id == id)
        })
}
