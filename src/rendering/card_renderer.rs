//! Movie card rendering.
//!
//! Paints one catalog entry at an absolute rectangle supplied by the grid
//! view: poster placeholder, title, release year, rating badge, and the
//! favorite toggle.

use eframe::egui;
use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Vec2};

use rflicks::{adjust_brightness, with_alpha, Movie, MovieId, ThemeColors};

use crate::presentation::rating_colors;
use crate::rendering::text_utils;
use crate::utils::format_rating;

/// Result of user interaction with a movie card.
pub enum CardInteraction {
    /// Card body was clicked
    Selected(MovieId),
    /// Favorite star was clicked
    FavoriteToggled(MovieId),
}

/// Renders a movie card into `rect` and reports clicks.
pub fn render_movie_card(
    ui: &mut egui::Ui,
    movie: &Movie,
    rect: Rect,
    is_selected: bool,
    is_favorite: bool,
    colors: &ThemeColors,
) -> Option<CardInteraction> {
    let mut interaction = None;

    let card_id = ui.id().with(("movie_card", movie.id));
    let response = ui.interact(rect, card_id, Sense::click());

    let background = if is_selected {
        colors.selection
    } else if response.hovered() {
        colors.hover
    } else {
        colors.card_background
    };
    ui.painter().rect_filled(rect, 6.0, background);
    if is_selected {
        ui.painter()
            .rect_stroke(rect, 6.0, Stroke::new(1.5, colors.accent), StrokeKind::Outside);
    }

    // Poster placeholder fills the card above the text block
    let text_block_height = 46.0;
    let poster_rect = Rect::from_min_size(
        rect.min + Vec2::splat(6.0),
        Vec2::new(rect.width() - 12.0, (rect.height() - text_block_height - 12.0).max(0.0)),
    );
    ui.painter()
        .rect_filled(poster_rect, 4.0, adjust_brightness(colors.card_background, 0.8));
    let initial = movie.title.chars().next().unwrap_or('?').to_uppercase().to_string();
    ui.painter().text(
        poster_rect.center(),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(poster_rect.height() * 0.4),
        with_alpha(colors.text_dim, 120),
    );

    // Rating badge in the poster's lower-right corner
    if movie.vote_average > 0.0 {
        let badge_size = Vec2::new(34.0, 18.0);
        let badge_rect = Rect::from_min_size(
            poster_rect.max - badge_size - Vec2::splat(4.0),
            badge_size,
        );
        ui.painter()
            .rect_filled(badge_rect, 4.0, with_alpha(Color32::BLACK, 160));
        ui.painter().text(
            badge_rect.center(),
            Align2::CENTER_CENTER,
            format_rating(movie.vote_average),
            FontId::proportional(12.0),
            rating_colors::rating_color(movie.vote_average, colors),
        );
    }

    // Favorite star in the poster's upper-right corner
    let star_rect = Rect::from_min_size(
        egui::pos2(poster_rect.max.x - 26.0, poster_rect.min.y + 4.0),
        Vec2::splat(22.0),
    );
    let star_id = ui.id().with(("movie_card_star", movie.id));
    let star_response = ui.interact(star_rect, star_id, Sense::click());
    let star_color = if is_favorite {
        colors.favorite
    } else if star_response.hovered() {
        colors.text
    } else {
        colors.text_dim
    };
    ui.painter().text(
        star_rect.center(),
        Align2::CENTER_CENTER,
        if is_favorite { "♥" } else { "♡" },
        FontId::proportional(16.0),
        star_color,
    );

    // Title and year under the poster
    let title_font = FontId::proportional(13.0);
    let text_left = rect.min.x + 8.0;
    let title = text_utils::fit_text(
        &movie.title,
        rect.width() - 16.0,
        &title_font,
        ui.painter(),
    );
    ui.painter().text(
        egui::pos2(text_left, rect.max.y - text_block_height + 6.0),
        Align2::LEFT_TOP,
        title,
        title_font,
        colors.text_strong,
    );
    if let Some(year) = movie.release_year() {
        ui.painter().text(
            egui::pos2(text_left, rect.max.y - 20.0),
            Align2::LEFT_TOP,
            year,
            FontId::proportional(11.0),
            colors.text_dim,
        );
    }

    if star_response.clicked() {
        interaction = Some(CardInteraction::FavoriteToggled(movie.id));
    } else if response.clicked() {
        interaction = Some(CardInteraction::Selected(movie.id));
    }

    interaction
}
