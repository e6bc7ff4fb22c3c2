//! Movies grid panel rendering.
//!
//! Renders the virtualized movie grid: runs the per-frame measurement pass
//! into the metrics store, drives the grid view's observers from egui input,
//! mounts only the visible item window at absolute positions, and renders
//! the loading / empty / loading-more states around it.

use eframe::egui;
use egui::{pos2, vec2, Rect, RichText};

use rflicks::{MovieId, ThemeColors};

use crate::app::AppState;
use crate::observe::EventSurface;
use crate::rendering::card_renderer::{self, CardInteraction};
use crate::state::GRID_PADDING;
use crate::ui::egui_surface::{EguiGridSurface, EguiVisibilityHost};
use crate::ui::grid_view::{GridView, SENTINEL_ELEMENT};

/// Narrowest card the measurement pass will produce.
const CARD_MIN_WIDTH: f32 = 180.0;
/// Vertical gap between grid rows.
const VERTICAL_GAP: f32 = 20.0;
/// Horizontal gap between grid columns.
const HORIZONTAL_GAP: f32 = 16.0;
/// Scroll offset past which the jump-to-top button appears.
const SCROLL_TOP_BUTTON_THRESHOLD: f32 = 400.0;

/// Result of user interaction with the movies panel.
pub enum MoviesPanelInteraction {
    /// A movie card was clicked
    MovieSelected(MovieId),
    /// A card's favorite toggle was clicked
    FavoriteToggled(MovieId),
    /// The infinite-scroll sentinel entered the viewport
    LoadMoreRequested,
    /// The empty state's "Clear filters" button was clicked
    ResetFiltersRequested,
}

/// Renders the movies grid panel.
pub fn render_movies_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    grid: &mut GridView,
    surface: &mut EguiGridSurface,
    visibility: &mut EguiVisibilityHost,
    theme_colors: &ThemeColors,
) -> Option<MoviesPanelInteraction> {
    let mut interaction: Option<MoviesPanelInteraction> = None;

    let wheel_delta = ui.input(|i| i.raw_scroll_delta.y);
    surface.begin_frame(ui.available_height(), wheel_delta);

    // Measurement pass: derive grid metrics from the available width
    let display_count = measure_grid(ui.available_width(), state);

    if !grid.is_mounted() {
        grid.mount(surface, &state.metrics);
    }
    grid.notice_row_pitch(surface, &state.metrics);
    grid.update_load_state(state.catalog.is_loading(), display_count);

    // Filter changes jump back to the top before anything renders
    grid.check_filter_change(surface, state.filters.revision());

    let sentinel_mounted =
        grid.sentinel_should_mount(&state.metrics, display_count, state.catalog.can_load_more());
    grid.sync_sentinel(visibility, sentinel_mounted);

    let mut scroll_area = egui::ScrollArea::vertical().id_salt("movies_grid");
    if let Some(jump) = surface.take_scroll_jump() {
        scroll_area = scroll_area.vertical_scroll_offset(jump);
    }

    let output = scroll_area.show(ui, |ui| {
        render_grid_content(ui, state, grid, theme_colors, sentinel_mounted, &mut interaction)
    });
    let sentinel_rect = output.inner;

    surface.set_scroll_offset(output.state.offset.y);
    visibility.update_element_visibility(SENTINEL_ELEMENT, sentinel_rect, output.inner_rect);

    // Deliver this frame's raw events, then run the frame tick
    for stream in surface.drain_events() {
        grid.deliver_event(stream);
    }
    grid.on_animation_frame(surface, &state.metrics);

    if let Some(intersecting) = visibility.poll_visibility_transition(SENTINEL_ELEMENT) {
        if grid.on_sentinel_visibility(intersecting) {
            interaction = Some(MoviesPanelInteraction::LoadMoreRequested);
        }
    }

    // Floating jump-to-top button once the grid is scrolled away
    if surface.scroll_top() > SCROLL_TOP_BUTTON_THRESHOLD {
        let button_rect = Rect::from_min_size(
            output.inner_rect.right_bottom() - vec2(52.0, 52.0),
            vec2(36.0, 36.0),
        );
        if ui.put(button_rect, egui::Button::new("⬆")).clicked() {
            surface.scroll_to(0.0);
        }
    }

    interaction
}

/// Writes measured layout parameters into the metrics store and returns the
/// number of movies passing the current filters.
///
/// Measurement completes one frame after a column-count change: the frame
/// that detects the change only raises the calculation-loading flag, the
/// next frame writes the new values and clears it. Position queries stay
/// untrusted in between.
fn measure_grid(available_width: f32, state: &mut AppState) -> usize {
    let display_count = state
        .catalog
        .display_movies(state.filters.selected_genres())
        .len();

    let inner_width = (available_width - 2.0 * GRID_PADDING).max(CARD_MIN_WIDTH);
    let columns = (((inner_width + HORIZONTAL_GAP) / (CARD_MIN_WIDTH + HORIZONTAL_GAP)).floor()
        as usize)
        .max(1);

    if state.metrics.is_calculation_loading() {
        let column_width = (inner_width - (columns as f32 - 1.0) * HORIZONTAL_GAP) / columns as f32;
        // Poster aspect plus the card's text block
        let row_height = column_width * 1.4 + 46.0;

        state.metrics.set_columns_count(columns);
        state.metrics.set_column_width(column_width);
        state.metrics.set_row_height(row_height);
        state.metrics.set_vertical_gap(VERTICAL_GAP);
        state.metrics.set_horizontal_gap(HORIZONTAL_GAP);
        state.metrics.set_is_calculation_loading(false);
    } else if columns != state.metrics.columns_count() {
        state.metrics.set_is_calculation_loading(true);
    }

    state
        .metrics
        .set_rows_count(display_count.div_ceil(state.metrics.columns_count().max(1)));

    display_count
}

/// Renders the scrollable grid content. Returns the sentinel's rect when it
/// is mounted this frame.
fn render_grid_content(
    ui: &mut egui::Ui,
    state: &mut AppState,
    grid: &GridView,
    theme_colors: &ThemeColors,
    sentinel_mounted: bool,
    interaction: &mut Option<MoviesPanelInteraction>,
) -> Option<Rect> {
    let display: Vec<rflicks::Movie> = state
        .catalog
        .display_movies(state.filters.selected_genres())
        .into_iter()
        .cloned()
        .collect();

    let initial_loading = state.catalog.is_loading() && !state.catalog.is_loading_more();

    if state.metrics.is_calculation_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.spinner();
            ui.label(RichText::new("Calculating layout…").color(theme_colors.text_dim));
        });
        return None;
    }

    if initial_loading && display.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.spinner();
            ui.label(RichText::new("Loading movies…").color(theme_colors.text_dim));
        });
        return None;
    }

    if display.is_empty() {
        render_empty_state(ui, state, theme_colors, interaction);
        return None;
    }

    // Reserve the full content height so the scrollbar reflects the whole
    // collection, then paint only the visible window into it
    let content_height = state.metrics.content_height();
    let (content_rect, _) = ui.allocate_exact_size(
        vec2(ui.available_width(), content_height),
        egui::Sense::hover(),
    );

    for index in grid.visible_items(&state.metrics, display.len()) {
        let movie = &display[index];
        let card_rect = Rect::from_min_size(
            pos2(
                content_rect.min.x + state.metrics.item_left_offset(index),
                content_rect.min.y + state.metrics.item_top_offset(index),
            ),
            vec2(state.metrics.column_width(), state.metrics.row_height()),
        );

        let card_interaction = card_renderer::render_movie_card(
            ui,
            movie,
            card_rect,
            state.selection.is_selected(movie.id),
            state.favorites.is_favorite(movie.id),
            theme_colors,
        );
        match card_interaction {
            Some(CardInteraction::Selected(id)) => {
                *interaction = Some(MoviesPanelInteraction::MovieSelected(id));
            }
            Some(CardInteraction::FavoriteToggled(id)) => {
                *interaction = Some(MoviesPanelInteraction::FavoriteToggled(id));
            }
            None => {}
        }
    }

    if state.catalog.is_loading_more() {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
        });
    }

    // The sentinel is a thin strip at the very end of the content
    sentinel_mounted.then(|| {
        Rect::from_min_size(
            pos2(content_rect.min.x, content_rect.max.y - 4.0),
            vec2(content_rect.width(), 4.0),
        )
    })
}

fn render_empty_state(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
    interaction: &mut Option<MoviesPanelInteraction>,
) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        let message = if state.filters.search().is_empty() {
            "No movies found".to_string()
        } else {
            format!("No results found for \"{}\"", state.filters.search())
        };
        ui.label(RichText::new(message).size(16.0).color(theme_colors.text));

        if state.filters.has_active_filters() {
            ui.add_space(12.0);
            if ui.button("Clear filters").clicked() {
                *interaction = Some(MoviesPanelInteraction::ResetFiltersRequested);
            }
        }
    });
}
