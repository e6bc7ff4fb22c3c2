//! UI panel rendering subsystem
//!
//! All panel rendering logic for the flicks GUI:
//! - Header panel (source controls, search, genre chips, theme selector)
//! - Movies panel (virtualized grid with infinite scroll)
//! - Details panel (selected movie information)
//! - Status bar (memory and catalog statistics)
//! - Grid view (windowing state machine behind the movies panel)
//! - egui surface (host adapter feeding the observers)
//! - Panel manager (panel orchestration and layout)

pub mod details_panel;
pub mod egui_surface;
pub mod grid_view;
pub mod header;
pub mod movies_panel;
pub mod panel_manager;
pub mod status_bar;
