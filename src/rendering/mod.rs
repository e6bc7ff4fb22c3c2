//! Low-level rendering helpers for the flicks GUI.

pub mod card_renderer;
pub mod text_utils;
