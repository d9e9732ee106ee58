//! Library entry for tradui exposing core logic for integration tests.

pub mod catalog;
pub mod events;
pub mod files;
pub mod logic;
pub mod net;
pub mod pipeline;
pub mod prefs;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
