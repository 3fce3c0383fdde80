//! HexPaint Library
//!
//! Core of the hex grid painting tool: axial hex geometry, the painted grid
//! store, the generative palette, the swatch board, pointer routing and PNG
//! export. The terminal host lives behind the `ratatui` feature.

// Module declarations
pub mod config;
pub mod constants;
pub mod controller;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod models;
pub mod palette;
pub mod swatches;
#[cfg(feature = "ratatui")]
pub mod tui;
