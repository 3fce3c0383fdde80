//! Value types shared by the geometry engine, the paint state and the renderers.
//!
//! Models are plain `Copy` values with no knowledge of the UI.

pub mod axial;
pub mod pixel;
pub mod rgb;

// Re-export all model types
pub use axial::AxialCoord;
pub use pixel::{PixelRect, Point};
pub use rgb::RgbColor;
