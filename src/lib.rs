//! AstraField renders square decorative cover images by compositing a
//! deterministic stack of procedural geometric layers over a color-graded
//! base raster.
//!
//! The public API is deliberately small:
//!
//! - Build a [`RenderParams`] (or load a named preset via [`presets`])
//! - Supply a base [`Raster`] — a decoded photo or a solid placeholder
//! - Call [`render`] and receive encoded PNG bytes
//!
//! A render call is a synchronous, CPU-bound pure function: identical
//! `(base, params)` inputs (including the seed) produce byte-identical
//! output, and independent calls share no state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod field;
mod foundation;
mod layers;
mod raster;
mod render;
mod scene;

pub use crate::assets::color::{Color, parse_color};
pub use crate::assets::photo::decode_photo;
pub use crate::foundation::core::Rgba;
pub use crate::foundation::error::{AstraError, AstraResult};
pub use crate::raster::Raster;
pub use crate::render::compositor::render;
pub use crate::scene::params::RenderParams;
pub use crate::scene::presets::presets;
pub use crate::scene::validate::validate_params;

/// Solid base color used when no photo is supplied.
pub const PLACEHOLDER_RGB: [u8; 3] = [10, 20, 30];
