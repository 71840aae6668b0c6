use serde::{Deserialize, Serialize};

/// Complete render configuration.
///
/// Immutable once handed to [`crate::render`]; the pipeline never mutates or
/// defaults fields on its own. Every field has a serde default so partial
/// JSON bodies deserialize into a fully specified config. Ranges are
/// enforced by [`crate::validate_params`] at the boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Output side length in pixels, `[256, 4096]`.
    pub size: u32,
    /// Duotone shadow color (hex or named).
    pub tone_lo: String,
    /// Duotone highlight color (hex or named).
    pub tone_hi: String,
    /// Grade blend factor, `[0, 1]`; 0 is identity, 1 is pure duotone.
    pub tone_strength: f64,
    /// Seed for the render's random stream; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Grid divisions, `[1, 64]`; 1 disables the ruling.
    pub grid_n: u32,

    /// Enable the halftone dot screen.
    pub use_dots: bool,
    /// Enable the rotated parallel-line family.
    pub use_lines: bool,
    /// Enable noise-field isolines.
    pub use_contours: bool,
    /// Enable the concentric corner arcs.
    pub use_arcs: bool,
    /// Enable the random accent blocks.
    pub use_blocks: bool,

    /// Dot sampling step in pixels, `[8, 128]`.
    pub dot_step: u32,
    /// Dot radius at full luminance, pixels, `[0, 50]`.
    pub dot_min: f64,
    /// Dot radius at zero luminance, pixels, `[0, 50]`.
    pub dot_max: f64,

    /// Line family rotation in degrees (any value).
    pub line_angle_deg: f64,
    /// Number of parallel lines, `[2, 400]`.
    pub line_density: u32,
    /// Line stroke width, `[0.2, 8]`.
    pub line_lw: f64,
    /// Line stroke alpha, `[0, 1]`.
    pub line_alpha: f64,

    /// Number of isoline thresholds, `[2, 40]`.
    pub contour_levels: u32,
    /// Isoline stroke alpha, `[0, 1]`.
    pub contour_alpha: f64,
    /// Isoline stroke width, `[0.2, 6]`.
    pub contour_lw: f64,

    /// Number of arcs, `[1, 40]`.
    pub arc_count: u32,
    /// Smallest arc radius, fraction of the canvas side, `[0, 1]`.
    pub arc_rmin: f64,
    /// Largest arc radius, fraction of the canvas side, `[0, 1]`.
    pub arc_rmax: f64,
    /// Radial jitter amplitude, `[0, 0.2]`.
    pub arc_jitter: f64,
    /// Arc stroke width, `[0.2, 12]`.
    pub arc_lw: f64,
    /// Arc stroke alpha, `[0, 1]`.
    pub arc_alpha: f64,

    /// Number of accent blocks, `[0, 10]`.
    pub block_count: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            size: 1024,
            tone_lo: "#050a10".to_owned(),
            tone_hi: "#12cabf".to_owned(),
            tone_strength: 0.9,
            seed: None,

            grid_n: 16,

            use_dots: false,
            use_lines: true,
            use_contours: true,
            use_arcs: true,
            use_blocks: true,

            dot_step: 40,
            dot_min: 1.0,
            dot_max: 9.0,

            line_angle_deg: 22.0,
            line_density: 110,
            line_lw: 1.0,
            line_alpha: 0.22,

            contour_levels: 8,
            contour_alpha: 0.30,
            contour_lw: 1.1,

            arc_count: 6,
            arc_rmin: 0.07,
            arc_rmax: 0.24,
            arc_jitter: 0.012,
            arc_lw: 2.0,
            arc_alpha: 0.9,

            block_count: 2,
        }
    }
}
