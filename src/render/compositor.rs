use tracing::debug;

use crate::field::noise::{FIELD_SIDE, noise_field};
use crate::field::rng::SeedStream;
use crate::foundation::error::{AstraError, AstraResult};
use crate::layers::arcs::concentric_arcs;
use crate::layers::blocks::blocks_layer;
use crate::layers::dots::halftone_dots;
use crate::layers::grid::grid_layer;
use crate::layers::isolines::isolines_layer;
use crate::layers::lines::parallel_lines;
use crate::raster::Raster;
use crate::render::encode::encode_png;
use crate::render::grade::grade;
use crate::render::rasterize::CanvasPainter;
use crate::scene::params::RenderParams;

/// Render a cover image over `base` and return encoded PNG bytes.
///
/// The composition order is a contract, not an implementation detail:
/// grid, then dots, lines, contours, arcs, blocks — later layers overpaint
/// earlier ones, and the single random stream is consumed in exactly that
/// order (dots jitter, then the contour noise field, then block placement).
/// Identical `(base, params)` including the seed produce byte-identical
/// output; with `seed: None` the stream comes from OS entropy.
///
/// `params` is assumed pre-validated (see [`crate::validate_params`]); the
/// tone colors are parsed here and fail the render before any pixel work.
#[tracing::instrument(skip_all, fields(size = params.size, seed = ?params.seed))]
pub fn render(base: &Raster, params: &RenderParams) -> AstraResult<Vec<u8>> {
    if base.size() != params.size {
        return Err(AstraError::raster(format!(
            "base raster side {} does not match configured size {}",
            base.size(),
            params.size
        )));
    }

    let tone_lo = crate::assets::color::parse_color(&params.tone_lo)?;
    let tone_hi = crate::assets::color::parse_color(&params.tone_hi)?;

    let graded = grade(base, tone_lo, tone_hi, params.tone_strength)?;
    let mut rng = SeedStream::new(params.seed);
    let mut painter = CanvasPainter::new(&graded)?;

    painter.draw(&grid_layer(params.grid_n));

    if params.use_dots {
        painter.draw(&halftone_dots(
            &graded,
            params.dot_step,
            params.dot_min,
            params.dot_max,
            &mut rng,
        )?);
    }

    if params.use_lines {
        painter.draw(&parallel_lines(
            params.line_angle_deg,
            params.line_density,
            params.line_lw,
            params.line_alpha,
        ));
    }

    if params.use_contours {
        let field = noise_field(FIELD_SIDE, FIELD_SIDE, &mut rng)?;
        let prims = isolines_layer(
            &field,
            params.contour_levels,
            params.contour_lw,
            params.contour_alpha,
        );
        debug!(isolines = prims.len(), "traced contour layer");
        painter.draw(&prims);
    }

    if params.use_arcs {
        painter.draw(&concentric_arcs(
            params.arc_count,
            params.arc_rmin,
            params.arc_rmax,
            params.arc_jitter,
            params.arc_lw,
            params.arc_alpha,
        ));
    }

    if params.use_blocks && params.block_count > 0 {
        painter.draw(&blocks_layer(params.block_count, &mut rng));
    }

    encode_png(&painter.finish()?)
}
