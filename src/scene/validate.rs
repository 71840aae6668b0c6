use std::fmt::Display;

use crate::foundation::error::{AstraError, AstraResult};
use crate::scene::params::RenderParams;

/// Range-check every field of `params` against its declared bounds.
///
/// All violations are collected so a caller sees every bad field at once,
/// each with its name and offending value. The core pipeline assumes this ran
/// and performs no re-validation. Color strings are parsed separately by the
/// pipeline itself (a malformed color is a `Color` error, not `Validation`).
pub fn validate_params(params: &RenderParams) -> AstraResult<()> {
    let mut errors = Vec::new();

    check(&mut errors, "size", params.size, 256, 4096);
    check(&mut errors, "tone_strength", params.tone_strength, 0.0, 1.0);
    check(&mut errors, "grid_n", params.grid_n, 1, 64);

    check(&mut errors, "dot_step", params.dot_step, 8, 128);
    check(&mut errors, "dot_min", params.dot_min, 0.0, 50.0);
    check(&mut errors, "dot_max", params.dot_max, 0.0, 50.0);

    check(&mut errors, "line_density", params.line_density, 2, 400);
    check(&mut errors, "line_lw", params.line_lw, 0.2, 8.0);
    check(&mut errors, "line_alpha", params.line_alpha, 0.0, 1.0);
    if !params.line_angle_deg.is_finite() {
        errors.push(format!(
            "line_angle_deg = {} must be finite",
            params.line_angle_deg
        ));
    }

    check(&mut errors, "contour_levels", params.contour_levels, 2, 40);
    check(&mut errors, "contour_alpha", params.contour_alpha, 0.0, 1.0);
    check(&mut errors, "contour_lw", params.contour_lw, 0.2, 6.0);

    check(&mut errors, "arc_count", params.arc_count, 1, 40);
    check(&mut errors, "arc_rmin", params.arc_rmin, 0.0, 1.0);
    check(&mut errors, "arc_rmax", params.arc_rmax, 0.0, 1.0);
    check(&mut errors, "arc_jitter", params.arc_jitter, 0.0, 0.2);
    check(&mut errors, "arc_lw", params.arc_lw, 0.2, 12.0);
    check(&mut errors, "arc_alpha", params.arc_alpha, 0.0, 1.0);

    check(&mut errors, "block_count", params.block_count, 0, 10);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AstraError::validation(errors.join("; ")))
    }
}

fn check<T: PartialOrd + Display + Copy>(
    errors: &mut Vec<String>,
    field: &str,
    value: T,
    lo: T,
    hi: T,
) {
    // Written so NaN fails the check rather than slipping through.
    if !(value >= lo && value <= hi) {
        errors.push(format!("{field} = {value} outside [{lo}, {hi}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(validate_params(&RenderParams::default()).is_ok());
    }

    #[test]
    fn out_of_range_field_is_named_with_its_value() {
        let params = RenderParams {
            size: 100,
            ..Default::default()
        };
        let err = validate_params(&params).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("size = 100"));
        assert!(msg.contains("[256, 4096]"));
    }

    #[test]
    fn all_violations_are_collected() {
        let params = RenderParams {
            grid_n: 0,
            contour_levels: 1,
            arc_jitter: 0.5,
            ..Default::default()
        };
        let msg = validate_params(&params).unwrap_err().to_string();
        assert!(msg.contains("grid_n"));
        assert!(msg.contains("contour_levels"));
        assert!(msg.contains("arc_jitter"));
    }

    #[test]
    fn nan_floats_are_rejected() {
        let params = RenderParams {
            tone_strength: f64::NAN,
            ..Default::default()
        };
        assert!(validate_params(&params).is_err());
    }
}
