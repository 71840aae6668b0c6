use crate::field::contour::extract_isolines;
use crate::field::noise::ScalarField;
use crate::foundation::core::Rgba;
use crate::layers::STROKE_UNIT;
use crate::layers::primitive::Primitive;

/// Stroke the scalar field's isolines at `levels` thresholds.
pub(crate) fn isolines_layer(
    field: &ScalarField,
    levels: u32,
    lw: f64,
    alpha: f64,
) -> Vec<Primitive> {
    let color = Rgba::new(0.0, 0.0, 0.0, alpha);
    let width = lw * STROKE_UNIT;

    extract_isolines(field, levels)
        .into_iter()
        .filter(|line| line.len() >= 2)
        .map(|points| Primitive::Polyline {
            points,
            color,
            width,
            round_caps: true,
        })
        .collect()
}
