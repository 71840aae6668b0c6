use std::collections::BTreeMap;

use crate::scene::params::RenderParams;

/// The fixed preset catalog, keyed by name.
///
/// Exposed read-only for discovery; callers clone an entry and tweak fields
/// from there. Every preset satisfies [`crate::validate_params`].
pub fn presets() -> BTreeMap<&'static str, RenderParams> {
    let mut map = BTreeMap::new();

    map.insert("default", RenderParams::default());

    map.insert(
        "geo-lines",
        RenderParams {
            use_dots: false,
            use_lines: true,
            use_contours: false,
            use_arcs: true,
            use_blocks: false,
            line_density: 90,
            line_lw: 1.6,
            arc_count: 7,
            ..Default::default()
        },
    );

    map.insert(
        "contour-field",
        RenderParams {
            use_lines: false,
            use_contours: true,
            contour_levels: 12,
            contour_lw: 1.6,
            use_arcs: false,
            use_blocks: false,
            ..Default::default()
        },
    );

    map.insert(
        "bold-grid",
        RenderParams {
            grid_n: 28,
            line_alpha: 0.3,
            line_density: 60,
            ..Default::default()
        },
    );

    map.insert(
        "warm-dusk",
        RenderParams {
            tone_lo: "#1b0f0a".to_owned(),
            tone_hi: "#f48b45".to_owned(),
            tone_strength: 0.95,
            ..Default::default()
        },
    );

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::validate::validate_params;

    #[test]
    fn catalog_has_the_expected_entries() {
        let map = presets();
        for name in ["default", "geo-lines", "contour-field", "bold-grid", "warm-dusk"] {
            assert!(map.contains_key(name), "missing preset {name}");
        }
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn every_preset_validates() {
        for (name, p) in presets() {
            assert!(validate_params(&p).is_ok(), "preset {name} fails validation");
        }
    }

    #[test]
    fn presets_differ_from_default_where_documented() {
        let map = presets();
        assert!(!map["geo-lines"].use_contours);
        assert_eq!(map["contour-field"].contour_levels, 12);
        assert_eq!(map["bold-grid"].grid_n, 28);
        assert_eq!(map["warm-dusk"].tone_hi, "#f48b45");
    }
}
