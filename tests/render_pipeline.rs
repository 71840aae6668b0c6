use astrafield::{AstraError, PLACEHOLDER_RGB, Raster, RenderParams, presets, render};

fn base_params(size: u32, seed: u64) -> RenderParams {
    RenderParams {
        size,
        seed: Some(seed),
        ..Default::default()
    }
}

fn placeholder(size: u32) -> Raster {
    Raster::solid(size, PLACEHOLDER_RGB)
}

fn decode(png: &[u8]) -> image::RgbImage {
    image::load_from_memory(png).expect("output decodes").to_rgb8()
}

#[test]
fn seeded_renders_are_byte_identical() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let params = base_params(256, 42);
    let base = placeholder(256);
    let a = render(&base, &params).unwrap();
    let b = render(&base, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unseeded_renders_differ() {
    let params = RenderParams {
        size: 256,
        seed: None,
        ..Default::default()
    };
    let base = placeholder(256);
    let a = render(&base, &params).unwrap();
    let b = render(&base, &params).unwrap();
    assert_ne!(a, b);
}

#[test]
fn output_dimensions_match_the_configured_size() {
    for size in [256u32, 400] {
        let params = base_params(size, 7);
        let img = decode(&render(&placeholder(size), &params).unwrap());
        assert_eq!(img.width(), size);
        assert_eq!(img.height(), size);
    }
}

#[test]
fn every_preset_renders_at_its_requested_size() {
    for (name, preset) in presets() {
        let params = RenderParams {
            size: 256,
            seed: Some(1),
            ..preset
        };
        let png = render(&placeholder(256), &params)
            .unwrap_or_else(|e| panic!("preset {name} failed: {e}"));
        let img = decode(&png);
        assert_eq!((img.width(), img.height()), (256, 256), "preset {name}");
    }
}

// All layers disabled with a 4-division grid: the canvas is the graded
// placeholder plus three translucent-white lines per axis.
#[test]
fn bare_grid_over_graded_placeholder() {
    let params = RenderParams {
        size: 256,
        seed: Some(42),
        grid_n: 4,
        use_dots: false,
        use_lines: false,
        use_contours: false,
        use_arcs: false,
        use_blocks: false,
        ..Default::default()
    };
    let img = decode(&render(&placeholder(256), &params).unwrap());
    assert_eq!((img.width(), img.height()), (256, 256));

    // Background is uniform away from the ruling at x or y in {64, 128, 192}.
    let off = img.get_pixel(10, 10);
    assert_eq!(img.get_pixel(200, 100), off);
    assert_eq!(img.get_pixel(30, 150), off);

    // Grid columns are strictly brighter than background columns.
    let col_sum = |x: u32| -> u32 {
        (0..256)
            .flat_map(|y| img.get_pixel(x, y).0)
            .map(u32::from)
            .sum()
    };
    let line_band: u32 = (62..67).map(col_sum).sum();
    let off_band: u32 = (30..35).map(col_sum).sum();
    assert!(
        line_band > off_band,
        "grid column band {line_band} should exceed background band {off_band}"
    );

    let row_sum = |y: u32| -> u32 {
        (0..256)
            .flat_map(|x| img.get_pixel(x, y).0)
            .map(u32::from)
            .sum()
    };
    let line_rows: u32 = (126..131).map(row_sum).sum();
    let off_rows: u32 = (96..101).map(row_sum).sum();
    assert!(line_rows > off_rows);
}

#[test]
fn malformed_tone_color_fails_before_rendering() {
    let params = RenderParams {
        size: 256,
        tone_lo: "notacolor".to_owned(),
        ..Default::default()
    };
    let err = render(&placeholder(256), &params).unwrap_err();
    assert!(matches!(err, AstraError::Color(_)), "{err}");
    assert!(err.to_string().contains("notacolor"));
}

#[test]
fn zero_block_count_matches_disabled_blocks() {
    let on_but_empty = RenderParams {
        use_blocks: true,
        block_count: 0,
        ..base_params(256, 9)
    };
    let off = RenderParams {
        use_blocks: false,
        block_count: 5,
        ..base_params(256, 9)
    };
    let base = placeholder(256);
    assert_eq!(
        render(&base, &on_but_empty).unwrap(),
        render(&base, &off).unwrap()
    );
}

#[test]
fn seeded_dot_screen_is_reproducible() {
    let params = RenderParams {
        use_dots: true,
        ..base_params(256, 123)
    };
    let base = placeholder(256);
    assert_eq!(render(&base, &params).unwrap(), render(&base, &params).unwrap());
}

#[test]
fn mismatched_base_raster_is_rejected() {
    let params = base_params(256, 1);
    let err = render(&placeholder(128), &params).unwrap_err();
    assert!(matches!(err, AstraError::Raster(_)), "{err}");
}

#[test]
fn photo_base_changes_the_output() {
    let params = base_params(256, 5);
    let dark = render(&placeholder(256), &params).unwrap();
    let light = render(&Raster::solid(256, [220, 220, 210]), &params).unwrap();
    assert_ne!(dark, light);
}
