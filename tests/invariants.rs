//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees of the encoding
//! pipeline and the two renderers.

use upca::{
    calculate_checksum, encode, format_upc, normalize, render, render_to_vector, to_image_blob,
    to_image_data_url, to_svg_string, validate, BarStyle, ChecksumPolicy, CodeError, Layout,
    Pixmap, RenderOptions, SvgDocument, SvgNode, PATTERN_MODULES,
};

#[test]
fn invariant_checksum_is_a_digit_and_deterministic() {
    for i in 0..500u64 {
        let code = format!("{:011}", i * 104729 % 100_000_000_000);
        let a = calculate_checksum(&code);
        let b = calculate_checksum(&code);
        assert!(a <= 9);
        assert_eq!(a, b);
    }
}

#[test]
fn invariant_known_checksum() {
    assert_eq!(calculate_checksum("01234567890"), 5);
    assert_eq!(
        normalize("01234567890", ChecksumPolicy::Auto).unwrap(),
        "012345678905"
    );
}

#[test]
fn invariant_validate_known_codes() {
    assert!(validate("012345678905"));
    assert!(!validate("012345678900"));
}

#[test]
fn invariant_short_input_padded_and_checksummed() {
    assert_eq!(
        normalize("12345", ChecksumPolicy::Auto).unwrap(),
        "000001234506"
    );
}

#[test]
fn invariant_validate_policy() {
    assert_eq!(
        normalize("012345678905", ChecksumPolicy::Validate).unwrap(),
        "012345678905"
    );
    assert!(matches!(
        normalize("012345678900", ChecksumPolicy::Validate),
        Err(CodeError::InvalidChecksum { .. })
    ));
}

#[test]
fn invariant_pattern_shape() {
    for raw in ["01234567890", "12345", "79927398713"] {
        let encoded = encode(raw, ChecksumPolicy::Auto).unwrap();
        assert_eq!(encoded.pattern.len(), PATTERN_MODULES);
        assert!(encoded.pattern.bytes().all(|b| b == b'0' || b == b'1'));
        assert_eq!(&encoded.pattern[..3], "101");
        assert_eq!(&encoded.pattern[45..50], "01010");
        assert_eq!(&encoded.pattern[92..], "101");
    }
}

#[test]
fn invariant_format_grouping() {
    assert_eq!(format_upc("012345678905").unwrap(), "0-12345-67890-5");
}

#[test]
fn invariant_normalize_then_validate_never_fails() {
    for raw in ["1", "42", "12345", "01234567890", "012345678900", "999999999999"] {
        let normalized = normalize(raw, ChecksumPolicy::Auto).unwrap();
        assert_eq!(
            normalize(&normalized, ChecksumPolicy::Validate).unwrap(),
            normalized
        );
    }
}

#[test]
fn invariant_cross_backend_geometry() {
    let variants = [
        RenderOptions::default(),
        RenderOptions {
            style: BarStyle::Flat,
            quiet_zone: 0.0,
            ..RenderOptions::default()
        },
        RenderOptions {
            module_width: 3.0,
            padding_left: 4.0,
            padding_top: 6.0,
            font_size: 0.0,
            ..RenderOptions::default()
        },
    ];

    for opts in variants {
        let layout = Layout::compute(&opts);

        let mut pixmap = Pixmap::new(1, 1).unwrap();
        render(&mut pixmap, "01234567890", &opts).unwrap();

        let mut doc = SvgDocument::new();
        render_to_vector(&mut doc, "01234567890", &opts).unwrap();

        assert_eq!(doc.width(), layout.total_width);
        assert_eq!(doc.height(), layout.total_height);
        assert_eq!(pixmap.width(), layout.total_width.ceil() as u32);
        assert_eq!(pixmap.height(), layout.total_height.ceil() as u32);
    }
}

#[test]
fn invariant_bar_heights_by_style() {
    let notched = RenderOptions::default();
    let flat = RenderOptions {
        style: BarStyle::Flat,
        ..RenderOptions::default()
    };

    let mut doc = SvgDocument::new();
    render_to_vector(&mut doc, "01234567890", &flat).unwrap();
    for node in &doc.children()[1..] {
        if let SvgNode::Rect { height, .. } = node {
            assert!(*height <= flat.height);
        }
    }

    render_to_vector(&mut doc, "01234567890", &notched).unwrap();
    let heights: Vec<f64> = doc.children()[1..]
        .iter()
        .filter_map(|n| match n {
            SvgNode::Rect { height, .. } => Some(*height),
            _ => None,
        })
        .collect();
    assert!(heights.contains(&(notched.height + notched.guard_extend)));
    assert!(heights.contains(&notched.height));
    assert!(heights
        .iter()
        .all(|h| *h == notched.height || *h == notched.height + notched.guard_extend));
}

#[test]
fn invariant_outputs_are_well_formed() {
    let opts = RenderOptions::default();

    let blob = to_image_blob("01234567890", &opts).unwrap();
    assert_eq!(&blob[..4], &[0x89, b'P', b'N', b'G']);

    let url = to_image_data_url("01234567890", &opts).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));

    let layout = Layout::compute(&opts);
    let markup = to_svg_string("01234567890", &opts).unwrap();
    assert!(markup.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(markup.contains(&format!(
        r#"viewBox="0 0 {} {}""#,
        layout.total_width, layout.total_height
    )));
}

#[test]
fn invariant_renders_are_reproducible() {
    let opts = RenderOptions::default();
    let a = to_image_blob("01234567890", &opts).unwrap();
    let b = to_image_blob("01234567890", &opts).unwrap();
    assert_eq!(a, b);

    let s1 = to_svg_string("01234567890", &opts).unwrap();
    let s2 = to_svg_string("01234567890", &opts).unwrap();
    assert_eq!(s1, s2);
}

#[test]
fn invariant_error_kinds() {
    assert!(matches!(
        normalize("", ChecksumPolicy::Auto),
        Err(CodeError::InvalidLength(0))
    ));
    assert!(matches!(
        normalize("1234567890123", ChecksumPolicy::Auto),
        Err(CodeError::InvalidLength(13))
    ));

    let err = normalize("012345678900", ChecksumPolicy::Validate).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("expected 5"));
    assert!(msg.contains("got 0"));
}

#[test]
fn invariant_rendered_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("code.png");

    let blob = to_image_blob("01234567890", &RenderOptions::default()).unwrap();
    std::fs::write(&path, &blob).unwrap();

    let read_back = std::fs::read(&path).unwrap();
    assert_eq!(read_back, blob);
}
