use super::*;
use crate::foundation::core::Point;
use crate::raster::glyph::GlyphStrategy;

fn size(w: u32, h: u32) -> CanvasSize {
    CanvasSize::new(w, h).unwrap()
}

#[test]
fn solid_one_pixel_layout() {
    let layout = Layout::new(
        size(1, 1),
        ColorMode::Rgb,
        Background::Solid {
            color: Rgba8::rgb(76, 175, 80),
        },
    );
    let c = layout.compose(&FontProbe::disabled()).unwrap();
    assert_eq!((c.width(), c.height()), (1, 1));
    assert_eq!(c.pixel(0, 0), Some(Rgba8::rgb(76, 175, 80)));
}

#[test]
fn layers_paint_in_order() {
    let center = Point::new(16.0, 16.0);
    let layout = Layout::new(size(32, 32), ColorMode::Rgba, Background::Transparent)
        .layer(Shape::disc(center, 10.0, Rgba8::WHITE))
        .layer(Shape::disc(center, 4.0, Rgba8::BLACK));
    let c = layout.compose(&FontProbe::disabled()).unwrap();
    assert_eq!(c.center_pixel(), Rgba8::BLACK);
    assert_eq!(c.pixel(16, 9), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(0, 0), Some(Rgba8::TRANSPARENT));
}

#[test]
fn invalid_layers_are_reported_with_index() {
    let layout = Layout::new(size(8, 8), ColorMode::Rgba, Background::Transparent)
        .layer(Shape::disc(Point::new(4.0, 4.0), 2.0, Rgba8::WHITE))
        .layer(Shape::disc(Point::new(4.0, 4.0), -2.0, Rgba8::WHITE));
    let err = layout.compose(&FontProbe::disabled()).err().unwrap();
    assert!(err.to_string().contains("layer 1"));

    let mut glyph = GlyphSpec::won(Point::new(4.0, 4.0), Rgba8::BLACK, GlyphStrategy::VectorOnly);
    glyph.size_px = 0.0;
    let layout = Layout::new(size(8, 8), ColorMode::Rgba, Background::Transparent).layer(glyph);
    assert!(layout.validate().is_err());
}

#[test]
fn zero_size_from_json_is_rejected() {
    let layout: Layout = serde_json::from_str(
        r#"{"size": {"width": 0, "height": 4}, "background": {"kind": "transparent"}}"#,
    )
    .unwrap();
    assert!(layout.validate().is_err());
}

#[test]
fn oversized_json_layout_is_a_validation_error() {
    let layout: Layout = serde_json::from_str(
        r#"{"size": {"width": 4000000000, "height": 4000000000}, "background": {"kind": "transparent"}}"#,
    )
    .unwrap();
    let err = layout.compose(&FontProbe::disabled()).err().unwrap();
    assert!(matches!(err, SplashError::Validation(_)), "{err}");
}

#[test]
fn json_layout_parses_and_composes() {
    let json = r##"{
        "size": {"width": 64, "height": 64},
        "mode": "rgba",
        "background": {"kind": "gradient", "stops": [
            {"offset": 0.0, "color": "#4CAF50"},
            {"offset": 1.0, "color": "#81C784"}
        ]},
        "layers": [
            {"layer": "shape", "kind": "ellipse", "center": {"x": 32.0, "y": 32.0},
             "radii": {"x": 10.0, "y": 10.0}, "fill": "#FFFFFF"},
            {"layer": "glyph", "center": {"x": 32.0, "y": 32.0}, "color": [76, 175, 80],
             "strategy": "vector_only"}
        ]
    }"##;
    let layout: Layout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.layers.len(), 2);
    let c = layout.compose(&FontProbe::disabled()).unwrap();
    assert_eq!(c.pixel(0, 0), Some(Rgba8::rgb(76, 175, 80)));
    // The glyph accent bar sits on the disc.
    assert_eq!(c.pixel(32, 32), Some(Rgba8::rgb(76, 175, 80)));

    let again: Layout = serde_json::from_value(serde_json::to_value(&layout).unwrap()).unwrap();
    assert_eq!(again, layout);
}
