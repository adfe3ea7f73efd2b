use super::*;
use crate::foundation::core::ColorMode;

fn painted(canvas: &Canvas) -> Vec<(u32, u32)> {
    canvas
        .image()
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[3] != 0)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn white_disc_center_is_white() {
    let mut c = Canvas::transparent(512, 512).unwrap();
    paint_shape(&mut c, &Shape::disc(Point::new(256.0, 256.0), 180.0, Rgba8::WHITE));
    assert_eq!(c.center_pixel(), Rgba8::rgba(255, 255, 255, 255));
}

#[test]
fn disc_stays_inside_its_bounding_box() {
    for (cx, cy, r) in [(256.0, 256.0, 180.0), (10.0, 12.0, 5.0), (33.3, 40.7, 7.25)] {
        let mut c = Canvas::transparent(64 * 8, 64 * 8).unwrap();
        paint_shape(&mut c, &Shape::disc(Point::new(cx, cy), r, Rgba8::WHITE));
        let px = painted(&c);
        assert!(!px.is_empty());
        for (x, y) in px {
            let (x, y) = (f64::from(x), f64::from(y));
            assert!(x >= cx - r && x <= cx + r, "x={x} for c={cx} r={r}");
            assert!(y >= cy - r && y <= cy + r, "y={y} for c={cy} r={r}");
        }
    }
}

#[test]
fn disc_near_edge_is_clipped() {
    let mut c = Canvas::transparent(8, 8).unwrap();
    paint_shape(&mut c, &Shape::disc(Point::new(0.0, 0.0), 4.0, Rgba8::WHITE));
    assert_eq!(c.pixel(0, 0), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(7, 7), Some(Rgba8::TRANSPARENT));
}

#[test]
fn rect_covers_half_open_area() {
    let mut c = Canvas::transparent(10, 10).unwrap();
    paint_shape(
        &mut c,
        &Shape::Rect {
            rect: Rect::new(2.0, 3.0, 6.0, 5.0),
            fill: Rgba8::BLACK,
        },
    );
    assert_eq!(painted(&c).len(), 4 * 2);
    assert_eq!(c.pixel(2, 3), Some(Rgba8::BLACK));
    assert_eq!(c.pixel(6, 3), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.pixel(2, 5), Some(Rgba8::TRANSPARENT));
}

#[test]
fn rounded_rect_trims_corners_only() {
    let fill = Rgba8::rgb(76, 175, 80);
    let mut c = Canvas::transparent(60, 60).unwrap();
    paint_shape(
        &mut c,
        &Shape::RoundedRect {
            rect: Rect::new(10.0, 10.0, 50.0, 50.0),
            radius: 5.0,
            fill,
        },
    );
    assert_eq!(c.pixel(10, 10), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.pixel(49, 49), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.pixel(30, 10), Some(fill));
    assert_eq!(c.pixel(10, 30), Some(fill));
    assert_eq!(c.pixel(12, 12), Some(fill));
    assert_eq!(c.pixel(30, 30), Some(fill));
}

#[test]
fn translucent_rounded_rect_does_not_double_blend() {
    let fill = Rgba8::rgba(76, 175, 80, 77);
    let mut c = Canvas::transparent(60, 60).unwrap();
    paint_shape(
        &mut c,
        &Shape::RoundedRect {
            rect: Rect::new(10.0, 10.0, 50.0, 50.0),
            radius: 5.0,
            fill,
        },
    );
    assert!(c.image().pixels().all(|p| p.0[3] == 0 || p.0 == fill.to_array()));
}

#[test]
fn ring_leaves_interior_untouched() {
    let green = Rgba8::rgb(76, 175, 80);
    let mut c = Canvas::transparent(100, 100).unwrap();
    paint_shape(&mut c, &Shape::ring(Point::new(50.0, 50.0), 40.0, 6.0, green));
    assert_eq!(c.pixel(50, 50), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.pixel(50, 11), Some(green));
    assert_eq!(c.pixel(50, 20), Some(Rgba8::TRANSPARENT));
}

#[test]
fn filled_and_stroked_ellipse_uses_both_paints() {
    let mut c = Canvas::new(100, 100, ColorMode::Rgb, Rgba8::BLACK).unwrap();
    paint_shape(
        &mut c,
        &Shape::Ellipse {
            center: Point::new(50.0, 50.0),
            radii: Vec2::new(40.0, 20.0),
            fill: Some(Rgba8::WHITE),
            stroke: Some(Stroke {
                color: Rgba8::rgb(255, 0, 0),
                width: 3.0,
            }),
        },
    );
    assert_eq!(c.pixel(50, 50), Some(Rgba8::WHITE));
    assert_eq!(c.pixel(11, 50), Some(Rgba8::rgb(255, 0, 0)));
    assert_eq!(c.pixel(50, 5), Some(Rgba8::BLACK));
}

#[test]
fn line_width_controls_thickness() {
    let mut c = Canvas::transparent(20, 20).unwrap();
    paint_shape(
        &mut c,
        &Shape::line(Point::new(2.0, 10.0), Point::new(18.0, 10.0), Rgba8::BLACK, 2.0),
    );
    for y in 0..20 {
        let expected = y == 9 || y == 10;
        assert_eq!(c.pixel(10, y).unwrap().a != 0, expected, "row {y}");
    }
}

#[test]
fn arc_angles_are_half_open() {
    let arc = ArcSampling {
        center: Point::new(0.0, 0.0),
        radius: 1.0,
        start_deg: -90.0,
        end_deg: 150.0,
        step_deg: 2.0,
        dot_radius: 4.0,
    };
    let angles = arc.angles_deg();
    assert_eq!(angles.len(), 120);
    assert_eq!(angles[0], -90.0);
    assert_eq!(*angles.last().unwrap(), 148.0);

    let none = ArcSampling {
        step_deg: 0.0,
        ..arc
    };
    assert!(none.angles_deg().is_empty());
}

#[test]
fn arcs_with_too_many_samples_are_rejected() {
    let arc = ArcSampling {
        center: Point::new(8.0, 8.0),
        radius: 4.0,
        start_deg: 0.0,
        end_deg: 360.0,
        step_deg: 1e-9,
        dot_radius: 1.0,
    };
    assert!(arc.angles_deg().is_empty());
    let shape = Shape::SampledArc {
        arc,
        color: Rgba8::WHITE,
    };
    let err = shape.validate().unwrap_err();
    assert!(err.to_string().contains("samples"), "{err}");

    let mut c = Canvas::transparent(16, 16).unwrap();
    paint_shape(&mut c, &shape);
    assert!(c.image().pixels().all(|p| p.0[3] == 0));

    let at_limit = ArcSampling {
        end_deg: MAX_ARC_SAMPLES as f64,
        step_deg: 1.0,
        ..arc
    };
    assert_eq!(at_limit.angles_deg().len(), MAX_ARC_SAMPLES);
}

#[test]
fn sampled_arc_paints_start_and_skips_past_end() {
    let color = Rgba8::rgb(76, 175, 80);
    let mut c = Canvas::transparent(200, 200).unwrap();
    let arc = ArcSampling {
        center: Point::new(100.0, 100.0),
        radius: 60.0,
        start_deg: -90.0,
        end_deg: 0.0,
        step_deg: 2.0,
        dot_radius: 4.0,
    };
    paint_arc_by_sampling(&mut c, &arc, color);

    // -90 degrees is straight up.
    assert_eq!(c.pixel(100, 40), Some(color));
    // +90 degrees (straight down) is outside the arc.
    assert_eq!(c.pixel(100, 160), Some(Rgba8::TRANSPARENT));
    // The arc center is never painted.
    assert_eq!(c.pixel(100, 100), Some(Rgba8::TRANSPARENT));
}

#[test]
fn translucent_arc_keeps_its_alpha() {
    let color = Rgba8::rgba(76, 175, 80, 77);
    let mut c = Canvas::transparent(200, 200).unwrap();
    let arc = ArcSampling {
        center: Point::new(100.0, 100.0),
        radius: 60.0,
        start_deg: 0.0,
        end_deg: 360.0,
        step_deg: 2.0,
        dot_radius: 4.0,
    };
    paint_shape(&mut c, &Shape::SampledArc { arc, color });
    assert!(c.image().pixels().all(|p| p.0[3] == 0 || p.0 == color.to_array()));
    assert_eq!(c.pixel(160, 100), Some(color));
}

#[test]
fn validate_rejects_bad_geometry() {
    assert!(Shape::disc(Point::new(1.0, 1.0), -1.0, Rgba8::WHITE).validate().is_err());
    assert!(
        Shape::Polyline {
            points: vec![Point::new(0.0, 0.0)],
            color: Rgba8::BLACK,
            width: 1.0
        }
        .validate()
        .is_err()
    );
    assert!(
        Shape::line(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0), Rgba8::BLACK, 1.0)
            .validate()
            .is_err()
    );
    assert!(Shape::ring(Point::new(5.0, 5.0), 4.0, 1.0, Rgba8::BLACK).validate().is_ok());
}

#[test]
fn shapes_roundtrip_through_json() {
    let s = Shape::ring(Point::new(256.0, 206.0), 40.0, 6.0, Rgba8::rgb(76, 175, 80));
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["kind"], "ellipse");
    let back: Shape = serde_json::from_value(v).unwrap();
    assert_eq!(back, s);
}
