//! Aliased shape rasterization.
//!
//! Pixel `(x, y)` covers `[x, x+1) × [y, y+1)`. A pixel belongs to a filled
//! region when its center `(x + 0.5, y + 0.5)` does. Every shape is painted
//! as the union of its parts, so each pixel is composited at most once per
//! shape and translucent colors do not accumulate where parts overlap.

use std::ops::Range;

use crate::{
    foundation::core::{Line, Point, Rect, Rgba8, Vec2},
    foundation::error::{SplashError, SplashResult},
    foundation::math::radians,
    raster::canvas::Canvas,
};

/// Outline paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: Rgba8,
    /// Stroke width in pixels, measured inward from the shape edge.
    pub width: f64,
}

/// Upper bound on the number of discs one sampled arc may stamp.
pub const MAX_ARC_SAMPLES: usize = 10_000;

/// Parameters of an arc approximated by stamping discs at fixed angular steps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcSampling {
    pub center: Point,
    pub radius: f64,
    /// Inclusive start angle in degrees (0° points along +x, 90° along +y).
    pub start_deg: f64,
    /// Exclusive end angle in degrees.
    pub end_deg: f64,
    pub step_deg: f64,
    /// Radius of each stamped disc.
    pub dot_radius: f64,
}

impl ArcSampling {
    /// Sampled angles, `start + k * step` for every `k` with angle `< end`.
    ///
    /// A non-positive or non-finite step yields no samples, as does an arc
    /// needing more than [`MAX_ARC_SAMPLES`].
    pub fn angles_deg(&self) -> Vec<f64> {
        let Some(n) = self.sample_count() else {
            return Vec::new();
        };
        (0..n)
            .map(|k| self.start_deg + (k as f64) * self.step_deg)
            .filter(|a| *a < self.end_deg)
            .collect()
    }

    /// Number of sampled angles, or `None` when the step is unusable or the
    /// count exceeds [`MAX_ARC_SAMPLES`].
    fn sample_count(&self) -> Option<usize> {
        let finite = self.step_deg.is_finite() && self.start_deg.is_finite() && self.end_deg.is_finite();
        if !finite || self.step_deg <= 0.0 {
            return None;
        }
        if self.end_deg <= self.start_deg {
            return Some(0);
        }
        let n = ((self.end_deg - self.start_deg) / self.step_deg).ceil();
        (n <= MAX_ARC_SAMPLES as f64).then_some(n as usize)
    }

    /// Disc centers on the arc, `center + radius * (cos θ, sin θ)`.
    pub fn sample_points(&self) -> Vec<Point> {
        self.angles_deg()
            .into_iter()
            .map(|deg| {
                let t = radians(deg);
                self.center + Vec2::new(t.cos(), t.sin()) * self.radius
            })
            .collect()
    }
}

/// A paintable primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle covering `[x0, x1) × [y0, y1)`.
    Rect { rect: Rect, fill: Rgba8 },
    /// Rectangle with corners approximated by a core cross plus four corner discs.
    RoundedRect { rect: Rect, radius: f64, fill: Rgba8 },
    /// Filled and/or stroked axis-aligned ellipse.
    Ellipse {
        center: Point,
        radii: Vec2,
        #[serde(default)]
        fill: Option<Rgba8>,
        #[serde(default)]
        stroke: Option<Stroke>,
    },
    Line { line: Line, color: Rgba8, width: f64 },
    /// Open sequence of segments sharing one stroke.
    Polyline {
        points: Vec<Point>,
        color: Rgba8,
        width: f64,
    },
    SampledArc { arc: ArcSampling, color: Rgba8 },
}

impl Shape {
    /// Filled disc.
    pub fn disc(center: Point, radius: f64, fill: Rgba8) -> Self {
        Self::Ellipse {
            center,
            radii: Vec2::new(radius, radius),
            fill: Some(fill),
            stroke: None,
        }
    }

    /// Circle outline of `width` pixels, drawn inside `radius`.
    pub fn ring(center: Point, radius: f64, width: f64, color: Rgba8) -> Self {
        Self::Ellipse {
            center,
            radii: Vec2::new(radius, radius),
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn line(p0: Point, p1: Point, color: Rgba8, width: f64) -> Self {
        Self::Line {
            line: Line::new(p0, p1),
            color,
            width,
        }
    }

    /// Reject non-finite coordinates and negative sizes.
    pub fn validate(&self) -> SplashResult<()> {
        fn finite(name: &str, vals: &[f64]) -> SplashResult<()> {
            if vals.iter().all(|v| v.is_finite()) {
                Ok(())
            } else {
                Err(SplashError::validation(format!(
                    "{name} coordinates must be finite"
                )))
            }
        }
        fn non_negative(name: &str, field: &str, v: f64) -> SplashResult<()> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(SplashError::validation(format!(
                    "{name} {field} must be finite and >= 0"
                )))
            }
        }

        match self {
            Self::Rect { rect, .. } => finite("rect", &[rect.x0, rect.y0, rect.x1, rect.y1]),
            Self::RoundedRect { rect, radius, .. } => {
                finite("rounded_rect", &[rect.x0, rect.y0, rect.x1, rect.y1])?;
                non_negative("rounded_rect", "radius", *radius)
            }
            Self::Ellipse {
                center,
                radii,
                stroke,
                ..
            } => {
                finite("ellipse", &[center.x, center.y])?;
                non_negative("ellipse", "radii.x", radii.x)?;
                non_negative("ellipse", "radii.y", radii.y)?;
                match stroke {
                    Some(s) => non_negative("ellipse", "stroke.width", s.width),
                    None => Ok(()),
                }
            }
            Self::Line { line, width, .. } => {
                finite("line", &[line.p0.x, line.p0.y, line.p1.x, line.p1.y])?;
                non_negative("line", "width", *width)
            }
            Self::Polyline { points, width, .. } => {
                if points.len() < 2 {
                    return Err(SplashError::validation(
                        "polyline needs at least two points",
                    ));
                }
                let coords: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
                finite("polyline", &coords)?;
                non_negative("polyline", "width", *width)
            }
            Self::SampledArc { arc, .. } => {
                finite(
                    "sampled_arc",
                    &[arc.center.x, arc.center.y, arc.start_deg, arc.end_deg],
                )?;
                non_negative("sampled_arc", "radius", arc.radius)?;
                non_negative("sampled_arc", "dot_radius", arc.dot_radius)?;
                if !arc.step_deg.is_finite() || arc.step_deg <= 0.0 {
                    return Err(SplashError::validation(
                        "sampled_arc step_deg must be finite and > 0",
                    ));
                }
                if arc.sample_count().is_none() {
                    return Err(SplashError::validation(format!(
                        "sampled_arc needs more than {MAX_ARC_SAMPLES} samples"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// Composite `shape` onto `canvas`. Parts outside the canvas are clipped.
pub fn paint_shape(canvas: &mut Canvas, shape: &Shape) {
    match shape {
        Shape::Rect { rect, fill } => {
            let r = rect.abs();
            paint_region(canvas, r, *fill, |p| {
                p.x >= r.x0 && p.x < r.x1 && p.y >= r.y0 && p.y < r.y1
            });
        }
        Shape::RoundedRect { rect, radius, fill } => paint_rounded_rect(canvas, *rect, *radius, *fill),
        Shape::Ellipse {
            center,
            radii,
            fill,
            stroke,
        } => paint_ellipse(canvas, *center, *radii, *fill, *stroke),
        Shape::Line { line, color, width } => {
            paint_polyline(canvas, &[line.p0, line.p1], *color, *width);
        }
        Shape::Polyline {
            points,
            color,
            width,
        } => paint_polyline(canvas, points, *color, *width),
        Shape::SampledArc { arc, color } => paint_arc_by_sampling(canvas, arc, *color),
    }
}

/// Stamp a filled disc at every sampled angle of `arc`.
///
/// The result is a stippled arc whose density is set by `step_deg`. Stamps
/// are painted as one union.
pub fn paint_arc_by_sampling(canvas: &mut Canvas, arc: &ArcSampling, color: Rgba8) {
    let centers = arc.sample_points();
    if centers.is_empty() || arc.dot_radius.is_nan() || arc.dot_radius <= 0.0 {
        tracing::debug!(step_deg = arc.step_deg, "sampled arc has no stamps");
        return;
    }
    let r = arc.dot_radius;
    let r2 = r * r;
    let bounds = centers
        .iter()
        .map(|c| Rect::from_center_size(*c, (2.0 * r, 2.0 * r)))
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO);

    paint_region(canvas, bounds, color, |p| {
        centers.iter().any(|c| (p - *c).hypot2() <= r2)
    });
}

fn paint_rounded_rect(canvas: &mut Canvas, rect: Rect, radius: f64, fill: Rgba8) {
    let r = rect.abs();
    let radius = radius.max(0.0).min(r.width() / 2.0).min(r.height() / 2.0);
    let core_h = Rect::new(r.x0, r.y0 + radius, r.x1, r.y1 - radius);
    let core_v = Rect::new(r.x0 + radius, r.y0, r.x1 - radius, r.y1);
    let corners = [
        Point::new(r.x0 + radius, r.y0 + radius),
        Point::new(r.x1 - radius, r.y0 + radius),
        Point::new(r.x0 + radius, r.y1 - radius),
        Point::new(r.x1 - radius, r.y1 - radius),
    ];
    let r2 = radius * radius;

    paint_region(canvas, r, fill, |p| {
        let in_rect = |q: &Rect| p.x >= q.x0 && p.x < q.x1 && p.y >= q.y0 && p.y < q.y1;
        in_rect(&core_h)
            || in_rect(&core_v)
            || (radius > 0.0 && corners.iter().any(|c| (p - *c).hypot2() <= r2))
    });
}

fn paint_ellipse(
    canvas: &mut Canvas,
    center: Point,
    radii: Vec2,
    fill: Option<Rgba8>,
    stroke: Option<Stroke>,
) {
    if radii.x.is_nan() || radii.y.is_nan() || radii.x <= 0.0 || radii.y <= 0.0 {
        return;
    }
    let inside = |p: Point, rx: f64, ry: f64| {
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (p.x - center.x) / rx;
        let dy = (p.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    };
    let inner = stroke.map(|s| (radii.x - s.width, radii.y - s.width));

    let (xs, ys) = ellipse_spans(center, radii);
    let xs = clip(xs, canvas.width());
    let ys = clip(ys, canvas.height());
    for y in ys {
        for x in xs.clone() {
            let p = pixel_center(x, y);
            if !inside(p, radii.x, radii.y) {
                continue;
            }
            let in_ring = match inner {
                Some((irx, iry)) => !inside(p, irx, iry),
                None => false,
            };
            let color = match (in_ring, stroke, fill) {
                (true, Some(s), _) => Some(s.color),
                (false, _, Some(f)) => Some(f),
                _ => None,
            };
            if let Some(c) = color {
                canvas.blend_pixel(x, y, c);
            }
        }
    }
}

fn paint_polyline(canvas: &mut Canvas, points: &[Point], color: Rgba8, width: f64) {
    if points.len() < 2 {
        return;
    }
    let half = (width / 2.0).max(0.5);
    let bounds = points
        .iter()
        .map(|p| Rect::from_points(*p, *p))
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO)
        .inflate(half, half);
    let segments: Vec<Line> = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
    let half2 = half * half;

    paint_region(canvas, bounds, color, |p| {
        segments
            .iter()
            .any(|s| segment_distance_sq(p, *s) <= half2)
    });
}

/// Composite `color` on every pixel inside `bounds` whose center satisfies `contains`.
fn paint_region(canvas: &mut Canvas, bounds: Rect, color: Rgba8, contains: impl Fn(Point) -> bool) {
    let xs = clip(center_span(bounds.x0, bounds.x1), canvas.width());
    let ys = clip(center_span(bounds.y0, bounds.y1), canvas.height());
    for y in ys {
        for x in xs.clone() {
            if contains(pixel_center(x, y)) {
                canvas.blend_pixel(x, y, color);
            }
        }
    }
}

/// Pixel indices of an ellipse, restricted to `[c - r, c + r]` on each axis.
fn ellipse_spans(center: Point, radii: Vec2) -> (Range<i64>, Range<i64>) {
    let span = |c: f64, r: f64| ((c - r).ceil() as i64)..((c + r).floor() as i64 + 1);
    (span(center.x, radii.x), span(center.y, radii.y))
}

/// Pixel indices whose centers may fall in `[lo, hi]`.
fn center_span(lo: f64, hi: f64) -> Range<i64> {
    ((lo - 0.5).floor() as i64)..((hi - 0.5).ceil() as i64 + 1)
}

fn clip(r: Range<i64>, len: u32) -> Range<i64> {
    r.start.max(0)..r.end.min(i64::from(len))
}

fn pixel_center(x: i64, y: i64) -> Point {
    Point::new(x as f64 + 0.5, y as f64 + 0.5)
}

fn segment_distance_sq(p: Point, seg: Line) -> f64 {
    let d = seg.p1 - seg.p0;
    let len2 = d.hypot2();
    let t = if len2 > 0.0 {
        ((p - seg.p0).dot(d) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (p - (seg.p0 + d * t)).hypot2()
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shape.rs"]
mod tests;
