use crate::{
    foundation::core::{CanvasSize, ColorMode, Rgba8},
    foundation::error::{SplashError, SplashResult},
    foundation::math::lerp_channel,
    raster::canvas::Canvas,
};

/// Gradient control point: a position ratio paired with a color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    /// Position in `[0, 1]` along the gradient axis.
    pub offset: f64,
    pub color: Rgba8,
}

impl ColorStop {
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Vertical linear gradient over an ordered, non-empty list of stops.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<ColorStop>", into = "Vec<ColorStop>")]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Create a validated gradient: at least one stop, offsets finite, inside
    /// `[0, 1]` and non-decreasing.
    pub fn new(stops: Vec<ColorStop>) -> SplashResult<Self> {
        if stops.is_empty() {
            return Err(SplashError::validation("gradient needs at least one stop"));
        }
        for (i, s) in stops.iter().enumerate() {
            if !s.offset.is_finite() || !(0.0..=1.0).contains(&s.offset) {
                return Err(SplashError::validation(format!(
                    "gradient stop {i} offset must be finite and in [0, 1] (got {})",
                    s.offset
                )));
            }
        }
        if let Some(i) = stops.windows(2).position(|w| w[1].offset < w[0].offset) {
            return Err(SplashError::validation(format!(
                "gradient stop offsets must be non-decreasing (stop {} < stop {i})",
                i + 1
            )));
        }
        Ok(Self { stops })
    }

    /// Two-stop gradient from `from` at 0 to `to` at 1.
    pub fn linear(from: Rgba8, to: Rgba8) -> Self {
        Self {
            stops: vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `ratio`.
    ///
    /// Ratios before the first stop or after the last stop take that stop's
    /// color; between two stops every channel (alpha included) is interpolated
    /// linearly and truncated.
    pub fn sample(&self, ratio: f64) -> Rgba8 {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if self.stops.len() == 1 || ratio <= first.offset {
            return first.color;
        }
        if ratio >= last.offset {
            return last.color;
        }

        for w in self.stops.windows(2) {
            let (a, b) = (w[0], w[1]);
            if ratio < a.offset || ratio >= b.offset {
                continue;
            }
            let span = b.offset - a.offset;
            let t = (ratio - a.offset) / span;
            return Rgba8::rgba(
                lerp_channel(a.color.r, b.color.r, t),
                lerp_channel(a.color.g, b.color.g, t),
                lerp_channel(a.color.b, b.color.b, t),
                lerp_channel(a.color.a, b.color.a, t),
            );
        }
        last.color
    }
}

impl TryFrom<Vec<ColorStop>> for Gradient {
    type Error = SplashError;

    fn try_from(stops: Vec<ColorStop>) -> SplashResult<Self> {
        Self::new(stops)
    }
}

impl From<Gradient> for Vec<ColorStop> {
    fn from(g: Gradient) -> Self {
        g.stops
    }
}

/// Fill a new canvas one scanline at a time with `gradient` sampled at
/// `ratio = y / height`. There is no horizontal variation.
pub fn render_gradient_canvas(
    width: u32,
    height: u32,
    gradient: &Gradient,
    mode: ColorMode,
) -> SplashResult<Canvas> {
    let size = CanvasSize::new(width, height)?;
    let mut canvas = Canvas::new(size.width, size.height, mode, gradient.sample(0.0))?;
    paint_gradient(&mut canvas, gradient);
    Ok(canvas)
}

/// Overwrite every scanline of `canvas` with `gradient`.
pub(crate) fn paint_gradient(canvas: &mut Canvas, gradient: &Gradient) {
    let height = canvas.height();
    for y in 0..height {
        let ratio = f64::from(y) / f64::from(height);
        canvas.fill_row(y, gradient.sample(ratio));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/gradient.rs"]
mod tests;
