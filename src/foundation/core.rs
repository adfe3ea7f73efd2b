use crate::foundation::error::{SplashError, SplashResult};

pub use kurbo::{Line, Point, Rect, Vec2};

/// Largest canvas accepted, in pixels (256 MiB of RGBA8).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Create a validated size with both dimensions `> 0` and at most
    /// [`MAX_CANVAS_PIXELS`] pixels.
    pub fn new(width: u32, height: u32) -> SplashResult<Self> {
        if width == 0 || height == 0 {
            return Err(SplashError::validation(format!(
                "canvas width/height must be > 0 (got {width}x{height})"
            )));
        }
        let size = Self { width, height };
        if size.pixel_count() > MAX_CANVAS_PIXELS {
            return Err(SplashError::validation(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_PIXELS} pixels"
            )));
        }
        Ok(size)
    }

    /// Square canvas.
    pub fn square(side: u32) -> SplashResult<Self> {
        Self::new(side, side)
    }

    /// Canvas center in pixel-edge coordinates (`w/2`, `h/2`, integer division).
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }

    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Channel depth of the serialized image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Opaque, 3 channels. Alpha is dropped on serialization.
    #[default]
    Rgb,
    /// Straight (non-premultiplied) alpha, 4 channels.
    Rgba,
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<image::Rgba<u8>> for Rgba8 {
    fn from(px: image::Rgba<u8>) -> Self {
        Self::from_array(px.0)
    }
}

impl From<Rgba8> for image::Rgba<u8> {
    fn from(c: Rgba8) -> Self {
        image::Rgba(c.to_array())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
