use crate::{
    foundation::core::{CanvasSize, ColorMode, Rgba8},
    foundation::error::SplashResult,
    raster::composite,
};

/// Owned pixel buffer being composed before serialization.
///
/// Pixels are stored as straight-alpha RGBA8 regardless of [`ColorMode`]; RGB
/// canvases start opaque and drop alpha when encoded.
#[derive(Clone, Debug)]
pub struct Canvas {
    mode: ColorMode,
    pixels: image::RgbaImage,
}

impl Canvas {
    /// Allocate a canvas filled with `fill`.
    ///
    /// RGB canvases force `fill` opaque.
    pub fn new(width: u32, height: u32, mode: ColorMode, fill: Rgba8) -> SplashResult<Self> {
        let size = CanvasSize::new(width, height)?;
        let fill = match mode {
            ColorMode::Rgb => fill.with_alpha(255),
            ColorMode::Rgba => fill,
        };
        Ok(Self {
            mode,
            pixels: image::RgbaImage::from_pixel(size.width, size.height, fill.into()),
        })
    }

    /// Transparent RGBA canvas.
    pub fn transparent(width: u32, height: u32) -> SplashResult<Self> {
        Self::new(width, height, ColorMode::Rgba, Rgba8::TRANSPARENT)
    }

    pub(crate) fn from_image(pixels: image::RgbaImage, mode: ColorMode) -> Self {
        Self { mode, pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn image(&self) -> &image::RgbaImage {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(Rgba8::from(*self.pixels.get_pixel(x, y)))
    }

    /// Pixel at the canvas center (`w/2`, `h/2`).
    #[cfg(test)]
    pub(crate) fn center_pixel(&self) -> Rgba8 {
        Rgba8::from(*self.pixels.get_pixel(self.width() / 2, self.height() / 2))
    }

    /// Overwrite an entire scanline. Rows outside the canvas are ignored.
    pub fn fill_row(&mut self, y: u32, color: Rgba8) {
        if y >= self.height() {
            return;
        }
        let color = self.clamp_mode(color);
        for x in 0..self.width() {
            self.pixels.put_pixel(x, y, color.into());
        }
    }

    /// Composite `color` over the pixel at `(x, y)`; coordinates outside the
    /// canvas are clipped silently.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        self.blend_pixel_with_opacity(x, y, color, 1.0);
    }

    pub(crate) fn blend_pixel_with_opacity(&mut self, x: i64, y: i64, color: Rgba8, opacity: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width() || y >= self.height() {
            return;
        }
        let px = self.pixels.get_pixel_mut(x, y);
        if color.is_opaque() && opacity >= 1.0 {
            px.0 = color.to_array();
            return;
        }
        let out = composite::over(px.0, color.to_array(), opacity);
        px.0 = match self.mode {
            ColorMode::Rgb => [out[0], out[1], out[2], 255],
            ColorMode::Rgba => out,
        };
    }

    /// Number of pixels that differ from `other`. Sizes must match.
    #[cfg(test)]
    pub(crate) fn diff_count(&self, other: &Canvas) -> Option<usize> {
        if self.size() != other.size() {
            return None;
        }
        Some(
            self.pixels
                .pixels()
                .zip(other.pixels.pixels())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    fn clamp_mode(&self, color: Rgba8) -> Rgba8 {
        match self.mode {
            ColorMode::Rgb => color.with_alpha(255),
            ColorMode::Rgba => color,
        }
    }
}
