use crate::{
    foundation::core::{CanvasSize, ColorMode, Rgba8},
    foundation::error::{SplashError, SplashResult},
    raster::canvas::Canvas,
    raster::glyph::{FontProbe, GlyphSpec, draw_glyph},
    raster::gradient::{Gradient, render_gradient_canvas},
    raster::shape::{Shape, paint_shape},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Initial canvas contents.
pub enum Background {
    /// Fully transparent. RGB canvases become opaque black.
    Transparent,
    /// Uniform color.
    Solid { color: Rgba8 },
    /// Vertical gradient, one color per scanline.
    Gradient { stops: Gradient },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
/// One paint step. Layers paint in order, later layers on top.
pub enum Layer {
    Shape(Shape),
    Glyph(GlyphSpec),
}

impl From<Shape> for Layer {
    fn from(s: Shape) -> Self {
        Self::Shape(s)
    }
}

impl From<GlyphSpec> for Layer {
    fn from(g: GlyphSpec) -> Self {
        Self::Glyph(g)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fixed icon design: canvas, background and ordered layers.
///
/// Layouts are plain data. They can be built in code (see
/// [`crate::Preset`]) or loaded from JSON, and turned into pixels with
/// [`Layout::compose`].
pub struct Layout {
    /// Output canvas dimensions.
    pub size: CanvasSize,
    /// Channel depth of the serialized image.
    #[serde(default)]
    pub mode: ColorMode,
    pub background: Background,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Layout {
    pub fn new(size: CanvasSize, mode: ColorMode, background: Background) -> Self {
        Self {
            size,
            mode,
            background,
            layers: Vec::new(),
        }
    }

    /// Append a layer.
    pub fn layer(mut self, layer: impl Into<Layer>) -> Self {
        self.layers.push(layer.into());
        self
    }

    /// Append several layers.
    pub fn layers(mut self, layers: impl IntoIterator<Item = impl Into<Layer>>) -> Self {
        self.layers.extend(layers.into_iter().map(Into::into));
        self
    }

    pub fn validate(&self) -> SplashResult<()> {
        CanvasSize::new(self.size.width, self.size.height)?;

        for (i, layer) in self.layers.iter().enumerate() {
            match layer {
                Layer::Shape(s) => s
                    .validate()
                    .map_err(|e| SplashError::validation(format!("layer {i}: {e}")))?,
                Layer::Glyph(g) => {
                    if !g.center.x.is_finite() || !g.center.y.is_finite() {
                        return Err(SplashError::validation(format!(
                            "layer {i}: glyph center must be finite"
                        )));
                    }
                    if !g.size_px.is_finite() || g.size_px <= 0.0 {
                        return Err(SplashError::validation(format!(
                            "layer {i}: glyph size_px must be finite and > 0"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Paint the background and every layer onto a fresh canvas.
    #[tracing::instrument(skip_all, fields(width = self.size.width, height = self.size.height, layers = self.layers.len()))]
    pub fn compose(&self, fonts: &FontProbe) -> SplashResult<Canvas> {
        self.validate()?;

        let CanvasSize { width, height } = self.size;
        let mut canvas = match &self.background {
            Background::Transparent => Canvas::new(width, height, self.mode, Rgba8::TRANSPARENT)?,
            Background::Solid { color } => Canvas::new(width, height, self.mode, *color)?,
            Background::Gradient { stops } => render_gradient_canvas(width, height, stops, self.mode)?,
        };

        for layer in &self.layers {
            match layer {
                Layer::Shape(shape) => paint_shape(&mut canvas, shape),
                Layer::Glyph(glyph) => {
                    let rendering = draw_glyph(&mut canvas, glyph, fonts)?;
                    tracing::debug!(?rendering, "glyph drawn");
                }
            }
        }
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
