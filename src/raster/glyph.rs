use std::path::{Path, PathBuf};

use ab_glyph::{Font as _, FontVec, PxScale, point};

use crate::{
    foundation::core::{Point, Rgba8, Vec2},
    foundation::error::{SplashError, SplashResult},
    raster::canvas::Canvas,
    raster::shape::{Shape, paint_shape},
};

/// Environment variable naming a font file probed before the built-in candidates.
pub const FONT_ENV_VAR: &str = "SPLASHGEN_FONT";

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphStrategy {
    /// Rasterize from a probed font, falling back to vector line art.
    #[default]
    FontOrVector,
    /// Always draw the vector line art.
    VectorOnly,
}

/// A single character drawn centered on `center`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphSpec {
    pub center: Point,
    #[serde(default = "default_glyph_char")]
    pub ch: char,
    #[serde(default = "default_glyph_size")]
    pub size_px: f32,
    pub color: Rgba8,
    #[serde(default)]
    pub strategy: GlyphStrategy,
}

fn default_glyph_char() -> char {
    '₩'
}

fn default_glyph_size() -> f32 {
    48.0
}

impl GlyphSpec {
    /// Won sign at the default size.
    pub fn won(center: Point, color: Rgba8, strategy: GlyphStrategy) -> Self {
        Self {
            center,
            ch: default_glyph_char(),
            size_px: default_glyph_size(),
            color,
            strategy,
        }
    }
}

/// How a glyph ended up on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlyphRendering {
    Font(PathBuf),
    Vector,
}

/// Ordered list of font files tried for glyph rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontProbe {
    candidates: Vec<PathBuf>,
}

impl FontProbe {
    /// `$SPLASHGEN_FONT` (when set) followed by well-known OS font paths.
    pub fn system() -> Self {
        let mut candidates = Vec::new();
        if let Some(p) = std::env::var_os(FONT_ENV_VAR).filter(|v| !v.is_empty()) {
            candidates.push(PathBuf::from(p));
        }
        candidates.extend(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
        Self { candidates }
    }

    pub fn with_candidates(candidates: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Probe nothing; every glyph uses the vector fallback.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that loads and contains `ch`.
    pub fn resolve(&self, ch: char) -> SplashResult<LoadedFont> {
        let mut last_err = None;
        for path in &self.candidates {
            match LoadedFont::load(path, ch) {
                Ok(font) => return Ok(font),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "font candidate rejected");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| SplashError::missing_font("no font candidates configured")))
    }
}

pub struct LoadedFont {
    path: PathBuf,
    font: FontVec,
}

impl LoadedFont {
    fn load(path: &Path, ch: char) -> SplashResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| SplashError::missing_font(format!("read '{}': {e}", path.display())))?;
        let font = FontVec::try_from_vec_and_index(bytes, 0)
            .map_err(|e| SplashError::missing_font(format!("parse '{}': {e}", path.display())))?;
        if font.glyph_id(ch).0 == 0 {
            return Err(SplashError::missing_font(format!(
                "'{}' has no glyph for {ch:?}",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
            font,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Draw `spec` onto `canvas`, preferring a probed font and degrading to
/// vector line art when no usable font is found.
///
/// Only recoverable font errors trigger the fallback; anything else is returned.
pub fn draw_glyph(
    canvas: &mut Canvas,
    spec: &GlyphSpec,
    fonts: &FontProbe,
) -> SplashResult<GlyphRendering> {
    if spec.strategy == GlyphStrategy::FontOrVector {
        match fonts.resolve(spec.ch) {
            Ok(font) => {
                if rasterize(canvas, &font, spec) {
                    return Ok(GlyphRendering::Font(font.path().to_path_buf()));
                }
                tracing::warn!(ch = ?spec.ch, path = %font.path().display(), "glyph has no outline, using vector fallback");
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "glyph font unavailable, using vector fallback");
            }
            Err(e) => return Err(e),
        }
    }

    for shape in vector_won(spec.center, spec.color) {
        paint_shape(canvas, &shape);
    }
    Ok(GlyphRendering::Vector)
}

fn rasterize(canvas: &mut Canvas, font: &LoadedFont, spec: &GlyphSpec) -> bool {
    let glyph = font
        .font
        .glyph_id(spec.ch)
        .with_scale_and_position(PxScale::from(spec.size_px), point(0.0, 0.0));
    let Some(outlined) = font.font.outline_glyph(glyph) else {
        return false;
    };

    // Middle/middle anchor on the glyph's pixel bounds.
    let bounds = outlined.px_bounds();
    let left = (spec.center.x as f32 - (bounds.max.x - bounds.min.x) / 2.0).round() as i64;
    let top = (spec.center.y as f32 - (bounds.max.y - bounds.min.y) / 2.0).round() as i64;
    outlined.draw(|x, y, coverage| {
        canvas.blend_pixel_with_opacity(
            left + i64::from(x),
            top + i64::from(y),
            spec.color,
            coverage,
        );
    });
    true
}

/// Won sign as line art: a "W" polyline with two horizontal bars.
pub(crate) fn vector_won(center: Point, color: Rgba8) -> Vec<Shape> {
    let at = |dx: f64, dy: f64| center + Vec2::new(dx, dy);
    vec![
        Shape::Polyline {
            points: vec![
                at(-25.0, -20.0),
                at(-15.0, 10.0),
                at(0.0, -5.0),
                at(15.0, 10.0),
                at(25.0, -20.0),
            ],
            color,
            width: 4.0,
        },
        Shape::line(at(-30.0, -10.0), at(30.0, -10.0), color, 2.0),
        Shape::line(at(-30.0, 0.0), at(30.0, 0.0), color, 2.0),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/glyph.rs"]
mod tests;
