//! Built-in asset designs.
//!
//! Geometry is expressed relative to the canvas center `c`. Each preset
//! produces every file the corresponding asset family needs.

use std::path::PathBuf;

use crate::{
    foundation::core::{CanvasSize, ColorMode, Point, Rect, Rgba8, Vec2},
    foundation::error::{SplashError, SplashResult},
    layout::model::{Background, Layout},
    raster::glyph::{GlyphSpec, GlyphStrategy},
    raster::gradient::{ColorStop, Gradient},
    raster::shape::{ArcSampling, Shape},
};

/// App brand colors.
pub mod palette {
    use crate::foundation::core::Rgba8;

    /// `#4CAF50`
    pub const GREEN: Rgba8 = Rgba8::rgb(76, 175, 80);
    /// `#66BB6A`
    pub const GREEN_LIGHT: Rgba8 = Rgba8::rgb(102, 187, 106);
    /// `#81C784`
    pub const GREEN_LIGHTER: Rgba8 = Rgba8::rgb(129, 199, 132);
    pub const WHITE: Rgba8 = Rgba8::WHITE;
    /// Progress track, `GREEN` at 30% opacity.
    pub const GREEN_TRACK: Rgba8 = GREEN.with_alpha(77);
}

pub const SPLASH_LOGO_PATH: &str = "assets/icons/splash_logo.png";
pub const SPLASH_LOGO_ANDROID12_PATH: &str = "assets/icons/splash_logo_android12.png";
pub const SPLASH_LOGO_LARGE_PATH: &str = "assets/icons/splash_logo_large.png";
pub const SPLASH_BACKGROUND_PATH: &str = "assets/icons/splash_background.png";
pub const LAUNCH_BACKGROUND_PATH: &str =
    "ios/Runner/Assets.xcassets/LaunchBackground.imageset/background.png";

/// One file produced by a preset.
///
/// This is also the shape `splashgen dump` prints, so a dumped entry can be
/// rendered back as is.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputSpec {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub layout: Layout,
    /// Resample the composed canvas to this size before writing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize: Option<CanvasSize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Gradient splash icon with a font-rendered Won sign, plus the Android 12 variant.
    SplashIcon,
    /// 1×1 iOS launch background.
    LaunchBackground,
    /// Full-screen vertical gradient.
    SplashBackground,
    /// Transparent splash logo with progress ring, plus a 1024×1024 copy.
    SplashLogo,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::SplashIcon,
        Preset::LaunchBackground,
        Preset::SplashBackground,
        Preset::SplashLogo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SplashIcon => "splash-icon",
            Self::LaunchBackground => "launch-background",
            Self::SplashBackground => "splash-background",
            Self::SplashLogo => "splash-logo",
        }
    }

    /// Every output of this preset, in write order.
    pub fn outputs(self) -> SplashResult<Vec<OutputSpec>> {
        match self {
            Self::SplashIcon => Ok(vec![
                output(SPLASH_LOGO_PATH, splash_icon()?),
                output(SPLASH_LOGO_ANDROID12_PATH, splash_icon_android12()?),
            ]),
            Self::LaunchBackground => Ok(vec![output(LAUNCH_BACKGROUND_PATH, launch_background()?)]),
            Self::SplashBackground => Ok(vec![output(SPLASH_BACKGROUND_PATH, splash_background()?)]),
            Self::SplashLogo => {
                let logo = splash_logo()?;
                Ok(vec![
                    output(SPLASH_LOGO_PATH, logo.clone()),
                    OutputSpec {
                        path: PathBuf::from(SPLASH_LOGO_LARGE_PATH),
                        layout: logo,
                        resize: Some(CanvasSize::square(1024)?),
                    },
                ])
            }
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = SplashError;

    fn from_str(s: &str) -> SplashResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SplashError::validation(format!("unknown preset '{s}'")))
    }
}

fn output(path: &str, layout: Layout) -> OutputSpec {
    OutputSpec {
        path: PathBuf::from(path),
        layout,
        resize: None,
    }
}

/// Three chart bars with rounded corners.
struct Bars {
    width: f64,
    x_offsets: [f64; 3],
    heights: [f64; 3],
    /// Vertical offset of the bars' common middle line from `c`.
    baseline: f64,
}

impl Bars {
    fn shapes(&self, c: Point) -> impl Iterator<Item = Shape> + '_ {
        let colors = [palette::GREEN, palette::GREEN_LIGHT, palette::GREEN_LIGHTER];
        (0..3).map(move |i| {
            let x = c.x + self.x_offsets[i];
            let h = self.heights[i];
            let y = c.y + self.baseline - (h / 2.0).floor();
            Shape::RoundedRect {
                rect: Rect::new(x, y, x + self.width, y + h),
                radius: 5.0,
                fill: colors[i],
            }
        })
    }
}

const ICON_BARS: Bars = Bars {
    width: 30.0,
    x_offsets: [-60.0, -15.0, 30.0],
    heights: [60.0, 90.0, 70.0],
    baseline: 20.0,
};

const LOGO_BARS: Bars = Bars {
    width: 40.0,
    x_offsets: [-80.0, -20.0, 40.0],
    heights: [80.0, 120.0, 100.0],
    baseline: 30.0,
};

/// Gradient rows sample `y / height`, so the stop boundaries sit at rows
/// 170.67 and 341.33 instead of whole multiples of `height / 3`. Rows next to a
/// boundary may be one channel step away from a whole-row segmentation.
fn splash_icon() -> SplashResult<Layout> {
    let size = CanvasSize::square(512)?;
    let c = size.center();
    let gradient = Gradient::new(vec![
        ColorStop::new(0.0, palette::GREEN),
        ColorStop::new(1.0 / 3.0, palette::GREEN_LIGHT),
        ColorStop::new(2.0 / 3.0, palette::GREEN_LIGHTER),
    ])?;
    let progress_center = c - Vec2::new(0.0, 50.0);

    Ok(
        Layout::new(size, ColorMode::Rgb, Background::Gradient { stops: gradient })
            .layer(Shape::disc(c, 120.0, palette::WHITE))
            .layers(ICON_BARS.shapes(c))
            .layer(Shape::ring(progress_center, 40.0, 6.0, palette::GREEN))
            .layer(GlyphSpec::won(
                progress_center,
                palette::GREEN,
                GlyphStrategy::FontOrVector,
            )),
    )
}

fn splash_icon_android12() -> SplashResult<Layout> {
    let size = CanvasSize::square(512)?;
    let c = size.center();
    Ok(
        Layout::new(size, ColorMode::Rgba, Background::Transparent)
            .layer(Shape::disc(c, 120.0, palette::WHITE))
            .layers(ICON_BARS.shapes(c)),
    )
}

fn launch_background() -> SplashResult<Layout> {
    Ok(Layout::new(
        CanvasSize::new(1, 1)?,
        ColorMode::Rgb,
        Background::Solid {
            color: palette::GREEN,
        },
    ))
}

fn splash_background() -> SplashResult<Layout> {
    Ok(Layout::new(
        CanvasSize::new(1242, 2688)?,
        ColorMode::Rgb,
        Background::Gradient {
            stops: Gradient::linear(palette::GREEN, palette::GREEN_LIGHTER),
        },
    ))
}

fn splash_logo() -> SplashResult<Layout> {
    let size = CanvasSize::square(512)?;
    let c = size.center();
    let radius = 180.0;

    let shadow = (1..=10u8).rev().map(|i| {
        let alpha = (255.0 * 0.02 * f64::from(i)) as u8;
        Shape::disc(c, radius + 2.0 * f64::from(i), Rgba8::BLACK.with_alpha(alpha))
    });

    let progress_center = c - Vec2::new(0.0, 70.0);
    let arc = |start_deg, end_deg| ArcSampling {
        center: progress_center,
        radius: 60.0,
        start_deg,
        end_deg,
        step_deg: 2.0,
        dot_radius: 4.0,
    };

    Ok(
        Layout::new(size, ColorMode::Rgba, Background::Transparent)
            .layers(shadow)
            .layer(Shape::disc(c, radius, palette::WHITE))
            .layers(LOGO_BARS.shapes(c))
            .layer(Shape::SampledArc {
                arc: arc(0.0, 360.0),
                color: palette::GREEN_TRACK,
            })
            .layer(Shape::SampledArc {
                arc: arc(-90.0, 150.0),
                color: palette::GREEN,
            })
            .layer(GlyphSpec::won(
                progress_center,
                palette::GREEN,
                GlyphStrategy::VectorOnly,
            )),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/presets.rs"]
mod tests;
