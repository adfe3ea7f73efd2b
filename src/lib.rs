//! Splashgen draws the bitmap assets of a mobile app (splash logos, launch
//! background, splash background) procedurally and writes them as PNG files.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`Layout`] lists a canvas size, a background and ordered [`Layer`]s.
//! 2. **Compose**: [`Layout::compose`] paints every layer onto an owned [`Canvas`].
//! 3. **Encode**: [`serialize`] writes the canvas as an RGB8 or RGBA8 PNG.
//!
//! The built-in designs live in [`Preset`]; [`generate_preset`] composes all of
//! a preset's outputs in memory before writing any file.
#![forbid(unsafe_code)]

mod encode;
mod foundation;
mod layout;
mod pipeline;
mod raster;

pub use encode::png::{resize, serialize};
pub use foundation::core::{
    CanvasSize, ColorMode, Line, MAX_CANVAS_PIXELS, Point, Rect, Rgba8, Vec2,
};
pub use foundation::error::{SplashError, SplashResult};
pub use layout::model::{Background, Layer, Layout};
pub use layout::presets::{
    LAUNCH_BACKGROUND_PATH, OutputSpec, Preset, SPLASH_BACKGROUND_PATH, SPLASH_LOGO_ANDROID12_PATH,
    SPLASH_LOGO_LARGE_PATH, SPLASH_LOGO_PATH, palette,
};
pub use pipeline::{
    GenerateOpts, ensure_parent_dir, generate_all, generate_preset, render_layout, render_output,
};
pub use raster::canvas::Canvas;
pub use raster::gradient::{ColorStop, Gradient, render_gradient_canvas};
pub use raster::glyph::{
    FONT_ENV_VAR, FontProbe, GlyphRendering, GlyphSpec, GlyphStrategy, LoadedFont, draw_glyph,
};
pub use raster::shape::{
    ArcSampling, MAX_ARC_SAMPLES, Shape, Stroke, paint_arc_by_sampling, paint_shape,
};
