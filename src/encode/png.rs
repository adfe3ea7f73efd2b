use std::path::Path;

use image::imageops::FilterType;

use crate::{
    foundation::core::{CanvasSize, ColorMode},
    foundation::error::{SplashError, SplashResult},
    foundation::math::mul_div255,
    raster::canvas::Canvas,
};

/// Write `canvas` as a PNG at `path`, RGB8 or RGBA8 per the canvas mode.
///
/// Parent directories are not created; a missing directory is reported as
/// [`SplashError::Io`].
#[tracing::instrument(skip_all, fields(path = %path.display(), width = canvas.width(), height = canvas.height()))]
pub fn serialize(canvas: &Canvas, path: &Path) -> SplashResult<()> {
    let img = canvas.image();
    let (w, h) = img.dimensions();
    let res = match canvas.mode() {
        ColorMode::Rgba => image::save_buffer_with_format(
            path,
            img.as_raw(),
            w,
            h,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        ),
        ColorMode::Rgb => {
            let rgb: Vec<u8> = img.pixels().flat_map(|p| [p.0[0], p.0[1], p.0[2]]).collect();
            image::save_buffer_with_format(
                path,
                &rgb,
                w,
                h,
                image::ColorType::Rgb8,
                image::ImageFormat::Png,
            )
        }
    };

    res.map_err(|e| match e {
        image::ImageError::IoError(io) => SplashError::io(path, io),
        other => SplashError::encode(format!("write png '{}': {other}", path.display())),
    })
}

/// Lanczos3 resample to `width × height`, keeping the color mode.
///
/// Color is filtered premultiplied so transparent neighbours do not darken
/// edges.
pub fn resize(canvas: &Canvas, width: u32, height: u32) -> SplashResult<Canvas> {
    let size = CanvasSize::new(width, height)?;
    if canvas.size() == size {
        return Ok(canvas.clone());
    }

    let mut premul = canvas.image().clone();
    for px in premul.pixels_mut() {
        let a = u16::from(px.0[3]);
        for c in &mut px.0[..3] {
            *c = mul_div255(u16::from(*c), a) as u8;
        }
    }

    let mut out = image::imageops::resize(&premul, size.width, size.height, FilterType::Lanczos3);
    for px in out.pixels_mut() {
        let a = u32::from(px.0[3]);
        for c in &mut px.0[..3] {
            *c = if a == 0 {
                0
            } else {
                ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8
            };
        }
    }
    Ok(Canvas::from_image(out, canvas.mode()))
}
