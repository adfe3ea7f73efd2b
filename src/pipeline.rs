use std::path::{Path, PathBuf};

use crate::{
    encode::png::{resize, serialize},
    foundation::error::{SplashError, SplashResult},
    layout::model::Layout,
    layout::presets::{OutputSpec, Preset},
    raster::canvas::Canvas,
    raster::glyph::FontProbe,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct GenerateOpts {
    /// Create missing parent directories before writing. Off by default: a
    /// missing directory is an I/O error.
    pub create_dirs: bool,
}

/// Compose every output of `preset` in memory, then write each one under `root`.
///
/// Nothing is written when any composition step fails.
#[tracing::instrument(skip(fonts), fields(preset = %preset, root = %root.display()))]
pub fn generate_preset(
    preset: Preset,
    root: &Path,
    fonts: &FontProbe,
    opts: GenerateOpts,
) -> SplashResult<Vec<PathBuf>> {
    let outputs = preset.outputs()?;

    let mut base: Vec<(&Layout, Canvas)> = Vec::new();
    let mut composed = Vec::with_capacity(outputs.len());
    for out in &outputs {
        let canvas = match base.iter().find(|(l, _)| *l == &out.layout) {
            Some((_, c)) => c.clone(),
            None => {
                let c = out.layout.compose(fonts)?;
                base.push((&out.layout, c.clone()));
                c
            }
        };
        composed.push((root.join(&out.path), apply_resize(canvas, out)?));
    }

    let mut written = Vec::with_capacity(composed.len());
    for (path, canvas) in composed {
        write_png(&canvas, &path, opts)?;
        written.push(path);
    }
    Ok(written)
}

/// Run every preset in declaration order.
///
/// Presets that share an output path overwrite each other; the later preset wins.
pub fn generate_all(root: &Path, fonts: &FontProbe, opts: GenerateOpts) -> SplashResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for preset in Preset::ALL {
        written.extend(generate_preset(preset, root, fonts, opts)?);
    }
    Ok(written)
}

/// Compose a single layout and write it to `out`.
#[tracing::instrument(skip(layout, fonts), fields(out = %out.display()))]
pub fn render_layout(layout: &Layout, out: &Path, fonts: &FontProbe, opts: GenerateOpts) -> SplashResult<()> {
    let canvas = layout.compose(fonts)?;
    write_png(&canvas, out, opts)
}

/// Compose one preset output, including its resize step, and write it to `out`.
///
/// `output.path` is ignored; the caller picks the destination.
#[tracing::instrument(skip(output, fonts), fields(out = %out.display()))]
pub fn render_output(output: &OutputSpec, out: &Path, fonts: &FontProbe, opts: GenerateOpts) -> SplashResult<()> {
    let canvas = apply_resize(output.layout.compose(fonts)?, output)?;
    write_png(&canvas, out, opts)
}

fn apply_resize(canvas: Canvas, output: &OutputSpec) -> SplashResult<Canvas> {
    match output.resize {
        Some(size) => resize(&canvas, size.width, size.height),
        None => Ok(canvas),
    }
}

fn write_png(canvas: &Canvas, path: &Path, opts: GenerateOpts) -> SplashResult<()> {
    if opts.create_dirs {
        ensure_parent_dir(path)?;
    }
    serialize(canvas, path)?;
    tracing::info!(path = %path.display(), width = canvas.width(), height = canvas.height(), "wrote png");
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> SplashResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SplashError::io(parent, e))?;
    }
    Ok(())
}
