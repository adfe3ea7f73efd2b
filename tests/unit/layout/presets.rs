use super::*;
use crate::raster::glyph::FontProbe;

fn compose(spec: &OutputSpec) -> crate::raster::canvas::Canvas {
    spec.layout.compose(&FontProbe::disabled()).unwrap()
}

#[test]
fn preset_names_roundtrip() {
    for p in Preset::ALL {
        assert_eq!(p.name().parse::<Preset>().unwrap(), p);
        assert_eq!(p.to_string(), p.name());
    }
    assert!("splash".parse::<Preset>().is_err());
}

#[test]
fn output_table_matches_asset_paths_and_sizes() {
    let table: Vec<(Preset, &str, u32, u32, ColorMode)> = vec![
        (Preset::SplashIcon, SPLASH_LOGO_PATH, 512, 512, ColorMode::Rgb),
        (Preset::SplashIcon, SPLASH_LOGO_ANDROID12_PATH, 512, 512, ColorMode::Rgba),
        (Preset::LaunchBackground, LAUNCH_BACKGROUND_PATH, 1, 1, ColorMode::Rgb),
        (Preset::SplashBackground, SPLASH_BACKGROUND_PATH, 1242, 2688, ColorMode::Rgb),
        (Preset::SplashLogo, SPLASH_LOGO_PATH, 512, 512, ColorMode::Rgba),
        (Preset::SplashLogo, SPLASH_LOGO_LARGE_PATH, 512, 512, ColorMode::Rgba),
    ];
    for (preset, path, w, h, mode) in table {
        let outputs = preset.outputs().unwrap();
        let spec = outputs
            .iter()
            .find(|o| o.path == std::path::Path::new(path))
            .unwrap_or_else(|| panic!("{preset} has no output {path}"));
        assert_eq!(spec.layout.size, CanvasSize { width: w, height: h });
        assert_eq!(spec.layout.mode, mode);
        spec.layout.validate().unwrap();
    }
}

#[test]
fn large_logo_is_resized_to_1024() {
    let outputs = Preset::SplashLogo.outputs().unwrap();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].resize, None);
    assert_eq!(outputs[1].resize, Some(CanvasSize::square(1024).unwrap()));
    assert_eq!(outputs[0].layout, outputs[1].layout);
}

#[test]
fn splash_logo_has_bar_at_center_and_shadow_outside_disc() {
    let outputs = Preset::SplashLogo.outputs().unwrap();
    let c = compose(&outputs[0]);

    assert_eq!(c.center_pixel(), palette::GREEN_LIGHT);
    // Inside the white disc, away from bars and ring.
    assert_eq!(c.pixel(150, 256), Some(palette::WHITE));
    // Shadow ring just outside radius 180.
    let shadow = c.pixel(256 + 190, 256).unwrap();
    assert_eq!((shadow.r, shadow.g, shadow.b), (0, 0, 0));
    assert!(shadow.a > 0 && shadow.a < 255);
    // Corners stay transparent.
    assert_eq!(c.pixel(0, 0), Some(Rgba8::TRANSPARENT));
    // Top of the progress arc is opaque green.
    assert_eq!(c.pixel(256, 126), Some(palette::GREEN));
}

#[test]
fn splash_icon_has_gradient_corners_and_white_disc() {
    let outputs = Preset::SplashIcon.outputs().unwrap();
    let icon = compose(&outputs[0]);
    assert_eq!(icon.pixel(0, 0), Some(palette::GREEN));
    assert_eq!(icon.pixel(0, 511), Some(palette::GREEN_LIGHTER));
    assert_eq!(icon.pixel(256 - 100, 256), Some(palette::WHITE));

    let android = compose(&outputs[1]);
    assert_eq!(android.pixel(0, 0), Some(Rgba8::TRANSPARENT));
    assert_eq!(android.pixel(256 - 100, 256), Some(palette::WHITE));
    // Middle bar spans x in [241, 271).
    assert_eq!(android.pixel(250, 256), Some(palette::GREEN_LIGHT));
}

#[test]
fn launch_background_is_one_green_pixel() {
    let outputs = Preset::LaunchBackground.outputs().unwrap();
    let c = compose(&outputs[0]);
    assert_eq!((c.width(), c.height()), (1, 1));
    assert_eq!(c.pixel(0, 0), Some(palette::GREEN));
}

#[test]
fn shadow_alphas_match_two_percent_steps() {
    let outputs = Preset::SplashLogo.outputs().unwrap();
    let alphas: Vec<u8> = outputs[0]
        .layout
        .layers
        .iter()
        .filter_map(|l| match l {
            crate::layout::model::Layer::Shape(Shape::Ellipse {
                fill: Some(f), ..
            }) if f.r == 0 => Some(f.a),
            _ => None,
        })
        .collect();
    assert_eq!(alphas, vec![51, 45, 40, 35, 30, 25, 20, 15, 10, 5]);
}
