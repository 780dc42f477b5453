use eframe::egui::Color32;
use palette::{IntoColor, Oklch, Srgb};

use cmip_precip_viewer::data::model::Season;

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Convert an OKLCH colour (lightness 0–1, chroma, hue in degrees) to sRGB,
/// clipping out-of-gamut channels.
pub fn oklch(lightness: f32, chroma: f32, hue: f32) -> Color32 {
    let rgb: Srgb = Oklch::new(lightness, chroma, hue).into_color();
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

/// Fill of the precipitation bars.
pub fn bar_color() -> Color32 {
    oklch(0.5087, 0.1119, 259.41)
}

/// Translucent background band behind a month.
pub fn season_band(season: Season) -> Color32 {
    match season {
        Season::Wet => Color32::from_rgba_unmultiplied(59, 130, 246, 26),
        Season::Dry => Color32::from_rgba_unmultiplied(245, 158, 11, 31),
    }
}

/// Legend swatch, slightly stronger than the band itself.
pub fn season_swatch(season: Season) -> Color32 {
    match season {
        Season::Wet => Color32::from_rgba_unmultiplied(59, 130, 246, 51),
        Season::Dry => Color32::from_rgba_unmultiplied(245, 158, 11, 64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_is_a_mid_blue() {
        let c = bar_color();
        assert!(c.b() > c.r() && c.b() > c.g());
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn oklch_extremes_map_to_black_and_white() {
        assert_eq!(oklch(0.0, 0.0, 0.0), Color32::BLACK);
        assert_eq!(oklch(1.0, 0.0, 0.0), Color32::WHITE);
    }
}
