use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Marker colours for the river map
// ---------------------------------------------------------------------------

/// Semi-transparent blue used when a state has a single river.
pub const RIVER_BLUE: Color32 = Color32::from_rgba_premultiplied(0, 0, 160, 160);

/// Hue of [`RIVER_BLUE`], the start of the generated palette.
const BASE_HUE: f32 = 240.0;

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgba_unmultiplied(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
                160,
            )
        })
        .collect()
}

/// One marker colour per river.
pub fn river_colors(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![RIVER_BLUE],
        _ => generate_palette(n),
    }
}
