use eframe::egui::Color32;
use palette::{named, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// First colour of the conventional ten-colour plotting cycle (`#1f77b4`).
const CYCLE_BLUE: Srgb<u8> = Srgb::new(0x1f, 0x77, 0xb4);

/// Colour of one chart's markers and line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    /// The plotting default for a single series.
    Default,
    /// CSS named orange.
    Orange,
}

impl SeriesColor {
    pub fn srgb(self) -> Srgb<u8> {
        match self {
            SeriesColor::Default => CYCLE_BLUE,
            SeriesColor::Orange => named::ORANGE,
        }
    }

    pub fn color32(self) -> Color32 {
        to_color32(self.srgb())
    }
}

/// Convert an 8-bit sRGB colour into egui's colour type.
pub fn to_color32(rgb: Srgb<u8>) -> Color32 {
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
