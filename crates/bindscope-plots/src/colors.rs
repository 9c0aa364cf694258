//! Colors
//!
//! Color scales used for rendering charts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
    /// Whether white text reads better than black on this background.
    pub fn is_dark(&self) -> bool {
        let luma = 0.299 * self.0 as f64 + 0.587 * self.1 as f64 + 0.114 * self.2 as f64;
        luma < 128.0
    }
    fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

// ColorBrewer RdBu, red to blue
const RDBU: [Rgb; 11] = [
    Rgb(103, 0, 31),
    Rgb(178, 24, 43),
    Rgb(214, 96, 77),
    Rgb(244, 165, 130),
    Rgb(253, 219, 199),
    Rgb(247, 247, 247),
    Rgb(209, 229, 240),
    Rgb(146, 197, 222),
    Rgb(67, 147, 195),
    Rgb(33, 102, 172),
    Rgb(5, 48, 97),
];

/// Qualitative palette for series colors.
pub const QUALITATIVE: [Rgb; 10] = [
    Rgb(99, 110, 250),
    Rgb(239, 85, 59),
    Rgb(0, 204, 150),
    Rgb(171, 99, 250),
    Rgb(255, 161, 90),
    Rgb(25, 211, 243),
    Rgb(255, 102, 146),
    Rgb(182, 232, 128),
    Rgb(255, 151, 255),
    Rgb(254, 203, 82),
];

pub fn categorical(index: usize) -> Rgb {
    QUALITATIVE[index % QUALITATIVE.len()]
}

/// Diverging blue (low) to red (high) color of `value` on a scale spanning
/// `[min, max]`. Out-of-range values are clamped.
pub fn diverging(value: f64, min: f64, max: f64) -> Rgb {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    // RDBU runs red to blue
    let pos = (1.0 - t) * (RDBU.len() - 1) as f64;
    let i = (pos.floor() as usize).min(RDBU.len() - 2);
    RDBU[i].lerp(&RDBU[i + 1], pos - i as f64)
}
