/// Hue/saturation/lightness color. Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS `hsla()` string; alpha is clamped into [0, 1] and a non-finite alpha renders as 0.
    pub fn to_css(&self, alpha: f32) -> String {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }
}

// Colors shifted through when spawning effects
pub const PALETTE: [Hsl; 6] = [
    Hsl::new(0.0, 100.0, 50.0),   // red
    Hsl::new(60.0, 100.0, 50.0),  // yellow
    Hsl::new(120.0, 100.0, 50.0), // green
    Hsl::new(180.0, 100.0, 30.0), // cyan
    Hsl::new(240.0, 100.0, 50.0), // blue
    Hsl::new(300.0, 100.0, 50.0), // magenta
];

/// Per-channel linear interpolation. `factor` is not clamped.
#[inline]
pub fn interpolate(a: Hsl, b: Hsl, factor: f32) -> Hsl {
    Hsl {
        hue: a.hue + (b.hue - a.hue) * factor,
        saturation: a.saturation + (b.saturation - a.saturation) * factor,
        lightness: a.lightness + (b.lightness - a.lightness) * factor,
    }
}

/// Color for slot `index` of a batch of `count`: the palette entry at `base`
/// blended toward its cyclic successor by `index / count`.
#[inline]
pub fn batch_color(base: usize, index: usize, count: usize) -> Hsl {
    let from = base % PALETTE.len();
    let to = (from + 1) % PALETTE.len();
    let factor = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    interpolate(PALETTE[from], PALETTE[to], factor)
}
