/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Re-pin the HSL lightness, keeping hue and saturation. Used by the
    /// outro, which renders accent colors darkened onto a white card.
    pub fn with_lightness(self, lightness: f64) -> Self {
        let (h, s, _) = self.to_hsl();
        Self::from_hsl(h, s, lightness.clamp(0.0, 1.0))
    }

    fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;
        (h, s, l)
    }

    fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        fn hue(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self::new(v, v, v);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::new(
            (hue(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
            (hue(p, q, h) * 255.0).round() as u8,
            (hue(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
        )
    }
}

/// Color roles used by the render layer. Resolved once per scenario from
/// the theme seed; the core treats colors as opaque value data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub void: Rgb,
    pub primary: Rgb,
    pub highlight: Rgb,
    pub social: Rgb,
    pub link: Rgb,
    pub outro_accent: Rgb,
}

const THEMES: [Theme; 5] = [
    // Midnight
    Theme {
        void: Rgb::new(0x05, 0x0B, 0x1A),
        primary: Rgb::new(0x4D, 0x9F, 0xFF),
        highlight: Rgb::new(0x00, 0xF2, 0xFF),
        social: Rgb::new(0x70, 0x00, 0xFF),
        link: Rgb::new(0x00, 0xD1, 0xFF),
        outro_accent: Rgb::new(0x1A, 0x3A, 0x6D),
    },
    // Obsidian
    Theme {
        void: Rgb::new(0x06, 0x12, 0x0C),
        primary: Rgb::new(0x52, 0xFF, 0xB8),
        highlight: Rgb::new(0x00, 0xFF, 0x41),
        social: Rgb::new(0x00, 0xA3, 0xFF),
        link: Rgb::new(0x00, 0xFF, 0x90),
        outro_accent: Rgb::new(0x14, 0x4D, 0x2F),
    },
    // Amethyst
    Theme {
        void: Rgb::new(0x0F, 0x05, 0x14),
        primary: Rgb::new(0xD4, 0x80, 0xFF),
        highlight: Rgb::new(0xFF, 0x00, 0xE5),
        social: Rgb::new(0x9D, 0x00, 0xFF),
        link: Rgb::new(0xFF, 0x70, 0xDC),
        outro_accent: Rgb::new(0x4D, 0x1A, 0x45),
    },
    // Charcoal
    Theme {
        void: Rgb::new(0x12, 0x0D, 0x0B),
        primary: Rgb::new(0xFF, 0x9F, 0x4D),
        highlight: Rgb::new(0xFF, 0xD6, 0x00),
        social: Rgb::new(0xFF, 0x00, 0x5C),
        link: Rgb::new(0xFF, 0xA2, 0x00),
        outro_accent: Rgb::new(0x5C, 0x2A, 0x14),
    },
    // Crimson
    Theme {
        void: Rgb::new(0x14, 0x05, 0x05),
        primary: Rgb::new(0xFF, 0x4D, 0x4D),
        highlight: Rgb::new(0xFF, 0x00, 0x00),
        social: Rgb::new(0xFF, 0x8A, 0x00),
        link: Rgb::new(0xFF, 0x00, 0x55),
        outro_accent: Rgb::new(0x5C, 0x14, 0x14),
    },
];

impl Theme {
    pub fn resolve(seed: u64) -> &'static Theme {
        &THEMES[(seed % THEMES.len() as u64) as usize]
    }
}
