// File: crates/tsview-core/src/theme.rs
// Summary: Color value type, theme presets and the ordered theme registry.

use std::fmt;

/// 24-bit RGB color stored as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const BLACK: Rgb = Rgb(0x000000);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
    pub const fn r(self) -> u8 { ((self.0 >> 16) & 0xFF) as u8 }
    pub const fn g(self) -> u8 { ((self.0 >> 8) & 0xFF) as u8 }
    pub const fn b(self) -> u8 { (self.0 & 0xFF) as u8 }
    pub const fn rgb(self) -> (u8, u8, u8) { (self.r(), self.g(), self.b()) }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('#');
        if s.len() != 6 { return None; }
        u32::from_str_radix(s, 16).ok().map(Rgb)
    }

    pub fn hex(self) -> String { format!("#{:06x}", self.0 & 0xFFFFFF) }

    /// Add a per-channel amount (packed like a color), saturating at 255.
    pub fn lighten(self, amount: u32) -> Self {
        let a = Rgb(amount);
        Self::from_rgb(
            self.r().saturating_add(a.r()),
            self.g().saturating_add(a.g()),
            self.b().saturating_add(a.b()),
        )
    }

    /// Linear blend towards `other`; `t = 0` keeps `self`, `t = 1` yields `other`.
    pub fn mix(self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self::from_rgb(ch(self.r(), other.r()), ch(self.g(), other.g()), ch(self.b(), other.b()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Wrap-around palette access: index `i` maps to `palette[i mod len]`.
/// Returns `fallback` for an empty palette.
#[inline]
pub fn cyclic<T: Copy>(palette: &[T], i: usize, fallback: T) -> T {
    if palette.is_empty() { fallback } else { palette[i % palette.len()] }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub fg0: Rgb,
    pub bg0: Rgb,
    pub fg1: Rgb,
    pub bg1: Rgb,
    /// red, green, yellow, blue, magenta, cyan
    pub accents: [Rgb; 6],
    pub bright_accents: [Rgb; 6],
}

impl Theme {
    /// Base theme; secondary fg/bg and bright accents fall back to the base colors.
    pub const fn new(name: &'static str, fg0: Rgb, bg0: Rgb, accents: [Rgb; 6]) -> Self {
        Self { name, fg0, bg0, fg1: fg0, bg1: bg0, accents, bright_accents: accents }
    }

    pub const fn with_secondary(mut self, fg1: Rgb, bg1: Rgb) -> Self {
        self.fg1 = fg1;
        self.bg1 = bg1;
        self
    }

    pub const fn with_bright(mut self, bright: [Rgb; 6]) -> Self {
        self.bright_accents = bright;
        self
    }

    /// Fill behind everything, including the label margins.
    pub fn background_color(&self) -> Rgb { self.bg1 }
    /// Fill of bordered panels (plot area, legend, overlays).
    pub fn panel_color(&self) -> Rgb { self.bg0 }
    pub fn grid_line_color(&self) -> Rgb { self.bg0.mix(self.fg0, 0.25) }
    pub fn border_color(&self) -> Rgb { self.bg0.mix(self.fg0, 0.6) }
    pub fn text_color(&self) -> Rgb { self.fg0 }
    pub fn highlight_text_color(&self) -> Rgb { self.fg1 }
    pub fn accent_palette(&self) -> &[Rgb] { &self.accents }

    /// Color for the series at position `i` in the selection.
    pub fn accent(&self, i: usize) -> Rgb { cyclic(&self.accents, i, self.fg0) }
    pub fn bright_accent(&self, i: usize) -> Rgb { cyclic(&self.bright_accents, i, self.fg1) }

    pub const fn onehalfdark() -> Self {
        Self::new(
            "onehalfdark",
            Rgb(0xDCDFE4),
            Rgb(0x282C34),
            [Rgb(0xE06C75), Rgb(0x98C379), Rgb(0xE5C07B), Rgb(0x61AFEF), Rgb(0xC678DD), Rgb(0x56B6C2)],
        )
    }

    pub const fn onehalflight() -> Self {
        Self::new(
            "onehalflight",
            Rgb(0x383A42),
            Rgb(0xFAFAFA),
            [Rgb(0xE45649), Rgb(0x50A14F), Rgb(0xC18401), Rgb(0x0184BC), Rgb(0xA626A4), Rgb(0x0997B3)],
        )
    }

    pub const fn selenizeddark() -> Self {
        Self::new(
            "selenizeddark",
            Rgb(0xADBCBC),
            Rgb(0x103C48),
            [Rgb(0xFA5750), Rgb(0x75B938), Rgb(0xDBB32D), Rgb(0x4695F7), Rgb(0xF275BE), Rgb(0x41C7B9)],
        )
        .with_secondary(Rgb(0xCAD8D9), Rgb(0x184956))
        .with_bright([Rgb(0xFF665C), Rgb(0x84C747), Rgb(0xEBC13D), Rgb(0x58A3FF), Rgb(0xFF84CD), Rgb(0x53D6C7)])
    }

    pub const fn selenizedblack() -> Self {
        Self::new(
            "selenizedblack",
            Rgb(0xB9B9B9),
            Rgb(0x181818),
            [Rgb(0xED4A4A), Rgb(0x70B43C), Rgb(0xDBB32D), Rgb(0x368AEB), Rgb(0xEB6EB7), Rgb(0x3FC5B7)],
        )
        .with_secondary(Rgb(0xDEDEDE), Rgb(0x252525))
    }

    pub const fn tangodark() -> Self {
        Self::new(
            "tangodark",
            Rgb(0xD3D7CF),
            Rgb(0x2E3436),
            [Rgb(0xEF2929), Rgb(0x8AE234), Rgb(0xFCE94F), Rgb(0x729FCF), Rgb(0xAD7FA8), Rgb(0x34E2E2)],
        )
        .with_secondary(Rgb(0xEEEEEC), Rgb(0x555753))
        .with_bright([Rgb(0xCC0000), Rgb(0x4E9A06), Rgb(0xC4A000), Rgb(0x3465A4), Rgb(0x75507B), Rgb(0x06989A)])
    }
}

impl Default for Theme {
    fn default() -> Self { Self::onehalfdark() }
}

/// Return the built-in themes in registry order.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::onehalfdark(),
        Theme::onehalflight(),
        Theme::selenizeddark(),
        Theme::selenizedblack(),
        Theme::tangodark(),
    ]
}

/// Registry position of the theme named `name` (case-insensitive).
pub fn position(registry: &[Theme], name: &str) -> Option<usize> {
    registry.iter().position(|t| t.name.eq_ignore_ascii_case(name))
}

/// Find a theme by its `name`, falling back to the first preset.
pub fn find(name: &str) -> Theme {
    let all = presets();
    let idx = position(&all, name).unwrap_or(0);
    all[idx].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_wraps_around_palette() {
        let t = Theme::onehalfdark();
        assert_eq!(t.accent(0), t.accents[0]);
        assert_eq!(t.accent(6), t.accents[0]);
        assert_eq!(t.accent(13), t.accents[1]);
    }

    #[test]
    fn hex_round_trip_and_lighten_saturates() {
        let c = Rgb::from_hex("#e06c75").unwrap();
        assert_eq!(c, Rgb(0xE06C75));
        assert_eq!(c.hex(), "#e06c75");
        assert_eq!(Rgb(0xF0F0F0).lighten(0x202020), Rgb::WHITE);
        assert!(Rgb::from_hex("xyz").is_none());
    }

    #[test]
    fn secondary_colors_fall_back() {
        let t = Theme::onehalflight();
        assert_eq!(t.fg1, t.fg0);
        assert_eq!(t.bg1, t.bg0);
        assert_eq!(t.bright_accents, t.accents);
        let s = Theme::selenizeddark();
        assert_ne!(s.bg1, s.bg0);
    }

    #[test]
    fn find_falls_back_to_first() {
        assert_eq!(find("TangoDark").name, "tangodark");
        assert_eq!(find("nope").name, "onehalfdark");
    }
}
