// Simple RGB color struct. Channels are clamped to [0, 255] on construction,
// so channel arithmetic can be done in i32 and handed back through `clamped`.

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xffffff);
    pub const YELLOW: Color = Color::from_u32(0xffff00);
    pub const GOLD: Color = Color::from_u32(0xffd700);
    pub const DARK_GRAY: Color = Color::from_u32(0x404040);

    // Created from an unsigned 32 representing 00RRGGBB
    pub const fn from_u32(num: u32) -> Color {
        Color {
            r: (num >> 16) as u8,
            g: (num >> 8) as u8,
            b: num as u8,
        }
    }

    pub fn clamped(r: i32, g: i32, b: i32) -> Color {
        Color {
            r: r.max(0).min(255) as u8,
            g: g.max(0).min(255) as u8,
            b: b.max(0).min(255) as u8,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Color {
        Color {
            r: rng.gen::<u8>(),
            g: rng.gen::<u8>(),
            b: rng.gen::<u8>(),
        }
    }

    pub fn with_green(self, g: i32) -> Color {
        Color::clamped(self.r as i32, g, self.b as i32)
    }

    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        assert_eq!(Color::GOLD, Color { r: 255, g: 215, b: 0 });
        assert_eq!(Color::YELLOW, Color { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn clamped_keeps_channels_in_range() {
        assert_eq!(Color::clamped(-20, 300, 128), Color { r: 0, g: 255, b: 128 });
    }

    #[test]
    fn with_green_never_underflows() {
        let c = Color::YELLOW.with_green(3 - 4);
        assert_eq!(c.g, 0);
        assert_eq!(c.r, 255);
    }

    #[test]
    fn css_string() {
        assert_eq!(Color::GOLD.to_css(), "rgb(255, 215, 0)");
    }
}
