//! Packed 24-bit color codes and the named color catalog.

use palette::Srgb;

/// A packed 24-bit RGB color code.
///
/// The byte layout follows the usual `0xRRGGBB` convention: red occupies
/// bits 16-23, green bits 8-15 and blue bits 0-7. Values are masked to the
/// low 24 bits on construction, so the upper byte is always zero.
///
/// The associated constants form the catalog used by the built-in cycle:
/// six fully saturated anchor colors plus the SMOOTHER/TRANSITION waypoints
/// placed between them, along with a few extra named colors that are not
/// part of the cycle but useful for status indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorCode(u32);

impl ColorCode {
    // Cycle anchors.
    pub const RED: Self = Self(0xFF0000);
    pub const YELLOW: Self = Self(0xFFFF00);
    pub const GREEN: Self = Self(0x00FF00);
    pub const CYAN: Self = Self(0x00FFFF);
    pub const BLUE: Self = Self(0x0000FF);
    pub const MAGENTA: Self = Self(0xFF00FF);

    // Waypoints between the anchors, three per leg: red -> yellow,
    pub const SMOOTHER_1: Self = Self(0xFF4400);
    pub const TRANSITION_1: Self = Self(0xFF8800);
    pub const SMOOTHER_2: Self = Self(0xFFCC00);
    // yellow -> green,
    pub const SMOOTHER_3: Self = Self(0xCCFF00);
    pub const TRANSITION_2: Self = Self(0x88FF00);
    pub const SMOOTHER_4: Self = Self(0x44FF00);
    // green -> cyan,
    pub const SMOOTHER_5: Self = Self(0x00FF44);
    pub const TRANSITION_3: Self = Self(0x00FF88);
    pub const SMOOTHER_6: Self = Self(0x00FFCC);
    // cyan -> blue,
    pub const SMOOTHER_7: Self = Self(0x00CCFF);
    pub const TRANSITION_4: Self = Self(0x0088FF);
    pub const SMOOTHER_8: Self = Self(0x0044FF);
    // blue -> magenta,
    pub const SMOOTHER_9: Self = Self(0x4400FF);
    pub const TRANSITION_5: Self = Self(0x8800FF);
    pub const SMOOTHER_10: Self = Self(0xCC00FF);
    // magenta -> red.
    pub const SMOOTHER_11: Self = Self(0xFF00CC);
    pub const TRANSITION_6: Self = Self(0xFF0088);
    pub const SMOOTHER_12: Self = Self(0xFF0044);

    // Extra named colors, not part of the cycle.
    pub const WHITE: Self = Self(0xFFFFFF);
    pub const PURPLE: Self = Self(0x800080);
    pub const ORANGE: Self = Self(0xFF3A00);
    pub const PINK: Self = Self(0xFF6065);
    pub const OFF: Self = Self(0x000000);

    /// Creates a color code from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are discarded.
    #[inline]
    pub const fn new(code: u32) -> Self {
        Self(code & 0x00FF_FFFF)
    }

    /// Packs three 8-bit channels into a color code.
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Returns the red channel byte.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the green channel byte.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the blue channel byte.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Decodes the packed code into a normalized color.
    ///
    /// Each channel byte is divided by 255, giving components in the
    /// 0.0-1.0 range. Every 24-bit input is valid; there is nothing to
    /// fail.
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(self.red(), self.green(), self.blue()).into_format()
    }
}

impl From<u32> for ColorCode {
    fn from(code: u32) -> Self {
        ColorCode::new(code)
    }
}

impl From<ColorCode> for u32 {
    fn from(code: ColorCode) -> u32 {
        code.0
    }
}

impl core::fmt::Display for ColorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
