use smart_leds::RGB8;

pub type Rgb = RGB8;

const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_OFF: &str = "off";

/// Black, used to clear pixels
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Colors that can be requested through the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Off,
}

impl NamedColor {
    pub fn parse_from_str(s: &str) -> Option<Self> {
        Some(match s {
            COLOR_NAME_RED => Self::Red,
            COLOR_NAME_GREEN => Self::Green,
            COLOR_NAME_BLUE => Self::Blue,
            COLOR_NAME_YELLOW => Self::Yellow,
            COLOR_NAME_OFF => Self::Off,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Off => COLOR_NAME_OFF,
        }
    }

    /// Full-intensity RGB value of the color
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => rgb_from_u32(0xFF0000),
            Self::Green => rgb_from_u32(0x00FF00),
            Self::Blue => rgb_from_u32(0x0000FF),
            Self::Yellow => rgb_from_u32(0xFFFF00),
            Self::Off => OFF,
        }
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
