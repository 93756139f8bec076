/// A fill or stroke colour. Channels are in `0.0..=1.0`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    RGB { r: f32, g: f32, b: f32 },
    Grey { g: f32 },
}

impl Colour {
    /// An RGB colour from 8-bit channels
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// An RGB colour from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Colour {
        Colour::new_rgb_bytes((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
}
