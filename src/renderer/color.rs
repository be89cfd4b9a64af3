//! 16-bit RGB565 colors

/// A pixel value as stored on the surface (RGB565)
pub type Color = u16;

pub const BLACK: Color = 0x0000;
pub const WHITE: Color = 0xFFFF;
pub const YELLOW: Color = 0xFFE0;
pub const RED: Color = 0xF800;
pub const GREEN: Color = 0x07E0;
pub const BLUE: Color = 0x001F;
pub const CYAN: Color = 0x07FF;
pub const MAGENTA: Color = 0xF81F;
pub const GREY: Color = 0xC618;
pub const PINK: Color = 0xFC18;
pub const ORANGE: Color = 0xFC00;

/// Cleared pixels
pub const BACKGROUND: Color = BLACK;
/// Player disc
pub const PLAYER_COLOR: Color = WHITE;

/// Colors AI and food discs are drawn from
pub const PALETTE: [Color; 9] = [RED, YELLOW, GREEN, BLUE, CYAN, MAGENTA, GREY, PINK, ORANGE];

/// Expand RGB565 to 8-bit channels
#[inline]
pub fn to_rgb888(color: Color) -> (u8, u8, u8) {
    let r = ((color >> 11) & 0x1F) as u8;
    let g = ((color >> 5) & 0x3F) as u8;
    let b = (color & 0x1F) as u8;
    // Replicate high bits into the low bits so full scale maps to 255
    ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
}
