// The fixed 64-entry master palette, as RGBA bytes.
//
// Indices are the 6-bit colors stored in palette RAM. Rows of 16 cover the
// four brightness tiers; the last few entries of each row are blacks.

/// One palette entry as `[r, g, b, a]`.
pub type Rgba = [u8; 4];

/// Master palette lookup, indexed by a 6-bit color number.
pub const PALETTE_MAP: [Rgba; 64] = [
    [0x52, 0x52, 0x52, 0xFF],
    [0x01, 0x1A, 0x51, 0xFF],
    [0x0F, 0x0F, 0x65, 0xFF],
    [0x23, 0x06, 0x63, 0xFF],
    [0x36, 0x03, 0x4B, 0xFF],
    [0x40, 0x04, 0x26, 0xFF],
    [0x3F, 0x09, 0x04, 0xFF],
    [0x32, 0x13, 0x00, 0xFF],
    [0x1F, 0x20, 0x00, 0xFF],
    [0x0B, 0x2A, 0x00, 0xFF],
    [0x00, 0x2F, 0x00, 0xFF],
    [0x00, 0x2E, 0x0A, 0xFF],
    [0x00, 0x26, 0x2D, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0xA0, 0xA0, 0xA0, 0xFF],
    [0x1E, 0x4A, 0x9D, 0xFF],
    [0x38, 0x37, 0xBC, 0xFF],
    [0x58, 0x28, 0xB8, 0xFF],
    [0x75, 0x21, 0x94, 0xFF],
    [0x84, 0x23, 0x5C, 0xFF],
    [0x82, 0x2E, 0x24, 0xFF],
    [0x6F, 0x3F, 0x00, 0xFF],
    [0x51, 0x52, 0x00, 0xFF],
    [0x31, 0x63, 0x00, 0xFF],
    [0x1A, 0x6B, 0x05, 0xFF],
    [0x0E, 0x69, 0x2E, 0xFF],
    [0x10, 0x5C, 0x68, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0xFE, 0xFF, 0xFF, 0xFF],
    [0x69, 0x9E, 0xFC, 0xFF],
    [0x89, 0x87, 0xFF, 0xFF],
    [0xAE, 0x76, 0xFF, 0xFF],
    [0xCE, 0x6D, 0xF1, 0xFF],
    [0xE0, 0x70, 0xB2, 0xFF],
    [0xDE, 0x7C, 0x70, 0xFF],
    [0xC8, 0x91, 0x3E, 0xFF],
    [0xA6, 0xA7, 0x25, 0xFF],
    [0x81, 0xBA, 0x28, 0xFF],
    [0x63, 0xC4, 0x46, 0xFF],
    [0x54, 0xC1, 0x7D, 0xFF],
    [0x56, 0xB3, 0xC0, 0xFF],
    [0x3C, 0x3C, 0x3C, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0xFE, 0xFF, 0xFF, 0xFF],
    [0xBE, 0xD6, 0xFD, 0xFF],
    [0xCC, 0xCC, 0xFF, 0xFF],
    [0xDD, 0xC4, 0xFF, 0xFF],
    [0xEA, 0xC0, 0xF9, 0xFF],
    [0xF2, 0xC1, 0xDF, 0xFF],
    [0xF1, 0xC7, 0xC2, 0xFF],
    [0xE8, 0xD0, 0xAA, 0xFF],
    [0xD9, 0xDA, 0x9D, 0xFF],
    [0xC9, 0xE2, 0x9E, 0xFF],
    [0xBC, 0xE6, 0xAE, 0xFF],
    [0xB4, 0xE5, 0xC7, 0xFF],
    [0xB5, 0xDF, 0xE4, 0xFF],
    [0xA9, 0xA9, 0xA9, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
    [0x00, 0x00, 0x00, 0xFF],
];
