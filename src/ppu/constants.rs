// PPU constants

/// Size of one nametable in bytes (1KB).
pub(super) const NAMETABLE_SIZE: usize = 1024;

/// Size of palette RAM in bytes.
pub(super) const PALETTE_SIZE: usize = 32;

/// Screen width in pixels.
pub const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels.
pub const SCREEN_HEIGHT: usize = 240;

/// Bytes per framebuffer pixel (RGBA).
pub(super) const BYTES_PER_PIXEL: usize = 4;

/// Total framebuffer size in bytes.
pub const FRAMEBUFFER_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL;

/// OAM size: 64 sprites of 4 bytes.
pub(super) const OAM_SIZE: usize = 256;

/// Sprites evaluated per scanline.
pub(super) const SPRITES_PER_SCANLINE: usize = 8;

// ========================================
// PPU Timing (NTSC)
// ========================================

/// Dots per scanline, indexed 0-340.
pub const DOTS_PER_SCANLINE: u64 = 341;

/// Scanlines per frame: 240 visible, post-render, 20 vblank, pre-render.
pub const SCANLINES_PER_FRAME: u64 = 262;

/// Total dots in one frame.
pub const DOTS_PER_FRAME: u64 = DOTS_PER_SCANLINE * SCANLINES_PER_FRAME;

/// Last visible scanline.
pub(super) const LAST_VISIBLE_SCANLINE: u64 = 239;

/// First vblank scanline; the vblank flag rises at dot 1.
pub(super) const VBLANK_SCANLINE: u64 = 241;

/// Pre-render scanline; status flags clear at dot 1.
pub(super) const PRERENDER_SCANLINE: u64 = 261;
