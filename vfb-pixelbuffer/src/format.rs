//! Pixel format descriptions.
//!
//! A [`PixelFormat`] describes how one pixel is stored in the shared
//! framebuffer: its storage width, significant color depth, byte order and the
//! bit-mask of each color channel. The device model uses the masks to
//! translate its own internal colors, so they must match the negotiated host
//! surface exactly.
//!
//! # Channel Masks
//!
//! Each channel occupies a contiguous run of bits. Its shift is the position
//! of the lowest set bit and its maximum value is `mask >> shift`:
//!
//! ```
//! use vfb_pixelbuffer::ChannelMasks;
//!
//! let masks = ChannelMasks::new(0x00FF_0000, 0x0000_FF00, 0x0000_00FF);
//! assert_eq!(ChannelMasks::shift(masks.red), 16);
//! assert_eq!(ChannelMasks::max(masks.red), 255);
//! ```
//!
//! # Example
//!
//! ```
//! use vfb_pixelbuffer::PixelFormat;
//!
//! let pf = PixelFormat::xrgb8888();
//! assert_eq!(pf.bytes_per_pixel(), 4);
//!
//! // R=0xAA, G=0xBB, B=0xCC packs to 0x00AABBCC and is stored little-endian.
//! assert_eq!(pf.pack_rgb([0xAA, 0xBB, 0xCC]), 0x00AA_BBCC);
//! let mut px = [0u8; 4];
//! pf.write_rgb([0xAA, 0xBB, 0xCC], &mut px);
//! assert_eq!(px, [0xCC, 0xBB, 0xAA, 0x00]);
//! ```

/// Byte order of multi-byte pixels in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Red, green and blue channel bit-masks of a packed pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl ChannelMasks {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Bit position of the least significant bit of `mask` (0 for an empty mask).
    pub const fn shift(mask: u32) -> u32 {
        if mask == 0 {
            0
        } else {
            mask.trailing_zeros()
        }
    }

    /// Largest channel value representable by `mask`.
    pub const fn max(mask: u32) -> u32 {
        mask >> Self::shift(mask)
    }

    /// Sum of significant bits over the three channels.
    pub const fn depth(&self) -> u8 {
        (self.red.count_ones() + self.green.count_ones() + self.blue.count_ones()) as u8
    }
}

/// Describes a packed true-color pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    /// Storage bits per pixel, e.g. 32.
    pub bits_per_pixel: u8,
    /// Significant color bits, e.g. 24.
    pub depth: u8,
    /// Byte order of stored pixels.
    pub order: ByteOrder,
    /// Channel masks of the packed pixel value.
    pub masks: ChannelMasks,
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self::xrgb8888()
    }
}

impl PixelFormat {
    /// The fixed format the adapter negotiates: 32bpp, 24-bit depth,
    /// little-endian, red at bit 16, green at bit 8, blue at bit 0.
    ///
    /// In memory a pixel with R=0xAA, G=0xBB, B=0xCC is stored as
    /// `[0xCC, 0xBB, 0xAA, 0x00]`.
    pub const fn xrgb8888() -> Self {
        Self {
            bits_per_pixel: 32,
            depth: 24,
            order: ByteOrder::Little,
            masks: ChannelMasks::new(0x00FF_0000, 0x0000_FF00, 0x0000_00FF),
        }
    }

    /// Build a little-endian format from a bits-per-pixel value and the masks
    /// reported by a host surface. Depth is derived from the masks.
    pub const fn from_masks(bits_per_pixel: u8, masks: ChannelMasks) -> Self {
        Self {
            bits_per_pixel,
            depth: masks.depth(),
            order: ByteOrder::Little,
            masks,
        }
    }

    /// Storage width of one pixel in bytes, rounded up.
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel as usize).div_ceil(8)
    }

    /// Pack an `[R, G, B]` triple (0-255 per channel) into a pixel value,
    /// scaling each channel to the width of its mask.
    pub fn pack_rgb(&self, rgb: [u8; 3]) -> u32 {
        let channel = |value: u8, mask: u32| -> u32 {
            let max = ChannelMasks::max(mask);
            (((value as u64 * max as u64) / 255) as u32) << ChannelMasks::shift(mask)
        };
        channel(rgb[0], self.masks.red)
            | channel(rgb[1], self.masks.green)
            | channel(rgb[2], self.masks.blue)
    }

    /// Unpack a pixel value to `[R, G, B]`, scaling each channel to 0-255.
    pub fn unpack_rgb(&self, value: u32) -> [u8; 3] {
        let channel = |mask: u32| -> u8 {
            let max = ChannelMasks::max(mask);
            if max == 0 {
                return 0;
            }
            let raw = (value & mask) >> ChannelMasks::shift(mask);
            ((raw as u64 * 255) / max as u64) as u8
        };
        [
            channel(self.masks.red),
            channel(self.masks.green),
            channel(self.masks.blue),
        ]
    }

    /// Store `rgb` into `out` using this format's width and byte order.
    ///
    /// Only the first `bytes_per_pixel()` bytes of `out` are written; a
    /// shorter slice is filled as far as it goes.
    pub fn write_rgb(&self, rgb: [u8; 3], out: &mut [u8]) {
        let value = self.pack_rgb(rgb);
        let bpp = self.bytes_per_pixel().min(out.len());
        for (i, byte) in out.iter_mut().take(bpp).enumerate() {
            let shift = match self.order {
                ByteOrder::Little => i * 8,
                ByteOrder::Big => (self.bytes_per_pixel() - 1 - i) * 8,
            };
            *byte = (value >> shift) as u8;
        }
    }

    /// Load the pixel stored at the start of `bytes`.
    pub fn read_rgb(&self, bytes: &[u8]) -> [u8; 3] {
        let bpp = self.bytes_per_pixel().min(bytes.len());
        let mut value = 0u32;
        match self.order {
            ByteOrder::Little => {
                for (i, &byte) in bytes.iter().take(bpp).enumerate() {
                    value |= (byte as u32) << (i * 8);
                }
            }
            ByteOrder::Big => {
                for &byte in bytes.iter().take(bpp) {
                    value = (value << 8) | byte as u32;
                }
            }
        }
        self.unpack_rgb(value)
    }
}
