//! The framebuffer descriptor published to the device model.
//!
//! After every resize the adapter overwrites the descriptor with the geometry
//! of the freshly negotiated host surface. The device model reads it to learn
//! where to draw and how to encode colors.
//!
//! # Stride is in Bytes
//!
//! Unlike the pixel width, `stride` is the byte distance between the starts
//! of two consecutive rows. Hosts may pad rows, so `width` is always derived
//! from the stride (`stride / bytes_per_pixel`) and can be larger than the
//! width that was requested.

use crate::PixelFormat;

/// Pixel class of the negotiated buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelClass {
    /// Direct color through the channel masks.
    #[default]
    Color,
}

/// Scanline padding in bits implied by a row stride of `stride` bytes.
///
/// ```
/// use vfb_pixelbuffer::scanline_pad;
///
/// assert_eq!(scanline_pad(2560), 32);
/// assert_eq!(scanline_pad(6), 16);
/// assert_eq!(scanline_pad(3), 8);
/// ```
pub const fn scanline_pad(stride: usize) -> u32 {
    if stride % 4 == 0 {
        32
    } else if stride % 2 == 0 {
        16
    } else {
        8
    }
}

/// Geometry and format of the shared pixel buffer.
///
/// The buffer memory itself belongs to the host surface; the device model only
/// borrows it until the next resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramebufferDescriptor {
    /// Width in pixels (`stride / bytes_per_pixel`).
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per row, possibly padded.
    pub stride: usize,
    /// Total buffer size in bytes (`stride * height`).
    pub buffer_len: usize,
    /// Row padding in bits derived from `stride`.
    pub scanline_pad: u32,
    pub format: PixelFormat,
    pub class: PixelClass,
}

impl Default for FramebufferDescriptor {
    fn default() -> Self {
        Self::empty(0)
    }
}

impl FramebufferDescriptor {
    /// A descriptor with no backing buffer. Published when the host could not
    /// allocate a surface so that the device model draws nothing.
    pub const fn empty(height: u32) -> Self {
        Self {
            width: 0,
            height,
            stride: 0,
            buffer_len: 0,
            scanline_pad: 32,
            format: PixelFormat::xrgb8888(),
            class: PixelClass::Color,
        }
    }

    /// Describe a host surface with the given row stride, height and format.
    pub fn for_surface(stride: usize, height: u32, format: PixelFormat) -> Self {
        let bpp = format.bytes_per_pixel().max(1);
        Self {
            width: (stride / bpp) as u32,
            height,
            stride,
            buffer_len: stride * height as usize,
            scanline_pad: scanline_pad(stride),
            format,
            class: PixelClass::Color,
        }
    }

    /// True if a buffer is attached.
    pub const fn has_buffer(&self) -> bool {
        self.buffer_len > 0
    }

    /// The size invariant: the buffer holds at least `stride * height` bytes.
    pub const fn is_consistent(&self) -> bool {
        self.buffer_len >= self.stride * self.height as usize
    }

    /// Byte offset of pixel (x, y) within the buffer.
    pub const fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * self.format.bytes_per_pixel()
    }
}
