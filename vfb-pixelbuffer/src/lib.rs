//! Pixel format and framebuffer descriptor types.
//!
//! This crate provides the contract shared between the display adapter and the
//! virtual framebuffer device model: how pixels are laid out ([`PixelFormat`])
//! and where the negotiated buffer lives ([`FramebufferDescriptor`]).

pub mod descriptor;
pub mod format;

pub use descriptor::{scanline_pad, FramebufferDescriptor, PixelClass};
pub use format::{ByteOrder, ChannelMasks, PixelFormat};
