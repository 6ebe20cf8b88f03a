//! vfb-display: Present a virtual framebuffer device in a host window
//!
//! [`Display`] is what the emulation core talks to. It exposes three hooks:
//!
//! - [`Display::resize_screen`] negotiates a pixel surface, window, renderer
//!   and texture for a screen and describes the framebuffer layout.
//! - [`Display::update`] polls one host event and forwards it to the device
//!   model through an [`InputSink`](vfb_input::InputSink).
//! - [`Display::redraw_screen`] pushes a dirty rectangle to the window.
//!
//! The host is abstracted by [`HostVideo`]. [`HeadlessHost`] keeps everything
//! in memory; with the `sdl` feature, [`SdlHost`] opens real windows.
//!
//! # Example
//!
//! ```
//! use vfb_common::Rect;
//! use vfb_display::{Display, DisplayConfig, HeadlessHost};
//! use vfb_input::InputCommand;
//!
//! let mut display = Display::new(HeadlessHost::new(), DisplayConfig::default());
//! let screen = display.add_screen();
//! let stride = display.resize_screen(screen, 640, 480).unwrap().stride;
//! assert_eq!(stride, 640 * 4);
//!
//! if let Some(fb) = display.screen_mut(screen).unwrap().framebuffer_mut() {
//!     fb.fill(0xff);
//! }
//! display.redraw_screen(screen, Rect::screen(640, 480)).unwrap();
//!
//! let mut input: Vec<InputCommand> = Vec::new();
//! assert!(!display.update(&mut input));
//! ```

pub mod config;
pub mod display;
pub mod errors;
pub mod headless;
pub mod host;
pub mod session;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use config::{DisplayConfig, ScaleQuality};
pub use display::Display;
pub use errors::{DisplayError, HostError, HostOp};
pub use headless::{
    HeadlessHost, HeadlessRenderer, HeadlessSurface, HeadlessTexture, HeadlessWindow, HostCall,
};
pub use host::{HostSurface, HostVideo, RendererFailure};
pub use session::{ScreenId, ScreenSession, StageKind};
#[cfg(feature = "sdl")]
pub use sdl::{SdlHost, SdlSurface};

/// Result type for display operations.
pub type DisplayResult<T> = Result<T, DisplayError>;
