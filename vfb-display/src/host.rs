//! The host windowing/rendering facility, as seen by the adapter.
//!
//! The adapter never talks to a window system directly. Surfaces, windows,
//! renderers, textures and the event queue all go through [`HostVideo`].
//! `SdlHost` implements it on SDL2 and [`crate::HeadlessHost`] in memory.

use crate::config::ScaleQuality;
use crate::errors::HostError;
use vfb_common::Rect;
use vfb_input::HostEvent;
use vfb_pixelbuffer::PixelFormat;

/// A failed renderer creation.
#[derive(Debug)]
pub struct RendererFailure<W> {
    /// The window passed in, unless the host consumed it.
    pub window: Option<W>,
    pub error: HostError,
}

/// A CPU-side pixel surface allocated by the host.
pub trait HostSurface {
    /// Bytes per row, including any padding the host adds.
    fn pitch(&self) -> usize;

    fn height(&self) -> u32;

    /// Negotiated format; the masks are what the host actually chose.
    fn format(&self) -> PixelFormat;

    /// The whole pixel buffer, `pitch() * height()` bytes.
    fn pixels(&self) -> &[u8];

    fn pixels_mut(&mut self) -> &mut [u8];
}

/// Host capability surface used by the negotiator, redraw pipeline and event
/// pump.
///
/// A renderer owns the window it draws into; [`HostVideo::renderer_window`]
/// gives the window back for resizing.
pub trait HostVideo {
    type Surface: HostSurface;
    type Window;
    type Renderer;
    type Texture;

    /// Allocate a 32-bit XRGB surface.
    fn create_surface(&mut self, width: u32, height: u32) -> Result<Self::Surface, HostError>;

    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        resizable: bool,
    ) -> Result<Self::Window, HostError>;

    fn set_window_size(
        &mut self,
        window: &mut Self::Window,
        width: u32,
        height: u32,
    ) -> Result<(), HostError>;

    /// Create a renderer for `window`, taking ownership of it. On failure the
    /// window is handed back when the host still has it.
    fn create_renderer(
        &mut self,
        window: Self::Window,
    ) -> Result<Self::Renderer, RendererFailure<Self::Window>>;

    fn renderer_window(renderer: &mut Self::Renderer) -> &mut Self::Window;

    /// Texture filtering used when the renderer scales.
    fn set_scale_quality(&mut self, quality: ScaleQuality);

    /// Render at `width` x `height` regardless of the window size, keeping
    /// the aspect ratio.
    fn set_logical_size(
        &mut self,
        renderer: &mut Self::Renderer,
        width: u32,
        height: u32,
    ) -> Result<(), HostError>;

    /// Create a streaming ARGB8888 texture.
    fn create_texture(
        &mut self,
        renderer: &mut Self::Renderer,
        width: u32,
        height: u32,
    ) -> Result<Self::Texture, HostError>;

    fn destroy_texture(&mut self, texture: Self::Texture);

    /// Upload `rect` of the texture from `pixels`, whose first byte is the
    /// rectangle's top-left pixel and whose rows are `pitch` bytes apart.
    fn update_texture(
        &mut self,
        texture: &mut Self::Texture,
        rect: Rect,
        pixels: &[u8],
        pitch: usize,
    ) -> Result<(), HostError>;

    fn clear(&mut self, renderer: &mut Self::Renderer) -> Result<(), HostError>;

    /// Copy the whole texture onto the whole render target.
    fn copy(
        &mut self,
        renderer: &mut Self::Renderer,
        texture: &Self::Texture,
    ) -> Result<(), HostError>;

    fn present(&mut self, renderer: &mut Self::Renderer);

    /// Take the next pending event without blocking.
    fn poll_event(&mut self) -> Option<HostEvent>;
}
