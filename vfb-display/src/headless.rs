//! An in-memory [`HostVideo`] with no window system.
//!
//! Surfaces and textures are plain byte vectors, events come from a scripted
//! queue, and every call is recorded so tests can check what the adapter
//! asked of the host. Individual operations can be made to fail.

use std::collections::{HashSet, VecDeque};

use crate::config::ScaleQuality;
use crate::errors::{HostError, HostOp};
use crate::host::{HostSurface, HostVideo, RendererFailure};
use vfb_common::Rect;
use vfb_input::HostEvent;
use vfb_pixelbuffer::PixelFormat;

const BYTES_PER_PIXEL: usize = 4;

/// A call made on a [`HeadlessHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    CreateSurface { width: u32, height: u32 },
    CreateWindow { window: u32, width: u32, height: u32 },
    SetWindowSize { window: u32, width: u32, height: u32 },
    SetScaleQuality(ScaleQuality),
    CreateRenderer { window: u32 },
    SetLogicalSize { width: u32, height: u32 },
    CreateTexture { texture: u32, width: u32, height: u32 },
    DestroyTexture { texture: u32 },
    UpdateTexture { texture: u32, rect: Rect },
    Clear,
    Copy { texture: u32 },
    Present,
}

#[derive(Debug)]
pub struct HeadlessSurface {
    pitch: usize,
    height: u32,
    pixels: Vec<u8>,
}

impl HostSurface for HeadlessSurface {
    fn pitch(&self) -> usize {
        self.pitch
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        PixelFormat::xrgb8888()
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessWindow {
    pub id: u32,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

#[derive(Debug)]
pub struct HeadlessRenderer {
    window: HeadlessWindow,
    logical_size: Option<(u32, u32)>,
    frame: Vec<u8>,
    presented: usize,
}

impl HeadlessRenderer {
    pub fn window(&self) -> &HeadlessWindow {
        &self.window
    }

    pub fn logical_size(&self) -> Option<(u32, u32)> {
        self.logical_size
    }

    /// Pixels copied in since the last clear.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    pub fn presented(&self) -> usize {
        self.presented
    }
}

/// Streaming texture, rows packed at `width * 4` bytes.
#[derive(Debug)]
pub struct HeadlessTexture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl HeadlessTexture {
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

#[derive(Debug)]
pub struct HeadlessHost {
    row_alignment: usize,
    events: VecDeque<HostEvent>,
    failing: HashSet<HostOp>,
    calls: Vec<HostCall>,
    next_id: u32,
    live_textures: usize,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessHost {
    /// Rows padded to 4 bytes, i.e. no padding for 32-bit pixels.
    pub fn new() -> Self {
        Self::with_row_alignment(BYTES_PER_PIXEL)
    }

    /// Pad every surface row to a multiple of `alignment` bytes.
    pub fn with_row_alignment(alignment: usize) -> Self {
        Self {
            row_alignment: alignment.max(1),
            events: VecDeque::new(),
            failing: HashSet::new(),
            calls: Vec::new(),
            next_id: 1,
            live_textures: 0,
        }
    }

    pub fn push_event(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    pub fn push_events(&mut self, events: impl IntoIterator<Item = HostEvent>) {
        self.events.extend(events);
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Make `op` fail until [`HeadlessHost::recover`] is called.
    pub fn fail(&mut self, op: HostOp) {
        self.failing.insert(op);
    }

    pub fn recover(&mut self, op: HostOp) {
        self.failing.remove(&op);
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of calls matching `pred`.
    pub fn count_calls(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }

    /// Textures created and not yet destroyed.
    pub fn live_textures(&self) -> usize {
        self.live_textures
    }

    fn check(&self, op: HostOp) -> Result<(), HostError> {
        if self.failing.contains(&op) {
            return Err(HostError::new(op, "injected failure"));
        }
        Ok(())
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl HostVideo for HeadlessHost {
    type Surface = HeadlessSurface;
    type Window = HeadlessWindow;
    type Renderer = HeadlessRenderer;
    type Texture = HeadlessTexture;

    fn create_surface(&mut self, width: u32, height: u32) -> Result<HeadlessSurface, HostError> {
        self.calls.push(HostCall::CreateSurface { width, height });
        self.check(HostOp::CreateSurface)?;
        let row = width as usize * BYTES_PER_PIXEL;
        let pitch = row.div_ceil(self.row_alignment) * self.row_alignment;
        Ok(HeadlessSurface {
            pitch,
            height,
            pixels: vec![0; pitch * height as usize],
        })
    }

    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        resizable: bool,
    ) -> Result<HeadlessWindow, HostError> {
        let id = self.next_id();
        self.calls.push(HostCall::CreateWindow {
            window: id,
            width,
            height,
        });
        self.check(HostOp::CreateWindow)?;
        Ok(HeadlessWindow {
            id,
            title: title.to_string(),
            width,
            height,
            resizable,
        })
    }

    fn set_window_size(
        &mut self,
        window: &mut HeadlessWindow,
        width: u32,
        height: u32,
    ) -> Result<(), HostError> {
        self.calls.push(HostCall::SetWindowSize {
            window: window.id,
            width,
            height,
        });
        self.check(HostOp::ResizeWindow)?;
        window.width = width;
        window.height = height;
        Ok(())
    }

    fn create_renderer(
        &mut self,
        window: HeadlessWindow,
    ) -> Result<HeadlessRenderer, RendererFailure<HeadlessWindow>> {
        self.calls
            .push(HostCall::CreateRenderer { window: window.id });
        if let Err(error) = self.check(HostOp::CreateRenderer) {
            return Err(RendererFailure {
                window: Some(window),
                error,
            });
        }
        Ok(HeadlessRenderer {
            window,
            logical_size: None,
            frame: Vec::new(),
            presented: 0,
        })
    }

    fn renderer_window(renderer: &mut HeadlessRenderer) -> &mut HeadlessWindow {
        &mut renderer.window
    }

    fn set_scale_quality(&mut self, quality: ScaleQuality) {
        self.calls.push(HostCall::SetScaleQuality(quality));
    }

    fn set_logical_size(
        &mut self,
        renderer: &mut HeadlessRenderer,
        width: u32,
        height: u32,
    ) -> Result<(), HostError> {
        self.calls.push(HostCall::SetLogicalSize { width, height });
        self.check(HostOp::SetLogicalSize)?;
        renderer.logical_size = Some((width, height));
        Ok(())
    }

    fn create_texture(
        &mut self,
        _renderer: &mut HeadlessRenderer,
        width: u32,
        height: u32,
    ) -> Result<HeadlessTexture, HostError> {
        let id = self.next_id();
        self.calls.push(HostCall::CreateTexture {
            texture: id,
            width,
            height,
        });
        self.check(HostOp::CreateTexture)?;
        if width == 0 || height == 0 {
            return Err(HostError::new(
                HostOp::CreateTexture,
                format!("invalid texture size {width}x{height}"),
            ));
        }
        self.live_textures += 1;
        Ok(HeadlessTexture {
            id,
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
    }

    fn destroy_texture(&mut self, texture: HeadlessTexture) {
        self.calls
            .push(HostCall::DestroyTexture { texture: texture.id });
        self.live_textures = self.live_textures.saturating_sub(1);
    }

    fn update_texture(
        &mut self,
        texture: &mut HeadlessTexture,
        rect: Rect,
        pixels: &[u8],
        pitch: usize,
    ) -> Result<(), HostError> {
        self.calls.push(HostCall::UpdateTexture {
            texture: texture.id,
            rect,
        });
        self.check(HostOp::UpdateTexture)?;
        let bounds = Rect::screen(texture.width, texture.height);
        if rect.intersect(&bounds) != rect {
            return Err(HostError::new(
                HostOp::UpdateTexture,
                format!("{rect:?} outside {}x{} texture", texture.width, texture.height),
            ));
        }
        let row_len = rect.width as usize * BYTES_PER_PIXEL;
        let dst_pitch = texture.pitch();
        for row in 0..rect.height as usize {
            let src_start = row * pitch;
            let src = pixels
                .get(src_start..src_start + row_len)
                .ok_or_else(|| HostError::new(HostOp::UpdateTexture, "source too short"))?;
            let dst_start =
                (rect.y as usize + row) * dst_pitch + rect.x as usize * BYTES_PER_PIXEL;
            texture.pixels[dst_start..dst_start + row_len].copy_from_slice(src);
        }
        Ok(())
    }

    fn clear(&mut self, renderer: &mut HeadlessRenderer) -> Result<(), HostError> {
        self.calls.push(HostCall::Clear);
        self.check(HostOp::Clear)?;
        renderer.frame.clear();
        Ok(())
    }

    fn copy(
        &mut self,
        renderer: &mut HeadlessRenderer,
        texture: &HeadlessTexture,
    ) -> Result<(), HostError> {
        self.calls.push(HostCall::Copy {
            texture: texture.id,
        });
        self.check(HostOp::Copy)?;
        renderer.frame = texture.pixels.clone();
        Ok(())
    }

    fn present(&mut self, renderer: &mut HeadlessRenderer) {
        self.calls.push(HostCall::Present);
        renderer.presented += 1;
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_surface_pitch_follows_alignment() {
        let mut host = HeadlessHost::with_row_alignment(64);
        let surface = host.create_surface(10, 3).unwrap();
        assert_eq!(surface.pitch(), 64);
        assert_eq!(surface.pixels().len(), 192);

        let mut host = HeadlessHost::new();
        assert_eq!(host.create_surface(10, 3).unwrap().pitch(), 40);
    }

    #[test]
    fn test_injected_failure_and_recovery() {
        let mut host = HeadlessHost::new();
        host.fail(HostOp::CreateSurface);
        let err = host.create_surface(4, 4).unwrap_err();
        assert_eq!(err.op, HostOp::CreateSurface);
        host.recover(HostOp::CreateSurface);
        assert!(host.create_surface(4, 4).is_ok());
    }

    #[test]
    fn test_failed_renderer_returns_window() {
        let mut host = HeadlessHost::new();
        let window = host.create_window("t", 8, 8, true).unwrap();
        host.fail(HostOp::CreateRenderer);
        let failure = host.create_renderer(window).unwrap_err();
        assert_eq!(failure.error.op, HostOp::CreateRenderer);
        assert_eq!(failure.window.map(|w| w.title), Some("t".to_string()));
    }

    #[test]
    fn test_update_texture_copies_rows() {
        let mut host = HeadlessHost::new();
        let window = host.create_window("t", 2, 2, true).unwrap();
        let mut renderer = host.create_renderer(window).unwrap();
        let mut texture = host.create_texture(&mut renderer, 2, 2).unwrap();

        // One pixel per row, source rows 12 bytes apart.
        let src = [1, 2, 3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 5, 6, 7, 8];
        host.update_texture(&mut texture, Rect::new(1, 0, 1, 2), &src, 12)
            .unwrap();
        assert_eq!(
            texture.pixels(),
            &[0, 0, 0, 0, 1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_update_texture_rejects_out_of_bounds() {
        let mut host = HeadlessHost::new();
        let window = host.create_window("t", 2, 2, true).unwrap();
        let mut renderer = host.create_renderer(window).unwrap();
        let mut texture = host.create_texture(&mut renderer, 2, 2).unwrap();
        assert!(host
            .update_texture(&mut texture, Rect::new(1, 1, 2, 2), &[0; 64], 8)
            .is_err());
    }

    #[test]
    fn test_events_are_fifo() {
        let mut host = HeadlessHost::new();
        host.push_events([HostEvent::FocusLost, HostEvent::Window]);
        assert_eq!(host.pending_events(), 2);
        assert_eq!(host.poll_event(), Some(HostEvent::FocusLost));
        assert_eq!(host.poll_event(), Some(HostEvent::Window));
        assert_eq!(host.poll_event(), None);
    }
}
