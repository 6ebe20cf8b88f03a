//! [`HostVideo`] on SDL2.

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture};
use sdl2::surface::Surface;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use tracing::{debug, warn};

use crate::config::ScaleQuality;
use crate::errors::{HostError, HostOp};
use crate::host::{HostSurface, HostVideo, RendererFailure};
use vfb_common::Rect;
use vfb_input::{HostEvent, HostKey, KeyEvent, KeyModifiers};
use vfb_pixelbuffer::{ChannelMasks, PixelFormat};

const SCALE_QUALITY_HINT: &str = "SDL_RENDER_SCALE_QUALITY";

/// SDL surface in host memory.
pub struct SdlSurface(Surface<'static>);

impl HostSurface for SdlSurface {
    fn pitch(&self) -> usize {
        self.0.pitch() as usize
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn format(&self) -> PixelFormat {
        match self.0.pixel_format_enum().into_masks() {
            Ok(m) => PixelFormat::from_masks(m.bpp, ChannelMasks::new(m.rmask, m.gmask, m.bmask)),
            Err(err) => {
                warn!("surface format has no masks: {}", err);
                PixelFormat::xrgb8888()
            }
        }
    }

    fn pixels(&self) -> &[u8] {
        // Plain software surfaces never need locking.
        self.0.without_lock().unwrap_or(&[])
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        self.0.without_lock_mut().unwrap_or(&mut [])
    }
}

pub struct SdlHost {
    _sdl: Sdl,
    video: VideoSubsystem,
    events: EventPump,
}

impl SdlHost {
    /// Initialize SDL video and take the event pump.
    ///
    /// # Errors
    ///
    /// Returns an error if SDL or its video subsystem cannot be initialized.
    pub fn new() -> Result<Self, HostError> {
        let init = |e: String| HostError::new(HostOp::Init, e);
        let sdl = sdl2::init().map_err(init)?;
        let video = sdl.video().map_err(init)?;
        let events = sdl.event_pump().map_err(init)?;
        debug!("SDL video driver: {}", video.current_video_driver());
        Ok(Self {
            _sdl: sdl,
            video,
            events,
        })
    }
}

impl HostVideo for SdlHost {
    type Surface = SdlSurface;
    type Window = Window;
    type Renderer = Canvas<Window>;
    type Texture = Texture;

    fn create_surface(&mut self, width: u32, height: u32) -> Result<SdlSurface, HostError> {
        Surface::new(width, height, PixelFormatEnum::RGB888)
            .map(SdlSurface)
            .map_err(|e| HostError::new(HostOp::CreateSurface, e))
    }

    fn create_window(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        resizable: bool,
    ) -> Result<Window, HostError> {
        let mut builder = self.video.window(title, width, height);
        builder.position_centered();
        if resizable {
            builder.resizable();
        }
        builder
            .build()
            .map_err(|e| HostError::new(HostOp::CreateWindow, e.to_string()))
    }

    fn set_window_size(
        &mut self,
        window: &mut Window,
        width: u32,
        height: u32,
    ) -> Result<(), HostError> {
        window
            .set_size(width, height)
            .map_err(|e| HostError::new(HostOp::ResizeWindow, e.to_string()))
    }

    fn create_renderer(
        &mut self,
        window: Window,
    ) -> Result<Canvas<Window>, RendererFailure<Window>> {
        // The builder consumes the window either way.
        window.into_canvas().build().map_err(|e| RendererFailure {
            window: None,
            error: HostError::new(HostOp::CreateRenderer, e.to_string()),
        })
    }

    fn renderer_window(renderer: &mut Canvas<Window>) -> &mut Window {
        renderer.window_mut()
    }

    fn set_scale_quality(&mut self, quality: ScaleQuality) {
        if !sdl2::hint::set(SCALE_QUALITY_HINT, quality.as_hint()) {
            warn!("scale quality hint {} not accepted", quality.as_hint());
        }
    }

    fn set_logical_size(
        &mut self,
        renderer: &mut Canvas<Window>,
        width: u32,
        height: u32,
    ) -> Result<(), HostError> {
        renderer
            .set_logical_size(width, height)
            .map_err(|e| HostError::new(HostOp::SetLogicalSize, e.to_string()))
    }

    fn create_texture(
        &mut self,
        renderer: &mut Canvas<Window>,
        width: u32,
        height: u32,
    ) -> Result<Texture, HostError> {
        renderer
            .texture_creator()
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| HostError::new(HostOp::CreateTexture, e.to_string()))
    }

    fn destroy_texture(&mut self, texture: Texture) {
        // SAFETY: textures are only created from this host's renderers, and a
        // session destroys its texture before its renderer goes away.
        unsafe { texture.destroy() }
    }

    fn update_texture(
        &mut self,
        texture: &mut Texture,
        rect: Rect,
        pixels: &[u8],
        pitch: usize,
    ) -> Result<(), HostError> {
        let rect = sdl2::rect::Rect::new(rect.x, rect.y, rect.width, rect.height);
        texture
            .update(Some(rect), pixels, pitch)
            .map_err(|e| HostError::new(HostOp::UpdateTexture, e.to_string()))
    }

    fn clear(&mut self, renderer: &mut Canvas<Window>) -> Result<(), HostError> {
        renderer.clear();
        Ok(())
    }

    fn copy(&mut self, renderer: &mut Canvas<Window>, texture: &Texture) -> Result<(), HostError> {
        renderer
            .copy(texture, None, None)
            .map_err(|e| HostError::new(HostOp::Copy, e))
    }

    fn present(&mut self, renderer: &mut Canvas<Window>) {
        renderer.present();
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        self.events.poll_event().map(convert_event)
    }
}

fn convert_event(event: Event) -> HostEvent {
    match event {
        Event::Window {
            win_event: WindowEvent::FocusLost,
            ..
        } => HostEvent::FocusLost,
        Event::Window { .. } => HostEvent::Window,
        Event::MouseWheel { x, y, .. } => HostEvent::MouseWheel { dx: x, dy: y },
        Event::MouseMotion { x, y, .. } => HostEvent::MouseMotion { x, y },
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => HostEvent::MouseButton {
            button: button_number(mouse_btn),
            pressed: true,
            x,
            y,
        },
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => HostEvent::MouseButton {
            button: button_number(mouse_btn),
            pressed: false,
            x,
            y,
        },
        Event::KeyDown {
            keycode, keymod, ..
        } => HostEvent::Key(key_event(keycode, keymod, true)),
        Event::KeyUp {
            keycode, keymod, ..
        } => HostEvent::Key(key_event(keycode, keymod, false)),
        Event::TextInput { text, .. } => HostEvent::TextInput(text),
        other => HostEvent::Other(format!("{other:?}")),
    }
}

fn button_number(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 1,
        MouseButton::Middle => 2,
        MouseButton::Right => 3,
        MouseButton::X1 => 4,
        MouseButton::X2 => 5,
        MouseButton::Unknown => 0,
    }
}

fn key_event(keycode: Option<Keycode>, keymod: Mod, pressed: bool) -> KeyEvent {
    let key = keycode.map_or(HostKey::UNKNOWN, |kc| HostKey(kc as i32));
    KeyEvent::new(key, KeyModifiers::from_bits_truncate(keymod.bits()), pressed)
}
