//! Per-screen host resources: surface, window, renderer and texture.
//!
//! [`ScreenSession::resize`] negotiates a framebuffer with the host and
//! [`ScreenSession::redraw`] pushes a dirty rectangle to the window. Host
//! failures in either are logged and leave the session degraded, never
//! aborted.

use tracing::{debug, error, info, trace, warn};

use crate::config::DisplayConfig;
use crate::host::{HostSurface, HostVideo, RendererFailure};
use vfb_common::Rect;
use vfb_pixelbuffer::FramebufferDescriptor;

/// Identifies a screen within a [`crate::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub(crate) usize);

/// How far window and renderer setup got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Uninitialized,
    WindowReady,
    FullyNegotiated,
}

enum Stage<H: HostVideo> {
    Uninitialized,
    WindowReady(H::Window),
    FullyNegotiated(H::Renderer),
}

impl<H: HostVideo> Stage<H> {
    fn kind(&self) -> StageKind {
        match self {
            Stage::Uninitialized => StageKind::Uninitialized,
            Stage::WindowReady(_) => StageKind::WindowReady,
            Stage::FullyNegotiated(_) => StageKind::FullyNegotiated,
        }
    }
}

/// One virtual screen and the host objects presenting it.
pub struct ScreenSession<H: HostVideo> {
    id: ScreenId,
    stage: Stage<H>,
    surface: Option<H::Surface>,
    texture: Option<H::Texture>,
    size: (u32, u32),
    descriptor: FramebufferDescriptor,
}

impl<H: HostVideo> ScreenSession<H> {
    pub(crate) fn new(id: ScreenId) -> Self {
        Self {
            id,
            stage: Stage::Uninitialized,
            surface: None,
            texture: None,
            size: (0, 0),
            descriptor: FramebufferDescriptor::default(),
        }
    }

    pub fn stage(&self) -> StageKind {
        self.stage.kind()
    }

    /// Geometry requested by the last resize.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// The framebuffer layout from the last resize.
    pub fn descriptor(&self) -> &FramebufferDescriptor {
        &self.descriptor
    }

    /// Pixel memory the device model draws into, if a surface exists.
    pub fn framebuffer_mut(&mut self) -> Option<&mut [u8]> {
        self.surface.as_mut().map(HostSurface::pixels_mut)
    }

    pub fn texture(&self) -> Option<&H::Texture> {
        self.texture.as_ref()
    }

    pub fn renderer(&self) -> Option<&H::Renderer> {
        match &self.stage {
            Stage::FullyNegotiated(renderer) => Some(renderer),
            _ => None,
        }
    }

    /// Bring all host objects to `width` x `height` and describe the result.
    ///
    /// Never fails: a host allocation error is logged and the corresponding
    /// object stays absent until the next resize.
    pub fn resize(
        &mut self,
        host: &mut H,
        config: &DisplayConfig,
        width: u32,
        height: u32,
    ) -> &FramebufferDescriptor {
        debug!("screen {}: resize to {}x{}", self.id.0, width, height);
        self.size = (width, height);

        self.surface = None;
        match host.create_surface(width, height) {
            Ok(surface) => self.surface = Some(surface),
            Err(err) => error!("resize: {}", err),
        }

        self.ensure_window(host, config, width, height);
        self.ensure_renderer(host, config);

        if let Stage::FullyNegotiated(renderer) = &mut self.stage {
            if let Err(err) = host.set_logical_size(renderer, width, height) {
                error!("resize: {}", err);
            }
        }

        if let Some(old) = self.texture.take() {
            host.destroy_texture(old);
        }
        match &mut self.stage {
            Stage::FullyNegotiated(renderer) => {
                match host.create_texture(renderer, width, height) {
                    Ok(texture) => self.texture = Some(texture),
                    Err(err) => error!("resize: {}", err),
                }
            }
            _ => warn!("resize: no renderer, screen {} has no texture", self.id.0),
        }

        self.descriptor = match &self.surface {
            Some(surface) => FramebufferDescriptor::for_surface(
                surface.pitch(),
                surface.height(),
                surface.format(),
            ),
            None => FramebufferDescriptor::empty(height),
        };
        info!(
            "screen {}: {}x{} framebuffer, stride {} bytes",
            self.id.0, self.descriptor.width, self.descriptor.height, self.descriptor.stride
        );
        &self.descriptor
    }

    fn ensure_window(&mut self, host: &mut H, config: &DisplayConfig, width: u32, height: u32) {
        if let Stage::Uninitialized = self.stage {
            match host.create_window(&config.title, width, height, config.resizable) {
                Ok(window) => self.stage = Stage::WindowReady(window),
                Err(err) => error!("resize: {}", err),
            }
            return;
        }
        match &mut self.stage {
            Stage::Uninitialized => {}
            Stage::WindowReady(window) => {
                if let Err(err) = host.set_window_size(window, width, height) {
                    error!("resize: {}", err);
                }
            }
            Stage::FullyNegotiated(renderer) => {
                if let Err(err) = host.set_window_size(H::renderer_window(renderer), width, height)
                {
                    error!("resize: {}", err);
                }
            }
        }
    }

    fn ensure_renderer(&mut self, host: &mut H, config: &DisplayConfig) {
        let Stage::WindowReady(_) = self.stage else {
            return;
        };
        let Stage::WindowReady(window) = std::mem::replace(&mut self.stage, Stage::Uninitialized)
        else {
            return;
        };
        host.set_scale_quality(config.scale_quality);
        self.stage = match host.create_renderer(window) {
            Ok(renderer) => Stage::FullyNegotiated(renderer),
            Err(RendererFailure { window, error }) => {
                error!("resize: {}", error);
                match window {
                    Some(window) => Stage::WindowReady(window),
                    None => Stage::Uninitialized,
                }
            }
        };
    }

    /// Push `rect` of the surface to the window and present.
    ///
    /// Every step runs even if an earlier one failed; steps whose host object
    /// is missing are skipped.
    pub fn redraw(&mut self, host: &mut H, rect: Rect) {
        let (width, height) = self.size;
        let clipped = rect.intersect(&Rect::screen(width, height));

        match (&self.surface, &mut self.texture) {
            (Some(_), Some(_)) if clipped.is_empty() => {
                trace!("redraw: nothing to update in {:?}", rect);
            }
            (Some(surface), Some(texture)) => {
                let pitch = surface.pitch();
                let bpp = surface.format().bytes_per_pixel();
                let offset = clipped.y as usize * pitch + clipped.x as usize * bpp;
                match surface.pixels().get(offset..) {
                    Some(pixels) => {
                        if let Err(err) = host.update_texture(texture, clipped, pixels, pitch) {
                            error!("update: {}", err);
                        }
                    }
                    None => error!("update: {:?} lies outside the surface", clipped),
                }
            }
            _ => warn!("update: screen {} has no surface or texture", self.id.0),
        }

        let Stage::FullyNegotiated(renderer) = &mut self.stage else {
            warn!("update: screen {} has no renderer", self.id.0);
            return;
        };
        if let Err(err) = host.clear(renderer) {
            error!("update: {}", err);
        }
        if let Some(texture) = &self.texture {
            if let Err(err) = host.copy(renderer, texture) {
                error!("update: {}", err);
            }
        }
        host.present(renderer);
    }
}
