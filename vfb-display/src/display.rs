//! The adapter as seen by the emulation core: resize, update and redraw hooks.

use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::errors::DisplayError;
use crate::host::HostVideo;
use crate::session::{ScreenId, ScreenSession};
use crate::DisplayResult;
use vfb_common::Rect;
use vfb_input::{InputDispatcher, InputSink};
use vfb_pixelbuffer::FramebufferDescriptor;

/// A host display with one or more virtual screens.
pub struct Display<H: HostVideo> {
    host: H,
    config: DisplayConfig,
    input: InputDispatcher,
    screens: Vec<ScreenSession<H>>,
}

impl<H: HostVideo> Display<H> {
    pub fn new(host: H, config: DisplayConfig) -> Self {
        let input = InputDispatcher::new(config.input());
        Self {
            host,
            config,
            input,
            screens: Vec::new(),
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn input(&self) -> &InputDispatcher {
        &self.input
    }

    /// Register a screen. Nothing is allocated until its first resize.
    pub fn add_screen(&mut self) -> ScreenId {
        let id = ScreenId(self.screens.len());
        self.screens.push(ScreenSession::new(id));
        debug!("added screen {}", id.0);
        id
    }

    pub fn screen(&self, id: ScreenId) -> DisplayResult<&ScreenSession<H>> {
        self.screens
            .get(id.0)
            .ok_or(DisplayError::UnknownScreen(id.0))
    }

    pub fn screen_mut(&mut self, id: ScreenId) -> DisplayResult<&mut ScreenSession<H>> {
        self.screens
            .get_mut(id.0)
            .ok_or(DisplayError::UnknownScreen(id.0))
    }

    /// Resize hook. Host failures are logged and still return `Ok`; the
    /// descriptor then describes whatever could be negotiated.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnknownScreen`] for an id from another display.
    pub fn resize_screen(
        &mut self,
        id: ScreenId,
        width: u32,
        height: u32,
    ) -> DisplayResult<&FramebufferDescriptor> {
        let screen = self
            .screens
            .get_mut(id.0)
            .ok_or(DisplayError::UnknownScreen(id.0))?;
        Ok(screen.resize(&mut self.host, &self.config, width, height))
    }

    /// Redraw hook.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::UnknownScreen`] for an id from another display.
    pub fn redraw_screen(&mut self, id: ScreenId, rect: Rect) -> DisplayResult<()> {
        let screen = self
            .screens
            .get_mut(id.0)
            .ok_or(DisplayError::UnknownScreen(id.0))?;
        screen.redraw(&mut self.host, rect);
        Ok(())
    }

    /// Update hook: handle at most one pending host event. Returns whether
    /// one was pending.
    pub fn update(&mut self, sink: &mut dyn InputSink) -> bool {
        match self.host.poll_event() {
            Some(event) => {
                self.input.dispatch(&event, sink);
                true
            }
            None => false,
        }
    }

    /// Drain pending events. With `listen_loop` set this never returns and
    /// sleeps `idle_sleep_ms` whenever the queue is empty.
    pub fn run(&mut self, sink: &mut dyn InputSink) -> usize {
        let mut handled = 0;
        loop {
            while self.update(sink) {
                handled += 1;
            }
            if !self.config.listen_loop {
                trace!("handled {} host events", handled);
                return handled;
            }
            std::thread::sleep(self.config.idle_sleep());
        }
    }
}
