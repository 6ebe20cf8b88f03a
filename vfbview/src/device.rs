//! A stand-in framebuffer device: paints colour bars and logs its input.

use tracing::info;
use vfb_input::{InputSink, Keyval};
use vfb_pixelbuffer::FramebufferDescriptor;

const BARS: [[u8; 3]; 8] = [
    [0xff, 0xff, 0xff],
    [0xff, 0xff, 0x00],
    [0x00, 0xff, 0xff],
    [0x00, 0xff, 0x00],
    [0xff, 0x00, 0xff],
    [0xff, 0x00, 0x00],
    [0x00, 0x00, 0xff],
    [0x00, 0x00, 0x00],
];

#[derive(Debug, Default)]
pub struct TestPattern {
    keys: usize,
    pointer_reports: usize,
}

impl TestPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> usize {
        self.keys
    }

    pub fn pointer_reports(&self) -> usize {
        self.pointer_reports
    }

    /// Fill `fb` with vertical colour bars over a grey ramp in the bottom
    /// quarter, packed for `desc`'s format.
    pub fn paint(&self, desc: &FramebufferDescriptor, fb: &mut [u8]) {
        let bpp = desc.format.bytes_per_pixel();
        if desc.width == 0 || bpp == 0 {
            return;
        }
        let ramp_from = desc.height - desc.height / 4;
        for y in 0..desc.height {
            for x in 0..desc.width {
                let rgb = if y >= ramp_from {
                    let level = (x as u64 * 255 / desc.width as u64) as u8;
                    [level; 3]
                } else {
                    BARS[(x as usize * BARS.len()) / desc.width as usize]
                };
                let offset = desc.offset(x, y);
                if let Some(pixel) = fb.get_mut(offset..offset + bpp) {
                    desc.format.write_rgb(rgb, pixel);
                }
            }
        }
    }
}

impl InputSink for TestPattern {
    fn key_press(&mut self, down: bool, keyval: Keyval) {
        self.keys += 1;
        info!("key {:#06x} {}", keyval, if down { "down" } else { "up" });
    }

    fn mouse_button_press(&mut self, button: i32, x: i32, y: i32) {
        self.pointer_reports += 1;
        match button {
            0 => info!("pointer at ({}, {})", x, y),
            b if b > 0 => info!("button {} pressed at ({}, {})", b, x, y),
            b => info!("button {} released at ({}, {})", -b, x, y),
        }
    }
}
