//! Redraw pipeline: surface to texture to window.

use pretty_assertions::assert_eq;
use vfb_common::Rect;
use vfb_display::{Display, DisplayConfig, HeadlessHost, HostCall, HostOp, ScreenId};

fn negotiated(host: HeadlessHost, width: u32, height: u32) -> (Display<HeadlessHost>, ScreenId) {
    let mut display = Display::new(host, DisplayConfig::default());
    let screen = display.add_screen();
    display.resize_screen(screen, width, height).unwrap();
    display.host_mut().take_calls();
    (display, screen)
}

/// Write a pixel through the descriptor, as a device model would.
fn put_pixel(display: &mut Display<HeadlessHost>, screen: ScreenId, x: u32, y: u32, rgb: [u8; 3]) {
    let session = display.screen_mut(screen).unwrap();
    let desc = *session.descriptor();
    let offset = desc.offset(x, y);
    let fb = session.framebuffer_mut().unwrap();
    desc.format.write_rgb(rgb, &mut fb[offset..offset + 4]);
}

fn texel(display: &Display<HeadlessHost>, screen: ScreenId, x: usize, y: usize) -> [u8; 4] {
    let texture = display.screen(screen).unwrap().texture().unwrap();
    let start = y * texture.pitch() + x * 4;
    let mut out = [0; 4];
    out.copy_from_slice(&texture.pixels()[start..start + 4]);
    out
}

#[test]
fn test_redraw_runs_every_step_in_order() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 4);
    display.redraw_screen(screen, Rect::new(1, 1, 2, 2)).unwrap();
    assert_eq!(
        display.host().calls(),
        &[
            HostCall::UpdateTexture {
                texture: 2,
                rect: Rect::new(1, 1, 2, 2)
            },
            HostCall::Clear,
            HostCall::Copy { texture: 2 },
            HostCall::Present,
        ]
    );
    let renderer = display.screen(screen).unwrap().renderer().unwrap();
    assert_eq!(renderer.presented(), 1);
}

#[test]
fn test_dirty_rect_reaches_texture() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 3);
    put_pixel(&mut display, screen, 2, 1, [0x11, 0x22, 0x33]);
    put_pixel(&mut display, screen, 0, 0, [0xff, 0xff, 0xff]);

    display.redraw_screen(screen, Rect::new(2, 1, 1, 1)).unwrap();
    // Little-endian XRGB: blue byte first.
    assert_eq!(texel(&display, screen, 2, 1), [0x33, 0x22, 0x11, 0x00]);
    // Outside the dirty rectangle, so not uploaded yet.
    assert_eq!(texel(&display, screen, 0, 0), [0, 0, 0, 0]);

    display.redraw_screen(screen, Rect::screen(4, 3)).unwrap();
    assert_eq!(texel(&display, screen, 0, 0), [0xff, 0xff, 0xff, 0x00]);

    let renderer = display.screen(screen).unwrap().renderer().unwrap();
    assert_eq!(renderer.frame()[..4], [0xff, 0xff, 0xff, 0x00]);
}

#[test]
fn test_redraw_with_padded_rows() {
    let (mut display, screen) = negotiated(HeadlessHost::with_row_alignment(32), 3, 2);
    assert_eq!(display.screen(screen).unwrap().descriptor().stride, 32);

    put_pixel(&mut display, screen, 1, 1, [0x01, 0x02, 0x03]);
    display.redraw_screen(screen, Rect::new(1, 1, 2, 1)).unwrap();
    assert_eq!(texel(&display, screen, 1, 1), [0x03, 0x02, 0x01, 0x00]);
}

#[test]
fn test_redraw_clips_to_screen() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 4);
    display.redraw_screen(screen, Rect::new(2, 3, 100, 100)).unwrap();
    assert_eq!(
        display.host().calls()[0],
        HostCall::UpdateTexture {
            texture: 2,
            rect: Rect::new(2, 3, 2, 1)
        }
    );
}

#[test]
fn test_redraw_far_outside_screen_does_not_upload() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 4);
    display
        .redraw_screen(screen, Rect::new(i32::MAX - 5, 0, 10, 1))
        .unwrap();
    display
        .redraw_screen(screen, Rect::new(0, i32::MAX, u32::MAX, u32::MAX))
        .unwrap();
    assert_eq!(
        display
            .host()
            .count_calls(|c| matches!(c, HostCall::UpdateTexture { .. })),
        0
    );
    assert_eq!(
        display.host().count_calls(|c| matches!(c, HostCall::Present)),
        2
    );
}

#[test]
fn test_redraw_oversized_rect_covers_whole_screen() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 3);
    put_pixel(&mut display, screen, 3, 2, [0x10, 0x20, 0x30]);

    display
        .redraw_screen(screen, Rect::new(0, 0, u32::MAX, u32::MAX))
        .unwrap();
    assert_eq!(
        display.host().calls()[0],
        HostCall::UpdateTexture {
            texture: 2,
            rect: Rect::screen(4, 3)
        }
    );
    assert_eq!(texel(&display, screen, 3, 2), [0x30, 0x20, 0x10, 0x00]);

    display
        .redraw_screen(screen, Rect::new(i32::MIN, i32::MIN, u32::MAX, u32::MAX))
        .unwrap();
    assert_eq!(
        display.host().calls()[4],
        HostCall::UpdateTexture {
            texture: 2,
            rect: Rect::screen(4, 3)
        }
    );
}

#[test]
fn test_empty_rect_still_presents() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 4);
    display.redraw_screen(screen, Rect::new(10, 10, 5, 5)).unwrap();
    assert_eq!(
        display.host().calls(),
        &[HostCall::Clear, HostCall::Copy { texture: 2 }, HostCall::Present]
    );
}

#[test]
fn test_redraw_continues_past_failures() {
    let (mut display, screen) = negotiated(HeadlessHost::new(), 4, 4);
    display.host_mut().fail(HostOp::UpdateTexture);
    display.host_mut().fail(HostOp::Clear);
    display.host_mut().fail(HostOp::Copy);

    display.redraw_screen(screen, Rect::screen(4, 4)).unwrap();
    assert_eq!(display.host().calls().len(), 4);
    assert_eq!(display.host().calls()[3], HostCall::Present);
    let renderer = display.screen(screen).unwrap().renderer().unwrap();
    assert_eq!(renderer.presented(), 1);
}

#[test]
fn test_redraw_without_texture_skips_upload() {
    let mut host = HeadlessHost::new();
    host.fail(HostOp::CreateTexture);
    let (mut display, screen) = negotiated(host, 4, 4);

    display.redraw_screen(screen, Rect::screen(4, 4)).unwrap();
    assert_eq!(display.host().calls(), &[HostCall::Clear, HostCall::Present]);
}

#[test]
fn test_redraw_without_renderer_does_nothing() {
    let mut host = HeadlessHost::new();
    host.fail(HostOp::CreateRenderer);
    let (mut display, screen) = negotiated(host, 4, 4);

    display.redraw_screen(screen, Rect::screen(4, 4)).unwrap();
    assert!(display.host().calls().is_empty());
}

#[test]
fn test_redraw_before_resize_is_harmless() {
    let mut display = Display::new(HeadlessHost::new(), DisplayConfig::default());
    let screen = display.add_screen();
    display.redraw_screen(screen, Rect::new(0, 0, 8, 8)).unwrap();
    assert!(display.host().calls().is_empty());
}
