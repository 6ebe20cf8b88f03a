use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use vfb_common::Rect;
use vfb_display::{Display, DisplayConfig, HeadlessHost, HostVideo};

mod args;
mod device;

use args::Args;
use device::TestPattern;

/// Exit status after an interrupt, as a shell reports SIGINT.
const INTERRUPTED: i32 = 130;

fn init_logging(level: u8) {
    let default = match level {
        0 => "vfbview=info,vfb_display=info,vfb_input=info",
        1 => "vfbview=debug,vfb_display=debug,vfb_input=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Exit immediately on Ctrl-C, wherever the main thread is.
fn install_interrupt_handler() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build signal runtime")?;

    std::thread::Builder::new()
        .name("interrupt".to_string())
        .spawn(move || {
            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        info!("interrupted, exiting");
                        std::process::exit(INTERRUPTED);
                    }
                    Err(err) => warn!("failed to listen for Ctrl-C: {err}"),
                }
            });
        })
        .context("Failed to spawn signal thread")?;

    Ok(())
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "vfbview")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn load_config(args: &Args) -> Result<DisplayConfig> {
    let mut config = match &args.config {
        Some(path) => DisplayConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => {
                info!("Using config file {}", path.display());
                DisplayConfig::from_file(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?
            }
            None => DisplayConfig::default(),
        },
    };

    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run<H: HostVideo>(host: H, config: DisplayConfig, args: &Args) -> Result<()> {
    let mut display = Display::new(host, config);
    let screen = display.add_screen();

    let desc = *display.resize_screen(screen, args.width, args.height)?;
    info!(
        "Framebuffer {}x{}, stride {} bytes, {} bpp",
        desc.width, desc.height, desc.stride, desc.format.bits_per_pixel
    );

    let mut device = TestPattern::new();
    match display.screen_mut(screen)?.framebuffer_mut() {
        Some(fb) => device.paint(&desc, fb),
        None => warn!("No framebuffer; nothing painted"),
    }
    display.redraw_screen(screen, Rect::screen(args.width, args.height))?;

    let handled = display.run(&mut device);
    info!(
        "Handled {} host events ({} key reports, {} pointer reports)",
        handled,
        device.keys(),
        device.pointer_reports()
    );
    Ok(())
}

#[cfg(feature = "sdl")]
fn start(args: &Args, config: DisplayConfig) -> Result<()> {
    if args.headless {
        return run(HeadlessHost::new(), config, args);
    }
    let host = vfb_display::SdlHost::new().context("Failed to initialize SDL")?;
    run(host, config, args)
}

#[cfg(not(feature = "sdl"))]
fn start(args: &Args, config: DisplayConfig) -> Result<()> {
    if !args.headless {
        warn!("Built without SDL support; using the headless host");
    }
    run(HeadlessHost::new(), config, args)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    info!("Starting vfbview {}", env!("CARGO_PKG_VERSION"));

    install_interrupt_handler()?;
    let config = load_config(&args)?;
    start(&args, config)
}
