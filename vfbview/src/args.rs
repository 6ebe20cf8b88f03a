use clap::Parser;
use std::path::PathBuf;
use vfb_display::{DisplayConfig, ScaleQuality};

#[derive(Parser, Debug)]
#[command(name = "vfbview")]
#[command(about = "Show a virtual framebuffer test pattern in a host window")]
#[command(version)]
pub struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Framebuffer width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Framebuffer height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Do not let the user resize the window
    #[arg(long)]
    pub no_resize: bool,

    /// Display only; no keyboard or mouse input reaches the device
    #[arg(long)]
    pub view_only: bool,

    /// Keep processing events until interrupted
    #[arg(long)]
    pub listen_loop: bool,

    /// Scaling quality (nearest, linear, best)
    #[arg(long, value_name = "QUALITY")]
    pub scale_quality: Option<ScaleQuality>,

    /// Use the in-memory host instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Verbose logging level (repeat for more verbosity: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Override `config` with whatever was given on the command line.
    pub fn apply(&self, config: &mut DisplayConfig) {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if self.no_resize {
            config.resizable = false;
        }
        if self.view_only {
            config.view_only = true;
        }
        if self.listen_loop {
            config.listen_loop = true;
        }
        if let Some(quality) = self.scale_quality {
            config.scale_quality = quality;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["vfbview"]).unwrap();
        assert_eq!((args.width, args.height), (1024, 768));
        assert!(!args.headless);
        assert_eq!(args.verbose, 0);

        let mut config = DisplayConfig::default();
        args.apply(&mut config);
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "vfbview",
            "--title",
            "cgsix",
            "--no-resize",
            "--view-only",
            "--listen-loop",
            "--scale-quality",
            "nearest",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);

        let mut config = DisplayConfig::default();
        args.apply(&mut config);
        assert_eq!(config.title, "cgsix");
        assert!(!config.resizable);
        assert!(config.view_only);
        assert!(config.listen_loop);
        assert_eq!(config.scale_quality, ScaleQuality::Nearest);
    }

    #[test]
    fn test_rejects_unknown_scale_quality() {
        assert!(Args::try_parse_from(["vfbview", "--scale-quality", "blurry"]).is_err());
    }
}
