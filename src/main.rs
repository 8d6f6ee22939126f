//! Segmatrix - animated sixteen-segment displays in the terminal.
//!
//! # Usage
//!
//! ```bash
//! segmatrix
//! segmatrix --demo clock --demo marquee --text "HELLO WORLD"
//! segmatrix --demo bouncer --svg bouncer.svg
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;

use segmatrix::app::App;
use segmatrix::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use segmatrix::demo::{DemoKind, DemoOptions, TickContext, build};
use segmatrix::logging::{self, LogTarget};
use segmatrix::svg;

/// Animated sixteen-segment display matrices
#[derive(Parser, Debug)]
#[command(name = "segmatrix", version, about, long_about = None)]
struct Cli {
    /// Matrix to show; repeat for several (default: typewriter)
    #[arg(long, value_enum, value_name = "DEMO")]
    demo: Vec<DemoKind>,

    /// Rows of displays (marquee, bouncer, typewriter)
    #[arg(long, value_name = "N")]
    rows: Option<String>,

    /// Columns of displays (marquee, bouncer, typewriter)
    #[arg(long, value_name = "N")]
    cols: Option<String>,

    /// Color of lit segments (name, #rrggbb or palette index)
    #[arg(long, value_name = "COLOR")]
    fg: Option<String>,

    /// Color of unlit segments (default: not drawn)
    #[arg(long, value_name = "COLOR")]
    bg: Option<String>,

    /// Marquee text, or initial typewriter text
    #[arg(long)]
    text: Option<String>,

    /// Render one frame of the first matrix to an SVG file and exit
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Write log output to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn demo_options(flags: &ConfigFlags) -> Vec<DemoOptions> {
    let foreground = flags.foreground();
    let background = flags.background();
    flags
        .demos_or_default()
        .into_iter()
        .map(|kind| DemoOptions {
            kind,
            rows: flags.rows,
            cols: flags.cols,
            foreground,
            background,
            text: flags.text.clone(),
        })
        .collect()
}

fn export_svg(path: &Path, demos: &[DemoOptions]) -> Result<()> {
    let options = demos.first().context("No matrix to export")?;
    let mut animation = build(options);
    animation.start(&TickContext::new(0, Local::now().time()));
    svg::write_file(path, animation.grid())?;
    info!(path = %path.display(), kind = %options.kind, "svg written");
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let target = match (&effective.log_file, &cli.svg) {
        (Some(path), _) => LogTarget::File(path),
        (None, Some(_)) => LogTarget::Stderr,
        (None, None) => LogTarget::Discard,
    };
    logging::init(target)?;

    let demos = demo_options(&effective);
    if let Some(path) = &cli.svg {
        return export_svg(path, &demos);
    }

    let mut app = App::new(demos);
    app.run().context("Application error")
}
