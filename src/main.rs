// SPDX-License-Identifier: MIT
//
// shade: OKLCH shade palettes from one seed color.
//
// This is the command-line front end over the two library crates:
//
//   shade-color   → hex parsing, Oklab/OKLCH conversion, gamut mapping
//   shade-palette → ramps, synthesis, CSS / theme preset / JSON output
//
// One invocation is one pipeline:
//
//   args → Options → synthesize → render (css | preset | json) → stdout or file
//
// Diagnostics go to stderr through tracing, so stdout stays clean for
// piping into a stylesheet or config file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use shade_palette::options::DEFAULT_STEPS;
use shade_palette::{
    CssOptions, Gamut, Mode, Options, PresetOptions, render_css_variables, render_theme_preset,
    synthesize,
};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Format {
    /// CSS custom properties, one block per side.
    #[default]
    Css,
    /// Theme preset JSON for utility-CSS frameworks.
    Preset,
    /// The palette itself as JSON.
    Json,
}

#[derive(Debug, Parser)]
#[command(version)]
/// Generate light and dark OKLCH shade ramps from a seed color.
struct Args {
    /// Seed color as hex: #rgb, #rgba, #rrggbb or #rrggbbaa.
    seed: String,

    #[arg(long, default_value_t = DEFAULT_STEPS)]
    /// Shades per ramp, clamped to 2..=24.
    steps: usize,
    #[arg(long, default_value_t = Mode::Both)]
    /// Which ramps to generate: light, dark or both.
    mode: Mode,
    #[arg(long, default_value_t = Gamut::Srgb)]
    /// Target gamut: srgb or p3. Shades are always bounded by sRGB.
    gamut: Gamut,
    #[arg(long)]
    /// Keep near-gray seeds gray instead of lifting their chroma.
    no_boost: bool,

    #[arg(long, value_enum, default_value_t = Format::Css)]
    /// Output format.
    format: Format,
    #[arg(long, default_value = "brand")]
    /// Variable and color name prefix.
    prefix: String,
    #[arg(long, default_value = ":root")]
    /// CSS selector for the light ramp.
    selector: String,
    #[arg(long, default_value = ".dark")]
    /// CSS selector for the dark ramp.
    dark_selector: String,

    #[arg(short, long)]
    /// Write to this file instead of stdout.
    output: Option<PathBuf>,
    #[arg(short, long, action = ArgAction::Count)]
    /// More log output on stderr; repeat for more detail.
    verbose: u8,
}

impl Args {
    const fn options(&self) -> Options {
        Options {
            steps: self.steps,
            mode: self.mode,
            gamut: self.gamut,
            boost_low_chroma: !self.no_boost,
        }
    }

    fn css_options(&self) -> CssOptions {
        CssOptions::default()
            .with_prefix(&self.prefix)
            .with_selector(&self.selector)
            .with_dark_selector(&self.dark_selector)
    }

    fn preset_options(&self) -> PresetOptions {
        PresetOptions {
            prefix: self.prefix.clone(),
        }
    }

    const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Synthesize the palette and render it in the requested format.
fn render(args: &Args) -> Result<String> {
    let palette = synthesize(&args.seed, &args.options())?;
    info!(
        hue = palette.hue(),
        steps = palette.step_count(),
        format = ?args.format,
        "palette ready"
    );

    let text = match args.format {
        Format::Css => render_css_variables(&palette, &args.css_options()),
        Format::Preset => render_theme_preset(&palette, &args.preset_options())
            .to_json()
            .context("failed to serialize theme preset")?,
        Format::Json => palette.to_json().context("failed to serialize palette")?,
    };
    Ok(text)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.log_level();
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("shade", level)
        .with_target("shade_palette", level)
        .with_target("shade_color", level);
    let format = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    let text = render(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote palette");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}").context("failed to write to stdout")?;
        }
    }

    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
