#![deny(unsafe_code)]
//! CLI binary for the huepath color engine.
//!
//! Subcommands:
//! - `convert <hex>` — show a color in every representation
//! - `gradient <start> <end>` — print interpolated stops
//! - `random` — draw a random color (optionally with a hue-rotated companion)
//! - `render` — write a PNG with one gradient band per color space

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use huepath_core::{
    companion_pair, random_color, ColorSpace, ColorValue, GradientRequest, Xorshift64,
};
use huepath_render::linear_gradient_css;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "huepath", about = "Color conversion and gradient interpolation")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a hex color as 8-bit RGB, linear RGB, OKLab, and OKLCh.
    Convert {
        /// Hex color, e.g. "#9013FE" or "9013fe".
        color: String,
    },
    /// Print evenly spaced stops between two colors.
    Gradient {
        /// Start color (hex).
        start: String,

        /// End color (hex).
        end: String,

        /// Blend space: rgb, linear-rgb, oklab, oklch.
        #[arg(short, long, default_value = "oklch")]
        space: ColorSpace,

        /// Number of stops, endpoints included.
        #[arg(short = 'n', long, default_value_t = 5)]
        samples: usize,

        /// Print a CSS linear-gradient value instead of one stop per line.
        #[arg(long)]
        css: bool,
    },
    /// Draw a random OKLCh color.
    Random {
        /// PRNG seed; omit for a fresh color each run.
        #[arg(long)]
        seed: Option<u64>,

        /// Also draw a companion rotated 120-240 degrees in hue.
        #[arg(long)]
        companion: bool,
    },
    /// Write a PNG with one gradient band per color space.
    Render {
        /// Start color (hex). Defaults to the request file's, or #9013fe.
        start: Option<String>,

        /// End color (hex). Defaults to the request file's, or #50e3c2.
        end: Option<String>,

        /// JSON gradient request to load instead of positional colors.
        #[arg(long)]
        request: Option<PathBuf>,

        /// Spaces to render, top to bottom.
        #[arg(long, value_delimiter = ',', default_value = "rgb,oklab,oklch")]
        spaces: Vec<ColorSpace>,

        /// Stops per band.
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Height of each band in pixels.
        #[arg(short = 'H', long, default_value_t = 50)]
        band_height: usize,

        /// Output file path.
        #[arg(short, long, default_value = "gradient.png")]
        output: PathBuf,
    },
}

fn describe(color: &ColorValue) -> serde_json::Value {
    let lin = color.linear_rgb();
    let lab = color.oklab();
    let lch = color.oklch();
    serde_json::json!({
        "hex": color.to_hex(),
        "rgb": color.rgb8(),
        "linear": [lin.r, lin.g, lin.b],
        "oklab": [lab.l, lab.a, lab.b],
        "oklch": [lch.l, lch.c, lch.h],
    })
}

fn print_color(color: &ColorValue) {
    let [r, g, b] = color.rgb8();
    let lch = color.oklch();
    println!(
        "{}  rgb({r},{g},{b})  oklch({:.4} {:.4} {:.2})",
        color.to_hex(),
        lch.l,
        lch.c,
        lch.h
    );
}

fn load_request(path: &Path) -> Result<GradientRequest, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::MalformedRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { color } => {
            let color = ColorValue::from_hex(&color)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&describe(&color))?);
            } else {
                let lin = color.linear_rgb();
                let lab = color.oklab();
                print_color(&color);
                println!("linear({:.6} {:.6} {:.6})", lin.r, lin.g, lin.b);
                println!("oklab({:.6} {:.6} {:.6})", lab.l, lab.a, lab.b);
            }
        }
        Command::Gradient {
            start,
            end,
            space,
            samples,
            css,
        } => {
            let stops = GradientRequest::new(&start, &end, space, samples).run()?;
            if cli.json {
                let info = serde_json::json!({
                    "space": space,
                    "stops": stops.iter().map(describe).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if css {
                println!("{}", linear_gradient_css(&stops));
            } else {
                for stop in &stops {
                    print_color(stop);
                }
            }
        }
        Command::Random { seed, companion } => {
            let mut rng = seed.map_or_else(Xorshift64::from_entropy, Xorshift64::new);
            let colors = if companion {
                let (a, b) = companion_pair(&mut rng);
                vec![a, b]
            } else {
                vec![random_color(&mut rng)]
            };
            if cli.json {
                let info: Vec<_> = colors.iter().map(describe).collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for color in &colors {
                    print_color(color);
                }
            }
        }
        Command::Render {
            start,
            end,
            request,
            spaces,
            samples,
            width,
            band_height,
            output,
        } => {
            if spaces.is_empty() {
                return Err(CliError::NoSpaces);
            }
            let mut base = match &request {
                Some(path) => load_request(path)?,
                None => GradientRequest::default(),
            };
            if let Some(start) = start {
                base.start = start;
            }
            if let Some(end) = end {
                base.end = end;
            }
            if let Some(samples) = samples {
                base.samples = samples;
            }

            let bands = spaces
                .iter()
                .map(|&space| base.with_space(space).run())
                .collect::<Result<Vec<_>, _>>()?;
            huepath_render::snapshot::write_png(&bands, width, band_height, &output)
                .map_err(|e| CliError::png_write(&output, e))?;
            info!(output = %output.display(), bands = bands.len(), "rendered gradient bands");

            if cli.json {
                let info = serde_json::json!({
                    "start": base.start,
                    "end": base.end,
                    "samples": base.samples,
                    "spaces": spaces,
                    "width": width,
                    "height": band_height * bands.len(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let names: Vec<_> = spaces.iter().map(|s| s.name()).collect();
                eprintln!(
                    "rendered {} -> {} ({}) -> {}",
                    base.start,
                    base.end,
                    names.join(", "),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` overrides the level.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
