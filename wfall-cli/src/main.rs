use std::{
    path::{
        Path,
        PathBuf,
    },
    process::ExitCode,
    str::FromStr,
};

use clap::Parser;
use color_eyre::eyre::{
    Error,
    eyre,
};
use tracing_subscriber::EnvFilter;
use wfall::ColorMap;

/// Decode a waterfall capture to a PNG with a frequency axis.
#[derive(Debug, Parser)]
struct Args {
    /// Input capture file.
    #[clap(default_value = "waterfall.raw")]
    input: PathBuf,

    /// Output PNG. Defaults to the input path with a .png extension.
    output: Option<PathBuf>,

    /// Colormap to apply: "thermal" or "jet".
    #[clap(long, default_value = "thermal")]
    colormap: ColorMapArg,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let data = std::fs::read(&args.input)?;
    let (header, image) = wfall::render(&data, args.colormap.into())?;

    println!("{header}");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));
    image.save(&output)?;
    println!("Saved {}", output.display());

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("png")
}

#[derive(Clone, Copy, Debug)]
enum ColorMapArg {
    Thermal,
    Jet,
}

impl FromStr for ColorMapArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thermal" => Ok(Self::Thermal),
            "jet" => Ok(Self::Jet),
            _ => Err(eyre!("No such colormap: {s}")),
        }
    }
}

impl From<ColorMapArg> for ColorMap {
    fn from(arg: ColorMapArg) -> Self {
        match arg {
            ColorMapArg::Thermal => ColorMap::Thermal,
            ColorMapArg::Jet => ColorMap::Jet,
        }
    }
}
