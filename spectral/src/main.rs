use std::{error::Error, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use spectral_fft::{
    Strategy,
    effects::{FrequencyShift, MonoMode, Monoify, Normalise},
};
use tracing::{Level, debug, error, info};

mod wav;
use wav::Audio;

#[derive(Parser, Debug)]
#[command(name = "spectral")]
#[command(about = "Apply spectral effects to WAV files", long_about = None)]
struct Cli {
    /// Pads the input with SAMPLES zeros. Negative values drop samples from the end.
    #[arg(
        short = 'p',
        long,
        value_name = "SAMPLES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pad: i64,
    /// Logs transform details.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    effect: Effect,
}

#[derive(Subcommand, Debug)]
enum Effect {
    /// Shift all frequencies by a fixed amount.
    FreqShift {
        #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
        hertz: f64,
        #[command(flatten)]
        files: Files,
    },
    /// Downmix stereo to mono in the frequency domain.
    Monoify {
        #[arg(long, value_enum, default_value_t = Mode::Rms)]
        mode: Mode,
        #[command(flatten)]
        files: Files,
    },
    /// Scale the audio to a peak level.
    Normalise {
        #[arg(
            long,
            value_name = "DB",
            default_value_t = 0.0,
            allow_negative_numbers = true
        )]
        peak: f32,
        #[command(flatten)]
        files: Files,
    },
}

#[derive(Args, Debug)]
struct Files {
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    GeoMean,
    Rms,
    AbsSum,
    ComponentwiseRms,
}

impl From<Mode> for MonoMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::GeoMean => MonoMode::GeometricMean,
            Mode::Rms => MonoMode::Rms,
            Mode::AbsSum => MonoMode::AbsSum,
            Mode::ComponentwiseRms => MonoMode::ComponentwiseRms,
        }
    }
}

impl Effect {
    fn files(&self) -> &Files {
        match self {
            Effect::FreqShift { files, .. }
            | Effect::Monoify { files, .. }
            | Effect::Normalise { files, .. } => files,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let files = cli.effect.files();

    info!("Reading audio from {}", files.input.display());
    let (mut audio, spec) = wav::read(&files.input)?;
    info!(
        "Input: {} Hz, {} channels, {} bits, {} frames",
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        audio.frames()
    );

    audio.pad(cli.pad);

    // The whole file is processed as a single block.
    let frames = audio.frames();
    debug!(frames, strategy = ?Strategy::for_len(frames.max(1)), "Block transform");

    let start = Instant::now();
    let processed = process(&cli.effect, &audio)?;
    info!(
        "Processing took {:.3} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    info!("Writing output to {}", files.output.display());
    wav::write(&files.output, &processed)?;

    Ok(())
}

fn process(effect: &Effect, audio: &Audio) -> Result<Audio, Box<dyn Error>> {
    let (left, right) = audio.stereo()?;
    let frames = audio.frames();

    let channels = match *effect {
        Effect::FreqShift { hertz, .. } => {
            let mut left_out = vec![0.0; frames];
            let mut right_out = vec![0.0; frames];
            FrequencyShift::new(hertz, audio.sample_rate as f64).process(
                left,
                right,
                &mut left_out,
                &mut right_out,
            )?;
            vec![left_out, right_out]
        }
        Effect::Monoify { mode, .. } => {
            let mut output = vec![0.0; frames];
            Monoify::new(mode.into()).process(left, right, &mut output)?;
            vec![output]
        }
        Effect::Normalise { peak, .. } => {
            let mut left_out = vec![0.0; frames];
            let mut right_out = vec![0.0; frames];
            Normalise::new(peak).process(left, right, &mut left_out, &mut right_out)?;
            vec![left_out, right_out]
        }
    };

    Ok(Audio {
        sample_rate: audio.sample_rate,
        channels,
    })
}
