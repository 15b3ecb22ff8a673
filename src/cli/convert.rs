// src/cli/convert.rs - Audio/video conversion through an external encoder

use std::path::{Path, PathBuf};

use crate::infra::config::ConvertConfig;
use crate::infra::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Mp3,
    Wav,
}

impl TargetFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Mp3 => "MP3",
            Self::Wav => "WAV",
        }
    }
}

/// What a `convert` invocation should do, decided before touching the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionPlan {
    Run { input: PathBuf, output: PathBuf },
    AlreadyInFormat(TargetFormat),
    MissingFormat,
    UnsupportedFormat(String),
}

pub fn plan_conversion(input: &Path, format: Option<&str>) -> ConversionPlan {
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return ConversionPlan::MissingFormat;
    };
    let Some(target) = TargetFormat::parse(format) else {
        return ConversionPlan::UnsupportedFormat(format.to_string());
    };

    let current = input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    if current.as_deref() == Some(target.extension()) {
        return ConversionPlan::AlreadyInFormat(target);
    }

    ConversionPlan::Run {
        input: input.to_path_buf(),
        output: input.with_extension(target.extension()),
    }
}

/// `brightside convert <file> --format <mp3|wav>`
pub async fn run_convert(
    file: &str,
    format: Option<&str>,
    config: &ConvertConfig,
) -> anyhow::Result<()> {
    let input = Path::new(file);
    if !input.exists() {
        println!("❌ Error: File not found!");
        return Ok(());
    }

    match plan_conversion(input, format) {
        ConversionPlan::MissingFormat => {
            println!("⚠️ No format specified. Use --format mp3 or --format wav");
        }
        ConversionPlan::UnsupportedFormat(f) => {
            println!("❌ Unsupported format '{f}'! Use mp3 or wav.");
        }
        ConversionPlan::AlreadyInFormat(target) => {
            println!("✅ Already in {} format!", target.label());
        }
        ConversionPlan::Run { input, output } => {
            println!("🎵 Converting {} → {}...", input.display(), output.display());
            let (in_str, out_str) = (input.to_string_lossy(), output.to_string_lossy());
            match process::run_inherited(&config.encoder, &["-i", in_str.as_ref(), out_str.as_ref()]).await {
                Ok(()) => println!(
                    "✅ Conversion successful! File saved as {}",
                    output.display()
                ),
                Err(e) => {
                    tracing::warn!(error = %e, "conversion failed");
                    println!("❌ Conversion failed: {e}");
                }
            }
        }
    }

    Ok(())
}
