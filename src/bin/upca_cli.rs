//! UPC-A CLI - Bridge interface for scripting
//!
//! Commands: encode, validate, format, render
//! Outputs JSON to stdout
//! Returns non-zero on invalid input

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use upca::{encode, format_upc, to_image_blob, to_svg_string, validate, RenderOptions};

#[derive(Parser)]
#[command(name = "upca-cli")]
#[command(about = "UPC-A CLI - barcode encoding and rendering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a code into a 95-module bar pattern
    Encode {
        /// Raw code (11 or 12 digits, separators allowed)
        #[arg(short, long)]
        code: String,

        /// JSON payload (RenderOptions; only the checksum policy is used)
        #[arg(short, long)]
        payload: Option<String>,
    },

    /// Check whether a code is acceptable
    Validate {
        #[arg(short, long)]
        code: String,
    },

    /// Format a code as D-DDDDD-DDDDD-D
    Format {
        #[arg(short, long)]
        code: String,
    },

    /// Render a barcode to a PNG or SVG file
    Render {
        #[arg(short, long)]
        code: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Output format; inferred from the file extension when omitted
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// JSON payload (RenderOptions)
        #[arg(short, long)]
        payload: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Png,
    Svg,
}

fn parse_options(payload: Option<&str>) -> Result<RenderOptions, serde_json::Error> {
    match payload {
        Some(json) => serde_json::from_str(json),
        None => Ok(RenderOptions::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { code, payload } => {
            let opts = match parse_options(payload.as_deref()) {
                Ok(o) => o,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match encode(&code, opts.checksum) {
                Ok(encoded) => {
                    println!("{}", serde_json::to_string_pretty(&encoded).unwrap());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Validate { code } => {
            let valid = validate(&code);
            let output = serde_json::json!({
                "code": code,
                "valid": valid,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }

        Commands::Format { code } => match format_upc(&code) {
            Ok(formatted) => {
                let output = serde_json::json!({ "formatted": formatted });
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!(r#"{{"error": "{}"}}"#, e);
                ExitCode::from(2)
            }
        },

        Commands::Render {
            code,
            output,
            format,
            payload,
        } => {
            let opts = match parse_options(payload.as_deref()) {
                Ok(o) => o,
                Err(e) => {
                    println!(r#"{{"error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            let format = format.unwrap_or_else(|| {
                match output.extension().and_then(|e| e.to_str()) {
                    Some("svg") => OutputFormat::Svg,
                    _ => OutputFormat::Png,
                }
            });

            let bytes = match format {
                OutputFormat::Png => to_image_blob(&code, &opts),
                OutputFormat::Svg => to_svg_string(&code, &opts).map(String::into_bytes),
            };

            let bytes = match bytes {
                Ok(b) => b,
                Err(e) => {
                    println!(r#"{{"error": "{}"}}"#, e);
                    return ExitCode::from(2);
                }
            };

            if let Err(e) = std::fs::write(&output, &bytes) {
                println!(r#"{{"error": "Failed to write {}: {}"}}"#, output.display(), e);
                return ExitCode::FAILURE;
            }

            let summary = serde_json::json!({
                "success": true,
                "output": output.display().to_string(),
                "format": match format {
                    OutputFormat::Png => "png",
                    OutputFormat::Svg => "svg",
                },
                "bytes": bytes.len(),
            });
            println!("{}", serde_json::to_string_pretty(&summary).unwrap());
            ExitCode::SUCCESS
        }
    }
}
