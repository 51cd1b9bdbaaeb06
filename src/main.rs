use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use combat_ui_datasheet::builder::ReportBuilder;
use combat_ui_datasheet::config::ReportConfig;
use combat_ui_datasheet::content::combat_ui_outline;
use combat_ui_datasheet::theme::Palette;

/// Generates the combat UI data reference document as a PDF.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Output path for the rendered PDF. The parent directory must exist.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = ReportConfig::default();
    if let Some(output) = cli.output {
        config = config.with_output_path(output);
    }

    let palette = Palette::default();
    let outline = combat_ui_outline(&palette);
    let builder = ReportBuilder::new(config, outline).with_palette(palette);
    builder.write()?;
    println!("PDF 생성 완료: {}", builder.output_path().display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        let mut source = err.source();
        while let Some(inner) = source {
            eprintln!("  caused by: {}", inner);
            source = inner.source();
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
