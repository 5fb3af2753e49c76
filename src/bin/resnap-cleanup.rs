use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use resnap_cleanup::{process_file, MenuState, ProcessReport};

#[derive(Parser)]
#[command(
    name = "resnap-cleanup",
    about = "Strip reMarkable UI chrome from a screenshot, crop to content and make the background transparent",
    version,
    after_help = "Simple usage: resnap-cleanup <image>  (clean in place)\n\n\
                  The output must be a format with transparency support (PNG, WebP,\n\
                  TIFF or BMP); a JPEG destination is rejected rather than flattened."
)]
struct Cli {
    /// Screenshot image file to clean
    input: PathBuf,

    /// Output file (default: overwrite the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print menu branch, bounding box and final size
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if !cli.input.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input.display());
        process::exit(1);
    }

    match process_file(&cli.input, cli.output.as_deref()) {
        Ok(report) => print_report(&cli.input, &report, cli.verbose, cli.quiet),
        Err(e) => {
            eprintln!("[FAIL] {}: {e}", filename(&cli.input));
            process::exit(1);
        }
    }
}

fn print_report(input: &Path, report: &ProcessReport, verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    eprintln!(
        "[OK] {} -> {} ({}x{})",
        filename(input),
        filename(&report.path),
        report.width,
        report.height
    );

    if verbose {
        let menu = match report.menu {
            MenuState::Open => "menu open: removed panel and close control",
            MenuState::Closed => "menu closed: removed indicator",
        };
        eprintln!("  -> {menu}");
        eprintln!(
            "  -> content box: ({}, {})..({}, {})",
            report.content_box.left,
            report.content_box.top,
            report.content_box.right,
            report.content_box.bottom
        );
    }
}

fn filename(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
