use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;

use tif2pdf::api;
use tif2pdf::error::{Error, Result};
use tif2pdf::progress::render_progress;

use super::args::CliArgs;

/// Run the batch conversion described by `args`.
///
/// The fatal conditions carry fixed console messages and terminate the whole
/// batch with exit code 1: a missing input directory (before the output
/// directory is created) and a permission failure while writing any output
/// PDF. Everything else surfaces as an undistinguished fatal error.
pub fn run(args: CliArgs) -> ExitCode {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match run_batch(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::DirectoryNotFound { .. }) => {
            eprintln!("Fatal error: Input directory not found.");
            ExitCode::from(1)
        }
        Err(Error::PermissionDenied { .. }) => {
            eprintln!("Error: Permission to write file denied.");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("Fatal error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run_batch(args: &CliArgs) -> Result<()> {
    let input_dir = std::path::absolute(&args.input)?;
    println!("Input directory: {}", input_dir.display());

    // Listing doubles as the existence check: a missing directory must fail
    // here, before the output directory is created.
    let entries = api::list_entries(&input_dir)?;
    println!("{} files/folders in {}", entries.len(), input_dir.display());

    let tifs: Vec<PathBuf> = entries.into_iter().filter(|p| api::is_tif(p)).collect();
    println!("{} .tif files in {}", tifs.len(), input_dir.display());

    let output_dir = match &args.output {
        Some(dir) => dir.clone(),
        None => input_dir.join("pdfs"),
    };
    std::fs::create_dir_all(&output_dir)?;

    let total = tifs.len();
    for (index, tif) in tifs.iter().enumerate() {
        let output = api::pdf_output_path(tif, &output_dir);
        info!("Converting {:?} -> {:?}", tif, output);

        api::convert_file(tif, &output)?;
        render_progress((index as f64 + 1.0) / total as f64);
    }

    Ok(())
}
