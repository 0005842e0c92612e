use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tif2pdf",
    version,
    about = "Convert multipage .tif files to .pdf files"
)]
pub struct CliArgs {
    /// The directory containing .tif files to be converted
    pub input: PathBuf,

    /// The directory to which to write converted .pdf files (default: <input>/pdfs)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
