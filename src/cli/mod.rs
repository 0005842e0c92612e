//! Command Line Interface (CLI) layer for tif2pdf.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for the batch conversion flow. It wires user-provided
//! options to the underlying library functionality exposed via
//! `tif2pdf::api`.
//!
//! If you are embedding tif2pdf into another application, prefer using
//! the high-level `tif2pdf::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
