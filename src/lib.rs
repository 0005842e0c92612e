#![doc = r#"
tif2pdf — batch conversion of multi-page TIFF images to PDF documents.

This crate turns every qualifying `.tif`/`.tiff` file in a directory into a
single multi-page PDF, one PDF per TIFF, preserving page order. Each frame is
converted to RGB and rendered at a resolution derived from its pixel width,
so every output page is nine units wide. It powers the tif2pdf CLI and can be
embedded in your own Rust applications.

Quick start: convert a whole directory
--------------------------------------
```rust,no_run
use std::path::Path;
use tif2pdf::{convert_directory, render_progress};

fn main() -> tif2pdf::Result<()> {
    let report = convert_directory(
        Path::new("/scans"),
        Path::new("/scans/pdfs"),
        render_progress, // or any FnMut(f64)
    )?;

    println!("converted={} pages={}", report.converted, report.pages);
    Ok(())
}
```

Convert a single file
---------------------
```rust,no_run
use std::path::Path;
use tif2pdf::convert_file;

fn main() -> tif2pdf::Result<()> {
    let pages = convert_file(Path::new("/scans/a.tif"), Path::new("/out/a.pdf"))?;
    println!("wrote {pages} pages");
    Ok(())
}
```

Lower-level pieces
------------------
`select_tif_files` lists the qualifying files of a directory in listing
order; `TiffReader` decodes a multi-page TIFF into RGB frames; `write_pdf`
encodes a frame sequence as a multi-page PDF.

Error handling
--------------
All public functions return `tif2pdf::Result<T>`; match on `tif2pdf::Error`
to handle specific cases. `Error::DirectoryNotFound` and
`Error::PermissionDenied` are the two conditions the CLI treats as fatal
with fixed messages and exit code 1.

```rust,no_run
use std::path::Path;
use tif2pdf::{convert_directory, Error};

fn main() {
    match convert_directory(Path::new("/missing"), Path::new("/out"), |_| {}) {
        Ok(report) => println!("converted {} files", report.converted),
        Err(Error::DirectoryNotFound { .. }) => eprintln!("input directory missing"),
        Err(other) => eprintln!("conversion failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`io`] — TIFF reader and PDF writer.
- [`progress`] — the fixed-width console progress bar.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod error;
pub mod io;
pub mod progress;

// Curated public API surface
pub use error::{Error, Result};

// Readers and writers
pub use io::tiff::{TiffError, TiffReader};
pub use io::writers::pdf::{encode_pdf, write_pdf};

// High-level API re-exports
pub use api::{
    BatchReport, convert_directory, convert_file, is_tif, list_entries, pdf_output_path,
    select_tif_files,
};

// Progress display
pub use progress::{format_progress, render_progress};
