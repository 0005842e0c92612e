//! High-level, ergonomic library API: select TIFF files from a directory,
//! convert single files or whole directories to PDF, and report batch
//! totals. Prefer these entrypoints over the low-level `io` modules when
//! embedding tif2pdf.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::io::tiff::TiffReader;
use crate::io::writers::pdf::write_pdf;

/// Batch conversion report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    /// TIFF files converted to PDFs.
    pub converted: usize,
    /// Total pages written across all output PDFs.
    pub pages: usize,
}

/// True if `path` is a regular file whose name ends in `.tif` or `.tiff`,
/// case-insensitively.
pub fn is_tif(path: &Path) -> bool {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().to_ascii_lowercase(),
        None => return false,
    };
    (name.ends_with(".tif") || name.ends_with(".tiff")) && path.is_file()
}

/// List every entry of `input_dir`, in directory-listing order.
///
/// A missing directory maps to [`Error::DirectoryNotFound`].
pub fn list_entries(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::DirectoryNotFound {
                path: input_dir.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        entries.push(entry.map_err(Error::from)?.path());
    }
    Ok(entries)
}

/// Return the qualifying TIFF files of `input_dir`, in listing order.
/// Directories, symlinks to directories, and other extensions are skipped.
pub fn select_tif_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(list_entries(input_dir)?
        .into_iter()
        .filter(|path| is_tif(path))
        .collect())
}

/// Output path for `input`: `<output_dir>/<input stem>.pdf`.
pub fn pdf_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output_dir.join(format!("{stem}.pdf"))
}

/// Convert a single multi-page TIFF to a PDF at `output`.
/// Returns the number of pages written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let reader = TiffReader::open(input)?;
    let frames = reader.into_frames();
    write_pdf(&frames, output)?;
    Ok(frames.len())
}

/// Convert every qualifying TIFF in `input_dir` into `output_dir`, creating
/// the output directory (and missing parents) first. Files are processed
/// strictly sequentially in listing order; `on_progress` receives the running
/// fraction `(index + 1) / total` after each file. The first error aborts the
/// remaining files; PDFs already written stay on disk.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    mut on_progress: impl FnMut(f64),
) -> Result<BatchReport> {
    let tifs = select_tif_files(input_dir)?;
    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();
    let total = tifs.len();

    for (index, tif) in tifs.iter().enumerate() {
        let output = pdf_output_path(tif, output_dir);
        info!("Converting {:?} -> {:?}", tif, output);

        let pages = convert_file(tif, &output)?;
        report.converted += 1;
        report.pages += pages;

        on_progress((index as f64 + 1.0) / total as f64);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn is_tif_matches_extensions_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.tif", "b.TIFF", "c.TiF", "d.tiff"] {
            let path = dir.path().join(name);
            fs::write(&path, b"").unwrap();
            assert!(is_tif(&path), "{name} should qualify");
        }
        for name in ["notes.txt", "e.tif.bak", "f.pdf", "tif"] {
            let path = dir.path().join(name);
            fs::write(&path, b"").unwrap();
            assert!(!is_tif(&path), "{name} should not qualify");
        }
    }

    #[test]
    fn is_tif_rejects_directories_with_matching_names() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("c.tif");
        fs::create_dir(&sub).unwrap();
        assert!(!is_tif(&sub));
    }

    #[test]
    fn select_returns_only_qualifying_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.tif"), b"").unwrap();
        fs::write(dir.path().join("b.TIFF"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("c.tif")).unwrap();

        let mut names: Vec<_> = select_tif_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.tif", "b.TIFF"]);
    }

    #[test]
    fn missing_directory_is_directory_not_found() {
        let err = select_tif_files(Path::new("/nonexistent/input")).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound { .. }));
    }

    #[test]
    fn output_path_swaps_the_extension() {
        let out = pdf_output_path(Path::new("/in/scan.tiff"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/scan.pdf"));

        let out = pdf_output_path(Path::new("/in/archive.scan.tif"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/archive.scan.pdf"));
    }
}
