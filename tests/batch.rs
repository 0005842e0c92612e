//! End-to-end batch conversion tests: TIFF fixtures written with the `tiff`
//! encoder, converted through the public API, and the resulting PDFs
//! inspected with `lopdf`.

use std::fs::File;
use std::path::Path;

use tempfile::tempdir;
use tiff::encoder::{TiffEncoder, colortype};

use tif2pdf::{Error, convert_directory, convert_file, select_tif_files};

/// Write a multi-page grayscale TIFF, one page per `(width, height)` entry.
fn write_tiff(path: &Path, pages: &[(u32, u32)]) {
    let file = File::create(path).unwrap();
    let mut encoder = TiffEncoder::new(file).unwrap();
    for &(w, h) in pages {
        let data = vec![128u8; (w * h) as usize];
        encoder
            .write_image::<colortype::Gray8>(w, h, &data)
            .unwrap();
    }
}

fn pdf_page_count(path: &Path) -> usize {
    lopdf::Document::load(path).unwrap().get_pages().len()
}

#[test]
fn converts_each_tiff_to_one_pdf_with_matching_page_counts() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_tiff(&input.path().join("a.tif"), &[(40, 30), (20, 20)]);
    write_tiff(&input.path().join("b.TIFF"), &[(10, 10)]);
    std::fs::write(input.path().join("notes.txt"), b"not an image").unwrap();
    std::fs::create_dir(input.path().join("c.tif")).unwrap();

    let report = convert_directory(input.path(), output.path(), |_| {}).unwrap();
    assert_eq!(report.converted, 2);
    assert_eq!(report.pages, 3);

    assert_eq!(pdf_page_count(&output.path().join("a.pdf")), 2);
    assert_eq!(pdf_page_count(&output.path().join("b.pdf")), 1);

    // notes.txt and the c.tif directory are ignored, so only two PDFs exist.
    let produced = std::fs::read_dir(output.path()).unwrap().count();
    assert_eq!(produced, 2);
}

#[test]
fn creates_missing_output_directory_with_parents() {
    let input = tempdir().unwrap();
    let output_root = tempdir().unwrap();
    let output = output_root.path().join("nested").join("pdfs");

    write_tiff(&input.path().join("scan.tif"), &[(8, 8)]);

    convert_directory(input.path(), &output, |_| {}).unwrap();
    assert!(output.join("scan.pdf").is_file());
}

#[test]
fn rerunning_the_batch_overwrites_instead_of_duplicating() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_tiff(&input.path().join("a.tif"), &[(16, 16), (16, 16)]);

    convert_directory(input.path(), output.path(), |_| {}).unwrap();
    convert_directory(input.path(), output.path(), |_| {}).unwrap();

    assert_eq!(pdf_page_count(&output.path().join("a.pdf")), 2);
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 1);
}

#[test]
fn progress_fractions_climb_to_one() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_tiff(&input.path().join("a.tif"), &[(4, 4)]);
    write_tiff(&input.path().join("b.tif"), &[(4, 4)]);
    write_tiff(&input.path().join("c.tif"), &[(4, 4)]);

    let mut fractions = Vec::new();
    convert_directory(input.path(), output.path(), |f| fractions.push(f)).unwrap();

    assert_eq!(fractions.len(), 3);
    assert!(fractions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*fractions.last().unwrap(), 1.0);
}

#[test]
fn missing_input_directory_fails_before_creating_output() {
    let missing = Path::new("/nonexistent/input/dir");
    let output_root = tempdir().unwrap();
    let output = output_root.path().join("pdfs");

    let err = convert_directory(missing, &output, |_| {}).unwrap_err();
    assert!(matches!(err, Error::DirectoryNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn selection_ignores_non_tiff_entries() {
    let input = tempdir().unwrap();
    write_tiff(&input.path().join("keep.tif"), &[(4, 4)]);
    std::fs::write(input.path().join("skip.pdf"), b"").unwrap();
    std::fs::write(input.path().join("skip.tif.txt"), b"").unwrap();

    let selected = select_tif_files(input.path()).unwrap();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].file_name().unwrap(), "keep.tif");
}

#[test]
fn single_file_conversion_reports_page_count() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let tif = input.path().join("doc.tif");
    write_tiff(&tif, &[(12, 6), (12, 6), (12, 6)]);

    let pages = convert_file(&tif, &output.path().join("doc.pdf")).unwrap();
    assert_eq!(pages, 3);
    assert_eq!(pdf_page_count(&output.path().join("doc.pdf")), 3);
}

#[cfg(unix)]
#[test]
fn unwritable_output_aborts_the_batch() {
    use std::os::unix::fs::PermissionsExt;

    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_tiff(&input.path().join("a.tif"), &[(4, 4)]);
    write_tiff(&input.path().join("b.tif"), &[(4, 4)]);

    std::fs::set_permissions(output.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits do not bind a privileged user; skip where the mode
    // change has no effect (e.g. running as root).
    if std::fs::write(output.path().join(".probe"), b"").is_ok() {
        return;
    }

    let mut calls = 0;
    let err = convert_directory(input.path(), output.path(), |_| calls += 1).unwrap_err();
    assert!(matches!(err, Error::PermissionDenied { .. }));
    // The first failure aborts the loop: no progress callback ever fires.
    assert_eq!(calls, 0);

    std::fs::set_permissions(output.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}
