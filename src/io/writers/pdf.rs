//! Multi-page PDF writer built on `printpdf` 0.8.
//!
//! printpdf 0.8 uses a data-oriented API: documents are built by constructing
//! `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
//! `PdfDocument::save()`. Each RGB frame becomes one page, placed at the
//! page origin and rendered at a per-page resolution of `width / 9.0` pixels
//! per inch, so every page comes out nine inches wide regardless of pixel
//! dimensions. The divisor is kept verbatim for output compatibility.

use std::path::Path;

use image::RgbImage;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::debug;

use crate::error::{Error, Result};

/// Page width in resolution units: resolution for page `i` is
/// `width_i / PAGE_WIDTH_UNITS` pixels per inch.
const PAGE_WIDTH_UNITS: f32 = 9.0;

const PT_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// Serialize `frames` as a multi-page PDF document, in slice order.
pub fn encode_pdf(frames: &[RgbImage], title: &str) -> Vec<u8> {
    let mut doc = PdfDocument::new(title);
    let mut pages: Vec<PdfPage> = Vec::with_capacity(frames.len());

    for frame in frames {
        let (width, height) = frame.dimensions();
        let resolution = width as f32 / PAGE_WIDTH_UNITS;

        // Physical page size implied by rendering the frame at `resolution`
        // pixels per inch.
        let page_w = Mm(width as f32 / resolution * MM_PER_INCH);
        let page_h = Mm(height as f32 / resolution * MM_PER_INCH);

        let raw = RawImage {
            pixels: RawImageData::U8(frame.as_raw().clone()),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: None,
                scale_y: None,
                dpi: Some(resolution),
                rotate: None,
            },
        }];

        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}

/// Encode `frames` and write the document to `output`.
///
/// A `PermissionDenied` I/O failure maps to [`Error::PermissionDenied`]; the
/// driver treats it as fatal for the whole batch. Any other write failure
/// propagates as a plain I/O error. A failure mid-write can leave a
/// truncated file behind; there is no partial-write recovery.
pub fn write_pdf(frames: &[RgbImage], output: &Path) -> Result<()> {
    let title = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    let bytes = encode_pdf(frames, &title);
    debug!(path = %output.display(), pages = frames.len(), bytes = bytes.len(), "Writing PDF");

    match std::fs::write(output, &bytes) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(Error::PermissionDenied {
                path: output.to_path_buf(),
            })
        }
        Err(e) => Err(Error::Io(e)),
    }
}
