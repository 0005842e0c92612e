pub mod pdf;
pub use pdf::{encode_pdf, write_pdf};
