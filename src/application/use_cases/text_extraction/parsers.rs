mod pdf;
mod txt;

pub use pdf::PdfPages;
