// AI Detector Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;
pub mod pdf_extractor;
pub mod report_writer;

pub use text_processor::*;
pub use config_store::*;
pub use pdf_extractor::{extract_text_from_pdf, extract_text_from_pdf_bytes, is_pdf_path, PdfError};
pub use report_writer::{render_report, write_report, Interpretation, ReportError};

// Re-export detection module functions
pub use detection::{
    analyze,
    analyze_value,
    compute_report,
    AnalysisError,
    MAX_HIGHLIGHTS,
    MIN_ANALYZABLE_CHARS,
    TRANSITION_WORDS,
};
