//! Structured error types for mathsheet.

/// All errors that can occur while building or writing a worksheet.
#[derive(Debug, thiserror::Error)]
pub enum MathsheetError {
    /// The operations string contained no supported symbol.
    #[error("No valid operation in {input:?} (expected any of + - * x / ÷)")]
    NoValidOperation { input: String },

    /// A configuration value is out of its supported range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required part is missing from an XLSX package.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// XML parsing error from quick-xml.
    #[error("XML parsing: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error.
    #[error("ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Preset (de)serialization error.
    #[error("JSON preset: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MathsheetError>;
