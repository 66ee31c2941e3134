//! Mock file conversion engine.
//!
//! Conversion is simulated: the picked file's bytes are never read. The
//! produced artifact is a plain-text note describing the requested
//! conversion instead of real converted data.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::formats::OutputFormat;

/// Simulated latency of a conversion call, in milliseconds.
pub const CONVERSION_DELAY_MS: u32 = 2_000;

/// Base name of every generated artifact; the extension is appended.
const ARTIFACT_STEM: &str = "converted_file";

/// A conversion job as submitted from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Name of the picked file, or `None` when nothing is selected
    pub file_name: Option<String>,

    /// Requested output format
    pub format: OutputFormat,
}

/// Downloadable output of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionArtifact {
    /// Download name, always `converted_file.<extension>`
    pub file_name: String,

    /// Placeholder text describing the conversion
    pub content: String,

    /// Content type of the blob. Always plain text: the mock never encodes
    /// real PDF/DOCX/JPG data, whatever extension was chosen.
    pub mime_type: &'static str,
}

/// Runs the simulated conversion for `request`.
///
/// `timestamp` is embedded verbatim as the conversion time; formatting is
/// the caller's concern.
///
/// Fails with [`Error::NoFileSelected`] when no file has been picked. The
/// UI disables the submit control in that case, so the error only surfaces
/// on direct invocation.
pub fn convert(request: &ConversionRequest, timestamp: &str) -> Result<ConversionArtifact, Error> {
    let Some(original_name) = request.file_name.as_deref() else {
        return Err(Error::NoFileSelected);
    };

    let extension = request.format.extension();
    let content = format!(
        "这是一个模拟的转换后文件内容。\n原文件名: {}\n转换格式: {}\n转换时间: {}",
        original_name, extension, timestamp
    );

    Ok(ConversionArtifact {
        file_name: format!("{}.{}", ARTIFACT_STEM, extension),
        content,
        mime_type: "text/plain",
    })
}
