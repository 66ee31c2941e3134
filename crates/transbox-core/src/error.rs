//! Error type shared by both mock engines.

use thiserror::Error;

/// What the translation and conversion flows can report to the user.
///
/// The `Display` form is the exact message shown in the error banner, so
/// callers never reword errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Translation submitted with blank input text
    #[error("请输入要翻译的文本。")]
    EmptyInput,

    /// Conversion submitted before any file was picked
    #[error("请选择要转换的文件。")]
    NoFileSelected,

    /// The simulated backend call failed; carries the user-facing message
    #[error("{0}")]
    OperationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(Error::EmptyInput.to_string(), "请输入要翻译的文本。");
        assert_eq!(Error::NoFileSelected.to_string(), "请选择要转换的文件。");
    }

    #[test]
    fn test_operation_failure_passes_message_through() {
        let err = Error::OperationFailed("文件转换失败，请稍后再试".to_string());
        assert_eq!(err.to_string(), "文件转换失败，请稍后再试");
    }
}
