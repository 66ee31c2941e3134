//! Output formats offered by the conversion panel.

use serde::{Deserialize, Serialize};

/// Target format for a file conversion.
///
/// Serialized as the lowercase extension. The mock engine never encodes
/// real data in these formats; the extension only names the download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PDF document
    #[default]
    Pdf,

    /// Word document
    Docx,

    /// Plain text
    Txt,

    /// JPEG image
    Jpg,
}

impl OutputFormat {
    /// Every format, in the order the select lists them.
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Pdf,
        OutputFormat::Docx,
        OutputFormat::Txt,
        OutputFormat::Jpg,
    ];

    /// File extension appended to the artifact name.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Docx => "docx",
            OutputFormat::Txt => "txt",
            OutputFormat::Jpg => "jpg",
        }
    }

    /// Parses a lowercase extension back into a format.
    pub fn from_extension(extension: &str) -> Option<OutputFormat> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.extension() == extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_parse_back_to_their_format() {
        for format in OutputFormat::ALL {
            assert_eq!(
                OutputFormat::from_extension(format.extension()),
                Some(format),
                "extension {} did not parse back",
                format.extension()
            );
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert_eq!(OutputFormat::from_extension("png"), None);
        assert_eq!(OutputFormat::from_extension("PDF"), None);
    }

    #[test]
    fn test_default_is_pdf() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pdf);
    }
}
