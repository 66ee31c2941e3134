//! Transbox Core Library
//!
//! Data model and mock engines for the translation & file conversion tool.
//! Both engines are simulations: they synthesize deterministic placeholder
//! output instead of calling real services, which keeps this crate free of
//! browser bindings and natively testable.

pub mod conversion;
pub mod error;
pub mod formats;
pub mod languages;
pub mod translation;

// Re-export commonly used types
pub use conversion::{convert, ConversionArtifact, ConversionRequest, CONVERSION_DELAY_MS};
pub use error::Error;
pub use formats::OutputFormat;
pub use languages::Language;
pub use translation::{translate, LanguagePair, TranslationRequest, TRANSLATION_DELAY_MS};
