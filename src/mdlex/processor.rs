//! Processing API for markdown sources
//!
//! A processing spec names what to extract (the stage) and how to print it
//! (the format), written as `<stage>-<format>`:
//!
//! | Spec          | Output                                        |
//! |---------------|-----------------------------------------------|
//! | `token-simple`| one `<kind:value>` per token, a line per line |
//! | `token-json`  | tokens with kind, value and position          |
//! | `ast-tag`     | XML-like nested tags                          |
//! | `ast-treeviz` | box-drawing tree                              |
//! | `ast-json`    | the document as JSON                          |
//! | `ast-yaml`    | the document as YAML                          |
//! | `ast-text`    | the source reconstructed from the tree        |
//!
//! # Sample Sources
//!
//! The `markdown_sources` module gives access to the verified sample documents
//! under `docs/samples`. Tests should load shared inputs from there instead of
//! copying markdown into each test.
//!
//! ```rust,ignore
//! use mdlex::mdlex::processor::markdown_sources::MarkdownSources;
//!
//! let content = MarkdownSources::get_string("010-lists.md").unwrap();
//! let tree = MarkdownSources::get_processed("010-lists.md", "ast-treeviz").unwrap();
//! ```

use crate::mdlex::ast::ToText;
use crate::mdlex::config::InspectConfig;
use crate::mdlex::formats::{serialize_document, to_treeviz_str_with_options, TreevizOptions};
use crate::mdlex::lexer::{tokenize, Token};
use crate::mdlex::parser::{parse_tokens, ParseError};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

impl ProcessingStage {
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

/// How to print it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
    Text,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Text => "text",
        }
    }
}

/// A complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            "text" => OutputFormat::Text,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' not supported for {} stage",
                format.as_str(),
                stage.as_str()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat as F;
        use ProcessingStage as S;

        [
            (S::Token, F::Simple),
            (S::Token, F::Json),
            (S::Ast, F::Tag),
            (S::Ast, F::Treeviz),
            (S::Ast, F::Json),
            (S::Ast, F::Yaml),
            (S::Ast, F::Text),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.as_str(), self.format.as_str())
    }
}

/// Rendering options that are not part of the spec string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub treeviz: TreevizOptions,
}

impl From<&InspectConfig> for ProcessingOptions {
    fn from(config: &InspectConfig) -> Self {
        Self {
            treeviz: TreevizOptions {
                label_width: config.label_width,
                show_locations: config.show_locations,
            },
        }
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Parse(ParseError),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "File not found: {}", path),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Parse(err) => write!(f, "Failed to parse document: {}", err),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

/// Process markdown source according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    debug!(%spec, bytes = source.len(), "processing source");
    let tokens = tokenize(source);

    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokens, spec.format),
        ProcessingStage::Ast => {
            let doc = parse_tokens(&tokens)?;
            match spec.format {
                OutputFormat::Tag => Ok(serialize_document(&doc)),
                OutputFormat::Treeviz => Ok(to_treeviz_str_with_options(&doc, &options.treeviz)),
                OutputFormat::Json => serde_json::to_string_pretty(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Text => Ok(doc.to_text()),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "simple format only works with token stage".to_string(),
                )),
            }
        }
    }
}

/// Process a markdown file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(file_path.display().to_string()));
    }
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec, options)
}

fn format_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.kind.is_line_ending() {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with ast stage",
            other.as_str()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}

/// Verified markdown sample documents
pub mod markdown_sources {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &[
        "000-headings.md",
        "010-lists.md",
        "020-blockquotes.md",
        "030-code-blocks.md",
        "040-inline.md",
        "050-guide.md",
    ];

    /// Format options for sample content
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleFormat {
        /// Raw string content
        String,
        /// Tokens as JSON
        Tokens,
        /// Processed with the given format string
        Processed(String),
    }

    pub struct MarkdownSources;

    impl MarkdownSources {
        fn samples_dir() -> String {
            format!("{}/docs/samples", env!("CARGO_MANIFEST_DIR"))
        }

        fn sample_path(filename: &str) -> String {
            format!("{}/{}", Self::samples_dir(), filename)
        }

        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        fn read(filename: &str) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let path = Self::sample_path(filename);
            fs::read_to_string(&path)
                .map_err(|e| ProcessingError::IoError(format!("Failed to read {}: {}", path, e)))
        }

        pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
            let content = Self::read(filename)?;
            match format {
                SampleFormat::String => Ok(content),
                SampleFormat::Tokens => format_tokens(&tokenize(&content), OutputFormat::Json),
                SampleFormat::Processed(format_str) => {
                    let spec = ProcessingSpec::from_string(&format_str)?;
                    process_source(&content, &spec, &ProcessingOptions::default())
                }
            }
        }

        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::String)
        }

        pub fn get_tokens(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Tokens)
        }

        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
        }

        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }

        pub fn get_sample_info(filename: &str) -> Result<SampleInfo, ProcessingError> {
            let content = Self::read(filename)?;
            Ok(SampleInfo {
                filename: filename.to_string(),
                line_count: content.lines().count(),
                char_count: content.len(),
                description: Self::extract_description(&content),
            })
        }

        /// First line of the sample, without heading markers
        fn extract_description(content: &str) -> Option<String> {
            let first_line = content.lines().next()?;
            let description = first_line.trim_start_matches('#').trim();
            (!description.is_empty()).then(|| description.to_string())
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct SampleInfo {
        pub filename: String,
        pub line_count: usize,
        pub char_count: usize,
        pub description: Option<String>,
    }

}
