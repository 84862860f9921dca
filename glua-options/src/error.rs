use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for options parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the options text and a display name so that every error can point
/// back into the blob it came from.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Locate the first occurrence of a JSON key in the source.
    pub fn find_key(&self, key: &str) -> Option<SourceSpan> {
        let needle = format!("\"{}\"", key);
        self.src
            .find(&needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(&self.src, source.line(), source.column());
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a missing option error.
    pub fn missing_option(&self, option: &'static str) -> Box<Error> {
        Box::new(Error::MissingOption {
            src: self.named_source(),
            span: self.find_key(option),
            option,
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(
        &self,
        option: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find_key(option),
            option,
            value: value.into(),
            reason: reason.into(),
        })
    }

    /// Create a validation error pointing at a key.
    pub fn validation_error_at(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_key(key),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("codegen options are missing")]
    #[diagnostic(
        code(glua::missing_options),
        help("add an `options` block with `global_lua_table` to the codegen settings")
    )]
    MissingOptions,

    #[error("failed to parse codegen options")]
    #[diagnostic(code(glua::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{option} option is required")]
    #[diagnostic(
        code(glua::missing_option),
        help("set `{option}` to the name of the global Lua table that holds the bindings")
    )]
    MissingOption {
        #[source_code]
        src: NamedSource<String>,
        #[label("must be a non-empty string")]
        span: Option<SourceSpan>,
        option: &'static str,
    },

    #[error("invalid {option} '{value}'")]
    #[diagnostic(
        code(glua::invalid_identifier),
        help(
            "{reason}. Use Lua identifiers separated by dots, e.g. `DB` or `MyAddon.DB`."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        option: &'static str,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(glua::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
