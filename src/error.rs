use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unrecognized construct: {0}")]
    UnrecognizedConstruct(String),

    #[error("Missing attribute `{attribute}` on {tag}")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },

    #[error("Malformed integer literal {text:?}")]
    MalformedInteger { text: String },

    #[error("Malformed decimal literal {text:?}: {source}")]
    MalformedDecimal {
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid symbol IRI <{iri}>: {source}")]
    InvalidSymbol {
        iri: String,
        #[source]
        source: oxrdf::IriParseError,
    },

    #[error("Invalid node IRI <{iri}>: {source}")]
    InvalidAddressable {
        iri: String,
        #[source]
        source: oxrdf::IriParseError,
    },

    #[error("Structural violation: {0}")]
    StructuralViolation(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
