//! AST loading error types for castbind-ast.

use std::process::ExitStatus;

/// Errors that can occur while producing or loading a translation-unit AST.
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("XML parse failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("AST document has no root element")]
    EmptyDocument,

    #[error("AST document ends with {open} unclosed element(s)")]
    Truncated { open: usize },

    #[error("AST document has more nodes than an index can address")]
    TooLarge,

    #[error("{program}: failed with {status}, full command:\n  {command}")]
    ParserFailed {
        program: String,
        status: ExitStatus,
        command: String,
    },

    #[error("failed to launch {program}: {source}")]
    ParserLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parser output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
