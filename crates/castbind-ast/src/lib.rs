//! # castbind-ast
//!
//! Loading and querying of CastXML translation-unit ASTs for castbind.
//!
//! A translation unit arrives as a flat XML forest of attributed nodes that
//! reference each other by parser-assigned string ids (`context`, `members`,
//! `bases`, `returns`, `file`). This crate owns those nodes in an arena and
//! layers the queries the generator needs on top:
//! - **Index**: id → node lookup, fully-qualified names, source files
//! - **Selection**: top-level namespaces, enums and classes per namespace
//! - **CastXML**: running the external parser and surfacing its failures
//!
//! Dangling references never raise; they resolve to `None` and callers
//! exclude whatever depended on them.

pub mod castxml;
pub mod error;
pub mod index;
pub mod node;
pub mod paths;
pub mod select;
mod xml;

pub use castxml::CastXml;
pub use error::AstError;
pub use index::AstIndex;
pub use node::{Access, AttributeNode, NodeRef, NodeTag};
