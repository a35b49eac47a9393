//! # castbind-codegen
//!
//! Turns an indexed C++ translation unit into Jsonipc registration code.
//!
//! Pipeline per input file:
//! 1. Select top-level namespaces from the allow-list
//! 2. Emit one `::Jsonipc::Enum<>` statement per enum in each namespace
//! 3. Classify each class's members ([`classify`]), resolve its bases
//!    ([`bases`]) and emit a `::Jsonipc::Class<>` or
//!    `::Jsonipc::Serializable<>` statement
//!
//! Every emitted statement takes a fresh identifier from a run-wide
//! [`IdCounter`], so output for several files can be concatenated into one
//! compilation unit without symbol clashes.
//!
//! ```no_run
//! use castbind_ast::AstIndex;
//! use castbind_codegen::{GeneratorOptions, IdCounter, generate_file};
//!
//! let index = AstIndex::from_xml_file("unit.xml".as_ref()).expect("ast");
//! let options = GeneratorOptions {
//!     namespaces: vec!["Ase".to_string()],
//!     ..GeneratorOptions::default()
//! };
//! let mut counter = IdCounter::default();
//! let generated = generate_file(&index, "unit.cc".as_ref(), &options, &mut counter);
//! print!("{}", generated.code);
//! ```

pub mod bases;
pub mod classify;
pub mod counter;
pub mod emit;
pub mod ident;
pub mod report;
mod writer;

pub use classify::{ClassKind, ClassMembers, MemberKind, classify_members};
pub use counter::IdCounter;
pub use emit::{GeneratedFile, GeneratorOptions, generate_file};
pub use report::GenerationReport;
