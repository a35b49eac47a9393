//! Registration code emission.

use std::path::{Path, PathBuf};

use castbind_ast::{AstIndex, NodeRef};

use crate::bases::resolve_bases;
use crate::classify::{ClassKind, MemberKind, classify_members};
use crate::counter::IdCounter;
use crate::ident;
use crate::report::GenerationReport;
use crate::writer::CodeWriter;

/// Default name prefix of the per-file registration function.
pub const DEFAULT_FUNCTION_PREFIX: &str = "jsonipc_4_";

/// What to bind and how to name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Top-level namespaces whose enums and classes are bound.
    pub namespaces: Vec<String>,
    /// Only bind classes declared in this absolute path.
    pub restrict_to: Option<PathBuf>,
    pub function_prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespaces: Vec::new(),
            restrict_to: None,
            function_prefix: DEFAULT_FUNCTION_PREFIX.to_string(),
        }
    }
}

/// Generated source for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub code: String,
    pub report: GenerationReport,
}

/// Emit the `static void <prefix><file>()` registration function for one
/// translation unit.
///
/// `input` only names the function; `options.restrict_to` decides which
/// classes are bound.
#[must_use]
pub fn generate_file(
    index: &AstIndex,
    input: &Path,
    options: &GeneratorOptions,
    counter: &mut IdCounter,
) -> GeneratedFile {
    let mut emitter = Emitter {
        index,
        options,
        counter,
        out: CodeWriter::default(),
        report: GenerationReport {
            file: input.display().to_string(),
            ..GenerationReport::default()
        },
    };

    emitter.out.line("static void");
    emitter.out.line(&format!(
        "{}{}()",
        options.function_prefix,
        ident::file_identifier(input)
    ));
    emitter.out.line("{");
    emitter.out.indent();
    emitter.namespaces();
    emitter.out.dedent();
    emitter.out.line("}");

    GeneratedFile {
        code: emitter.out.finish(),
        report: emitter.report,
    }
}

struct Emitter<'a> {
    index: &'a AstIndex,
    options: &'a GeneratorOptions,
    counter: &'a mut IdCounter,
    out: CodeWriter,
    report: GenerationReport,
}

impl Emitter<'_> {
    fn namespaces(&mut self) {
        for ns in self.index.top_namespaces() {
            let name = self.index.node(ns).name().unwrap_or_default();
            if !self.options.namespaces.iter().any(|allowed| allowed == name) {
                continue;
            }
            self.report.namespaces += 1;
            self.out.line(&format!("// namespace {name}"));
            for en in self.index.enums_in(ns) {
                self.enumeration(en);
            }
            for class in self.index.classes_in(ns) {
                self.class(class);
            }
        }
    }

    fn enumeration(&mut self, en: NodeRef) {
        let index = self.index;
        let qualified = index.fully_qualified_name(en);
        let ident = self.counter.next_ident("enum");

        self.out
            .line(&format!("::Jsonipc::Enum< {qualified} > {ident};"));
        self.out.line(&ident);
        self.out.indent();
        for value in index.enum_values(en) {
            let Some(name) = index.node(value).name() else {
                continue;
            };
            self.out
                .line(&format!(".set ({qualified}::{name}, \"{name}\")"));
        }
        self.out.line(";");
        self.out.dedent();
        self.report.enums += 1;
    }

    fn class(&mut self, class: NodeRef) {
        let index = self.index;
        if !ident::is_bindable(index.node(class).name()) {
            self.report.skipped_classes += 1;
            return;
        }
        let qualified = index.fully_qualified_name(class);
        if let Some(restrict) = &self.options.restrict_to
            && index.source_file(class).as_ref() != Some(restrict)
        {
            tracing::debug!(class = qualified, "declared outside the input file");
            self.report.skipped_classes += 1;
            return;
        }

        let members = classify_members(index, class);
        for name in members.duplicates() {
            tracing::warn!(
                class = qualified,
                method = name,
                "ambiguous overloads excluded from bindings"
            );
            self.report.duplicates += 1;
        }

        let kind = members.class_kind();
        let bases = match kind {
            ClassKind::Full => resolve_bases(index, class, &self.options.namespaces),
            ClassKind::PlainData => Vec::new(),
        };

        let mut directives = Vec::new();
        for base in &bases {
            let base = index.fully_qualified_name(*base);
            directives.push(format!(".inherit< {base} >()"));
        }
        for (name, _) in members.fields.iter() {
            directives.push(format!(".set (\"{name}\", &{qualified}::{name})"));
        }
        for (name, method) in members.methods.iter().filter(|(_, kind)| kind.is_emitted()) {
            if method == MemberKind::GetterSetter {
                directives.push(format!(
                    ".set (\"{name}\", &{qualified}::{name}, &{qualified}::{name})"
                ));
            } else {
                directives.push(format!(".set (\"{name}\", &{qualified}::{name})"));
            }
            self.report.methods += 1;
        }

        let ident = self.counter.next_ident(kind.ident_prefix());
        self.out.line(&format!(
            "::Jsonipc::{}< {qualified} > {ident};",
            kind.template()
        ));
        if !directives.is_empty() {
            self.out.line(&ident);
            self.out.indent();
            for directive in &directives {
                self.out.line(directive);
            }
            self.out.line(";");
            self.out.dedent();
        }

        self.report.classes += 1;
        if kind == ClassKind::PlainData {
            self.report.plain_data_classes += 1;
        }
        self.report.fields += members.fields.len();
        self.report.bases += bases.len();
    }
}
