//! Per-file generation: obtain an AST for each input, emit its wrapper.

use std::path::{Path, PathBuf};

use anyhow::Context;
use castbind_ast::{AstIndex, CastXml, paths};
use castbind_codegen::{GeneratedFile, IdCounter, generate_file};
use castbind_config::CastbindConfig;

pub struct Driver<'a> {
    config: &'a CastbindConfig,
    parser: CastXml,
    xml: bool,
}

impl<'a> Driver<'a> {
    pub fn new(config: &'a CastbindConfig, xml: bool) -> Self {
        Self {
            config,
            parser: config.castxml.to_parser(),
            xml,
        }
    }

    /// Generate every file in order with one counter shared across the run.
    pub fn generate_all(&self, files: &[PathBuf]) -> anyhow::Result<Vec<GeneratedFile>> {
        let mut counter = IdCounter::new(self.config.generator.counter_start);
        files
            .iter()
            .map(|file| self.generate_one(file, &mut counter))
            .collect()
    }

    fn generate_one(&self, file: &Path, counter: &mut IdCounter) -> anyhow::Result<GeneratedFile> {
        let index = self.load(file)?;
        tracing::debug!(file = %file.display(), nodes = index.len(), "loaded AST");

        let options = self.config.generator.options_for(self.restriction(file)?);
        Ok(generate_file(&index, file, &options, counter))
    }

    fn load(&self, file: &Path) -> anyhow::Result<AstIndex> {
        if self.xml {
            AstIndex::from_xml_file(file)
                .with_context(|| format!("failed to load XML AST from {}", file.display()))
        } else {
            self.parser
                .parse(file)
                .with_context(|| format!("failed to parse {}", file.display()))
        }
    }

    /// XML inputs carry no source of their own to compare against, so they
    /// are never restricted.
    fn restriction(&self, file: &Path) -> anyhow::Result<Option<PathBuf>> {
        if self.xml || !self.config.generator.restrict_to_input {
            return Ok(None);
        }
        paths::absolute(file)
            .map(Some)
            .with_context(|| format!("cannot resolve absolute path of {}", file.display()))
    }
}
