use std::path::PathBuf;

use clap::Parser;

use castbind_config::CastbindConfig;

/// Top-level CLI parser for the `castbind` binary.
#[derive(Debug, Parser)]
#[command(
    name = "castbind",
    version,
    about = "Generate Jsonipc registration code from C++ sources via CastXML"
)]
pub struct Cli {
    /// C++ sources (or XML ASTs with --xml) to generate bindings for
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Add an include directory for the C++ parser
    #[arg(short = 'I', value_name = "DIR")]
    pub includes: Vec<PathBuf>,

    /// Bind enums and classes of this top-level namespace
    #[arg(short = 'N', long = "namespace", value_name = "NS")]
    pub namespaces: Vec<String>,

    /// Inputs are CastXML output already; do not run the parser
    #[arg(long)]
    pub xml: bool,

    /// Also bind classes declared in included headers
    #[arg(long)]
    pub all_files: bool,

    /// Write generated code to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print per-file generation reports as JSON on stderr
    #[arg(long)]
    pub report: bool,

    /// Read configuration from FILE instead of ./castbind.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer command-line flags over loaded configuration. List flags
    /// append; switches override.
    pub fn apply_to(&self, config: &mut CastbindConfig) {
        config.castxml.includes.extend(
            self.includes
                .iter()
                .map(|dir| dir.to_string_lossy().into_owned()),
        );
        for ns in &self.namespaces {
            if !config.generator.namespaces.contains(ns) {
                config.generator.namespaces.push(ns.clone());
            }
        }
        if self.all_files {
            config.generator.restrict_to_input = false;
        }
    }
}
