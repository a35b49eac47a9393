//! Invocation of the external CastXML parser.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::AstError;
use crate::index::AstIndex;

/// How to run CastXML for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastXml {
    pub program: String,
    /// Language standard passed as `-std=<std>`.
    pub std: String,
    pub includes: Vec<PathBuf>,
    /// Appended verbatim before the input file.
    pub extra_args: Vec<String>,
}

impl Default for CastXml {
    fn default() -> Self {
        Self {
            program: "castxml".to_string(),
            std: "gnu++17".to_string(),
            includes: Vec::new(),
            extra_args: Vec::new(),
        }
    }
}

impl CastXml {
    /// Full argument vector, program first.
    #[must_use]
    pub fn command_line(&self, input: &Path) -> Vec<String> {
        let mut args = vec![
            self.program.clone(),
            format!("-std={}", self.std),
            "-o".to_string(),
            "/dev/stdout".to_string(),
            "--castxml-output=1".to_string(),
        ];
        for include in &self.includes {
            args.push("-I".to_string());
            args.push(include.display().to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args.push(input.display().to_string());
        args
    }

    /// Run the parser and return its XML output.
    ///
    /// # Errors
    /// Returns [`AstError::ParserLaunch`] if the program cannot be started,
    /// [`AstError::ParserFailed`] with the full command line on a non-zero
    /// exit, and [`AstError::Utf8`] if the output is not UTF-8.
    pub fn run(&self, input: &Path) -> Result<String, AstError> {
        let args = self.command_line(input);
        tracing::debug!(command = %args.join(" "), "running C++ parser");

        let output = Command::new(&args[0])
            .args(&args[1..])
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| AstError::ParserLaunch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(AstError::ParserFailed {
                program: self.program.clone(),
                status: output.status,
                command: args.join(" "),
            });
        }
        Ok(String::from_utf8(output.stdout)?)
    }

    /// Run the parser and index its output.
    ///
    /// # Errors
    /// As [`CastXml::run`] and [`AstIndex::from_xml`].
    pub fn parse(&self, input: &Path) -> Result<AstIndex, AstError> {
        AstIndex::from_xml(&self.run(input)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_line_orders_includes_before_input() {
        let parser = CastXml {
            includes: vec![PathBuf::from("/usr/include/x"), PathBuf::from("inc")],
            extra_args: vec!["-DNDEBUG".to_string()],
            ..CastXml::default()
        };
        assert_eq!(
            parser.command_line(Path::new("a.cc")),
            [
                "castxml",
                "-std=gnu++17",
                "-o",
                "/dev/stdout",
                "--castxml-output=1",
                "-I",
                "/usr/include/x",
                "-I",
                "inc",
                "-DNDEBUG",
                "a.cc",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_reports_command() {
        let parser = CastXml {
            program: "false".to_string(),
            ..CastXml::default()
        };
        let error = parser.run(Path::new("input.cc")).expect_err("false exits 1");
        match &error {
            AstError::ParserFailed { command, .. } => {
                assert!(command.starts_with("false -std=gnu++17"));
                assert!(command.ends_with("input.cc"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(error.to_string().contains("full command"));
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let parser = CastXml {
            program: "castbind-test-no-such-program".to_string(),
            ..CastXml::default()
        };
        assert!(matches!(
            parser.run(Path::new("input.cc")),
            Err(AstError::ParserLaunch { .. })
        ));
    }
}
