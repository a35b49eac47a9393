use std::io::Write;
use std::path::Path;

use anyhow::Context;
use castbind_codegen::{GeneratedFile, GenerationReport};

/// Concatenate every file's generated code in input order.
pub fn render_code(generated: &[GeneratedFile]) -> String {
    generated.iter().map(|file| file.code.as_str()).collect()
}

pub fn render_reports(generated: &[GeneratedFile]) -> anyhow::Result<String> {
    let reports: Vec<&GenerationReport> = generated.iter().map(|file| &file.report).collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}

/// Write generated code to `path`, or stdout when none is given.
pub fn write_code(generated: &[GeneratedFile], path: Option<&Path>) -> anyhow::Result<()> {
    let code = render_code(generated);
    match path {
        Some(path) => std::fs::write(path, code)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(code.as_bytes())
            .context("failed to write generated code to stdout")?,
    }
    Ok(())
}

/// Reports go to stderr so they never mix with generated code on stdout.
pub fn write_reports(generated: &[GeneratedFile]) -> anyhow::Result<()> {
    let rendered = render_reports(generated)?;
    eprintln!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn generated(code: &str, file: &str, enums: usize) -> GeneratedFile {
        GeneratedFile {
            code: code.to_string(),
            report: GenerationReport {
                file: file.to_string(),
                enums,
                ..GenerationReport::default()
            },
        }
    }

    #[test]
    fn code_is_concatenated_in_order() {
        let files = [generated("first\n", "a.cc", 0), generated("second\n", "b.cc", 0)];
        assert_eq!(render_code(&files), "first\nsecond\n");
    }

    #[test]
    fn reports_render_as_json_array() {
        let files = [generated("", "a.cc", 2), generated("", "b.cc", 0)];
        let value: serde_json::Value =
            serde_json::from_str(&render_reports(&files).expect("renders")).expect("valid json");

        assert_eq!(value[0]["file"], "a.cc");
        assert_eq!(value[0]["enums"], 2);
        assert_eq!(value[1]["file"], "b.cc");
    }

    #[test]
    fn code_is_written_to_output_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("bindings.cc");
        write_code(&[generated("static void\n", "a.cc", 0)], Some(&path)).expect("writes");
        assert_eq!(std::fs::read_to_string(path).expect("reads"), "static void\n");
    }
}
