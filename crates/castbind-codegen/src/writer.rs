/// Line-oriented text sink with two-space indentation.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
    output: String,
    indent: usize,
}

impl CodeWriter {
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub const fn indent(&mut self) {
        self.indent += 1;
    }

    pub const fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.output
    }
}
