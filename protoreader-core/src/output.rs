//! Output sinks for generated text.

use core::fmt::{self, Write};

const INDENT: &str = "  ";

/// An append-only destination for rendered type names.
///
/// Any [`fmt::Write`] is a sink; the only addition is the separator written between type
/// arguments.
pub trait TypeNameSink: Write {
    /// Writes the separator between two type arguments.
    fn comma(&mut self) -> fmt::Result {
        self.write_char(',')
    }
}

impl<W> TypeNameSink for W where W: Write + ?Sized {}

/// A text buffer for generated source, with indentation.
///
/// Indentation is applied lazily: it's only written once something is appended to a line, so
/// blank lines stay empty.
#[derive(Debug, Clone)]
pub struct TextOutput {
    buf: String,
    indentation: usize,
    line_start: bool,
}

impl TextOutput {
    /// Creates an empty output.
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            indentation: 0,
            line_start: true,
        }
    }

    /// Appends `text`, indenting every line it starts.
    pub fn append(&mut self, text: &str) -> &mut Self {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.append_fragment(first);
        }
        for line in lines {
            self.buf.push('\n');
            self.line_start = true;
            self.append_fragment(line);
        }

        self
    }

    /// Appends a single character.
    pub fn append_char(&mut self, c: char) -> &mut Self {
        let mut bytes = [0; 4];
        self.append(c.encode_utf8(&mut bytes))
    }

    /// Ends the current line.
    pub fn new_line(&mut self) -> &mut Self {
        self.append("\n")
    }

    /// Appends a space.
    pub fn space(&mut self) -> &mut Self {
        self.append(" ")
    }

    /// Appends a semicolon.
    pub fn semi(&mut self) -> &mut Self {
        self.append(";")
    }

    /// Increases the indentation of subsequent lines.
    pub fn indent_in(&mut self) -> &mut Self {
        self.indentation += 1;
        self
    }

    /// Decreases the indentation of subsequent lines.
    pub fn indent_out(&mut self) -> &mut Self {
        self.indentation = self.indentation.saturating_sub(1);
        self
    }

    /// Opens a `{` block and moves to an indented new line.
    pub fn open_block(&mut self) -> &mut Self {
        if !self.line_start {
            self.space();
        }
        self.append("{").indent_in().new_line()
    }

    /// Closes the innermost block on its own line.
    pub fn close_block(&mut self) -> &mut Self {
        self.indent_out();
        if !self.line_start {
            self.new_line();
        }
        self.append("}")
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the output, returning the text.
    pub fn into_string(self) -> String {
        self.buf
    }

    fn append_fragment(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        if self.line_start {
            for _ in 0..self.indentation {
                self.buf.push_str(INDENT);
            }
            self.line_start = false;
        }
        self.buf.push_str(fragment);
    }
}

impl Default for TextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TextOutput {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_indented() {
        let mut out = TextOutput::new();
        out.append("interface Reader").open_block();
        out.append("String readName(JsonReaderEx reader)").semi();
        out.new_line().append("int count()").semi();
        out.close_block().new_line();

        assert_eq!(
            out.as_str(),
            "interface Reader {\n  String readName(JsonReaderEx reader);\n  int count();\n}\n"
        );
    }

    #[test]
    fn blank_lines_stay_empty() {
        let mut out = TextOutput::new();
        out.indent_in().append("a\n\nb");
        assert_eq!(out.into_string(), "  a\n\n  b");
    }

    #[test]
    fn fmt_write_goes_through_indentation() {
        let mut out = TextOutput::new();
        out.indent_in();
        write!(out, "{}", "List<String>").unwrap();
        out.comma().unwrap();
        out.indent_out().new_line().append_char('x');
        assert_eq!(out.as_str(), "  List<String>,\nx");
    }
}
