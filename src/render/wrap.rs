//! Fixed-width paragraph filling.

/// Greedy word wrapper with separate first-line and continuation indents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    pub width: usize,
    pub initial_indent: &'static str,
    pub subsequent_indent: &'static str,
}

/// Class and free-function bodies.
pub const TOP: Wrapper = Wrapper {
    width: 68,
    initial_indent: "",
    subsequent_indent: "",
};

/// Method bodies, which the host indents four columns deeper.
pub const METHOD: Wrapper = Wrapper {
    width: 64,
    initial_indent: "",
    subsequent_indent: "",
};

/// Attribute and method list entries.
pub const ENTRY: Wrapper = Wrapper {
    width: 64,
    initial_indent: "",
    subsequent_indent: "    ",
};

impl Wrapper {
    /// Same width, every line indented four columns.
    pub fn indented(self) -> Wrapper {
        Wrapper {
            initial_indent: "    ",
            subsequent_indent: "    ",
            ..self
        }
    }

    /// Break `text` into lines no wider than `width` characters.
    ///
    /// Runs of whitespace (newlines included) collapse to one space. A word
    /// that cannot fit on a line of its own is split at the width boundary.
    /// It always starts a fresh line; the tail of a partly filled line is
    /// not used for its first piece.
    pub fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for word in text.split_whitespace() {
            let mut rest = word;
            while !rest.is_empty() {
                let avail = self.available(lines.len());
                let rest_len = rest.chars().count();
                let needed = if current.is_empty() {
                    rest_len
                } else {
                    current_len + 1 + rest_len
                };

                if needed <= avail {
                    if !current.is_empty() {
                        current.push(' ');
                        current_len += 1;
                    }
                    current.push_str(rest);
                    current_len += rest_len;
                    break;
                }

                if !current.is_empty() {
                    lines.push(self.line(lines.len(), &current));
                    current.clear();
                    current_len = 0;
                    continue;
                }

                // Alone on the line and still too long
                let split = rest
                    .char_indices()
                    .nth(avail)
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                lines.push(self.line(lines.len(), &rest[..split]));
                rest = &rest[split..];
            }
        }

        if !current.is_empty() {
            lines.push(self.line(lines.len(), &current));
        }
        lines
    }

    /// [`wrap`](Self::wrap) joined with newlines.
    pub fn fill(&self, text: &str) -> String {
        self.wrap(text).join("\n")
    }

    fn indent(&self, line_no: usize) -> &'static str {
        if line_no == 0 {
            self.initial_indent
        } else {
            self.subsequent_indent
        }
    }

    fn available(&self, line_no: usize) -> usize {
        self.width
            .saturating_sub(self.indent(line_no).chars().count())
            .max(1)
    }

    fn line(&self, line_no: usize, content: &str) -> String {
        format!("{}{}", self.indent(line_no), content)
    }
}
