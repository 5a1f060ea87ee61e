const INDENT: &str = "    ";

/// Append-only output writer with indentation bookkeeping.
///
/// The generator only ever asks it to print text, raise the indent level, or
/// lower it; the printer never reorders anything. Indentation is applied
/// lazily at the start of each non-empty line so that multi-line `print`
/// calls behave the same as repeated single-line calls.
#[derive(Debug)]
pub struct Printer {
    out:           String,
    depth:         usize,
    at_line_start: bool,
}

impl Printer {
    pub fn new() -> Self {
        Printer {
            out:           String::new(),
            depth:         0,
            at_line_start: true,
        }
    }

    pub fn print(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.out.push('\n');
                self.at_line_start = true;
                continue;
            }
            if self.at_line_start {
                for _ in 0..self.depth {
                    self.out.push_str(INDENT);
                }
                self.at_line_start = false;
            }
            self.out.push(ch);
        }
    }

    pub fn println(&mut self, line: &str) {
        self.print(line);
        self.print("\n");
    }

    pub fn newline(&mut self) {
        self.print("\n");
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn outdent(&mut self) {
        debug_assert!(self.depth > 0, "outdent without matching indent");
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_applies_at_line_starts() {
        let mut printer = Printer::new();
        printer.println("typedef struct point {");
        printer.indent();
        printer.println("float x;");
        printer.println("float y;");
        printer.outdent();
        printer.println("} point;");
        assert_eq!(
            printer.into_string(),
            "typedef struct point {\n    float x;\n    float y;\n} point;\n"
        );
    }

    #[test]
    fn test_blank_lines_carry_no_indent() {
        let mut printer = Printer::new();
        printer.indent();
        printer.newline();
        printer.println("x");
        assert_eq!(printer.into_string(), "\n    x\n");
    }

    #[test]
    fn test_multi_line_print_indents_each_line() {
        let mut printer = Printer::new();
        printer.indent();
        printer.print("a\nb\n");
        assert_eq!(printer.into_string(), "    a\n    b\n");
    }
}
