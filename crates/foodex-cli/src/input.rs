//! Code list input.
//!
//! One classification code per line. Blank lines and lines starting with
//! `#` are skipped; surrounding whitespace is trimmed.

use std::io::BufRead;

/// A code and the line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub line: usize,
    pub code: String,
}

/// Read every code from `reader`.
pub fn read_codes<R: BufRead>(reader: R) -> std::io::Result<Vec<CodeLine>> {
    let mut codes = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() || code.starts_with('#') {
            continue;
        }
        codes.push(CodeLine {
            line: index + 1,
            code: code.to_string(),
        });
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_lines() {
        let input = "# batch 1\nA0DPP\n\n  A000L#F28.A07JS  \n#A0BXX\n";
        let codes = read_codes(input.as_bytes()).unwrap();
        assert_eq!(
            codes,
            vec![
                CodeLine {
                    line: 2,
                    code: "A0DPP".to_string()
                },
                CodeLine {
                    line: 4,
                    code: "A000L#F28.A07JS".to_string()
                },
            ]
        );
    }

    #[test]
    fn empty_input_has_no_codes() {
        assert!(read_codes("".as_bytes()).unwrap().is_empty());
    }
}
