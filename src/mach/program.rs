use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Bytes of program memory. The last byte is always the NUL.
pub const PROGRAM_SPACE: usize = 512;
/// Longest source line accepted, not counting the line ending.
pub const MAX_LINE_LEN: usize = 80;
/// A trimmed line starting with this ends a transfer.
pub const END_OF_TRANSFER: char = '@';

/// How a trimmed line should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Nothing left worth storing.
    Blank,
    Useful,
    /// The line never ended with a newline.
    NoTerminator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Start,
    Code,
    CopyString,
    SkipSpaces,
}

/// ## Squeeze a source line
///
/// Removes everything the tokenizer would skip anyway so more program
/// fits in memory. Tabs count as spaces, leading spaces go, runs of
/// spaces become one and a trailing space is dropped. A `#` outside a
/// string starts a comment that runs to the end of the line. Strings
/// are copied as they are.
///
/// Useful lines come back ending in `\n`. Blank lines come back empty.
pub fn trim_line(line: &str) -> (LineStyle, String) {
    let body = match line.find('\n') {
        Some(end) => &line[..end],
        None => return (LineStyle::NoTerminator, String::new()),
    };
    let mut out = String::with_capacity(body.len() + 1);
    let mut state = Scan::Start;
    for ch in body.chars() {
        let ch = match ch {
            '\t' => ' ',
            '\r' => continue,
            ch => ch,
        };
        state = match (state, ch) {
            (Scan::CopyString, '\'') => {
                out.push(ch);
                Scan::Code
            }
            (Scan::CopyString, _) => {
                out.push(ch);
                Scan::CopyString
            }
            (_, '#') => break,
            (Scan::Start, ' ') | (Scan::SkipSpaces, ' ') => state,
            (_, ' ') => {
                out.push(ch);
                Scan::SkipSpaces
            }
            (_, '\'') => {
                out.push(ch);
                Scan::CopyString
            }
            (_, _) => {
                out.push(ch);
                Scan::Code
            }
        };
    }
    if state == Scan::SkipSpaces {
        out.pop();
    }
    if out.is_empty() {
        return (LineStyle::Blank, out);
    }
    out.push('\n');
    (LineStyle::Useful, out)
}

/// ## Program memory
///
/// Trimmed lines packed one after another. The interpreter runs
/// straight from this text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    space: Vec<u8>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Trims and stores every line of a source text. Stops early at a
    /// line starting with `@`, the same as a download.
    pub fn from_source(source: &str) -> Result<Program> {
        let mut program = Program::new();
        for (index, line) in source.split_inclusive('\n').enumerate() {
            let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
            if len > MAX_LINE_LEN {
                return Err(error!(LineBufferOverflow; format!("LINE {}", index + 1)));
            }
            let (style, trimmed) = if line.ends_with('\n') {
                trim_line(line)
            } else {
                trim_line(&format!("{}\n", line))
            };
            if trimmed.starts_with(END_OF_TRANSFER) {
                break;
            }
            if style == LineStyle::Useful {
                program
                    .store_line(&trimmed)
                    .map_err(|e| e.message(format!("LINE {}", index + 1)))?;
            }
        }
        Ok(program)
    }

    /// Program text up to the first NUL.
    pub fn from_bytes(bytes: &[u8]) -> Program {
        let end = bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or_else(|| bytes.len())
            .min(PROGRAM_SPACE - 1);
        Program {
            space: bytes[..end].to_vec(),
        }
    }

    pub fn store_line(&mut self, line: &str) -> Result<()> {
        if self.space.len() + line.len() > PROGRAM_SPACE - 1 {
            return Err(error!(OutOfMemory));
        }
        self.space.extend_from_slice(line.as_bytes());
        Ok(())
    }

    pub fn text(&self) -> &[u8] {
        &self.space
    }

    pub fn len(&self) -> usize {
        self.space.len()
    }

    pub fn is_empty(&self) -> bool {
        self.space.is_empty()
    }

    pub fn clear(&mut self) {
        self.space.clear();
    }

    /// The whole program memory, NUL padded.
    pub fn image(&self) -> [u8; PROGRAM_SPACE] {
        let mut image = [0; PROGRAM_SPACE];
        image[..self.space.len()].copy_from_slice(&self.space);
        image
    }

    /// Line number, counting from 1, and text of the line holding
    /// `offset`. The end of the program belongs to the last line.
    pub fn line_at(&self, offset: usize) -> (usize, String) {
        let offset = offset.min(self.space.len().saturating_sub(1));
        let start = self.space[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let end = self.space[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.space.len(), |i| offset + i);
        let number = self.space[..start].iter().filter(|&&b| b == b'\n').count() + 1;
        (
            number,
            String::from_utf8_lossy(&self.space[start..end]).into_owned(),
        )
    }

    pub fn listing(&self) -> String {
        String::from_utf8_lossy(&self.space).into_owned()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.listing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_trim_squeezes_spaces() {
        assert_eq!(
            trim_line("  \tprint  'a  b' ,\t x  \n"),
            (LineStyle::Useful, "print 'a  b' , x\n".to_string())
        );
    }

    #[test]
    fn test_trim_comments() {
        assert_eq!(trim_line("   # only a comment\n").0, LineStyle::Blank);
        assert_eq!(
            trim_line("a=1 # set a\n"),
            (LineStyle::Useful, "a=1\n".to_string())
        );
        assert_eq!(
            trim_line("print '#1'#x\n"),
            (LineStyle::Useful, "print '#1'\n".to_string())
        );
    }

    #[test]
    fn test_trim_styles() {
        assert_eq!(trim_line("\n").0, LineStyle::Blank);
        assert_eq!(trim_line(" \t \r\n").0, LineStyle::Blank);
        assert_eq!(trim_line("end").0, LineStyle::NoTerminator);
        assert_eq!(trim_line("end\r\n").1, "end\n");
    }

    #[test]
    fn test_out_of_memory() {
        let mut program = Program::new();
        let line = format!("{}\n", "a".repeat(99));
        for _ in 0..5 {
            program.store_line(&line).unwrap();
        }
        program.store_line(&"c".repeat(11)).unwrap();
        assert_eq!(program.len(), PROGRAM_SPACE - 1);
        assert!(program.store_line("b\n").unwrap_err().is(ErrorCode::OutOfMemory));
        assert_eq!(program.image()[PROGRAM_SPACE - 1], 0);
    }

    #[test]
    fn test_from_source() {
        let program = Program::from_source("# demo\n\na = 1 ;\nprint a\n@\nend\n").unwrap();
        assert_eq!(program.listing(), "a = 1 ;\nprint a\n");
        let program = Program::from_source("end").unwrap();
        assert_eq!(program.text(), b"end\n");
    }

    #[test]
    fn test_line_too_long() {
        let source = format!("a=1\n{}\n", "b".repeat(MAX_LINE_LEN + 1));
        let error = Program::from_source(&source).unwrap_err();
        assert!(error.is(ErrorCode::LineBufferOverflow));
        assert_eq!(error.to_string(), "LINE BUFFER OVERFLOW; LINE 2");
    }

    #[test]
    fn test_line_at() {
        let program = Program::from_source("a=1\nprint a\n").unwrap();
        assert_eq!(program.line_at(0), (1, "a=1".to_string()));
        assert_eq!(program.line_at(6), (2, "print a".to_string()));
        assert_eq!(program.line_at(program.len()), (2, "print a".to_string()));
        assert_eq!(Program::new().line_at(3), (1, String::new()));
    }

    #[test]
    fn test_from_bytes() {
        let program = Program::from_bytes(b"end\n\0\0garbage");
        assert_eq!(program.text(), b"end\n");
        assert_eq!(Program::from_bytes(&[b'a'; 600]).len(), PROGRAM_SPACE - 1);
    }
}
