//! Line-oriented input

use std::io::{self, BufRead};

use crate::error::{MenuError, Result};

/// Reads one line of user input
#[cfg_attr(test, mockall::automock)]
pub trait InputReader: Send + Sync {
    /// Read one line without its terminator
    fn read_line(&self) -> Result<String>;
}

/// Reads from the process stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinReader;

impl InputReader for StdinReader {
    fn read_line(&self) -> Result<String> {
        read_line_from(&mut io::stdin().lock())
    }
}

/// Read a single line from `reader`, stripping `\n` or `\r\n`. Invalid
/// UTF-8 is replaced rather than rejected.
pub(crate) fn read_line_from(reader: &mut impl BufRead) -> Result<String> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Err(MenuError::EndOfInput);
    }
    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut cursor = Cursor::new("first\r\nsecond\nlast");
        assert_eq!(read_line_from(&mut cursor).unwrap(), "first");
        assert_eq!(read_line_from(&mut cursor).unwrap(), "second");
        assert_eq!(read_line_from(&mut cursor).unwrap(), "last");
    }

    #[test]
    fn test_read_line_at_eof() {
        let mut cursor = Cursor::new("");
        assert!(matches!(
            read_line_from(&mut cursor),
            Err(MenuError::EndOfInput)
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut cursor = Cursor::new(b"caf\xe9\nnext\n".to_vec());
        assert_eq!(read_line_from(&mut cursor).unwrap(), "caf\u{FFFD}");
        assert_eq!(read_line_from(&mut cursor).unwrap(), "next");
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut cursor = Cursor::new("\n");
        assert_eq!(read_line_from(&mut cursor).unwrap(), "");
    }
}
