//! Text output

use std::io::{self, Write};

use crate::error::Result;

/// Writes fragments of text to the user
pub trait OutPrinter: Send + Sync {
    /// Write `text` exactly as given; no newline is appended
    fn print(&self, text: &str) -> Result<()>;

    /// Write `message` set apart by blank lines. Blank messages are skipped.
    fn important(&self, message: &str) -> Result<()> {
        if message.trim().is_empty() {
            return Ok(());
        }
        self.print(&format!("\n{message}\n\n"))
    }

    /// Write one blank line
    fn vertical_space(&self) -> Result<()> {
        self.print("\n")
    }
}

/// Writes to the process stdout, flushing after every fragment
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutPrinter;

impl OutPrinter for StdoutPrinter {
    fn print(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl OutPrinter for Recorder {
        fn print(&self, text: &str) -> Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_important_surrounds_with_blank_lines() {
        let recorder = Recorder::default();
        recorder.important("Careful").unwrap();
        assert_eq!(*recorder.0.lock().unwrap(), vec!["\nCareful\n\n"]);
    }

    #[test]
    fn test_important_skips_blank_message() {
        let recorder = Recorder::default();
        recorder.important("   ").unwrap();
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_vertical_space() {
        let recorder = Recorder::default();
        recorder.vertical_space().unwrap();
        assert_eq!(*recorder.0.lock().unwrap(), vec!["\n"]);
    }
}
