//! Shell-first page writer.

use std::io::Write;

use crate::error::RenderError;
use crate::shell::Shell;

/// State of the page writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Shell not yet written.
    Initial,
    /// Shell written, sections can follow.
    ShellWritten,
    /// Closing shell written.
    Finished,
}

/// Writer that enforces the shell, sections, closing order of a page.
///
/// Generic over any `io::Write`, so the same page can go to a `Vec<u8>`, a
/// file or stdout.
pub struct PageWriter<W: Write> {
    inner: W,
    state: WriterState,
    sections_written: Vec<String>,
    bytes_written: usize,
}

impl<W: Write> PageWriter<W> {
    /// Create a new page writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: WriterState::Initial,
            sections_written: Vec::new(),
            bytes_written: 0,
        }
    }

    /// Write the opening shell. Must be called before any sections.
    pub fn write_shell(&mut self, shell: &Shell) -> Result<(), RenderError> {
        match self.state {
            WriterState::Initial => {}
            WriterState::ShellWritten => return Err(RenderError::ShellAlreadyWritten),
            WriterState::Finished => return Err(RenderError::AlreadyFinished),
        }

        self.write_bytes(shell.render_opening().as_bytes())?;
        self.state = WriterState::ShellWritten;
        Ok(())
    }

    /// Write a named section. The shell must be written first.
    pub fn write_section(&mut self, name: &str, html: &str) -> Result<(), RenderError> {
        match self.state {
            WriterState::Initial => return Err(RenderError::ShellNotWritten),
            WriterState::Finished => return Err(RenderError::AlreadyFinished),
            WriterState::ShellWritten => {}
        }

        self.write_bytes(html.as_bytes())?;
        self.write_bytes(b"\n")?;
        self.sections_written.push(name.to_string());
        Ok(())
    }

    /// Write the closing shell and flush.
    pub fn finish(&mut self, shell: &Shell) -> Result<(), RenderError> {
        match self.state {
            WriterState::Initial => return Err(RenderError::ShellNotWritten),
            WriterState::Finished => return Err(RenderError::AlreadyFinished),
            WriterState::ShellWritten => {}
        }

        self.write_bytes(shell.render_closing().as_bytes())?;
        self.inner.flush()?;
        self.state = WriterState::Finished;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        self.inner.write_all(bytes)?;
        self.bytes_written += bytes.len();
        Ok(())
    }

    /// Names of the sections written so far, in order.
    pub fn sections_written(&self) -> &[String] {
        &self.sections_written
    }

    /// Total bytes written.
    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Whether the closing shell has been written.
    pub fn is_finished(&self) -> bool {
        self.state == WriterState::Finished
    }

    /// Consume the writer and return the inner value.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::HeadContent;

    fn shell() -> Shell {
        Shell::new(HeadContent::new("Test"))
            .with_body_start("<body>")
            .with_body_end("</body></html>")
    }

    #[test]
    fn test_page_in_order() {
        let shell = shell();
        let mut writer = PageWriter::new(Vec::new());
        writer.write_shell(&shell).unwrap();
        writer.write_section("hero", "<section>hi</section>").unwrap();
        writer.finish(&shell).unwrap();

        assert_eq!(writer.sections_written(), ["hero".to_string()]);
        assert!(writer.is_finished());
        let written = writer.bytes_written();
        let html = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(html.len(), written);
        assert!(html.contains("<body><section>hi</section>\n</body></html>"));
    }

    #[test]
    fn test_section_before_shell_is_rejected() {
        let mut writer = PageWriter::new(Vec::new());
        let err = writer.write_section("hero", "<p></p>").unwrap_err();
        assert!(matches!(err, RenderError::ShellNotWritten));
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn test_shell_twice_is_rejected() {
        let shell = shell();
        let mut writer = PageWriter::new(Vec::new());
        writer.write_shell(&shell).unwrap();
        assert!(matches!(
            writer.write_shell(&shell),
            Err(RenderError::ShellAlreadyWritten)
        ));
    }

    #[test]
    fn test_nothing_after_finish() {
        let shell = shell();
        let mut writer = PageWriter::new(Vec::new());
        writer.write_shell(&shell).unwrap();
        writer.finish(&shell).unwrap();
        assert!(matches!(
            writer.write_section("late", "<p></p>"),
            Err(RenderError::AlreadyFinished)
        ));
        assert!(matches!(writer.finish(&shell), Err(RenderError::AlreadyFinished)));
    }
}
