//! Where received code snippets go.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Receives each complete code block from the dialog stream.
pub trait SnippetSink: Send {
    fn insert(&mut self, code: &str) -> io::Result<()>;

    /// Called once the dialog has finished typing.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Appends snippets to a file, one per paragraph.
pub struct FileSnippetSink {
    path: PathBuf,
}

impl FileSnippetSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnippetSink for FileSnippetSink {
    fn insert(&mut self, code: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(code.as_bytes())?;
        if !code.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        tracing::info!(path = %self.path.display(), bytes = code.len(), "Snippet inserted");
        Ok(())
    }
}

/// Holds snippets until the dialog is done, then prints them as fenced
/// blocks so they never interleave with typed text.
pub struct PrintSnippetSink<W: Write + Send> {
    out: W,
    pending: Vec<String>,
}

impl<W: Write + Send> PrintSnippetSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Vec::new(),
        }
    }
}

impl<W: Write + Send> SnippetSink for PrintSnippetSink<W> {
    fn insert(&mut self, code: &str) -> io::Result<()> {
        self.pending.push(code.to_owned());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        for code in self.pending.drain(..) {
            writeln!(self.out, "\n```")?;
            write!(self.out, "{code}")?;
            if !code.ends_with('\n') {
                writeln!(self.out)?;
            }
            writeln!(self.out, "```")?;
        }
        self.out.flush()
    }
}
