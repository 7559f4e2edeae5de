//! Text output files, named `<stem>[<index>].txt`.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use mlglog::event::Record;
use tracing::debug;

/// The output files for one input log.
pub struct Output<'a> {
    dir: &'a Path,
    stem: &'a str,
    split: bool,
    /// Index of the next file to open.
    index: usize,
    sink: Option<BufWriter<File>>,
}

impl<'a> Output<'a> {
    pub fn new(dir: &'a Path, stem: &'a str, split: bool) -> Self {
        Self {
            dir,
            stem,
            split,
            index: 0,
            sink: None,
        }
    }

    /// Called at each version header. Opens the first file, and in split mode
    /// a new file for every sub-stream.
    pub fn begin_substream(&mut self) -> Result<()> {
        if self.sink.is_some() && !self.split {
            return Ok(());
        }

        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
        }

        let path = self.dir.join(format!("{}[{}].txt", self.stem, self.index));
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;

        debug!("Writing {}", path.display());

        self.index += 1;
        self.sink = Some(BufWriter::new(file));

        Ok(())
    }

    /// Write one record as a CRLF-terminated line.
    pub fn write(&mut self, record: &Record) -> Result<()> {
        let sink = self
            .sink
            .as_mut()
            .context("record precedes the first version header")?;

        write!(sink, "{record}\r\n")?;

        Ok(())
    }

    pub fn finish(self) -> Result<()> {
        if let Some(mut sink) = self.sink {
            sink.flush()?;
        }

        Ok(())
    }
}
