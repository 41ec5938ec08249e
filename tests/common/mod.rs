//! Shared helpers for integration tests.

#![allow(dead_code)]

use logshim::{LineWriter, SourceLocation};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer whose clones all append to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer with no timestamp or location, so lines are exactly `LEVEL body`.
pub fn bare_writer(buf: &SharedBuf) -> LineWriter<SharedBuf> {
    LineWriter::new(buf.clone())
        .without_timestamp()
        .source(SourceLocation::None)
}
