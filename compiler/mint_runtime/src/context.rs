//! Execution context: where `print` writes.

use std::io::Write;

/// Services available to running code.
///
/// One context is shared by the whole run of a program; every node and
/// method call receives it as `&mut dyn Context`.
pub trait Context {
    /// The output sink.
    fn output(&mut self) -> &mut dyn Write;
}

/// Context writing to an arbitrary stream (stdout, a file, a `Vec<u8>`).
pub struct StreamContext<W> {
    out: W,
}

impl<W: Write> StreamContext<W> {
    pub fn new(out: W) -> Self {
        StreamContext { out }
    }
}

impl<W: Write> Context for StreamContext<W> {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}

/// In-memory context for tests and embedding.
#[derive(Default)]
pub struct BufferContext {
    buffer: Vec<u8>,
}

impl BufferContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far, lossily decoded.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}

impl Context for BufferContext {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.buffer
    }
}
