use std::io::Write;

/// Execution context of a running program.
///
/// The interpreter's only external resource is the stream that `print`
/// writes to; a context supplies it. Writes are sequential and performed in
/// statement order.
pub trait Context {
    /// Returns the output stream for `print` statements.
    fn output(&mut self) -> &mut dyn Write;
}

/// A context capturing all output in memory.
///
/// Used by the `str(...)` form, which renders a value through the regular
/// printing routine into a buffer, and by tests that assert on program
/// output.
#[derive(Debug, Default)]
pub struct BufferContext {
    buffer: Vec<u8>,
}

impl BufferContext {
    /// Creates an empty buffer context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the context and returns everything written to it.
    #[must_use]
    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}

impl Context for BufferContext {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.buffer
    }
}

/// A context writing directly to an underlying stream, such as a file or
/// the standard output.
#[derive(Debug)]
pub struct StreamContext<W: Write> {
    output: W,
}

impl<W: Write> StreamContext<W> {
    /// Creates a context writing to `output`.
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Context for StreamContext<W> {
    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
