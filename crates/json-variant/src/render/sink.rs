//! Append-only text destinations for the renderer.

use std::fmt;
use std::io;

use crate::error::RenderError;

/// Anything rendered text can be appended to.
pub trait Sink {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError>;
}

impl Sink for String {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.push_str(s);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        (**self).write_str(s)
    }
}

/// Adapts an [`io::Write`] (file, socket, stdout) into a [`Sink`].
///
/// Nothing is buffered here; wrap the writer in [`io::BufWriter`] when the
/// destination is unbuffered.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }
}

/// Adapts a [`fmt::Write`] (a [`fmt::Formatter`], a `String`) into a [`Sink`].
#[derive(Debug)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn write_str(&mut self, s: &str) -> Result<(), RenderError> {
        fmt::Write::write_str(&mut self.inner, s)?;
        Ok(())
    }
}
