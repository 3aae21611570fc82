//! Threshold-flushed output buffer.

use std::io::{self, Write};

/// Output Buffer
///
/// Accumulates whole lines in memory and hands them to `inner` in one write once the next
/// line would take the buffer to `capacity` bytes or beyond. Capacity is a flush trigger,
/// not a ceiling: a single line longer than `capacity` is still buffered whole, so lines are
/// never split across writes.
///
/// Nothing is written on drop. Remaining content only reaches `inner` through
/// [`OutputBuffer::flush_remaining`], which consumes the buffer.
#[derive(Debug)]
pub struct OutputBuffer<W: Write> {
	inner: W,
	buf: Vec<u8>,
	capacity: usize,
	written: u64,
}

impl<W: Write> OutputBuffer<W> {
	pub fn new(inner: W, capacity: usize) -> Self {
		Self {
			inner,
			buf: Vec::with_capacity(capacity),
			capacity,
			written: 0,
		}
	}

	/// Append
	///
	/// Flush first if `pending + line.len() >= capacity`, then buffer `line` as one unit.
	pub fn append(&mut self, line: &str) -> io::Result<()> {
		if self.buf.len() + line.len() >= self.capacity {
			self.flush_buffer()?;
		}
		self.buf.extend_from_slice(line.as_bytes());
		Ok(())
	}

	/// Flush Remaining
	///
	/// Write whatever is still buffered (possibly nothing), flush `inner` and return it.
	pub fn flush_remaining(mut self) -> io::Result<W> {
		self.flush_buffer()?;
		self.inner.flush()?;
		Ok(self.inner)
	}

	/// Bytes currently held in memory.
	pub fn pending(&self) -> usize {
		self.buf.len()
	}

	/// Bytes handed to `inner` so far.
	pub fn written(&self) -> u64 {
		self.written
	}

	fn flush_buffer(&mut self) -> io::Result<()> {
		if self.buf.is_empty() {
			return Ok(());
		}
		log::trace!("Flushing {} buffered bytes", self.buf.len());
		self.inner.write_all(&self.buf)?;
		self.written += self.buf.len() as u64;
		self.buf.clear();
		Ok(())
	}
}
