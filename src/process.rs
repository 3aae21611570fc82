//! Lunar distance pipeline: CSV rows in, `date,distance` lines out.

use std::io::{BufReader, Read, Write};

use anyhow::{Context, Result};
use csv::{StringRecord, StringRecordsIntoIter};

use crate::buffer::OutputBuffer;
use crate::date::parse_timestamp;
use crate::ephemeris::{Ephemeris, LowPrecisionMoon};
use crate::error::Error;
use crate::types::{Observer, RunConfig};

pub static HEADER: &str = "Date,Distance (KM)\n";

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	pub rows: u64,
	/// Total bytes written to the output, header included.
	pub bytes: u64,
}

/// Turns one input row into one output line.
#[derive(Debug)]
pub struct Transformer<E: Ephemeris> {
	ephemeris: E,
	observer: Observer,
}

impl<E: Ephemeris> Transformer<E> {
	pub fn new(ephemeris: E, observer: Observer) -> Self {
		Self {
			ephemeris,
			observer,
		}
	}

	/// Transform
	///
	/// Parse field 0 of `record` as a timestamp, look up the lunar distance for it and return
	/// `"<field 0>,<distance>\n"`. The date text is echoed exactly as read; remaining fields are
	/// ignored.
	pub fn transform(&self, record: &StringRecord) -> Result<String, Error> {
		let date = record.get(0).ok_or(Error::MissingDate)?;
		let at = parse_timestamp(date)?;
		let position = self.ephemeris.moon_position(at, &self.observer)?;
		log::debug!("{} -> {} km", at, position.distance_km);
		Ok(format!("{},{}\n", date, position.distance_km))
	}
}

/// Run
///
/// Read every row from `input` (trait bound `std::io::Read`), compute the lunar distance for
/// the Hilo station (or whichever observer `config` names) and write the header plus one
/// line per row to `output` (trait bound `std::io::Write`).
pub fn run<R: Read, W: Write>(
	input: &mut R,
	output: &mut W,
	config: &RunConfig,
) -> Result<Summary> {
	let transformer = Transformer::new(LowPrecisionMoon, config.observer);
	run_with(input, output, &transformer, config.buffer_capacity)
}

/// Run With
///
/// As [`run`], with a caller-supplied transformer. Stops at the first row that fails; rows
/// already buffered at that point are not written.
pub fn run_with<R: Read, W: Write, E: Ephemeris>(
	input: &mut R,
	output: &mut W,
	transformer: &Transformer<E>,
	buffer_capacity: usize,
) -> Result<Summary> {
	output.write_all(HEADER.as_bytes())?;

	let mut buffered = OutputBuffer::new(output, buffer_capacity);
	let mut rows = 0;
	for result in read_rows(input) {
		let record = result.context("Malformed CSV input")?;
		let line = transformer
			.transform(&record)
			.with_context(|| format!("Failed on input line {}", line_number(&record)))?;
		buffered.append(&line)?;
		rows += 1;
	}

	let bytes = HEADER.len() as u64 + buffered.written() + buffered.pending() as u64;
	buffered.flush_remaining()?;
	log::info!("Processed {} rows ({} bytes)", rows, bytes);
	Ok(Summary { rows, bytes })
}

/// Read Rows
///
/// Lazily split `input` into CSV records. There is no header row: the first line is data.
/// Rows may have any number of fields. Blank lines are skipped by the reader and yield no row.
pub fn read_rows<R: Read>(input: R) -> StringRecordsIntoIter<BufReader<R>> {
	csv::ReaderBuilder::new()
		.has_headers(false)
		.flexible(true)
		.from_reader(BufReader::new(input))
		.into_records()
}

fn line_number(record: &StringRecord) -> u64 {
	record.position().map_or(0, |p| p.line())
}
