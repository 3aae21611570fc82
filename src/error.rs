//! Domain errors. Pipeline and CLI code wraps these in `anyhow` with context.

use thiserror::Error;

use crate::types::Observer;

#[derive(Error, Debug)]
pub enum Error {
	/// Field 0 could not be read as a date in any supported format.
	#[error("unparseable date '{0}'")]
	InvalidDate(String),

	/// The row had no fields at all.
	#[error("row has no date field")]
	MissingDate,

	#[error("invalid observer coordinates (lat {}, lon {})", .0.latitude, .0.longitude)]
	InvalidObserver(Observer),

	/// The input filename doesn't follow the `<prefix>-<id>.<ext>` convention.
	#[error("cannot derive output name from '{0}' (expected <prefix>-<id>.<ext>)")]
	OutputName(String),
}
