//! Timestamp parsing for the date column.
//!
//! Tidal data is requested in GMT, so every naive date is read as UTC. Only unambiguous
//! layouts are accepted: ISO-like `YYYY-MM-DD` variants and US-style `MM/DD/YYYY`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::Error;
use crate::types::Timestamp;

static DATETIME_FORMATS: [&str; 6] = [
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%dT%H:%M",
	"%Y/%m/%d %H:%M:%S",
	"%Y/%m/%d %H:%M",
];

static US_DATETIME_FORMATS: [&str; 2] = ["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"];

static DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse Timestamp
///
/// Parse the text of a date field into a UTC instant. Surrounding whitespace is ignored;
/// RFC 3339 strings carrying an offset are converted to UTC.
pub fn parse_timestamp(text: &str) -> Result<Timestamp, Error> {
	let trimmed = text.trim();

	if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
		return Ok(dt.with_timezone(&Utc));
	}

	let naive = DATETIME_FORMATS
		.iter()
		.chain(US_DATETIME_FORMATS.iter())
		.find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
		.or_else(|| {
			DATE_FORMATS
				.iter()
				.find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
				.and_then(|date| date.and_hms_opt(0, 0, 0))
		});

	match naive {
		Some(naive) => Ok(Utc.from_utc_datetime(&naive)),
		None => Err(Error::InvalidDate(text.to_string())),
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	// 2000-01-01T00:00:00Z
	const Y2K: i64 = 946_684_800;

	#[rstest]
	#[case("2000-01-01 00:00", Y2K)]
	#[case("2000-01-01 00:06", Y2K + 360)]
	#[case("2000-01-01 00:00:30", Y2K + 30)]
	#[case("2000-01-01T12:00", Y2K + 43_200)]
	#[case("2000-01-01T12:00:00Z", Y2K + 43_200)]
	#[case("2000-01-01T05:00:00+05:00", Y2K)]
	#[case("2000-01-01", Y2K)]
	#[case("2000/01/02", Y2K + 86_400)]
	#[case("01/02/2000", Y2K + 86_400)]
	#[case("1/2/2000 06:00", Y2K + 86_400 + 21_600)]
	#[case("2000/01/02 06:00", Y2K + 86_400 + 21_600)]
	#[case("2000/01/02 06:00:30", Y2K + 86_400 + 21_630)]
	#[case("01/02/2000 06:00:30", Y2K + 86_400 + 21_630)]
	#[case("  2000-01-01 00:00 ", Y2K)]
	fn parses_supported_layouts(#[case] text: &str, #[case] expected: i64) {
		let parsed = parse_timestamp(text).map(|t| t.timestamp());
		assert_eq!(parsed.ok(), Some(expected));
	}

	#[rstest]
	#[case("Date Time")]
	#[case("")]
	#[case("2000-13-01")]
	#[case("2000-02-30 00:00")]
	#[case("yesterday")]
	fn rejects_unparseable_text(#[case] text: &str) {
		let result = parse_timestamp(text);
		assert!(matches!(result, Err(Error::InvalidDate(ref s)) if s == text));
	}
}
