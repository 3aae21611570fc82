//! Output file naming.

use std::path::{Path, PathBuf};

use crate::error::Error;

static OUTPUT_PREFIX: &str = "lunar_distance-";

/// Output Path
///
/// Derive the output file name from the input path: take the input's filename, the second
/// `-`-separated token of it, cut at the first `.`, and produce `lunar_distance-<token>.csv`
/// relative to the current directory. So `data/tidal_data-042.csv` becomes
/// `lunar_distance-042.csv` and `foo-bar-12.csv` becomes `lunar_distance-bar.csv`.
pub fn output_path<P: AsRef<Path>>(input: P) -> Result<PathBuf, Error> {
	let input = input.as_ref();
	let name = input
		.file_name()
		.and_then(|n| n.to_str())
		.ok_or_else(|| Error::OutputName(input.display().to_string()))?;

	match name.split('-').nth(1).and_then(|t| t.split('.').next()) {
		Some(token) if !token.is_empty() => {
			Ok(PathBuf::from(format!("{}{}.csv", OUTPUT_PREFIX, token)))
		}
		_ => Err(Error::OutputName(input.display().to_string())),
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[rstest]
	#[case("tidal_data-042.csv", "lunar_distance-042.csv")]
	#[case("tidal_data-007.csv", "lunar_distance-007.csv")]
	#[case("foo-bar-12.csv", "lunar_distance-bar.csv")]
	#[case("data/tidal_data-2016.tar.gz", "lunar_distance-2016.csv")]
	#[case("my-data/tidal_data-9.csv", "lunar_distance-9.csv")]
	#[case("tidal_data-x", "lunar_distance-x.csv")]
	fn derives_token_from_second_segment(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(output_path(input).ok(), Some(PathBuf::from(expected)));
	}

	#[rstest]
	#[case("tidal_data.csv")]
	#[case("tidal_data-.csv")]
	#[case("some/dir/")]
	#[case("")]
	fn rejects_names_without_token(#[case] input: &str) {
		assert!(matches!(output_path(input), Err(Error::OutputName(_))));
	}
}
