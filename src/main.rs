//! Program entrypoint and argument parsing.

use std::env;
use std::fs::{self, File};

use anyhow::{anyhow, Context, Result};

use lunar_distance::paths::output_path;
use lunar_distance::process;
use lunar_distance::types::RunConfig;

static USAGE: &str = "Usage: lunar-distance <tidal_data-XXX.csv>";

/// Parse Arg
///
/// Accept exactly one positional argument (the input CSV path), returning the usage message as
/// an error otherwise. A single path needs no argument parser.
fn parse_arg<I: Iterator<Item = String>>(mut args: I) -> Result<String> {
	let _program = args.next();
	match (args.next(), args.next()) {
		(Some(path), None) => Ok(path),
		_ => Err(anyhow!(USAGE)),
	}
}

fn main() -> Result<()> {
	env_logger::init();
	let filepath = parse_arg(env::args())?;
	let out_path = output_path(&filepath)?;

	let mut input =
		File::open(&filepath).with_context(|| format!("Cannot open input '{}'", filepath))?;
	let mut output = File::create(&out_path)
		.with_context(|| format!("Cannot create output '{}'", out_path.display()))?;
	log::debug!("Writing {} -> {}", filepath, out_path.display());

	match process::run(&mut input, &mut output, &RunConfig::default()) {
		Ok(summary) => {
			println!("{}", summary.bytes);
			println!("#### Done ####");
			Ok(())
		}
		Err(e) => {
			// Don't leave a truncated result behind
			drop(output);
			if let Err(rm) = fs::remove_file(&out_path) {
				log::warn!("Could not remove '{}': {}", out_path.display(), rm);
			}
			Err(e)
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	fn args(list: &[&str]) -> impl Iterator<Item = String> {
		list.iter()
			.map(|s| s.to_string())
			.collect::<Vec<_>>()
			.into_iter()
	}

	#[test]
	fn accepts_single_argument() {
		let parsed = parse_arg(args(&["lunar-distance", "tidal_data-001.csv"]));
		assert_eq!(parsed.unwrap(), "tidal_data-001.csv");
	}

	#[rstest]
	#[case(&[])]
	#[case(&["lunar-distance"])]
	#[case(&["lunar-distance", "a-1.csv", "b-2.csv"])]
	fn rejects_wrong_argument_count(#[case] list: &[&str]) {
		let err = parse_arg(args(list)).unwrap_err();
		assert_eq!(err.to_string(), USAGE);
	}
}
