//! Global type definitions.

use chrono::{DateTime, Utc};

pub type Kilometers = f64;
pub type Timestamp = DateTime<Utc>;

/// Output buffer flush threshold, in bytes.
pub const BUFFER_SIZE: usize = 4096;

/// Geographic location the lunar position is computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
	/// Degrees, north positive.
	pub latitude: f64,
	/// Degrees, east positive.
	pub longitude: f64,
}

/// Result of an ephemeris lookup. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
	pub distance_km: Kilometers,
	pub altitude: f64,
	pub azimuth: f64,
	pub parallactic_angle: f64,
}

/// Everything `process::run` needs besides its streams.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
	pub observer: Observer,
	pub buffer_capacity: usize,
}

impl Observer {
	/// The Hilo tide station (NOAA 1617760).
	pub const HILO: Observer = Observer {
		latitude: 19.718888888888888,
		longitude: -155.05083333333334,
	};

	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}

	pub fn is_valid(&self) -> bool {
		self.latitude.is_finite()
			&& self.longitude.is_finite()
			&& self.latitude.abs() <= 90.0
			&& self.longitude.abs() <= 180.0
	}
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			observer: Observer::HILO,
			buffer_capacity: BUFFER_SIZE,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use rstest::*;

	#[rstest]
	#[case(Observer::HILO, true)]
	#[case(Observer::new(90.0, -180.0), true)]
	#[case(Observer::new(90.5, 0.0), false)]
	#[case(Observer::new(0.0, 181.0), false)]
	#[case(Observer::new(f64::NAN, 0.0), false)]
	#[case(Observer::new(0.0, f64::INFINITY), false)]
	fn observer_validity(#[case] observer: Observer, #[case] expected: bool) {
		assert_eq!(observer.is_valid(), expected);
	}

	#[test]
	fn default_config_uses_hilo() {
		let config = RunConfig::default();
		assert_eq!(config.observer, Observer::HILO);
		assert_eq!(config.buffer_capacity, 4096);
	}
}
