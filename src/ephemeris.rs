//! Lunar ephemeris.
//!
//! [`Ephemeris`] is the seam between the pipeline and whatever computes the Moon's position.
//! [`LowPrecisionMoon`] is a compact analytical model (mean elements plus the largest
//! periodic terms), good to a few hundred kilometres in distance and a fraction of a degree
//! in position. That's plenty for correlating against tide levels.

use std::f64::consts::PI;

use crate::error::Error;
use crate::types::{Kilometers, MoonPosition, Observer, Timestamp};

const RAD: f64 = PI / 180.0;
const DAY_MS: f64 = 86_400_000.0;
const J1970: f64 = 2_440_588.0;
const J2000: f64 = 2_451_545.0;

/// Obliquity of the ecliptic at J2000.
const OBLIQUITY: f64 = RAD * 23.4397;

/// Mean Earth-Moon distance and amplitude of its largest periodic term.
const MEAN_DISTANCE_KM: Kilometers = 385_001.0;
const DISTANCE_AMPLITUDE_KM: Kilometers = 20_905.0;

/// Anything able to tell where the Moon is for an observer at a given instant.
pub trait Ephemeris {
	fn moon_position(&self, at: Timestamp, observer: &Observer) -> Result<MoonPosition, Error>;
}

/// Low-precision analytical lunar model.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowPrecisionMoon;

/// Geocentric equatorial coordinates of the Moon.
struct MoonCoords {
	right_ascension: f64,
	declination: f64,
	distance_km: Kilometers,
}

impl Ephemeris for LowPrecisionMoon {
	fn moon_position(&self, at: Timestamp, observer: &Observer) -> Result<MoonPosition, Error> {
		if !observer.is_valid() {
			return Err(Error::InvalidObserver(*observer));
		}
		let lw = RAD * -observer.longitude;
		let phi = RAD * observer.latitude;
		let d = days_since_j2000(at);

		let c = moon_coords(d);
		let h = sidereal_time(d, lw) - c.right_ascension;
		let altitude = altitude(h, phi, c.declination);
		let parallactic_angle = h.sin().atan2(
			phi.tan() * c.declination.cos() - c.declination.sin() * h.cos(),
		);

		Ok(MoonPosition {
			distance_km: c.distance_km,
			altitude: altitude + refraction(altitude),
			azimuth: azimuth(h, phi, c.declination),
			parallactic_angle,
		})
	}
}

fn days_since_j2000(at: Timestamp) -> f64 {
	at.timestamp_millis() as f64 / DAY_MS - 0.5 + J1970 - J2000
}

fn moon_coords(d: f64) -> MoonCoords {
	let mean_longitude = RAD * (218.316 + 13.176396 * d);
	let mean_anomaly = RAD * (134.963 + 13.064993 * d);
	let mean_distance = RAD * (93.272 + 13.229350 * d);

	let l = mean_longitude + RAD * 6.289 * mean_anomaly.sin();
	let b = RAD * 5.128 * mean_distance.sin();

	MoonCoords {
		right_ascension: right_ascension(l, b),
		declination: declination(l, b),
		distance_km: MEAN_DISTANCE_KM - DISTANCE_AMPLITUDE_KM * mean_anomaly.cos(),
	}
}

fn right_ascension(l: f64, b: f64) -> f64 {
	(l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

fn declination(l: f64, b: f64) -> f64 {
	(b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

fn sidereal_time(d: f64, lw: f64) -> f64 {
	RAD * (280.16 + 360.9856235 * d) - lw
}

fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
	h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
	(phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Atmospheric refraction correction for a true altitude `h` (radians).
fn refraction(h: f64) -> f64 {
	// Formula goes haywire below the horizon
	let h = h.max(0.0);
	0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}
