//! Pair each date of a tidal-station time series with the Earth-Moon distance at that instant.

pub mod buffer;
pub mod date;
pub mod ephemeris;
pub mod error;
pub mod paths;
pub mod process;
pub mod types;
