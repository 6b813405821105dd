//! Shared type definitions.

/// A type representing a point in time, in microseconds since an arbitrary epoch.
pub type Time = i64;

/// A type representing a frequency in Hz.
pub type Frequency = f64;

/// A type representing the output of a waveform.
pub type Sample = f64;

/// The number of microseconds in one second, the unit conversion between `Time` and `Frequency`.
pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
