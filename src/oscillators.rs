//! Basic oscillators that can output simple shapes like sine, square and triangle waves.
//!
//! Each shape is built from its own parameter record and is fixed from then on: evaluating it is
//! a pure function of the time.

use crate::functions::{angular_rate, period_micros, position_in_period};
use crate::signal::Signal;
use crate::types::*;

/// Parameters of a sine wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineParams {
    /// Peak deviation from the offset.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: Frequency,
    /// Constant added to every sample.
    pub offset: f64,
    /// Phase shift in radians.
    pub phase: f64,
}

impl Default for SineParams {
    /// A unit sine wave at 1 Hz, centered on zero.
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            offset: 0.0,
            phase: 0.0,
        }
    }
}

/// A sine wave oscillator that can be sampled at a given time.
#[derive(Clone, Copy, Debug)]
pub struct SineWaveOscillator {
    params: SineParams,
    angular_rate: f64,
}

impl SineWaveOscillator {
    /// Create a new sine wave oscillator with the given parameters.
    pub fn new(params: SineParams) -> Self {
        log::debug!("Creating sine wave oscillator: {params:?}");
        Self {
            params,
            angular_rate: angular_rate(params.frequency),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.params.amplitude
    }

    pub fn frequency(&self) -> Frequency {
        self.params.frequency
    }

    pub fn offset(&self) -> f64 {
        self.params.offset
    }

    /// The phase shift in radians. It is applied as is, not scaled by the frequency.
    pub fn phase(&self) -> f64 {
        self.params.phase
    }
}

impl From<SineParams> for SineWaveOscillator {
    fn from(params: SineParams) -> Self {
        Self::new(params)
    }
}

impl Signal<Time, Sample> for SineWaveOscillator {
    fn evaluate(&self, time: Time) -> Sample {
        let SineParams { amplitude, offset, phase, .. } = self.params;
        amplitude * f64::sin(self.angular_rate * time as f64 + phase) + offset
    }
}

/// Parameters of a square wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareParams {
    /// Distance of the high and low levels from the offset.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: Frequency,
    /// Level halfway between high and low.
    pub offset: f64,
    /// Percentage (0-100) of each period spent at the high level.
    pub duty: f64,
}

impl Default for SquareParams {
    /// A unit square wave at 1 Hz with a 50% duty cycle.
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            offset: 0.0,
            duty: 50.0,
        }
    }
}

/// A square wave oscillator which starts every period at its high level.
#[derive(Clone, Copy, Debug)]
pub struct SquareWaveOscillator {
    params: SquareParams,
    period: f64,
    high_time: f64,
    high: Sample,
    low: Sample,
}

impl SquareWaveOscillator {
    /// Create a new square wave oscillator with the given parameters.
    pub fn new(params: SquareParams) -> Self {
        log::debug!("Creating square wave oscillator: {params:?}");
        let period = period_micros(params.frequency);
        Self {
            params,
            period,
            high_time: period * params.duty / 100.0,
            high: params.offset + params.amplitude,
            low: params.offset - params.amplitude,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.params.amplitude
    }

    pub fn frequency(&self) -> Frequency {
        self.params.frequency
    }

    pub fn offset(&self) -> f64 {
        self.params.offset
    }

    pub fn duty(&self) -> f64 {
        self.params.duty
    }

    /// The length of one period in microseconds.
    pub fn period(&self) -> f64 {
        self.period
    }
}

impl From<SquareParams> for SquareWaveOscillator {
    fn from(params: SquareParams) -> Self {
        Self::new(params)
    }
}

impl Signal<Time, Sample> for SquareWaveOscillator {
    fn evaluate(&self, time: Time) -> Sample {
        // The boundary between high and low belongs to the high part.
        if position_in_period(time, self.period) <= self.high_time {
            self.high
        }
        else {
            self.low
        }
    }
}

/// Parameters of a triangle wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularParams {
    /// Distance between the lowest and highest point of the wave.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: Frequency,
    /// Level halfway between the lowest and highest point.
    pub offset: f64,
    /// Percentage (0-100) of each period spent rising.
    pub rise_time: f64,
}

impl Default for TriangularParams {
    /// A symmetric triangle wave at 1 Hz spanning -0.5 to 0.5.
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            offset: 0.0,
            rise_time: 50.0,
        }
    }
}

/// A triangle wave oscillator which rises from its lowest point at the start of every period,
/// peaks after the rise time and falls back for the rest of the period.
#[derive(Clone, Copy, Debug)]
pub struct TriangleWaveOscillator {
    params: TriangularParams,
    period: f64,
    rise_time: f64,
    fall_time: f64,
    low: Sample,
}

impl TriangleWaveOscillator {
    /// Create a new triangle wave oscillator with the given parameters.
    pub fn new(params: TriangularParams) -> Self {
        log::debug!("Creating triangle wave oscillator: {params:?}");
        let period = period_micros(params.frequency);
        let rise_time = period * params.rise_time / 100.0;
        Self {
            params,
            period,
            rise_time,
            fall_time: period - rise_time,
            low: params.offset - params.amplitude / 2.0,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.params.amplitude
    }

    pub fn frequency(&self) -> Frequency {
        self.params.frequency
    }

    pub fn offset(&self) -> f64 {
        self.params.offset
    }

    /// The percentage of each period spent rising.
    pub fn rise_time(&self) -> f64 {
        self.params.rise_time
    }

    /// The length of one period in microseconds.
    pub fn period(&self) -> f64 {
        self.period
    }
}

impl From<TriangularParams> for TriangleWaveOscillator {
    fn from(params: TriangularParams) -> Self {
        Self::new(params)
    }
}

impl Signal<Time, Sample> for TriangleWaveOscillator {
    fn evaluate(&self, time: Time) -> Sample {
        let amplitude = self.params.amplitude;
        let position = position_in_period(time, self.period);

        // The peak itself is the last point of the rise.
        if position <= self.rise_time {
            return self.low + position / self.rise_time * amplitude;
        }

        let time_falling = self.fall_time - (position - self.rise_time);
        self.low + time_falling / self.fall_time * amplitude
    }
}
