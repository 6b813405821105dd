//! Waveform synthesis: periodic functions of time (sine, square, triangle) and their sums.
//!
//! Time is an integer count of microseconds since an epoch chosen by the caller, and may be
//! negative. Every waveform is fixed at construction and evaluating it has no side effects.
//!
//! ```
//! use wavegen::{CompositeSignal, Square, SquareParams, Triangular, TriangularParams};
//!
//! let mut composite = CompositeSignal::new();
//! composite.add::<Triangular, _>(TriangularParams { amplitude: 25.0, ..TriangularParams::default() });
//! composite.add::<Square, _>(SquareParams { amplitude: 20.0, offset: 10.0, ..SquareParams::default() });
//! assert_eq!(composite.evaluate(500_000), 42.5);
//! ```

pub mod composite;
pub mod functions;
pub mod oscillators;
pub mod signal;
pub mod types;

pub use composite::{BoxedSignal, CompositeSignal};
pub use oscillators::{
    SineParams, SineWaveOscillator as Sine, SquareParams, SquareWaveOscillator as Square,
    TriangleWaveOscillator as Triangular, TriangularParams,
};
pub use signal::Signal;
pub use types::{Frequency, Sample, Time, MICROS_PER_SECOND};
