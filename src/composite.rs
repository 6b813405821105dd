//! A composite signal which sums any number of waveforms.

use std::fmt;

use crate::signal::Signal;
use crate::types::*;

/// A boxed waveform owned by a composite signal.
pub type BoxedSignal = Box<dyn Signal<Time, Sample>>;

/// An additive superposition of waveforms, evaluated as the sum of every member.
///
/// The composite owns its members and only ever grows. Registering members needs `&mut self`
/// while evaluating only needs `&self`, so a fully built composite can be shared between threads
/// and evaluated concurrently.
#[derive(Default)]
pub struct CompositeSignal {
    signals: Vec<BoxedSignal>,
}

impl CompositeSignal {
    /// Create a new empty composite signal, which evaluates to 0 everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already constructed waveform, taking ownership of it.
    pub fn push<S>(&mut self, signal: S)
    where
        S: Signal<Time, Sample> + 'static,
    {
        self.signals.push(Box::new(signal));
        log::debug!("Registered signal #{}", self.signals.len());
    }

    /// Construct a waveform of type `S` from its parameters and append it.
    ///
    /// ```
    /// use wavegen::{CompositeSignal, Square, SquareParams};
    ///
    /// let mut composite = CompositeSignal::new();
    /// composite.add::<Square, _>(SquareParams::default());
    /// assert_eq!(composite.evaluate(0), 1.0);
    /// ```
    pub fn add<S, P>(&mut self, params: P)
    where
        S: Signal<Time, Sample> + From<P> + 'static,
    {
        self.push(S::from(params));
    }

    /// The number of registered waveforms.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Evaluate every registered waveform at the given time and sum the results.
    pub fn evaluate(&self, time: Time) -> Sample {
        self.signals
            .iter()
            .fold(0.0, |sum, signal| sum + signal.evaluate(time))
    }
}

impl Signal<Time, Sample> for CompositeSignal {
    fn evaluate(&self, time: Time) -> Sample {
        CompositeSignal::evaluate(self, time)
    }
}

impl Extend<BoxedSignal> for CompositeSignal {
    fn extend<I: IntoIterator<Item = BoxedSignal>>(&mut self, iter: I) {
        self.signals.extend(iter);
        log::debug!("Composite signal now has {} signals", self.signals.len());
    }
}

impl FromIterator<BoxedSignal> for CompositeSignal {
    fn from_iter<I: IntoIterator<Item = BoxedSignal>>(iter: I) -> Self {
        let mut composite = Self::new();
        composite.extend(iter);
        composite
    }
}

impl fmt::Debug for CompositeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSignal")
            .field("signals", &self.signals.len())
            .finish()
    }
}
