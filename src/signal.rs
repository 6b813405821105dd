//! A simple frp-like signals implementation.

/// A trait for "signals" which have an input and an output type, and can be evaluated for the
/// given input.
///
/// Evaluation takes `&self`: a signal is fixed once constructed, so evaluating it any number of
/// times, in any order, and from any number of threads yields the same outputs.
pub trait Signal<IN, OUT>: Send + Sync {
    /// Evaluate this signal for the given input, yielding an output.
    fn evaluate(&self, input: IN) -> OUT;
}

impl<IN, OUT, S> Signal<IN, OUT> for Box<S>
where
    S: Signal<IN, OUT> + ?Sized,
{
    fn evaluate(&self, input: IN) -> OUT {
        (**self).evaluate(input)
    }
}
