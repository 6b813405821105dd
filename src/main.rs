use std::error::Error;

use wavegen::{CompositeSignal, Square, SquareParams, Time, Triangular, TriangularParams};

/// The time sampled when none is given on the command line: half a second after the epoch.
const DEFAULT_TIME: Time = 500_000;

/// Sample a triangle plus square wave at the time (in microseconds) given as the first argument.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialise logging.
    env_logger::init();

    let time = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Time>()?,
        None => DEFAULT_TIME,
    };

    // Create the signal.
    let mut composite = CompositeSignal::new();
    composite.add::<Triangular, _>(TriangularParams {
        amplitude: 25.0,
        frequency: 1.0,
        offset: 0.0,
        rise_time: 50.0,
    });
    composite.add::<Square, _>(SquareParams {
        amplitude: 20.0,
        frequency: 1.0,
        offset: 10.0,
        duty: 50.0,
    });

    log::info!("Evaluating {} signals at time {time}us", composite.len());
    println!("{:.6}", composite.evaluate(time));

    Ok(())
}
