//! Noise estimate of a synthetic seasonal signal with a known amount of
//! Gaussian noise, compared across smoothing settings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use station_noise::{estimate_noise, SmoothingMethod};
use std::error::Error;
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let days = 10 * 365;
    let noise_std = 2.0;
    let normal = Normal::new(0.0, noise_std)?;
    let mut rng = StdRng::seed_from_u64(42);

    // Seasonal temperature-like curve: mean 11, amplitude 9.
    let values: Vec<f64> = (0..days)
        .map(|day| 11.0 + 9.0 * (2.0 * PI * day as f64 / 365.25).sin() + normal.sample(&mut rng))
        .collect();

    let injected = noise_std * noise_std / (81.0 / 2.0 + noise_std * noise_std);
    println!("Injected noise share: {:.2}%", injected * 100.0);

    for (method, window) in [
        (SmoothingMethod::LocalPolynomial, 11),
        (SmoothingMethod::LocalPolynomial, 31),
        (SmoothingMethod::MovingAverage, 11),
        (SmoothingMethod::MovingAverage, 31),
    ] {
        let estimate = estimate_noise(&values).method(method).window(window).call();
        println!("{:>16} window {:>2}: {}", method.to_string(), window, estimate);
    }
    Ok(())
}
