//! Sweeps a signal up through the spectrum at a fixed sampling rate and
//! prints where each frequency lands in the first Nyquist band.
//!
//! Watch the alias climb to Nyquist, mirror back down to 0 Hz, and climb
//! again: the fold is periodic in the sampling rate.

use aliascope::{compute_alias, SamplingParams};

fn main() -> Result<(), anyhow::Error> {
    let sampling = SamplingParams::new(100.0);
    println!(
        "sampling at {} Hz (Nyquist {} Hz)\n",
        sampling.sampling_frequency,
        sampling.nyquist()
    );
    println!("{:>10}  {:>10}  aliased?", "f_sig", "f_alias");

    for step in 1..=30 {
        let frequency = step as f64 * 10.0;
        let spectrum = compute_alias(frequency, sampling.sampling_frequency)?;
        println!(
            "{:>8} Hz  {:>8} Hz  {}",
            frequency,
            spectrum.alias_frequency,
            if spectrum.is_aliased { "yes" } else { "no" }
        );
    }

    Ok(())
}
