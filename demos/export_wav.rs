//! Renders the same tone twice into WAV files: once directly at the audio
//! rate, and once sampled at a deliberately low rate and held between
//! samples. Play both to hear what the fold does to a 1200 Hz sine.

use aliascope::{compute_alias, SamplingParams, Shape, SignalParams};
use anyhow::Result;

const AUDIO_RATE: u32 = 44_100;
const DURATION_SECS: u32 = 2;

fn main() -> Result<()> {
    let signal = SignalParams::new(Shape::Sine, 1200.0, 0.5, 0.0);
    let sampling = SamplingParams::new(2000.0);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: AUDIO_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    // The signal as an analog listener would hear it.
    let mut writer = hound::WavWriter::create("continuous.wav", spec)?;
    for n in 0..AUDIO_RATE * DURATION_SECS {
        let t = n as f64 / AUDIO_RATE as f64;
        write_sample(&mut writer, signal.value_at(t))?;
    }
    writer.finalize()?;

    // The same signal seen through the sampler: each audio frame replays the
    // most recent sample (zero-order hold).
    let mut writer = hound::WavWriter::create("sampled.wav", spec)?;
    for n in 0..AUDIO_RATE * DURATION_SECS {
        let t = n as f64 / AUDIO_RATE as f64;
        let held = (t * sampling.sampling_frequency).floor() * sampling.period();
        write_sample(&mut writer, signal.value_at(held))?;
    }
    writer.finalize()?;

    let spectrum = compute_alias(signal.frequency, sampling.sampling_frequency)?;
    println!(
        "wrote continuous.wav ({} Hz tone) and sampled.wav (appears at {} Hz)",
        signal.frequency, spectrum.alias_frequency
    );

    Ok(())
}

fn write_sample(writer: &mut hound::WavWriter<std::io::BufWriter<std::fs::File>>, v: f64) -> Result<()> {
    let clamped = v.clamp(-1.0, 1.0);
    writer.write_sample((clamped * i16::MAX as f64) as i16)?;
    Ok(())
}
