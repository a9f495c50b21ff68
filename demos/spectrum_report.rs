//! Computes one full render cycle and prints it as JSON, the way a frontend
//! collaborator would receive it. Requires the `serde` feature:
//!
//! ```text
//! cargo run --example spectrum_report --features serde
//! ```

use aliascope::{render_frame, RenderConfig, SamplingParams, SignalParams};
use anyhow::Result;

fn main() -> Result<()> {
    let signal = SignalParams::default();
    let sampling = SamplingParams::default();
    let frame = render_frame(&signal, &sampling, &RenderConfig::default())?;

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
