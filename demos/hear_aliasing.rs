//! Interactive aliasing demo: plays a tone as seen through a low-rate
//! sampler (zero-order hold) so the alias frequency is audible directly.
//!
//! Controls:
//! - Left/Right: signal frequency -/+ 50 Hz
//! - Down/Up: sampling rate -/+ 100 Hz
//! - S: cycle waveform shape
//! - Q/ESC: quit

mod common;

use aliascope::{compute_alias, SamplingParams, Shape, SignalParams};
use anyhow::Result;
use common::{run_audio_demo, DemoAudioSource, KeyAction};
use crossterm::event::KeyCode;
use crossterm::ExecutableCommand;
use std::io::{stdout, Write};
use std::sync::{Arc, Mutex};

const AUDIO_RATE: f64 = 44_100.0;

struct AliasDemo {
    signal: SignalParams,
    sampling: SamplingParams,
    clock: f64,
}

impl AliasDemo {
    fn new() -> Self {
        Self {
            signal: SignalParams::new(Shape::Sine, 1200.0, 0.2, 0.0),
            sampling: SamplingParams::new(2000.0),
            clock: 0.0,
        }
    }

    fn cycle_shape(&mut self) {
        let index = Shape::ALL
            .iter()
            .position(|&s| s == self.signal.shape)
            .unwrap_or(0);
        self.signal.shape = Shape::ALL[(index + 1) % Shape::ALL.len()];
    }
}

impl DemoAudioSource for AliasDemo {
    fn next_sample(&mut self) -> f64 {
        // Hold the most recent sampler reading for the whole audio frame.
        let held = (self.clock * self.sampling.sampling_frequency).floor() * self.sampling.period();
        let value = self.signal.value_at(held);
        self.clock += 1.0 / AUDIO_RATE;
        value
    }
}

fn draw_ui(state: &Arc<Mutex<AliasDemo>>) -> Result<()> {
    let demo = state.lock().unwrap();
    let spectrum = compute_alias(demo.signal.frequency, demo.sampling.sampling_frequency)?;

    let mut out = stdout();
    out.execute(crossterm::cursor::MoveTo(0, 0))?;
    out.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::FromCursorDown,
    ))?;
    write!(
        out,
        "Hear aliasing (q to quit)\r\n\
         \r\n\
         shape:          {} (s to cycle)\r\n\
         signal:         {} Hz (left/right)\r\n\
         sampling rate:  {} Hz (down/up), Nyquist {} Hz\r\n\
         \r\n\
         you should hear {:.1} Hz{}\r\n",
        demo.signal.shape,
        demo.signal.frequency,
        demo.sampling.sampling_frequency,
        spectrum.nyquist_frequency,
        spectrum.alias_frequency,
        if spectrum.is_aliased { " (aliased!)" } else { "" }
    )?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    run_audio_demo(AliasDemo::new(), draw_ui, |state, key_event| {
        {
            let mut demo = state.lock().unwrap();
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(KeyAction::Exit);
                }
                KeyCode::Left => {
                    demo.signal.frequency = (demo.signal.frequency - 50.0).max(50.0);
                }
                KeyCode::Right => {
                    demo.signal.frequency += 50.0;
                }
                KeyCode::Down => {
                    demo.sampling.sampling_frequency =
                        (demo.sampling.sampling_frequency - 100.0).max(100.0);
                }
                KeyCode::Up => {
                    demo.sampling.sampling_frequency += 100.0;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => demo.cycle_shape(),
                _ => return Ok(KeyAction::Continue),
            }
        }
        draw_ui(state)?;
        Ok(KeyAction::Continue)
    })
}
