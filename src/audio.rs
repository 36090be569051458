use fireworks_core::{AudioCue, ToneProfile};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Burst tone played through WebAudio.
///
/// Browsers only allow an `AudioContext` to make sound after a user gesture,
/// so the context is created by `unlock`, which the start trigger calls.
/// Until then every cue is silently dropped.
pub struct WebAudioCue {
    ctx: Option<web::AudioContext>,
    profile: ToneProfile,
}

impl WebAudioCue {
    pub fn new(profile: ToneProfile) -> Self {
        Self { ctx: None, profile }
    }

    /// Create the audio context on first call, and resume it if the browser
    /// left it suspended.
    pub fn unlock(&mut self) {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    log::info!("[audio] context created");
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    log::warn!("[audio] AudioContext unavailable: {:?}", e);
                    return;
                }
            }
        }
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
    }
}

impl AudioCue for WebAudioCue {
    fn play_explosion(&mut self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if let Err(e) = schedule_tone(ctx, &self.profile) {
            log::debug!("[audio] explosion tone dropped: {:?}", e);
        }
    }
}

// One-shot oscillator -> gain -> destination with exponential pitch and level
// ramps; the nodes are released by the browser once the oscillator stops.
fn schedule_tone(ctx: &web::AudioContext, profile: &ToneProfile) -> Result<(), JsValue> {
    let osc = web::OscillatorNode::new(ctx)?;
    let gain = web::GainNode::new(ctx)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    osc.set_type(web::OscillatorType::Sawtooth);
    let t0 = ctx.current_time();
    let t1 = t0 + profile.duration_sec;
    osc.frequency()
        .set_value_at_time(profile.start_frequency_hz, t0)?;
    osc.frequency()
        .exponential_ramp_to_value_at_time(profile.end_frequency_hz, t1)?;
    gain.gain().set_value_at_time(profile.start_gain, t0)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(profile.end_gain, t1)?;

    osc.start()?;
    osc.stop_with_when(t1)?;
    Ok(())
}
