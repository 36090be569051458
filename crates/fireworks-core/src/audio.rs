use crate::constants::*;

/// Envelope of the percussive sawtooth burst tone.
///
/// Frequency and gain both ramp exponentially from their start to their end
/// value over `duration_sec`; the oscillator stops at the end of the ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneProfile {
    pub start_frequency_hz: f32,
    pub end_frequency_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f64,
}

impl Default for ToneProfile {
    fn default() -> Self {
        Self {
            start_frequency_hz: TONE_START_HZ,
            end_frequency_hz: TONE_END_HZ,
            start_gain: TONE_START_GAIN,
            end_gain: TONE_END_GAIN,
            duration_sec: TONE_DURATION_SEC,
        }
    }
}

/// Fire-and-forget sound played on every burst.
///
/// Implementations must return immediately and swallow their own failures.
pub trait AudioCue {
    fn play_explosion(&mut self);
}

/// Cue that never makes a sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct MutedCue;

impl AudioCue for MutedCue {
    fn play_explosion(&mut self) {}
}
