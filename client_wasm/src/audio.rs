//! Web Audio playback of the game's sound cues

use game_core::{AudioSink, SoundCue, Tone};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::error::ClientError;

pub struct WebAudio {
    ctx: AudioContext,
}

impl WebAudio {
    pub fn new() -> Result<Self, ClientError> {
        let ctx = AudioContext::new().map_err(ClientError::audio)?;
        Ok(Self { ctx })
    }

    /// Browsers keep the context suspended until a user gesture
    pub fn resume(&self) {
        let _ = self.ctx.resume();
    }

    fn play_tone(&self, tone: Tone) -> Result<(), JsValue> {
        let osc = self.ctx.create_oscillator()?;
        osc.set_type(OscillatorType::Square);
        osc.frequency().set_value(tone.frequency_hz);

        let gain = self.ctx.create_gain()?;
        gain.gain().set_value(tone.volume);

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;

        let now = self.ctx.current_time();
        osc.start_with_when(now)?;
        osc.stop_with_when(now + tone.duration_secs as f64)?;
        Ok(())
    }
}

impl AudioSink for WebAudio {
    fn play(&mut self, cue: SoundCue) {
        if let Err(err) = self.play_tone(cue.tone()) {
            log::debug!("Failed to play {}: {:?}", cue.name(), err);
        }
    }
}
