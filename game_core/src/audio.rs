//! Named sound cues and the sink they are played through

use crate::resources::Events;

/// Short effects fired by simulation events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    PaddleHit,
    WallBounce,
    Score,
}

/// A square-wave beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    pub volume: f32,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::PaddleHit, SoundCue::WallBounce, SoundCue::Score];

    pub fn name(self) -> &'static str {
        match self {
            SoundCue::PaddleHit => "paddle_hit",
            SoundCue::WallBounce => "wall_bounce",
            SoundCue::Score => "score",
        }
    }

    pub fn tone(self) -> Tone {
        let (frequency_hz, duration_secs) = match self {
            SoundCue::PaddleHit => (440.0, 0.1), // A4
            SoundCue::WallBounce => (330.0, 0.1), // E4
            SoundCue::Score => (550.0, 0.3),
        };
        Tone {
            frequency_hz,
            duration_secs,
            volume: 0.3,
        }
    }
}

/// Fire-and-forget playback. Implementations must swallow their own failures.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink used when no audio device is available
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Play every cue raised this frame
pub fn play_events(events: &Events, sink: &mut dyn AudioSink) {
    for cue in events.cues() {
        sink.play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        played: Vec<SoundCue>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, cue: SoundCue) {
            self.played.push(cue);
        }
    }

    #[test]
    fn test_cue_names() {
        let names: Vec<_> = SoundCue::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["paddle_hit", "wall_bounce", "score"]);
    }

    #[test]
    fn test_score_tone_is_longest() {
        let score = SoundCue::Score.tone();
        assert!(score.duration_secs > SoundCue::PaddleHit.tone().duration_secs);
        assert!(score.duration_secs > SoundCue::WallBounce.tone().duration_secs);
    }

    #[test]
    fn test_play_events_routes_cues() {
        let mut events = Events::new();
        events.ball_hit_wall = true;
        events.ai_scored = true;

        let mut sink = RecordingSink::default();
        play_events(&events, &mut sink);
        assert_eq!(sink.played, vec![SoundCue::WallBounce, SoundCue::Score]);
    }

    #[test]
    fn test_silent_sink_accepts_everything() {
        let mut sink = SilentAudio;
        for cue in SoundCue::ALL {
            sink.play(cue);
        }
    }
}
