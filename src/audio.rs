//! Audio cues
//!
//! Procedurally generated sound effects on the Web Audio API - no asset
//! files needed. Simulation events pick the cue; the browser plays it.

use crate::sim::GameEvent;

/// High-score fanfare as (frequency Hz, start offset s, length s): a C major
/// climb from G that lands on a held top note
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const HIGH_SCORE_FANFARE: [(f32, f64, f64); 5] = [
    (392.0, 0.0, 0.09),
    (523.3, 0.1, 0.09),
    (659.3, 0.2, 0.09),
    (784.0, 0.3, 0.15),
    (1046.5, 0.5, 0.6),
];

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bomb leaves the bomber
    Throw,
    /// Bomb lands in the bucket
    Gulp,
    /// A missed bomb costs a life
    Kaboom,
    /// Extra life
    Extra,
    /// Game over on a new best score
    HighScore,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BombDropped => Some(SoundEffect::Throw),
            GameEvent::BombCaught { .. } => Some(SoundEffect::Gulp),
            GameEvent::LifeLost { .. } | GameEvent::GameOver { .. } => Some(SoundEffect::Kaboom),
            GameEvent::ExtraLife { .. } => Some(SoundEffect::Extra),
            GameEvent::NewHighScore { .. } => Some(SoundEffect::HighScore),
            GameEvent::RoundStarted { .. }
            | GameEvent::BombMissed
            | GameEvent::RoundCleared { .. } => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{HIGH_SCORE_FANFARE, SoundEffect};
    use crate::settings::Settings;
    use crate::sim::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        /// Play the cues for a frame's events
        pub fn play_events(&self, events: &[GameEvent]) {
            for effect in events.iter().filter_map(SoundEffect::for_event) {
                self.play(effect);
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Throw => self.play_throw(ctx, vol),
                SoundEffect::Gulp => self.play_gulp(ctx, vol),
                SoundEffect::Kaboom => self.play_kaboom(ctx, vol),
                SoundEffect::Extra => self.play_extra(ctx, vol),
                SoundEffect::HighScore => self.play_high_score(ctx, vol),
            }
        }

        // === Sound generators ===

        /// Throw - short whistle down
        fn play_throw(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            if let Some(osc) = voice(ctx, 900.0, OscillatorType::Square, vol * 0.08, t, 0.08) {
                sweep(&osc, 900.0, 500.0, t, 0.08);
            }
        }

        /// Gulp - low bubble up
        fn play_gulp(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            if let Some(osc) = voice(ctx, 180.0, OscillatorType::Sine, vol * 0.5, t, 0.12) {
                sweep(&osc, 180.0, 420.0, t, 0.1);
            }
        }

        /// Kaboom - sawtooth drop over a sub punch
        fn play_kaboom(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            if let Some(osc) = voice(ctx, 120.0, OscillatorType::Sawtooth, vol * 0.4, t, 0.6) {
                sweep(&osc, 120.0, 30.0, t, 0.6);
            }
            voice(ctx, 45.0, OscillatorType::Sine, vol * 0.5, t, 0.3);
        }

        /// Extra life - rising square arpeggio
        fn play_extra(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            for (i, freq) in [523.0, 659.0, 784.0, 1047.0].into_iter().enumerate() {
                voice(ctx, freq, OscillatorType::Square, vol * 0.12, t + i as f64 * 0.07, 0.12);
            }
        }

        /// High score - fanfare with a fifth underneath each note
        fn play_high_score(&self, ctx: &AudioContext, vol: f32) {
            let t = ctx.current_time();
            for &(freq, at, len) in &HIGH_SCORE_FANFARE {
                voice(ctx, freq, OscillatorType::Triangle, vol * 0.2, t + at, len);
                voice(ctx, freq * 2.0 / 3.0, OscillatorType::Sine, vol * 0.1, t + at, len);
            }
        }
    }

    /// Schedule one enveloped note: attack to `peak` at `at`, decay over
    /// `len` seconds. Returns the oscillator so callers can bend its pitch.
    fn voice(
        ctx: &AudioContext,
        freq: f32,
        wave: OscillatorType,
        peak: f32,
        at: f64,
        len: f64,
    ) -> Option<OscillatorNode> {
        let osc = ctx.create_oscillator().ok()?;
        let env: GainNode = ctx.create_gain().ok()?;
        osc.set_type(wave);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&env).ok()?;
        env.connect_with_audio_node(&ctx.destination()).ok()?;

        let gain = env.gain();
        gain.set_value_at_time(0.0, at).ok()?;
        gain.linear_ramp_to_value_at_time(peak, at + 0.005).ok()?;
        gain.exponential_ramp_to_value_at_time(0.01, at + len).ok()?;

        osc.start_with_when(at).ok()?;
        osc.stop_with_when(at + len + 0.03).ok()?;
        Some(osc)
    }

    /// Exponential pitch bend from `from` to `to` Hz
    fn sweep(osc: &OscillatorNode, from: f32, to: f32, at: f64, len: f64) {
        let freq = osc.frequency();
        freq.set_value_at_time(from, at).ok();
        freq.exponential_ramp_to_value_at_time(to, at + len).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_for_events() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::BombDropped),
            Some(SoundEffect::Throw)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::BombCaught { points: 10 }),
            Some(SoundEffect::Gulp)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::LifeLost { lives: 1 }),
            Some(SoundEffect::Kaboom)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::NewHighScore { score: 9 }),
            Some(SoundEffect::HighScore)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::BombMissed), None);
    }

    #[test]
    fn test_fanfare_climbs_and_holds_last_note() {
        let notes = HIGH_SCORE_FANFARE;
        for pair in notes.windows(2) {
            let (f0, at0, len0) = pair[0];
            let (f1, at1, _) = pair[1];
            assert!(f1 > f0);
            // Notes never overlap
            assert!(at1 >= at0 + len0);
        }
        let (_, _, last) = notes[notes.len() - 1];
        assert!(notes[..notes.len() - 1].iter().all(|&(_, _, len)| len < last));
    }
}
