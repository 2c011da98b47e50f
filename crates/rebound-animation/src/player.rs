//! Per-object playback slots and curve advancement

use crate::clip::BounceCurve;
use crate::sampler::sample_curve;
use rebound_core::ObjectId;
use std::collections::HashMap;

/// Playback state for one running curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current playback position in (fractional) curve frames
    pub frame_time: f64,
    /// Playback speed multiplier (1.0 = normal, negative = reverse)
    pub speed: f64,
    /// Whether the curve loops
    pub looping: bool,
    /// Whether the curve is currently playing
    pub playing: bool,
}

impl PlaybackState {
    pub fn new(speed: f64, looping: bool, playing: bool) -> Self {
        Self {
            frame_time: 0.0,
            speed,
            looping,
            playing,
        }
    }
}

/// Advance a playback state by `dt` seconds and return the sampled height.
///
/// Frame time advances at the curve's `sample_rate`, so a full curve takes
/// `total_frames / sample_rate` seconds.
pub fn advance(state: &mut PlaybackState, curve: &BounceCurve, dt: f64) -> f64 {
    if !state.playing {
        // Still sample at current time so a stopped curve holds its pose
        return sample_curve(curve, state.frame_time);
    }

    state.frame_time += dt * curve.sample_rate as f64 * state.speed;

    let end = curve.total_frames as f64;
    if state.looping {
        if end > 0.0 {
            if state.frame_time >= end {
                state.frame_time %= end;
            } else if state.frame_time < 0.0 {
                state.frame_time = end - (-state.frame_time % end);
            }
        }
    } else if state.frame_time >= end {
        state.frame_time = end;
        state.playing = false;
    } else if state.frame_time < 0.0 {
        state.frame_time = 0.0;
        state.playing = false;
    }

    sample_curve(curve, state.frame_time)
}

/// A curve installed in an object's animation slot.
#[derive(Debug, Clone)]
pub struct ActiveAnimation {
    pub curve: BounceCurve,
    pub state: PlaybackState,
}

/// Animation slots keyed by object - at most one curve per object.
pub struct AnimationPlayer {
    slots: HashMap<ObjectId, ActiveAnimation>,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Install `curve` for `object` and start it, replacing whatever was there.
    ///
    /// Returns the curve that was displaced, if any.
    pub fn start(&mut self, object: ObjectId, curve: BounceCurve) -> Option<BounceCurve> {
        let state = PlaybackState::new(1.0, curve.looping, true);
        self.slots
            .insert(object, ActiveAnimation { curve, state })
            .map(|previous| previous.curve)
    }

    /// Cancel the object's animation and free its slot.
    pub fn stop(&mut self, object: ObjectId) -> Option<ActiveAnimation> {
        self.slots.remove(&object)
    }

    /// Look up the animation occupying an object's slot.
    pub fn get(&self, object: ObjectId) -> Option<&ActiveAnimation> {
        self.slots.get(&object)
    }

    /// True while the object's curve is still advancing.
    pub fn is_playing(&self, object: ObjectId) -> bool {
        self.slots
            .get(&object)
            .map(|active| active.state.playing)
            .unwrap_or(false)
    }

    /// Number of occupied slots (finished curves included).
    pub fn active_count(&self) -> usize {
        self.slots.len()
    }

    /// Advance every slot by `dt` seconds, returning the sampled height per object.
    pub fn advance_all(&mut self, dt: f64) -> Vec<(ObjectId, f64)> {
        let mut samples: Vec<(ObjectId, f64)> = self
            .slots
            .iter_mut()
            .map(|(id, active)| (*id, advance(&mut active.state, &active.curve, dt)))
            .collect();
        samples.sort_by_key(|(id, _)| *id);
        samples
    }
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}
