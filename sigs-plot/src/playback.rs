//! Play/pause/scrub state machine for animated panels.
//!
//! The machine does not own a timer. `play()` hands out a [`TickToken`] and
//! the caller schedules periodic `tick(token)` calls with it. Any transition
//! that leaves the playing state retires outstanding tokens, so a timer that
//! fires late can never advance the state it no longer belongs to.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    Paused(usize),
    Playing(usize),
}

impl PlaybackState {
    pub fn frame(self) -> usize {
        match self {
            PlaybackState::Paused(frame) | PlaybackState::Playing(frame) => frame,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, PlaybackState::Playing(_))
    }
}

/// Proof that a ticker was started by a particular `play()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    epoch: u64,
}

/// Presentation timings for animated panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackTiming {
    /// Interval between frame advances while playing.
    pub tick_period_ms: u32,
    /// How long the renderer holds each frame.
    pub frame_duration_ms: u32,
    /// Cross-fade between frames.
    pub transition_ms: u32,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            tick_period_ms: 120,
            frame_duration_ms: 80,
            transition_ms: 50,
        }
    }
}

impl PlaybackTiming {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_period_ms))
    }
}

/// Playback position of one animated panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    state: PlaybackState,
    frame_count: usize,
    field: usize,
    epoch: u64,
}

impl Playback {
    pub fn new(frame_count: usize) -> Self {
        Self {
            state: PlaybackState::Paused(0),
            frame_count,
            field: 0,
            epoch: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn frame(&self) -> usize {
        self.state.frame()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn field(&self) -> usize {
        self.field
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Start playing from the current frame.
    ///
    /// Returns the token the caller must schedule ticks with, or `None` when
    /// no ticker should be started: already playing, or nothing to animate.
    pub fn play(&mut self) -> Option<TickToken> {
        match self.state {
            PlaybackState::Playing(_) => None,
            PlaybackState::Paused(_) if self.frame_count == 0 => {
                debug!("play ignored: no frames to animate");
                None
            }
            PlaybackState::Paused(frame) => {
                self.state = PlaybackState::Playing(frame);
                Some(TickToken { epoch: self.epoch })
            }
        }
    }

    /// Freeze at the current frame. Returns whether the state changed.
    pub fn pause(&mut self) -> bool {
        match self.state {
            PlaybackState::Playing(frame) => {
                self.state = PlaybackState::Paused(frame);
                self.retire_tokens();
                true
            }
            PlaybackState::Paused(_) => false,
        }
    }

    /// Advance one frame, wrapping to the start.
    ///
    /// Returns the new frame, or `None` if the token is stale or the panel is paused.
    pub fn tick(&mut self, token: TickToken) -> Option<usize> {
        if token.epoch != self.epoch {
            debug!("dropping stale tick (epoch {} != {})", token.epoch, self.epoch);
            return None;
        }
        match self.state {
            PlaybackState::Playing(frame) if self.frame_count > 0 => {
                let next = (frame + 1) % self.frame_count;
                self.state = PlaybackState::Playing(next);
                Some(next)
            }
            _ => None,
        }
    }

    /// Switch the visible field. Always stops playback at the first frame.
    pub fn select_field(&mut self, field: usize) {
        self.field = field;
        self.state = PlaybackState::Paused(0);
        self.retire_tokens();
    }

    /// Start over for a new descriptor.
    pub fn reset(&mut self, frame_count: usize) {
        self.frame_count = frame_count;
        self.field = 0;
        self.state = PlaybackState::Paused(0);
        self.retire_tokens();
    }

    /// Jump to a frame chosen by the user, keeping the play/pause mode.
    ///
    /// Out-of-range frames are ignored and reported as `false`.
    pub fn drag_to(&mut self, frame: usize) -> bool {
        if frame >= self.frame_count {
            debug!("ignoring scrub to frame {} of {}", frame, self.frame_count);
            return false;
        }
        self.state = match self.state {
            PlaybackState::Playing(_) => PlaybackState::Playing(frame),
            PlaybackState::Paused(_) => PlaybackState::Paused(frame),
        };
        true
    }

    fn retire_tokens(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}
