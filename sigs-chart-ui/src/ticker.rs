//! Cancellable playback timer.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use log::debug;
use sigs_plot::{Playback, PlaybackTiming};

use crate::js_bridge;

/// Handle to the running frame-advance task of one panel.
///
/// At most one task runs at a time. The handle lives outside the signal
/// graph so that it can be cancelled from drop hooks.
#[derive(Clone, Default)]
pub struct Ticker(Rc<Cell<Option<Task>>>);

impl Ticker {
    /// Stop the running task, if any.
    pub fn cancel(&self) {
        if let Some(task) = self.0.take() {
            debug!("cancelling playback ticker");
            task.cancel();
        }
    }

    /// Start playing `playback`, animating `container_id` on every tick.
    ///
    /// Does nothing if the machine refuses to play (already playing, or no frames).
    pub fn start(&self, mut playback: Signal<Playback>, container_id: &'static str, timing: PlaybackTiming) {
        let Some(token) = playback.write().play() else {
            return;
        };
        self.cancel();

        let options = js_bridge::animation_options_json(&timing);
        let period = timing.tick_period();
        let task = spawn(async move {
            loop {
                js_bridge::sleep(period).await;
                match playback.write().tick(token) {
                    Some(frame) => js_bridge::animate_frame(container_id, frame, &options),
                    None => break,
                }
            }
        });
        self.0.set(Some(task));
    }
}
