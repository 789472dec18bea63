//! The interactive plot of the selected problem.
//!
//! The panel outlives problem switches. When its descriptor changes it cancels
//! the running animation, rewinds playback to the first frame of the new
//! descriptor and goes back to the first field before redrawing.

use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use log::debug;
use sigs_plot::scene::build_scene_with;
use sigs_plot::{Panel, PanelView, Playback, PlaybackTiming};

use crate::components::{ChartContainer, FieldTabs, PlayControls};
use crate::js_bridge::{self, ScrubListener};
use crate::state::AppState;
use crate::ticker::Ticker;

const CONTAINER_ID: &str = "sigs-plot-panel";

#[derive(Props, Clone, PartialEq)]
pub struct PlotPanelProps {
    pub panel: Panel,
    #[props(default)]
    pub timing: PlaybackTiming,
}

#[component]
pub fn PlotPanel(props: PlotPanelProps) -> Element {
    let state = use_context::<AppState>();
    let kind = props.panel.kind;
    let timing = props.timing;
    let descriptor = &props.panel.descriptor;
    let field_names: Vec<String> = descriptor.field_names().into_iter().map(str::to_string).collect();
    let frame_labels: Vec<String> = descriptor.frame_labels().into_iter().map(str::to_string).collect();

    let mut playback = use_signal(|| Playback::new(descriptor.frame_count()));
    let mut view = use_signal(PanelView::default);
    let mut shown = use_signal(|| props.panel.clone());
    let ticker = use_hook(Ticker::default);

    if *shown.peek() != props.panel {
        debug!("plot panel switching to a {:?} descriptor", kind);
        ticker.cancel();
        playback.write().reset(descriptor.frame_count());
        view.set(PanelView::default());
        shown.set(props.panel.clone());
    }

    // Redraw whenever the descriptor, the field or the theme changes.
    use_effect(move || {
        let theme = (state.theme)();
        let scene = build_scene_with(&shown.read(), &view(), theme, &timing);
        js_bridge::render_scene(CONTAINER_ID, &scene, playback.peek().frame());
    });

    // Slider drags from the plot move the playback position.
    use_hook(|| {
        let (listener, mut frames) = ScrubListener::install(CONTAINER_ID);
        spawn(async move {
            while let Some(frame) = frames.next().await {
                playback.write().drag_to(frame);
            }
        });
        Rc::new(listener)
    });

    use_drop({
        let ticker = ticker.clone();
        move || {
            ticker.cancel();
            js_bridge::purge_plot(CONTAINER_ID);
        }
    });

    let on_play = {
        let ticker = ticker.clone();
        move |_: ()| ticker.start(playback, CONTAINER_ID, timing)
    };
    let on_pause = {
        let ticker = ticker.clone();
        move |_: ()| {
            ticker.cancel();
            playback.write().pause();
        }
    };
    let on_field = {
        let ticker = ticker.clone();
        move |field: usize| {
            ticker.cancel();
            playback.write().select_field(field);
            view.set(PanelView::field(field));
        }
    };

    let snapshot = playback();
    let frame_label = frame_labels.get(snapshot.frame()).cloned().unwrap_or_default();
    let active_field = view().field;

    rsx! {
        div {
            class: "plot-panel",
            if kind.has_field_tabs() || kind.is_animated() {
                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; align-items: center; margin-bottom: 12px;",
                    if kind.has_field_tabs() {
                        FieldTabs {
                            names: field_names,
                            active: active_field,
                            on_select: on_field,
                        }
                    }
                    if kind.is_animated() {
                        PlayControls {
                            playing: snapshot.is_playing(),
                            frame: snapshot.frame(),
                            frame_count: snapshot.frame_count(),
                            frame_label: frame_label,
                            on_play: on_play,
                            on_pause: on_pause,
                        }
                    }
                }
            }
            ChartContainer {
                id: CONTAINER_ID.to_string(),
                height: kind.height_px(),
            }
        }
    }
}
