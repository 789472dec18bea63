//! Play/pause buttons and frame readout for animated panels.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PlayControlsProps {
    pub playing: bool,
    /// Zero-based frame on screen
    pub frame: usize,
    pub frame_count: usize,
    /// Label of the frame on screen, e.g. "t = 0.25"
    #[props(default)]
    pub frame_label: String,
    pub on_play: EventHandler<()>,
    pub on_pause: EventHandler<()>,
}

#[component]
pub fn PlayControls(props: PlayControlsProps) -> Element {
    let playing = props.playing;
    let position = format!("{} / {}", props.frame + 1, props.frame_count);

    rsx! {
        div {
            class: "play-controls",
            style: "display: flex; gap: 6px; align-items: center;",
            button {
                class: if playing { "tab-btn active" } else { "tab-btn" },
                style: "min-width: 80px;",
                onclick: move |_| props.on_play.call(()),
                "▶ Play"
            }
            button {
                class: if !playing { "tab-btn active" } else { "tab-btn" },
                style: "min-width: 80px;",
                onclick: move |_| props.on_pause.call(()),
                "⏸ Pause"
            }
            span {
                style: "font-size: 0.85rem; color: var(--muted, #666); margin-left: 8px;",
                "Frame {position}"
                if !props.frame_label.is_empty() {
                    " · {props.frame_label}"
                }
            }
        }
    }
}
