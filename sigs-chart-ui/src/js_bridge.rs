//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Plotly glue lives in `assets/js/plot-panel.js`. It is evaluated at
//! global scope once Plotly has loaded and exposed via `window.*`. This module
//! serializes scenes and calls those globals. Scrub events travel the other
//! way through a `wasm_bindgen` closure parked on `window`.
//!
//! Off wasm the plot calls and the scrub listener do nothing, so components
//! can be rendered in a headless `VirtualDom`.

use std::time::Duration;

use futures_channel::mpsc::{self, UnboundedReceiver};
use log::{debug, warn};
use sigs_plot::scene::AnimationOptions;
use sigs_plot::{PlaybackTiming, Scene, ThemeMode};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

static PLOT_PANEL_JS: &str = include_str!("../assets/js/plot-panel.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SIGS JS call failed:', e); }}",
        code
    );
    #[cfg(target_arch = "wasm32")]
    let _ = js_sys::eval(&wrapped);
    #[cfg(not(target_arch = "wasm32"))]
    debug!("skipping JS call outside the browser ({} bytes)", wrapped.len());
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the panel glue with a wait-for-Plotly polling loop.
///
/// The script is stored on `window` and evaluated with an indirect eval so
/// that its function declarations land at global scope.
pub fn init_charts() {
    let store_js = format!("window.__sigsPlotScripts = {};", js_string(PLOT_PANEL_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__sigsPlotScripts);
                    delete window.__sigsPlotScripts;
                    if (typeof renderPlotScene !== 'undefined') window.renderPlotScene = renderPlotScene;
                    if (typeof animatePlotFrame !== 'undefined') window.animatePlotFrame = animatePlotFrame;
                    if (typeof purgePlot !== 'undefined') window.purgePlot = purgePlot;
                    window.__sigsPlotReady = true;
                    console.log('SIGS plot panel initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw `scene` into the element `container_id`, replacing whatever was there.
///
/// Polls until Plotly, the glue script and the container DOM element exist.
/// Once drawn, the plot jumps to `frame` if it is past the first one.
pub fn render_scene(container_id: &str, scene: &Scene, frame: usize) {
    let scene_json = match scene.to_json() {
        Ok(json) => json,
        Err(e) => {
            warn!("failed to serialize scene for {}: {}", container_id, e);
            return;
        }
    };
    debug!(
        "rendering scene into {} ({} traces, {} frames)",
        container_id,
        scene.data.len(),
        scene.frame_count()
    );
    let id = js_string(container_id);
    let scene_json = js_string(&scene_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sigsPlotReady &&
                    typeof window.renderPlotScene !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderPlotScene({id}, {scene_json}, {frame});
                    }} catch(e) {{ console.error('[SIGS] renderPlotScene error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Serialized animation options for frame changes at `timing`.
pub fn animation_options_json(timing: &PlaybackTiming) -> String {
    serde_json::to_string(&AnimationOptions::from_timing(timing)).unwrap_or_default()
}

/// Move the plot in `container_id` to `frame`. A no-op before the plot is drawn.
pub fn animate_frame(container_id: &str, frame: usize, options_json: &str) {
    call_js(&format!(
        "if (window.animatePlotFrame) window.animatePlotFrame({}, {}, {});",
        js_string(container_id),
        frame,
        js_string(options_json)
    ));
}

/// Release the plot in `container_id`.
pub fn purge_plot(container_id: &str) {
    call_js(&format!(
        "if (window.purgePlot) window.purgePlot({});",
        js_string(container_id)
    ));
}

/// Set `data-theme` on the document root so page CSS can follow the chart theme.
pub fn set_document_theme(mode: ThemeMode) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", mode.as_str()) {
                warn!("failed to set data-theme: {:?}", e);
            }
        }
        None => warn!("no document element to theme"),
    }
}

/// Resolve after `duration` using `setTimeout`.
pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

fn scrub_key(container_id: &str) -> String {
    format!("__sigsScrub_{}", container_id)
}

/// Receives slider drags for one plot container.
///
/// The glue script calls `window.__sigsScrub_<id>(frame)` on every slider
/// change; the frame index is forwarded to the paired receiver. Dropping the
/// listener unregisters the callback.
pub struct ScrubListener {
    key: String,
    #[cfg(target_arch = "wasm32")]
    _callback: Closure<dyn FnMut(u32)>,
    #[cfg(not(target_arch = "wasm32"))]
    _sender: mpsc::UnboundedSender<usize>,
}

impl ScrubListener {
    #[cfg(target_arch = "wasm32")]
    pub fn install(container_id: &str) -> (Self, UnboundedReceiver<usize>) {
        let (tx, rx) = mpsc::unbounded();
        let callback = Closure::<dyn FnMut(u32)>::new(move |frame: u32| {
            let _ = tx.unbounded_send(frame as usize);
        });

        let key = scrub_key(container_id);
        if let Some(window) = web_sys::window() {
            let target: &JsValue = window.unchecked_ref();
            if js_sys::Reflect::set(target, &JsValue::from_str(&key), callback.as_ref()).is_err() {
                warn!("failed to register scrub callback {}", key);
            }
        }

        (
            Self {
                key,
                _callback: callback,
            },
            rx,
        )
    }

    /// Without a browser nothing ever scrubs; the receiver stays open until drop.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn install(container_id: &str) -> (Self, UnboundedReceiver<usize>) {
        let (tx, rx) = mpsc::unbounded();
        (
            Self {
                key: scrub_key(container_id),
                _sender: tx,
            },
            rx,
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrubListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(window.unchecked_ref(), &JsValue::from_str(&self.key));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Drop for ScrubListener {
    fn drop(&mut self) {
        debug!("released scrub listener {}", self.key);
    }
}
