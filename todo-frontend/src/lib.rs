//! Todo web frontend.
//!
//! This crate compiles to WASM and runs in the browser. All non-drawing
//! logic lives in `todo-client`.

#![cfg(target_arch = "wasm32")]

mod app;

use todo_client::ClientConfig;
use wasm_bindgen::prelude::*;

pub use app::TodoApp;

/// WASM entry point, called from JavaScript once the module loads.
#[wasm_bindgen(start)]
pub fn main() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = start().await {
            log::error!("Failed to start the todo app: {e:?}");
        }
    });
}

async fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // A missing or malformed config tag falls back to the default API path.
    let config: ClientConfig = read_config(&document).unwrap_or_default();
    log::info!("Using todo API at {}", config.todo_url());

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or_else(|| JsValue::from_str("no canvas element"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let started = eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(TodoApp::new(cc, &config)))),
        )
        .await;

    // The loading text stays up until the first frame, or shows the crash.
    let loading_text = document.get_element_by_id("loading_text");
    match (started, loading_text) {
        (Ok(()), Some(text)) => text.remove(),
        (Ok(()), None) => {}
        (Err(e), text) => {
            if let Some(text) = text {
                text.set_inner_html(
                    "<p>The todo app has crashed. See the developer console for details.</p>",
                );
            }
            return Err(e);
        }
    }
    Ok(())
}

/// Read the client config from the `todo-config` JSON script tag, if present.
fn read_config(document: &web_sys::Document) -> Option<ClientConfig> {
    let script = document.get_element_by_id("todo-config")?;
    let json = script.text_content()?;
    serde_json::from_str(&json).ok()
}
