//! Browser entry point.

use todo_core::PageConfig;
use todo_core::page::CONFIG_SCRIPT_ID;
use wasm_bindgen::prelude::*;

use crate::TodoGui;

/// WASM entry point - called by the generated JS glue.
#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("No document; the todo app cannot start");
            return;
        };

        let config: PageConfig = read_page_config(&document).unwrap_or_default();

        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas `the_canvas_id` not found");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(TodoGui::new(&cc.egui_ctx, config)))),
            )
            .await;

        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(()) => loading_text.remove(),
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Read the page config the server injected into the DOM.
fn read_page_config(document: &web_sys::Document) -> Option<PageConfig> {
    let script = document.get_element_by_id(CONFIG_SCRIPT_ID)?;
    let json = script.text_content()?;
    serde_json::from_str(&json)
        .inspect_err(|e| log::warn!("Ignoring malformed page config: {e}"))
        .ok()
}
