#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod presentation;
mod stage;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("cardshow-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_ev: web::Event| {
            run(&doc);
        });
    } else {
        run(&document);
    }
    Ok(())
}

fn run(document: &web::Document) {
    if let Err(e) = init(document) {
        log::error!("[init] {:?}", e);
    }
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    // effects first so a page without presentation hooks still animates
    effects::wire_all(document);
    presentation::wire(document)?;
    Ok(())
}
