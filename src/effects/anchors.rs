use crate::constants::ANCHOR_SELECTOR;
use crate::dom;
use cardshow_core::anchor_target;
use web_sys as web;

pub fn wire(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            match doc.query_selector(selector) {
                Ok(Some(target)) => {
                    dom::scroll_into_view(&target, web::ScrollLogicalPosition::Start)
                }
                Ok(None) => log::debug!("[anchor] no target for {}", selector),
                Err(_) => log::debug!("[anchor] unusable selector {}", selector),
            }
        });
    }
}
