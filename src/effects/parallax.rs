use crate::constants::HERO_CONTENT_SELECTOR;
use crate::{dom, style};
use cardshow_core::hero_parallax;
use web_sys as web;

pub fn wire(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(content) = document
        .query_selector(HERO_CONTENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(dom::html_element)
    else {
        log::debug!("[hero] no content, parallax disabled");
        return;
    };

    let win = window.clone();
    dom::listen(&window, "scroll", move |_ev: web::Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0) as f32;
        let viewport = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0) as f32;
        if let Some(frame) = hero_parallax(scroll_y, viewport) {
            dom::set_style(&content, "transform", &style::translate_y(frame.offset_y));
            dom::set_style(&content, "opacity", &style::opacity(frame.opacity));
        }
    });
}
