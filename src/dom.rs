use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[init] cannot listen for {}: {:?}", event, e);
    }
    closure.forget();
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[init] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn html_element(el: web::Element) -> Option<web::HtmlElement> {
    el.dyn_into::<web::HtmlElement>().ok()
}

#[inline]
pub fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

#[inline]
pub fn find(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.query_selector(selector).ok().flatten()
}

/// Tag names from the event target up to the document element.
pub fn ancestry_tags(target: &web::EventTarget) -> Vec<String> {
    let mut tags = Vec::new();
    let mut current = match target.dyn_ref::<web::Element>() {
        Some(el) => Some(el.clone()),
        None => target
            .dyn_ref::<web::Node>()
            .and_then(|n| n.parent_element()),
    };
    while let Some(el) = current {
        tags.push(el.tag_name());
        current = el.parent_element();
    }
    tags
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn scroll_into_view(el: &web::Element, block: web::ScrollLogicalPosition) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Await a best-effort browser promise in the background; a rejection is
/// logged and dropped.
pub fn settle(label: &'static str, promise: js_sys::Promise) {
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("{} failed: {}", label, describe(&e));
        }
    });
}

/// `requestFullscreen()` through its promise so denials reach the log.
pub fn request_fullscreen(el: &web::Element) {
    let call = js_sys::Reflect::get(el, &JsValue::from_str("requestFullscreen"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .map(|f| f.call0(el));
    match call {
        Some(Ok(ret)) => {
            if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
                settle("[fullscreen] request", promise);
            }
        }
        Some(Err(e)) => log::warn!("[fullscreen] request failed: {}", describe(&e)),
        None => log::warn!("[fullscreen] not supported"),
    }
}

pub fn play(media: &web::HtmlMediaElement, label: &'static str) {
    match media.play() {
        Ok(promise) => settle(label, promise),
        Err(e) => log::warn!("{} failed: {}", label, describe(&e)),
    }
}

fn describe(e: &JsValue) -> String {
    match e.dyn_ref::<js_sys::Error>() {
        Some(err) => format!("{} ({})", String::from(err.message()), String::from(err.name())),
        None => format!("{:?}", e),
    }
}
