//! Page effects that run independently of presentation mode.

mod anchors;
mod hammer;
mod parallax;
mod physics;
mod reveal;

use web_sys as web;

pub fn wire_all(document: &web::Document) {
    hammer::wire(document);
    reveal::wire(document);
    physics::wire(document);
    anchors::wire(document);
    parallax::wire(document);
}
