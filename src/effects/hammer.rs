use crate::constants::{HAMMER_ID, HERO_SELECTOR};
use crate::{dom, style};
use cardshow_core::hammer_tilt;
use glam::Vec2;
use web_sys as web;

pub fn wire(document: &web::Document) {
    let hammer = document.get_element_by_id(HAMMER_ID).and_then(dom::html_element);
    let hero = document.query_selector(HERO_SELECTOR).ok().flatten();
    let (Some(hammer), Some(hero)) = (hammer, hero) else {
        log::debug!("[hero] no hammer, follow disabled");
        return;
    };

    let hero_rect_src = hero.clone();
    dom::listen(&hero, "mousemove", move |ev: web::MouseEvent| {
        let rect = hero_rect_src.get_bounding_client_rect();
        let pointer = Vec2::new(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
        );
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        let tilt = hammer_tilt(pointer, size);
        dom::set_style(
            &hammer,
            "transform",
            &style::translate_rotate(tilt.translate.x, tilt.translate.y, tilt.rotate_deg),
        );
    });
}
