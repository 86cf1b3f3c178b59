use crate::constants::{CHARACTER_ID, DEMO_CONTAINER_ID};
use crate::{dom, style};
use cardshow_core::Body;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Toy {
    body: Body,
    character: web::HtmlElement,
    container: web::Element,
    animating: bool,
}

impl Toy {
    fn bounds(&self) -> (Vec2, Vec2) {
        let rect = self.container.get_bounding_client_rect();
        (
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        )
    }

    fn place(&self) {
        dom::set_style(&self.character, "left", &style::px(self.body.position.x));
        dom::set_style(&self.character, "top", &style::px(self.body.position.y));
    }

    // one animation frame; returns whether another is needed
    fn frame(&mut self) -> bool {
        let (_, size) = self.bounds();
        let moving = self.body.step(size);
        if !self.body.is_dragging() {
            self.place();
        }
        if !moving {
            self.animating = false;
        }
        moving
    }
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn wire(document: &web::Document) {
    let character = document
        .get_element_by_id(CHARACTER_ID)
        .and_then(dom::html_element);
    let container = document.get_element_by_id(DEMO_CONTAINER_ID);
    let (Some(character), Some(container)) = (character, container) else {
        log::debug!("[physics] demo not on page");
        return;
    };

    let toy = Rc::new(RefCell::new(Toy {
        body: Body::new(),
        character: character.clone(),
        container,
        animating: false,
    }));
    toy.borrow().place();

    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_next = tick.clone();
    let toy_tick = toy.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if toy_tick.borrow_mut().frame() {
            request_frame(&tick_next);
        }
    }) as Box<dyn FnMut()>));

    let toy_down = toy.clone();
    dom::listen(&character, "mousedown", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let mut t = toy_down.borrow_mut();
        t.body.grab(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        dom::set_style(&t.character, "transition", "none");
    });

    let toy_move = toy.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let mut t = toy_move.borrow_mut();
        let (origin, size) = t.bounds();
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if t.body.drag_to(pointer, origin, size) {
            t.place();
        }
    });

    dom::listen(document, "mouseup", move |_ev: web::MouseEvent| {
        let start = {
            let mut t = toy.borrow_mut();
            if t.body.release() && !t.animating {
                t.animating = true;
                log::debug!(
                    "[physics] release v=({:.1},{:.1})",
                    t.body.velocity.x,
                    t.body.velocity.y
                );
                true
            } else {
                false
            }
        };
        if start {
            request_frame(&tick);
        }
    });
}
