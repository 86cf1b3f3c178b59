use crate::dom;
use crate::stage::DomStage;
use cardshow_core::{click_advances, Advance, Sequencer};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Sequencer plus the page it drives, shared by the two click listeners.
pub struct Presenter {
    pub sequencer: Sequencer,
    pub stage: DomStage,
}

impl Presenter {
    pub fn enter(&mut self) {
        if let Err(e) = self.sequencer.enter(&mut self.stage) {
            log::debug!("[present] enter ignored: {}", e);
        }
    }

    pub fn on_page_click(&mut self, ev: &web::MouseEvent) {
        let tags = ev
            .target()
            .map(|t| dom::ancestry_tags(&t))
            .unwrap_or_default();
        if !click_advances(self.sequencer.is_presenting(), &tags) {
            return;
        }
        if let Advance::Finished = self.sequencer.advance(&mut self.stage) {
            log::info!("[present] finished");
        }
    }
}

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let (stage, steps) = DomStage::discover(document)?;
    let start_control = stage.start_control().clone();
    let presenter = Rc::new(RefCell::new(Presenter {
        sequencer: Sequencer::new(steps),
        stage,
    }));

    let p = presenter.clone();
    dom::listen(&start_control, "click", move |_ev: web::MouseEvent| {
        p.borrow_mut().enter();
    });

    // The start control's own click bubbles here after entering; it is a
    // button, so routing leaves it alone.
    dom::listen(&body, "click", move |ev: web::MouseEvent| {
        presenter.borrow_mut().on_page_click(&ev);
    });
    Ok(())
}
