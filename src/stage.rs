use crate::constants::{
    ACTIVE_CLASS, GROUP_SELECTOR, MEDIA_REF_ATTR, MEDIA_SOURCE_SELECTOR, PRESENTING_CLASS,
    SCROLL_HINT_SELECTOR, SECTION_SELECTOR, SHARED_MEDIA_SELECTOR, START_CONTROL_DISPLAY,
    START_CONTROL_ID, STEP_MEDIA_SELECTOR, STEP_SELECTOR,
};
use crate::dom;
use cardshow_core::{GroupId, PlayerStatus, Stage, Step};
use wasm_bindgen::JsCast;
use web_sys as web;

struct StepHandle {
    element: web::Element,
    own_media: Option<web::HtmlMediaElement>,
    section: Option<web::Element>,
}

struct SharedPlayer {
    container: web::Element,
    media: web::HtmlMediaElement,
}

impl SharedPlayer {
    // A nested <source> carries the src when present, else the element itself.
    fn source_slot(&self) -> web::Element {
        dom::find(&self.media, MEDIA_SOURCE_SELECTOR).unwrap_or_else(|| self.media.clone().into())
    }
}

/// The page as seen by the sequencer: step elements resolved once, in
/// document order, with their media and sections.
pub struct DomStage {
    document: web::Document,
    start_control: web::HtmlElement,
    scroll_hint: Option<web::Element>,
    steps: Vec<StepHandle>,
    players: Vec<SharedPlayer>,
}

impl DomStage {
    /// Resolve the page hooks and describe each step for the sequencer.
    pub fn discover(document: &web::Document) -> anyhow::Result<(Self, Vec<Step>)> {
        let start_control = document
            .get_element_by_id(START_CONTROL_ID)
            .and_then(dom::html_element)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", START_CONTROL_ID))?;
        let scroll_hint = document.query_selector(SCROLL_HINT_SELECTOR).ok().flatten();

        let mut players: Vec<SharedPlayer> = Vec::new();
        let mut handles = Vec::new();
        let mut steps = Vec::new();
        for element in dom::query_all(document, STEP_SELECTOR) {
            let mut step = Step::new();
            if let Some(media_ref) = element.get_attribute(MEDIA_REF_ATTR) {
                step = step.with_media_ref(media_ref);
            }
            if let Some(group) = resolve_group(&element, &mut players) {
                step = step.in_group(group);
            }
            let own_media = dom::find(&element, STEP_MEDIA_SELECTOR)
                .and_then(|m| m.dyn_into::<web::HtmlMediaElement>().ok());
            if own_media.is_some() {
                step = step.owning_media();
            }
            let section = dom::closest(&element, SECTION_SELECTOR);
            handles.push(StepHandle {
                element,
                own_media,
                section,
            });
            steps.push(step);
        }
        log::info!(
            "[init] steps={} shared_players={}",
            steps.len(),
            players.len()
        );

        Ok((
            Self {
                document: document.clone(),
                start_control,
                scroll_hint,
                steps: handles,
                players,
            },
            steps,
        ))
    }

    pub fn start_control(&self) -> &web::HtmlElement {
        &self.start_control
    }
}

// Steps under the same container share one player; containers without a
// player do not form a group.
fn resolve_group(step: &web::Element, players: &mut Vec<SharedPlayer>) -> Option<GroupId> {
    let container = dom::closest(step, GROUP_SELECTOR)?;
    if let Some(i) = players
        .iter()
        .position(|p| p.container.is_same_node(Some(container.as_ref())))
    {
        return Some(GroupId(i));
    }
    let media = dom::find(&container, SHARED_MEDIA_SELECTOR)?
        .dyn_into::<web::HtmlMediaElement>()
        .ok()?;
    players.push(SharedPlayer { container, media });
    Some(GroupId(players.len() - 1))
}

impl Stage for DomStage {
    fn request_fullscreen(&mut self) {
        if let Some(root) = self.document.document_element() {
            dom::request_fullscreen(&root);
        }
    }

    fn exit_fullscreen(&mut self) {
        if self.document.fullscreen_element().is_some() {
            _ = self.document.exit_fullscreen();
        }
    }

    fn show_presentation_chrome(&mut self, presenting: bool) {
        if let Some(body) = self.document.body() {
            let cl = body.class_list();
            _ = if presenting {
                cl.add_1(PRESENTING_CLASS)
            } else {
                cl.remove_1(PRESENTING_CLASS)
            };
        }
        let display = if presenting {
            "none"
        } else {
            START_CONTROL_DISPLAY
        };
        dom::set_style(&self.start_control, "display", display);
        // the hint only points at the page below the hero; once gone it stays gone
        if presenting {
            if let Some(hint) = self.scroll_hint.take() {
                hint.remove();
            }
        }
    }

    fn set_step_active(&mut self, index: usize, active: bool) {
        if let Some(step) = self.steps.get(index) {
            let cl = step.element.class_list();
            _ = if active {
                cl.add_1(ACTIVE_CLASS)
            } else {
                cl.remove_1(ACTIVE_CLASS)
            };
        }
    }

    fn shared_player(&self, group: GroupId) -> Option<PlayerStatus> {
        let player = self.players.get(group.0)?;
        Some(PlayerStatus {
            source: player.source_slot().get_attribute("src"),
            paused: player.media.paused(),
        })
    }

    fn swap_shared_source(&mut self, group: GroupId, source: &str) {
        if let Some(player) = self.players.get(group.0) {
            _ = player.source_slot().set_attribute("src", source);
            player.media.load();
            dom::play(&player.media, "[media] shared playback");
        }
    }

    fn resume_shared(&mut self, group: GroupId) {
        if let Some(player) = self.players.get(group.0) {
            dom::play(&player.media, "[media] shared playback");
        }
    }

    fn restart_step_media(&mut self, index: usize) {
        if let Some(media) = self.steps.get(index).and_then(|s| s.own_media.as_ref()) {
            media.set_current_time(0.0);
            dom::play(media, "[media] step playback");
        }
    }

    fn scroll_step_into_view(&mut self, index: usize) {
        if let Some(section) = self.steps.get(index).and_then(|s| s.section.as_ref()) {
            dom::scroll_into_view(section, web::ScrollLogicalPosition::Center);
        }
    }

    fn scroll_to_top(&mut self) {
        dom::scroll_to_top();
    }
}
