use crate::core::entrance::{Choreography, EntranceStep, TweenState, ENTRANCE_STEPS};
use crate::dom;
use instant::Instant;
use web_sys as web;

/// One-shot hero entrance, advanced by the frame loop until it settles.
pub struct EntranceRun {
    started: Instant,
    groups: Vec<(EntranceStep, Vec<web::HtmlElement>)>,
    choreography: Choreography,
}

impl EntranceRun {
    /// Resolve the hero elements and put them in their state at the time
    /// already elapsed since `loaded`.
    pub fn begin(document: &web::Document, loaded: Instant) -> Self {
        let groups: Vec<(EntranceStep, Vec<web::HtmlElement>)> = ENTRANCE_STEPS
            .iter()
            .map(|step| (*step, dom::query_html_elements(document, step.selector)))
            .collect();
        let counts: Vec<usize> = groups.iter().map(|(_, els)| els.len()).collect();
        log::info!("[entrance] elements per step {:?}", counts);
        let run = Self {
            started: loaded,
            groups,
            choreography: Choreography::new(&counts),
        };
        run.apply(loaded.elapsed().as_secs_f32());
        run
    }

    /// Advance to the current time. Returns `false` once every element holds
    /// its final state and the run no longer touches the DOM.
    pub fn tick(&mut self) -> bool {
        if self.choreography.is_finished() {
            return false;
        }
        let elapsed = self.started.elapsed().as_secs_f32();
        if self.choreography.advance(elapsed) {
            self.settle();
            log::info!("[entrance] done after {:.2}s", elapsed);
            return false;
        }
        self.apply(elapsed);
        true
    }

    fn apply(&self, elapsed: f32) {
        for (step, elements) in &self.groups {
            for (i, el) in elements.iter().enumerate() {
                write_state(el, step.sample(elapsed, i));
            }
        }
    }

    fn settle(&self) {
        for (_, elements) in &self.groups {
            for el in elements {
                write_state(el, TweenState::SETTLED);
            }
        }
    }
}

fn write_state(el: &web::HtmlElement, state: TweenState) {
    let style = el.style();
    _ = style.set_property("opacity", &format!("{:.4}", state.opacity));
    _ = style.set_property(
        "transform",
        &format!("translate(0px, {:.3}px)", state.translate_y),
    );
}
