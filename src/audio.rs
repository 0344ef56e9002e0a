use crate::constants::{AUDIO_FALLBACK_ID, AUDIO_ID};
use crate::core::ambient::{
    autoplay_delay_ms, fade_finished, fade_volume, is_mobile_user_agent, PlayOutcome,
};
use crate::dom;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Volume update interval during the fade-in
const FADE_STEP_MS: i32 = 16;

/// The looping ambient track and its fade state.
#[derive(Clone)]
pub struct AmbientAudio {
    element: web::HtmlAudioElement,
    fading: Rc<Cell<bool>>,
}

impl AmbientAudio {
    /// Find the audio element and apply the start-up policy: looping, and
    /// muted on mobile user agents until the user asks for sound.
    pub fn attach(window: &web::Window, document: &web::Document) -> Option<Self> {
        let element = match document
            .get_element_by_id(AUDIO_ID)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
        {
            Some(el) => el,
            None => {
                log::warn!("[audio] missing #{}; ambient audio disabled", AUDIO_ID);
                return None;
            }
        };
        element.set_loop(true);
        let mobile = window
            .navigator()
            .user_agent()
            .map(|ua| is_mobile_user_agent(&ua))
            .unwrap_or(false);
        if mobile {
            element.set_muted(true);
            log::info!("[audio] mobile user agent, starting muted");
        }
        Some(Self {
            element,
            fading: Rc::new(Cell::new(false)),
        })
    }

    /// Start playback from silence. A rejected or throwing `play()` is the
    /// host's autoplay policy at work and maps to `Blocked`.
    pub async fn try_play(&self) -> PlayOutcome {
        self.element.set_volume(0.0);
        let promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::info!("[audio] play() threw: {:?}", e);
                return PlayOutcome::Blocked;
            }
        };
        match JsFuture::from(promise).await {
            Ok(_) => PlayOutcome::Started,
            Err(e) => {
                log::info!("[audio] autoplay blocked: {:?}", e);
                PlayOutcome::Blocked
            }
        }
    }

    /// Ramp the volume up to the ambient level. Overlapping calls are ignored.
    pub async fn fade_in(&self) {
        if self.fading.replace(true) {
            return;
        }
        let start = Instant::now();
        loop {
            let t = start.elapsed().as_secs_f32();
            self.element.set_volume(fade_volume(t) as f64);
            if fade_finished(t) {
                break;
            }
            dom::sleep_ms(FADE_STEP_MS).await;
        }
        self.fading.set(false);
    }

    pub fn unmute(&self) {
        self.element.set_muted(false);
    }
}

async fn play_and_fade(audio: &AmbientAudio) {
    let outcome = audio.try_play().await;
    if outcome.should_fade_in() {
        log::info!("[audio] playing, fading in");
        audio.fade_in().await;
    }
}

/// Attempt autoplay shortly after `loaded`; a blocked attempt is left alone.
pub fn schedule_autoplay(audio: &AmbientAudio, loaded: Instant) {
    let audio = audio.clone();
    spawn_local(async move {
        dom::sleep_ms(autoplay_delay_ms(loaded.elapsed().as_secs_f32())).await;
        play_and_fade(&audio).await;
    });
}

/// The optional fallback control is the user gesture that unmutes and
/// retries playback.
pub fn wire_fallback(document: &web::Document, audio: &AmbientAudio) {
    let audio = audio.clone();
    let wired = dom::add_click_listener(document, AUDIO_FALLBACK_ID, move || {
        audio.unmute();
        let audio = audio.clone();
        spawn_local(async move {
            play_and_fade(&audio).await;
        });
    });
    if !wired {
        log::debug!("[audio] no #{} control on this page", AUDIO_FALLBACK_ID);
    }
}
