use std::rc::Rc;

use gloo_timers::callback::Timeout;

use super::app::{App, timer_ms};
use super::dom::{self, listen};
use crate::consts::{CLASS_FADE_OUT, CLASS_LOADING};
use crate::error::PageError;
use crate::frame::Progress;
use crate::preloader::{OnLoad, PreloaderGate, ReadyState, Startup, startup};

pub fn mount(app: &Rc<App>) -> Result<(), PageError> {
    if app.elements.preloader.is_none() {
        log::debug!("preloader: no #preloader, skipping");
        return Ok(());
    }

    let complete = ReadyState::parse(&app.document.ready_state()) == ReadyState::Complete;
    let min_ms = app.config.preloader_min_ms;
    match startup(complete, min_ms) {
        Startup::HideAfter(delay_ms) => {
            let app = Rc::clone(app);
            Timeout::new(timer_ms(delay_ms), move || hide(&app)).forget();
        }
        Startup::AwaitLoad => {
            let gate = PreloaderGate::new(app.now_ms(), min_ms);
            let on_load = Rc::clone(app);
            listen(&app.window, "load", move |_: web_sys::Event| {
                if gate.on_load(on_load.now_ms()) == OnLoad::HideNow {
                    hide(&on_load);
                    return;
                }
                let app = Rc::clone(&on_load);
                on_load.clock.spawn(move |now_ms: f64| {
                    if !gate.ready(now_ms) {
                        return Progress::Continue;
                    }
                    hide(&app);
                    Progress::Done
                });
            })?;
        }
    }
    Ok(())
}

/// Fade the splash out, then take it out of layout once the fade has had
/// time to run. Repeat calls are no-ops.
pub fn hide(app: &Rc<App>) {
    let Some(preloader) = app.elements.preloader.clone() else {
        return;
    };
    if !app.state.borrow_mut().hide_preloader() {
        return;
    }

    dom::report(dom::set_class(&preloader, CLASS_FADE_OUT, true));
    if let Some(body) = app.document.body() {
        dom::report(dom::set_class(&body, CLASS_LOADING, false));
    }

    Timeout::new(app.config.preloader_fade_ms, move || {
        dom::report(
            preloader
                .style()
                .set_property("display", "none")
                .map_err(|thrown| PageError::dom("style.setProperty", thrown)),
        );
    })
    .forget();
}
