//! Header scrolled style and fade-in reveals.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::app::App;
use super::dom::{self, cast, listen};
use crate::consts::{CLASS_SCROLLED, CLASS_VISIBLE, REDUCED_MOTION_QUERY};
use crate::debounce::Debounced;
use crate::error::PageError;
use crate::reveal::{RevealMode, RevealSet, reveal_mode};
use crate::scroll::header_scrolled;

pub fn mount_header(app: &Rc<App>) -> Result<(), PageError> {
    let Some(header) = app.elements.header.clone() else {
        log::debug!("header: no #header, skipping");
        return Ok(());
    };
    let on_scroll = Rc::clone(app);
    let update = Debounced::new(app.config.debounce_ms, move |()| {
        dom::report(dom::set_class(&header, CLASS_SCROLLED, header_scrolled(on_scroll.scroll_y())));
    });
    listen(&app.window, "scroll", move |_: web_sys::Event| update.call(()))
}

pub fn mount_reveal(app: &Rc<App>) -> Result<(), PageError> {
    let sections = app.elements.animated_sections.clone();
    if sections.is_empty() {
        log::debug!("reveal: no .fade-in sections, skipping");
        return Ok(());
    }

    let mode = reveal_mode(app.matches_media(REDUCED_MOTION_QUERY), app.config.animation_threshold);
    let set = Rc::new(RefCell::new(RevealSet::new(sections.len(), mode)));

    let RevealMode::Observe { threshold, root_margin } = mode else {
        for section in &sections {
            dom::report(dom::set_class(section, CLASS_VISIBLE, true));
        }
        log::debug!("reveal: reduced motion, {} sections shown", sections.len());
        return Ok(());
    };

    let observed = sections.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter().filter_map(cast::<IntersectionObserverEntry>) {
                let target = entry.target();
                let Some(index) = observed.iter().position(|section| *section == target) else {
                    continue;
                };
                if set.borrow_mut().on_intersection(index, entry.is_intersecting()) {
                    dom::report(dom::set_class(&target, CLASS_VISIBLE, true));
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|thrown| PageError::dom("IntersectionObserver", thrown))?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    log::debug!("reveal: observing {} sections", sections.len());
    Ok(())
}
