//! Browser bindings: attaches the core behavior to the live document.
//!
//! Bootstrap order matters only in that the element cache and page state are
//! built first. Each feature mounts independently; a feature whose elements
//! are missing is skipped, and a feature whose browser calls fail is logged
//! and skipped without stopping the rest.

pub mod app;
pub mod clock;
pub mod dom;
pub mod effects;
pub mod keyboard;
pub mod navigation;
pub mod particles;
pub mod preloader;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use self::app::App;
use crate::config::Config;
use crate::error::PageError;
use crate::preloader::ReadyState;

type Mount = fn(&Rc<App>) -> Result<(), PageError>;

const FEATURES: [(&str, Mount); 6] = [
    ("preloader", preloader::mount),
    ("navigation", navigation::mount),
    ("header", effects::mount_header),
    ("reveal", effects::mount_reveal),
    ("particles", particles::mount),
    ("keyboard", keyboard::mount),
];

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window().map_err(to_js)?;
    let document = dom::document(&window).map_err(to_js)?;

    if ReadyState::parse(&document.ready_state()) == ReadyState::Loading {
        let on_ready = window.clone();
        let target = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
            init(on_ready.clone(), target.clone());
        })
        .map_err(to_js)?;
    } else {
        init(window, document);
    }
    Ok(())
}

fn init(window: Window, document: Document) {
    let config = match dom::read_config(&document) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(&format!("{err}; using default site config").into());
            Config::default()
        }
    };
    let level = match config.log_level() {
        Ok(level) => level,
        Err(err) => {
            web_sys::console::warn_1(&format!("{err}; logging at info").into());
            log::Level::Info
        }
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }

    let app = App::new(config, window, document);
    let missing = app.elements.missing();
    if !missing.is_empty() {
        log::debug!("elements not on this page: {}", missing.join(", "));
    }

    for (name, mount) in FEATURES {
        if let Err(err) = mount(&app) {
            log::warn!("{name}: {err}");
        }
    }
    log::info!("page initialized");
}

fn to_js(err: PageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
