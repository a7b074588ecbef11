//! Thin helpers over `web-sys` plus the element cache.
//!
//! Every element the page behavior touches is looked up once at bootstrap.
//! Absent elements are `None` (or an empty list); each feature checks before
//! use and goes inert rather than failing.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlCanvasElement, HtmlElement, Window};

use crate::config::Config;
use crate::consts::{
    CONFIG_SCRIPT_ID, FADE_IN_SELECTOR, HEADER_ID, MOBILE_MENU_BTN_SELECTOR, MOBILE_NAV_LINK_SELECTOR,
    MOBILE_NAV_MENU_SELECTOR, MOBILE_NAV_SELECTOR, MOBILE_NAV_TOGGLE_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_SELECTOR,
    PARTICLE_CANVAS_ID, PRELOADER_ID,
};
use crate::error::{ConfigError, PageError};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::MissingWindow)
}

pub fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::MissingDocument)
}

/// Checked cast; a value of the wrong type is logged at trace level and
/// becomes `None`.
pub fn cast<T: JsCast>(value: impl JsCast + std::fmt::Debug) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(cast) => Some(cast),
        Err(value) => {
            log::trace!("not a {}: {value:?}", std::any::type_name::<T>());
            None
        }
    }
}

/// Attach a listener for the lifetime of the page.
///
/// Events that are not of type `E` are ignored.
pub fn listen<E>(target: &EventTarget, event: &'static str, mut handler: impl FnMut(E) + 'static) -> Result<(), PageError>
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
        if let Some(event) = cast::<E>(raw) {
            handler(event);
        }
    });
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|thrown| PageError::dom("addEventListener", thrown))?;
    callback.forget();
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), PageError> {
    element
        .class_list()
        .toggle_with_force(class, on)
        .map_err(|thrown| PageError::dom("classList.toggle", thrown))?;
    Ok(())
}

#[must_use]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_attr(element: &Element, name: &str, value: &str) -> Result<(), PageError> {
    element.set_attribute(name, value).map_err(|thrown| PageError::dom("setAttribute", thrown))
}

/// Log a failed DOM update and carry on.
pub fn report(result: Result<(), PageError>) {
    if let Err(err) = result {
        log::warn!("{err}");
    }
}

/// First match for `selector` under `root`, or `None` (also on a bad selector).
pub fn query(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(thrown) => {
            log::warn!("querySelector({selector}) failed: {thrown:?}");
            None
        }
    }
}

pub fn query_document(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(thrown) => {
            log::warn!("querySelector({selector}) failed: {thrown:?}");
            None
        }
    }
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(thrown) => {
            log::warn!("querySelectorAll({selector}) failed: {thrown:?}");
            return Vec::new();
        }
    };
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(cast::<Element>).collect()
}

/// Read the optional `#site-config` JSON block.
///
/// A missing or empty block yields the defaults.
pub fn read_config(document: &Document) -> Result<Config, ConfigError> {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(Config::default());
    }
    Config::from_json(&raw)
}

/// Elements resolved once at bootstrap.
pub struct Elements {
    pub preloader: Option<HtmlElement>,
    pub header: Option<Element>,
    pub mobile_menu_btn: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub mobile_nav: Option<Element>,
    pub mobile_nav_toggle: Option<Element>,
    pub mobile_nav_menu: Option<Element>,
    pub mobile_nav_links: Vec<Element>,
    pub particle_canvas: Option<HtmlCanvasElement>,
    pub animated_sections: Vec<Element>,
}

impl Elements {
    #[must_use]
    pub fn query(document: &Document) -> Self {
        Self {
            preloader: document.get_element_by_id(PRELOADER_ID).and_then(cast::<HtmlElement>),
            header: document.get_element_by_id(HEADER_ID),
            mobile_menu_btn: query_document(document, MOBILE_MENU_BTN_SELECTOR),
            nav_menu: query_document(document, NAV_MENU_SELECTOR),
            nav_links: query_all(document, NAV_LINK_SELECTOR),
            mobile_nav: query_document(document, MOBILE_NAV_SELECTOR),
            mobile_nav_toggle: query_document(document, MOBILE_NAV_TOGGLE_SELECTOR),
            mobile_nav_menu: query_document(document, MOBILE_NAV_MENU_SELECTOR),
            mobile_nav_links: query_all(document, MOBILE_NAV_LINK_SELECTOR),
            particle_canvas: document.get_element_by_id(PARTICLE_CANVAS_ID).and_then(cast::<HtmlCanvasElement>),
            animated_sections: query_all(document, FADE_IN_SELECTOR),
        }
    }

    /// Names of the single-element lookups that found nothing.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("#preloader", self.preloader.is_none()),
            ("#header", self.header.is_none()),
            (MOBILE_MENU_BTN_SELECTOR, self.mobile_menu_btn.is_none()),
            (NAV_MENU_SELECTOR, self.nav_menu.is_none()),
            (MOBILE_NAV_SELECTOR, self.mobile_nav.is_none()),
            (MOBILE_NAV_TOGGLE_SELECTOR, self.mobile_nav_toggle.is_none()),
            (MOBILE_NAV_MENU_SELECTOR, self.mobile_nav_menu.is_none()),
            ("#particleCanvas", self.particle_canvas.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}
