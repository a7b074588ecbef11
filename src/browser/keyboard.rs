use std::cell::Cell;
use std::rc::Rc;

use web_sys::{KeyboardEvent, MouseEvent};

use super::app::App;
use super::dom::{self, listen};
use super::navigation::close_menus;
use crate::consts::CLASS_KEYBOARD_NAV;
use crate::error::PageError;
use crate::keyboard::{InputModality, KeyCommand, command_for_key};

pub fn mount(app: &Rc<App>) -> Result<(), PageError> {
    let modality = Rc::new(Cell::new(InputModality::default()));

    let on_key = Rc::clone(app);
    let key_modality = Rc::clone(&modality);
    listen(&app.document, "keydown", move |event: KeyboardEvent| {
        let key = event.key();
        if command_for_key(&key) == Some(KeyCommand::CloseMenus) {
            close_menus(&on_key);
        }
        key_modality.set(key_modality.get().after_key(&key));
        apply(&on_key, key_modality.get());
    })?;

    let on_pointer = Rc::clone(app);
    listen(&app.document, "mousedown", move |_: MouseEvent| {
        modality.set(modality.get().after_pointer_down());
        apply(&on_pointer, modality.get());
    })
}

fn apply(app: &App, modality: InputModality) {
    if let Some(body) = app.document.body() {
        dom::report(dom::set_class(&body, CLASS_KEYBOARD_NAV, modality.body_class_on()));
    }
}
