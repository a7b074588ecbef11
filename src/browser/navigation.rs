//! Menu toggles, outside-click dismissal, eased anchor scrolling, and
//! active-link highlighting.

use std::rc::Rc;

use web_sys::{Element, HtmlElement, MouseEvent, Node};

use super::app::App;
use super::dom::{self, cast, listen};
use crate::consts::{ANCHOR_LINK_SELECTOR, CLASS_ACTIVE, ICON_SELECTOR, SECTION_SELECTOR};
use crate::debounce::Debounced;
use crate::error::PageError;
use crate::menu::{ClickHit, MenuKind, MenuView, dismisses, resolve_open};
use crate::scroll::{ScrollAnimation, SectionSpan, active_section, anchor_target, link_is_active, target_scroll_y};

pub fn mount(app: &Rc<App>) -> Result<(), PageError> {
    for kind in MenuKind::ALL {
        let Some(trigger) = trigger(app, kind) else {
            log::debug!("navigation: no trigger for {kind:?}");
            continue;
        };
        let on_click = Rc::clone(app);
        listen(trigger, "click", move |_: MouseEvent| toggle(&on_click, kind, None))?;
    }

    let on_click = Rc::clone(app);
    listen(&app.document, "click", move |event: MouseEvent| dismiss_outside(&on_click, &event))?;

    for anchor in dom::query_all(&app.document, ANCHOR_LINK_SELECTOR) {
        let on_click = Rc::clone(app);
        let link = anchor.clone();
        listen(&anchor, "click", move |event: MouseEvent| {
            event.prevent_default();
            if let Some(id) = link.get_attribute("href").as_deref().and_then(anchor_target) {
                scroll_to(&on_click, id);
            }
            close_menus(&on_click);
        })?;
    }

    let on_scroll = Rc::clone(app);
    let highlight = Debounced::new(app.config.debounce_ms, move |()| highlight_links(&on_scroll));
    listen(&app.window, "scroll", move |_: web_sys::Event| highlight.call(()))?;
    Ok(())
}

fn trigger(app: &App, kind: MenuKind) -> Option<&Element> {
    match kind {
        MenuKind::NavMenu => app.elements.mobile_menu_btn.as_ref(),
        MenuKind::MobileNav => app.elements.mobile_nav_toggle.as_ref(),
    }
}

fn menu(app: &App, kind: MenuKind) -> Option<&Element> {
    match kind {
        MenuKind::NavMenu => app.elements.nav_menu.as_ref(),
        MenuKind::MobileNav => app.elements.mobile_nav_menu.as_ref(),
    }
}

fn is_open(app: &App, kind: MenuKind) -> bool {
    match kind {
        MenuKind::NavMenu => app.state.borrow().mobile_menu_open,
        MenuKind::MobileNav => menu(app, kind).is_some_and(|menu| dom::has_class(menu, CLASS_ACTIVE)),
    }
}

/// Open, close, or flip one menu. `force` pins the result; `None` inverts.
pub fn toggle(app: &App, kind: MenuKind, force: Option<bool>) {
    let open = resolve_open(is_open(app, kind), force);
    let view = MenuView::new(open);

    match kind {
        MenuKind::NavMenu => {
            app.state.borrow_mut().mobile_menu_open = open;
            if let Some(button) = trigger(app, kind) {
                dom::report(dom::set_class(button, CLASS_ACTIVE, open));
                dom::report(dom::set_attr(button, "aria-expanded", view.aria_expanded()));
            }
        }
        MenuKind::MobileNav => {
            if let Some(button) = trigger(app, kind) {
                dom::report(dom::set_attr(button, "aria-expanded", view.aria_expanded()));
                if let Some(icon) = dom::query(button, ICON_SELECTOR) {
                    for (class, on) in view.icon_classes() {
                        dom::report(dom::set_class(&icon, class, on));
                    }
                }
            }
        }
    }

    if let Some(menu) = menu(app, kind) {
        dom::report(dom::set_class(menu, CLASS_ACTIVE, open));
    }
}

pub fn close_menus(app: &App) {
    for kind in MenuKind::ALL {
        toggle(app, kind, Some(false));
    }
}

fn dismiss_outside(app: &App, event: &MouseEvent) {
    let target: Option<Node> = event.target().and_then(cast::<Node>);
    let inside = |element: Option<&Element>| element.is_some_and(|el| el.contains(target.as_ref()));

    for kind in MenuKind::ALL {
        let hit = ClickHit { in_menu: inside(menu(app, kind)), in_trigger: inside(trigger(app, kind)) };
        if dismisses(is_open(app, kind), hit) {
            toggle(app, kind, Some(false));
        }
    }
}

/// Start an eased scroll to `#id`. Overlapping scrolls are not cancelled;
/// each runs to completion on its own frame task.
fn scroll_to(app: &Rc<App>, id: &str) {
    let Some(target) = app.document.get_element_by_id(id) else {
        log::debug!("navigation: no element #{id} to scroll to");
        return;
    };
    let from = app.scroll_y();
    let to = target_scroll_y(from, target.get_bounding_client_rect().top(), app.config.scroll_offset);
    let mut animation = ScrollAnimation::new(from, to, app.config.scroll_duration_ms);

    let window = app.window.clone();
    app.clock.spawn(move |now_ms: f64| {
        let (y, progress) = animation.step(now_ms);
        window.scroll_to_with_x_and_y(0.0, y);
        progress
    });
}

fn section_spans(app: &App) -> Vec<SectionSpan> {
    dom::query_all(&app.document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(cast::<HtmlElement>)
        .map(|section| {
            SectionSpan::new(section.id(), f64::from(section.offset_top()), f64::from(section.offset_height()))
        })
        .collect()
}

fn highlight_links(app: &App) {
    let spans = section_spans(app);
    let Some(current) = active_section(&spans, app.scroll_y(), app.config.scroll_offset) else {
        return;
    };
    for link in app.elements.nav_links.iter().chain(&app.elements.mobile_nav_links) {
        let active = link_is_active(link.get_attribute("href").as_deref(), current);
        dom::report(dom::set_class(link, CLASS_ACTIVE, active));
    }
}
