//! Thin helpers over `web_sys` shared by the behaviors.
//!
//! Lookups return `Option` so a page that lacks some piece of markup simply
//! skips the matching behavior.

use inkwave_shared::theme::{ClassList, PreferenceStore};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, DomTokenList, Element, Event, EventTarget, Storage};

pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// Look up an element by id and downcast it, `None` if either step fails.
pub fn typed_element_by_id<T: JsCast>(id: &str) -> Option<T> {
    element_by_id(id).and_then(|el| el.dyn_into::<T>().ok())
}

/// First descendant of `root` matching `selector`, downcast to `T`.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element in the document matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Attach `handler` to `target` for the rest of the page's life.
///
/// The closure is leaked on purpose: page-level listeners are never removed.
pub fn listen_forever<F>(target: &EventTarget, event: &str, handler: F) -> bool
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => {
            closure.forget();
            true
        },
        Err(err) => {
            web_sys::console::error_1(&err);
            false
        },
    }
}

/// `window.localStorage`, or nothing when storage is disabled. Reads then
/// return `None` and writes are dropped.
pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
    pub fn open() -> Self {
        Self(window().and_then(|win| win.local_storage().ok().flatten()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(err) = storage.set_item(key, value) {
                web_sys::console::error_1(&err);
            }
        }
    }
}

/// `document.body.classList`.
pub struct BodyClasses(Option<DomTokenList>);

impl BodyClasses {
    pub fn open() -> Self {
        Self(document().and_then(|doc| doc.body()).map(|body| body.class_list()))
    }
}

impl ClassList for BodyClasses {
    fn add(&mut self, class: &str) {
        if let Some(list) = &self.0 {
            let _ = list.add_1(class);
        }
    }

    fn remove(&mut self, class: &str) {
        if let Some(list) = &self.0 {
            let _ = list.remove_1(class);
        }
    }

    fn contains(&self, class: &str) -> bool {
        self.0.as_ref().is_some_and(|list| list.contains(class))
    }
}
