//! Timed newsletter popup and the AJAX handler shared by both signup forms.

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use inkwave_shared::newsletter::{
    ModalState, NewsletterForm, SubmitOutcome, CSRF_FIELD, MODAL_DELAY_MS,
};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::{api, config::ids, dom};

type SharedModal = Rc<RefCell<ModalState>>;

/// Arm the popup timer and bind both forms. Returns how many forms were
/// found on the page.
pub fn install() -> usize {
    let modal: SharedModal = Rc::default();

    if let Some(element) = dom::element_by_id(ids::NEWSLETTER_MODAL) {
        // Closing through the close button or the backdrop.
        {
            let modal = modal.clone();
            dom::listen_forever(&element, "hidden.bs.modal", move |_| {
                modal.borrow_mut().dismiss();
            });
        }

        let modal = modal.clone();
        Timeout::new(MODAL_DELAY_MS, move || {
            let first_show = modal.borrow_mut().show();
            if first_show && bootstrap_modal(&element, "show").is_none() {
                web_sys::console::error_1(&"Newsletter modal: bootstrap.Modal unavailable".into());
            }
        })
        .forget();
    }

    NewsletterForm::ALL
        .into_iter()
        .filter(|form| bind_form(*form, modal.clone()))
        .count()
}

/// Attach the submit handler to `kind`'s form. No-op when the form is absent.
fn bind_form(kind: NewsletterForm, modal: SharedModal) -> bool {
    let Some(form) = dom::typed_element_by_id::<HtmlFormElement>(kind.element_id()) else {
        return false;
    };

    let target = form.clone();
    dom::listen_forever(&target, "submit", move |event| {
        event.prevent_default();

        let email = input_value(&form, "input[name='email']");
        let csrf_token = input_value(&form, &format!("input[name='{}']", CSRF_FIELD));
        let submit = dom::query::<HtmlButtonElement>(&form, "button[type='submit']");
        if let Some(button) = &submit {
            button.set_disabled(true);
        }

        let form = form.clone();
        let modal = modal.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::subscribe(&email, &csrf_token).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Newsletter error: {}", e).into());
            }

            let outcome = SubmitOutcome::from_result(kind, result);
            dom::alert(&outcome.alert);
            if outcome.reset_form {
                form.reset();
            }
            if outcome.close_modal {
                close_modal(&modal);
            }

            if let Some(button) = submit {
                button.set_disabled(false);
            }
        });
    })
}

fn input_value(form: &Element, selector: &str) -> String {
    dom::query::<HtmlInputElement>(form, selector)
        .map(|input| input.value())
        .unwrap_or_default()
}

fn close_modal(modal: &SharedModal) {
    let Some(element) = dom::element_by_id(ids::NEWSLETTER_MODAL) else {
        return;
    };
    if bootstrap_modal(&element, "hide").is_some() {
        modal.borrow_mut().dismiss();
    }
}

/// Call `method` on `bootstrap.Modal.getOrCreateInstance(element)`. `None`
/// when the page did not load bootstrap or the call threw.
fn bootstrap_modal(element: &Element, method: &str) -> Option<()> {
    let win = window()?;
    let bootstrap = Reflect::get(&win, &JsValue::from_str("bootstrap")).ok()?;
    let modal_class = Reflect::get(&bootstrap, &JsValue::from_str("Modal")).ok()?;
    let factory = Reflect::get(&modal_class, &JsValue::from_str("getOrCreateInstance"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let instance = factory.call1(&modal_class, element).ok()?;
    let action = Reflect::get(&instance, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    action.call0(&instance).ok().map(|_| ())
}
