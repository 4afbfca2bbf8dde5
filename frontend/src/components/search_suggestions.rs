use gloo_timers::callback::Timeout;
use inkwave_shared::search::{
    on_input, InputAction, RequestSequencer, SuggestionEntry, NO_RESULTS_LABEL,
    SEARCH_DEBOUNCE_MS,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlInputElement, Node};
use yew::prelude::*;

use crate::{api::fetch_suggestions, config::ids};

#[function_component(SearchSuggestions)]
pub fn search_suggestions() -> Html {
    let input_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let entries = use_state(Vec::<SuggestionEntry>::new);
    let visible = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);
    let sequencer = use_mut_ref(RequestSequencer::new);

    // Click anywhere outside the input and the panel closes it.
    {
        let input_ref = input_ref.clone();
        let panel_ref = panel_ref.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let document = crate::dom::document();
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = |node_ref: &NodeRef| {
                    node_ref
                        .get()
                        .is_some_and(|container| container.contains(target.as_ref()))
                };
                if !inside(&input_ref) && !inside(&panel_ref) {
                    visible.set(false);
                }
            });

            if let Some(document) = &document {
                if let Err(err) = document
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                {
                    web_sys::console::error_1(&err);
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    let oninput = {
        let input_ref = input_ref.clone();
        let entries = entries.clone();
        let visible = visible.clone();
        Callback::from(move |_: InputEvent| {
            // Dropping the previous timeout cancels it.
            pending.borrow_mut().take();

            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let action = on_input(&input.value(), &mut *sequencer.borrow_mut());
            let query = match action {
                InputAction::Hide => {
                    visible.set(false);
                    return;
                },
                InputAction::Schedule(query) => query,
            };

            let sequencer = sequencer.clone();
            let entries = entries.clone();
            let visible = visible.clone();
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                let ticket = sequencer.borrow_mut().issue();
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_suggestions(&query).await {
                        Ok(result) => {
                            if sequencer.borrow_mut().accept(ticket) {
                                entries.set(result.entries());
                                visible.set(true);
                            }
                        },
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Search suggestions failed: {}", e).into(),
                            );
                        },
                    }
                });
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let rows = entries.iter().map(|entry| match entry {
        SuggestionEntry::Header(group) => html! {
            <div class="list-group-item active">{ group.label() }</div>
        },
        SuggestionEntry::Link {
            label,
            url,
        } => html! {
            <a href={url.clone()} class="list-group-item list-group-item-action">{ label.clone() }</a>
        },
        SuggestionEntry::NoResults => html! {
            <div class="list-group-item disabled">{ NO_RESULTS_LABEL }</div>
        },
    });

    html! {
        <div class="position-relative">
            <input
                id={ids::SEARCH_INPUT}
                ref={input_ref}
                type="search"
                class="form-control"
                placeholder="Search articles, writers, categories"
                autocomplete="off"
                aria-controls={ids::SEARCH_SUGGESTIONS}
                aria-expanded={visible.to_string()}
                {oninput}
            />
            <div
                id={ids::SEARCH_SUGGESTIONS}
                ref={panel_ref}
                class="list-group position-absolute w-100 shadow"
                style={if *visible { "display: block" } else { "display: none" }}
            >
                { for rows }
            </div>
        </div>
    }
}
