use inkwave_shared::scroll::{back_to_top_visible, display_value};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::{config::ids, dom};

#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button() -> Html {
    let show = use_state(|| false);

    // 监听滚动事件
    {
        let show = show.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let closure = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        show.set(back_to_top_visible(scroll_y));
                    }) as Box<dyn Fn()>)
                };

                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                {
                    web_sys::console::error_1(&err);
                }

                (window, closure)
            });

            move || {
                if let Some((window, closure)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                    drop(closure);
                }
            }
        });
    }

    // Visibility lives on the `#backToTop` host, not on the button.
    use_effect_with(*show, |show| {
        if let Some(host) = dom::typed_element_by_id::<HtmlElement>(ids::BACK_TO_TOP) {
            let _ = host.style().set_property("display", display_value(*show));
        }
        || ()
    });

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);
            options.set_left(0.0);

            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            type="button"
            class="btn btn-primary back-to-top"
            {onclick}
            aria-label="Back to top"
            title="Back to top"
        >
            <i class="fa-solid fa-arrow-up" aria-hidden="true"></i>
        </button>
    }
}
