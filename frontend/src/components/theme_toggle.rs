use inkwave_shared::theme::{self, ThemePreference};
use yew::prelude::*;

use crate::dom::{BodyClasses, LocalStorage};

/// Put the persisted theme on `<body>`. Runs once at startup whether or not
/// the toggle control is on the page.
pub fn restore_theme() -> ThemePreference {
    let pref = theme::restore(&LocalStorage::open());
    theme::apply(pref, &mut BodyClasses::open());
    pref
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme_state = use_state(|| ThemePreference::from_classes(&BodyClasses::open()));

    let onclick = {
        let theme_state = theme_state.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme::toggle(&mut LocalStorage::open(), &mut BodyClasses::open());
            theme_state.set(next);
        })
    };

    let label = theme_state.toggle_label();

    html! {
        <button
            type="button"
            class={classes!("btn", "btn-link", "theme-toggle")}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={theme_state.is_dark().to_string()}
        >
            <i class={classes!("fa-solid", theme_state.icon_class())} aria-hidden="true"></i>
        </button>
    }
}
