//! Browser glue for the InkWave blog: theme toggle, back-to-top button,
//! newsletter popup and forms, "load more" posts and search suggestions.
//!
//! The pages are rendered by the server. This binary attaches each behavior
//! to its host element when the current page has one, and skips it otherwise.

mod api;
mod components;
mod config;
mod dom;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod newsletter;
mod posts;

use components::{
    scroll_to_top_button::ScrollToTopButton,
    search_suggestions::SearchSuggestions,
    theme_toggle::{restore_theme, ThemeToggle},
};
use config::ids;
use yew::html::BaseComponent;

fn mount<COMP>(host_id: &str) -> bool
where
    COMP: BaseComponent,
    COMP::Properties: Default,
{
    match dom::element_by_id(host_id) {
        Some(host) => {
            yew::Renderer::<COMP>::with_root(host).render();
            true
        },
        None => false,
    }
}

fn main() {
    let theme = restore_theme();

    let mut attached = Vec::new();
    if mount::<ThemeToggle>(ids::THEME_TOGGLE) {
        attached.push("theme-toggle");
    }
    if mount::<ScrollToTopButton>(ids::BACK_TO_TOP) {
        attached.push("back-to-top");
    }
    if mount::<SearchSuggestions>(ids::SEARCH_BOX) {
        attached.push("search-suggestions");
    }
    if posts::install() {
        attached.push("load-more");
    }
    let forms = newsletter::install();

    web_sys::console::debug_1(
        &format!(
            "inkwave: theme={} attached=[{}] newsletter_forms={}",
            theme.as_str(),
            attached.join(", "),
            forms
        )
        .into(),
    );
}
