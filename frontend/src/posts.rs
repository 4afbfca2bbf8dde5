//! "Load more" over the server-rendered post cards.

use std::{cell::RefCell, rc::Rc};

use inkwave_shared::posts::{LoadMoreCursor, HIDDEN_CARD_CLASS, NO_MORE_POSTS_LABEL};
use web_sys::{Element, HtmlButtonElement};

use crate::{config::ids, dom};

/// Hide the cards past the initial window and wire the button. Returns
/// `false` when the page has no load-more button.
pub fn install() -> bool {
    let Some(button) = dom::typed_element_by_id::<HtmlButtonElement>(ids::LOAD_MORE_BUTTON) else {
        return false;
    };

    let cards = dom::query_all(ids::POST_CARD_SELECTOR);
    let cursor = LoadMoreCursor::new(cards.len());

    for idx in cursor.initially_hidden() {
        set_hidden(&cards[idx], true);
    }

    if cursor.is_exhausted() {
        finish(&button);
        return true;
    }

    let cursor = Rc::new(RefCell::new(cursor));
    let target = button.clone();
    dom::listen_forever(&target, "click", move |_| {
        let mut cursor = cursor.borrow_mut();
        for idx in cursor.advance() {
            set_hidden(&cards[idx], false);
        }
        if cursor.is_exhausted() {
            finish(&button);
        }
    })
}

fn set_hidden(card: &Element, hidden: bool) {
    let classes = card.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN_CARD_CLASS)
    } else {
        classes.remove_1(HIDDEN_CARD_CLASS)
    };
}

fn finish(button: &HtmlButtonElement) {
    button.set_text_content(Some(NO_MORE_POSTS_LABEL));
    button.set_disabled(true);
}
