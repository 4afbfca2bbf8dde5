//! Integration tests for page behaviors.

#[cfg(test)]
mod tests {
    use inkwave_shared::{
        newsletter::{ModalState, NewsletterForm, SubmitOutcome, SubscribeResponse},
        posts::LoadMoreCursor,
        scroll::{back_to_top_visible, display_value},
        search::{
            on_input, InputAction, RequestSequencer, SuggestionEntry, SuggestionGroup,
            SuggestionResult,
        },
        theme::{
            self, ClassList, MemoryClassList, MemoryStore, PreferenceStore, ThemePreference,
            DARK_CLASS, LIGHT_CLASS, THEME_STORAGE_KEY,
        },
    };

    #[test]
    fn theme_classes_stay_exclusive_and_match_storage() {
        let mut store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
        let mut body = MemoryClassList::new();
        let initial = theme::restore(&store);
        theme::apply(initial, &mut body);
        assert_eq!(initial, ThemePreference::Dark);

        for _ in 0..7 {
            let current = theme::toggle(&mut store, &mut body);

            assert_ne!(body.contains(DARK_CLASS), body.contains(LIGHT_CLASS));
            assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some(current.as_str()));
            assert_eq!(ThemePreference::from_classes(&body), current);
        }
    }

    #[test]
    fn unrecognized_stored_theme_restores_light() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "sepia");
        let mut body = MemoryClassList::new();
        theme::apply(theme::restore(&store), &mut body);

        assert!(body.contains(LIGHT_CLASS));
        assert!(!body.contains(DARK_CLASS));
    }

    #[test]
    fn back_to_top_follows_offset_under_repeated_scrolls() {
        let offsets = [0.0, 120.0, 299.0, 300.0, 301.0, 1500.0, 299.5, 0.0, 300.0];
        for offset in offsets {
            let visible = back_to_top_visible(offset);
            assert_eq!(visible, offset >= 300.0, "offset {offset}");
            assert_eq!(display_value(visible), if offset >= 300.0 { "block" } else { "none" });
        }
    }

    #[test]
    fn ten_cards_reveal_six_then_nine_then_ten() {
        let mut cursor = LoadMoreCursor::new(10);
        assert_eq!(cursor.visible(), 6);
        assert_eq!(cursor.initially_hidden(), 6..10);
        assert!(!cursor.is_exhausted());

        assert_eq!(cursor.advance(), 6..9);
        assert_eq!(cursor.visible(), 9);
        assert!(!cursor.is_exhausted());

        assert_eq!(cursor.advance(), 9..10);
        assert_eq!(cursor.visible(), 10);
        assert!(cursor.is_exhausted());

        assert!(cursor.advance().is_empty());
        assert_eq!(cursor.visible(), 10);
    }

    #[test]
    fn single_article_renders_one_header_and_one_link() {
        let payload = r#"{"articles":[{"title":"A","url":"/a"}],"writers":[],"categories":[]}"#;
        let result: SuggestionResult = serde_json::from_str(payload).expect("parse suggestions");

        let entries = result.entries();

        let headers: Vec<_> = entries
            .iter()
            .filter_map(|entry| match entry {
                SuggestionEntry::Header(group) => Some(group.label()),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec!["Articles"]);
        assert_eq!(entries, vec![
            SuggestionEntry::Header(SuggestionGroup::Articles),
            SuggestionEntry::Link {
                label: "A".into(),
                url: "/a".into()
            },
        ]);
    }

    #[test]
    fn empty_query_hides_panel_and_sends_nothing_from_any_state() {
        // Fresh page, a rendered panel, a request in flight, both at once.
        let mut shown = RequestSequencer::new();
        let rendered = shown.issue();
        assert!(shown.accept(rendered));

        let mut in_flight = RequestSequencer::new();
        let pending = in_flight.issue();

        let mut both = shown.clone();
        let late = both.issue();

        let states = [
            (RequestSequencer::new(), None),
            (shown, None),
            (in_flight, Some(pending)),
            (both, Some(late)),
        ];

        for (mut sequencer, outstanding) in states {
            let mut control = sequencer.clone();

            for raw in ["", "   ", "\n\t"] {
                assert_eq!(on_input(raw, &mut sequencer), InputAction::Hide);
            }

            if let Some(ticket) = outstanding {
                assert!(!sequencer.accept(ticket));
            }
            assert_eq!(sequencer.issue(), control.issue());
        }
    }

    #[test]
    fn popup_success_closes_modal_and_clears_form() {
        let mut modal = ModalState::Hidden;
        modal.show();

        let outcome = SubmitOutcome::from_result(
            NewsletterForm::Popup,
            Ok(SubscribeResponse {
                success: true,
                message: "Subscribed!".into(),
            }),
        );
        if outcome.close_modal {
            modal.dismiss();
        }

        assert_eq!(outcome.alert, "Subscribed!");
        assert!(outcome.reset_form);
        assert_eq!(modal, ModalState::Dismissed);
    }

    #[test]
    fn popup_rejection_keeps_modal_and_form() {
        let mut modal = ModalState::Hidden;
        modal.show();

        let response: SubscribeResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid email"}"#)
                .expect("parse subscribe response");
        let outcome = SubmitOutcome::from_result(NewsletterForm::Popup, Ok(response));
        if outcome.close_modal {
            modal.dismiss();
        }

        assert_eq!(outcome.alert, "Invalid email");
        assert!(!outcome.reset_form);
        assert_eq!(modal, ModalState::Shown);
    }
}
