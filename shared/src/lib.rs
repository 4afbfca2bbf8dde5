//! Target-independent behavior of the InkWave page glue.
//!
//! Every rule the browser layer applies lives here as plain data and pure
//! functions, so it can be exercised on the host without a DOM.

pub mod error;
pub mod newsletter;
pub mod posts;
pub mod scroll;
pub mod search;
pub mod theme;

pub use error::FetchError;
pub use newsletter::{
    ModalState, NewsletterForm, SubmitOutcome, SubscribeRequest, SubscribeResponse,
};
pub use posts::LoadMoreCursor;
pub use search::{
    InputAction, RequestSequencer, RequestTicket, SuggestionEntry, SuggestionGroup, SuggestionResult,
};
pub use theme::{ClassList, PreferenceStore, ThemePreference};
