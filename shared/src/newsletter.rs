//! Newsletter popup and subscription forms.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Path of the subscription endpoint, relative to the API base.
pub const SUBSCRIBE_PATH: &str = "/subscribe/";

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Name of the hidden input holding the anti-forgery token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Delay between page load and the automatic popup.
pub const MODAL_DELAY_MS: u32 = 10_000;

/// Alert shown when the request or its response failed.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Body of `POST /subscribe/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    /// Address typed by the visitor, sent as-is.
    pub email: String,
}

/// Answer of `POST /subscribe/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    /// Whether the address was newly subscribed.
    pub success: bool,
    /// Human-readable outcome, shown verbatim.
    pub message: String,
}

/// The two forms sharing the submit logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsletterForm {
    /// Form inside the timed modal.
    Popup,
    /// Always-visible form in the sidebar.
    Sidebar,
}

impl NewsletterForm {
    /// Both forms, in binding order.
    pub const ALL: [NewsletterForm; 2] = [Self::Popup, Self::Sidebar];

    /// Element id of the `<form>`.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Popup => "popupNewsletterForm",
            Self::Sidebar => "sidebarNewsletterForm",
        }
    }

    /// Whether a successful submission from this form closes the modal.
    pub fn closes_modal(self) -> bool {
        matches!(self, Self::Popup)
    }
}

/// Lifecycle of the popup within one page load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    /// Not shown yet; the timer is pending.
    #[default]
    Hidden,
    /// On screen.
    Shown,
    /// Closed by the visitor or by a successful popup submission.
    Dismissed,
}

impl ModalState {
    /// Hidden → Shown. Any other state is left alone; returns whether the
    /// transition happened.
    pub fn show(&mut self) -> bool {
        if *self == Self::Hidden {
            *self = Self::Shown;
            true
        } else {
            tracing::debug!(state = ?self, "ignoring modal show");
            false
        }
    }

    /// Shown → Dismissed. Any other state is left alone; returns whether the
    /// transition happened.
    pub fn dismiss(&mut self) -> bool {
        if *self == Self::Shown {
            *self = Self::Dismissed;
            true
        } else {
            tracing::debug!(state = ?self, "ignoring modal dismiss");
            false
        }
    }
}

/// What the page does once a submission has settled.
///
/// Re-enabling the submit control is not part of the outcome: it happens
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Text of the blocking alert.
    pub alert: String,
    /// Clear the form fields.
    pub reset_form: bool,
    /// Close the popup.
    pub close_modal: bool,
}

impl SubmitOutcome {
    /// Decide the outcome for `form` given the settled request.
    pub fn from_result(form: NewsletterForm, result: Result<SubscribeResponse, FetchError>) -> Self {
        match result {
            Ok(response) => Self {
                reset_form: response.success,
                close_modal: response.success && form.closes_modal(),
                alert: response.message,
            },
            Err(_) => Self {
                alert: GENERIC_FAILURE_MESSAGE.to_string(),
                reset_form: false,
                close_modal: false,
            },
        }
    }
}
