//! Configuration for the frontend application

/// Origin prefix for the JSON endpoints.
/// - Same-origin deployment (the default): ""
/// - Split deployment: set `INKWAVE_API_BASE` at build time, e.g. "https://inkwave.example"
pub const API_BASE: &str = match option_env!("INKWAVE_API_BASE") {
    Some(url) => url,
    None => "",
};

/// Element ids the glue binds to. The server-rendered templates must keep
/// these stable.
pub mod ids {
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const BACK_TO_TOP: &str = "backToTop";
    pub const NEWSLETTER_MODAL: &str = "newsletterModal";
    pub const LOAD_MORE_BUTTON: &str = "loadMoreBtn";
    pub const SEARCH_BOX: &str = "searchBox";
    pub const SEARCH_INPUT: &str = "searchInput";
    pub const SEARCH_SUGGESTIONS: &str = "searchSuggestions";

    /// Every card that takes part in "load more", in document order.
    pub const POST_CARD_SELECTOR: &str = "#postsContainer .post-card-wrapper";
}
