// Islands mounted into server-rendered host elements.

pub mod scroll_to_top_button;
pub mod search_suggestions;
pub mod theme_toggle;
