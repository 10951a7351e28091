//! Shared test helpers

use lexiview::{update, Msg, SentenceView, StringHost};

/// A view over a `StringHost` holding `text`, still in free-edit mode
pub fn view_with(text: &str) -> SentenceView<StringHost> {
    SentenceView::new(StringHost::from_text(text))
}

/// A view over `text` with simple view already enabled
pub fn simple_view(text: &str) -> SentenceView<StringHost> {
    let mut view = view_with(text);
    update(&mut view, Msg::SetSimpleView(true));
    view
}
