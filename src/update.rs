//! Update handlers for the sentence view.
//!
//! Every produced-surface operation flows through [`update`]; the only
//! side effects are the returned [`Cmd`] values (timer scheduling and
//! the lookup notification). Host mutations (text, rendered markup,
//! selection, read-only) happen synchronously inside the handlers.

use crate::commands::Cmd;
use crate::host::TextHost;
use crate::markup;
use crate::messages::{Direction, KeyDisposition, KeyPress, Msg};
use crate::view::SentenceView;

/// Handle a message against the view
pub fn update<H: TextHost>(view: &mut SentenceView<H>, msg: Msg) -> Cmd {
    match msg {
        Msg::SetSimpleView(enabled) => set_simple_view(view, enabled),
        Msg::SetText(text) => set_text(view, text, false),
        Msg::SetPlainText(text) => set_text(view, text, true),
        Msg::Step(direction) => step(view, direction),
        Msg::Bold(word) => bold(view, &word),
        Msg::Unbold => unbold(view),
        Msg::LookupElapsed { revision } => lookup_elapsed(view, revision),
    }
}

/// Key interception hook: call before the host widget's default key
/// handling. In simple view the arrow keys are always consumed, even
/// when stepping is a no-op, so they never reach the host's own cursor
/// movement. Everything else passes through.
pub fn intercept_key<H: TextHost>(view: &SentenceView<H>, key: KeyPress) -> KeyDisposition {
    if !view.is_simple_view() {
        return KeyDisposition::PassThrough;
    }
    match key {
        KeyPress::ArrowLeft => KeyDisposition::Consumed(Msg::Step(Direction::Left)),
        KeyPress::ArrowRight => KeyDisposition::Consumed(Msg::Step(Direction::Right)),
        KeyPress::Other => KeyDisposition::PassThrough,
    }
}

/// Enable or disable simple view.
///
/// Enabling snapshots the host's text as the buffer and derives the
/// navigation state; disabling restores the plain buffer into the host
/// and discards the derived state. Both directions stop any pending
/// lookup; enabling schedules a fresh one when a word is selected.
fn set_simple_view<H: TextHost>(view: &mut SentenceView<H>, enabled: bool) -> Cmd {
    tracing::debug!("simple view {}", if enabled { "on" } else { "off" });

    if enabled {
        view.sync_from_host();
        view.set_simple_view_flag(true);
        view.host_mut().set_read_only(true);
        rederive_and_schedule(view)
    } else {
        view.set_simple_view_flag(false);
        view.clear_derived_state();
        view.bump_revision();
        let text = view.buffer().to_string();
        let host = view.host_mut();
        host.set_read_only(false);
        host.set_plain_text(&text);
        host.clear_selection();
        Cmd::CancelLookup
    }
}

/// Replace the buffer. In simple view this rederives the whole
/// navigation state; otherwise the text goes straight to the host
/// (plain or rich path).
fn set_text<H: TextHost>(view: &mut SentenceView<H>, text: String, plain: bool) -> Cmd {
    view.set_buffer(text);
    if view.is_simple_view() {
        return rederive_and_schedule(view);
    }
    let text = view.buffer().to_string();
    if plain {
        view.host_mut().set_plain_text(&text);
    } else {
        view.host_mut().set_text(&text);
    }
    Cmd::None
}

/// Step the current word. The pointer clamps at both ends and never
/// regresses to "no word" once the word list is non-empty; a clamped
/// step consumes the key but leaves display and timer alone.
fn step<H: TextHost>(view: &mut SentenceView<H>, direction: Direction) -> Cmd {
    if !view.is_simple_view() {
        return Cmd::None;
    }
    let count = view.word_count();
    let Some(current) = view.current_word() else {
        // Empty word list: the key is consumed upstream, nothing to do
        return Cmd::None;
    };

    let next = match direction {
        Direction::Left => current.saturating_sub(1),
        Direction::Right => (current + 1).min(count - 1),
    };
    if next == current {
        tracing::trace!("step {:?} clamped at {}", direction, current);
        return Cmd::None;
    }

    view.set_current_word(next);
    view.apply_display();
    let revision = view.bump_revision();
    tracing::debug!("step {:?}: word {} -> {} (rev {})", direction, current, next, revision);
    Cmd::ScheduleLookup {
        revision,
        delay_ms: view.config().lookup_delay_ms,
    }
}

/// The debounce timer expired. Emits the current word only when the
/// firing's revision is still current; a schedule superseded by later
/// navigation or a text replacement is silently discarded.
fn lookup_elapsed<H: TextHost>(view: &mut SentenceView<H>, revision: u64) -> Cmd {
    if !view.is_simple_view() {
        return Cmd::None;
    }
    if revision != view.revision() {
        tracing::debug!(
            "discarding stale lookup: view rev {} != timer rev {}",
            view.revision(),
            revision
        );
        return Cmd::None;
    }
    let Some(token) = view.current_token() else {
        return Cmd::None;
    };
    let word = token.word();
    if word.is_empty() {
        return Cmd::None;
    }
    tracing::debug!("emitting lookup for {:?}", word);
    Cmd::EmitLookup(word.into_owned())
}

/// Wrap every whole-word occurrence of `word` in marker delimiters and
/// move the host cursor just past the last one. No-op in simple view,
/// and when `word` does not occur.
fn bold<H: TextHost>(view: &mut SentenceView<H>, word: &str) -> Cmd {
    if view.is_simple_view() {
        return Cmd::None;
    }
    tracing::debug!("bolding {:?}", word);
    view.sync_from_host();
    if let Some((bolded, cursor)) = markup::bold_word(view.buffer(), word) {
        view.set_buffer(bolded);
        let text = view.buffer().to_string();
        view.host_mut().set_plain_text(&text);
        view.host_mut().set_cursor(cursor);
    }
    Cmd::None
}

/// Strip all marker delimiters from the buffer. No-op in simple view.
fn unbold<H: TextHost>(view: &mut SentenceView<H>) -> Cmd {
    if view.is_simple_view() {
        return Cmd::None;
    }
    view.sync_from_host();
    let stripped = markup::strip_markers(view.buffer());
    view.set_buffer(stripped);
    let text = view.buffer().to_string();
    view.host_mut().set_plain_text(&text);
    Cmd::None
}

/// Rederive navigation state from the buffer (text replaced or simple
/// view just enabled) and restart or stop the lookup timer accordingly.
fn rederive_and_schedule<H: TextHost>(view: &mut SentenceView<H>) -> Cmd {
    let has_word = view.rederive();
    let revision = view.bump_revision();
    if has_word {
        Cmd::ScheduleLookup {
            revision,
            delay_ms: view.config().lookup_delay_ms,
        }
    } else {
        Cmd::CancelLookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StringHost;

    fn simple_view(text: &str) -> SentenceView<StringHost> {
        let mut view = SentenceView::new(StringHost::from_text(text));
        update(&mut view, Msg::SetSimpleView(true));
        view
    }

    #[test]
    fn test_enable_simple_view_selects_first_word() {
        let mut view = SentenceView::new(StringHost::from_text("a b c"));
        let cmd = update(&mut view, Msg::SetSimpleView(true));
        assert_eq!(view.current_word(), Some(0));
        assert!(view.host().is_read_only());
        assert_eq!(cmd.scheduled_revision(), Some(view.revision()));
    }

    #[test]
    fn test_enable_simple_view_on_empty_text() {
        let mut view = SentenceView::new(StringHost::new());
        let cmd = update(&mut view, Msg::SetSimpleView(true));
        assert_eq!(view.current_word(), None);
        assert_eq!(cmd, Cmd::CancelLookup);
    }

    #[test]
    fn test_disable_simple_view_restores_plain_text() {
        let mut view = simple_view("the __cat__ sat");
        let cmd = update(&mut view, Msg::SetSimpleView(false));
        assert_eq!(cmd, Cmd::CancelLookup);
        assert!(!view.host().is_read_only());
        assert_eq!(view.host().plain_text(), "the __cat__ sat");
        assert_eq!(view.host().selection(), None);
        assert_eq!(view.current_word(), None);
    }

    #[test]
    fn test_step_right_advances_and_schedules() {
        let mut view = simple_view("a b c");
        let cmd = update(&mut view, Msg::Step(Direction::Right));
        assert_eq!(view.current_word(), Some(1));
        assert_eq!(cmd.scheduled_revision(), Some(view.revision()));
    }

    #[test]
    fn test_step_right_clamps_at_last_word() {
        let mut view = simple_view("a b");
        update(&mut view, Msg::Step(Direction::Right));
        let rev = view.revision();
        let cmd = update(&mut view, Msg::Step(Direction::Right));
        assert_eq!(view.current_word(), Some(1));
        assert_eq!(view.revision(), rev, "clamped step must not bump revision");
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_step_left_clamps_at_first_word() {
        let mut view = simple_view("a b");
        let cmd = update(&mut view, Msg::Step(Direction::Left));
        assert_eq!(view.current_word(), Some(0), "pointer never regresses to none");
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_step_with_no_words_is_noop() {
        let mut view = simple_view("...");
        let cmd = update(&mut view, Msg::Step(Direction::Right));
        assert_eq!(view.current_word(), None);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_step_outside_simple_view_is_noop() {
        let mut view = SentenceView::new(StringHost::from_text("a b"));
        let cmd = update(&mut view, Msg::Step(Direction::Right));
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_set_text_in_simple_view_rederives() {
        let mut view = simple_view("a b c");
        update(&mut view, Msg::Step(Direction::Right));
        let cmd = update(&mut view, Msg::SetText("new words here".to_string()));
        assert_eq!(view.current_word(), Some(0));
        assert_eq!(view.word_count(), 3);
        assert_eq!(cmd.scheduled_revision(), Some(view.revision()));
    }

    #[test]
    fn test_set_plain_text_outside_simple_view_goes_to_host() {
        let mut view = SentenceView::new(StringHost::new());
        let cmd = update(&mut view, Msg::SetPlainText("hello".to_string()));
        assert_eq!(cmd, Cmd::None);
        assert_eq!(view.host().plain_text(), "hello");
    }

    #[test]
    fn test_lookup_elapsed_emits_current_word() {
        let mut view = simple_view("the __cat__ sat");
        let cmd = update(&mut view, Msg::Step(Direction::Right));
        let revision = cmd.scheduled_revision().unwrap();
        let emitted = update(&mut view, Msg::LookupElapsed { revision });
        assert_eq!(emitted, Cmd::EmitLookup("cat".to_string()));
    }

    #[test]
    fn test_lookup_elapsed_stale_revision_discarded() {
        let mut view = simple_view("a b c");
        let first = update(&mut view, Msg::Step(Direction::Right));
        let stale = first.scheduled_revision().unwrap();
        update(&mut view, Msg::Step(Direction::Right));
        let cmd = update(&mut view, Msg::LookupElapsed { revision: stale });
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn test_lookup_elapsed_after_leaving_simple_view() {
        let mut view = simple_view("a b");
        let cmd = update(&mut view, Msg::Step(Direction::Right));
        let revision = cmd.scheduled_revision().unwrap();
        update(&mut view, Msg::SetSimpleView(false));
        let emitted = update(&mut view, Msg::LookupElapsed { revision });
        assert_eq!(emitted, Cmd::None);
    }

    #[test]
    fn test_bold_in_free_edit() {
        let mut view = SentenceView::new(StringHost::from_text("the cat sat"));
        update(&mut view, Msg::Bold("cat".to_string()));
        assert_eq!(view.host().plain_text(), "the __cat__ sat");
        assert_eq!(view.host().cursor(), 9);
    }

    #[test]
    fn test_bold_no_match_leaves_host_alone() {
        let mut view = SentenceView::new(StringHost::from_text("the cat sat"));
        view.host_mut().set_cursor(2);
        update(&mut view, Msg::Bold("dog".to_string()));
        assert_eq!(view.host().plain_text(), "the cat sat");
        assert_eq!(view.host().cursor(), 2);
    }

    #[test]
    fn test_bold_blocked_in_simple_view() {
        let mut view = simple_view("the cat sat");
        update(&mut view, Msg::Bold("cat".to_string()));
        assert_eq!(view.text(), "the cat sat");
    }

    #[test]
    fn test_unbold_in_free_edit() {
        let mut view = SentenceView::new(StringHost::from_text("the __cat__ sat"));
        update(&mut view, Msg::Unbold);
        assert_eq!(view.host().plain_text(), "the cat sat");
    }

    #[test]
    fn test_unbold_blocked_in_simple_view() {
        let mut view = simple_view("the __cat__ sat");
        update(&mut view, Msg::Unbold);
        assert_eq!(view.text(), "the __cat__ sat");
    }

    #[test]
    fn test_intercept_key_in_simple_view() {
        let view = simple_view("a b");
        assert_eq!(
            intercept_key(&view, KeyPress::ArrowRight),
            KeyDisposition::Consumed(Msg::Step(Direction::Right))
        );
        assert_eq!(
            intercept_key(&view, KeyPress::ArrowLeft),
            KeyDisposition::Consumed(Msg::Step(Direction::Left))
        );
        assert_eq!(
            intercept_key(&view, KeyPress::Other),
            KeyDisposition::PassThrough
        );
    }

    #[test]
    fn test_intercept_key_consumes_even_without_words() {
        let view = simple_view("...");
        assert!(matches!(
            intercept_key(&view, KeyPress::ArrowRight),
            KeyDisposition::Consumed(_)
        ));
    }

    #[test]
    fn test_intercept_key_outside_simple_view() {
        let view = SentenceView::new(StringHost::from_text("a b"));
        assert_eq!(
            intercept_key(&view, KeyPress::ArrowRight),
            KeyDisposition::PassThrough
        );
    }
}
