use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;
use tui_textarea::TextArea;

/// Single-line query field backed by a textarea widget.
///
/// Enter never reaches the textarea, so the field cannot grow a second
/// line; `text` only ever reads the first one.
pub struct QueryInput {
    textarea: TextArea<'static>,
}

impl QueryInput {
    pub fn new(initial: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.insert_str(initial);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("type something...");
        textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
        Self { textarea }
    }

    pub fn text(&self) -> String {
        self.textarea.lines().first().cloned().unwrap_or_default()
    }

    /// Feeds a key into the textarea; true when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    pub fn set_block(&mut self, block: Block<'static>) {
        self.textarea.set_block(block);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn starts_with_the_initial_text() {
        let input = QueryInput::new("octocat");
        assert_eq!(input.text(), "octocat");
    }

    #[test]
    fn keys_edit_and_report_changes() {
        let mut input = QueryInput::new("ab");
        let changed = input.input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(changed);
        assert_eq!(input.text(), "abc");

        let changed = input.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(changed);
        assert_eq!(input.text(), "ab");

        // Navigation alone leaves the text untouched.
        let changed = input.input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert!(!changed);
    }

    #[test]
    fn clear_empties_the_field() {
        let mut input = QueryInput::new("octocat");
        input.clear();
        assert_eq!(input.text(), "");
    }
}
