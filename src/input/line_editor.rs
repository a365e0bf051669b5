use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the caller should do after the editor consumed a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Buffer or cursor may have changed, keep editing
    Editing,
    /// Enter pressed; trimmed buffer contents
    Submit(String),
    /// Esc pressed; drop the editor
    Cancel,
    /// Key means nothing to the editor
    Ignored,
}

/// Single-line text buffer with a cursor counted in chars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor holding `text` with the cursor at the end
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a printable character at the cursor. Control chars are dropped.
    pub fn insert(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let byte_index = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_index, ch);
        self.cursor += 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Back over whitespace, then over the word before it
    pub fn word_left(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor.min(chars.len());
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.cursor = pos;
    }

    /// Forward over whitespace, then over the next word
    pub fn word_right(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = self.cursor.min(chars.len());
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        self.cursor = pos;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_index = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_index);
        self.cursor -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let byte_index = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_index);
    }

    /// Remove the word before the cursor along with the whitespace around it.
    /// Text after the cursor is untouched.
    pub fn delete_word_backward(&mut self) {
        let split = char_to_byte_index(&self.text, self.cursor);
        let (before, after) = self.text.split_at(split);

        let before = before.trim_end();
        let before = before.trim_end_matches(|c: char| !c.is_whitespace());
        let before = before.trim_end();

        let kept = before.to_string();
        self.cursor = kept.chars().count();
        self.text = kept + after;
    }

    /// Buffer contents without surrounding whitespace
    pub fn submit(&self) -> String {
        self.text.trim().to_string()
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> EditOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return EditOutcome::Cancel,
            KeyCode::Enter => return EditOutcome::Submit(self.submit()),

            KeyCode::Left if ctrl || alt => self.word_left(),
            KeyCode::Right if ctrl || alt => self.word_right(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),

            KeyCode::Backspace if ctrl || alt => self.delete_word_backward(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),

            // Readline-style chords; Ctrl+C belongs to the exit protocol
            KeyCode::Char('w') if ctrl => self.delete_word_backward(),
            KeyCode::Char('a') if ctrl => self.move_home(),
            KeyCode::Char('e') if ctrl => self.move_end(),
            // Option+Left/Right on macOS arrive as Alt+b / Alt+f
            KeyCode::Char('b') if alt => self.word_left(),
            KeyCode::Char('f') if alt => self.word_right(),

            KeyCode::Char(c) if !ctrl && !alt => self.insert(c),
            _ => return EditOutcome::Ignored,
        }

        EditOutcome::Editing
    }
}

fn char_to_byte_index(text: &str, char_index: usize) -> usize {
    match text.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => text.len(),
    }
}
