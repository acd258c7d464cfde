//! Input field handling for the terminal user interface.

/// A single-line text input field with cursor position management.
///
/// This is the staging buffer for new tasks: the app submits its value to
/// the store and clears it only when the add succeeded.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        InputField::default()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        self.value.insert(self.byte_cursor(), c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Whether the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Reset the buffer after a successful submit.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    // Cursor is tracked in chars; convert for String operations.
    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_cursor_movement() {
        let mut field = InputField::new();
        for c in "read".chars() {
            field.handle_char(c);
        }
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_char('e');
        assert_eq!(field.value, "reead");
        field.move_cursor_right();
        field.handle_delete();
        assert_eq!(field.value, "reea");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = InputField::new();
        field.handle_backspace();
        assert_eq!(field.value, "");
        field.handle_char('x');
        field.move_cursor_left();
        field.handle_backspace();
        assert_eq!(field.value, "x");
    }

    #[test]
    fn test_blank_detection_and_clear() {
        let mut field = InputField::new();
        assert!(field.is_blank());
        field.handle_char(' ');
        field.handle_char(' ');
        assert!(field.is_blank());
        field.handle_char('a');
        assert!(!field.is_blank());
        field.clear();
        assert!(field.is_blank());
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_multibyte_input() {
        let mut field = InputField::new();
        field.handle_char('é');
        field.handle_char('!');
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "!");
    }
}
