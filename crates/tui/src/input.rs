//! Single-line text input used by the forms and the edit modal.

/// An editable line of text with a cursor and an optional length cap.
///
/// The cursor is a byte offset that always sits on a char boundary.
/// Characters typed past the cap are dropped.
///
/// # Examples
///
/// ```
/// use quadro_tui::input::TextInput;
///
/// let mut input = TextInput::with_max_chars(3);
/// for ch in "ação".chars() {
///     input.insert_char(ch);
/// }
/// assert_eq!(input.value(), "açã");
///
/// input.backspace();
/// assert_eq!(input.value(), "aç");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    max_chars: Option<usize>,
}

impl TextInput {
    /// Creates an empty, uncapped input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty input that accepts at most `max` characters.
    #[must_use]
    pub fn with_max_chars(max: usize) -> Self {
        Self {
            max_chars: Some(max),
            ..Self::default()
        }
    }

    /// Replaces the content, placing the cursor at the end.
    ///
    /// The cap is not applied, so an existing value is never cut short.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.len();
        self
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the length cap, if any.
    #[must_use]
    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Returns the text before the cursor.
    #[must_use]
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.cursor]
    }

    /// Returns `true` if the input holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Inserts a character at the cursor, unless the cap is reached.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(max) = self.max_chars
            && self.value.chars().count() >= max
        {
            return;
        }
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    /// Empties the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}
