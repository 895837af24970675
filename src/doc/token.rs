//! Tokens.

use crate::text::LexFlags;

/// A token at a fixed position in a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Verbatim token text.
    pub text: String,
    /// Token index in the document.
    pub index: usize,
    /// Start position in the original text (byte offset).
    pub start: usize,
    /// Whether a single space follows the token in the original text.
    pub whitespace: bool,
    /// Normalized text (see [`Normalizer`](crate::text::Normalizer)).
    pub norm: String,
    /// Lexical flags.
    pub flags: LexFlags,
    is_sent_start: bool,
}

impl Token {
    /// Creates a new token. The norm defaults to the text and `is_stop` is
    /// unset until the token joins a document.
    pub fn new(text: impl Into<String>, index: usize, start: usize) -> Self {
        let text = text.into();
        Self {
            flags: LexFlags::of(&text),
            norm: text.clone(),
            text,
            index,
            start,
            whitespace: false,
            is_sent_start: false,
        }
    }

    /// Sets the trailing-whitespace flag.
    pub fn with_whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// End position in the original text (byte offset, exclusive).
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whether this token begins a sentence.
    #[inline]
    pub fn is_sent_start(&self) -> bool {
        self.is_sent_start
    }

    /// Token text followed by its trailing space, if any.
    pub fn text_with_ws(&self) -> String {
        if self.whitespace {
            format!("{} ", self.text)
        } else {
            self.text.clone()
        }
    }

    /// Whether the text begins with a newline.
    #[inline]
    pub fn starts_with_newline(&self) -> bool {
        self.text.starts_with('\n') || self.text.starts_with("\r\n")
    }

    #[inline]
    pub(crate) fn set_sent_start(&mut self, value: bool) {
        self.is_sent_start = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token() {
        let token = Token::new("Hello", 0, 0);
        assert_eq!(token.text, "Hello");
        assert_eq!(token.end(), 5);
        assert!(!token.is_sent_start());
        assert!(token.flags.is_alpha);
        assert!(!token.flags.is_lower);
    }

    #[test]
    fn test_text_with_ws() {
        let token = Token::new("is", 1, 5).with_whitespace(true);
        assert_eq!(token.text_with_ws(), "is ");
    }

    #[test]
    fn test_starts_with_newline() {
        assert!(Token::new("\n", 0, 0).starts_with_newline());
        assert!(Token::new("\n\n", 0, 0).starts_with_newline());
        assert!(Token::new("\r\n", 0, 0).starts_with_newline());
        assert!(!Token::new(" \n", 0, 0).starts_with_newline());
    }
}
