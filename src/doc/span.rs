//! Sentence spans, derived on demand from token flags.

use crate::doc::Token;

/// A half-open token range `[start, end)` over a document.
///
/// Spans borrow the token slice; they are never stored, only recomputed from
/// the `is_sent_start` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    tokens: &'a [Token],
    start: usize,
    end: usize,
}

impl<'a> Span<'a> {
    pub(crate) fn new(tokens: &'a [Token], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= tokens.len());
        Self { tokens, start, end }
    }

    /// Index of the first token.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index one past the last token.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Checks if the span has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The tokens in this span.
    pub fn tokens(&self) -> &'a [Token] {
        &self.tokens[self.start..self.end]
    }

    /// The token texts in this span.
    pub fn texts(&self) -> Vec<&'a str> {
        self.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    /// Span text, without the trailing space of the last token.
    pub fn text(&self) -> String {
        let tokens = self.tokens();
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            out.push_str(&token.text);
            if token.whitespace && i + 1 < tokens.len() {
                out.push(' ');
            }
        }
        out
    }
}

/// Lazy iterator over the sentences of a token sequence.
///
/// A sentence begins at index 0 and at every later token flagged as a
/// sentence start; it ends where the next one begins.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Sentences<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.tokens.len() {
            return None;
        }

        let start = self.pos;
        let end = self.tokens[start + 1..]
            .iter()
            .position(Token::is_sent_start)
            .map_or(self.tokens.len(), |offset| start + 1 + offset);

        self.pos = end;
        Some(Span::new(self.tokens, start, end))
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str], starts: &[usize]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let mut token = Token::new(*w, i, 0).with_whitespace(true);
                if starts.contains(&i) {
                    token.set_sent_start(true);
                }
                token
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(Sentences::new(&[]).count(), 0);
    }

    #[test]
    fn test_no_flags_is_one_sentence() {
        let toks = tokens(&["a", "b", "c"], &[]);
        let spans: Vec<_> = Sentences::new(&toks).collect();
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start(), spans[0].end()), (0, 3));
    }

    #[test]
    fn test_split_on_flags() {
        let toks = tokens(&["a", ".", "b", ".", "c"], &[0, 2, 4]);
        let spans: Vec<_> = Sentences::new(&toks).collect();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].texts(), vec!["a", "."]);
        assert_eq!(spans[1].texts(), vec!["b", "."]);
        assert_eq!(spans[2].texts(), vec!["c"]);
    }

    #[test]
    fn test_span_text_drops_trailing_space() {
        let toks = tokens(&["Hello", "world"], &[]);
        let span = Sentences::new(&toks).next().unwrap();
        assert_eq!(span.text(), "Hello world");
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
    }
}
