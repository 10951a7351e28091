//! Sentence tokenization and word-index derivation.
//!
//! The buffer is decomposed into a lossless token stream of four classes:
//! marked words (`__word__`), plain words, single punctuation characters,
//! and whitespace runs. Concatenating the tokens in order always
//! reproduces the buffer exactly, which is what keeps char offsets
//! computed over the token list valid against the host widget.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// One pattern per token class, leftmost-first so the marked-word form
/// wins over the plain-word form at the same position. Underscore is a
/// word character, so an unbalanced `__cat` degrades to a plain word
/// token rather than breaking losslessness.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<marked>__\w[\w']*__)|(?P<word>\w[\w']*)|(?P<ws>\s+)|(?P<punct>\S)")
        .expect("token pattern is valid")
});

/// Strips every marked span inside a token (`__cat__` -> `cat`) when
/// producing the lookup form of a word.
static MARKER_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.*?)__").expect("marker pattern is valid"));

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A word wrapped in `__` marker delimiters (bolded vocabulary)
    MarkedWord,
    /// A plain word (word characters, apostrophes allowed after the first)
    Word,
    /// A single non-word, non-whitespace character
    Punct,
    /// A run of whitespace
    Whitespace,
}

/// A single token of the sentence buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token
    pub text: String,
}

impl Token {
    /// Check whether this token counts as a word for navigation
    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::MarkedWord | TokenKind::Word)
    }

    /// The lookup form of the token: marker delimiters stripped,
    /// everything else unchanged.
    pub fn word(&self) -> Cow<'_, str> {
        MARKER_SPAN_RE.replace_all(&self.text, "$1")
    }

    /// Length in chars (host selection offsets are char offsets)
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// Decompose `text` into its token stream. Empty input yields an empty
/// stream. Lossless: the concatenation of the returned tokens is `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(text)
        .map(|caps| {
            let (kind, m) = if let Some(m) = caps.name("marked") {
                (TokenKind::MarkedWord, m)
            } else if let Some(m) = caps.name("word") {
                (TokenKind::Word, m)
            } else if let Some(m) = caps.name("ws") {
                (TokenKind::Whitespace, m)
            } else {
                (
                    TokenKind::Punct,
                    caps.name("punct").expect("one group always matches"),
                )
            };
            Token {
                kind,
                text: m.as_str().to_string(),
            }
        })
        .collect()
}

/// Token stream plus the positions of its word tokens, derived together
/// and replaced atomically whenever the buffer changes in simple view.
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    pub tokens: Vec<Token>,
    /// Indices into `tokens` identifying word tokens, strictly increasing
    pub word_indices: Vec<usize>,
}

impl TokenState {
    /// Tokenize `text` and classify the word subset
    pub fn derive(text: &str) -> Self {
        let tokens = tokenize(text);
        let word_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_word())
            .map(|(i, _)| i)
            .collect();
        Self {
            tokens,
            word_indices,
        }
    }

    /// Initial current-word pointer: the first word, or none at all
    pub fn initial_selection(&self) -> Option<usize> {
        if self.word_indices.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Number of navigable words
    pub fn word_count(&self) -> usize {
        self.word_indices.len()
    }

    /// Map a word-list position to its component index
    pub fn component_index(&self, selection: usize) -> Option<usize> {
        self.word_indices.get(selection).copied()
    }

    /// The word token at a word-list position
    pub fn word_at(&self, selection: usize) -> Option<&Token> {
        self.component_index(selection)
            .and_then(|i| self.tokens.get(i))
    }
}
