use std::collections::HashSet;

/// Separator characters used by `SeparatorSet::default()`.
/// Whitespace, punctuation and quotes.
const DEFAULT_SEPARATORS: &str = " \t\n\r\"_/@#$%^&*()+=`~><;:,-.!?[]'";

/// SeparatorSet
/// The fixed set of characters that delimit terms.
/// Built once when the pipeline is configured and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

impl SeparatorSet {
    /// Build a separator set from every char of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        SeparatorSet {
            chars: chars.chars().collect(),
        }
    }

    /// Whether `c` is a separator.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Tokenize `text` into maximal word/separator runs.
    ///
    /// The iterator is lazy and borrows both the text and this set, so it can
    /// be recreated as often as needed.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            pos: 0,
            separators: self,
        }
    }
}

/// A maximal run of characters, classified by the separator set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Maximal run of non-separator characters.
    Word(&'a str),
    /// Maximal run of separator characters.
    Separator(&'a str),
}

impl<'a> Token<'a> {
    /// The underlying text of the run.
    #[inline]
    pub fn text(&self) -> &'a str {
        match self {
            Token::Word(s) | Token::Separator(s) => s,
        }
    }
}

/// Iterator over the word/separator runs of a text.
///
/// Yields non-empty runs left-to-right with no lookahead past the end of the
/// text; concatenating every run reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let is_sep = self.separators.contains(first);

        // Extend the run until the classification flips or the text ends.
        let mut end = rest.len();
        for (idx, c) in chars {
            if self.separators.contains(c) != is_sep {
                end = idx;
                break;
            }
        }
        let run = &rest[..end];
        self.pos += end;
        Some(if is_sep {
            Token::Separator(run)
        } else {
            Token::Word(run)
        })
    }
}
