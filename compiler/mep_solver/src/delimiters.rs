//! Delimiter pairs and the scanning primitives built on them.
//!
//! Every structural decision the engine makes (where an operand ends, where a
//! call's argument list closes, which commas separate arguments) comes down to
//! three scans over a `&[char]`:
//!
//! - [`Delimiters::matching_closer`]: forward from an opener to its closer.
//! - [`Delimiters::matching_opener`]: backward from a closer to its opener.
//! - [`Delimiters::top_level_commas`]: commas not nested in any pair.
//!
//! The first two never fail. An opener with no closer matches the end of the
//! text and a closer with no opener matches the start, which is what lets
//! `sum(3,4` evaluate like `sum(3,4)`.

/// The canonical grouping and call-argument opener.
pub const OPEN_PAREN: char = '(';
/// The canonical grouping and call-argument closer.
pub const CLOSE_PAREN: char = ')';
/// Argument separator inside a call.
pub const COMMA: char = ',';

/// Opener/closer pairs, parentheses always first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delimiters {
    pairs: Vec<(char, char)>,
}

impl Delimiters {
    /// Parentheses only.
    pub fn new() -> Self {
        Delimiters {
            pairs: vec![(OPEN_PAREN, CLOSE_PAREN)],
        }
    }

    /// Parentheses plus a domain's number wrappers.
    ///
    /// A wrapper reusing a character already taken by another pair is
    /// ignored, which keeps the opener→closer mapping bijective.
    pub fn with_wrappers(wrappers: impl IntoIterator<Item = (char, char)>) -> Self {
        let mut delimiters = Delimiters::new();
        for (open, close) in wrappers {
            if delimiters.is_delimiter(open) || delimiters.is_delimiter(close) || open == close {
                tracing::warn!(%open, %close, "ignoring number wrapper that reuses a delimiter");
                continue;
            }
            delimiters.pairs.push((open, close));
        }
        delimiters
    }

    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    pub fn is_opener(&self, c: char) -> bool {
        self.pairs.iter().any(|&(open, _)| open == c)
    }

    pub fn is_closer(&self, c: char) -> bool {
        self.pairs.iter().any(|&(_, close)| close == c)
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.is_opener(c) || self.is_closer(c)
    }

    /// Delimiters and the comma: characters that end an operand.
    pub fn is_separator(&self, c: char) -> bool {
        c == COMMA || self.is_delimiter(c)
    }

    pub fn closer_for(&self, open: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(o, _)| o == open)
            .map(|&(_, close)| close)
    }

    pub fn opener_for(&self, close: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|&&(_, c)| c == close)
            .map(|&(open, _)| open)
    }

    /// Index of the closer matching the opener at `open`.
    ///
    /// Only openers and closers of the same pair affect the count. Returns
    /// `text.len()` when the opener is never closed, or when `open` is not an
    /// opener at all.
    pub fn matching_closer(&self, text: &[char], open: usize) -> usize {
        let Some(closer) = text.get(open).and_then(|&c| self.closer_for(c)) else {
            return text.len();
        };
        let opener = text[open];
        let mut depth = 0usize;
        for (index, &c) in text.iter().enumerate().skip(open) {
            if c == opener {
                depth += 1;
            } else if c == closer {
                depth -= 1;
                if depth == 0 {
                    return index;
                }
            }
        }
        text.len()
    }

    /// Index of the opener matching the closer at `close`.
    ///
    /// Mirror image of [`matching_closer`](Self::matching_closer); returns `0`
    /// when no opener balances the closer.
    pub fn matching_opener(&self, text: &[char], close: usize) -> usize {
        let Some(opener) = text.get(close).and_then(|&c| self.opener_for(c)) else {
            return 0;
        };
        let closer = text[close];
        let mut depth = 0usize;
        for index in (0..=close).rev() {
            let c = text[index];
            if c == closer {
                depth += 1;
            } else if c == opener {
                depth -= 1;
                if depth == 0 {
                    return index;
                }
            }
        }
        0
    }

    /// Indices of commas that sit outside every delimiter pair.
    ///
    /// Depth is tracked per pair; a comma counts only when every pair is at
    /// depth zero. A pair whose depth went negative (a stray closer) keeps
    /// its commas out until it is balanced again.
    pub fn top_level_commas(&self, text: &[char]) -> Vec<usize> {
        let mut depths = vec![0isize; self.pairs.len()];
        let mut commas = Vec::new();
        for (index, &c) in text.iter().enumerate() {
            for (depth, &(open, close)) in depths.iter_mut().zip(&self.pairs) {
                if c == open {
                    *depth += 1;
                } else if c == close {
                    *depth -= 1;
                }
            }
            if c == COMMA && depths.iter().all(|&depth| depth == 0) {
                commas.push(index);
            }
        }
        commas
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters::new()
    }
}
