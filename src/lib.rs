//! Rule-based break iteration for Unicode text.
//!
//! This crate locates boundary positions in text at four granularities —
//! grapheme cluster ("character"), word, sentence, and line break
//! opportunity — by executing precompiled deterministic state machines over
//! the stream of code points, the way the ICU break engine does. The rules
//! follow [Unicode Standard Annex #29][UAX29], _Unicode Text Segmentation_,
//! and [Unicode Standard Annex #14][UAX14], _Unicode Line Breaking
//! Algorithm_.
//!
//! Text reaches the engine through a [`Cursor`], a minimal bidirectional
//! code point iterator, so any backing store that can step over code points
//! and save/restore positions works: the built-in cursors cover `&str`
//! ([`StrCursor`]) and potentially ill-formed UTF-8 ([`Utf8Cursor`]).
//!
//! [UAX29]: https://www.unicode.org/reports/tr29/
//! [UAX14]: https://www.unicode.org/reports/tr14/
//!
//! # Examples
//!
//! Scanning and stepping back with an explicit cursor:
//!
//! ```rust
//! use rbbi::{RuleBreakIterator, StrCursor};
//!
//! let mut it = RuleBreakIterator::new_character();
//! it.set_cursor(StrCursor::new("a\u{0301}bc"));
//! assert_eq!(it.next(), Some(3));
//! assert_eq!(it.next(), Some(4));
//! assert_eq!(it.previous(), Some(3));
//! ```
//!
//! Collecting all boundaries of a string:
//!
//! ```rust
//! use rbbi::RuleBreakIterator;
//!
//! let breaks: Vec<usize> =
//!     RuleBreakIterator::new_word().segment_str("Hello World").collect();
//! assert_eq!(breaks, [5, 6, 11]);
//!
//! let breaks: Vec<usize> =
//!     RuleBreakIterator::new_sentence().segment_str("Hi. Bye.").collect();
//! assert_eq!(breaks, [4, 8]);
//!
//! let breaks: Vec<usize> =
//!     RuleBreakIterator::new_line().segment_str("Hello, world!").collect();
//! assert_eq!(breaks, [7, 13]);
//! ```
//!
//! Word boundaries carry a status that classifies the preceding segment:
//!
//! ```rust
//! use rbbi::{RuleBreakIterator, StrCursor, WordType};
//!
//! let mut it = RuleBreakIterator::new_word();
//! it.set_cursor(StrCursor::new("42 pears"));
//! assert_eq!(it.next(), Some(2));
//! assert_eq!(it.word_type(), WordType::Number);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod cursor;
pub mod provider;
mod rule_segmenter;
mod trie;

pub use crate::cursor::{Cursor, PositionError, StrCursor, Utf8Cursor};
pub use crate::rule_segmenter::{Breaks, RuleBreakIterator, WordType};
pub use crate::trie::{CodePointTrie, TrieData, TrieType, TrieValueWidth};
