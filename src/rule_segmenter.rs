//! The rule-driven break scanner.
//!
//! [`RuleBreakIterator`] executes a precompiled state machine over the code
//! points delivered by a [`Cursor`]. Forward iteration ([`next`]) runs the
//! forward table: accepting rows record candidate break positions, lookahead
//! rows save and later confirm positions for rules of the form `A / B`, and
//! reaching the stop state reports the last recorded candidate. Backward
//! iteration ([`previous`]) first runs the reverse table to find a safe
//! restart point and then replays forward iteration from there.
//!
//! [`next`]: RuleBreakIterator::next
//! [`previous`]: RuleBreakIterator::previous

use crate::cursor::{Cursor, StrCursor};
use crate::provider::{
    RuleBreakData, ACCEPTING_UNCONDITIONAL, CATEGORY_BOF, CATEGORY_EOT, CATEGORY_ERROR,
    STATE_START, STATE_STOP,
};

/// Sentinel marking an empty lookahead scratch slot. Legitimate positions
/// are always strictly smaller: they come from a cursor over finite text.
const POSITION_UNSET: usize = usize::MAX;

/// Where the forward scan currently is relative to the user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunMode {
    /// Processing the synthetic begin-of-input category.
    Start,
    /// Inside the user text.
    Run,
    /// Processing the synthetic end-of-input category.
    End,
}

/// The status classification of a word boundary, derived from the rule
/// status of the row that produced it.
///
/// Only meaningful on an iterator built from word break data; other kinds
/// report [`WordType::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordType {
    /// The preceding segment is neither a number nor a word.
    None,
    /// The preceding segment is a number.
    Number,
    /// The preceding segment is a word, including kana and ideographs.
    Letter,
}

impl WordType {
    /// Whether the segment is word-like; word-like segments include numbers
    /// as well as segments made up of letters.
    pub fn is_word_like(self) -> bool {
        self != WordType::None
    }
}

/// A break iterator for one break kind, bound to at most one [`Cursor`] at a
/// time.
///
/// The iterator is cheap to keep around: the data bundle is borrowed and the
/// lookahead scratch array is allocated once at construction and reused by
/// every scan. It is not usable from multiple threads; the data bundle is.
///
/// # Examples
///
/// ```
/// use rbbi::{RuleBreakIterator, StrCursor};
///
/// let mut it = RuleBreakIterator::new_character();
/// it.set_cursor(StrCursor::new("a\u{0301}b"));
/// assert_eq!(it.next(), Some(3)); // 'a' plus combining acute
/// assert_eq!(it.next(), Some(4)); // 'b'
/// assert_eq!(it.next(), None);
/// assert_eq!(it.previous(), Some(3));
/// ```
#[derive(Debug)]
pub struct RuleBreakIterator<'data, C> {
    data: &'data RuleBreakData<'data>,
    cursor: Option<C>,
    /// One slot per lookahead id; cleared at the start of every forward scan.
    lookahead_matches: Vec<usize>,
    rule_status_index: u16,
    dictionary_char_count: usize,
}

#[cfg(feature = "compiled_data")]
impl<C: Cursor> RuleBreakIterator<'static, C> {
    /// A break iterator over extended grapheme clusters ("characters").
    ///
    /// ✨ *Enabled with the `compiled_data` Cargo feature.*
    pub fn new_character() -> Self {
        Self::from_data(crate::provider::baked::character())
    }

    /// A break iterator over word boundaries.
    ///
    /// ✨ *Enabled with the `compiled_data` Cargo feature.*
    pub fn new_word() -> Self {
        Self::from_data(crate::provider::baked::word())
    }

    /// A break iterator over sentence boundaries.
    ///
    /// ✨ *Enabled with the `compiled_data` Cargo feature.*
    pub fn new_sentence() -> Self {
        Self::from_data(crate::provider::baked::sentence())
    }

    /// A break iterator over line break opportunities (for word wrapping).
    ///
    /// ✨ *Enabled with the `compiled_data` Cargo feature.*
    pub fn new_line() -> Self {
        Self::from_data(crate::provider::baked::line())
    }
}

impl<'data, C: Cursor> RuleBreakIterator<'data, C> {
    /// A break iterator over an externally materialized data bundle.
    ///
    /// The bundle should have passed [`RuleBreakData::validate`]; the engine
    /// only `debug_assert`s the table invariants while scanning.
    pub fn from_data(data: &'data RuleBreakData<'data>) -> Self {
        Self {
            data,
            cursor: None,
            lookahead_matches: vec![
                POSITION_UNSET;
                data.forward_table.lookahead_results_size as usize
            ],
            rule_status_index: 0,
            dictionary_char_count: 0,
        }
    }

    /// Binds a new text source.
    ///
    /// The cursor is taken as-is: the next [`next`](Self::next) call scans
    /// from the cursor's current position, so callers wanting to iterate
    /// from the beginning of the text must hand over a cursor positioned
    /// there.
    pub fn set_cursor(&mut self, cursor: C) {
        self.cursor = Some(cursor);
        self.rule_status_index = 0;
        self.dictionary_char_count = 0;
    }

    /// The bound cursor, if any.
    pub fn cursor(&self) -> Option<&C> {
        self.cursor.as_ref()
    }

    /// Mutable access to the bound cursor, for repositioning between scans.
    pub fn cursor_mut(&mut self) -> Option<&mut C> {
        self.cursor.as_mut()
    }

    /// Releases the bound cursor.
    pub fn take_cursor(&mut self) -> Option<C> {
        self.cursor.take()
    }

    /// The tag index of the rule that produced the most recent break, or 0
    /// after a forced advance or before the first scan.
    pub fn rule_status(&self) -> u16 {
        self.rule_status_index
    }

    /// The rule-status value for the most recent break, resolved through the
    /// bundle's status table.
    pub fn rule_status_value(&self) -> u32 {
        self.data
            .statuses
            .get(self.rule_status_index as usize)
            .unwrap_or(0)
    }

    /// The word classification of the most recent break. [`WordType::None`]
    /// unless the iterator was built from word break data.
    pub fn word_type(&self) -> WordType {
        match self.rule_status_value() {
            100 => WordType::Number,
            200 | 300 | 400 => WordType::Letter,
            _ => WordType::None,
        }
    }

    /// Whether the most recent break ended a word-like segment.
    pub fn is_word_like(&self) -> bool {
        self.word_type().is_word_like()
    }

    /// Number of dictionary-category code points consumed by the most
    /// recent forward scan. Dictionary refinement itself is not performed;
    /// a nonzero count tells callers that a dictionary pass would apply.
    pub fn dictionary_char_count(&self) -> usize {
        self.dictionary_char_count
    }

    /// Scans forward to the next break strictly after the cursor's current
    /// position and leaves the cursor there.
    ///
    /// Returns `None` iff the cursor is already at the end of the text (or
    /// no cursor is bound); the cursor is left unchanged in that case.
    pub fn next(&mut self) -> Option<usize> {
        let data = self.data;
        let table = &data.forward_table;

        self.rule_status_index = 0;
        self.dictionary_char_count = 0;
        self.lookahead_matches.fill(POSITION_UNSET);

        let cursor = self.cursor.as_mut()?;
        let initial_position = cursor.position();
        let mut result = initial_position;

        // Grab the first code point up front; if there is none we are done
        // before the state machine starts.
        let mut c = cursor.next()?;
        let mut next_ok = true;

        let mut state = STATE_START;
        let (mut category, mut mode) = if table.bof_required {
            (CATEGORY_BOF, RunMode::Start)
        } else {
            (CATEGORY_ERROR, RunMode::Run)
        };

        loop {
            if !next_ok {
                if mode == RunMode::End {
                    // The synthetic end-of-input category has been processed;
                    // nothing further can match.
                    break;
                }
                mode = RunMode::End;
                category = CATEGORY_EOT;
            }

            if mode == RunMode::Run {
                // The category is the column index for the current code
                // point; synthetic begin/end steps keep their preset value.
                category = data.property_table.get(c as u32) as u16;
                if category >= table.dict_categories_start {
                    self.dictionary_char_count += 1;
                }
            }

            debug_assert!(category < table.category_count, "category out of range");
            if category >= table.category_count {
                category = CATEGORY_ERROR;
            }

            state = table.next_state(state, category);
            let row = table.row(state);

            if row.accepting == ACCEPTING_UNCONDITIONAL {
                // Match found, common case. An acceptance on the synthetic
                // begin-of-input step does not record a position.
                if mode != RunMode::Start {
                    result = cursor.position();
                }
                self.rule_status_index = row.tag_index;
            } else if row.accepting > ACCEPTING_UNCONDITIONAL {
                // A lookahead rule completed; break at its saved position.
                debug_assert!(
                    (row.accepting as usize) < self.lookahead_matches.len(),
                    "accepting id out of range"
                );
                if let Some(&saved) = self.lookahead_matches.get(row.accepting as usize) {
                    if saved != POSITION_UNSET {
                        self.rule_status_index = row.tag_index;
                        if cursor.set_position(saved).is_err() {
                            debug_assert!(false, "saved position no longer valid");
                            return None;
                        }
                        return Some(saved);
                    }
                }
            }

            // If this row is the '/' position of a lookahead rule, record
            // the current position to be returned if the full rule matches.
            let rule = row.lookahead;
            debug_assert!(
                rule == 0 || rule > ACCEPTING_UNCONDITIONAL,
                "lookahead id 1 is reserved"
            );
            if rule > ACCEPTING_UNCONDITIONAL {
                if let Some(slot) = self.lookahead_matches.get_mut(rule as usize) {
                    *slot = cursor.position();
                } else {
                    debug_assert!(false, "lookahead id out of range");
                }
            }

            if state == STATE_STOP {
                // Normal exit: no longer match is possible, no matter what
                // characters follow.
                break;
            }

            match mode {
                RunMode::Run => match cursor.next() {
                    Some(next_c) => c = next_c,
                    None => next_ok = false,
                },
                // The begin-of-input step does not consume input; the next
                // iteration processes the first real code point.
                RunMode::Start => mode = RunMode::Run,
                RunMode::End => {}
            }
        }

        if result == initial_position {
            // The rules failed to advance, which indicates a defect in them;
            // force progress by one code point.
            if cursor.set_position(initial_position).is_err() {
                debug_assert!(false, "initial position no longer valid");
                return None;
            }
            cursor.next()?;
            result = cursor.position();
            self.rule_status_index = 0;
        }

        if cursor.set_position(result).is_err() {
            debug_assert!(false, "result position no longer valid");
            return None;
        }
        Some(result)
    }

    /// Runs the reverse table from `from_position` and returns a safe
    /// restart point: a position from which forward scanning reproduces the
    /// break set of a scan from the beginning of the text.
    ///
    /// Returns `None` iff `from_position` is the start of the text.
    fn safe_previous(&mut self, from_position: usize) -> Option<usize> {
        let data = self.data;
        let table = &data.reverse_table;

        let cursor = self.cursor.as_mut()?;
        if cursor.set_position(from_position).is_err() {
            debug_assert!(false, "restart position no longer valid");
            return None;
        }

        let mut c = cursor.previous()?;
        let mut state = STATE_START;

        loop {
            let mut category = data.property_table.get(c as u32) as u16;
            debug_assert!(category < table.category_count, "category out of range");
            if category >= table.category_count {
                category = CATEGORY_ERROR;
            }

            state = table.next_state(state, category);
            if state == STATE_STOP {
                // Transition to the stop state means the position in front
                // of the last consumed code point is safe.
                break;
            }

            match cursor.previous() {
                Some(prev_c) => c = prev_c,
                // Start of text is trivially safe.
                None => break,
            }
        }

        Some(cursor.position())
    }

    /// Scans backward to the largest break strictly before the cursor's
    /// current position and leaves the cursor there.
    ///
    /// Returns `None` iff the cursor is already at the start of the text (or
    /// no cursor is bound); the cursor is left unchanged in that case.
    ///
    /// Internally this finds a safe restart point with the reverse table and
    /// replays [`next`](Self::next) from there, so no scanner state from a
    /// preceding forward scan survives the call.
    pub fn previous(&mut self) -> Option<usize> {
        let start_position = self.cursor.as_ref()?.position();
        let mut backtrace_start = start_position;
        let mut last_breakpoint: Option<usize> = None;

        while last_breakpoint.is_none() {
            let Some(new_start) = self.safe_previous(backtrace_start) else {
                if backtrace_start == start_position {
                    // The caller's position was the beginning of the text;
                    // the cursor has not moved.
                    return None;
                }
                // Scanning before the start of the text: the start itself is
                // the break.
                let cursor = self.cursor.as_mut()?;
                if cursor.set_position(backtrace_start).is_err() {
                    debug_assert!(false, "restart position no longer valid");
                    return None;
                }
                return Some(backtrace_start);
            };
            backtrace_start = new_start;

            // Replay forward from the safe point, remembering the last break
            // before the caller's position.
            loop {
                let Some(breakpoint) = self.next() else {
                    // The replay starts strictly before `start_position`,
                    // so the forward scan cannot run out of text first
                    // unless the data is inconsistent.
                    debug_assert!(false, "forward replay exhausted the text");
                    let best = last_breakpoint?;
                    self.cursor.as_mut()?.set_position(best).ok()?;
                    return Some(best);
                };
                let position = self.cursor.as_ref()?.position();
                if position >= start_position {
                    break;
                }
                last_breakpoint = Some(breakpoint);
            }
        }

        let last = last_breakpoint?;
        let cursor = self.cursor.as_mut()?;
        if cursor.set_position(last).is_err() {
            debug_assert!(false, "breakpoint position no longer valid");
            return None;
        }
        Some(last)
    }
}

impl<'data, 's> RuleBreakIterator<'data, StrCursor<'s>> {
    /// Consumes the iterator and yields every boundary of `text` in order.
    ///
    /// The boundaries are byte offsets strictly after 0, ending with
    /// `text.len()`; empty text yields nothing.
    pub fn segment_str(mut self, text: &'s str) -> Breaks<'data, 's> {
        self.set_cursor(StrCursor::new(text));
        Breaks { iter: self }
    }
}

/// Implements the [`Iterator`] trait over the boundaries of a string slice.
/// Obtained from [`RuleBreakIterator::segment_str`].
#[derive(Debug)]
pub struct Breaks<'data, 's> {
    iter: RuleBreakIterator<'data, StrCursor<'s>>,
}

impl Iterator for Breaks<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}
