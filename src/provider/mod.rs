//! Break data bundles consumed by the rule engine.
//!
//! A [`RuleBreakData`] bundle carries everything one break kind needs:
//! a forward state table, a reverse ("safe") state table, the shared code
//! point trie mapping code points to category columns, and a small
//! rule-status table. Bundles are immutable; engines borrow them for their
//! whole lifetime and the built-in bundles live in process-wide statics.
//!
//! State-table rows may be compiled with 8- or 16-bit entries on disk; in
//! memory both forms are unified to `u16` when the bundle is assembled, so
//! the engine sees a single row shape.

#[cfg(feature = "compiled_data")]
pub(crate) mod baked;

use crate::trie::CodePointTrie;
use displaydoc::Display;
use zerovec::ZeroVec;

/// The stop state: transitioning here ends a scan.
pub const STATE_STOP: u16 = 0;
/// The start state of every state table.
pub const STATE_START: u16 = 1;

/// `accepting` value marking an unconditional accept.
pub const ACCEPTING_UNCONDITIONAL: u16 = 1;

/// Category reserved for out-of-range and ill-formed code points.
pub const CATEGORY_ERROR: u16 = 0;
/// Synthetic category fed to the state machine at end of input.
pub const CATEGORY_EOT: u16 = 1;
/// Synthetic category fed first when a table requires begin-of-input.
pub const CATEGORY_BOF: u16 = 2;

/// Number of `u16` cells preceding the transition targets in each row.
const ROW_HEADER_LEN: usize = 3;

/// Error produced by [`RuleBreakData::validate`] for a bundle that violates
/// the table invariants.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleDataError {
    /// state table holds {cells} cells, which is not a multiple of the row width {width}
    RowGeometry {
        /// Cells per row implied by the category count.
        width: usize,
        /// Cells actually present.
        cells: usize,
    },
    /// state table has no start state
    MissingStartState,
    /// row {state} transitions to out-of-range state {next}
    StateOutOfRange {
        /// Row holding the bad transition.
        state: u16,
        /// The out-of-range target.
        next: u16,
    },
    /// row {state} carries lookahead id {id} outside the scratch array (size {size})
    LookaheadOutOfRange {
        /// Row holding the bad id.
        state: u16,
        /// The out-of-range accepting or lookahead id.
        id: u16,
        /// Declared scratch size.
        size: u16,
    },
    /// dictionary categories start at {start} but the table has {count} categories
    DictCategoriesOutOfRange {
        /// Declared first dictionary category.
        start: u16,
        /// Category count.
        count: u16,
    },
}

impl core::error::Error for RuleDataError {}

/// One row of a state table, viewed through [`RuleStateTable::row`].
/// Transition targets are read separately via [`RuleStateTable::next_state`].
#[derive(Debug, Clone, Copy)]
pub struct RuleRow {
    /// `0`: not accepting. `1`: unconditional accept. `>1`: a lookahead
    /// with this id completed; break at its saved position if one is set.
    pub accepting: u16,
    /// `0`: none. `>1`: this row sits at the `/` of a lookahead rule; save
    /// the current position under this id.
    pub lookahead: u16,
    /// Index into the bundle's rule-status table, recorded on accept.
    pub tag_index: u16,
}

/// A forward or reverse state table: flat row storage plus the flags the
/// engine consults while scanning.
#[derive(Debug, Clone)]
pub struct RuleStateTable<'data> {
    /// Whether a scan starts by feeding [`CATEGORY_BOF`] before any text.
    pub bof_required: bool,
    /// Legacy flag carried by compiled tables; never consulted.
    pub lookahead_hard_break: bool,
    /// First category index owned by a dictionary.
    pub dict_categories_start: u16,
    /// Size of the per-scan lookahead scratch array.
    pub lookahead_results_size: u16,
    /// Number of categories, and therefore of transition columns.
    pub category_count: u16,
    /// Row cells: `accepting, lookahead, tag_index, next_states[..]` per row.
    pub cells: ZeroVec<'data, u16>,
}

impl RuleStateTable<'_> {
    /// Cells per row.
    #[inline]
    fn row_len(&self) -> usize {
        ROW_HEADER_LEN + self.category_count as usize
    }

    /// Number of states in the table.
    pub fn state_count(&self) -> usize {
        self.cells.len() / self.row_len()
    }

    /// The row header for `state`. Out-of-range states resolve to an
    /// all-zero (stop-like) row rather than panicking; well-formed data
    /// never takes that path.
    pub fn row(&self, state: u16) -> RuleRow {
        let start = state as usize * self.row_len();
        debug_assert!(start + self.row_len() <= self.cells.len());
        RuleRow {
            accepting: self.cells.get(start).unwrap_or(0),
            lookahead: self.cells.get(start + 1).unwrap_or(0),
            tag_index: self.cells.get(start + 2).unwrap_or(0),
        }
    }

    /// Transition target from `state` on `category`, with the same
    /// stop-on-bad-data fallback as [`row`](Self::row).
    #[inline]
    pub fn next_state(&self, state: u16, category: u16) -> u16 {
        debug_assert!(category < self.category_count);
        let idx = state as usize * self.row_len() + ROW_HEADER_LEN + category as usize;
        self.cells.get(idx).unwrap_or(STATE_STOP)
    }

    fn validate(&self) -> Result<(), RuleDataError> {
        let cells = self.cells.len();
        if cells == 0 || cells % self.row_len() != 0 {
            return Err(RuleDataError::RowGeometry {
                width: self.row_len(),
                cells,
            });
        }
        let states = self.state_count() as u16;
        if states <= STATE_START {
            return Err(RuleDataError::MissingStartState);
        }
        if self.dict_categories_start > self.category_count {
            return Err(RuleDataError::DictCategoriesOutOfRange {
                start: self.dict_categories_start,
                count: self.category_count,
            });
        }
        for state in 0..states {
            let row = self.row(state);
            for id in [row.accepting, row.lookahead] {
                if id > ACCEPTING_UNCONDITIONAL && id >= self.lookahead_results_size {
                    return Err(RuleDataError::LookaheadOutOfRange {
                        state,
                        id,
                        size: self.lookahead_results_size,
                    });
                }
            }
            for category in 0..self.category_count {
                let next = self.next_state(state, category);
                if next >= states {
                    return Err(RuleDataError::StateOutOfRange { state, next });
                }
            }
        }
        Ok(())
    }
}

/// Pre-compiled break data for one break kind.
#[derive(Debug, Clone)]
pub struct RuleBreakData<'data> {
    /// Table driving [`next`](crate::RuleBreakIterator::next).
    pub forward_table: RuleStateTable<'data>,
    /// Safe table driving the restart scan of
    /// [`previous`](crate::RuleBreakIterator::previous).
    pub reverse_table: RuleStateTable<'data>,
    /// Code point → category map shared by both tables.
    pub property_table: CodePointTrie<'data>,
    /// Number of categories; bounds every transition row.
    pub category_count: u16,
    /// Rule-status values indexed by row tag. Index 0 is the neutral status.
    pub statuses: ZeroVec<'data, u32>,
}

impl RuleBreakData<'_> {
    /// Checks the invariants the engine relies on: row geometry, transition
    /// targets in range, lookahead ids inside the scratch array, and the
    /// dictionary category threshold.
    ///
    /// The engine itself only `debug_assert`s these on the hot path, so
    /// loaders of external bundles should validate once at materialization.
    pub fn validate(&self) -> Result<(), RuleDataError> {
        self.forward_table.validate()?;
        self.reverse_table.validate()?;
        Ok(())
    }
}
