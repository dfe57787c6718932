//! Engine behavior over hand-built bundles: the scanner is fully
//! data-driven, so small synthetic tables can pin down the paths that the
//! built-in rules exercise only incidentally — lookahead completion with
//! set and unset slots, begin-of-input handling, the forced-advance
//! fallback, and end-of-text acceptance.

use rbbi::provider::{RuleBreakData, RuleDataError, RuleStateTable};
use rbbi::{CodePointTrie, Cursor, RuleBreakIterator, StrCursor, TrieData, TrieType};
use zerovec::ZeroVec;

/// Categories: 0 error, 1 end of input, 2 begin of input, then one each for
/// 'a', 'b', 'c'. Every other code point resolves to the error category.
const COUNT: u16 = 6;
const ROW: usize = 3 + COUNT as usize;

fn ascii_trie() -> CodePointTrie<'static> {
    let mut index = vec![0u16; 1024];
    index[1] = 64;
    let mut data = vec![0u16; 128];
    for (byte, category) in [(b'a', 3u16), (b'b', 4), (b'c', 5)] {
        data[64 + byte as usize - 0x40] = category;
    }
    data.push(0); // high value
    data.push(0); // error value
    CodePointTrie::from_parts(
        TrieType::Fast,
        0x10000,
        ZeroVec::alloc_from_slice(&index),
        TrieData::Bits16(ZeroVec::alloc_from_slice(&data)),
    )
}

/// Rows are `[accepting, lookahead, tag, next(err), next(eot), next(bof),
/// next(a), next(b), next(c)]`.
fn table(rows: &[[u16; ROW]], bof_required: bool, lookahead_results_size: u16) -> RuleStateTable<'static> {
    RuleStateTable {
        bof_required,
        lookahead_hard_break: false,
        dict_categories_start: COUNT,
        lookahead_results_size,
        category_count: COUNT,
        cells: ZeroVec::alloc_from_slice(&rows.concat()),
    }
}

/// A reverse table that stops after one code point: every position is a
/// safe restart point for these rule sets.
fn stop_everywhere_reverse() -> RuleStateTable<'static> {
    table(
        &[[0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0, 0, 0, 0]],
        false,
        0,
    )
}

fn bundle(forward: RuleStateTable<'static>) -> RuleBreakData<'static> {
    let data = RuleBreakData {
        forward_table: forward,
        reverse_table: stop_everywhere_reverse(),
        property_table: ascii_trie(),
        category_count: COUNT,
        statuses: ZeroVec::alloc_from_slice(&[0, 10, 20]),
    };
    data.validate().unwrap();
    data
}

#[test]
fn accept_each_code_point() {
    // Start moves to an accepting state on any letter, which then stops.
    let data = bundle(table(
        &[
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 2, 2, 2],
            [1, 0, 1, 0, 0, 0, 0, 0, 0],
        ],
        false,
        0,
    ));
    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("abc"));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.rule_status(), 1);
    assert_eq!(it.rule_status_value(), 10);
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next(), Some(3));
    assert_eq!(it.next(), None);

    assert_eq!(it.previous(), Some(2));
    assert_eq!(it.previous(), Some(1));
    assert_eq!(it.previous(), Some(0));
    assert_eq!(it.previous(), None);
}

#[test]
fn lookahead_completion() {
    // The rule `ab / c`: the position after "ab" is recorded while scanning
    // and reported only once "c" confirms it.
    let rows = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 2, 0, 0],
        [1, 0, 1, 0, 0, 0, 0, 3, 0],
        [0, 2, 0, 0, 0, 0, 0, 0, 4],
        [2, 0, 2, 0, 0, 0, 0, 0, 0],
    ];
    let data = bundle(table(&rows, false, 3));

    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("abc"));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.rule_status(), 2);
    assert_eq!(it.cursor().unwrap().position(), 2);

    // Without the confirming "c" the scan falls back to the last
    // unconditional acceptance, after "a".
    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("abx"));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.rule_status(), 1);
}

#[test]
fn lookahead_unset_slot_is_ignored() {
    // The completion row is reachable without passing the recording row;
    // the empty slot must not produce a break.
    let rows = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 2, 0, 4],
        [1, 0, 1, 0, 0, 0, 0, 3, 0],
        [0, 2, 0, 0, 0, 0, 0, 0, 4],
        [2, 0, 2, 0, 0, 0, 0, 0, 0],
    ];
    let data = bundle(table(&rows, false, 3));
    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("c"));
    // No acceptance at all, so the engine forces a one-code-point advance.
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.rule_status(), 0);
}

#[test]
fn begin_of_input_acceptance_is_not_recorded() {
    // The state entered on the synthetic begin-of-input category accepts,
    // but an acceptance before any text must not produce a break: with no
    // further match the engine takes the forced-advance path (status 0)
    // rather than reporting the accepting row's tag.
    let rows = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 2, 0, 0, 0],
        [1, 0, 2, 0, 0, 0, 0, 0, 0],
    ];
    let data = bundle(table(&rows, true, 0));
    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("a"));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.rule_status(), 0);
}

#[test]
fn forced_advance_consumes_one_code_point() {
    // Rules that never accept still make progress, one code point at a
    // time, resetting the status.
    let data = bundle(table(
        &[[0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0, 0, 0, 0]],
        false,
        0,
    ));
    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("ab"));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.rule_status(), 0);
    assert_eq!(it.cursor().unwrap().position(), 1);
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next(), None);
    assert_eq!(it.cursor().unwrap().position(), 2);
}

#[test]
fn end_of_text_acceptance() {
    // Acceptance can happen on the synthetic end-of-input category; the
    // recorded position is the end of text.
    let rows = [
        [0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 2, 0, 0],
        [0, 0, 0, 0, 3, 0, 2, 0, 0],
        [1, 0, 1, 0, 0, 0, 0, 0, 0],
    ];
    let data = bundle(table(&rows, false, 0));
    let mut it = RuleBreakIterator::from_data(&data);
    it.set_cursor(StrCursor::new("aaa"));
    assert_eq!(it.next(), Some(3));
    assert_eq!(it.rule_status(), 1);
    assert_eq!(it.next(), None);
}

#[test]
fn unbound_engine_is_inert() {
    let data = bundle(table(
        &[[0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0, 0, 0, 0]],
        false,
        0,
    ));
    let mut it: RuleBreakIterator<'_, StrCursor<'_>> = RuleBreakIterator::from_data(&data);
    assert_eq!(it.next(), None);
    assert_eq!(it.previous(), None);
    assert!(it.take_cursor().is_none());
}

#[test]
fn validation_rejects_bad_tables() {
    // An accepting id outside the scratch array.
    let data = RuleBreakData {
        forward_table: table(
            &[[0, 0, 0, 0, 0, 0, 0, 0, 0], [5, 0, 0, 0, 0, 0, 0, 0, 0]],
            false,
            3,
        ),
        reverse_table: stop_everywhere_reverse(),
        property_table: ascii_trie(),
        category_count: COUNT,
        statuses: ZeroVec::alloc_from_slice(&[0]),
    };
    assert!(matches!(
        data.validate(),
        Err(RuleDataError::LookaheadOutOfRange { state: 1, id: 5, size: 3 })
    ));

    // A transition target past the last state.
    let data = RuleBreakData {
        forward_table: table(
            &[[0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0, 9, 0, 0]],
            false,
            0,
        ),
        reverse_table: stop_everywhere_reverse(),
        property_table: ascii_trie(),
        category_count: COUNT,
        statuses: ZeroVec::alloc_from_slice(&[0]),
    };
    assert!(matches!(
        data.validate(),
        Err(RuleDataError::StateOutOfRange { state: 1, next: 9 })
    ));

    // A table with no start state.
    let data = RuleBreakData {
        forward_table: table(&[[0, 0, 0, 0, 0, 0, 0, 0, 0]], false, 0),
        reverse_table: stop_everywhere_reverse(),
        property_table: ascii_trie(),
        category_count: COUNT,
        statuses: ZeroVec::alloc_from_slice(&[0]),
    };
    assert!(matches!(data.validate(), Err(RuleDataError::MissingStartState)));

    // Cell storage that is not a whole number of rows.
    let data = RuleBreakData {
        forward_table: RuleStateTable {
            bof_required: false,
            lookahead_hard_break: false,
            dict_categories_start: COUNT,
            lookahead_results_size: 0,
            category_count: COUNT,
            cells: ZeroVec::alloc_from_slice(&[0u16; 10]),
        },
        reverse_table: stop_everywhere_reverse(),
        property_table: ascii_trie(),
        category_count: COUNT,
        statuses: ZeroVec::alloc_from_slice(&[0]),
    };
    assert!(matches!(data.validate(), Err(RuleDataError::RowGeometry { .. })));
}
