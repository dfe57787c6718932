//! Break scenarios over the built-in data bundles, plus the universal
//! forward/backward properties every bundle has to satisfy.

#![cfg(feature = "compiled_data")]

use rbbi::{Cursor, RuleBreakIterator, StrCursor, Utf8Cursor, WordType};

fn forward_breaks<'s>(mut it: RuleBreakIterator<'static, StrCursor<'s>>, text: &'s str) -> Vec<usize> {
    it.set_cursor(StrCursor::new(text));
    let mut breaks = Vec::new();
    while let Some(p) = it.next() {
        breaks.push(p);
    }
    breaks
}

fn backward_breaks<'s>(mut it: RuleBreakIterator<'static, StrCursor<'s>>, text: &'s str) -> Vec<usize> {
    let mut cursor = StrCursor::new(text);
    cursor.set_position(text.len()).unwrap();
    it.set_cursor(cursor);
    let mut breaks = Vec::new();
    while let Some(p) = it.previous() {
        breaks.push(p);
    }
    breaks
}

/// Forward breaks are strictly increasing and end at the text length;
/// backward iteration visits the same positions (with the start of text in
/// place of the end) in reverse order.
fn assert_round_trip(make: fn() -> RuleBreakIterator<'static, StrCursor<'static>>, text: &'static str) {
    let forward = forward_breaks(make(), text);
    assert!(forward.windows(2).all(|w| w[0] < w[1]), "{forward:?} not increasing for {text:?}");
    let mut expected: Vec<usize> = forward.clone();
    if text.is_empty() {
        assert!(forward.is_empty());
    } else {
        assert_eq!(forward.last(), Some(&text.len()), "{forward:?} for {text:?}");
        expected.pop();
        expected.insert(0, 0);
        expected.reverse();
    }
    assert_eq!(backward_breaks(make(), text), expected, "backward mismatch for {text:?}");
}

#[test]
fn character_ascii() {
    let breaks = forward_breaks(RuleBreakIterator::new_character(), "abc");
    assert_eq!(breaks, [1, 2, 3]);
}

#[test]
fn character_previous_steps() {
    let mut it = RuleBreakIterator::new_character();
    let mut cursor = StrCursor::new("abc");
    cursor.set_position(3).unwrap();
    it.set_cursor(cursor);
    assert_eq!(it.previous(), Some(2));
    assert_eq!(it.previous(), Some(1));
    assert_eq!(it.previous(), Some(0));
    assert_eq!(it.previous(), None);
    // The failed call leaves the cursor where it was.
    assert_eq!(it.cursor().unwrap().position(), 0);
}

#[test]
fn character_combining_mark() {
    // 'a' + U+0301 form one cluster, then 'b'.
    let breaks = forward_breaks(RuleBreakIterator::new_character(), "a\u{0301}b");
    assert_eq!(breaks, [3, 4]);
}

#[test]
fn character_zwj_emoji() {
    // Family emoji: three pictographs joined by ZWJ form a single cluster.
    let text = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let breaks = forward_breaks(RuleBreakIterator::new_character(), text);
    assert_eq!(breaks, [text.len()]);
}

#[test]
fn character_flags() {
    // A regional indicator pair, then a tag-sequence flag.
    let text = "🇺🇸🏴\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}";
    let breaks = forward_breaks(RuleBreakIterator::new_character(), text);
    assert_eq!(breaks, [8, text.len()]);
}

#[test]
fn character_crlf() {
    let breaks = forward_breaks(RuleBreakIterator::new_character(), "a\r\nb");
    assert_eq!(breaks, [1, 3, 4]);
}

#[test]
fn character_hangul() {
    // Precomposed syllables.
    assert_eq!(forward_breaks(RuleBreakIterator::new_character(), "한글"), [3, 6]);
    // A conjoining jamo sequence L V T is one cluster.
    assert_eq!(
        forward_breaks(RuleBreakIterator::new_character(), "\u{1100}\u{1161}\u{11A8}"),
        [9]
    );
}

#[test]
fn character_empty_and_at_end() {
    let mut it = RuleBreakIterator::new_character();
    it.set_cursor(StrCursor::new(""));
    assert_eq!(it.next(), None);
    assert_eq!(it.previous(), None);

    let mut cursor = StrCursor::new("ab");
    cursor.set_position(2).unwrap();
    it.set_cursor(cursor);
    assert_eq!(it.next(), None);
    assert_eq!(it.cursor().unwrap().position(), 2);
}

#[test]
fn character_unassigned_code_points() {
    // Unassigned and private-use code points get the default category; the
    // break sequence still covers the whole text.
    let text = "\u{E000}a\u{10FFFD}b";
    assert_round_trip(RuleBreakIterator::new_character, text);
}

#[test]
fn word_scenario() {
    let breaks = forward_breaks(RuleBreakIterator::new_word(), "Hello, world!");
    assert_eq!(breaks, [5, 6, 7, 12, 13]);
}

#[test]
fn word_statuses() {
    let mut it = RuleBreakIterator::new_word();
    it.set_cursor(StrCursor::new("Hello, world!"));
    assert_eq!(it.next(), Some(5));
    assert_eq!(it.rule_status_value(), 200);
    assert_eq!(it.word_type(), WordType::Letter);
    assert!(it.is_word_like());
    assert_eq!(it.next(), Some(6));
    assert_eq!(it.rule_status_value(), 0);
    assert_eq!(it.word_type(), WordType::None);
}

#[test]
fn word_numbers_and_joiners() {
    // MidNumLet keeps a decimal together; ExtendNumLet joins both sides.
    assert_eq!(forward_breaks(RuleBreakIterator::new_word(), "3.5"), [3]);
    assert_eq!(forward_breaks(RuleBreakIterator::new_word(), "a_1"), [3]);
    assert_eq!(forward_breaks(RuleBreakIterator::new_word(), "don't"), [5]);
    // A bridge with nothing on the far side falls back.
    assert_eq!(forward_breaks(RuleBreakIterator::new_word(), "a."), [1, 2]);
}

#[test]
fn word_number_status() {
    let mut it = RuleBreakIterator::new_word();
    it.set_cursor(StrCursor::new("42 pears"));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.word_type(), WordType::Number);
}

#[test]
fn word_katakana_and_dictionary() {
    let mut it = RuleBreakIterator::new_word();
    it.set_cursor(StrCursor::new("カタカナ"));
    assert_eq!(it.next(), Some(12));
    assert_eq!(it.rule_status_value(), 300);

    // Han and Hiragana go to the dictionary category: one segment here,
    // with the consumed dictionary characters counted for a refinement pass.
    let mut it = RuleBreakIterator::new_word();
    it.set_cursor(StrCursor::new("日本語です"));
    assert_eq!(it.next(), Some(15));
    assert_eq!(it.dictionary_char_count(), 5);
    assert_eq!(it.rule_status_value(), 400);
}

#[test]
fn word_previous() {
    let mut it = RuleBreakIterator::new_word();
    let mut cursor = StrCursor::new("Hello, world!");
    cursor.set_position(13).unwrap();
    it.set_cursor(cursor);
    assert_eq!(it.previous(), Some(12));
    assert_eq!(it.previous(), Some(7));
    assert_eq!(it.previous(), Some(6));
    assert_eq!(it.previous(), Some(5));
    assert_eq!(it.previous(), Some(0));
    assert_eq!(it.previous(), None);
}

#[test]
fn sentence_scenario() {
    assert_eq!(forward_breaks(RuleBreakIterator::new_sentence(), "Hi. Bye."), [4, 8]);
}

#[test]
fn sentence_abbreviation_suppression() {
    // A lower-case continuation withdraws the candidate break after the
    // full stop, even across digits and other non-letters.
    assert_eq!(
        forward_breaks(RuleBreakIterator::new_sentence(), "Mr. smith stayed. Then"),
        [18, 22]
    );
    assert_eq!(forward_breaks(RuleBreakIterator::new_sentence(), "He has 3.5 dogs."), [16]);
    assert_eq!(forward_breaks(RuleBreakIterator::new_sentence(), "Mr. 5 dogs left"), [15]);
}

#[test]
fn sentence_exclamation() {
    assert_eq!(forward_breaks(RuleBreakIterator::new_sentence(), "Stop! Now."), [6, 10]);
}

#[test]
fn sentence_separator_status() {
    let mut it = RuleBreakIterator::new_sentence();
    it.set_cursor(StrCursor::new("End.\nNew one."));
    assert_eq!(it.next(), Some(5));
    assert_eq!(it.rule_status_value(), 100);
    assert_eq!(it.next(), Some(13));
    assert_eq!(it.rule_status_value(), 0);
}

#[test]
fn sentence_previous() {
    let mut it = RuleBreakIterator::new_sentence();
    let mut cursor = StrCursor::new("Hi. Bye.");
    cursor.set_position(8).unwrap();
    it.set_cursor(cursor);
    assert_eq!(it.previous(), Some(4));
    assert_eq!(it.previous(), Some(0));
    assert_eq!(it.previous(), None);
}

#[test]
fn line_scenario() {
    let mut it = RuleBreakIterator::new_line();
    it.set_cursor(StrCursor::new("Hello, world!\n"));
    assert_eq!(it.next(), Some(7));
    assert_eq!(it.rule_status_value(), 0);
    assert_eq!(it.next(), Some(14));
    // The segment ends with a mandatory break.
    assert_eq!(it.rule_status_value(), 100);
    assert_eq!(it.next(), None);
}

#[test]
fn line_opportunities() {
    assert_eq!(forward_breaks(RuleBreakIterator::new_line(), "foo bar"), [4, 7]);
    // After a hyphen, before glue, between ideographs.
    assert_eq!(forward_breaks(RuleBreakIterator::new_line(), "foo-bar"), [4, 7]);
    assert_eq!(forward_breaks(RuleBreakIterator::new_line(), "a\u{00A0}b"), [4]);
    assert_eq!(forward_breaks(RuleBreakIterator::new_line(), "日本"), [3, 6]);
    // No break after an opening bracket, none before a closing one.
    assert_eq!(forward_breaks(RuleBreakIterator::new_line(), "a (b) c"), [2, 6, 7]);
}

#[test]
fn line_crlf() {
    assert_eq!(forward_breaks(RuleBreakIterator::new_line(), "a\r\nb"), [3, 4]);
}

#[test]
fn round_trips() {
    for text in [
        "",
        "a",
        "abc",
        "a\u{0301}bc",
        "Hello, world!",
        "Hi. Bye.",
        "Mr. smith stayed. Then",
        "foo bar-baz\r\nquux",
        "한글 テスト 日本語",
        "🇺🇸🇫🇷 ok",
    ] {
        assert_round_trip(RuleBreakIterator::new_character, text);
        assert_round_trip(RuleBreakIterator::new_word, text);
        assert_round_trip(RuleBreakIterator::new_sentence, text);
        assert_round_trip(RuleBreakIterator::new_line, text);
    }
}

#[test]
fn ill_formed_utf8_cursor() {
    let mut it = RuleBreakIterator::new_character();
    it.set_cursor(Utf8Cursor::new(b"ab\xFFcd"));
    let mut breaks = Vec::new();
    while let Some(p) = it.next() {
        breaks.push(p);
    }
    assert_eq!(breaks, [1, 2, 3, 4, 5]);
}

#[test]
fn segment_str_iterator() {
    let breaks: Vec<usize> = RuleBreakIterator::new_word().segment_str("Hello World").collect();
    assert_eq!(breaks, [5, 6, 11]);
    let none: Vec<usize> = RuleBreakIterator::new_character().segment_str("").collect();
    assert!(none.is_empty());
}
