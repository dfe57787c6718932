//! Sentence boundary rules.
//!
//! Separators (LF, CR LF, LS/PS/NEL) close a sentence unconditionally, as
//! do STerm tails. An ATerm tail is ambiguous: the candidate position after
//! `ATerm Close* Sp*` is recorded through the lookahead mechanism and only
//! reported once a following capital or other sentence start confirms it.
//! A lower-case letter — possibly after a run of digits, closes, or other
//! non-letters — withdraws the candidate and the sentence continues, which
//! keeps abbreviations and decimal numbers inside one sentence.

use super::{BundleSpec, RowSpec, TableSpec};

const OTHER: u16 = 3;
const CR: u16 = 4;
const LF: u16 = 5;
const SEP: u16 = 6;
const SP: u16 = 7;
const LOWER: u16 = 8;
const UPPER: u16 = 9;
const OLETTER: u16 = 10;
const NUMERIC: u16 = 11;
const ATERM: u16 = 12;
const STERM: u16 = 13;
const CLOSE: u16 = 14;
const SCONTINUE: u16 = 15;
const EXTFMT: u16 = 16;
const CATEGORY_COUNT: u16 = 17;

/// Scratch slot used by the ATerm tail rules.
const LA_ATERM: u16 = 2;

#[rustfmt::skip]
const FORWARD_ROWS: &[RowSpec] = &[
    //                              err eot bof oth cr  lf  sep sp  low up  ole num at  st  cl  sc  ext
    // 0 stop
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 1 start
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  0,  0,  2,  7,  9,  9,  2,  3,  3,  2,  2,  5,  6,  2,  2,  2] },
    // 2 sentence body
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  4,  0,  2,  7,  9,  9,  2,  3,  3,  2,  2,  5,  6,  2,  2,  2] },
    // 3 body, last significant code point was a cased letter
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  4,  0,  2,  7,  9,  9,  2,  3,  3,  2,  2,  10, 6,  2,  2,  3] },
    // 4 end of text
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 5 after ATerm (no letter immediately before)
    RowSpec { accepting: 0, lookahead: LA_ATERM, tag: 0, next:
        &[                          16, 4,  0,  16, 7,  9,  9,  13, 3,  11, 11, 2,  5,  6,  12, 2,  5] },
    // 6 after STerm
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  4,  0,  0,  7,  9,  9,  15, 0,  0,  0,  0,  5,  6,  14, 2,  6] },
    // 7 after CR
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  4,  0,  0,  0,  8,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 8 after CR LF
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 9 after LF or a separator
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 10 after a cased letter + ATerm ("U.S.": a following capital continues)
    RowSpec { accepting: 0, lookahead: LA_ATERM, tag: 0, next:
        &[                          16, 4,  0,  16, 7,  9,  9,  13, 3,  3,  11, 2,  5,  6,  12, 2,  10] },
    // 11 new sentence confirmed: break at the recorded candidate
    RowSpec { accepting: LA_ATERM, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 12 ATerm Close*
    RowSpec { accepting: 0, lookahead: LA_ATERM, tag: 0, next:
        &[                          16, 4,  0,  16, 7,  9,  9,  13, 3,  11, 11, 16, 5,  6,  12, 2,  12] },
    // 13 ATerm Close* Sp*
    RowSpec { accepting: 0, lookahead: LA_ATERM, tag: 0, next:
        &[                          16, 4,  0,  16, 7,  9,  9,  13, 3,  11, 11, 16, 5,  6,  16, 2,  13] },
    // 14 STerm Close*
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  4,  0,  0,  7,  9,  9,  15, 0,  0,  0,  0,  5,  6,  14, 2,  14] },
    // 15 STerm Close* Sp*
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  4,  0,  0,  7,  9,  9,  15, 0,  0,  0,  0,  5,  6,  0,  2,  15] },
    // 16 scanning for a lower-case continuation after an ATerm tail
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          16, 11, 0,  16, 11, 11, 11, 16, 3,  11, 11, 16, 11, 11, 16, 16, 16] },
];

#[rustfmt::skip]
const REVERSE_ROWS: &[RowSpec] = &[
    //                              err eot bof oth cr  lf  sep sp  low up  ole num at  st  cl  sc  ext
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  3,  3,  3,  2,  2,  2,  2,  2,  2] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  3,  3,  3,  2,  2,  2,  2,  2,  2] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
];

#[rustfmt::skip]
const RANGES: &[(u32, u32, u16)] = &[
    (0x0009, 0x0009, SP),
    (0x000A, 0x000A, LF),
    (0x000B, 0x000C, SP),
    (0x000D, 0x000D, CR),
    (0x0020, 0x0020, SP),
    (0x0021, 0x0021, STERM),
    (0x0022, 0x0022, CLOSE),
    (0x0027, 0x0029, CLOSE),
    (0x002C, 0x002D, SCONTINUE),
    (0x002E, 0x002E, ATERM),
    (0x0030, 0x0039, NUMERIC),
    (0x003A, 0x003A, SCONTINUE),
    (0x003F, 0x003F, STERM),
    (0x0041, 0x005A, UPPER),
    (0x005B, 0x005B, CLOSE),
    (0x005D, 0x005D, CLOSE),
    (0x0061, 0x007A, LOWER),
    (0x007B, 0x007B, CLOSE),
    (0x007D, 0x007D, CLOSE),
    (0x0085, 0x0085, SEP),
    (0x00A0, 0x00A0, SP),
    (0x00AB, 0x00AB, CLOSE),
    (0x00B5, 0x00B5, LOWER),
    (0x00BB, 0x00BB, CLOSE),
    (0x00C0, 0x00D6, UPPER),
    (0x00D8, 0x00DE, UPPER),
    (0x00DF, 0x00F6, LOWER),
    (0x00F8, 0x00FF, LOWER),
    (0x0391, 0x03A9, UPPER),
    (0x03B1, 0x03C9, LOWER),
    (0x0400, 0x042F, UPPER),
    (0x0430, 0x045F, LOWER),
    (0x05D0, 0x05EA, OLETTER),
    (0x05EF, 0x05F2, OLETTER),
    (0x061F, 0x061F, STERM),
    (0x0620, 0x064A, OLETTER),
    (0x0660, 0x0669, NUMERIC),
    (0x0671, 0x06D3, OLETTER),
    (0x06D4, 0x06D4, STERM),
    (0x06F0, 0x06F9, NUMERIC),
    (0x0904, 0x0939, OLETTER),
    (0x0958, 0x0961, OLETTER),
    (0x0964, 0x0965, STERM),
    (0x0966, 0x096F, NUMERIC),
    (0x0E01, 0x0E30, OLETTER),
    (0x0E32, 0x0E33, OLETTER),
    (0x0E40, 0x0E46, OLETTER),
    (0x0E50, 0x0E59, NUMERIC),
    (0x1100, 0x11FF, OLETTER),
    (0x1680, 0x1680, SP),
    (0x2000, 0x200A, SP),
    (0x2013, 0x2014, SCONTINUE),
    (0x2018, 0x201F, CLOSE),
    (0x2024, 0x2024, ATERM),
    (0x2028, 0x2029, SEP),
    (0x2039, 0x203A, CLOSE),
    (0x2045, 0x2046, CLOSE),
    (0x2047, 0x2049, STERM),
    (0x205F, 0x205F, SP),
    (0x3000, 0x3000, SP),
    (0x3001, 0x3001, SCONTINUE),
    (0x3002, 0x3002, STERM),
    (0x3008, 0x3011, CLOSE),
    (0x3014, 0x3015, CLOSE),
    (0x3041, 0x3096, OLETTER),
    (0x309D, 0x309F, OLETTER),
    (0x30A1, 0x30FA, OLETTER),
    (0x30FC, 0x30FF, OLETTER),
    (0x3400, 0x4DBF, OLETTER),
    (0x4E00, 0x9FFF, OLETTER),
    (0xAC00, 0xD7A3, OLETTER),
    (0xF900, 0xFA6D, OLETTER),
    (0xFE52, 0xFE52, ATERM),
    (0xFF01, 0xFF01, STERM),
    (0xFF0C, 0xFF0C, SCONTINUE),
    (0xFF0D, 0xFF0D, SCONTINUE),
    (0xFF0E, 0xFF0E, ATERM),
    (0xFF10, 0xFF19, NUMERIC),
    (0xFF1F, 0xFF1F, STERM),
    (0xFF61, 0xFF61, STERM),
    (0x20000, 0x2A6DF, OLETTER),
];

fn classify(cp: u32) -> u16 {
    if let Some(category) = super::lookup(RANGES, cp) {
        return category;
    }
    if super::in_ranges(super::COMBINING_MARKS, cp) || super::in_ranges(super::FORMAT_CONTROLS, cp)
    {
        return EXTFMT;
    }
    OTHER
}

pub(super) const SPEC: BundleSpec = BundleSpec {
    category_count: CATEGORY_COUNT,
    classify,
    // Terminator-ended and separator-ended sentences, as in the ICU data.
    statuses: &[0, 100],
    forward: TableSpec {
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 3,
        rows: FORWARD_ROWS,
    },
    reverse: TableSpec {
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 0,
        rows: REVERSE_ROWS,
    },
};
