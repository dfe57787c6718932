//! Extended grapheme cluster rules.
//!
//! One forward match consumes one cluster: CR LF, a control, or
//! `Prepend* core Postcore*` where the core is a Hangul syllable sequence,
//! a regional indicator pair, an emoji ZWJ sequence, or any other code
//! point, and the postcore is Extend/ZWJ/SpacingMark. The reverse table
//! skips back over anything that can bind to a preceding code point, one
//! base, and any prepend run.

use super::{BundleSpec, RowSpec, TableSpec};

const ANY: u16 = 3;
const CR: u16 = 4;
const LF: u16 = 5;
const CONTROL: u16 = 6;
const EXTEND: u16 = 7;
const ZWJ: u16 = 8;
const RI: u16 = 9;
const PREPEND: u16 = 10;
const SPACING_MARK: u16 = 11;
const L: u16 = 12;
const V: u16 = 13;
const T: u16 = 14;
const LV: u16 = 15;
const LVT: u16 = 16;
const EXT_PICT: u16 = 17;
const CATEGORY_COUNT: u16 = 18;

#[rustfmt::skip]
const FORWARD_ROWS: &[RowSpec] = &[
    //                              err eot bof any cr  lf  ctl ext zwj ri  pre spm L   V   T   LV  LVT pic
    // 0 stop
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 1 start
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          4,  0,  0,  4,  3,  2,  2,  5,  5,  10, 6,  5,  7,  8,  9,  8,  9,  12] },
    // 2 after LF / control / CR LF
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 3 after CR
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 4 after an ordinary core
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  0,  0,  0,  0,  0,  0] },
    // 5 in the postcore
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  0,  0,  0,  0,  0,  0] },
    // 6 after a prepend run
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          4,  0,  0,  4,  0,  0,  0,  5,  5,  10, 6,  5,  7,  8,  9,  8,  9,  12] },
    // 7 after Hangul L
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  7,  8,  0,  8,  9,  0] },
    // 8 after Hangul V or LV
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  0,  8,  9,  0,  0,  0] },
    // 9 after Hangul T or LVT
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  0,  0,  9,  0,  0,  0] },
    // 10 after one regional indicator
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  11, 0,  5,  0,  0,  0,  0,  0,  0] },
    // 11 after a regional indicator pair
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  0,  0,  0,  0,  0,  0] },
    // 12 after a pictograph
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  13, 14, 0,  0,  5,  0,  0,  0,  0,  0,  0] },
    // 13 pictograph + Extend*
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  13, 14, 0,  0,  5,  0,  0,  0,  0,  0,  0] },
    // 14 pictograph + Extend* + ZWJ: the sequence may continue
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  5,  0,  0,  0,  0,  0,  12] },
];

// Reverse states: skip the binding run, one base, and any prepend run.
#[rustfmt::skip]
const REVERSE_ROWS: &[RowSpec] = &[
    //                              err eot bof any cr  lf  ctl ext zwj ri  pre spm L   V   T   LV  LVT pic
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  4,  0,  0,  0,  0,  0,  0,  0] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  4,  0,  0,  0,  0,  0,  0,  0] },
];

/// Category overrides consulted before the shared mark/format lists.
#[rustfmt::skip]
const RANGES: &[(u32, u32, u16)] = &[
    (0x0000, 0x0009, CONTROL),
    (0x000A, 0x000A, LF),
    (0x000B, 0x000C, CONTROL),
    (0x000D, 0x000D, CR),
    (0x000E, 0x001F, CONTROL),
    (0x007F, 0x009F, CONTROL),
    (0x00A9, 0x00A9, EXT_PICT),
    (0x00AE, 0x00AE, EXT_PICT),
    (0x0600, 0x0605, PREPEND),
    (0x06DD, 0x06DD, PREPEND),
    (0x070F, 0x070F, PREPEND),
    (0x08E2, 0x08E2, PREPEND),
    (0x0903, 0x0903, SPACING_MARK),
    (0x093B, 0x093B, SPACING_MARK),
    (0x093E, 0x0940, SPACING_MARK),
    (0x0949, 0x094C, SPACING_MARK),
    (0x094E, 0x094F, SPACING_MARK),
    (0x0982, 0x0983, SPACING_MARK),
    (0x09BE, 0x09BE, EXTEND),
    (0x09BF, 0x09C0, SPACING_MARK),
    (0x09C7, 0x09C8, SPACING_MARK),
    (0x09CB, 0x09CC, SPACING_MARK),
    (0x09D7, 0x09D7, EXTEND),
    (0x0D4E, 0x0D4E, PREPEND),
    (0x0E33, 0x0E33, SPACING_MARK),
    (0x1100, 0x115F, L),
    (0x1160, 0x11A7, V),
    (0x11A8, 0x11FF, T),
    (0x200C, 0x200C, EXTEND),
    (0x200D, 0x200D, ZWJ),
    (0x2028, 0x2029, CONTROL),
    (0x203C, 0x203C, EXT_PICT),
    (0x2049, 0x2049, EXT_PICT),
    (0x2122, 0x2122, EXT_PICT),
    (0x2139, 0x2139, EXT_PICT),
    (0x231A, 0x231B, EXT_PICT),
    (0x23E9, 0x23F3, EXT_PICT),
    (0x25FD, 0x25FE, EXT_PICT),
    (0x2600, 0x27BF, EXT_PICT),
    (0x2B05, 0x2B07, EXT_PICT),
    (0x2B1B, 0x2B1C, EXT_PICT),
    (0x2B50, 0x2B50, EXT_PICT),
    (0x2B55, 0x2B55, EXT_PICT),
    (0xA960, 0xA97C, L),
    (0xD7B0, 0xD7C6, V),
    (0xD7CB, 0xD7FB, T),
    (0x1F000, 0x1F1E5, EXT_PICT),
    (0x1F1E6, 0x1F1FF, RI),
    (0x1F200, 0x1F3FA, EXT_PICT),
    (0x1F3FB, 0x1F3FF, EXTEND),
    (0x1F400, 0x1FAFF, EXT_PICT),
    (0xE0020, 0xE007F, EXTEND),
];

fn classify(cp: u32) -> u16 {
    // Hangul syllables alternate LV/LVT in a fixed 28-step cycle.
    if (0xAC00..=0xD7A3).contains(&cp) {
        return if (cp - 0xAC00) % 28 == 0 { LV } else { LVT };
    }
    if let Some(category) = super::lookup(RANGES, cp) {
        return category;
    }
    if super::in_ranges(super::COMBINING_MARKS, cp) {
        return EXTEND;
    }
    if super::in_ranges(super::FORMAT_CONTROLS, cp) {
        return CONTROL;
    }
    ANY
}

pub(super) const SPEC: BundleSpec = BundleSpec {
    category_count: CATEGORY_COUNT,
    classify,
    statuses: &[0],
    forward: TableSpec {
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 0,
        rows: FORWARD_ROWS,
    },
    reverse: TableSpec {
        bof_required: false,
        dict_categories_start: CATEGORY_COUNT,
        lookahead_results_size: 0,
        rows: REVERSE_ROWS,
    },
};
