//! Word boundary rules.
//!
//! Letter and number runs are bridged across MidLetter/MidNum/MidNumLet/
//! single-quote code points through non-accepting intermediate states, so a
//! bridge with no run on its far side falls back to the last accepted
//! position. Extend and format code points are absorbed into whatever run
//! is open. Han, Hiragana, and Thai are assigned to a dictionary category:
//! runs of them form single segments here and are counted for a downstream
//! dictionary pass.

use super::{BundleSpec, RowSpec, TableSpec};

const ANY: u16 = 3;
const CR: u16 = 4;
const LF: u16 = 5;
const NEWLINE: u16 = 6;
const EXTFMT: u16 = 7;
const RI: u16 = 8;
const KATAKANA: u16 = 9;
const HEBREW: u16 = 10;
const ALETTER: u16 = 11;
const SINGLE_QUOTE: u16 = 12;
const MIDLETTER: u16 = 13;
const MIDNUM: u16 = 14;
const MIDNUMLET: u16 = 15;
const NUMERIC: u16 = 16;
const EXTENDNUMLET: u16 = 17;
const WSEGSPACE: u16 = 18;
const DICTIONARY: u16 = 19;
const CATEGORY_COUNT: u16 = 20;

#[rustfmt::skip]
const FORWARD_ROWS: &[RowSpec] = &[
    //                              err eot bof any cr  lf  nl  ext ri  kat heb let sq  mdl mdn mnl num enl ws  dic
    // 0 stop
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 1 start (also the begin-of-input target)
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  0,  1,  2,  3,  4,  4,  2,  12, 11, 6,  6,  2,  2,  2,  2,  7,  8,  5,  14] },
    // 2 single segment
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 3 after CR
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 4 after LF or newline
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 5 whitespace run
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  0] },
    // 6 letter run
    RowSpec { accepting: 1, lookahead: 0, tag: 2, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  6,  0,  0,  6,  6,  9,  9,  0,  9,  7,  8,  0,  0] },
    // 7 number run
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  7,  0,  0,  6,  6,  10, 0,  10, 10, 7,  8,  0,  0] },
    // 8 joiner run
    RowSpec { accepting: 1, lookahead: 0, tag: 2, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  8,  0,  11, 6,  6,  0,  0,  0,  0,  7,  8,  0,  0] },
    // 9 letter bridge, waiting for the far letter
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  9,  0,  0,  6,  6,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 10 number bridge, waiting for the far number
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  10, 0,  0,  0,  0,  0,  0,  0,  0,  7,  0,  0,  0] },
    // 11 katakana run
    RowSpec { accepting: 1, lookahead: 0, tag: 3, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  11, 0,  11, 0,  0,  0,  0,  0,  0,  0,  8,  0,  0] },
    // 12 one regional indicator
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  12, 13, 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 13 regional indicator pair
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  13, 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 14 dictionary run
    RowSpec { accepting: 1, lookahead: 0, tag: 4, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  14, 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  14] },
];

#[rustfmt::skip]
const REVERSE_ROWS: &[RowSpec] = &[
    //                              err eot bof any cr  lf  nl  ext ri  kat heb let sq  mdl mdn mnl num enl ws  dic
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
];

#[rustfmt::skip]
const RANGES: &[(u32, u32, u16)] = &[
    (0x000A, 0x000A, LF),
    (0x000B, 0x000C, NEWLINE),
    (0x000D, 0x000D, CR),
    (0x0020, 0x0020, WSEGSPACE),
    (0x0027, 0x0027, SINGLE_QUOTE),
    (0x002C, 0x002C, MIDNUM),
    (0x002E, 0x002E, MIDNUMLET),
    (0x0030, 0x0039, NUMERIC),
    (0x003A, 0x003A, MIDLETTER),
    (0x003B, 0x003B, MIDNUM),
    (0x0041, 0x005A, ALETTER),
    (0x005F, 0x005F, EXTENDNUMLET),
    (0x0061, 0x007A, ALETTER),
    (0x0085, 0x0085, NEWLINE),
    (0x00AA, 0x00AA, ALETTER),
    (0x00B5, 0x00B5, ALETTER),
    (0x00B7, 0x00B7, MIDLETTER),
    (0x00BA, 0x00BA, ALETTER),
    (0x00C0, 0x00D6, ALETTER),
    (0x00D8, 0x00F6, ALETTER),
    (0x00F8, 0x02FF, ALETTER),
    (0x0370, 0x0373, ALETTER),
    (0x0376, 0x0377, ALETTER),
    (0x037A, 0x037D, ALETTER),
    (0x037F, 0x037F, ALETTER),
    (0x0386, 0x0386, ALETTER),
    (0x0387, 0x0387, MIDLETTER),
    (0x0388, 0x03FF, ALETTER),
    (0x0400, 0x0482, ALETTER),
    (0x048A, 0x052F, ALETTER),
    (0x0531, 0x0556, ALETTER),
    (0x0561, 0x0587, ALETTER),
    (0x05D0, 0x05EA, HEBREW),
    (0x05EF, 0x05F2, HEBREW),
    (0x0620, 0x064A, ALETTER),
    (0x0660, 0x0669, NUMERIC),
    (0x066C, 0x066C, MIDNUM),
    (0x066E, 0x066F, ALETTER),
    (0x0671, 0x06D3, ALETTER),
    (0x06F0, 0x06F9, NUMERIC),
    (0x06FA, 0x06FC, ALETTER),
    (0x06FF, 0x06FF, ALETTER),
    (0x0710, 0x0710, ALETTER),
    (0x0712, 0x072F, ALETTER),
    (0x0904, 0x0939, ALETTER),
    (0x093D, 0x093D, ALETTER),
    (0x0950, 0x0950, ALETTER),
    (0x0958, 0x0961, ALETTER),
    (0x0966, 0x096F, NUMERIC),
    (0x0971, 0x097F, ALETTER),
    (0x0E01, 0x0E30, DICTIONARY),
    (0x0E32, 0x0E33, DICTIONARY),
    (0x0E40, 0x0E46, DICTIONARY),
    (0x0E50, 0x0E59, NUMERIC),
    (0x1100, 0x11FF, ALETTER),
    (0x1680, 0x1680, WSEGSPACE),
    (0x1E00, 0x1FFF, ALETTER),
    (0x2000, 0x2006, WSEGSPACE),
    (0x2008, 0x200A, WSEGSPACE),
    (0x2019, 0x2019, MIDNUMLET),
    (0x2024, 0x2024, MIDNUMLET),
    (0x2027, 0x2027, MIDLETTER),
    (0x2028, 0x2029, NEWLINE),
    (0x202F, 0x202F, EXTENDNUMLET),
    (0x203F, 0x2040, EXTENDNUMLET),
    (0x2054, 0x2054, EXTENDNUMLET),
    (0x205F, 0x205F, WSEGSPACE),
    (0x2C60, 0x2C7F, ALETTER),
    (0x3000, 0x3000, WSEGSPACE),
    (0x3041, 0x3096, DICTIONARY),
    (0x309D, 0x309F, DICTIONARY),
    (0x30A1, 0x30FA, KATAKANA),
    (0x30FC, 0x30FF, KATAKANA),
    (0x31F0, 0x31FF, KATAKANA),
    (0x3400, 0x4DBF, DICTIONARY),
    (0x4E00, 0x9FFF, DICTIONARY),
    (0xA720, 0xA7FF, ALETTER),
    (0xAC00, 0xD7A3, ALETTER),
    (0xF900, 0xFA6D, DICTIONARY),
    (0xFF10, 0xFF19, NUMERIC),
    (0xFF3F, 0xFF3F, EXTENDNUMLET),
    (0xFF66, 0xFF9D, KATAKANA),
    (0x1F1E6, 0x1F1FF, RI),
    (0x20000, 0x2A6DF, DICTIONARY),
];

fn classify(cp: u32) -> u16 {
    if let Some(category) = super::lookup(RANGES, cp) {
        return category;
    }
    if super::in_ranges(super::COMBINING_MARKS, cp) || super::in_ranges(super::FORMAT_CONTROLS, cp)
    {
        return EXTFMT;
    }
    ANY
}

pub(super) const SPEC: BundleSpec = BundleSpec {
    category_count: CATEGORY_COUNT,
    classify,
    // The ICU word status values: none, number, letter, kana, ideographic.
    statuses: &[0, 100, 200, 300, 400],
    forward: TableSpec {
        bof_required: true,
        dict_categories_start: DICTIONARY,
        lookahead_results_size: 0,
        rows: FORWARD_ROWS,
    },
    reverse: TableSpec {
        bof_required: false,
        dict_categories_start: DICTIONARY,
        lookahead_results_size: 0,
        rows: REVERSE_ROWS,
    },
};
