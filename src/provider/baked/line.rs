//! Line break opportunity rules.
//!
//! Every state stands for the class of the last significant code point;
//! a transition either continues the segment (when a break between the two
//! classes is prohibited) or hits the stop state (a break opportunity, at
//! the last accepted position). Mandatory breaks after BK/CR/LF carry the
//! hard-break status. Open punctuation and glue are non-accepting states:
//! no opportunity directly after them. Combining marks keep the state of
//! their base.

use super::{BundleSpec, RowSpec, TableSpec};

const AL: u16 = 3;
const CR: u16 = 4;
const LF: u16 = 5;
const BK: u16 = 6;
const SP: u16 = 7;
const ZW: u16 = 8;
const GL: u16 = 9;
const OP: u16 = 10;
const CL: u16 = 11;
const HY: u16 = 12;
const BA: u16 = 13;
const CM: u16 = 14;
const ID: u16 = 15;
const CATEGORY_COUNT: u16 = 16;

#[rustfmt::skip]
const FORWARD_ROWS: &[RowSpec] = &[
    //                              err eot bof al  cr  lf  bk  sp  zw  gl  op  cl  hy  ba  cm  id
    // 0 stop
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 1 start
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  0,  0,  2,  11, 12, 12, 4,  5,  6,  7,  3,  9,  9,  2,  10] },
    // 2 after an alphabetic
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          2,  13, 0,  2,  11, 12, 12, 4,  5,  6,  7,  3,  9,  9,  2,  0] },
    // 3 after closing punctuation
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  13, 0,  0,  11, 12, 12, 4,  5,  6,  0,  3,  9,  9,  3,  0] },
    // 4 space run
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  13, 0,  0,  11, 12, 12, 4,  5,  0,  0,  3,  0,  0,  0,  0] },
    // 5 after ZWSP (plus trailing spaces)
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  13, 0,  0,  11, 12, 12, 5,  5,  0,  0,  0,  0,  0,  0,  0] },
    // 6 after glue: no break on either side
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  13, 0,  2,  11, 12, 12, 4,  5,  6,  7,  3,  9,  9,  6,  10] },
    // 7 after opening punctuation
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  13, 0,  2,  11, 12, 12, 8,  5,  6,  7,  3,  9,  9,  7,  10] },
    // 8 opening punctuation + spaces: still no break
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          2,  13, 0,  2,  11, 12, 12, 8,  5,  6,  7,  3,  9,  9,  2,  10] },
    // 9 after hyphen or break-after
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  13, 0,  0,  11, 12, 12, 4,  5,  0,  0,  3,  9,  9,  9,  0] },
    // 10 after an ideograph
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  13, 0,  0,  11, 12, 12, 4,  5,  6,  0,  3,  9,  9,  10, 0] },
    // 11 after CR
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  14, 0,  0,  0,  12, 0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 12 after a mandatory break
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  14, 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 13 end of text
    RowSpec { accepting: 1, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    // 14 end of text directly after a mandatory break
    RowSpec { accepting: 1, lookahead: 0, tag: 1, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
];

#[rustfmt::skip]
const REVERSE_ROWS: &[RowSpec] = &[
    //                              err eot bof al  cr  lf  bk  sp  zw  gl  op  cl  hy  ba  cm  id
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  2,  2,  3,  2,  2,  2,  2,  3] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          3,  0,  0,  3,  3,  2,  3,  2,  2,  2,  3,  2,  2,  2,  2,  3] },
    RowSpec { accepting: 0, lookahead: 0, tag: 0, next:
        &[                          0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0] },
];

#[rustfmt::skip]
const RANGES: &[(u32, u32, u16)] = &[
    (0x0009, 0x0009, BA),
    (0x000A, 0x000A, LF),
    (0x000B, 0x000C, BK),
    (0x000D, 0x000D, CR),
    (0x0020, 0x0020, SP),
    (0x0021, 0x0021, CL),
    (0x0028, 0x0028, OP),
    (0x0029, 0x0029, CL),
    (0x002C, 0x002C, CL),
    (0x002D, 0x002D, HY),
    (0x002E, 0x002E, CL),
    (0x003A, 0x003B, CL),
    (0x003F, 0x003F, CL),
    (0x005B, 0x005B, OP),
    (0x005D, 0x005D, CL),
    (0x007B, 0x007B, OP),
    (0x007D, 0x007D, CL),
    (0x0085, 0x0085, BK),
    (0x00A0, 0x00A0, GL),
    (0x058A, 0x058A, BA),
    (0x2007, 0x2007, GL),
    (0x200B, 0x200B, ZW),
    (0x2010, 0x2010, BA),
    (0x2012, 0x2014, BA),
    (0x2024, 0x2026, CL),
    (0x2028, 0x2029, BK),
    (0x202F, 0x202F, GL),
    (0x2060, 0x2060, GL),
    (0x3000, 0x3000, ID),
    (0x3001, 0x3002, CL),
    (0x3008, 0x3008, OP),
    (0x3009, 0x3009, CL),
    (0x300A, 0x300A, OP),
    (0x300B, 0x300B, CL),
    (0x300C, 0x300C, OP),
    (0x300D, 0x300D, CL),
    (0x300E, 0x300E, OP),
    (0x300F, 0x300F, CL),
    (0x3010, 0x3010, OP),
    (0x3011, 0x3011, CL),
    (0x3014, 0x3014, OP),
    (0x3015, 0x3015, CL),
    (0x3041, 0x3096, ID),
    (0x309B, 0x309F, ID),
    (0x30A1, 0x30FA, ID),
    (0x30FC, 0x30FF, ID),
    (0x3400, 0x4DBF, ID),
    (0x4E00, 0x9FFF, ID),
    (0xAC00, 0xD7A3, ID),
    (0xF900, 0xFA6D, ID),
    (0xFE50, 0xFE52, CL),
    (0xFEFF, 0xFEFF, GL),
    (0xFF01, 0xFF01, CL),
    (0xFF08, 0xFF08, OP),
    (0xFF09, 0xFF09, CL),
    (0xFF0C, 0xFF0C, CL),
    (0xFF0E, 0xFF0E, CL),
    (0xFF1A, 0xFF1B, CL),
    (0xFF1F, 0xFF1F, CL),
    (0xFF3B, 0xFF3B, OP),
    (0xFF3D, 0xFF3D, CL),
    (0xFF5B, 0xFF5B, OP),
    (0xFF5D, 0xFF5D, CL),
    (0xFF61, 0xFF61, CL),
    (0xFF62, 0xFF62, OP),
    (0xFF63, 0xFF64, CL),
    (0x1F300, 0x1F64F, ID),
    (0x1F900, 0x1F9FF, ID),
    (0x20000, 0x2A6DF, ID),
];

fn classify(cp: u32) -> u16 {
    if let Some(category) = super::lookup(RANGES, cp) {
        return category;
    }
    if super::in_ranges(super::COMBINING_MARKS, cp) || super::in_ranges(super::FORMAT_CONTROLS, cp)
    {
        return CM;
    }
    AL
}

pub(super) const SPEC: BundleSpec = BundleSpec {
    category_count: CATEGORY_COUNT,
    classify,
    // Soft opportunities and hard (mandatory) breaks, as in the ICU data.
    statuses: &[0, 100],
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
