//! Built-in break data bundles.
//!
//! Each break kind contributes a category classification (ordered code point
//! ranges over a default) and its forward/reverse state tables; this module
//! assembles them into [`RuleBreakData`] bundles on first use and keeps them
//! in process-wide statics. The trie built here is a genuine fast-type
//! 16-bit code point trie — lookups at run time go through the same index
//! math as tries deserialized from compiled resources.
//!
//! The category data covers the scripts the built-in rules are written for;
//! a bundle produced from complete compiled tables is a drop-in replacement
//! via [`RuleBreakIterator::from_data`](crate::RuleBreakIterator::from_data).

mod grapheme;
mod line;
mod sentence;
mod word;

use crate::provider::{RuleBreakData, RuleStateTable};
use crate::trie::{CodePointTrie, TrieData, TrieType};
use std::collections::HashMap;
use std::sync::OnceLock;
use zerovec::ZeroVec;

/// One state table as written down by the rule modules.
pub(super) struct TableSpec {
    pub bof_required: bool,
    pub dict_categories_start: u16,
    pub lookahead_results_size: u16,
    pub rows: &'static [RowSpec],
}

/// One row as written down by the rule modules.
pub(super) struct RowSpec {
    pub accepting: u16,
    pub lookahead: u16,
    pub tag: u16,
    pub next: &'static [u16],
}

/// Everything needed to assemble one bundle.
pub(super) struct BundleSpec {
    pub category_count: u16,
    pub classify: fn(u32) -> u16,
    pub statuses: &'static [u32],
    pub forward: TableSpec,
    pub reverse: TableSpec,
}

/// The built-in grapheme cluster bundle.
pub(crate) fn character() -> &'static RuleBreakData<'static> {
    static DATA: OnceLock<RuleBreakData<'static>> = OnceLock::new();
    DATA.get_or_init(|| build(&grapheme::SPEC))
}

/// The built-in word bundle.
pub(crate) fn word() -> &'static RuleBreakData<'static> {
    static DATA: OnceLock<RuleBreakData<'static>> = OnceLock::new();
    DATA.get_or_init(|| build(&word::SPEC))
}

/// The built-in sentence bundle.
pub(crate) fn sentence() -> &'static RuleBreakData<'static> {
    static DATA: OnceLock<RuleBreakData<'static>> = OnceLock::new();
    DATA.get_or_init(|| build(&sentence::SPEC))
}

/// The built-in line bundle.
pub(crate) fn line() -> &'static RuleBreakData<'static> {
    static DATA: OnceLock<RuleBreakData<'static>> = OnceLock::new();
    DATA.get_or_init(|| build(&line::SPEC))
}

fn build(spec: &BundleSpec) -> RuleBreakData<'static> {
    let data = RuleBreakData {
        forward_table: build_table(&spec.forward, spec.category_count),
        reverse_table: build_table(&spec.reverse, spec.category_count),
        property_table: build_trie(spec.classify),
        category_count: spec.category_count,
        statuses: ZeroVec::alloc_from_slice(spec.statuses),
    };
    debug_assert_eq!(data.validate(), Ok(()));
    data
}

fn build_table(spec: &TableSpec, category_count: u16) -> RuleStateTable<'static> {
    let mut cells = Vec::with_capacity(spec.rows.len() * (3 + category_count as usize));
    for row in spec.rows {
        debug_assert_eq!(row.next.len(), category_count as usize);
        cells.push(row.accepting);
        cells.push(row.lookahead);
        cells.push(row.tag);
        cells.extend_from_slice(row.next);
    }
    RuleStateTable {
        bof_required: spec.bof_required,
        lookahead_hard_break: false,
        dict_categories_start: spec.dict_categories_start,
        lookahead_results_size: spec.lookahead_results_size,
        category_count,
        cells: ZeroVec::alloc_from_slice(&cells),
    }
}

const FAST_BLOCK: u32 = 64;
const SMALL_BLOCK: u32 = 16;
/// Granularity of `high_start`: one index-1 entry's worth of code points.
const CHUNK: u32 = 0x4000;

/// Builds a fast-type, 16-bit-value trie over `classify`. Data blocks,
/// index-3 blocks, and index-2 blocks are deduplicated; index-3 blocks fall
/// back to the packed 18-bit form when a data offset exceeds 16 bits.
fn build_trie(classify: fn(u32) -> u16) -> CodePointTrie<'static> {
    // The shared high value covers the longest constant tail.
    let high_value = classify(0x10_FFFF);
    let mut high_start = 0x11_0000u32;
    while high_start > 0x1_0000 && classify(high_start - 1) == high_value {
        high_start -= 1;
    }
    high_start = high_start.max(0x1_0000).next_multiple_of(CHUNK);

    let mut data: Vec<u16> = Vec::new();
    let mut blocks: HashMap<Vec<u16>, u32> = HashMap::new();
    let mut intern_block = |data: &mut Vec<u16>, block: Vec<u16>| -> u32 {
        *blocks.entry(block).or_insert_with_key(|block| {
            let offset = data.len() as u32;
            data.extend_from_slice(block);
            offset
        })
    };

    // BMP: a flat index of 64-code-point blocks.
    let mut index: Vec<u16> = Vec::with_capacity(1024);
    for block_start in (0..0x1_0000).step_by(FAST_BLOCK as usize) {
        let block: Vec<u16> = (block_start..block_start + FAST_BLOCK).map(classify).collect();
        let offset = intern_block(&mut data, block);
        debug_assert!(offset <= 0xFFFF);
        index.push(offset as u16);
    }

    // Supplementary planes up to high_start: index-1 → index-2 → index-3.
    let chunks = ((high_start - 0x1_0000) / CHUNK) as usize;
    let index_1_base = index.len();
    index.resize(index_1_base + chunks, 0);
    let mut index_3_blocks: HashMap<Vec<u32>, u16> = HashMap::new();
    let mut index_2_blocks: HashMap<Vec<u16>, u16> = HashMap::new();
    for chunk in 0..chunks {
        let chunk_start = 0x1_0000 + chunk as u32 * CHUNK;
        let mut index_2: Vec<u16> = Vec::with_capacity(32);
        for k in 0..32u32 {
            let block_start = chunk_start + k * (SMALL_BLOCK * 32);
            let offsets: Vec<u32> = (0..32u32)
                .map(|m| {
                    let small_start = block_start + m * SMALL_BLOCK;
                    let block: Vec<u16> =
                        (small_start..small_start + SMALL_BLOCK).map(classify).collect();
                    intern_block(&mut data, block)
                })
                .collect();
            let pointer = *index_3_blocks
                .entry(offsets)
                .or_insert_with_key(|offsets| emit_index_3(&mut index, offsets));
            index_2.push(pointer);
        }
        let pointer = *index_2_blocks.entry(index_2).or_insert_with_key(|index_2| {
            let at = index.len();
            debug_assert!(at <= 0xFFFF);
            index.extend_from_slice(index_2);
            at as u16
        });
        index[index_1_base + chunk] = pointer;
    }

    data.push(high_value);
    data.push(crate::provider::CATEGORY_ERROR);

    CodePointTrie::from_parts(
        TrieType::Fast,
        high_start,
        ZeroVec::alloc_from_slice(&index),
        TrieData::Bits16(ZeroVec::alloc_from_slice(&data)),
    )
}

/// Appends an index-3 block and returns its pointer, setting the 0x8000 flag
/// for the packed 18-bit form.
fn emit_index_3(index: &mut Vec<u16>, offsets: &[u32]) -> u16 {
    let at = index.len();
    debug_assert!(at <= 0x7FFF, "index overflow");
    if offsets.iter().all(|&o| o <= 0xFFFF) {
        index.extend(offsets.iter().map(|&o| o as u16));
        at as u16
    } else {
        // Nine entries per eight indexes: a header carrying bits 16..17 of
        // each offset, most significant pair first, then the low 16 bits.
        for group in offsets.chunks(8) {
            let mut header = 0u16;
            for (k, &offset) in group.iter().enumerate() {
                debug_assert!(offset < 0x4_0000);
                header |= (((offset >> 16) & 3) as u16) << (14 - 2 * k);
            }
            index.push(header);
            index.extend(group.iter().map(|&o| (o & 0xFFFF) as u16));
        }
        0x8000 | at as u16
    }
}

/// Binary search over sorted, non-overlapping, inclusive ranges.
pub(super) fn in_ranges(ranges: &[(u32, u32)], cp: u32) -> bool {
    let i = ranges.partition_point(|&(start, _)| start <= cp);
    i > 0 && cp <= ranges[i - 1].1
}

/// Binary search over sorted, non-overlapping, inclusive ranges carrying a
/// category each.
pub(super) fn lookup(ranges: &[(u32, u32, u16)], cp: u32) -> Option<u16> {
    let i = ranges.partition_point(|&(start, _, _)| start <= cp);
    match i {
        0 => None,
        i => {
            let (_, end, category) = ranges[i - 1];
            (cp <= end).then_some(category)
        }
    }
}

/// Nonspacing combining marks common to all four classifications (a curated
/// Mn/Me core: Latin/Greek/Cyrillic diacritics, Hebrew points, Arabic marks,
/// Devanagari/Bengali/Thai signs, kana voicing, variation selectors).
pub(super) const COMBINING_MARKS: &[(u32, u32)] = &[
    (0x0300, 0x036F),
    (0x0483, 0x0489),
    (0x0591, 0x05BD),
    (0x05BF, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x0610, 0x061A),
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
    (0x0711, 0x0711),
    (0x0730, 0x074A),
    (0x08D3, 0x08E1),
    (0x08E3, 0x0902),
    (0x093A, 0x093A),
    (0x093C, 0x093C),
    (0x0941, 0x0948),
    (0x094D, 0x094D),
    (0x0951, 0x0957),
    (0x0962, 0x0963),
    (0x0981, 0x0981),
    (0x09BC, 0x09BC),
    (0x09C1, 0x09C4),
    (0x09CD, 0x09CD),
    (0x09E2, 0x09E3),
    (0x0E31, 0x0E31),
    (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E),
    (0x1AB0, 0x1AFF),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20F0),
    (0x3099, 0x309A),
    (0xFE00, 0xFE0F),
    (0xFE20, 0xFE2F),
    (0xE0100, 0xE01EF),
];

/// Default-ignorable format controls common to all four classifications
/// (a curated Cf core). Kind-specific overrides (ZWJ/ZWNJ, ZWSP, Arabic
/// prepended signs, tags) are claimed by the per-kind range tables, which
/// are consulted first.
pub(super) const FORMAT_CONTROLS: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x08E2, 0x08E2),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0xE0020, 0xE007F),
];
