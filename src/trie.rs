//! Code point lookup through a compressed multi-stage trie.
//!
//! The serialized layout and index math follow ICU's `UCPTrie`: a one-level
//! index for code points below the fast limit, a three-level descent
//! (index-1 → index-2 → index-3) above it, a single shared value for
//! everything at or past `high_start`, and a dedicated error value for
//! out-of-range input. Index-3 blocks may pack 18-bit data offsets as nine
//! entries per eight indexes, signalled by the 0x8000 bit.

use zerovec::ZeroVec;

/// Fast tries index the whole BMP directly; small tries only the first
/// 0x1000 code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrieType {
    /// BMP lookups take two array accesses.
    Fast,
    /// Smaller serialized form; lookups above U+0FFF descend the full index.
    Small,
}

/// Width of the entries in the trie's data array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrieValueWidth {
    /// 8 bits per value.
    Bits8,
    /// 16 bits per value.
    Bits16,
    /// 32 bits per value.
    Bits32,
}

/// The trie's data array in one of the three supported widths.
#[derive(Debug, Clone)]
pub enum TrieData<'data> {
    /// 8-bit values.
    Bits8(ZeroVec<'data, u8>),
    /// 16-bit values.
    Bits16(ZeroVec<'data, u16>),
    /// 32-bit values.
    Bits32(ZeroVec<'data, u32>),
}

impl TrieData<'_> {
    fn len(&self) -> usize {
        match self {
            TrieData::Bits8(v) => v.len(),
            TrieData::Bits16(v) => v.len(),
            TrieData::Bits32(v) => v.len(),
        }
    }

    fn value(&self, i: usize) -> Option<u32> {
        match self {
            TrieData::Bits8(v) => v.get(i).map(u32::from),
            TrieData::Bits16(v) => v.get(i).map(u32::from),
            TrieData::Bits32(v) => v.get(i),
        }
    }

    /// Width marker for this data array.
    pub fn width(&self) -> TrieValueWidth {
        match self {
            TrieData::Bits8(_) => TrieValueWidth::Bits8,
            TrieData::Bits16(_) => TrieValueWidth::Bits16,
            TrieData::Bits32(_) => TrieValueWidth::Bits32,
        }
    }
}

const FAST_SHIFT: u32 = 6;
/// Number of entries in a fast data block. 64.
const FAST_DATA_BLOCK_LENGTH: u32 = 1 << FAST_SHIFT;
const FAST_DATA_MASK: u32 = FAST_DATA_BLOCK_LENGTH - 1;

const SMALL_LIMIT: u32 = 0x1000;
const SMALL_INDEX_LENGTH: u32 = SMALL_LIMIT >> FAST_SHIFT;

/// Offsets subtracted from the data length for the two reserved values.
const HIGH_VALUE_NEG_DATA_OFFSET: usize = 2;
const ERROR_VALUE_NEG_DATA_OFFSET: usize = 1;

/// The length of the BMP index table. 1024.
const BMP_INDEX_LENGTH: u32 = 0x10000 >> FAST_SHIFT;

const SHIFT_3: u32 = 4;
const SHIFT_2: u32 = 5 + SHIFT_3;
const SHIFT_1: u32 = 5 + SHIFT_2;
const SHIFT_2_MINUS_3: u32 = SHIFT_2 - SHIFT_3;
const SHIFT_1_MINUS_2: u32 = SHIFT_1 - SHIFT_2;

/// Number of index-1 entries for the BMP, omitted from the serialized form.
const OMITTED_BMP_INDEX_1_LENGTH: u32 = 0x10000 >> SHIFT_1;

const INDEX_2_BLOCK_LENGTH: u32 = 1 << SHIFT_1_MINUS_2;
const INDEX_2_MASK: u32 = INDEX_2_BLOCK_LENGTH - 1;
const INDEX_3_BLOCK_LENGTH: u32 = 1 << SHIFT_2_MINUS_3;
const INDEX_3_MASK: u32 = INDEX_3_BLOCK_LENGTH - 1;

const SMALL_DATA_BLOCK_LENGTH: u32 = 1 << SHIFT_3;
const SMALL_DATA_MASK: u32 = SMALL_DATA_BLOCK_LENGTH - 1;

/// A compressed code point → value map.
///
/// `get` accepts arbitrary `u32` input: values above U+10FFFF resolve to the
/// trie's error value, code points at or above `high_start` to the shared
/// high value, everything else through the index structure.
#[derive(Debug, Clone)]
pub struct CodePointTrie<'data> {
    trie_type: TrieType,
    high_start: u32,
    index: ZeroVec<'data, u16>,
    data: TrieData<'data>,
}

impl<'data> CodePointTrie<'data> {
    /// Assembles a trie from its deserialized parts.
    ///
    /// The caller is responsible for structural validity (index entries in
    /// range, the two reserved values present at the end of `data`); lookups
    /// on inconsistent parts yield the error value rather than panicking.
    pub fn from_parts(
        trie_type: TrieType,
        high_start: u32,
        index: ZeroVec<'data, u16>,
        data: TrieData<'data>,
    ) -> Self {
        debug_assert!(high_start <= 0x11_0000);
        debug_assert!(data.len() >= 2);
        Self {
            trie_type,
            high_start,
            index,
            data,
        }
    }

    /// The first code point for which the shared high value applies.
    pub fn high_start(&self) -> u32 {
        self.high_start
    }

    /// The trie's type.
    pub fn trie_type(&self) -> TrieType {
        self.trie_type
    }

    /// Data index for a code point below the fast limit: one indirection
    /// through the linear index.
    fn fast_index(&self, cp: u32) -> usize {
        let block = u32::from(self.index.get((cp >> FAST_SHIFT) as usize).unwrap_or(0));
        (block + (cp & FAST_DATA_MASK)) as usize
    }

    /// Data index for `cp` in `0x1000/0x10000 ..= high_start-1`: descend
    /// index-1 → index-2 → index-3, honoring 18-bit packed index-3 blocks.
    fn small_index(&self, cp: u32) -> usize {
        let mut i1 = cp >> SHIFT_1;
        if self.trie_type == TrieType::Fast {
            debug_assert!((0xFFFF..self.high_start).contains(&cp));
            i1 += BMP_INDEX_LENGTH - OMITTED_BMP_INDEX_1_LENGTH;
        } else {
            debug_assert!(cp < self.high_start && self.high_start > SMALL_LIMIT);
            i1 += SMALL_INDEX_LENGTH;
        }
        let i2 = u32::from(self.index.get(i1 as usize).unwrap_or(0));
        let mut i3_block = u32::from(
            self.index
                .get((i2 + ((cp >> SHIFT_2) & INDEX_2_MASK)) as usize)
                .unwrap_or(0),
        );
        let mut i3 = (cp >> SHIFT_3) & INDEX_3_MASK;
        let data_block;
        if i3_block & 0x8000 == 0 {
            // 16-bit indexes.
            data_block = u32::from(self.index.get((i3_block + i3) as usize).unwrap_or(0));
        } else {
            // 18-bit indexes stored in groups of 9 entries per 8 indexes.
            i3_block = (i3_block & 0x7FFF) + (i3 & !7) + (i3 >> 3);
            i3 &= 7;
            let high = (u32::from(self.index.get(i3_block as usize).unwrap_or(0))
                << (2 + 2 * i3))
                & 0x30000;
            i3_block += 1;
            data_block =
                high | u32::from(self.index.get((i3_block + i3) as usize).unwrap_or(0));
        }
        (data_block + (cp & SMALL_DATA_MASK)) as usize
    }

    fn code_point_index(&self, fast_max: u32, cp: u32) -> usize {
        if cp <= fast_max {
            self.fast_index(cp)
        } else if cp <= 0x10_FFFF {
            if cp >= self.high_start {
                self.data.len() - HIGH_VALUE_NEG_DATA_OFFSET
            } else {
                self.small_index(cp)
            }
        } else {
            self.data.len() - ERROR_VALUE_NEG_DATA_OFFSET
        }
    }

    /// Returns the value for a code point, the high value for
    /// `high_start ..= U+10FFFF`, or the error value for anything above
    /// U+10FFFF.
    pub fn get(&self, cp: u32) -> u32 {
        let fast_max = match self.trie_type {
            TrieType::Fast => 0xFFFF,
            TrieType::Small => SMALL_LIMIT - 1,
        };
        let index = self.code_point_index(fast_max, cp);
        self.data
            .value(index)
            .unwrap_or_else(|| self.error_value())
    }

    /// The value reserved for out-of-range and ill-formed input.
    pub fn error_value(&self) -> u32 {
        self.data
            .value(self.data.len() - ERROR_VALUE_NEG_DATA_OFFSET)
            .unwrap_or(0)
    }
}
