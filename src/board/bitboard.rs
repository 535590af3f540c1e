//! Bitboard occupancy set, one per player

use super::Pos;

/// One bit per intersection of an N x N board, row-major.
///
/// Sized at construction; `ceil(N*N / 64)` words. Bits are only ever set,
/// never cleared, since stones are not removed during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitboard {
    bits: Box<[u64]>,
    size: usize,
}

impl Bitboard {
    /// Create empty bitboard for a `size` x `size` grid
    pub fn new(size: usize) -> Self {
        let words = (size * size).div_ceil(64);
        Self {
            bits: vec![0u64; words].into_boxed_slice(),
            size,
        }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.size);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            bits: &self.bits,
            size: self.size,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    bits: &'a [u64],
    size: usize,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.bits.len() {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        // Padding bits past N*N are never set
        Some(Pos::from_index(idx, self.size))
    }
}
