//! Bit access functions
//!
//! Low-level functions for getting and setting individual bits inside a
//! slice of packed 32-bit words. `BitGrid2D` calls these with one column
//! slice at a time.
//!
//! # Bit packing
//!
//! Bits are packed MSB-to-LSB within each 32-bit word: bit `n` of a slice
//! occupies bit `31 - (n % 32)` of word `n / 32`. Row 0 of a column is the
//! MSB of the column's first word.

/// Number of bits in one storage word.
pub const BITS_PER_WORD: u32 = 32;

/// Number of words needed to hold `nbits` bits.
#[inline]
pub fn words_for_bits(nbits: u32) -> u32 {
    nbits.div_ceil(BITS_PER_WORD)
}

#[inline]
fn mask(n: u32) -> u32 {
    0x8000_0000 >> (n & 31)
}

/// Get bit `n` (0 or 1).
///
/// # Panics
///
/// Panics if `n / 32` is past the end of `line`.
#[inline]
pub fn get_data_bit(line: &[u32], n: u32) -> u32 {
    (line[(n >> 5) as usize] >> (31 - (n & 31))) & 1
}

/// Set bit `n` to the low bit of `val`.
#[inline]
pub fn set_data_bit(line: &mut [u32], n: u32, val: u32) {
    if val & 1 == 1 {
        set_data_bit_val(line, n);
    } else {
        clear_data_bit(line, n);
    }
}

/// Set bit `n` to 1.
#[inline]
pub fn set_data_bit_val(line: &mut [u32], n: u32) {
    line[(n >> 5) as usize] |= mask(n);
}

/// Clear bit `n` to 0.
#[inline]
pub fn clear_data_bit(line: &mut [u32], n: u32) {
    line[(n >> 5) as usize] &= !mask(n);
}

/// Mask of the valid bits in the last word of an `nbits`-bit slice.
///
/// Bits outside the mask are padding and always zero.
#[inline]
pub fn last_word_mask(nbits: u32) -> u32 {
    match nbits & 31 {
        0 => u32::MAX,
        used => !(u32::MAX >> used),
    }
}
