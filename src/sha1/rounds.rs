//! Round functions, round constants and message schedule expansion shared by the portable backends.

use crate::sha1::{ChainingState, BLOCK_LENGTH_DOUBLE_WORDS, SCHEDULE_LENGTH};

/// round constant of rounds 0 to 19
pub const K0: u32 = 0x5A827999;

/// round constant of rounds 20 to 39
pub const K1: u32 = 0x6ED9EBA1;

/// round constant of rounds 40 to 59
pub const K2: u32 = 0x8F1BBCDC;

/// round constant of rounds 60 to 79
pub const K3: u32 = 0xCA62C1D6;

/// "choose": bits of ``y`` where ``x`` is set, bits of ``z`` elsewhere.
#[inline(always)]
pub fn choose(x: u32, y: u32, z: u32) -> u32 {
    z ^ (x & (y ^ z))
}

#[inline(always)]
pub fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// "majority": a bit is set if it is set in at least two inputs. The two terms never share a set bit, so the
/// addition cannot carry and equals the bitwise or.
#[inline(always)]
pub fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y).wrapping_add(z & (x ^ y))
}

/// Obtain the scrambled data and the magic constant of round ``i``.
#[inline(always)]
pub fn round_terms(i: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match i {
        0..=19 => (choose(b, c, d), K0),
        20..=39 => (parity(b, c, d), K1),
        40..=59 => (majority(b, c, d), K2),
        60..=79 => (parity(b, c, d), K3),
        _ => unreachable!(),
    }
}

/// Compute one round on the working registers ``[a, b, c, d, e]``.
#[inline(always)]
pub fn round(registers: &mut ChainingState, i: usize, data_word: u32) {
    let [a, b, c, d, e] = *registers;
    let (scrambled_data, magic_constant) = round_terms(i, b, c, d);

    let temp = a
        .rotate_left(5)
        .wrapping_add(scrambled_data)
        .wrapping_add(e)
        .wrapping_add(magic_constant)
        .wrapping_add(data_word);

    *registers = [temp, a, b.rotate_left(30), c, d];
}

/// Derive schedule words 16 to 79 from the sixteen block words in ``schedule[..16]``.
pub fn expand_schedule(schedule: &mut [u32; SCHEDULE_LENGTH]) {
    for i in BLOCK_LENGTH_DOUBLE_WORDS..SCHEDULE_LENGTH {
        schedule[i] = (schedule[i - 3] ^ schedule[i - 8] ^ schedule[i - 14] ^ schedule[i - 16]).rotate_left(1);
    }
}

/// Same schedule as `expand_schedule`, indexed from the oldest source word: word ``i + 16`` is the xor of words
/// ``i``, ``i + 2``, ``i + 8`` and ``i + 13``, rotated once it is complete.
pub fn expand_schedule_staged(schedule: &mut [u32; SCHEDULE_LENGTH]) {
    for i in 0..SCHEDULE_LENGTH - BLOCK_LENGTH_DOUBLE_WORDS {
        schedule[i + 16] = schedule[i] ^ schedule[i + 2] ^ schedule[i + 8] ^ schedule[i + 13];
        schedule[i + 16] = schedule[i + 16].rotate_left(1);
    }
}
