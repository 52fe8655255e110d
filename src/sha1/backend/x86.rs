use std::arch::x86_64::*;

use crate::sha1::backend::BlockTransform;
use crate::sha1::{Block, ChainingState, Workspace};

/// Uses the x86 SHA extensions. Each `sha1rnds4` instruction performs four rounds, `sha1msg1` and `sha1msg2` derive
/// four schedule words at a time. The schedule lives in registers, so the workspace is left untouched.
pub struct ShaNi;

impl BlockTransform for ShaNi {
    const NAME: &'static str = "sha-ni";

    fn is_supported() -> bool {
        is_x86_feature_detected!("sha")
            && is_x86_feature_detected!("sse2")
            && is_x86_feature_detected!("ssse3")
            && is_x86_feature_detected!("sse4.1")
    }

    fn transform(state: &mut ChainingState, block: &Block, _workspace: &mut Workspace) {
        assert!(Self::is_supported(), "the CPU does not support the SHA extensions");

        unsafe { transform_sha_ni(state, block) }
    }
}

/// four rounds with round function ``$i``, where ``$h1`` is turned into the next ``e`` added onto ``$wk``
macro_rules! rounds4 {
    ($h0:ident, $h1:ident, $wk:expr, $i:expr) => {
        _mm_sha1rnds4_epu32($h0, _mm_sha1nexte_epu32($h1, $wk), $i)
    };
}

/// the next four schedule words from the previous sixteen
macro_rules! schedule {
    ($v0:expr, $v1:expr, $v2:expr, $v3:expr) => {
        _mm_sha1msg2_epu32(_mm_xor_si128(_mm_sha1msg1_epu32($v0, $v1), $v2), $v3)
    };
}

macro_rules! schedule_rounds4 {
    ($h0:ident, $h1:ident, $w0:ident, $w1:ident, $w2:ident, $w3:ident, $w4:ident, $i:expr) => {
        $w4 = schedule!($w0, $w1, $w2, $w3);
        $h1 = rounds4!($h0, $h1, $w4, $i);
    };
}

/// # Safety
/// The CPU must support the `sha`, `sse2`, `ssse3` and `sse4.1` features.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
unsafe fn transform_sha_ni(state: &mut ChainingState, block: &Block) {
    // reverses all sixteen bytes: big endian words, word 0 in the highest lane
    let byte_mask = _mm_set_epi64x(0x0001_0203_0405_0607, 0x0809_0A0B_0C0D_0E0F);

    let state_abcd = _mm_set_epi32(state[0] as i32, state[1] as i32, state[2] as i32, state[3] as i32);
    let state_e = _mm_set_epi32(state[4] as i32, 0, 0, 0);

    let block_ptr = block.as_ptr() as *const __m128i;
    let mut w0 = _mm_shuffle_epi8(_mm_loadu_si128(block_ptr), byte_mask);
    let mut w1 = _mm_shuffle_epi8(_mm_loadu_si128(block_ptr.add(1)), byte_mask);
    let mut w2 = _mm_shuffle_epi8(_mm_loadu_si128(block_ptr.add(2)), byte_mask);
    let mut w3 = _mm_shuffle_epi8(_mm_loadu_si128(block_ptr.add(3)), byte_mask);
    let mut w4;

    let mut h0 = state_abcd;
    let mut h1 = _mm_add_epi32(state_e, w0);

    // rounds 0 to 19
    h1 = _mm_sha1rnds4_epu32(h0, h1, 0);
    h0 = rounds4!(h1, h0, w1, 0);
    h1 = rounds4!(h0, h1, w2, 0);
    h0 = rounds4!(h1, h0, w3, 0);
    schedule_rounds4!(h0, h1, w0, w1, w2, w3, w4, 0);

    // rounds 20 to 39
    schedule_rounds4!(h1, h0, w1, w2, w3, w4, w0, 1);
    schedule_rounds4!(h0, h1, w2, w3, w4, w0, w1, 1);
    schedule_rounds4!(h1, h0, w3, w4, w0, w1, w2, 1);
    schedule_rounds4!(h0, h1, w4, w0, w1, w2, w3, 1);
    schedule_rounds4!(h1, h0, w0, w1, w2, w3, w4, 1);

    // rounds 40 to 59
    schedule_rounds4!(h0, h1, w1, w2, w3, w4, w0, 2);
    schedule_rounds4!(h1, h0, w2, w3, w4, w0, w1, 2);
    schedule_rounds4!(h0, h1, w3, w4, w0, w1, w2, 2);
    schedule_rounds4!(h1, h0, w4, w0, w1, w2, w3, 2);
    schedule_rounds4!(h0, h1, w0, w1, w2, w3, w4, 2);

    // rounds 60 to 79
    schedule_rounds4!(h1, h0, w1, w2, w3, w4, w0, 3);
    schedule_rounds4!(h0, h1, w2, w3, w4, w0, w1, 3);
    schedule_rounds4!(h1, h0, w3, w4, w0, w1, w2, 3);
    schedule_rounds4!(h0, h1, w4, w0, w1, w2, w3, 3);
    schedule_rounds4!(h1, h0, w0, w1, w2, w3, w4, 3);

    let state_abcd = _mm_add_epi32(state_abcd, h0);
    let state_e = _mm_sha1nexte_epu32(h1, state_e);

    state[0] = _mm_extract_epi32(state_abcd, 3) as u32;
    state[1] = _mm_extract_epi32(state_abcd, 2) as u32;
    state[2] = _mm_extract_epi32(state_abcd, 1) as u32;
    state[3] = _mm_extract_epi32(state_abcd, 0) as u32;
    state[4] = _mm_extract_epi32(state_e, 3) as u32;
}

#[cfg(test)]
mod tests {
    use crate::sha1::backend::Reference;
    use crate::sha1::tests::abc_block;
    use crate::sha1::{INITIAL, SCHEDULE_LENGTH};

    use super::*;

    #[test]
    fn test_sha_ni_leaves_workspace_untouched() {
        if !ShaNi::is_supported() {
            return;
        }

        let mut workspace = [0x1234_5678u32; SCHEDULE_LENGTH];
        let mut state = INITIAL;
        ShaNi::transform(&mut state, &abc_block(), &mut workspace);
        assert!(workspace.iter().all(|&word| word == 0x1234_5678));

        let mut expected = INITIAL;
        Reference::transform(&mut expected, &abc_block(), &mut workspace);
        assert_eq!(state, expected);
    }
}
