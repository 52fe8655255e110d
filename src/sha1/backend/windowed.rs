use crate::array_util::align_to_u32a_be;
use crate::sha1::backend::BlockTransform;
use crate::sha1::rounds::round;
use crate::sha1::{Block, ChainingState, Workspace, BLOCK_LENGTH_DOUBLE_WORDS, SCHEDULE_LENGTH};

/// Keeps only the last sixteen schedule words in a ring buffer at the start of the workspace and derives each word
/// in the round that consumes it.
pub struct Windowed;

/// index mask of the ring buffer
const WINDOW_MASK: usize = BLOCK_LENGTH_DOUBLE_WORDS - 1;

impl BlockTransform for Windowed {
    const NAME: &'static str = "windowed";

    fn transform(state: &mut ChainingState, block: &Block, workspace: &mut Workspace) {
        let window = &mut workspace[..BLOCK_LENGTH_DOUBLE_WORDS];
        align_to_u32a_be(window, block);

        let mut round_state = *state;

        for i in 0..SCHEDULE_LENGTH {
            if i >= BLOCK_LENGTH_DOUBLE_WORDS {
                // slot i & 15 still holds w[i - 16]
                window[i & WINDOW_MASK] = (window[(i - 3) & WINDOW_MASK]
                    ^ window[(i - 8) & WINDOW_MASK]
                    ^ window[(i - 14) & WINDOW_MASK]
                    ^ window[i & WINDOW_MASK])
                    .rotate_left(1);
            }

            round(&mut round_state, i, window[i & WINDOW_MASK]);
        }

        for (word, round_word) in state.iter_mut().zip(round_state.iter()) {
            *word = word.wrapping_add(*round_word);
        }
    }
}
