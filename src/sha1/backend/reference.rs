use crate::array_util::align_to_u32a_be;
use crate::sha1::backend::BlockTransform;
use crate::sha1::rounds::{expand_schedule, round};
use crate::sha1::{Block, ChainingState, Workspace, BLOCK_LENGTH_DOUBLE_WORDS};

/// The portable implementation. The whole message schedule is expanded into the workspace before the first round.
pub struct Reference;

impl BlockTransform for Reference {
    const NAME: &'static str = "reference";

    fn transform(state: &mut ChainingState, block: &Block, workspace: &mut Workspace) {
        align_to_u32a_be(&mut workspace[..BLOCK_LENGTH_DOUBLE_WORDS], block);
        expand_schedule(workspace);

        let mut round_state = *state;

        for (i, data_word) in workspace.iter().enumerate() {
            round(&mut round_state, i, *data_word);
        }

        for (word, round_word) in state.iter_mut().zip(round_state.iter()) {
            *word = word.wrapping_add(*round_word);
        }
    }
}
