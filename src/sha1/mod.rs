//! The SHA-1 compression function of FIPS-180-1. A chaining state is created with `init_state` (or copied from
//! `INITIAL`) and then advanced by `transform`, one 64-byte block at a time.

use std::convert::TryInto;

use zeroize::Zeroize;

use crate::array_util::u32a_to_bytes_be;
use crate::sha1::backend::{BlockTransform, Reference};

pub mod backend;
pub mod rounds;

/// the number of double words in the chaining state
pub const STATE_LENGTH_DOUBLE_WORDS: usize = 5;

/// the hash block length in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the hash block length in 32 bit integers
pub const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// the number of rounds and therefore the length of the expanded message schedule
pub const SCHEDULE_LENGTH: usize = 80;

/// the length of a serialized chaining state in bytes
pub const OUTPUT_LENGTH_BYTES: usize = STATE_LENGTH_DOUBLE_WORDS * 4;

/// The 160 bit intermediate hash value carried from one block to the next.
pub type ChainingState = [u32; STATE_LENGTH_DOUBLE_WORDS];

/// One block of input data.
pub type Block = [u8; BLOCK_LENGTH_BYTES];

/// Scratch space for the message schedule. Its contents are unspecified after a transform.
pub type Workspace = [u32; SCHEDULE_LENGTH];

/// The initial state for any SHA1 hash. From here, all blocks are applied.
pub const INITIAL: ChainingState = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Reset ``state`` to the initial chaining value.
pub fn init_state(state: &mut ChainingState) {
    *state = INITIAL;
}

/// Compress one block into the chaining state using the portable reference implementation.
///
/// # Parameters
/// - ``state`` the chaining state that is advanced in place
/// - ``block`` 64 bytes of input, read as sixteen big endian words
/// - ``workspace`` scratch space for the message schedule, may hold arbitrary data on entry
pub fn transform(state: &mut ChainingState, block: &Block, workspace: &mut Workspace) {
    Reference::transform(state, block, workspace)
}

/// Compress all ``blocks`` in order, sharing one workspace between them.
pub fn transform_blocks(state: &mut ChainingState, blocks: &[Block], workspace: &mut Workspace) {
    for block in blocks {
        transform(state, block, workspace);
    }
}

/// Like `transform`, but accepts a slice. The slice must be exactly one block long, otherwise this function panics.
pub fn transform_slice(state: &mut ChainingState, block: &[u8], workspace: &mut Workspace) {
    assert_eq!(block.len(), BLOCK_LENGTH_BYTES);

    let block: &Block = block.try_into().unwrap();
    transform(state, block, workspace)
}

/// Generates a raw ``[u8; 20]`` array from a chaining state. After the last block has been compressed, this is the
/// digest of the message.
pub fn raw(state: &ChainingState) -> [u8; OUTPUT_LENGTH_BYTES] {
    let mut bytes = [0u8; OUTPUT_LENGTH_BYTES];
    u32a_to_bytes_be(state, &mut bytes);
    bytes
}

/// Overwrite the workspace with zeroes. The writes are not elided even if the workspace is never read again.
pub fn wipe_workspace(workspace: &mut Workspace) {
    workspace.zeroize();
}
