#![allow(dead_code)]

use std::mem::size_of;

use jester_legacy_sha1::sha1::{Block, BLOCK_LENGTH_BYTES};

/// Split a message into blocks and apply the standard padding: a single 1-bit, zeroes, and the message length in
/// bits as a big endian number at the end of the last block. May produce an extra block if the length does not fit.
pub fn pad_message(message: &[u8]) -> Vec<Block> {
    let mut blocks: Vec<Block> = message
        .chunks_exact(BLOCK_LENGTH_BYTES)
        .map(|chunk| {
            let mut block = [0u8; BLOCK_LENGTH_BYTES];
            block.copy_from_slice(chunk);
            block
        })
        .collect();

    blocks.extend(padding_blocks(message.len() as u64, &message[message.len() / BLOCK_LENGTH_BYTES * BLOCK_LENGTH_BYTES..]));
    blocks
}

/// The last one or two blocks of a message of ``message_length`` bytes whose incomplete tail is ``remaining_data``.
pub fn padding_blocks(message_length: u64, remaining_data: &[u8]) -> Vec<Block> {
    assert!(remaining_data.len() < BLOCK_LENGTH_BYTES);

    let message_length_bits = (message_length * 8).to_be_bytes();

    let mut last_block = [0u8; BLOCK_LENGTH_BYTES];
    last_block[..remaining_data.len()].copy_from_slice(remaining_data);
    last_block[remaining_data.len()] = 0x80;

    // if there is not enough space for the message length to be appended, a new block must be created
    if remaining_data.len() + 1 + size_of::<u64>() > BLOCK_LENGTH_BYTES {
        let mut overflow_block = [0u8; BLOCK_LENGTH_BYTES];
        overflow_block[BLOCK_LENGTH_BYTES - 8..].copy_from_slice(&message_length_bits);
        vec![last_block, overflow_block]
    } else {
        last_block[BLOCK_LENGTH_BYTES - 8..].copy_from_slice(&message_length_bits);
        vec![last_block]
    }
}

/// Decode a digest written as space separated groups of hex digits, as FIPS-180-1 prints them.
pub fn digest(groups: &str) -> Vec<u8> {
    hex::decode(groups.replace(' ', "")).unwrap()
}
