//! This crate contains software and hardware-assisted implementations of the SHA-1 block compression function.
//! It offers the granular API only: the chaining state is initialized and advanced one 64-byte block at a time,
//! padding and length encoding are left to the caller.
//!
//! SHA-1 is broken with respect to collision resistance. It is provided for compatibility with legacy protocols and
//! integrity checks and must not be used as the hash function of new constructions.

#![allow(clippy::unreadable_literal)]

pub mod array_util;
pub mod sha1;

pub use crate::sha1::backend::{Backend, BlockTransform, UnknownBackendError};
pub use crate::sha1::{init_state, transform, transform_blocks, Block, ChainingState, Workspace, INITIAL};
