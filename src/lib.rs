//! **filecryptor** encrypts files blockwise with an AEAD and
//! appends a keyed digest of the ciphertext.
//!
//! The plaintext is broken into blocks and each block is sealed
//! separately, so files larger than memory can be encrypted and
//! decrypted in one left-to-right pass. Every block is
//! `blocksize` bytes except the last, which may be shorter.
//!
//! A running nonce starts at the caller's initial nonce and is
//! incremented after every block. Reordered blocks are sealed
//! under the wrong nonce and fail to authenticate.
//!
//! Per-block tags cannot see whole blocks being dropped from the
//! end of the file. To catch that, a keyed BLAKE2b hash is
//! computed over every sealed block and written after the last
//! one:
//!
//! ```text
//! artifact := block* digest
//! block    := ciphertext || tag    // MACSIZE + plaintext bytes
//! digest   := byte[hashsize]       // keyed hash over all blocks
//! ```
//!
//! Nothing else is stored. The key, initial nonce, block size,
//! hash key, and hash size must all be known to the reader, and
//! any mismatch surfaces as [`Error::Integrity`].
//!
//! Decryption writes each block as soon as it authenticates, but
//! the digest is only checked at the end. Do not act on the
//! plaintext until [`FileCryptor::decrypt`] returns `Ok`.
//!
//! # Example
//!
//! ```
//! # fn main() -> filecryptor::Result<()> {
//! use chacha20poly1305::ChaCha20Poly1305;
//! use filecryptor::{FileCryptor, HASHKEYSIZE, HASHSIZE};
//! use std::io::Cursor;
//!
//! let c = FileCryptor::<ChaCha20Poly1305>::new(
//!     &[0x11; 32],
//!     &[0x22; 12],
//!     4096,
//!     &[0x33; HASHKEYSIZE],
//!     HASHSIZE,
//! )?;
//!
//! let mut artifact = Vec::new();
//! c.encrypt(&mut &b"hello, world!"[..], &mut artifact)?;
//!
//! let mut plaintext = Vec::new();
//! c.decrypt(&mut Cursor::new(artifact), &mut plaintext)?;
//! assert_eq!(plaintext, b"hello, world!");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

mod buf;
mod engine;
mod error;
mod file;
mod hash;
mod io;
pub mod nonce;
mod reader;
mod stream;
mod writer;

pub use error::*;
pub use file::*;
pub use hash::{
    Digest, HashKey, StreamHash, HASHKEYSIZE, HASHKEYSIZE_MAX, HASHKEYSIZE_MIN,
    HASHSIZE, HASHSIZE_MAX, HASHSIZE_MIN,
};
pub use io::*;
pub use stream::*;

/// The default block size used by [`FileCryptor`] and
/// [`StreamCryptor`].
pub const DEFAULT_BLOCK_SIZE: usize = 1 << 16;
