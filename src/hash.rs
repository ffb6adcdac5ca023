//! Keyed stream hashing.
//!
//! The digest appended to every artifact is a keyed BLAKE2b
//! hash over all ciphertext blocks. Key and output sizes follow
//! the bounds of libsodium's `crypto_generichash`.

use {
    crate::{
        error::{Error, Result},
        io::Read,
    },
    alloc::{vec, vec::Vec},
    blake2b_simd::{Params, State},
    core::fmt,
    rand_core::{CryptoRng, RngCore},
    subtle::ConstantTimeEq,
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

/// The recommended hash key size.
pub const HASHKEYSIZE: usize = 32;
/// The smallest permitted hash key size.
pub const HASHKEYSIZE_MIN: usize = 16;
/// The largest permitted hash key size.
pub const HASHKEYSIZE_MAX: usize = 64;

/// The recommended digest size.
pub const HASHSIZE: usize = 32;
/// The smallest permitted digest size.
pub const HASHSIZE_MIN: usize = 16;
/// The largest permitted digest size.
pub const HASHSIZE_MAX: usize = 64;

pub(crate) fn check_hash_size(size: usize) -> Result<()> {
    if (HASHSIZE_MIN..=HASHSIZE_MAX).contains(&size) {
        Ok(())
    } else {
        Err(Error::InvalidHashSize(size))
    }
}

/// A secret key for [`StreamHash`].
///
/// The key is wiped when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HashKey(Vec<u8>);

impl HashKey {
    /// Copies `key`, checking that its size is within
    /// [`HASHKEYSIZE_MIN`]..=[`HASHKEYSIZE_MAX`].
    pub fn new(key: &[u8]) -> Result<Self> {
        if !(HASHKEYSIZE_MIN..=HASHKEYSIZE_MAX).contains(&key.len()) {
            return Err(Error::InvalidHashKeySize(key.len()));
        }
        Ok(Self(key.to_vec()))
    }

    /// Generates a random key of `size` bytes.
    pub fn generate<R>(rng: &mut R, size: usize) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let mut key = Zeroizing::new(vec![0u8; size]);
        rng.try_fill_bytes(&mut key)?;
        Self::new(&key)
    }

    /// Returns the key material.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the key size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: keys are never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashKey({} bytes)", self.0.len())
    }
}

/// Incremental keyed hash.
///
/// Any number of [`update`](Self::update) calls are followed by
/// exactly one [`finalize`](Self::finalize).
pub struct StreamHash {
    state: State,
}

impl StreamHash {
    /// Starts a hash producing `size` bytes of output.
    pub fn new(key: &HashKey, size: usize) -> Result<Self> {
        check_hash_size(size)?;
        let state = Params::new()
            .hash_length(size)
            .key(key.as_bytes())
            .to_state();
        Ok(Self { state })
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.state.update(data);
        self
    }

    /// Absorbs everything `src` yields until EOF.
    ///
    /// Returns the number of bytes absorbed.
    pub fn update_from<R: Read + ?Sized>(&mut self, src: &mut R) -> Result<u64> {
        let mut buf = [0u8; 8 * 1024];
        let mut len = 0;
        loop {
            let nr = src.read(&mut buf)?;
            if nr == 0 {
                break;
            }
            self.state.update(&buf[..nr]);
            len += nr as u64;
        }
        Ok(len)
    }

    /// Produces the digest.
    pub fn finalize(self) -> Digest {
        Digest(self.state.finalize().as_bytes().to_vec())
    }
}

/// The output of a [`StreamHash`].
#[derive(Clone, Eq, PartialEq)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Reports, in constant time, whether `other` is the same
    /// digest.
    pub fn verify(&self, other: &[u8]) -> bool {
        self.0.as_slice().ct_eq(other).into()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
