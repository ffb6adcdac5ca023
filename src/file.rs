use {
    crate::{
        engine::Engine,
        error::{Error, Result},
        hash::{self, HashKey},
        DEFAULT_BLOCK_SIZE,
    },
    aead::{AeadCore, AeadInPlace, KeyInit, Nonce},
    alloc::vec::Vec,
};

/// Options for configuring a [`FileCryptor`].
#[derive(Clone, Copy, Debug)]
pub struct CryptorOpts<'a> {
    blocksize: usize,
    hashsize: usize,
    ad: &'a [u8],
}

impl Default for CryptorOpts<'_> {
    fn default() -> Self {
        CryptorOpts::new()
    }
}

impl<'a> CryptorOpts<'a> {
    /// Create the default set of options.
    pub const fn new() -> Self {
        Self {
            blocksize: DEFAULT_BLOCK_SIZE,
            hashsize: hash::HASHSIZE,
            ad: &[0u8; 0],
        }
    }

    /// Set the plaintext block size.
    ///
    /// By default, [`DEFAULT_BLOCK_SIZE`] is used.
    pub fn with_blocksize(&mut self, blocksize: usize) -> &mut Self {
        self.blocksize = blocksize;
        self
    }

    /// Set the size of the trailing digest.
    ///
    /// By default, [`HASHSIZE`](crate::HASHSIZE) is used.
    pub fn with_hashsize(&mut self, hashsize: usize) -> &mut Self {
        self.hashsize = hashsize;
        self
    }

    /// Set the additional authenticated data used per-block.
    ///
    /// The same data authenticates every block of an artifact
    /// and must be supplied again to decrypt it.
    ///
    /// By default, no additional authenticated data is used.
    pub fn with_additional_data(&mut self, ad: &'a [u8]) -> &mut Self {
        self.ad = ad;
        self
    }

    /// Build the options.
    pub fn build(self) -> Self {
        self
    }
}

/// Encrypts and decrypts files blockwise, appending a keyed
/// digest of the ciphertext.
///
/// Each block of plaintext is encrypted under a running nonce
/// which starts at the initial nonce and is incremented after
/// every full block, so reordered blocks fail to decrypt. The
/// keyed hash over every sealed block is written after the last
/// block, so dropping whole blocks from the end is detected.
///
/// None of `blocksize`, `hashsize`, the keys, or the initial
/// nonce are recorded in the artifact. They must be provided
/// again, unchanged, to decrypt it.
///
/// A [`FileCryptor`] is immutable; every call to
/// [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt)
/// starts from the initial nonce with a fresh hash.
pub struct FileCryptor<A: AeadCore> {
    pub(crate) engine: Engine<A>,
    pub(crate) nonce: Nonce<A>,
    pub(crate) header: Vec<u8>,
    pub(crate) blocksize: usize,
    pub(crate) hashkey: HashKey,
    pub(crate) hashsize: usize,
}

impl<A: AeadCore> FileCryptor<A> {
    /// The number of tag bytes added to each block.
    pub const MACSIZE: usize = Engine::<A>::TAG_SIZE;

    /// Returns the plaintext block size.
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }

    /// Returns the size of the trailing digest.
    pub fn hashsize(&self) -> usize {
        self.hashsize
    }

    /// Returns the size of a sealed full block.
    pub(crate) fn chunk_size(&self) -> usize {
        Self::MACSIZE + self.blocksize
    }

    /// Returns the size in bytes of the artifact produced by
    /// encrypting `n` bytes of plaintext, or `None` if it does not
    /// fit in a `u64`.
    pub fn artifact_size(&self, n: u64) -> Option<u64> {
        let nblocks = n.div_ceil(self.blocksize as u64);
        nblocks
            .checked_mul(Self::MACSIZE as u64)?
            .checked_add(n)?
            .checked_add(self.hashsize as u64)
    }
}

impl<A> FileCryptor<A>
where
    A: AeadInPlace + KeyInit,
{
    /// Creates a [`FileCryptor`].
    ///
    /// `key` must be exactly the key size of `A` and `nonce`
    /// exactly its nonce size. `blocksize` must be at least one.
    /// `hashkey` and `hashsize` must lie within
    /// [`HASHKEYSIZE_MIN`](crate::HASHKEYSIZE_MIN)..=[`HASHKEYSIZE_MAX`](crate::HASHKEYSIZE_MAX)
    /// and
    /// [`HASHSIZE_MIN`](crate::HASHSIZE_MIN)..=[`HASHSIZE_MAX`](crate::HASHSIZE_MAX).
    pub fn new(
        key: &[u8],
        nonce: &[u8],
        blocksize: usize,
        hashkey: &[u8],
        hashsize: usize,
    ) -> Result<Self> {
        let opts = CryptorOpts::new()
            .with_blocksize(blocksize)
            .with_hashsize(hashsize)
            .build();
        Self::new_with(key, nonce, hashkey, opts)
    }

    /// Creates a [`FileCryptor`] with the provided options.
    pub fn new_with(
        key: &[u8],
        nonce: &[u8],
        hashkey: &[u8],
        opts: CryptorOpts<'_>,
    ) -> Result<Self> {
        let engine = Engine::new(key)?;
        let nonce = initial_nonce::<A>(nonce)?;
        if opts.blocksize < 1 {
            return Err(Error::InvalidBlockSize);
        }
        let hashkey = HashKey::new(hashkey)?;
        hash::check_hash_size(opts.hashsize)?;

        Ok(FileCryptor {
            engine,
            nonce,
            header: opts.ad.to_vec(),
            blocksize: opts.blocksize,
            hashkey,
            hashsize: opts.hashsize,
        })
    }
}

pub(crate) fn initial_nonce<A: AeadCore>(nonce: &[u8]) -> Result<Nonce<A>> {
    let want = Engine::<A>::NONCE_SIZE;
    if nonce.len() != want {
        return Err(Error::InvalidNonceSize {
            want,
            got: nonce.len(),
        });
    }
    Ok(Nonce::<A>::clone_from_slice(nonce))
}
