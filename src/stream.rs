use {
    crate::{
        buf::Buf,
        engine::Engine,
        error::{Error, Integrity, Result},
        file::initial_nonce,
        io::{Read, Write},
        nonce,
    },
    aead::{AeadCore, AeadInPlace, KeyInit, Nonce},
};

/// Encrypts and decrypts streams blockwise, without a trailing
/// digest.
///
/// Blocks are sealed exactly as by [`FileCryptor`](crate::FileCryptor),
/// so tampering with or reordering blocks is detected. Dropping
/// whole blocks from the end of the stream is not; use
/// [`FileCryptor`](crate::FileCryptor) when that matters.
pub struct StreamCryptor<A: AeadCore> {
    engine: Engine<A>,
    nonce: Nonce<A>,
    blocksize: usize,
}

impl<A: AeadCore> StreamCryptor<A> {
    /// The number of tag bytes added to each block.
    pub const MACSIZE: usize = Engine::<A>::TAG_SIZE;

    /// Returns the plaintext block size.
    pub fn blocksize(&self) -> usize {
        self.blocksize
    }
}

impl<A> StreamCryptor<A>
where
    A: AeadInPlace + KeyInit,
{
    /// Creates a [`StreamCryptor`].
    pub fn new(key: &[u8], nonce: &[u8], blocksize: usize) -> Result<Self> {
        let engine = Engine::new(key)?;
        let nonce = initial_nonce::<A>(nonce)?;
        if blocksize < 1 {
            return Err(Error::InvalidBlockSize);
        }
        Ok(Self {
            engine,
            nonce,
            blocksize,
        })
    }
}

impl<A: AeadInPlace> StreamCryptor<A> {
    /// Encrypts `src` until EOF, writing sealed blocks to `dst`.
    pub fn encrypt<R, W>(&self, src: &mut R, dst: &mut W) -> Result<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut nonce = self.nonce.clone();
        let mut buf = Buf::with_capacity(Self::MACSIZE + self.blocksize);
        loop {
            buf.reset();
            let n = buf.read_from(src, self.blocksize)?;
            if n == 0 {
                break;
            }
            self.engine.seal(&nonce, &[], &mut buf)?;
            buf.write_to(dst)?;
            if n < self.blocksize {
                break;
            }
            nonce = nonce::next::<A>(nonce);
        }
        dst.flush()
    }

    /// Decrypts sealed blocks from `src` until EOF, writing the
    /// plaintext to `dst`.
    pub fn decrypt<R, W>(&self, src: &mut R, dst: &mut W) -> Result<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let chunk = Self::MACSIZE + self.blocksize;
        let mut nonce = self.nonce.clone();
        let mut buf = Buf::with_capacity(chunk);
        let mut block = 0u64;
        loop {
            buf.reset();
            let n = buf.read_from(src, chunk)?;
            if n == 0 {
                break;
            }
            if self.engine.open(&nonce, &[], &mut buf).is_err() {
                tracing::warn!(block, "block failed authentication");
                return Err(Integrity::Authentication { block }.into());
            }
            buf.write_to(dst)?;
            if n < chunk {
                break;
            }
            block += 1;
            nonce = nonce::next::<A>(nonce);
        }
        dst.flush()
    }
}
