use {
    crate::{
        buf::Buf,
        error::{Error, Integrity, Result},
        file::FileCryptor,
        hash::StreamHash,
        io::{Read, Seek, Write},
        nonce,
    },
    aead::AeadInPlace,
    alloc::{vec, vec::Vec},
};

/// Returns how many of the `read` bytes obtained at `offset`
/// lie before the digest, which occupies the final `hashsize`
/// bytes of a `total`-byte artifact.
pub(crate) fn ciphertext_len(
    read: usize,
    offset: u64,
    total: u64,
    hashsize: usize,
) -> usize {
    let boundary = total.saturating_sub(hashsize as u64);
    let avail = boundary.saturating_sub(offset);
    if avail < read as u64 {
        avail as usize
    } else {
        read
    }
}

impl<A: AeadInPlace> FileCryptor<A> {
    /// Decrypts the artifact in `src`, writing the plaintext to
    /// `dst`.
    ///
    /// `src` must be seekable: the digest is read from its end
    /// before any block is decrypted.
    ///
    /// Fails with [`Error::Integrity`] if a block does not
    /// authenticate, if `src` is too short to hold a digest, or
    /// if the digest does not match. Blocks are written to `dst`
    /// as they authenticate, so on failure `dst` may hold a
    /// prefix of the plaintext that must be discarded.
    pub fn decrypt<R, W>(&self, src: &mut R, dst: &mut W) -> Result<()>
    where
        R: Read + Seek + ?Sized,
        W: Write + ?Sized,
    {
        let total = src.seek_end()?;
        let stored = self.read_digest(src, total)?;
        src.seek_to(0)?;

        let mut hash = StreamHash::new(&self.hashkey, self.hashsize)?;
        let mut nonce = self.nonce.clone();
        let chunk = self.chunk_size();
        let mut buf = Buf::with_capacity(chunk);
        let mut offset = src.position()?;
        let mut blocks = 0u64;

        loop {
            buf.reset();
            let nr = buf.read_from(src, chunk)?;
            let n = ciphertext_len(nr, offset, total, self.hashsize);
            offset += nr as u64;
            if n == 0 {
                break;
            }
            // Either the input ended or the read ran into the
            // digest. Both make this the final block.
            let last = n < chunk || n < nr;
            buf.truncate(n);

            hash.update(buf.as_slice());
            if self.engine.open(&nonce, &self.header, &mut buf).is_err() {
                tracing::warn!(block = blocks, "block failed authentication");
                return Err(Integrity::Authentication { block: blocks }.into());
            }
            buf.write_to(dst)?;
            tracing::trace!(block = blocks, len = buf.len(), "opened block");
            blocks += 1;

            if last {
                break;
            }
            nonce = nonce::next::<A>(nonce);
        }
        dst.flush()?;

        if !hash.finalize().verify(&stored) {
            tracing::warn!(blocks, "hash mismatch");
            return Err(Integrity::DigestMismatch.into());
        }
        tracing::debug!(blocks, len = total, "decrypted stream");
        Ok(())
    }

    fn read_digest<R>(&self, src: &mut R, total: u64) -> Result<Vec<u8>>
    where
        R: Read + Seek + ?Sized,
    {
        let truncated = Integrity::Truncated { len: total };
        let hashsize = self.hashsize as u64;
        if total < hashsize {
            tracing::warn!(len = total, "artifact too short for digest");
            return Err(truncated.into());
        }
        src.seek_to(total - hashsize)?;
        let mut stored = vec![0u8; self.hashsize];
        match src.read_exact(&mut stored) {
            Ok(()) => Ok(stored),
            Err(Error::UnexpectedEof(_)) => Err(truncated.into()),
            Err(err) => Err(err),
        }
    }
}
