use {
    crate::{
        buf::Buf,
        error::Result,
        file::FileCryptor,
        hash::StreamHash,
        io::{Read, Write},
        nonce,
    },
    aead::AeadInPlace,
};

impl<A: AeadInPlace> FileCryptor<A> {
    /// Encrypts `src` until EOF, writing the artifact to `dst`.
    ///
    /// The artifact is one sealed block per `blocksize` bytes of
    /// plaintext (the last one possibly shorter) followed by the
    /// `hashsize`-byte digest. An empty `src` produces only the
    /// digest.
    ///
    /// If an error occurs, `dst` may already hold a prefix of the
    /// artifact.
    pub fn encrypt<R, W>(&self, src: &mut R, dst: &mut W) -> Result<()>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut hash = StreamHash::new(&self.hashkey, self.hashsize)?;
        let mut nonce = self.nonce.clone();
        let mut buf = Buf::with_capacity(self.chunk_size());
        let mut blocks = 0u64;
        let mut bytes = 0u64;

        loop {
            buf.reset();
            let n = buf.read_from(src, self.blocksize)?;
            if n == 0 {
                break;
            }
            bytes += n as u64;

            self.engine.seal(&nonce, &self.header, &mut buf)?;
            buf.write_to(dst)?;
            hash.update(buf.as_slice());
            tracing::trace!(block = blocks, len = n, "sealed block");
            blocks += 1;

            if n < self.blocksize {
                // Partial blocks are always last.
                break;
            }
            nonce = nonce::next::<A>(nonce);
        }

        let digest = hash.finalize();
        dst.write_all(digest.as_bytes())?;
        dst.flush()?;

        tracing::debug!(blocks, bytes, "encrypted stream");
        Ok(())
    }
}
