use {
    crate::{
        error::{Error, Result},
        io::{read_full, Read, Write},
    },
    alloc::{vec, vec::Vec},
    core::ops::Drop,
    zeroize::Zeroize,
};

/// A fixed-capacity scratch buffer.
///
/// The capacity is allocated once. Only `data[..len]` is live;
/// the whole allocation is wiped when the buffer is dropped.
pub(crate) struct Buf {
    data: Vec<u8>,
    /// Number of live bytes.
    len: usize,
}

impl Buf {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            data: vec![0u8; cap],
            len: 0,
        }
    }

    /// Reports whether the buffer holds no live bytes.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Resets the buffer to empty.
    ///
    /// The previous contents are wiped.
    pub fn reset(&mut self) {
        self.data[..self.len].zeroize();
        self.len = 0;
    }

    /// Discards all but the first `n` live bytes.
    pub fn truncate(&mut self, n: usize) {
        if n < self.len {
            self.data[n..self.len].zeroize();
            self.len = n;
        }
    }

    /// Returns the live bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the live bytes as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data[..self.len]
    }

    /// Splits the live bytes at `mid`, returning [0, mid) and
    /// [mid, len).
    pub fn split_at_mut(&mut self, mid: usize) -> (&mut [u8], &mut [u8]) {
        self.as_mut_slice().split_at_mut(mid)
    }

    /// Appends `src` after the live bytes.
    pub fn extend_from_slice(&mut self, src: &[u8]) -> Result<()> {
        let end = self.len + src.len();
        if end > self.capacity() {
            return Err(Error::ShortWrite(self.capacity() - self.len));
        }
        self.data[self.len..end].copy_from_slice(src);
        self.len = end;
        Ok(())
    }

    /// Reads from `src` until the buffer holds `limit` bytes or
    /// `src` reaches EOF.
    ///
    /// Returns the number of bytes read.
    pub fn read_from<R: Read + ?Sized>(
        &mut self,
        src: &mut R,
        limit: usize,
    ) -> Result<usize> {
        let end = limit.min(self.capacity());
        if end <= self.len {
            return Ok(0);
        }
        let n = read_full(src, &mut self.data[self.len..end])?;
        self.len += n;
        Ok(n)
    }

    /// Writes the live bytes to `dst`.
    pub fn write_to<W: Write + ?Sized>(&self, dst: &mut W) -> Result<usize> {
        dst.write_all(self.as_slice())?;
        Ok(self.len)
    }
}

impl Drop for Buf {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}
