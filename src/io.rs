use crate::error::{Error, Result};

/// Read is roughly equivalent to [`std::io::Read`], but works
/// with `no_std`.
///
/// When the `std` feature is enabled, all types that implement
/// [`std::io::Read`] also implement [`Read`].
pub trait Read {
    /// Equivalent to [`std::io::Read::read`].
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Equivalent to [`std::io::Read::read_exact`].
    ///
    /// If it reads fewer than `buf.len()` bytes, it returns
    /// [`Error::UnexpectedEof`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        match read_full(self, buf) {
            Ok(n) if n == buf.len() => Ok(()),
            Ok(n) => Err(Error::UnexpectedEof(n)),
            Err(err) => Err(err),
        }
    }
}

/// Reads into `buf` until it is full or `r` reaches EOF.
pub(crate) fn read_full<R: Read + ?Sized>(
    r: &mut R,
    buf: &mut [u8],
) -> Result<usize> {
    let mut i = 0;
    while i < buf.len() {
        let n = r.read(&mut buf[i..])?;
        if n == 0 {
            break;
        }
        i += n;
    }
    Ok(i)
}

/// Write is roughly equivalent to [`std::io::Write`], but works
/// with `no_std`.
///
/// When the `std` feature is enabled, all types that implement
/// [`std::io::Write`] also implement [`Write`].
pub trait Write {
    /// Equivalent to [`std::io::Write::write`].
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Equivalent to [`std::io::Write::write_all`].
    ///
    /// If it cannot write the entirety of `buf`, it returns
    /// [`Error::ShortWrite`].
    fn write_all(&mut self, mut buf: &[u8]) -> Result<()> {
        let mut nw = 0;
        while !buf.is_empty() {
            match self.write(buf) {
                Ok(0) => return Err(Error::ShortWrite(nw)),
                Ok(n) => {
                    nw += n;
                    buf = &buf[n..]
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Equivalent to [`std::io::Write::flush`].
    fn flush(&mut self) -> Result<()>;
}

/// Seek is the subset of [`std::io::Seek`] needed to locate the
/// digest at the end of an encrypted artifact.
///
/// When the `std` feature is enabled, all types that implement
/// [`std::io::Seek`] also implement [`Seek`].
pub trait Seek {
    /// Moves to the absolute offset `pos` and returns it.
    fn seek_to(&mut self, pos: u64) -> Result<u64>;

    /// Moves to the end of the stream and returns its length.
    fn seek_end(&mut self) -> Result<u64>;

    /// Returns the current offset from the start of the stream.
    fn position(&mut self) -> Result<u64>;
}

#[cfg(feature = "std")]
mod std_io {
    use crate::{Read, Result, Seek, Write};

    impl<T: std::io::Read + ?Sized> Read for T {
        #[inline]
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            loop {
                match std::io::Read::read(self, buf) {
                    Ok(n) => return Ok(n),
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    impl<T: std::io::Write + ?Sized> Write for T {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            loop {
                match std::io::Write::write(self, buf) {
                    Ok(n) => return Ok(n),
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        fn flush(&mut self) -> Result<()> {
            Ok(std::io::Write::flush(self)?)
        }
    }

    impl<T: std::io::Seek + ?Sized> Seek for T {
        fn seek_to(&mut self, pos: u64) -> Result<u64> {
            Ok(std::io::Seek::seek(self, std::io::SeekFrom::Start(pos))?)
        }

        fn seek_end(&mut self) -> Result<u64> {
            Ok(std::io::Seek::seek(self, std::io::SeekFrom::End(0))?)
        }

        fn position(&mut self) -> Result<u64> {
            Ok(std::io::Seek::stream_position(self)?)
        }
    }
}

#[cfg(not(feature = "std"))]
pub use no_std_io::Cursor;

#[cfg(not(feature = "std"))]
mod no_std_io {
    use {
        crate::{Read, Result, Seek, Write},
        alloc::vec::Vec,
        core::cmp,
    };

    impl Read for &[u8] {
        #[inline]
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            let n = cmp::min(buf.len(), self.len());
            let (head, tail) = self.split_at(n);
            buf[..n].copy_from_slice(head);
            *self = tail;
            Ok(n)
        }
    }

    impl Write for Vec<u8> {
        #[inline]
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            self.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
    }

    /// An in-memory, seekable reader.
    ///
    /// Stands in for `std::io::Cursor` without `std`.
    #[derive(Clone, Debug, Default)]
    pub struct Cursor<T> {
        inner: T,
        pos: u64,
    }

    impl<T> Cursor<T> {
        /// Creates a cursor positioned at the start of `inner`.
        pub const fn new(inner: T) -> Self {
            Self { inner, pos: 0 }
        }

        /// Returns the underlying value.
        pub fn into_inner(self) -> T {
            self.inner
        }
    }

    impl<T: AsRef<[u8]>> Read for Cursor<T> {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            let data = self.inner.as_ref();
            let start = cmp::min(self.pos, data.len() as u64) as usize;
            let mut rest = &data[start..];
            let n = rest.read(buf)?;
            self.pos += n as u64;
            Ok(n)
        }
    }

    impl<T: AsRef<[u8]>> Seek for Cursor<T> {
        fn seek_to(&mut self, pos: u64) -> Result<u64> {
            self.pos = pos;
            Ok(pos)
        }

        fn seek_end(&mut self) -> Result<u64> {
            self.pos = self.inner.as_ref().len() as u64;
            Ok(self.pos)
        }

        fn position(&mut self) -> Result<u64> {
            Ok(self.pos)
        }
    }
}
