use {
    alloc::boxed::Box,
    core::{convert::From, error, fmt, result},
};

/// Result is a specialized [`result::Result`] for this module.
pub type Result<T> = result::Result<T, Error>;

/// An arbitrary error.
#[derive(Debug)]
pub struct OtherError {
    inner: Box<dyn error::Error + Send + Sync>,
}

impl OtherError {
    /// Allocate an [`OtherError`].
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self { inner: err.into() }
    }
}

impl fmt::Display for OtherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl error::Error for OtherError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.inner.source()
    }
}

/// Why an encrypted artifact was rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Integrity {
    /// The tag of the block at this index did not verify.
    Authentication {
        /// Zero-based index of the offending block.
        block: u64,
    },
    /// The artifact is too short to contain the trailing digest.
    Truncated {
        /// Length of the artifact in bytes.
        len: u64,
    },
    /// Every block verified, but the trailing digest did not match
    /// the digest recomputed over the blocks.
    DigestMismatch,
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integrity::Authentication { block } => {
                write!(f, "authentication failed for block {}", block)
            }
            Integrity::Truncated { len } => {
                write!(f, "artifact of {} bytes is too short for a digest", len)
            }
            Integrity::DigestMismatch => write!(f, "hash mismatch"),
        }
    }
}

/// Broad classification of an [`Error`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Invalid construction parameters.
    Configuration,
    /// Read, write, or seek failure.
    Io,
    /// The underlying primitive failed.
    Engine,
    /// Decryption or verification failed.
    Integrity,
    /// The random number generator failed while generating a key
    /// or nonce.
    Random,
}

/// Error is the error type returned by this module.
#[derive(Debug)]
pub enum Error {
    /// The AEAD key does not have the size required by the
    /// cipher.
    InvalidKeySize {
        /// Size required by the cipher.
        want: usize,
        /// Size that was provided.
        got: usize,
    },
    /// The initial nonce does not have the size required by the
    /// cipher.
    InvalidNonceSize {
        /// Size required by the cipher.
        want: usize,
        /// Size that was provided.
        got: usize,
    },
    /// The block size is zero.
    InvalidBlockSize,
    /// The hash key size is outside of
    /// [`HASHKEYSIZE_MIN`](crate::HASHKEYSIZE_MIN)..=[`HASHKEYSIZE_MAX`](crate::HASHKEYSIZE_MAX).
    InvalidHashKeySize(usize),
    /// The digest size is outside of
    /// [`HASHSIZE_MIN`](crate::HASHSIZE_MIN)..=[`HASHSIZE_MAX`](crate::HASHSIZE_MAX).
    InvalidHashSize(usize),
    /// The plaintext could not be encrypted.
    Encryption(aead::Error),
    /// The ciphertext could not be decrypted or verified.
    Integrity(Integrity),
    /// The CSPRNG failed.
    Rand(rand_core::Error),
    /// The entire buffer could not be written.
    ///
    /// It contains the number of bytes written.
    ShortWrite(usize),
    /// Unexpected EOF while reading.
    ///
    /// It contains the number of bytes read.
    UnexpectedEof(usize),
    /// Some other error occurred.
    Other(OtherError),
}

impl Error {
    /// Reports the broad class of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidKeySize { .. }
            | Error::InvalidNonceSize { .. }
            | Error::InvalidBlockSize
            | Error::InvalidHashKeySize(_)
            | Error::InvalidHashSize(_) => ErrorKind::Configuration,
            Error::Encryption(_) => ErrorKind::Engine,
            Error::Rand(_) => ErrorKind::Random,
            Error::Integrity(_) => ErrorKind::Integrity,
            Error::ShortWrite(_) | Error::UnexpectedEof(_) | Error::Other(_) => {
                ErrorKind::Io
            }
        }
    }

    /// Returns the integrity failure, if this is one.
    pub fn integrity(&self) -> Option<Integrity> {
        match self {
            Error::Integrity(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize { want, got } => {
                write!(f, "wrong key size: want {}, got {}", want, got)
            }
            Error::InvalidNonceSize { want, got } => {
                write!(f, "wrong nonce size: want {}, got {}", want, got)
            }
            Error::InvalidBlockSize => write!(f, "wrong blocksize"),
            Error::InvalidHashKeySize(n) => {
                write!(f, "invalid hash key size: {}", n)
            }
            Error::InvalidHashSize(n) => write!(f, "invalid hash size: {}", n),
            Error::Encryption(err) => write!(f, "encryption error: {}", err),
            Error::Integrity(err) => {
                write!(f, "decryption/verification failed: {}", err)
            }
            Error::Rand(err) => write!(f, "CSPRNG failure: {}", err),
            Error::ShortWrite(n) => write!(f, "short write of {} bytes", n),
            Error::UnexpectedEof(n) => {
                write!(f, "unexpected EOF after {} bytes", n)
            }
            Error::Other(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Other(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Integrity> for Error {
    fn from(value: Integrity) -> Self {
        Error::Integrity(value)
    }
}

impl From<aead::Error> for Error {
    fn from(value: aead::Error) -> Self {
        Error::Encryption(value)
    }
}

impl From<rand_core::Error> for Error {
    fn from(value: rand_core::Error) -> Self {
        Error::Rand(value)
    }
}

impl From<OtherError> for Error {
    fn from(value: OtherError) -> Self {
        Error::Other(value)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof(0),
            std::io::ErrorKind::WriteZero => Error::ShortWrite(0),
            _ => Error::Other(OtherError::new(Box::new(value))),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::UnexpectedEof(_) => std::io::ErrorKind::UnexpectedEof,
            Error::ShortWrite(_) => std::io::ErrorKind::WriteZero,
            Error::Integrity(_) => std::io::ErrorKind::InvalidData,
            Error::InvalidKeySize { .. }
            | Error::InvalidNonceSize { .. }
            | Error::InvalidBlockSize
            | Error::InvalidHashKeySize(_)
            | Error::InvalidHashSize(_) => std::io::ErrorKind::InvalidInput,
            _ => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, err)
    }
}
