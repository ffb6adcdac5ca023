use {
    crate::{
        buf::Buf,
        error::{Error, Result},
    },
    aead::{AeadCore, AeadInPlace, KeyInit, KeySizeUser, Nonce, Tag},
    typenum::Unsigned,
};

/// Encrypts and decrypts single blocks with a keyed AEAD.
///
/// A sealed block is the ciphertext followed by the tag, so it
/// is always [`Engine::TAG_SIZE`] bytes longer than its
/// plaintext.
pub(crate) struct Engine<A> {
    aead: A,
}

impl<A: AeadCore> Engine<A> {
    pub const TAG_SIZE: usize = A::TagSize::USIZE;
    pub const NONCE_SIZE: usize = A::NonceSize::USIZE;
}

impl<A: KeyInit> Engine<A> {
    pub const KEY_SIZE: usize = <A as KeySizeUser>::KeySize::USIZE;

    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != Self::KEY_SIZE {
            return Err(Error::InvalidKeySize {
                want: Self::KEY_SIZE,
                got: key.len(),
            });
        }
        let aead = A::new_from_slice(key).map_err(|_| Error::InvalidKeySize {
            want: Self::KEY_SIZE,
            got: key.len(),
        })?;
        Ok(Self { aead })
    }
}

impl<A: AeadInPlace> Engine<A> {
    /// Encrypts the live bytes of `buf` in place and appends the
    /// tag.
    ///
    /// `buf` must have room for the tag.
    pub fn seal(
        &self,
        nonce: &Nonce<A>,
        associated_data: &[u8],
        buf: &mut Buf,
    ) -> Result<()> {
        let tag = self
            .aead
            .encrypt_in_place_detached(
                nonce,
                associated_data,
                buf.as_mut_slice(),
            )
            .map_err(Error::Encryption)?;
        buf.extend_from_slice(&tag)
    }

    /// Verifies and decrypts a sealed block in place, leaving
    /// only the plaintext in `buf`.
    ///
    /// On failure the contents of `buf` are unspecified.
    pub fn open(
        &self,
        nonce: &Nonce<A>,
        associated_data: &[u8],
        buf: &mut Buf,
    ) -> core::result::Result<(), aead::Error> {
        let n = buf.len();
        if n < Self::TAG_SIZE {
            return Err(aead::Error);
        }
        let (ciphertext, tag) = buf.split_at_mut(n - Self::TAG_SIZE);
        self.aead.decrypt_in_place_detached(
            nonce,
            associated_data,
            ciphertext,
            Tag::<A>::from_slice(tag),
        )?;
        buf.truncate(n - Self::TAG_SIZE);
        Ok(())
    }
}
