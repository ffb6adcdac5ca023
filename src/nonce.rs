//! Running nonces.

use {
    crate::error::Result,
    aead::{AeadCore, Nonce},
    rand_core::{CryptoRng, RngCore},
};

/// Returns the nonce that follows `nonce`.
///
/// The nonce is treated as one little-endian integer spanning
/// all of its bytes; the maximum value wraps to zero.
pub fn next<A: AeadCore>(mut nonce: Nonce<A>) -> Nonce<A> {
    increment(&mut nonce);
    nonce
}

fn increment(n: &mut [u8]) {
    for b in n.iter_mut() {
        let (v, carry) = b.overflowing_add(1);
        *b = v;
        if !carry {
            return;
        }
    }
}

/// Generates a random initial nonce for `A`.
pub fn generate<A, R>(rng: &mut R) -> Result<Nonce<A>>
where
    A: AeadCore,
    R: RngCore + CryptoRng,
{
    let mut nonce = Nonce::<A>::default();
    rng.try_fill_bytes(&mut nonce)?;
    Ok(nonce)
}
