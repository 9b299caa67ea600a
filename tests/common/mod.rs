#![allow(dead_code)]

use bignat::{Bignat8, Bignat32};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn big8<const N: usize>(x: &Bignat8<N>) -> BigUint {
    BigUint::from_bytes_be(x.digits())
}

pub fn big32<const N: usize>(x: &Bignat32<N>) -> BigUint {
    let mut le = x.digits().to_vec();
    le.reverse();

    BigUint::new(le)
}

pub fn from_big8<const N: usize>(value: &BigUint) -> Bignat8<N> {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= N, "{} bytes do not fit into {}", bytes.len(), N);

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);

    Bignat8::from(out)
}

pub fn from_hex8<const N: usize>(hex: &str) -> Bignat8<N> {
    from_big8(&BigUint::parse_bytes(hex.as_bytes(), 16).unwrap())
}

/// Random value whose first `leading_zeros` digits are zero.
pub fn random8<const N: usize>(rng: &mut StdRng, leading_zeros: usize) -> Bignat8<N> {
    let mut digits = [0u8; N];
    rng.fill(&mut digits[leading_zeros..]);

    Bignat8::from(digits)
}

pub fn random32<const N: usize>(rng: &mut StdRng, leading_zeros: usize) -> Bignat32<N> {
    let mut digits = [0u32; N];
    rng.fill(&mut digits[leading_zeros..]);

    Bignat32::from(digits)
}
