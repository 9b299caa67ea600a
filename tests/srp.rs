//! SRP-6a style exchange composed from the buffer primitives, checked
//! against `num-bigint`.

mod common;

use bignat::Bignat8;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use common::{big8, from_hex8, random8, rng};

const GROUP_1024: &str = "EEAF0AB9ADB38DD69C33F80AFA8FC5E86072618775FF3C0B9EA2314C9C256576\
                          D674DF7496EA81D3383B4813D692C6E0E0D5D8E250B98BE48E495C1D6089DAD1\
                          5DC7D7B46154D6B6CE8EF4AD69B15D4982559B297BCF1885C529F566660E57EC\
                          68EDBC3C05726CC02FD4CBF4976EAA9AFD5138FE8376435B9FC61D2FC0EB06E3";

type Residue = Bignat8<128>;
type Product = Bignat8<256>;
type Digest32 = Bignat8<32>;

fn hash(parts: &[&[u8]]) -> Digest32 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());

    Digest32::from(out)
}

fn mod_mul<const X: usize, const Y: usize>(x: &Bignat8<X>, y: &Bignat8<Y>, modulus: &Residue) -> Residue {
    let mut wide = Product::new();
    wide.mult(x, y);
    wide.remainder_divide(modulus);

    let mut out = Residue::new();
    out.copy(&wide);

    out
}

/// Left-to-right square and multiply.
fn mod_pow<const E: usize>(base: &Residue, exponent: &Bignat8<E>, modulus: &Residue) -> Residue {
    let mut acc = Residue::value_of(1);

    for &byte in exponent.digits() {
        for bit in (0..8).rev() {
            acc = mod_mul(&acc, &acc, modulus);

            if (byte >> bit) & 1 == 1 {
                acc = mod_mul(&acc, base, modulus);
            }
        }
    }

    acc
}

#[test]
fn mod_pow_matches_reference() {
    let modulus: Residue = from_hex8(GROUP_1024);
    let mut rng = rng(40);

    let base = mod_mul(&random8::<128>(&mut rng, 0), &Residue::value_of(1), &modulus);
    let exponent = random8::<8>(&mut rng, 0);

    let expected = big8(&base).modpow(&big8(&exponent), &big8(&modulus));

    assert_eq!(big8(&mod_pow(&base, &exponent, &modulus)), expected);
}

#[test]
fn client_and_server_derive_the_same_secret() {
    let modulus: Residue = from_hex8(GROUP_1024);
    let generator = Residue::value_of(2);

    let salt = b"0123456789abcdef";
    let inner = hash(&[&b"alice"[..], &b":"[..], &b"password123"[..]]);
    let x = hash(&[&salt[..], &inner.digits()[..]]);
    let k = hash(&[&modulus.digits()[..], &generator.digits()[..]]);

    let a = hash(&[&b"client ephemeral"[..]]);
    let b = hash(&[&b"server ephemeral"[..]]);

    // Registration: v = g^x
    let v = mod_pow(&generator, &x, &modulus);
    assert_eq!(big8(&v), BigUint::from(2u32).modpow(&big8(&x), &big8(&modulus)));

    // A = g^a, B = k*v + g^b
    let public_a = mod_pow(&generator, &a, &modulus);
    let kv = mod_mul(&k, &v, &modulus);

    let mut sum = Bignat8::<129>::new();
    sum.copy(&kv);
    sum.add(&mod_pow(&generator, &b, &modulus));
    sum.remainder_divide(&modulus);

    let mut public_b = Residue::new();
    public_b.copy(&sum);

    let u = hash(&[&public_a.digits()[..], &public_b.digits()[..]]);

    // Server: S = (A * v^u)^b
    let server_base = mod_mul(&public_a, &mod_pow(&v, &u, &modulus), &modulus);
    let server_secret = mod_pow(&server_base, &b, &modulus);

    // Client: S = (B - k*g^x)^(a + u*x)
    let mut client_base = public_b;
    client_base.modular_subtract(&kv, &modulus);

    let mut ux = Bignat8::<64>::new();
    ux.mult(&u, &x);

    let mut exponent = Bignat8::<65>::new();
    exponent.copy(&ux);
    exponent.add(&a);

    let client_secret = mod_pow(&client_base, &exponent, &modulus);

    assert_eq!(client_secret, server_secret);

    let expected = big8(&server_base).modpow(&big8(&b), &big8(&modulus));
    assert_eq!(big8(&server_secret), expected);
}

#[test]
fn modular_subtract_wraps_into_range() {
    let modulus = Bignat8::from([0x00, 0x00, 0x01, 0x01]);
    let mut rng = rng(41);

    for _ in 0..200 {
        let x = Bignat8::from([0, 0, 0, rand::Rng::gen_range(&mut rng, 0..=0xFF)]);
        let y = Bignat8::from([0, 0, 0, rand::Rng::gen_range(&mut rng, 0..=0xFF)]);

        let mut diff = x;
        diff.modular_subtract(&y, &modulus);

        let m = big8(&modulus);
        assert_eq!(big8(&diff), (big8(&x) + &m - big8(&y)) % &m);
    }
}

#[test]
fn modular_div_2_halves_residues() {
    let modulus: Residue = from_hex8(GROUP_1024);
    let mut half_modulus = modulus;
    half_modulus.div_2();
    half_modulus.digits_mut()[127] |= 0x01;

    let mut rng = rng(42);
    let m = big8(&half_modulus);

    for _ in 0..20 {
        let x = mod_mul(&random8::<128>(&mut rng, 1), &Residue::value_of(1), &half_modulus);

        // 2x mod m, then halve again
        let mut doubled = x;
        doubled.add(&x);
        doubled.remainder_divide(&half_modulus);
        assert_eq!(big8(&doubled), (big8(&x) * 2u32) % &m);

        doubled.modular_div_2(&half_modulus);
        assert_eq!(doubled, x);
    }
}
