mod common;

use bignat::{Bignat8, Bignat32, ChunkSerializable};
use rand::Rng;

use common::{random8, rng};

#[test]
fn completing_call_returns_len_plus_one() {
    let value = Bignat8::from([0x11, 0x22, 0x33, 0x44]);
    let mut out = [0u8; 4];

    assert_eq!(value.to_byte_array(2, 0, &mut out, 0), 2);
    assert_eq!(value.to_byte_array(2, 2, &mut out, 2), 3);
    assert_eq!(out, [0x11, 0x22, 0x33, 0x44]);
}

#[test]
fn oversized_window_returns_bytes_moved() {
    let value = Bignat8::from([0x11, 0x22, 0x33]);
    let mut out = [0u8; 8];

    // Only one byte is left, the window offers four.
    assert_eq!(value.to_byte_array(4, 2, &mut out, 5), 1);
    assert_eq!(out[5], 0x33);
}

#[test]
fn deserialization_uses_the_same_sentinel() {
    let src = [0xAA, 0x01, 0x02, 0x03, 0x04, 0xBB];
    let mut value = Bignat8::<4>::new();

    assert_eq!(value.from_byte_array(3, 0, &src, 1), 3);
    assert_eq!(value.from_byte_array(1, 3, &src, 4), 2);
    assert_eq!(value.digits(), &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn chunked_round_trip() {
    let mut rng = rng(30);

    for _ in 0..50 {
        let original = random8::<37>(&mut rng, 0);

        let mut wire = Vec::new();
        let mut sent = 0;

        while sent < original.size() {
            let len = rng.gen_range(1..=(original.size() - sent).min(8));
            let mut window = [0u8; 8];

            let ret = original.to_byte_array(len, sent, &mut window, 0);
            let moved = if ret == len + 1 { len } else { ret };

            wire.extend_from_slice(&window[..moved]);
            sent += moved;
            assert_eq!(sent == original.size(), ret == len + 1);
        }

        assert_eq!(wire.as_slice(), original.digits());

        let mut received = Bignat8::<37>::new();
        let mut read = 0;

        for chunk in wire.chunks(5) {
            let ret = received.from_byte_array(chunk.len(), read, chunk, 0);
            read += chunk.len();

            if read == received.size() {
                assert_eq!(ret, chunk.len() + 1);
            } else {
                assert_eq!(ret, chunk.len());
            }
        }

        assert_eq!(received, original);
    }
}

#[test]
fn wide_digits_are_big_endian_bytes() {
    let value = Bignat32::from([0x1122_3344, 0x5566_7788]);
    let mut out = [0u8; 8];

    assert_eq!(value.size(), 8);
    assert_eq!(value.to_byte_array(3, 0, &mut out, 0), 3);
    assert_eq!(value.to_byte_array(5, 3, &mut out, 3), 6);
    assert_eq!(out, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);

    let mut back = Bignat32::<2>::new();
    assert_eq!(back.from_byte_array(8, 0, &out, 0), 9);
    assert_eq!(back, value);
}

#[test]
fn compatibility_compares_external_size() {
    let a = Bignat8::<8>::new();
    let b = Bignat32::<2>::new();
    let c = Bignat8::<4>::new();

    assert!(a.is_compatible_with(&b));
    assert!(!a.is_compatible_with(&c));
}
