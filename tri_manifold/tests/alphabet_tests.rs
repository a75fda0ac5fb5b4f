/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) 2026 Triangulation Search Contributors. All Rights Reserved.
 */
use tri_manifold::alphabet::{
    append_int, char_for_index, chars_needed, index_for_char, pack_trits, read_int, unpack_trits,
    SENTINEL,
};

#[test]
fn char_round_trips_for_every_index() {
    for i in 0..64u8 {
        assert_eq!(index_for_char(char_for_index(i)).unwrap(), i);
    }
}

#[test]
fn sentinel_is_last_index() {
    assert_eq!(SENTINEL, 63);
}

#[test]
fn int_round_trips_across_widths() {
    for width in 1..=4usize {
        let max = (1u64 << (6 * width)).saturating_sub(1);
        for value in [0, 1, max / 2, max] {
            let mut buf = Vec::new();
            append_int(&mut buf, value, width);
            let mut pos = 0;
            assert_eq!(read_int(&buf, &mut pos, width).unwrap(), value);
            assert_eq!(pos, width);
        }
    }
}

#[test]
fn trits_round_trip() {
    for a in 0..3u8 {
        for b in 0..3u8 {
            for c in 0..3u8 {
                let packed = pack_trits(&[a, b, c]);
                assert_eq!(unpack_trits(packed).unwrap(), [a, b, c]);
            }
        }
    }
}

#[test]
fn chars_needed_matches_regina_style_growth() {
    assert_eq!(chars_needed(0), 1);
    assert_eq!(chars_needed(63), 1);
    assert_eq!(chars_needed(64), 2);
    assert_eq!(chars_needed(64 * 64 - 1), 2);
    assert_eq!(chars_needed(64 * 64), 3);
}

#[test]
fn index_for_char_rejects_byte_outside_alphabet() {
    assert!(index_for_char(b' ').is_err());
}
