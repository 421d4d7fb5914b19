// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end scenarios covering contiguous, gapped, overlapping, and nested cue timelines.

use webvtt_fmp4::boxes::{VttCueBox, EMPTY_CUE_BOX};
use webvtt_fmp4::{Cue, Fragmenter};

/// Builds the expected `data` for a sample covering the cues named in `payloads`, in arrival
/// order, using the crate's own box writer (the same writer under test in `boxes::vttc`).
fn expect(payloads: &[&str]) -> Vec<u8> {
    let mut data = Vec::new();
    for payload in payloads {
        VttCueBox::new(b"", b"", payload.as_bytes()).write(&mut data);
    }
    data
}

fn expect_gap() -> Vec<u8> {
    EMPTY_CUE_BOX.to_vec()
}

fn run(cues: &[(&str, u64, u64)]) -> Vec<(u64, u64, Vec<u8>)> {
    let mut f = Fragmenter::new();
    for (payload, start, dur) in cues {
        f.push_sample(Cue::new(*start, *dur, "", "", *payload));
    }
    f.flush();

    let mut out = Vec::new();
    while f.ready_samples_size() > 0 {
        let s = f.pop_sample();
        out.push((s.pts, s.duration, s.data));
    }
    out
}

#[test]
fn contiguous_no_overlap() {
    let out = run(&[("hi", 0, 2000), ("hello", 2000, 1000)]);
    assert_eq!(out, vec![(0, 2000, expect(&["hi"])), (2000, 1000, expect(&["hello"]))]);
}

#[test]
fn gap() {
    let out = run(&[("hi", 0, 1000), ("hello", 2000, 1000)]);
    assert_eq!(
        out,
        vec![
            (0, 1000, expect(&["hi"])),
            (1000, 1000, expect_gap()),
            (2000, 1000, expect(&["hello"])),
        ]
    );
}

#[test]
fn staircase_overlap() {
    let out = run(&[
        ("hi", 0, 2000),
        ("hello", 1000, 2000),
        ("some multi word message", 1500, 4000),
    ]);
    assert_eq!(
        out,
        vec![
            (0, 1000, expect(&["hi"])),
            (1000, 500, expect(&["hi", "hello"])),
            (1500, 500, expect(&["hi", "hello", "some multi word message"])),
            (2000, 1000, expect(&["hello", "some multi word message"])),
            (3000, 2500, expect(&["some multi word message"])),
        ]
    );
}

#[test]
fn long_cue_enclosing_shorter_cues() {
    let out = run(&[
        ("hi", 0, 10000),
        ("hello", 1000, 5000),
        ("some multi word message", 2000, 1000),
        ("message!!", 8000, 1000),
    ]);
    assert_eq!(
        out,
        vec![
            (0, 1000, expect(&["hi"])),
            (1000, 1000, expect(&["hi", "hello"])),
            (2000, 1000, expect(&["hi", "hello", "some multi word message"])),
            (3000, 3000, expect(&["hi", "hello"])),
            (6000, 2000, expect(&["hi"])),
            (8000, 1000, expect(&["hi", "message!!"])),
            (9000, 1000, expect(&["hi"])),
        ]
    );
}

#[test]
fn leading_gap_suppressed() {
    let out = run(&[("hi", 1200, 2000)]);
    assert_eq!(out, vec![(1200, 2000, expect(&["hi"]))]);
}

#[test]
fn same_start_different_ends() {
    let out = run(&[("hi", 0, 2000), ("hello", 0, 1500)]);
    assert_eq!(out, vec![(0, 1500, expect(&["hi", "hello"])), (1500, 500, expect(&["hi"]))]);
}

#[test]
fn combined() {
    let out = run(&[
        ("hi", 0, 2000),
        ("hello", 100, 100),
        ("some multi word message", 1500, 1000),
        ("message!!", 1500, 800),
    ]);
    assert_eq!(
        out,
        vec![
            (0, 100, expect(&["hi"])),
            (100, 100, expect(&["hi", "hello"])),
            (200, 1300, expect(&["hi"])),
            (1500, 500, expect(&["hi", "some multi word message", "message!!"])),
            (2000, 300, expect(&["some multi word message", "message!!"])),
            (2300, 200, expect(&["some multi word message"])),
        ]
    );
}

#[test]
fn pop_sample_drains_in_emission_order_and_empties_the_queue() {
    let mut f = Fragmenter::new();
    f.push_sample(Cue::new(0, 5, "", "", "a"));
    f.push_sample(Cue::new(5, 5, "", "", "b"));
    f.flush();

    assert_eq!(f.ready_samples_size(), 2);
    assert_eq!(f.pop_sample().pts, 0);
    assert_eq!(f.pop_sample().pts, 5);
    assert_eq!(f.ready_samples_size(), 0);
}
