// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `cue` module defines the input record handed in by the upstream WebVTT parser.

/// A single WebVTT cue, as produced by an external, line-oriented WebVTT parser.
///
/// `start_time` and `duration` are in whatever timescale the caller uses; this crate performs no
/// unit conversion and treats them as opaque unsigned integers.
#[derive(Debug, Clone)]
pub struct Cue {
    /// Presentation start time of the cue.
    pub start_time: u64,
    /// Duration of the cue. Always non-zero; see [`Cue::new`].
    pub duration: u64,
    /// Cue identifier, possibly empty.
    pub identifier: Vec<u8>,
    /// Cue settings string, possibly empty.
    pub settings: Vec<u8>,
    /// Cue text, possibly empty.
    pub payload: Vec<u8>,
}

impl Cue {
    /// Constructs a new cue.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is zero: a cue's interval must be non-empty.
    pub fn new(
        start_time: u64,
        duration: u64,
        identifier: impl Into<Vec<u8>>,
        settings: impl Into<Vec<u8>>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        assert!(duration > 0, "webvtt-fmp4: cue duration must be non-zero");

        Cue {
            start_time,
            duration,
            identifier: identifier.into(),
            settings: settings.into(),
            payload: payload.into(),
        }
    }

    /// The exclusive end of this cue's interval: `start_time + duration`.
    pub fn end_time(&self) -> u64 {
        self.start_time + self.duration
    }
}
