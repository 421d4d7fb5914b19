// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The fragmenter façade: the crate's only public entry point, wiring the active-cue set and
//! interval cutter together and exposing a push/flush/pop API.

use std::collections::VecDeque;
use std::fmt;

use log::debug;

use crate::active_set::ActiveSet;
use crate::cue::Cue;
use crate::cutter::Cutter;
use crate::sample::OutputSample;

/// Turns a presentation-time-ordered stream of [`Cue`]s into a contiguous, non-overlapping
/// sequence of [`OutputSample`]s.
///
/// A `Fragmenter` is single-threaded and synchronous: every [`Fragmenter::push_sample`] and
/// [`Fragmenter::flush`] call does all its work on the calling thread before returning, and
/// completed samples accumulate in an internal queue until [`Fragmenter::pop_sample`] drains them.
pub struct Fragmenter {
    active: ActiveSet,
    cutter: Cutter,
    pending: VecDeque<OutputSample>,
    last_start_time: Option<u64>,
}

impl Fragmenter {
    /// Creates an empty fragmenter with no pushed cues and no pending output.
    pub fn new() -> Self {
        Fragmenter {
            active: ActiveSet::new(),
            cutter: Cutter::new(),
            pending: VecDeque::new(),
            last_start_time: None,
        }
    }

    /// Pushes the next cue in presentation order.
    ///
    /// May enqueue zero or more completed output samples, retrievable via [`Self::pop_sample`].
    ///
    /// # Panics
    ///
    /// Panics if `cue.duration` is zero (already enforced by [`Cue::new`]), or if `cue.start_time`
    /// is less than the `start_time` of the previously pushed cue: cues must arrive in
    /// non-decreasing start-time order.
    pub fn push_sample(&mut self, cue: Cue) {
        if let Some(last) = self.last_start_time {
            assert!(
                cue.start_time >= last,
                "webvtt-fmp4: cues must be pushed in non-decreasing start_time order (got {} after {})",
                cue.start_time,
                last
            );
        }
        self.last_start_time = Some(cue.start_time);

        let mut out = Vec::new();
        self.cutter.push(&mut self.active, cue, &mut out);
        let emitted = out.len();
        self.pending.extend(out);

        if emitted > 0 {
            debug!("fragmenter: push emitted {} sample(s), {} pending", emitted, self.pending.len());
        }
    }

    /// Drains the active set, emitting output samples for every cue still active.
    ///
    /// After this returns, no cue remains active; every sample derived from previously pushed cues
    /// is either already popped or sitting in the pending queue.
    pub fn flush(&mut self) {
        let mut out = Vec::new();
        self.cutter.flush(&mut self.active, &mut out);
        let emitted = out.len();
        self.pending.extend(out);

        debug!("fragmenter: flush emitted {} sample(s), {} pending", emitted, self.pending.len());
    }

    /// Number of completed output samples waiting to be popped.
    pub fn ready_samples_size(&self) -> usize {
        self.pending.len()
    }

    /// Removes and returns the oldest pending output sample, in emission order.
    ///
    /// # Panics
    ///
    /// Panics if [`Self::ready_samples_size`] is zero.
    pub fn pop_sample(&mut self) -> OutputSample {
        self.pending.pop_front().expect("webvtt-fmp4: pop_sample called with no pending samples")
    }
}

impl Default for Fragmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Fragmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragmenter").field("pending_len", &self.pending.len()).finish_non_exhaustive()
    }
}
