// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The interval cutter, with time bookkeeping folded directly into it: `cursor` and `started`
//! track the timeline position, and nothing else in the crate needs to observe them independently
//! of the cutter that advances them.
//!
//! This is the sweep-line at the center of the crate: it owns the mapping from "a new cue arrived"
//! or "flush" to a sequence of maximal constant-active-set output intervals.

use log::trace;

use crate::active_set::ActiveSet;
use crate::boxes::vtte::EMPTY_CUE_BOX;
use crate::boxes::vttc::VttCueBox;
use crate::cue::Cue;
use crate::sample::OutputSample;

pub(crate) struct Cutter {
    cursor: u64,
    started: bool,
}

impl Cutter {
    pub(crate) fn new() -> Self {
        Cutter { cursor: 0, started: false }
    }

    /// Accepts the next cue in presentation order, appending any newly completed samples
    /// to `out`.
    pub(crate) fn push(&mut self, active: &mut ActiveSet, cue: Cue, out: &mut Vec<OutputSample>) {
        if !self.started {
            self.cursor = cue.start_time;
            self.started = true;
        }
        else if cue.start_time > self.cursor {
            self.advance_to(active, cue.start_time, out);
        }

        trace!(
            "cutter: inserting cue [{}, {}) at cursor={}",
            cue.start_time,
            cue.end_time(),
            self.cursor
        );
        active.insert(cue);
    }

    /// Drains the active set entirely, appending any newly completed samples to `out`. After
    /// this returns, `active` is empty.
    pub(crate) fn flush(&mut self, active: &mut ActiveSet, out: &mut Vec<OutputSample>) {
        while let Some(t_next) = active.earliest_end() {
            self.emit_and_evict(active, t_next, out);
        }
    }

    /// Advances the timeline to `t_target`, emitting every maximal constant-active-set interval
    /// along the way.
    fn advance_to(&mut self, active: &mut ActiveSet, t_target: u64, out: &mut Vec<OutputSample>) {
        while let Some(t_next) = active.earliest_end() {
            if t_next > t_target {
                break;
            }
            self.emit_and_evict(active, t_next, out);
        }

        if t_target > self.cursor {
            if active.is_empty() {
                trace!("cutter: gap [{}, {})", self.cursor, t_target);
                out.push(OutputSample::new(
                    self.cursor,
                    t_target - self.cursor,
                    EMPTY_CUE_BOX.to_vec(),
                ));
            }
            else {
                self.emit_current(active, t_target, out);
            }
            self.cursor = t_target;
        }
    }

    /// Emits `[cursor, t_next)` (unless zero-length) from the active set as it stands, then evicts
    /// every entry whose `end_time == t_next`, and advances `cursor` to `t_next`.
    fn emit_and_evict(&mut self, active: &mut ActiveSet, t_next: u64, out: &mut Vec<OutputSample>) {
        if t_next > self.cursor {
            self.emit_current(active, t_next, out);
        }
        self.cursor = t_next;

        let evicted = active.pop_all_ending_at_or_before(t_next);
        trace!("cutter: evicted {} cue(s) ending at {}", evicted.len(), t_next);
    }

    /// Emits `[cursor, until)` whose data is the serialized concatenation of the active set in
    /// arrival order. Does not touch the active set or `cursor`.
    fn emit_current(&self, active: &ActiveSet, until: u64, out: &mut Vec<OutputSample>) {
        let mut data = Vec::new();
        for entry in active.iterate_in_arrival_order() {
            VttCueBox::new(&entry.cue.identifier, &entry.cue.settings, &entry.cue.payload).write(&mut data);
        }
        out.push(OutputSample::new(self.cursor, until - self.cursor, data));
    }
}
