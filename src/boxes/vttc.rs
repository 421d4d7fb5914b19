// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{write_box, BoxType};

/// A WebVTT cue box (`vttc`): the serialized form of one active cue within an output sample.
///
/// Each of `identifier`, `settings`, and `payload` becomes a sub-box (`iden`/`sttg`/`payl`) only
/// if non-empty. The `ctim` sub-box (originating time) is reserved for a metadata source this
/// crate has no access to, so it is never written here.
#[derive(Debug, Clone, Copy)]
pub struct VttCueBox<'a> {
    pub identifier: &'a [u8],
    pub settings: &'a [u8],
    pub payload: &'a [u8],
}

impl<'a> VttCueBox<'a> {
    pub fn new(identifier: &'a [u8], settings: &'a [u8], payload: &'a [u8]) -> Self {
        VttCueBox { identifier, settings, payload }
    }

    /// Appends this box's serialized bytes to `out`.
    pub fn write(&self, out: &mut Vec<u8>) {
        write_box(out, BoxType::VttCue, |w| {
            if !self.identifier.is_empty() {
                write_box(w, BoxType::Identifier, |w| w.extend_from_slice(self.identifier));
            }
            if !self.settings.is_empty() {
                write_box(w, BoxType::Settings, |w| w.extend_from_slice(self.settings));
            }
            if !self.payload.is_empty() {
                write_box(w, BoxType::Payload, |w| w.extend_from_slice(self.payload));
            }
        });
    }
}
