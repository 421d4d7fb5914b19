// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ISO-BMFF box writers for the WebVTT-in-MP4 sample payload.
//!
//! Every box here follows the standard length-prefixed framing: a 4-byte big-endian total size
//! (including the size and type fields themselves), a 4-byte ASCII type, then the payload.

pub(crate) mod vttc;
pub(crate) mod vtte;

pub use vttc::VttCueBox;
pub use vtte::EMPTY_CUE_BOX;

/// Box type tags used by this crate. Unlike a demuxer's `AtomType`, this is a writer's enum: it
/// only ever goes from a tag to its four bytes, never the other way around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BoxType {
    VttCue,
    VttEmptyCue,
    Identifier,
    Settings,
    Payload,
    CueTiming,
}

impl BoxType {
    pub(crate) fn fourcc(self) -> [u8; 4] {
        match self {
            BoxType::VttCue => *b"vttc",
            BoxType::VttEmptyCue => *b"vtte",
            BoxType::Identifier => *b"iden",
            BoxType::Settings => *b"sttg",
            BoxType::Payload => *b"payl",
            BoxType::CueTiming => *b"ctim",
        }
    }
}

/// Writes a box with the given type, backpatching the 4-byte big-endian size once `body` has
/// written the payload. The size includes the 8-byte header.
pub(crate) fn write_box(out: &mut Vec<u8>, box_type: BoxType, body: impl FnOnce(&mut Vec<u8>)) {
    let start = out.len();

    // Placeholder size, patched below.
    out.extend_from_slice(&[0, 0, 0, 0]);
    out.extend_from_slice(&box_type.fourcc());

    body(out);

    let size = (out.len() - start) as u32;
    out[start..start + 4].copy_from_slice(&size.to_be_bytes());
}
