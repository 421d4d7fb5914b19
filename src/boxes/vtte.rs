// Copyright (c) 2019-2026 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The empty-cue box (`vtte`), emitted for a gap interval with no active cue.
//!
//! It has no payload, so its bytes never change; precomputed here rather than re-serialized on
//! every gap.

/// The 8-byte serialized form of a `VttEmptyCueBox`: `size(4) | "vtte"`.
pub const EMPTY_CUE_BOX: [u8; 8] = [0x00, 0x00, 0x00, 0x08, b'v', b't', b't', b'e'];
