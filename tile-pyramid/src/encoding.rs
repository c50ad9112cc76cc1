//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Compact 64 bit coordinate encoding
//!
//! Bit layout, high to low:
//! `1 bit unused | 29 bits column | 29 bits row | 5 bits zoom`
//!
//! Only coordinates with `z <= 31`, `x < 2^29` and `y < 2^29` round-trip.
//! The mask values are part of the persisted format and must not change.

use crate::coord::Coord;

const ZOOM_MASK: u64 = 0x1f;
const ROW_MASK: u64 = 0x1fff_ffff;
const COL_MASK: u64 = 0x1fff_ffff;
const ROW_OFFSET: u32 = 5;
const COL_OFFSET: u32 = 5 + 29;

/// All bits set except the highest row bit (bit 33)
const HIGH_ROW_MASK: u64 = 0xffff_fffd_ffff_ffff;
/// All bits set except the zoom bits
const ALL_BUT_ZOOM_MASK: u64 = !ZOOM_MASK;

/// Pack a coordinate into a 64 bit integer
pub fn encode(coord: &Coord) -> u64 {
    let x = coord.x as u64;
    let y = coord.y as u64;
    let z = coord.z as u64;
    z | (y << ROW_OFFSET) | (x << COL_OFFSET)
}

/// Unpack an integer produced by [`encode`]
pub fn decode(val: u64) -> Coord {
    Coord {
        x: (COL_MASK & (val >> COL_OFFSET)) as u32,
        y: (ROW_MASK & (val >> ROW_OFFSET)) as u32,
        z: (ZOOM_MASK & val) as u8,
    }
}

/// Encoded parent of an encoded coordinate, `None` at zoom level 0
pub fn encoded_zoom_up(val: u64) -> Option<u64> {
    let zoom = val & ZOOM_MASK;
    if zoom == 0 {
        return None;
    }
    // Halve column and row at once. The lowest column bit leaks into the
    // highest row bit and has to be cleared.
    let shifted = (val >> 1) & HIGH_ROW_MASK;
    Some((shifted & ALL_BUT_ZOOM_MASK) | (zoom - 1))
}

impl Coord {
    pub fn encode(&self) -> u64 {
        encode(self)
    }
    pub fn decode(val: u64) -> Coord {
        decode(val)
    }
}

impl From<Coord> for u64 {
    fn from(coord: Coord) -> u64 {
        encode(&coord)
    }
}

impl From<u64> for Coord {
    fn from(val: u64) -> Coord {
        decode(val)
    }
}
