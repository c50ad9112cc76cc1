//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Bing Maps quadkeys

use crate::coord::Coord;
use crate::error::ValidationError;

/// Longest quadkey addressable with `u32` columns and rows
pub const MAX_QUADKEY_LEN: usize = 32;

/// Quadkey with one digit per zoom level, empty for zoom level 0
pub fn coord_to_quadkey(coord: &Coord) -> String {
    (1..=coord.z as u32)
        .rev()
        .map(|i| {
            let mask = 1u32.checked_shl(i - 1).unwrap_or(0);
            let mut digit = b'0';
            if coord.x & mask != 0 {
                digit += 1;
            }
            if coord.y & mask != 0 {
                digit += 2;
            }
            digit as char
        })
        .collect()
}

pub fn quadkey_to_coord(quadkey: &str) -> Result<Coord, ValidationError> {
    let z = quadkey.chars().count();
    if z > MAX_QUADKEY_LEN {
        return Err(ValidationError::QuadkeyTooLong(z));
    }
    let mut x = 0u32;
    let mut y = 0u32;
    for (position, digit) in quadkey.chars().enumerate() {
        let mask = 1u32 << (z - 1 - position);
        match digit {
            '0' => {}
            '1' => x |= mask,
            '2' => y |= mask,
            '3' => {
                x |= mask;
                y |= mask;
            }
            _ => return Err(ValidationError::InvalidQuadkeyDigit { digit, position }),
        }
    }
    Ok(Coord { x, y, z: z as u8 })
}

impl Coord {
    pub fn to_quadkey(&self) -> String {
        coord_to_quadkey(self)
    }
    pub fn from_quadkey(quadkey: &str) -> Result<Coord, ValidationError> {
        quadkey_to_coord(quadkey)
    }
}
