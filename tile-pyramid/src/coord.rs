//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile coordinates

use crate::error::ValidationError;
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Tile address in a `2^z` x `2^z` grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column
    pub x: u32,
    /// Row, counted from the top
    pub y: u32,
    /// Zoom level
    pub z: u8,
}

/// Number of columns (and rows) of the grid at `zoom`
pub fn grid_side(zoom: u8) -> u64 {
    1u64.checked_shl(zoom as u32).unwrap_or(u64::MAX)
}

fn scale_up(value: u32, shift: u32) -> u32 {
    if value == 0 {
        0
    } else if shift >= 32 || value.leading_zeros() < shift {
        u32::MAX
    } else {
        value << shift
    }
}

impl Coord {
    pub fn new(x: u32, y: u32, z: u8) -> Coord {
        Coord { x, y, z }
    }
    /// Zoom in (`delta > 0`) or out (`delta < 0`), scaling column and row by `2^delta`.
    ///
    /// Zooming out truncates toward zero and stops at zoom level 0.
    /// Columns and rows beyond the `u32` range saturate.
    pub fn zoom(&self, delta: i32) -> Coord {
        if delta >= 0 {
            let shift = delta as u32;
            Coord {
                x: scale_up(self.x, shift),
                y: scale_up(self.y, shift),
                z: (self.z as u32 + shift).min(u8::MAX as u32) as u8,
            }
        } else {
            let shift = delta.unsigned_abs().min(self.z as u32);
            Coord {
                x: self.x >> shift,
                y: self.y >> shift,
                z: self.z - shift as u8,
            }
        }
    }
    /// Parent tile, `None` at zoom level 0
    pub fn parent(&self) -> Option<Coord> {
        if self.z == 0 {
            return None;
        }
        Some(Coord {
            x: self.x >> 1,
            y: self.y >> 1,
            z: self.z - 1,
        })
    }
    /// Replace `self` with its parent. Returns false (leaving `self` unchanged) at zoom level 0.
    pub fn parent_in_place(&mut self) -> bool {
        match self.parent() {
            Some(parent) => {
                *self = parent;
                true
            }
            None => false,
        }
    }
    /// The four tiles of the next zoom level covering this tile
    pub fn children(&self) -> [Coord; 4] {
        let x = self.x << 1;
        let y = self.y << 1;
        let z = self.z.saturating_add(1);
        [
            Coord { x, y, z },
            Coord { x: x + 1, y, z },
            Coord { x, y: y + 1, z },
            Coord {
                x: x + 1,
                y: y + 1,
                z,
            },
        ]
    }
    pub fn is_valid(&self) -> bool {
        let side = grid_side(self.z);
        (self.x as u64) < side && (self.y as u64) < side
    }
    /// Write `z/x/y` into `buf`, returning the number of bytes written.
    ///
    /// Nothing is written if the buffer can't hold the complete text.
    pub fn serialize_into(&self, buf: &mut [u8]) -> Result<usize, ValidationError> {
        let text = self.serialize();
        if text.len() > buf.len() {
            return Err(ValidationError::BufferTooSmall {
                required: text.len(),
                available: buf.len(),
            });
        }
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Ok(text.len())
    }
    pub fn serialize(&self) -> String {
        self.to_string()
    }
    /// Parse `z/x/y`. The coordinate has to lie within the grid of its zoom level.
    pub fn deserialize(text: &str) -> Result<Coord, ValidationError> {
        let mut fields = text.trim_end().splitn(3, '/');
        let z = parse_component(fields.next(), text)?;
        let x = parse_component(fields.next(), text)?;
        let y = parse_component(fields.next(), text)?;
        if z > u8::MAX as u32 {
            return Err(ValidationError::Malformed(text.to_string()));
        }
        let coord = Coord { x, y, z: z as u8 };
        if !coord.is_valid() {
            return Err(ValidationError::OutOfGrid(coord));
        }
        Ok(coord)
    }
    /// Print `z/x/y` to `out`
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
    pub fn println<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

fn parse_component(field: Option<&str>, text: &str) -> Result<u32, ValidationError> {
    let field = field.ok_or_else(|| ValidationError::Malformed(text.to_string()))?;
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if field.strip_prefix('-').map_or(false, is_number) {
        return Err(ValidationError::NegativeComponent(text.to_string()));
    }
    if !is_number(field) {
        return Err(ValidationError::Malformed(text.to_string()));
    }
    field
        .parse::<u32>()
        .map_err(|_| ValidationError::Malformed(text.to_string()))
}

/// Compare zoom level, then column, then row
pub fn compare(lhs: &Coord, rhs: &Coord) -> Ordering {
    lhs.z
        .cmp(&rhs.z)
        .then(lhs.x.cmp(&rhs.x))
        .then(lhs.y.cmp(&rhs.y))
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::deserialize(s)
    }
}
