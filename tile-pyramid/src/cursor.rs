//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Resumable enumeration in bounded batches

use crate::coord::{grid_side, Coord};
use crate::grid_iterator::MAX_ZOOM;
use std::num::NonZeroUsize;

/// Saved position of a zoom range traversal
///
/// `(x, y, z)` is the next tile to visit; the traversal ends after
/// `zoom_until` (inclusive). Levels above [`MAX_ZOOM`] are not visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerationCursor {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub zoom_until: u8,
}

/// Result of filling a batch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchStatus {
    /// The batch is full and the cursor points at the next unvisited tile
    Incomplete,
    /// The traversal reached its last zoom level
    Complete,
}

/// Caller owned output buffer with a fixed capacity
#[derive(Clone, Debug)]
pub struct CoordBatch {
    coords: Vec<Coord>,
    capacity: NonZeroUsize,
}

impl CoordBatch {
    pub fn new(capacity: NonZeroUsize) -> CoordBatch {
        CoordBatch {
            coords: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
    /// Number of coordinates written by the last fill
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }
}

impl EnumerationCursor {
    /// Cursor at the first tile of `zoom_start`
    pub fn new(zoom_start: u8, zoom_until: u8) -> EnumerationCursor {
        EnumerationCursor::starting_at(&Coord::new(0, 0, zoom_start), zoom_until)
    }
    /// Cursor resuming at `coord`
    pub fn starting_at(coord: &Coord, zoom_until: u8) -> EnumerationCursor {
        if zoom_until > MAX_ZOOM {
            warn!("Skipping zoom levels >{}", MAX_ZOOM);
        }
        EnumerationCursor {
            x: coord.x,
            y: coord.y,
            z: coord.z,
            zoom_until,
        }
    }
    /// Next tile to visit
    pub fn position(&self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
    pub fn is_complete(&self) -> bool {
        self.z > self.zoom_until.min(MAX_ZOOM)
    }
    /// Fill `batch` with the tiles following the cursor position.
    ///
    /// Tiles are produced in the order of a full zoom range traversal:
    /// zoom levels ascending, then columns, then rows.
    pub fn fill_batch(&mut self, batch: &mut CoordBatch) -> BatchStatus {
        batch.coords.clear();
        let capacity = batch.capacity.get();
        let zoom_until = self.zoom_until.min(MAX_ZOOM);
        let mut x = self.x as u64;
        let mut y = self.y as u64;
        let mut z = self.z;
        while z <= zoom_until {
            let side = grid_side(z);
            while x < side {
                while y < side {
                    if batch.coords.len() >= capacity {
                        self.x = x as u32;
                        self.y = y as u32;
                        self.z = z;
                        trace!("batch full, resuming at {}", self.position());
                        return BatchStatus::Incomplete;
                    }
                    batch.coords.push(Coord {
                        x: x as u32,
                        y: y as u32,
                        z,
                    });
                    y += 1;
                }
                y = 0;
                x += 1;
            }
            x = 0;
            z += 1;
        }
        self.x = 0;
        self.y = 0;
        self.z = z;
        BatchStatus::Complete
    }
}

/// Fill `batch` from `cursor`, see [`EnumerationCursor::fill_batch`]
pub fn for_zoom_range_batch(cursor: &mut EnumerationCursor, batch: &mut CoordBatch) -> BatchStatus {
    cursor.fill_batch(batch)
}
