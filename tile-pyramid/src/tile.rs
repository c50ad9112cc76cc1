//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile generation with callbacks
//!
//! The callback is invoked once per visited tile. Context is passed by
//! capturing it in the closure.

use crate::coord::Coord;
use crate::geo::Bounds;
use crate::grid_iterator::{GridIterator, ParentsIterator};
use std::convert::TryFrom;

/// Visit all tiles of the zoom levels `zoom_start` to `zoom_until`
pub fn for_zoom_range<F>(zoom_start: u8, zoom_until: u8, mut for_coord: F)
where
    F: FnMut(&Coord),
{
    GridIterator::zoom_range(zoom_start, zoom_until).for_each(|coord| for_coord(&coord));
}

/// Visit an inclusive cell rectangle of `start_zoom` and its descendants up to `end_zoom`
pub fn for_coord_zoom_range<F>(
    start_x: u32,
    start_y: u32,
    end_x: u32,
    end_y: u32,
    start_zoom: u8,
    end_zoom: u8,
    mut for_coord: F,
) where
    F: FnMut(&Coord),
{
    GridIterator::coord_zoom_range(start_x, start_y, end_x, end_y, start_zoom, end_zoom)
        .for_each(|coord| for_coord(&coord));
}

/// Visit a tile and its parents down to zoom level `zoom_until`
pub fn for_coord_parents<F>(start: &Coord, zoom_until: u8, mut for_coord: F)
where
    F: FnMut(&Coord),
{
    ParentsIterator::new(start, zoom_until).for_each(|coord| for_coord(&coord));
}

/// Visit all tiles within `bounds` (degrees) for a zoom level range
pub fn for_bounds<F>(bounds: &Bounds, zoom_start: u8, zoom_until: u8, mut for_coord: F)
where
    F: FnMut(&Coord),
{
    GridIterator::bounds(bounds, zoom_start, zoom_until).for_each(|coord| for_coord(&coord));
}

/// Visit all tiles within `bounds` (Mercator meters) for a zoom level range
pub fn for_mercator_bounds<F>(bounds: &Bounds, zoom_start: u8, zoom_until: u8, mut for_coord: F)
where
    F: FnMut(&Coord),
{
    GridIterator::mercator_bounds(bounds, zoom_start, zoom_until)
        .for_each(|coord| for_coord(&coord));
}

/// Total number of tiles of zoom level `zoom` and all levels below
pub fn n_for_zoom(zoom: u8) -> i64 {
    // geometric series, each zoom containing 4 times more tiles
    1u128
        .checked_shl(2 * (zoom as u32 + 1))
        .and_then(|pow| i64::try_from((pow - 1) / 3).ok())
        .unwrap_or(i64::MAX)
}
