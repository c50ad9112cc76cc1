//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geographic and Web Mercator conversions
//!
//! Formulas from <http://wiki.openstreetmap.org/wiki/Slippy_map_tilenames>.
//! Input ranges are not validated.

use crate::coord::{grid_side, Coord};
use std::f64::consts;

/// Half of the equatorial circumference in meters (radius 6378137m)
pub const HALF_CIRCUMFERENCE: f64 = 20037508.342789244;

/// Geographic extent, in degrees or meters depending on the producing function
#[derive(PartialEq, Clone, Debug)]
pub struct Bounds {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Longitude/latitude in degrees or Mercator meters
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Tiles covering a bounding box at one zoom level
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum TileSpan {
    Single(Coord),
    /// Inclusive range
    Range { top_left: Coord, bottom_right: Coord },
}

impl TileSpan {
    pub fn top_left(&self) -> Coord {
        match *self {
            TileSpan::Single(coord) => coord,
            TileSpan::Range { top_left, .. } => top_left,
        }
    }
    pub fn bottom_right(&self) -> Coord {
        match *self {
            TileSpan::Single(coord) => coord,
            TileSpan::Range { bottom_right, .. } => bottom_right,
        }
    }
    fn from_corners(top_left: Coord, bottom_right: Coord) -> TileSpan {
        if top_left.x == bottom_right.x && top_left.y == bottom_right.y {
            TileSpan::Single(top_left)
        } else {
            TileSpan::Range {
                top_left,
                bottom_right,
            }
        }
    }
}

fn clamp_to_grid(coord: Coord) -> Coord {
    let maxval = (grid_side(coord.z) - 1).min(u32::MAX as u64) as u32;
    Coord {
        x: coord.x.min(maxval),
        y: coord.y.min(maxval),
        z: coord.z,
    }
}

/// Longitude/latitude of the top left tile corner
pub fn coord_to_lnglat(coord: &Coord) -> Point {
    let n = (coord.z as f64).exp2();
    let lng = coord.x as f64 / n * 360.0 - 180.0;
    let lat_rad = (consts::PI * (1.0 - 2.0 * coord.y as f64 / n)).sinh().atan();
    Point {
        x: lng,
        y: lat_rad.to_degrees(),
    }
}

/// Tile containing a longitude/latitude
pub fn lnglat_to_coord(lnglat: &Point, zoom: u8) -> Coord {
    let lat_rad = lnglat.y.to_radians();
    let n = (zoom as f64).exp2();
    Coord {
        x: ((lnglat.x + 180.0) / 360.0 * n) as u32,
        y: ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / consts::PI) / 2.0 * n) as u32,
        z: zoom,
    }
}

/// Extent of a tile in degrees
pub fn coord_to_bounds(coord: &Coord) -> Bounds {
    let top_left = coord_to_lnglat(coord);
    let bottom_right = coord_to_lnglat(&Coord {
        x: coord.x.saturating_add(1),
        y: coord.y.saturating_add(1),
        z: coord.z,
    });
    // tiles at the grid border may exceed the valid range
    Bounds {
        minx: top_left.x,
        miny: bottom_right.y,
        maxx: bottom_right.x.min(180.0),
        maxy: top_left.y.min(90.0),
    }
}

/// Tiles covering an extent in degrees
pub fn bounds_to_coords(bounds: &Bounds, zoom: u8) -> TileSpan {
    let top_left = lnglat_to_coord(
        &Point {
            x: bounds.minx,
            y: bounds.maxy,
        },
        zoom,
    );
    let bottom_right = lnglat_to_coord(
        &Point {
            x: bounds.maxx,
            y: bounds.miny,
        },
        zoom,
    );
    TileSpan::from_corners(clamp_to_grid(top_left), clamp_to_grid(bottom_right))
}

/// Mercator meters to longitude/latitude
pub fn mercator_to_wgs84(point: &Point) -> Point {
    let x = point.x / HALF_CIRCUMFERENCE;
    let y = point.y / HALF_CIRCUMFERENCE;
    let y = (2.0 * (y * consts::PI).exp().atan() - consts::FRAC_PI_2) / consts::PI;
    Point {
        x: x * 180.0,
        y: y * 180.0,
    }
}

/// Longitude/latitude to Mercator meters
pub fn wgs84_to_mercator(point: &Point) -> Point {
    let y = (point.y * consts::PI / 360.0 + consts::FRAC_PI_4).tan().ln() / consts::PI;
    Point {
        x: point.x * HALF_CIRCUMFERENCE / 180.0,
        y: y * HALF_CIRCUMFERENCE,
    }
}

/// Projected extent
pub fn bounds_wgs84_to_mercator(bounds: &Bounds) -> Bounds {
    let min = wgs84_to_mercator(&Point {
        x: bounds.minx,
        y: bounds.miny,
    });
    let max = wgs84_to_mercator(&Point {
        x: bounds.maxx,
        y: bounds.maxy,
    });
    Bounds {
        minx: min.x,
        miny: min.y,
        maxx: max.x,
        maxy: max.y,
    }
}

/// Tile edge length in meters
fn tile_size(zoom: u8) -> f64 {
    2.0 * HALF_CIRCUMFERENCE / (zoom as f64).exp2()
}

/// Top left tile corner in Mercator meters
pub fn coord_to_mercator(coord: &Coord) -> Point {
    let size = tile_size(coord.z);
    // y grid starts from 0 at the top
    Point {
        x: coord.x as f64 * size - HALF_CIRCUMFERENCE,
        y: HALF_CIRCUMFERENCE - coord.y as f64 * size,
    }
}

/// Grid cell of a position given in tile units.
///
/// Positions within rounding distance of a tile corner snap to that corner.
/// The distance is relative to the tile size, so corners computed by
/// [`coord_to_mercator`] map back to their tile at every zoom level.
fn snap_to_cell(v: f64) -> u32 {
    const EPSILON: f64 = 0.000001;
    let nearest = v.round();
    if (v - nearest).abs() < EPSILON {
        nearest as u32
    } else {
        v.floor() as u32
    }
}

/// Tile containing a point in Mercator meters
pub fn mercator_to_coord(point: &Point, zoom: u8) -> Coord {
    let size = tile_size(zoom);
    Coord {
        x: snap_to_cell((point.x + HALF_CIRCUMFERENCE) / size),
        y: snap_to_cell((HALF_CIRCUMFERENCE - point.y) / size),
        z: zoom,
    }
}

/// Extent of a tile in Mercator meters
pub fn coord_to_mercator_bounds(coord: &Coord) -> Bounds {
    let top_left = coord_to_mercator(coord);
    let bottom_right = coord_to_mercator(&Coord {
        x: coord.x.saturating_add(1),
        y: coord.y.saturating_add(1),
        z: coord.z,
    });
    Bounds {
        minx: top_left.x.min(bottom_right.x),
        miny: top_left.y.min(bottom_right.y),
        maxx: top_left.x.max(bottom_right.x),
        maxy: top_left.y.max(bottom_right.y),
    }
}

/// Tiles covering an extent in Mercator meters
pub fn mercator_bounds_to_coords(bounds: &Bounds, zoom: u8) -> TileSpan {
    let top_left = mercator_to_coord(
        &Point {
            x: bounds.minx,
            y: bounds.maxy,
        },
        zoom,
    );
    let bottom_right = mercator_to_coord(
        &Point {
            x: bounds.maxx,
            y: bounds.miny,
        },
        zoom,
    );
    TileSpan::from_corners(clamp_to_grid(top_left), clamp_to_grid(bottom_right))
}
