//! A library for tile pyramid coordinate calculations
//!
//! ## Coordinates
//!
//! ```rust
//! use tile_pyramid::Coord;
//!
//! let coord: Coord = "3/4/2".parse().unwrap();
//! assert_eq!(coord.parent(), Some(Coord::new(2, 1, 2)));
//! assert_eq!(coord.to_quadkey(), "120");
//! assert_eq!(tile_pyramid::decode(coord.encode()), coord);
//! ```
//!
//! ## Grid iterators
//!
//! ```rust
//! use tile_pyramid::GridIterator;
//!
//! let griditer = GridIterator::zoom_range(0, 2);
//! for coord in griditer {
//!     println!("Tile {}", coord);
//! }
//! ```
//!
//! ## Batches
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use tile_pyramid::{BatchStatus, CoordBatch, EnumerationCursor};
//!
//! let mut cursor = EnumerationCursor::new(0, 2);
//! let mut batch = CoordBatch::new(NonZeroUsize::new(10).unwrap());
//! while cursor.fill_batch(&mut batch) == BatchStatus::Incomplete {
//!     assert_eq!(batch.len(), 10);
//! }
//! assert_eq!(batch.len(), 1);
//! ```

#[macro_use]
extern crate log;

mod coord;
#[cfg(test)]
mod coord_test;
mod cursor;
mod encoding;
mod error;
mod geo;
#[cfg(test)]
mod geo_test;
mod grid_iterator;
mod quadkey;
#[cfg(test)]
mod quadkey_test;
mod tile;

pub use coord::{compare, grid_side, Coord};
pub use cursor::{for_zoom_range_batch, BatchStatus, CoordBatch, EnumerationCursor};
pub use encoding::{decode, encode, encoded_zoom_up};
pub use error::ValidationError;
pub use geo::{
    bounds_to_coords, bounds_wgs84_to_mercator, coord_to_bounds, coord_to_lnglat,
    coord_to_mercator, coord_to_mercator_bounds, lnglat_to_coord, mercator_bounds_to_coords,
    mercator_to_coord, mercator_to_wgs84, wgs84_to_mercator, Bounds, Point, TileSpan,
    HALF_CIRCUMFERENCE,
};
pub use grid_iterator::{GridIterator, ParentsIterator, TileLimits, MAX_ZOOM};
pub use quadkey::{coord_to_quadkey, quadkey_to_coord, MAX_QUADKEY_LEN};
pub use tile::{
    for_bounds, for_coord_parents, for_coord_zoom_range, for_mercator_bounds, for_zoom_range,
    n_for_zoom,
};
