//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::coord::{grid_side, Coord};
use crate::geo::{bounds_to_coords, mercator_bounds_to_coords, Bounds, TileSpan};

/// Highest zoom level with an exact compact encoding
pub const MAX_ZOOM: u8 = 31;

/// Min and max grid cell numbers of one zoom level (max exclusive)
#[derive(PartialEq, Clone, Debug, Default)]
pub struct TileLimits {
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

fn to_cell(value: u64) -> u32 {
    value.min(u32::MAX as u64) as u32
}

impl TileLimits {
    /// All tiles of a zoom level
    pub fn full(zoom: u8) -> TileLimits {
        let side = to_cell(grid_side(zoom));
        TileLimits {
            minx: 0,
            miny: 0,
            maxx: side,
            maxy: side,
        }
    }
    /// Tiles of an inclusive span
    pub fn from_span(span: &TileSpan) -> TileLimits {
        let top_left = span.top_left();
        let bottom_right = span.bottom_right();
        TileLimits {
            minx: top_left.x,
            miny: top_left.y,
            maxx: bottom_right.x.saturating_add(1),
            maxy: bottom_right.y.saturating_add(1),
        }
    }
    /// Inclusive cell rectangle scaled by `2^level_offset`
    pub fn scaled(
        start_x: u32,
        start_y: u32,
        end_x: u32,
        end_y: u32,
        level_offset: u8,
    ) -> TileLimits {
        let scale = |cell: u32| to_cell((cell as u64) << level_offset.min(MAX_ZOOM));
        TileLimits {
            minx: scale(start_x),
            miny: scale(start_y),
            maxx: scale(end_x.saturating_add(1)),
            maxy: scale(end_y.saturating_add(1)),
        }
    }
    pub fn is_empty(&self) -> bool {
        self.minx >= self.maxx || self.miny >= self.maxy
    }
    /// Number of tiles
    pub fn count(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.maxx - self.minx) as u64 * (self.maxy - self.miny) as u64
        }
    }
}

/// Level-by-level iterator
///
/// Visits zoom levels ascending, columns within a level ascending and rows
/// within a column ascending. A row-major iterator visits rows within a
/// level ascending and columns within a row ascending instead.
pub struct GridIterator {
    z: u8,
    x: u32,
    y: u32,
    maxz: u8,
    limits: Vec<TileLimits>,
    row_major: bool,
    finished: bool,
}

impl GridIterator {
    /// Iterate over `limits` (indexed by zoom level) from `minz` to `maxz` inclusive
    pub fn new(minz: u8, maxz: u8, limits: Vec<TileLimits>) -> GridIterator {
        if maxz > MAX_ZOOM {
            warn!("Skipping zoom levels >{}", MAX_ZOOM);
        }
        let mut griditer = GridIterator {
            z: minz,
            x: 0,
            y: 0,
            maxz: 0,
            limits: Vec::new(),
            row_major: false,
            finished: true,
        };
        if minz <= maxz && limits.len() > minz as usize && minz <= MAX_ZOOM {
            let last_level = (limits.len() - 1).min(MAX_ZOOM as usize) as u8;
            griditer.maxz = std::cmp::min(maxz, last_level);
            griditer.limits = limits;
            griditer.finished = false;
            griditer.enter_level(minz);
        }
        // else "empty" iterator for invalid parameters
        griditer
    }
    /// All tiles of the zoom levels `zoom_start` to `zoom_until`
    pub fn zoom_range(zoom_start: u8, zoom_until: u8) -> GridIterator {
        let maxz = zoom_until.min(MAX_ZOOM);
        let limits = (0..=maxz).map(TileLimits::full).collect();
        GridIterator::new(zoom_start, zoom_until, limits)
    }
    /// Inclusive cell rectangle at `start_zoom`, scaled to each level up to `end_zoom`
    pub fn coord_zoom_range(
        start_x: u32,
        start_y: u32,
        end_x: u32,
        end_y: u32,
        start_zoom: u8,
        end_zoom: u8,
    ) -> GridIterator {
        let maxz = end_zoom.min(MAX_ZOOM);
        let limits = (0..=maxz)
            .map(|z| {
                if z < start_zoom {
                    TileLimits::default()
                } else {
                    TileLimits::scaled(start_x, start_y, end_x, end_y, z - start_zoom)
                }
            })
            .collect();
        GridIterator::new(start_zoom, end_zoom, limits)
    }
    /// Tiles covering `bounds` (degrees), recomputed for every zoom level, in row-major order
    pub fn bounds(bounds: &Bounds, zoom_start: u8, zoom_until: u8) -> GridIterator {
        let limits = span_limits(zoom_start, zoom_until, |z| bounds_to_coords(bounds, z));
        GridIterator::new(zoom_start, zoom_until, limits).row_major()
    }
    /// Tiles covering `bounds` (Mercator meters), recomputed for every zoom level, in row-major order
    pub fn mercator_bounds(bounds: &Bounds, zoom_start: u8, zoom_until: u8) -> GridIterator {
        let limits = span_limits(zoom_start, zoom_until, |z| {
            mercator_bounds_to_coords(bounds, z)
        });
        GridIterator::new(zoom_start, zoom_until, limits).row_major()
    }
    /// Step through columns within a row
    pub fn row_major(mut self) -> GridIterator {
        self.row_major = true;
        self
    }
    /// Tile limits of all levels
    pub fn limits(&self) -> &[TileLimits] {
        &self.limits
    }
    /// Position on the first cell of the first non-empty level from `zoom`
    fn enter_level(&mut self, zoom: u8) {
        let next = (zoom..=self.maxz).find(|z| !self.limits[*z as usize].is_empty());
        match next {
            Some(z) => {
                let limit = &self.limits[z as usize];
                debug!("level {}: {:?}", z, limit);
                self.z = z;
                self.x = limit.minx;
                self.y = limit.miny;
            }
            None => self.finished = true,
        }
    }
}

fn span_limits<F>(zoom_start: u8, zoom_until: u8, span: F) -> Vec<TileLimits>
where
    F: Fn(u8) -> TileSpan,
{
    let maxz = zoom_until.min(MAX_ZOOM);
    (0..=maxz)
        .map(|z| {
            if z < zoom_start {
                TileLimits::default()
            } else {
                TileLimits::from_span(&span(z))
            }
        })
        .collect()
}

impl Iterator for GridIterator {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = Coord {
            x: self.x,
            y: self.y,
            z: self.z,
        };
        let limit = &self.limits[self.z as usize];
        if self.row_major && self.x < limit.maxx - 1 {
            self.x += 1;
        } else if self.row_major && self.y < limit.maxy - 1 {
            self.y += 1;
            self.x = limit.minx;
        } else if !self.row_major && self.y < limit.maxy - 1 {
            self.y += 1;
        } else if !self.row_major && self.x < limit.maxx - 1 {
            self.x += 1;
            self.y = limit.miny;
        } else if self.z < self.maxz {
            self.enter_level(self.z + 1);
        } else {
            self.finished = true;
        }
        Some(current)
    }
}

/// Ancestor chain iterator, from a start tile up to a zoom level (inclusive)
pub struct ParentsIterator {
    next: Option<Coord>,
    zoom_until: u8,
}

impl ParentsIterator {
    pub fn new(start: &Coord, zoom_until: u8) -> ParentsIterator {
        ParentsIterator {
            next: Some(*start),
            zoom_until,
        }
    }
}

impl Iterator for ParentsIterator {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        let zoom_until = self.zoom_until;
        let current = self.next.filter(|coord| coord.z >= zoom_until)?;
        self.next = current.parent();
        Some(current)
    }
}

#[test]
fn test_zoom_range_iter() {
    let cells = GridIterator::zoom_range(0, 2)
        .map(|c| (c.z, c.x, c.y))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (0, 0, 0),
            (1, 0, 0),
            (1, 0, 1),
            (1, 1, 0),
            (1, 1, 1),
            (2, 0, 0),
            (2, 0, 1),
            (2, 0, 2),
            (2, 0, 3),
            (2, 1, 0),
            (2, 1, 1),
            (2, 1, 2),
            (2, 1, 3),
            (2, 2, 0),
            (2, 2, 1),
            (2, 2, 2),
            (2, 2, 3),
            (2, 3, 0),
            (2, 3, 1),
            (2, 3, 2),
            (2, 3, 3)
        ]
    );

    let cells = GridIterator::zoom_range(1, 2).collect::<Vec<_>>();
    assert_eq!(cells.len(), 20);
    assert_eq!(cells[0], Coord::new(0, 0, 1));
    assert_eq!(cells[4], Coord::new(0, 0, 2));

    let cells = GridIterator::zoom_range(0, 0).collect::<Vec<_>>();
    assert_eq!(cells, vec![Coord::new(0, 0, 0)]);
}

#[test]
fn test_bad_params() {
    // missing tile limits
    let griditer = GridIterator::new(0, 10, Vec::new());
    assert_eq!(griditer.count(), 0);

    // minz > maxz
    assert_eq!(GridIterator::zoom_range(3, 2).count(), 0);

    // maxz >= limits.len()
    let griditer = GridIterator::new(0, 2, vec![TileLimits::full(0), TileLimits::full(1)]);
    let cells = griditer.map(|c| (c.z, c.x, c.y)).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![(0, 0, 0), (1, 0, 0), (1, 0, 1), (1, 1, 0), (1, 1, 1)]
    );

    // minz >= limits.len()
    let griditer = GridIterator::new(1, 2, vec![TileLimits::full(0)]);
    assert_eq!(griditer.count(), 0);
}

#[test]
fn test_empty_levels() {
    let limits = vec![
        TileLimits::full(0),
        TileLimits::default(),
        TileLimits {
            minx: 1,
            miny: 2,
            maxx: 2,
            maxy: 4,
        },
    ];
    let cells = GridIterator::new(0, 2, limits).collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![Coord::new(0, 0, 0), Coord::new(1, 2, 2), Coord::new(1, 3, 2)]
    );

    let limits = vec![TileLimits::default(), TileLimits::default()];
    assert_eq!(GridIterator::new(0, 1, limits).count(), 0);
}

#[test]
fn test_row_major_iter() {
    let limits = vec![
        TileLimits::default(),
        TileLimits::full(1),
        TileLimits {
            minx: 1,
            miny: 2,
            maxx: 3,
            maxy: 4,
        },
    ];
    let cells = GridIterator::new(1, 2, limits)
        .row_major()
        .map(|c| (c.z, c.x, c.y))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (1, 0, 0),
            (1, 1, 0),
            (1, 0, 1),
            (1, 1, 1),
            (2, 1, 2),
            (2, 2, 2),
            (2, 1, 3),
            (2, 2, 3)
        ]
    );
}

#[test]
fn test_coord_zoom_range_iter() {
    let cells = GridIterator::coord_zoom_range(1, 1, 2, 2, 1, 2).collect::<Vec<_>>();
    assert_eq!(cells.len(), 20);
    assert_eq!(cells[0], Coord::new(1, 1, 1));
    assert_eq!(cells[3], Coord::new(2, 2, 1));
    assert_eq!(cells[4], Coord::new(2, 2, 2));
    assert_eq!(cells[19], Coord::new(5, 5, 2));
}

#[test]
fn test_limits() {
    assert_eq!(TileLimits::full(10).count(), 1 << 20);
    assert_eq!(
        TileLimits::scaled(1, 1, 2, 2, 1),
        TileLimits {
            minx: 2,
            miny: 2,
            maxx: 6,
            maxy: 6,
        }
    );
    assert!(TileLimits::default().is_empty());
    assert_eq!(TileLimits::default().count(), 0);
}

#[test]
fn test_max_zoom() {
    let griditer = GridIterator::zoom_range(30, 40);
    assert_eq!(griditer.limits().len(), MAX_ZOOM as usize + 1);
    assert_eq!(GridIterator::zoom_range(32, 33).count(), 0);
}

#[test]
fn test_parents_iter() {
    let parents = ParentsIterator::new(&Coord::new(4, 4, 3), 1).collect::<Vec<_>>();
    assert_eq!(
        parents,
        vec![Coord::new(4, 4, 3), Coord::new(2, 2, 2), Coord::new(1, 1, 1)]
    );

    let parents = ParentsIterator::new(&Coord::new(1, 1, 1), 0).collect::<Vec<_>>();
    assert_eq!(parents, vec![Coord::new(1, 1, 1), Coord::new(0, 0, 0)]);

    assert_eq!(ParentsIterator::new(&Coord::new(0, 0, 1), 2).count(), 0);
}
