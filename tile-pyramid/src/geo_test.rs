//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coord::{grid_side, Coord};
use crate::geo::*;
use crate::grid_iterator::{GridIterator, MAX_ZOOM};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{} != {} (tolerance {})",
        actual,
        expected,
        tolerance
    );
}

#[test]
fn test_lnglat() {
    let lnglat = coord_to_lnglat(&Coord::new(19295, 24641, 16));
    assert_close(lnglat.x, -74.00939941, 1e-8);
    assert_close(lnglat.y, 40.70979201, 1e-8);

    let lnglat = coord_to_lnglat(&Coord::new(0, 0, 0));
    assert_eq!(lnglat.x, -180.0);
    assert_close(lnglat.y, 85.0511287798066, 1e-10);

    assert_eq!(
        lnglat_to_coord(
            &Point {
                x: -74.0093994,
                y: 40.7097920
            },
            16
        ),
        Coord::new(19295, 24641, 16)
    );
    assert_eq!(
        lnglat_to_coord(&Point { x: 0.0, y: 0.0 }, 0),
        Coord::new(0, 0, 0)
    );
}

#[test]
fn test_bounds() {
    let bounds = coord_to_bounds(&Coord::new(0, 0, 0));
    assert_eq!(bounds.minx, -180.0);
    assert_eq!(bounds.maxx, 180.0);
    assert_close(bounds.miny, -85.0511287798066, 1e-10);
    assert_close(bounds.maxy, 85.0511287798066, 1e-10);

    let bounds = coord_to_bounds(&Coord::new(1, 0, 1));
    assert_eq!(bounds.minx, 0.0);
    assert_eq!(bounds.maxx, 180.0);
    assert_close(bounds.miny, 0.0, 1e-10);
}

#[test]
fn test_bounds_to_coords() {
    let bounds = Bounds {
        minx: -74.009399414062,
        miny: 40.705627938206,
        maxx: -74.00390625,
        maxy: 40.709792012435,
    };
    assert_eq!(
        bounds_to_coords(&bounds, 16),
        TileSpan::Range {
            top_left: Coord::new(19295, 24640, 16),
            bottom_right: Coord::new(19296, 24641, 16),
        }
    );
    assert_eq!(
        bounds_to_coords(&bounds, 17),
        TileSpan::Range {
            top_left: Coord::new(38590, 49281, 17),
            bottom_right: Coord::new(38592, 49283, 17),
        }
    );
    let span = bounds_to_coords(&bounds, 10);
    assert_eq!(span, TileSpan::Single(Coord::new(301, 385, 10)));
    assert_eq!(span.top_left(), span.bottom_right());

    // clamped to the grid
    let world = Bounds {
        minx: -180.0,
        miny: -85.0,
        maxx: 180.0,
        maxy: 85.0,
    };
    assert_eq!(
        bounds_to_coords(&world, 1),
        TileSpan::Range {
            top_left: Coord::new(0, 0, 1),
            bottom_right: Coord::new(1, 1, 1),
        }
    );
    assert_eq!(
        bounds_to_coords(&world, 0),
        TileSpan::Single(Coord::new(0, 0, 0))
    );
}

#[test]
fn test_mercator() {
    let coord = Coord::new(19302, 24623, 16);
    let meters = coord_to_mercator(&coord);
    assert_close(meters.x, -8234408.183105, 1e-5);
    assert_close(meters.y, 4980636.763062, 1e-5);
    assert_eq!(mercator_to_coord(&meters, 16), coord);
    assert_eq!(
        mercator_to_coord(
            &Point {
                x: -8233978.22,
                y: 4980225.91
            },
            16
        ),
        coord
    );

    let lnglat = mercator_to_wgs84(&Point {
        x: -8233978.22,
        y: 4980225.91,
    });
    assert_close(lnglat.x, -73.96708488464355, 1e-6);
    assert_close(lnglat.y, 40.781906259287, 1e-6);

    let meters = wgs84_to_mercator(&Point {
        x: -73.96708488464355,
        y: 40.781906259287,
    });
    assert_close(meters.x, -8233978.22, 0.01);
    assert_close(meters.y, 4980225.91, 0.01);

    for coord in GridIterator::zoom_range(0, 6) {
        assert_eq!(mercator_to_coord(&coord_to_mercator(&coord), coord.z), coord);
    }
}

#[test]
fn test_mercator_round_trip_all_zooms() {
    for z in 0..=MAX_ZOOM {
        let last = (grid_side(z) - 1) as u32;
        let step = (last / 97).max(1);
        let mut cells = (0..=last).step_by(step as usize).collect::<Vec<_>>();
        cells.extend_from_slice(&[last / 2, last.saturating_sub(1), last]);
        for &x in &cells {
            for &y in &[0, last / 3, last / 2, last] {
                let coord = Coord::new(x, y, z);
                assert_eq!(
                    mercator_to_coord(&coord_to_mercator(&coord), z),
                    coord,
                    "round trip of {:?}",
                    coord
                );
            }
        }
    }
    let corner = Coord::new(2147483647, 0, 31);
    assert_eq!(mercator_to_coord(&coord_to_mercator(&corner), 31), corner);
    let corner = Coord::new(0, 2147483647, 31);
    assert_eq!(mercator_to_coord(&coord_to_mercator(&corner), 31), corner);

    // points inside a tile are not snapped
    let size = 2.0 * HALF_CIRCUMFERENCE / (31f64).exp2();
    let inside = Point {
        x: -HALF_CIRCUMFERENCE + 5.5 * size,
        y: HALF_CIRCUMFERENCE - 7.999 * size,
    };
    assert_eq!(mercator_to_coord(&inside, 31), Coord::new(5, 7, 31));
}

#[test]
fn test_mercator_bounds() {
    let bounds = coord_to_mercator_bounds(&Coord::new(0, 0, 1));
    assert_eq!(
        bounds,
        Bounds {
            minx: -HALF_CIRCUMFERENCE,
            miny: 0.0,
            maxx: 0.0,
            maxy: HALF_CIRCUMFERENCE,
        }
    );

    let world = Bounds {
        minx: -HALF_CIRCUMFERENCE,
        miny: -HALF_CIRCUMFERENCE,
        maxx: HALF_CIRCUMFERENCE,
        maxy: HALF_CIRCUMFERENCE,
    };
    assert_eq!(
        mercator_bounds_to_coords(&world, 2),
        TileSpan::Range {
            top_left: Coord::new(0, 0, 2),
            bottom_right: Coord::new(3, 3, 2),
        }
    );

    let wgs84 = Bounds {
        minx: -180.0,
        miny: 0.0,
        maxx: 0.0,
        maxy: 0.0,
    };
    let merc = bounds_wgs84_to_mercator(&wgs84);
    assert_close(merc.minx, -HALF_CIRCUMFERENCE, 1e-6);
    assert_close(merc.maxx, 0.0, 1e-6);
    assert_close(merc.miny, 0.0, 1e-6);
}
