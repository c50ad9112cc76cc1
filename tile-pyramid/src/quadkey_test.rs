//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coord::Coord;
use crate::error::ValidationError;
use crate::grid_iterator::GridIterator;
use crate::quadkey::{coord_to_quadkey, quadkey_to_coord};

#[test]
fn test_quadkeys() {
    let known = [
        (Coord::new(2, 2, 3), "030"),
        (Coord::new(1, 1, 1), "3"),
        (Coord::new(0, 1, 2), "02"),
        (Coord::new(5, 0, 3), "101"),
        (Coord::new(0, 0, 0), ""),
    ];
    for (coord, quadkey) in known.iter() {
        assert_eq!(coord_to_quadkey(coord), *quadkey);
        assert_eq!(quadkey_to_coord(quadkey), Ok(*coord));
    }
    assert_eq!(Coord::new(3, 5, 3).to_quadkey(), "213");
    assert_eq!(Coord::from_quadkey("213"), Ok(Coord::new(3, 5, 3)));

    for coord in GridIterator::zoom_range(0, 4) {
        let quadkey = coord.to_quadkey();
        assert_eq!(quadkey.len(), coord.z as usize);
        assert_eq!(quadkey_to_coord(&quadkey), Ok(coord));
    }
}

#[test]
fn test_invalid_quadkeys() {
    assert_eq!(
        quadkey_to_coord("0140"),
        Err(ValidationError::InvalidQuadkeyDigit {
            digit: '4',
            position: 2
        })
    );
    assert!(quadkey_to_coord("a").is_err());
    assert!(quadkey_to_coord("12 ").is_err());

    let longest = "3".repeat(32);
    assert_eq!(
        quadkey_to_coord(&longest),
        Ok(Coord::new(u32::MAX, u32::MAX, 32))
    );
    assert_eq!(
        quadkey_to_coord(&"0".repeat(33)),
        Err(ValidationError::QuadkeyTooLong(33))
    );
}
