//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coord::{compare, grid_side, Coord};
use crate::error::ValidationError;
use std::cmp::Ordering;

#[test]
fn test_zoom() {
    let coord = Coord::new(3, 5, 4);
    assert_eq!(coord.zoom(1), Coord::new(6, 10, 5));
    assert_eq!(coord.zoom(2), Coord::new(12, 20, 6));
    assert_eq!(coord.zoom(0), coord);
    assert_eq!(coord.zoom(-1), Coord::new(1, 2, 3));
    assert_eq!(coord.zoom(-3), Coord::new(0, 0, 1));
    // stops at zoom level 0
    assert_eq!(coord.zoom(-10), Coord::new(0, 0, 0));
    // saturates
    assert_eq!(Coord::new(1, 0, 31).zoom(32).x, u32::MAX);
    assert_eq!(Coord::new(1, 0, 31).zoom(32).y, 0);
}

#[test]
fn test_parent() {
    assert_eq!(Coord::new(0, 0, 0).parent(), None);
    assert_eq!(Coord::new(1, 1, 1).parent(), Some(Coord::new(0, 0, 0)));
    assert_eq!(Coord::new(5, 6, 4).parent(), Some(Coord::new(2, 3, 3)));

    let mut coord = Coord::new(5, 6, 4);
    assert!(coord.parent_in_place());
    assert_eq!(coord, Coord::new(2, 3, 3));
    let mut root = Coord::new(0, 0, 0);
    assert!(!root.parent_in_place());
    assert_eq!(root, Coord::new(0, 0, 0));
}

#[test]
fn test_children() {
    let coord = Coord::new(2, 1, 2);
    let children = coord.children();
    assert_eq!(
        children,
        [
            Coord::new(4, 2, 3),
            Coord::new(5, 2, 3),
            Coord::new(4, 3, 3),
            Coord::new(5, 3, 3),
        ]
    );
    for child in children.iter() {
        assert!(child.is_valid());
        assert_eq!(child.parent(), Some(coord));
    }
}

#[test]
fn test_is_valid() {
    assert_eq!(grid_side(0), 1);
    assert_eq!(grid_side(10), 1024);
    assert!(Coord::new(0, 0, 0).is_valid());
    assert!(!Coord::new(1, 0, 0).is_valid());
    assert!(Coord::new(3, 3, 2).is_valid());
    assert!(!Coord::new(3, 4, 2).is_valid());
    assert!(Coord::new(u32::MAX, u32::MAX, 32).is_valid());
}

#[test]
fn test_serialize() {
    let coord = Coord::new(1, 2, 3);
    assert_eq!(coord.serialize(), "3/1/2");
    assert_eq!(format!("{}", coord), "3/1/2");

    let mut buf = [0u8; 16];
    assert_eq!(coord.serialize_into(&mut buf), Ok(5));
    assert_eq!(&buf[..5], b"3/1/2");

    let mut small = [0u8; 2];
    assert_eq!(
        coord.serialize_into(&mut small),
        Err(ValidationError::BufferTooSmall {
            required: 5,
            available: 2
        })
    );
    assert_eq!(small, [0, 0]);

    let mut out = Vec::new();
    coord.print(&mut out).unwrap();
    coord.println(&mut out).unwrap();
    assert_eq!(out, b"3/1/23/1/2\n");
}

#[test]
fn test_deserialize() {
    let coord = Coord::new(19302, 24623, 16);
    assert_eq!(Coord::deserialize(&coord.serialize()), Ok(coord));
    assert_eq!("16/19302/24623".parse::<Coord>(), Ok(coord));
    assert_eq!(Coord::deserialize("5/1/2\n"), Ok(Coord::new(1, 2, 5)));
    assert_eq!(Coord::deserialize("0/0/0"), Ok(Coord::new(0, 0, 0)));

    assert_eq!(
        Coord::deserialize("1/2/2"),
        Err(ValidationError::OutOfGrid(Coord::new(2, 2, 1)))
    );
    assert_eq!(
        Coord::deserialize("1/2/garbage"),
        Err(ValidationError::Malformed("1/2/garbage".to_string()))
    );
    assert_eq!(
        Coord::deserialize("something bogus"),
        Err(ValidationError::Malformed("something bogus".to_string()))
    );
    assert_eq!(
        Coord::deserialize("-1/0/0"),
        Err(ValidationError::NegativeComponent("-1/0/0".to_string()))
    );
    assert!(Coord::deserialize("").is_err());
    assert!(Coord::deserialize("1/0").is_err());
    assert!(Coord::deserialize("+1/0/0").is_err());
    assert!(Coord::deserialize(" 1/0/0").is_err());
    assert!(Coord::deserialize("1/0/0/0").is_err());
    assert!(Coord::deserialize("256/0/0").is_err());
    assert!(Coord::deserialize("1/4294967296/0").is_err());
}

#[test]
fn test_compare() {
    let a = Coord::new(5, 1, 2);
    let b = Coord::new(0, 0, 3);
    let c = Coord::new(5, 2, 2);
    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(compare(&a, &c), Ordering::Less);
    assert_eq!(compare(&c, &a), Ordering::Greater);
    assert_eq!(compare(&a, &a), Ordering::Equal);

    let mut coords = vec![b, c, a];
    coords.sort();
    assert_eq!(coords, vec![a, c, b]);
}
