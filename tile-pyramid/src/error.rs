//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coord::Coord;

/// Rejected input of a coordinate conversion
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall { required: usize, available: usize },
    #[error("malformed coordinate `{0}`, expected `z/x/y`")]
    Malformed(String),
    #[error("negative component in coordinate `{0}`")]
    NegativeComponent(String),
    #[error("coordinate {0} is outside of the grid at its zoom level")]
    OutOfGrid(Coord),
    #[error("invalid quadkey digit `{digit}` at position {position}")]
    InvalidQuadkeyDigit { digit: char, position: usize },
    #[error("quadkey with {0} digits exceeds the addressable zoom levels")]
    QuadkeyTooLong(usize),
}
