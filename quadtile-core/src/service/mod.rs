//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod format;
pub mod walker;

pub use self::format::{InputFormat, OutputFormat};
pub use self::walker::{TileWalker, WalkStats};

#[cfg(test)]
mod format_test;
