//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use tile_pyramid::{
    coord_to_bounds, coord_to_lnglat, coord_to_mercator, coord_to_mercator_bounds, Coord,
};

/// Text representation of a written coordinate
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// `z/x/y`
    Zxy,
    /// Compact 64 bit integer
    Encoded,
    Quadkey,
    /// Top left corner in degrees
    LngLat,
    /// Tile extent in degrees
    Bounds,
    /// Top left corner in Mercator meters
    Mercator,
    /// Tile extent in Mercator meters
    MercatorBounds,
    /// JSON object with all representations
    Json,
}

impl OutputFormat {
    pub fn write_coord<W: Write>(&self, out: &mut W, coord: &Coord) -> io::Result<()> {
        match self {
            OutputFormat::Zxy => coord.println(out),
            OutputFormat::Encoded => writeln!(out, "{}", coord.encode()),
            OutputFormat::Quadkey => writeln!(out, "{}", coord.to_quadkey()),
            OutputFormat::LngLat => {
                let lnglat = coord_to_lnglat(coord);
                writeln!(out, "{},{}", lnglat.x, lnglat.y)
            }
            OutputFormat::Bounds => {
                let b = coord_to_bounds(coord);
                writeln!(out, "{},{},{},{}", b.minx, b.miny, b.maxx, b.maxy)
            }
            OutputFormat::Mercator => {
                let point = coord_to_mercator(coord);
                writeln!(out, "{},{}", point.x, point.y)
            }
            OutputFormat::MercatorBounds => {
                let b = coord_to_mercator_bounds(coord);
                writeln!(out, "{},{},{},{}", b.minx, b.miny, b.maxx, b.maxy)
            }
            OutputFormat::Json => writeln!(out, "{}", coord_json(coord)),
        }
    }
}

fn coord_json(coord: &Coord) -> serde_json::Value {
    let lnglat = coord_to_lnglat(coord);
    let bounds = coord_to_bounds(coord);
    let mercator = coord_to_mercator_bounds(coord);
    json!({
        "z": coord.z,
        "x": coord.x,
        "y": coord.y,
        "encoded": coord.encode(),
        "quadkey": coord.to_quadkey(),
        "lnglat": [lnglat.x, lnglat.y],
        "bounds": [bounds.minx, bounds.miny, bounds.maxx, bounds.maxy],
        "mercator_bounds": [mercator.minx, mercator.miny, mercator.maxx, mercator.maxy],
    })
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zxy" => Ok(OutputFormat::Zxy),
            "encoded" => Ok(OutputFormat::Encoded),
            "quadkey" => Ok(OutputFormat::Quadkey),
            "lnglat" => Ok(OutputFormat::LngLat),
            "bounds" => Ok(OutputFormat::Bounds),
            "mercator" => Ok(OutputFormat::Mercator),
            "mercator-bounds" => Ok(OutputFormat::MercatorBounds),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format '{}'", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Zxy => "zxy",
            OutputFormat::Encoded => "encoded",
            OutputFormat::Quadkey => "quadkey",
            OutputFormat::LngLat => "lnglat",
            OutputFormat::Bounds => "bounds",
            OutputFormat::Mercator => "mercator",
            OutputFormat::MercatorBounds => "mercator-bounds",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Text representation of a coordinate given on the command line
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputFormat {
    Zxy,
    Encoded,
    Quadkey,
}

impl InputFormat {
    /// `z/x/y` if the text contains a slash, a quadkey otherwise
    pub fn detect(text: &str) -> InputFormat {
        if text.contains('/') {
            InputFormat::Zxy
        } else {
            InputFormat::Quadkey
        }
    }
    pub fn parse_coord(&self, text: &str) -> Result<Coord, String> {
        let text = text.trim();
        match self {
            InputFormat::Zxy => Coord::deserialize(text).map_err(|e| e.to_string()),
            InputFormat::Quadkey => Coord::from_quadkey(text).map_err(|e| e.to_string()),
            InputFormat::Encoded => text
                .parse::<u64>()
                .map(Coord::decode)
                .map_err(|e| format!("Invalid encoded coordinate '{}': {}", text, e)),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zxy" => Ok(InputFormat::Zxy),
            "encoded" => Ok(InputFormat::Encoded),
            "quadkey" => Ok(InputFormat::Quadkey),
            _ => Err(format!("Unknown input format '{}'", s)),
        }
    }
}
