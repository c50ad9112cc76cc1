//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::service::format::{InputFormat, OutputFormat};
use tile_pyramid::Coord;

fn formatted(format: OutputFormat, coord: &Coord) -> String {
    let mut out = Vec::new();
    format.write_coord(&mut out, coord).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_output_formats() {
    let coord = Coord::new(1, 1, 1);
    assert_eq!(formatted(OutputFormat::Zxy, &coord), "1/1/1\n");
    assert_eq!(
        formatted(OutputFormat::Encoded, &coord),
        format!("{}\n", (1u64 << 34) | (1 << 5) | 1)
    );
    assert_eq!(formatted(OutputFormat::Quadkey, &coord), "3\n");
    assert_eq!(formatted(OutputFormat::LngLat, &coord), "0,0\n");
    assert_eq!(formatted(OutputFormat::Mercator, &coord), "0,0\n");
    assert_eq!(
        formatted(OutputFormat::MercatorBounds, &Coord::new(0, 0, 1)),
        "-20037508.342789244,0,0,20037508.342789244\n"
    );
    assert!(formatted(OutputFormat::Bounds, &coord).starts_with("0,-85.05112877980"));

    let json: serde_json::Value =
        serde_json::from_str(&formatted(OutputFormat::Json, &coord)).unwrap();
    assert_eq!(json["z"], 1);
    assert_eq!(json["quadkey"], "3");
    assert_eq!(json["encoded"], (1u64 << 34) | (1 << 5) | 1);
    assert_eq!(json["lnglat"][0], 0.0);
}

#[test]
fn test_format_names() {
    for name in &[
        "zxy",
        "encoded",
        "quadkey",
        "lnglat",
        "bounds",
        "mercator",
        "mercator-bounds",
        "json",
    ] {
        let format = name.parse::<OutputFormat>().unwrap();
        assert_eq!(format.to_string(), *name);
    }
    assert_eq!("QUADKEY".parse::<OutputFormat>(), Ok(OutputFormat::Quadkey));
    assert_eq!(
        "tms".parse::<OutputFormat>(),
        Err("Unknown output format 'tms'".to_string())
    );
}

#[test]
fn test_input_formats() {
    assert_eq!(InputFormat::detect("3/4/2"), InputFormat::Zxy);
    assert_eq!(InputFormat::detect("120"), InputFormat::Quadkey);

    let coord = Coord::new(4, 2, 3);
    assert_eq!(InputFormat::Zxy.parse_coord("3/4/2"), Ok(coord));
    assert_eq!(InputFormat::Quadkey.parse_coord("120"), Ok(coord));
    assert_eq!(
        InputFormat::Encoded.parse_coord(&coord.encode().to_string()),
        Ok(coord)
    );
    assert_eq!(
        "encoded".parse::<InputFormat>(),
        Ok(InputFormat::Encoded)
    );

    assert!(InputFormat::Zxy.parse_coord("1/2/2").is_err());
    assert!(InputFormat::Quadkey.parse_coord("124").is_err());
    assert!(InputFormat::Encoded.parse_coord("-1").is_err());
    assert!("lnglat".parse::<InputFormat>().is_err());
}
