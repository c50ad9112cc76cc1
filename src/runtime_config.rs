//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use clap::ArgMatches;
use quadtile_core::core::config::DEFAULT_CONFIG;
use quadtile_core::core::{parse_config, read_config, ApplicationCfg, Config, WalkExtent};
use quadtile_core::service::{InputFormat, OutputFormat, TileWalker};
use std::num::NonZeroUsize;
use std::process;
use std::str::FromStr;
use tile_pyramid::Coord;

/// Log `err` and terminate
pub fn exit_with_error(err: String) -> ! {
    error!("{}", err);
    process::exit(1)
}

/// Parse an optional argument, exiting on invalid values
pub fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> Option<T> {
    args.value_of(name).map(|s| {
        s.parse::<T>().unwrap_or_else(|_| {
            exit_with_error(format!("Error parsing '{}' value '{}'", name, s))
        })
    })
}

pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath)
            .unwrap_or_else(|err| exit_with_error(format!("Error reading configuration - {}", err)))
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| exit_with_error(err))
    }
}

/// Walker from configuration, overridden by command line arguments
pub fn walker_from_args(config: &ApplicationCfg, args: &ArgMatches) -> TileWalker {
    let mut walker = TileWalker::from_config(config)
        .unwrap_or_else(|err| exit_with_error(format!("Error reading configuration - {}", err)));
    if let Some(minzoom) = parse_arg(args, "minzoom") {
        walker.minzoom = minzoom;
    }
    if let Some(maxzoom) = parse_arg(args, "maxzoom") {
        walker.maxzoom = maxzoom;
    }
    if let Some(extent) = args.value_of("extent") {
        walker.extent = Some(WalkExtent::parse(extent).unwrap_or_else(|err| exit_with_error(err)));
    }
    if let Some(format) = args.value_of("format") {
        walker.format = OutputFormat::from_str(format).unwrap_or_else(|err| exit_with_error(err));
    }
    if let Some(batch_size) = parse_arg::<usize>(args, "batchsize") {
        walker.batch_size = NonZeroUsize::new(batch_size)
            .unwrap_or_else(|| exit_with_error("batchsize must be greater than 0".to_string()));
    }
    walker
}

/// Coordinate from the `coord` argument, in the format given by `from` or detected
pub fn coord_from_args(args: &ArgMatches) -> Coord {
    let text = args
        .value_of("coord")
        .unwrap_or_else(|| exit_with_error("Missing argument 'coord'".to_string()));
    let from = match args.value_of("from") {
        Some(name) => InputFormat::from_str(name).unwrap_or_else(|err| exit_with_error(err)),
        None => InputFormat::detect(text),
    };
    from.parse_coord(text)
        .unwrap_or_else(|err| exit_with_error(format!("Invalid coordinate - {}", err)))
}
