//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod runtime_config;

use crate::runtime_config::{
    config_from_args, coord_from_args, exit_with_error, parse_arg, walker_from_args,
};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use quadtile_core::core::Config;
use quadtile_core::service::{OutputFormat, TileWalker};
use std::env;
use std::io::{self, Write};
use std::str::FromStr;
use tile_pyramid::{n_for_zoom, ParentsIterator};
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        let timestamp = time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            timestamp,
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn walk(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let walker = walker_from_args(&config, args);
    let progress = parse_arg::<bool>(args, "progress").unwrap_or(false);
    debug!("{:?}", walker);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(err) = walker.walk(&mut out, progress) {
        exit_with_error(format!("Error writing tiles - {}", err));
    }
}

fn convert(args: &ArgMatches<'_>) {
    let coord = coord_from_args(args);
    let to = match args.value_of("to") {
        Some(name) => OutputFormat::from_str(name).unwrap_or_else(|err| exit_with_error(err)),
        None => OutputFormat::Json,
    };
    let stdout = io::stdout();
    if let Err(err) = to.write_coord(&mut stdout.lock(), &coord) {
        exit_with_error(format!("Error writing coordinate - {}", err));
    }
}

fn parents(args: &ArgMatches<'_>) {
    let coord = coord_from_args(args);
    let minzoom = parse_arg::<u8>(args, "minzoom").unwrap_or(0);
    let format = match args.value_of("format") {
        Some(name) => OutputFormat::from_str(name).unwrap_or_else(|err| exit_with_error(err)),
        None => OutputFormat::Zxy,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for parent in ParentsIterator::new(&coord, minzoom) {
        if let Err(err) = format.write_coord(&mut out, &parent) {
            exit_with_error(format!("Error writing coordinate - {}", err));
        }
    }
}

fn count(args: &ArgMatches<'_>) {
    let maxzoom = parse_arg::<u8>(args, "maxzoom")
        .unwrap_or_else(|| exit_with_error("Missing argument 'maxzoom'".to_string()));
    println!("{}", n_for_zoom(maxzoom));
}

fn gen_config(args: &ArgMatches<'_>) -> String {
    if args.value_of("config").is_some() {
        let config = config_from_args(args);
        walker_from_args(&config, args).gen_runtime_config()
    } else {
        TileWalker::gen_config()
    }
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("quadtile")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("tile pyramid coordinate calculator")
        .subcommand(SubCommand::with_name("walk")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --extent=[minx,miny,maxx,maxy[,srid]] 'Extent of tiles'
                                              --format=[zxy|encoded|quadkey|lnglat|bounds|mercator|mercator-bounds|json] 'Output format'
                                              --batchsize=[NUM] 'Coordinates enumerated per step'
                                              --progress=[false|true] 'Show progress bar'")
                        .about("Write all tile coordinates of a zoom range"))
        .subcommand(SubCommand::with_name("convert")
                        .args_from_usage("--coord=<COORD> 'Coordinate (z/x/y, quadkey or encoded integer)'
                                              --from=[zxy|encoded|quadkey] 'Input format (Default: detected)'
                                              --to=[zxy|encoded|quadkey|lnglat|bounds|mercator|mercator-bounds|json] 'Output format (Default: json)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Convert a tile coordinate"))
        .subcommand(SubCommand::with_name("parents")
                        .args_from_usage("--coord=<COORD> 'Coordinate (z/x/y, quadkey or encoded integer)'
                                              --from=[zxy|encoded|quadkey] 'Input format (Default: detected)'
                                              --minzoom=[LEVEL] 'Lowest zoom level (Default: 0)'
                                              --format=[zxy|encoded|quadkey|lnglat|bounds|mercator|mercator-bounds|json] 'Output format'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Write a tile coordinate and its parents"))
        .subcommand(SubCommand::with_name("count")
                        .args_from_usage("--maxzoom=<LEVEL> 'Maximum zoom level'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Number of tiles up to a zoom level"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --format=[zxy|encoded|quadkey] 'Output format'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("walk", Some(sub_m)) => {
                init_logger(sub_m);
                walk(sub_m);
            }
            ("convert", Some(sub_m)) => {
                init_logger(sub_m);
                convert(sub_m);
            }
            ("parents", Some(sub_m)) => {
                init_logger(sub_m);
                parents(sub_m);
            }
            ("count", Some(sub_m)) => {
                init_logger(sub_m);
                count(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", gen_config(sub_m));
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
