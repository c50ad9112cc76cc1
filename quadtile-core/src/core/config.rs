//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::extentcfg::ExtentCfg;
use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub pyramid: PyramidCfg,
    #[serde(default)]
    pub output: OutputCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PyramidCfg {
    #[serde(default)]
    pub minzoom: u8,
    pub maxzoom: u8,
    /// Restrict the walk to the tiles covering this extent
    pub extent: Option<ExtentCfg>,
    /// Units of `extent`: 4326 (degrees, default) or 3857 (meters)
    pub srid: Option<i32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputCfg {
    /// Coordinate format (zxy, encoded, quadkey, ...)
    #[serde(default = "default_format")]
    pub format: String,
    /// Number of coordinates enumerated per step
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

pub const DEFAULT_FORMAT: &str = "zxy";

pub fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

pub fn default_batch_size() -> usize {
    1000
}

impl Default for OutputCfg {
    fn default() -> Self {
        OutputCfg {
            format: default_format(),
            batch_size: default_batch_size(),
        }
    }
}

/// Configuration template, also written by `genconfig`
pub const DEFAULT_CONFIG: &'static str = r#"# quadtile configuration

[pyramid]
minzoom = 0
maxzoom = 14
#extent = { minx = -180.0, miny = -85.0511, maxx = 180.0, maxy = 85.0511 }
#srid = 4326

[output]
# zxy | encoded | quadkey | lnglat | bounds | mercator | mercator-bounds | json
format = "zxy"
batch_size = 1000
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
