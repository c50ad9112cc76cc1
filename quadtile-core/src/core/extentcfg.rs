//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::PyramidCfg;
use crate::core::Config;
use tile_pyramid::{Bounds, GridIterator};

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ExtentCfg {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<&ExtentCfg> for Bounds {
    fn from(cfg: &ExtentCfg) -> Bounds {
        Bounds {
            minx: cfg.minx,
            miny: cfg.miny,
            maxx: cfg.maxx,
            maxy: cfg.maxy,
        }
    }
}

/// Area restricting a walk
#[derive(Clone, Debug, PartialEq)]
pub enum WalkExtent {
    /// Extent in degrees (EPSG:4326)
    Wgs84(Bounds),
    /// Extent in Web Mercator meters (EPSG:3857)
    Mercator(Bounds),
}

impl WalkExtent {
    pub fn from_srid(bounds: Bounds, srid: i32) -> Result<WalkExtent, String> {
        match srid {
            4326 => Ok(WalkExtent::Wgs84(bounds)),
            3857 => Ok(WalkExtent::Mercator(bounds)),
            _ => Err(format!("Unsupported extent SRID {}", srid)),
        }
    }
    pub fn srid(&self) -> i32 {
        match self {
            WalkExtent::Wgs84(_) => 4326,
            WalkExtent::Mercator(_) => 3857,
        }
    }
    pub fn bounds(&self) -> &Bounds {
        match self {
            WalkExtent::Wgs84(bounds) | WalkExtent::Mercator(bounds) => bounds,
        }
    }
    /// Tiles covering the extent
    pub fn grid_iter(&self, minzoom: u8, maxzoom: u8) -> GridIterator {
        match self {
            WalkExtent::Wgs84(bounds) => GridIterator::bounds(bounds, minzoom, maxzoom),
            WalkExtent::Mercator(bounds) => {
                GridIterator::mercator_bounds(bounds, minzoom, maxzoom)
            }
        }
    }
    /// Parse `minx,miny,maxx,maxy[,srid]`
    pub fn parse(text: &str) -> Result<WalkExtent, String> {
        let values = text
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid extent value '{}'", v))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let srid = match values.len() {
            4 => 4326,
            5 => values[4] as i32,
            _ => return Err(format!("Invalid extent '{}'", text)),
        };
        let bounds = Bounds {
            minx: values[0],
            miny: values[1],
            maxx: values[2],
            maxy: values[3],
        };
        WalkExtent::from_srid(bounds, srid)
    }
}

impl<'a> Config<'a, PyramidCfg> for Option<WalkExtent> {
    fn from_config(pyramid_cfg: &PyramidCfg) -> Result<Self, String> {
        let srid = pyramid_cfg.srid.unwrap_or(4326);
        match pyramid_cfg.extent {
            Some(ref extent) => WalkExtent::from_srid(Bounds::from(extent), srid).map(Some),
            None if pyramid_cfg.srid.is_some() => {
                warn!("Ignoring srid {} without extent", srid);
                Ok(None)
            }
            None => Ok(None),
        }
    }
    fn gen_config() -> String {
        let toml = r#"#extent = { minx = -180.0, miny = -85.0511, maxx = 180.0, maxy = 85.0511 }
#srid = 4326
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        match self {
            Some(extent) => {
                let bounds = extent.bounds();
                format!(
                    "extent = {{ minx = {:?}, miny = {:?}, maxx = {:?}, maxy = {:?} }}\nsrid = {}\n",
                    bounds.minx,
                    bounds.miny,
                    bounds.maxx,
                    bounds.maxy,
                    extent.srid()
                )
            }
            None => Self::gen_config(),
        }
    }
}
