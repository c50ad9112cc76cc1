//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use crate::core::{Config, WalkExtent};
use crate::service::format::OutputFormat;
use pbr::ProgressBar;
use std::io::{self, stderr, Stderr, Write};
use std::num::NonZeroUsize;
use std::time::Instant;
use tile_pyramid::{grid_side, BatchStatus, CoordBatch, EnumerationCursor, MAX_ZOOM};

/// Writes all coordinates of a zoom range, optionally restricted to an extent
#[derive(Clone, Debug)]
pub struct TileWalker {
    pub minzoom: u8,
    pub maxzoom: u8,
    pub extent: Option<WalkExtent>,
    pub format: OutputFormat,
    /// Coordinates enumerated per step of an unrestricted walk
    pub batch_size: NonZeroUsize,
}

/// Summary of a finished walk
#[derive(PartialEq, Clone, Debug)]
pub struct WalkStats {
    pub tiles: u64,
    /// Number of enumeration steps
    pub batches: u64,
}

impl TileWalker {
    /// Number of tiles the walk will write
    pub fn tile_count(&self) -> u64 {
        match self.extent {
            Some(ref extent) => {
                let griditer = extent.grid_iter(self.minzoom, self.maxzoom);
                let maxz = self.maxzoom.min(MAX_ZOOM) as usize;
                griditer
                    .limits()
                    .iter()
                    .enumerate()
                    .filter(|(z, _)| *z >= self.minzoom as usize && *z <= maxz)
                    .map(|(_, limit)| limit.count())
                    .sum()
            }
            None => (self.minzoom..=self.maxzoom.min(MAX_ZOOM))
                .map(|z| grid_side(z).saturating_mul(grid_side(z)))
                .fold(0u64, |sum, n| sum.saturating_add(n)),
        }
    }
    fn progress_bar(&self) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), self.tile_count());
        pb.message("Tile ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Write coordinates to `out`, one per line
    pub fn walk<W: Write>(&self, out: &mut W, progress: bool) -> io::Result<WalkStats> {
        if self.maxzoom > MAX_ZOOM {
            warn!("Skipping zoom levels >{}", MAX_ZOOM);
        }
        let mut pb = if progress {
            Some(self.progress_bar())
        } else {
            None
        };
        let started = Instant::now();
        let stats = match self.extent {
            Some(ref extent) => {
                debug!("walking extent {:?}", extent);
                let mut tiles = 0;
                for coord in extent.grid_iter(self.minzoom, self.maxzoom) {
                    self.format.write_coord(out, &coord)?;
                    tiles += 1;
                    if let Some(ref mut pb) = pb {
                        pb.inc();
                    }
                }
                WalkStats { tiles, batches: 1 }
            }
            None => self.walk_batches(out, pb.as_mut())?,
        };
        out.flush()?;
        if let Some(ref mut pb) = pb {
            pb.finish();
            eprintln!("");
        }
        info!(
            "{} tiles of zoom levels {}-{} written in {:.3}s",
            stats.tiles,
            self.minzoom,
            self.maxzoom.min(MAX_ZOOM),
            started.elapsed().as_secs_f64()
        );
        Ok(stats)
    }
    fn walk_batches<W: Write>(
        &self,
        out: &mut W,
        mut pb: Option<&mut ProgressBar<Stderr>>,
    ) -> io::Result<WalkStats> {
        let mut cursor = EnumerationCursor::new(self.minzoom, self.maxzoom);
        let mut batch = CoordBatch::new(self.batch_size);
        let mut stats = WalkStats {
            tiles: 0,
            batches: 0,
        };
        loop {
            let status = cursor.fill_batch(&mut batch);
            stats.batches += 1;
            for coord in batch.coords() {
                self.format.write_coord(out, coord)?;
            }
            stats.tiles += batch.len() as u64;
            if let Some(ref mut pb) = pb {
                pb.add(batch.len() as u64);
            }
            if status == BatchStatus::Complete {
                return Ok(stats);
            }
        }
    }
}

impl<'a> Config<'a, ApplicationCfg> for TileWalker {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let extent = Option::<WalkExtent>::from_config(&config.pyramid)?;
        let format = config.output.format.parse::<OutputFormat>()?;
        let batch_size = NonZeroUsize::new(config.output.batch_size)
            .ok_or_else(|| "batch_size must be greater than 0".to_string())?;
        if config.pyramid.minzoom > config.pyramid.maxzoom {
            warn!(
                "minzoom {} is greater than maxzoom {}",
                config.pyramid.minzoom, config.pyramid.maxzoom
            );
        }
        Ok(TileWalker {
            minzoom: config.pyramid.minzoom,
            maxzoom: config.pyramid.maxzoom,
            extent,
            format,
            batch_size,
        })
    }
    fn gen_config() -> String {
        DEFAULT_CONFIG.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = String::new();
        config.push_str(&format!(
            "{}minzoom = {}\nmaxzoom = {}\n",
            TOML_HEADER, self.minzoom, self.maxzoom
        ));
        config.push_str(&self.extent.gen_runtime_config());
        config.push_str(&format!(
            "\n[output]\nformat = \"{}\"\nbatch_size = {}\n",
            self.format, self.batch_size
        ));
        config
    }
}

const TOML_HEADER: &'static str = r#"# quadtile configuration

[pyramid]
"#;

