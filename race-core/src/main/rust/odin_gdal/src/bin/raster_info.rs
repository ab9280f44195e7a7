/*
 * Copyright (c) 2023, United States Government, as represented by the
 * Administrator of the National Aeronautics and Space Administration.
 * All rights reserved.
 *
 * The RACE - Runtime for Airspace Concept Evaluation platform is licensed
 * under the Apache License, Version 2.0 (the "License"); you may not use
 * this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use lazy_static::lazy_static;
use structopt::StructOpt;
use anyhow::Result;
use odin_gdal::{RasterInfo, vsi::{file_size, to_gdal_path}};

/// show the georeferencing info we use for STAC records of a raster file
#[derive(StructOpt)]
struct CliOpts {
    /// also print the WKT2 of the spatial reference system
    #[structopt(long)]
    wkt: bool,

    /// raster file or URL
    path: String,
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

fn main() -> Result<()> {
    let path = to_gdal_path(ARGS.path.as_str());
    let info = RasterInfo::open(&path)?;
    let bbox = info.bounds();

    println!("path:      {}", path);
    println!("size:      {} x {} ({} bands)", info.width, info.height, info.band_count);
    if let Some(len) = file_size(&path) {
        println!("bytes:     {}", len);
    }
    println!("epsg:      {}", info.epsg.map(|c| c.to_string()).unwrap_or_else(|| "?".to_string()));
    println!("bbox:      {:.3} {:.3} {:.3} {:.3}", bbox.west, bbox.south, bbox.east, bbox.north);
    println!("transform: {:?}", info.affine());

    for (k,v) in &info.metadata {
        println!("  {}={}", k, v);
    }

    if ARGS.wkt {
        if let Some(wkt) = &info.wkt2 {
            println!("{}", wkt);
        }
    }

    Ok(())
}
