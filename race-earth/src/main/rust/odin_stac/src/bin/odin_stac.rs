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
use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};
use odin_common::fs::{existing_non_empty_file_from_path, to_absolute_href};
use odin_stac::*;

/// create COGs and STAC records for LidarBC raster datasets
#[derive(StructOpt)]
struct CliOpts {
    /// name of a built-in dataset profile or pathname of a RON profile file
    #[structopt(long,default_value="bc-dem")]
    profile: String,

    /// gdal_translate executable to use for COG conversion
    #[structopt(long,default_value="gdal_translate")]
    gdal_translate: String,

    #[structopt(short,long)]
    verbose: bool,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// create a COG from a GeoTIFF file
    CreateCog {
        /// pathname of the GeoTIFF file
        source: String,
        /// year the data was collected
        year: i32,
        /// pathname of the output COG
        destination: String,
    },

    /// create the STAC collection of the dataset
    CreateCollection {
        /// pathname of the collection JSON
        destination: String,
    },

    /// create a STAC item for a COG
    CreateItem {
        /// href of the COG asset of the item
        source: String,
        /// pathname of the item JSON
        destination: String,
    },

    /// store the selected dataset profile as a RON file that can be edited and used with --profile
    StoreProfile {
        /// pathname of the RON file
        destination: String,
    },
}

lazy_static! {
    static ref ARGS: CliOpts = CliOpts::from_args();
}

fn main() -> Result<()> {
    init_trace();

    match &ARGS.cmd {
        Command::CreateCog { source, year, destination } => {
            existing_non_empty_file_from_path(source).with_context(|| format!("invalid source {}", source))?;
            let request = ConversionRequest::new( source, destination, *year);
            create_cog_with( &request, &ARGS.gdal_translate)?;
            info!("created {}", destination);
        }
        Command::CreateCollection { destination } => {
            let profile = DatasetProfile::select(&ARGS.profile)?;
            let mut collection = create_collection(&profile);
            collection.set_self_href( &to_absolute_href(destination)?);
            collection.write_to(destination)?;
            info!("created collection {} in {}", collection.id, destination);
        }
        Command::CreateItem { source, destination } => {
            let profile = DatasetProfile::select(&ARGS.profile)?;
            let item = create_item_from_href( source, None, &profile)?;
            item.write_to(destination)?;
            info!("created item {} in {}", item.id, destination);
        }
        Command::StoreProfile { destination } => {
            let profile = DatasetProfile::select(&ARGS.profile)?;
            let pathname = profile.store(destination)?;
            info!("stored profile {} in {}", profile.id, pathname);
        }
    }

    Ok(())
}

fn init_trace() {
    let level = if ARGS.verbose { Level::DEBUG } else { Level::INFO };
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("odin_gdal", level)
        .with_target("odin_stac", level)
        .with_default(Level::WARN);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
