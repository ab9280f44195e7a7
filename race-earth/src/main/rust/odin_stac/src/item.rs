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

use chrono::{DateTime,Utc};
use tracing::warn;
use odin_common::datetime::year_start_utc;
use odin_common::fs::href_stem;
use crate::collection::{DATA_ASSET, raster_band};
use crate::extract::{GeospatialDescriptor, ReadHrefModifier, extract_geospatial_descriptor};
use crate::profile::{DatasetProfile, DateRule};
use crate::stac::*;
use crate::errors::{Result, OdinStacError};

/// create a STAC item for the COG at `cog_href` from its extracted descriptor.
/// The href is stored as-is in the data asset, bbox and geometry are in the native CRS of the raster
pub fn create_item (cog_href: &str, descriptor: &GeospatialDescriptor, profile: &DatasetProfile) -> Result<Item> {
    let id = href_stem(cog_href);
    let tokens = profile.file_naming.tokens( id, profile.min_filename_tokens())?;
    let title = profile.file_naming.title(&tokens);
    let datetime = acquisition_datetime( descriptor, profile, &tokens, id)?;

    check_crs( descriptor, profile, cog_href);
    let wkt2 = profile.crs_wkt2()?;

    let projection = Projection {
        epsg: Some(profile.epsg),
        wkt2: Some(wkt2),
        bbox: Some(descriptor.bbox),
        transform: Some(descriptor.transform),
        shape: Some(descriptor.shape),
    };

    let mut item = Item::new( id, descriptor.geometry.clone(), descriptor.bbox, datetime);
    item.properties.providers = profile.providers.clone();
    item.properties.license = Some(profile.license.clone());
    item.properties.projection = projection.clone();

    let mut asset = Asset::new(cog_href);
    asset.media_type = Some(media_type::COG.to_string());
    asset.title = Some(title);
    asset.roles = vec![ role::DATA.to_string() ];
    asset.file_size = descriptor.file_size;
    asset.raster_bands = Some( vec![ raster_band(profile, descriptor.sampling) ]);
    asset.projection = projection;
    item.add_asset( DATA_ASSET, asset);

    item.add_extension(PROJECTION_SCHEMA);
    item.add_extension(RASTER_SCHEMA);
    item.add_extension(FILE_SCHEMA);

    Ok(item)
}

/// extract the descriptor of the raster at `cog_href` and create the item for it
pub fn create_item_from_href (cog_href: &str, read_href_modifier: Option<ReadHrefModifier>, profile: &DatasetProfile) -> Result<Item> {
    let descriptor = extract_geospatial_descriptor( cog_href, read_href_modifier, &profile.date_rule)?;
    create_item( cog_href, &descriptor, profile)
}

fn acquisition_datetime (descriptor: &GeospatialDescriptor, profile: &DatasetProfile, tokens: &[&str], id: &str) -> Result<DateTime<Utc>> {
    match &profile.date_rule {
        DateRule::YearTag => {
            let year = descriptor.acquisition_year.ok_or_else(|| OdinStacError::MissingAcquisitionYear(id.to_string()))?;
            year_start_utc(year).ok_or_else(|| OdinStacError::InvalidAcquisitionYear(year.to_string()))
        }
        DateRule::Fixed(datetime) => Ok(*datetime),
        DateRule::FilenameToken(idx) => {
            tokens.get(*idx)
                .and_then(|token| token.parse::<i32>().ok())
                .and_then(year_start_utc)
                .ok_or_else(|| OdinStacError::UnexpectedFileNamingConvention {
                    filename: id.to_string(),
                    expected: format!("a year as token {}", idx),
                    found: tokens.len()
                })
        }
    }
}

/// records always describe the profile CRS, rasters in other systems are not reprojected
fn check_crs (descriptor: &GeospatialDescriptor, profile: &DatasetProfile, cog_href: &str) {
    if let Some(epsg) = descriptor.epsg {
        if epsg != profile.epsg {
            warn!("{} has EPSG:{} but profile {} uses EPSG:{}", cog_href, epsg, profile.id, profile.epsg);
        }
    }
}
