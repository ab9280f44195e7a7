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

use serde_json::json;
use crate::profile::DatasetProfile;
use crate::stac::*;

/// the asset key of the COG in items and item-assets definitions
pub const DATA_ASSET: &str = "data";
pub const THUMBNAIL_ASSET: &str = "thumbnail";

/// create the STAC collection for a dataset profile. This only depends on the profile
pub fn create_collection (profile: &DatasetProfile) -> Collection {
    let extent = Extent {
        spatial: SpatialExtent { bbox: vec![ profile.spatial_extent ] },
        temporal: TemporalExtent { interval: vec![ profile.temporal_extent ] },
    };

    let mut collection = Collection::new( &profile.id, &profile.description, &profile.license, extent);
    collection.title = Some(profile.title.clone());
    collection.providers = profile.providers.clone();

    collection.links.push(
        Link::new( rel::LICENSE, &profile.license_link.href).with_title( &profile.license_link.title)
    );

    if let Some(thumbnail) = &profile.thumbnail {
        let mut asset = Asset::new( &thumbnail.href);
        asset.media_type = Some(media_type::JPEG.to_string());
        asset.roles = vec![ role::THUMBNAIL.to_string() ];
        asset.title = Some(thumbnail.title.clone());
        collection.assets.insert( THUMBNAIL_ASSET.to_string(), asset);
    }

    collection.add_extension(PROJECTION_SCHEMA);
    collection.summaries.insert( "proj:epsg".to_string(), json!([profile.epsg]));

    collection.add_extension(ITEM_ASSETS_SCHEMA);
    collection.item_assets.insert( DATA_ASSET.to_string(), data_asset_definition(profile));

    collection
}

/// what each item of this collection has as its data asset. The sampling of item bands is
/// taken from the raster, the definition uses the default (area)
pub fn data_asset_definition (profile: &DatasetProfile) -> AssetDefinition {
    AssetDefinition {
        media_type: Some(media_type::COG.to_string()),
        title: None,
        roles: vec![ role::DATA.to_string() ],
        raster_bands: Some( vec![ raster_band(profile, Sampling::Area) ]),
        projection: Projection { epsg: Some(profile.epsg), ..Projection::default() },
    }
}

pub(crate) fn raster_band (profile: &DatasetProfile, sampling: Sampling) -> RasterBand {
    RasterBand {
        nodata: Some(profile.nodata),
        sampling: Some(sampling),
        data_type: Some(profile.data_type),
        spatial_resolution: Some(profile.spatial_resolution),
        unit: profile.band_unit.clone(),
    }
}
