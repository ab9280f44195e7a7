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

//! the subset of the STAC data model (collections, items and the projection, raster, file and item-assets
//! extensions) we populate. This is not a general STAC implementation - there is no validation and no
//! catalog hierarchy support, just serde mappings of the JSON objects we produce

use std::collections::BTreeMap;
use std::path::Path;
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize, de::DeserializeOwned};
use odin_common::datetime::ser_short_rfc3339;
use odin_common::fs::set_filepath_contents;
use crate::errors::Result;

pub const STAC_VERSION: &str = "1.0.0";

pub const PROJECTION_SCHEMA: &str = "https://stac-extensions.github.io/projection/v1.1.0/schema.json";
pub const RASTER_SCHEMA: &str = "https://stac-extensions.github.io/raster/v1.1.0/schema.json";
pub const FILE_SCHEMA: &str = "https://stac-extensions.github.io/file/v2.1.0/schema.json";
pub const ITEM_ASSETS_SCHEMA: &str = "https://stac-extensions.github.io/item-assets/v1.0.0/schema.json";

pub mod media_type {
    pub const COG: &str = "image/tiff; application=geotiff; profile=cloud-optimized";
    pub const JPEG: &str = "image/jpeg";
    pub const JSON: &str = "application/json";
}

pub mod rel {
    pub const SELF: &str = "self";
    pub const ROOT: &str = "root";
    pub const LICENSE: &str = "license";
}

pub mod role {
    pub const DATA: &str = "data";
    pub const THUMBNAIL: &str = "thumbnail";
}

/// common functions of the records we create
pub trait CatalogRecord: Serialize + DeserializeOwned {
    fn to_json_string (&self) -> Result<String> {
        Ok( serde_json::to_string_pretty(self)? )
    }

    fn from_json_str (s: &str) -> Result<Self> {
        Ok( serde_json::from_str(s)? )
    }

    /// write pretty printed JSON to the given path, creating parent dirs if required
    fn write_to (&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json_string()?;
        set_filepath_contents(path.as_ref(), json.as_bytes())?;
        Ok(())
    }

    fn read_from (path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Link {
    pub rel: String,
    pub href: String,

    #[serde(rename="type", default, skip_serializing_if="Option::is_none")]
    pub media_type: Option<String>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new (rel: &str, href: &str) -> Link {
        Link { rel: rel.to_string(), href: href.to_string(), media_type: None, title: None }
    }

    pub fn with_title (mut self, title: &str) -> Link {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_media_type (mut self, media_type: &str) -> Link {
        self.media_type = Some(media_type.to_string());
        self
    }
}

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum ProviderRole { Licensor, Producer, Processor, Host }

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Provider {
    pub name: String,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub roles: Vec<ProviderRole>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub url: Option<String>,
}

//--- raster extension

/// pixel sampling convention (GDAL AREA_OR_POINT)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum Sampling { Area, Point }

#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq,Eq)]
#[serde(rename_all="lowercase")]
pub enum DataType {
    Int8, Int16, Int32, Int64,
    UInt8, UInt16, UInt32, UInt64,
    Float16, Float32, Float64,
    CInt16, CInt32, CFloat32, CFloat64,
    Other
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct RasterBand {
    #[serde(default, skip_serializing_if="Option::is_none")]
    pub nodata: Option<f64>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub sampling: Option<Sampling>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub data_type: Option<DataType>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub spatial_resolution: Option<f64>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub unit: Option<String>,
}

//--- projection extension (flattened into item properties, assets and asset definitions)

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq,Default)]
pub struct Projection {
    #[serde(rename="proj:epsg", default, skip_serializing_if="Option::is_none")]
    pub epsg: Option<u32>,

    #[serde(rename="proj:wkt2", default, skip_serializing_if="Option::is_none")]
    pub wkt2: Option<String>,

    #[serde(rename="proj:bbox", default, skip_serializing_if="Option::is_none")]
    pub bbox: Option<[f64;4]>,

    #[serde(rename="proj:transform", default, skip_serializing_if="Option::is_none")]
    pub transform: Option<[f64;6]>,

    #[serde(rename="proj:shape", default, skip_serializing_if="Option::is_none")]
    pub shape: Option<[usize;2]>,
}

//--- assets

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Asset {
    pub href: String,

    #[serde(rename="type", default, skip_serializing_if="Option::is_none")]
    pub media_type: Option<String>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(flatten)]
    pub projection: Projection,

    #[serde(rename="raster:bands", default, skip_serializing_if="Option::is_none")]
    pub raster_bands: Option<Vec<RasterBand>>,

    #[serde(rename="file:size", default, skip_serializing_if="Option::is_none")]
    pub file_size: Option<u64>,
}

impl Asset {
    pub fn new (href: &str) -> Asset {
        Asset {
            href: href.to_string(),
            media_type: None,
            title: None,
            description: None,
            roles: Vec::new(),
            projection: Projection::default(),
            raster_bands: None,
            file_size: None,
        }
    }
}

/// item-assets extension definition - an asset without href that describes what collection items provide
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct AssetDefinition {
    #[serde(rename="type", default, skip_serializing_if="Option::is_none")]
    pub media_type: Option<String>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(rename="raster:bands", default, skip_serializing_if="Option::is_none")]
    pub raster_bands: Option<Vec<RasterBand>>,

    #[serde(flatten)]
    pub projection: Projection,
}

//--- collection

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct SpatialExtent {
    pub bbox: Vec<[f64;4]>,
}

/// intervals with open ends represented as None
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct TemporalExtent {
    pub interval: Vec<[Option<DateTime<Utc>>;2]>,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Collection {
    #[serde(rename="type")]
    pub record_type: String,

    pub stac_version: String,

    #[serde(default)]
    pub stac_extensions: Vec<String>,

    pub id: String,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub title: Option<String>,

    pub description: String,
    pub license: String,

    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub providers: Vec<Provider>,

    pub extent: Extent,

    #[serde(default, skip_serializing_if="BTreeMap::is_empty")]
    pub summaries: BTreeMap<String,serde_json::Value>,

    pub links: Vec<Link>,

    #[serde(default, skip_serializing_if="BTreeMap::is_empty")]
    pub assets: BTreeMap<String,Asset>,

    #[serde(default, skip_serializing_if="BTreeMap::is_empty")]
    pub item_assets: BTreeMap<String,AssetDefinition>,
}

impl Collection {
    pub fn new (id: &str, description: &str, license: &str, extent: Extent) -> Collection {
        Collection {
            record_type: "Collection".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.to_string(),
            title: None,
            description: description.to_string(),
            license: license.to_string(),
            providers: Vec::new(),
            extent,
            summaries: BTreeMap::new(),
            links: Vec::new(),
            assets: BTreeMap::new(),
            item_assets: BTreeMap::new(),
        }
    }

    /// set the self link, and since we don't manage a catalog hierarchy also make the collection its own root
    pub fn set_self_href (&mut self, href: &str) {
        self.links.retain(|l| l.rel != rel::SELF && l.rel != rel::ROOT);
        self.links.push( Link::new(rel::ROOT, href).with_media_type(media_type::JSON));
        self.links.push( Link::new(rel::SELF, href).with_media_type(media_type::JSON));
    }

    pub fn add_extension (&mut self, schema: &str) {
        add_extension(&mut self.stac_extensions, schema)
    }
}

impl CatalogRecord for Collection {}

//--- item

/// GeoJSON geometry. We only produce bounding box polygons
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
#[serde(tag="type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64;2]>> }
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ItemProperties {
    #[serde(serialize_with="ser_short_rfc3339")]
    pub datetime: DateTime<Utc>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if="Vec::is_empty")]
    pub providers: Vec<Provider>,

    #[serde(default, skip_serializing_if="Option::is_none")]
    pub license: Option<String>,

    #[serde(flatten)]
    pub projection: Projection,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Item {
    #[serde(rename="type")]
    pub record_type: String,

    pub stac_version: String,

    #[serde(default)]
    pub stac_extensions: Vec<String>,

    pub id: String,
    pub geometry: Geometry,
    pub bbox: [f64;4],
    pub properties: ItemProperties,

    #[serde(default)]
    pub links: Vec<Link>,

    pub assets: BTreeMap<String,Asset>,
}

impl Item {
    pub fn new (id: &str, geometry: Geometry, bbox: [f64;4], datetime: DateTime<Utc>) -> Item {
        Item {
            record_type: "Feature".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.to_string(),
            geometry,
            bbox,
            properties: ItemProperties {
                datetime,
                title: None,
                providers: Vec::new(),
                license: None,
                projection: Projection::default()
            },
            links: Vec::new(),
            assets: BTreeMap::new(),
        }
    }

    pub fn add_asset (&mut self, key: &str, asset: Asset) {
        self.assets.insert( key.to_string(), asset);
    }

    pub fn add_extension (&mut self, schema: &str) {
        add_extension(&mut self.stac_extensions, schema)
    }
}

impl CatalogRecord for Item {}

fn add_extension (extensions: &mut Vec<String>, schema: &str) {
    if !extensions.iter().any(|s| s == schema) {
        extensions.push(schema.to_string());
    }
}
