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

use std::path::Path;
use chrono::{DateTime,Utc,TimeZone};
use serde::{Serialize,Deserialize};
use odin_config::{load_config, store_config};
use odin_gdal::srs::epsg_to_wkt2;
use crate::stac::{Provider, ProviderRole, DataType};
use crate::errors::{Result, OdinStacError};

pub const BC_DEM: &str = "bc-dem";

/// the static configuration of a dataset series - everything that goes into the catalog records
/// and is not extracted from the raster files themselves.
/// Profiles are either built in or loaded from RON files
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct DatasetProfile {
    pub id: String,
    pub title: String,
    pub description: String,
    pub license: String,
    pub license_link: LinkSpec,
    pub providers: Vec<Provider>,

    /// collection extent in WGS84 [west,south,east,north]
    pub spatial_extent: [f64;4],
    pub temporal_extent: [Option<DateTime<Utc>>;2],
    pub thumbnail: Option<LinkSpec>,

    pub epsg: u32,
    pub spatial_resolution: f64,
    pub nodata: f64,
    pub data_type: DataType,
    pub band_unit: Option<String>,

    pub date_rule: DateRule,
    pub file_naming: FileNaming,
}

#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct LinkSpec {
    pub href: String,
    pub title: String,
}

/// where the acquisition datetime of an item comes from
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub enum DateRule {
    /// Jan 1st of the year stored in the YEAR metadata item of the raster (required)
    YearTag,
    /// a single date for all items of the dataset
    Fixed(DateTime<Utc>),
    /// Jan 1st of the year given by the filename token with this index
    FilenameToken(usize),
}

/// how item filenames are structured. Filenames (without extension) are split on `separator`.
/// If `expected_tokens` is set the number of tokens has to match exactly
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct FileNaming {
    pub separator: char,
    pub expected_tokens: Option<usize>,
    pub title_token: usize,
    pub title_prefix: String,
}

impl FileNaming {
    /// split the filename stem into tokens, checking the token count
    pub fn tokens<'a> (&self, stem: &'a str, min_tokens: usize) -> Result<Vec<&'a str>> {
        let tokens: Vec<&str> = stem.split(self.separator).collect();
        let found = tokens.len();

        if let Some(expected) = self.expected_tokens {
            if found != expected {
                return Err( naming_error(stem, expected.to_string(), found))
            }
        }

        let min_tokens = min_tokens.max(self.title_token + 1);
        if found < min_tokens {
            return Err( naming_error(stem, format!("at least {}", min_tokens), found))
        }

        Ok(tokens)
    }

    pub fn title (&self, tokens: &[&str]) -> String {
        match tokens.get(self.title_token) {
            Some(token) if !self.title_prefix.is_empty() => format!("{} {}", self.title_prefix, token),
            Some(token) => token.to_string(),
            None => self.title_prefix.clone()
        }
    }
}

fn naming_error (stem: &str, expected: String, found: usize) -> OdinStacError {
    OdinStacError::UnexpectedFileNamingConvention { filename: stem.to_string(), expected, found }
}

impl DatasetProfile {

    /// LidarBC digital elevation models (bare earth DEM derived from LiDAR), distributed as 1m
    /// resolution rasters in NAD83(CSRS) / UTM zone 10N with the collection year in the YEAR tag
    pub fn bc_dem () -> DatasetProfile {
        DatasetProfile {
            id: BC_DEM.to_string(),
            title: "LidarBC DEM".to_string(),
            description: "LidarBC's Open LiDAR Data Portal is an initiative to provide open public access to LiDAR and associated \
datasets collected by the Province of British Columbia. The data presented herein is released as Open Data under the \
Open Government Licence – British Columbia (OGL-BC).\n\
Digital Elevation Model (DEM) is a derivative product of LiDAR and a representation of the terrain bare earth surface. \
The bare earth DEM is developed by removing vegetation and structures from the LiDAR data and developed through \
interpolation of the elevation data.".to_string(),
            license: "proprietary".to_string(),
            license_link: LinkSpec {
                href: "https://www2.gov.bc.ca/gov/content/data/open-data/open-government-licence-bc".to_string(),
                title: "Open Government Licence - British Columbia".to_string(),
            },
            providers: vec![
                Provider {
                    name: "Province of British Columbia".to_string(),
                    description: None,
                    roles: vec![ ProviderRole::Host, ProviderRole::Processor, ProviderRole::Producer ],
                    url: Some("https://governmentofbc.maps.arcgis.com/apps/MapSeries/index.html?appid=d06b37979b0c4709b7fcf2a1ed458e03".to_string()),
                }
            ],
            spatial_extent: [0.0, 0.0, 0.0, 0.0], // TODO - replace with the union of all published tiles once the tile index is available
            temporal_extent: [ Utc.with_ymd_and_hms(2016,1,1, 0,0,0).single(), Utc.with_ymd_and_hms(2019,12,31, 0,0,0).single() ],
            thumbnail: Some( LinkSpec {
                href: "https://www.arcgis.com/sharing/rest/content/items/c3bf9d29cc7b44718dca370435353994/resources/ex1_dem__1625007392868.JPG".to_string(),
                title: "DEM Thumbnail".to_string(),
            }),
            epsg: 3157,
            spatial_resolution: 1.0,
            nodata: -9999.0,
            data_type: DataType::Float32,
            band_unit: Some("m".to_string()),
            date_rule: DateRule::YearTag,
            file_naming: FileNaming {
                separator: '_',
                expected_tokens: None, // tile names carry a varying number of survey tokens
                title_token: 1,
                title_prefix: "BCGS Tile".to_string(),
            },
        }
    }

    pub fn builtin (name: &str) -> Option<DatasetProfile> {
        match name {
            BC_DEM => Some(DatasetProfile::bc_dem()),
            _ => None
        }
    }

    /// get a built-in profile by name, or load the profile from a RON file with the given pathname
    pub fn select (name_or_path: &str) -> Result<DatasetProfile> {
        if let Some(profile) = DatasetProfile::builtin(name_or_path) {
            Ok(profile)
        } else if Path::new(name_or_path).is_file() {
            Ok( load_config(name_or_path)? )
        } else {
            Err( OdinStacError::UnknownProfile(name_or_path.to_string()))
        }
    }

    /// store the profile as a RON file that can be edited and passed back to `select`
    pub fn store (&self, pathname: impl AsRef<Path>) -> Result<String> {
        Ok( store_config(self, pathname)? )
    }

    /// WKT2 of the profile CRS, which is what all records of the dataset use for `proj:wkt2`
    pub fn crs_wkt2 (&self) -> Result<String> {
        Ok( epsg_to_wkt2(self.epsg)? )
    }

    /// the minimum number of filename tokens our rules need
    pub fn min_filename_tokens (&self) -> usize {
        match self.date_rule {
            DateRule::FilenameToken(idx) => idx.max(self.file_naming.title_token) + 1,
            _ => self.file_naming.title_token + 1
        }
    }
}
