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

use std::collections::BTreeMap;
use tracing::{info,warn};
use odin_gdal::RasterInfo;
use odin_gdal::vsi::{file_size, to_gdal_path};
use crate::profile::DateRule;
use crate::stac::{Geometry, Sampling};
use crate::errors::{Result, OdinStacError};

pub const AREA_OR_POINT: &str = "AREA_OR_POINT";
pub const YEAR: &str = "YEAR";

/// function to map the (logical) href of a raster into an href we can read from, e.g. to sign URLs
pub type ReadHrefModifier<'a> = &'a dyn Fn(&str) -> String;

/// what we extract from a raster file to build an item
#[derive(Debug,Clone,PartialEq)]
pub struct GeospatialDescriptor {
    /// [west,south,east,north] in the native CRS of the raster
    pub bbox: [f64;4],
    pub geometry: Geometry,
    /// affine coefficients (a,b,c,d,e,f)
    pub transform: [f64;6],
    /// (rows, cols)
    pub shape: [usize;2],
    pub tags: BTreeMap<String,String>,
    pub sampling: Sampling,
    pub acquisition_year: Option<i32>,
    pub epsg: Option<u32>,
    pub wkt2: Option<String>,
    pub file_size: Option<u64>,
}

/// open the raster at `href` (or the href returned by `read_href_modifier`), extract the descriptor and close it
pub fn extract_geospatial_descriptor (href: &str, read_href_modifier: Option<ReadHrefModifier>, date_rule: &DateRule) -> Result<GeospatialDescriptor> {
    let access_href = match read_href_modifier {
        Some(modify) => modify(href),
        None => href.to_string()
    };
    let path = to_gdal_path(&access_href);

    let info = RasterInfo::open(&path).map_err(|e| OdinStacError::RasterOpenFailed { href: access_href.clone(), reason: e.to_string() })?;
    let size = file_size(&path);

    describe_raster( &info, size, date_rule, href)
}

/// the part of the extraction that does not require I/O
pub fn describe_raster (info: &RasterInfo, file_size: Option<u64>, date_rule: &DateRule, href: &str) -> Result<GeospatialDescriptor> {
    let sampling = sampling_from_tags(&info.metadata)?;

    let acquisition_year = match date_rule {
        DateRule::YearTag => Some( year_from_tags(&info.metadata)?.ok_or_else(|| OdinStacError::MissingAcquisitionYear(href.to_string()))? ),
        _ => match year_from_tags(&info.metadata) {
            Ok(year) => year,
            Err(e) => { warn!("ignoring YEAR tag of {}: {}", href, e); None }
        }
    };

    let bbox = info.bounds();

    Ok( GeospatialDescriptor {
        bbox: bbox.to_minmax_array(),
        geometry: Geometry::Polygon { coordinates: vec![ bbox.to_closed_ring() ] },
        transform: info.affine(),
        shape: info.shape(),
        tags: info.metadata.clone(),
        sampling,
        acquisition_year,
        epsg: info.epsg,
        wkt2: info.wkt2.clone(),
        file_size,
    })
}

pub fn sampling_from_tags (tags: &BTreeMap<String,String>) -> Result<Sampling> {
    match tags.get(AREA_OR_POINT).map(|s| s.as_str()) {
        Some("Area") => Ok(Sampling::Area),
        Some("Point") => Ok(Sampling::Point),
        Some(other) => Err( OdinStacError::UnknownSamplingConvention(other.to_string())),
        None => {
            info!("Could not load sampling type from COG. Assuming 'Area'");
            Ok(Sampling::Area)
        }
    }
}

/// Ok(None) if there is no YEAR tag, error if there is one that is not an integer
pub fn year_from_tags (tags: &BTreeMap<String,String>) -> Result<Option<i32>> {
    match tags.get(YEAR) {
        Some(s) => s.trim().parse::<i32>()
            .map(Some)
            .map_err(|_| OdinStacError::InvalidAcquisitionYear(s.clone())),
        None => Ok(None)
    }
}
