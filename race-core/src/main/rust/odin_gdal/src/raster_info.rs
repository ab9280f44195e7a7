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
use std::path::Path;
use gdal::{Dataset, Metadata};
use odin_common::geo::{BoundingBox, raster_bounds, geo_transform_to_affine};
use crate::srs::{epsg_code, to_wkt2};
use crate::errors::{Result, OdinGdalError};

/// read-only snapshot of the georeferencing information of a GDAL raster dataset.
/// Sizes follow GDAL conventions (width = number of columns, height = number of rows)
#[derive(Debug,Clone,PartialEq)]
pub struct RasterInfo {
    pub geo_transform: [f64;6],
    pub width: usize,
    pub height: usize,
    pub band_count: usize,
    /// items of the default metadata domain
    pub metadata: BTreeMap<String,String>,
    pub epsg: Option<u32>,
    pub wkt2: Option<String>,
}

impl RasterInfo {
    /// open the dataset read-only, collect the info and close the dataset again
    pub fn open (path: impl AsRef<Path>) -> Result<RasterInfo> {
        let ds = Dataset::open(path.as_ref())?;
        RasterInfo::from_dataset(&ds, &path.as_ref().display().to_string())
    }

    pub fn from_dataset (ds: &Dataset, name: &str) -> Result<RasterInfo> {
        let geo_transform = ds.geo_transform().map_err(|_| OdinGdalError::NoGeoTransform(name.to_string()))?;
        let (width, height) = ds.raster_size();
        let band_count = ds.raster_count() as usize;
        let metadata = metadata_map(ds, "");

        let (epsg, wkt2) = match ds.spatial_ref() {
            Ok(srs) => (epsg_code(&srs), to_wkt2(&srs).ok()),
            Err(_) => (None, None)
        };

        Ok( RasterInfo { geo_transform, width, height, band_count, metadata, epsg, wkt2 } )
    }

    /// bounding box in the native CRS of the raster
    pub fn bounds (&self) -> BoundingBox<f64> {
        raster_bounds(&self.geo_transform, self.width, self.height)
    }

    /// affine transformation coefficients (a,b,c,d,e,f) mapping (col,row) to CRS coordinates
    pub fn affine (&self) -> [f64;6] {
        geo_transform_to_affine(&self.geo_transform)
    }

    /// raster shape as (rows, cols)
    pub fn shape (&self) -> [usize;2] {
        [self.height, self.width]
    }

    pub fn metadata_item (&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}

/// collect the "KEY=VALUE" items of a metadata domain into a map. Items without '=' are ignored
pub fn metadata_map<M: Metadata> (meta: &M, domain: &str) -> BTreeMap<String,String> {
    let mut map = BTreeMap::new();
    if let Some(items) = meta.metadata_domain(domain) {
        for item in &items {
            if let Some((k,v)) = item.split_once('=') {
                map.insert( k.to_string(), v.to_string());
            }
        }
    }
    map
}
