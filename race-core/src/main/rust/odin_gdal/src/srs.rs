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

use std::ptr::null_mut;
use libc::{c_char, c_void};
use gdal::spatial_ref::SpatialRef;
use crate::{pc_char_to_string, to_csl_string_list};
use crate::errors::{Result, last_gdal_error};

/// export a spatial reference system as WKT2 (2019 revision).
/// The gdal crate only exposes WKT1 export, hence we have to go through OSRExportToWktEx
pub fn to_wkt2 (srs: &SpatialRef) -> Result<String> {
    let opts = to_csl_string_list( &["FORMAT=WKT2_2019".to_string()])?;
    let mut c_wkt: *mut c_char = null_mut();

    unsafe {
        let rc = gdal_sys::OSRExportToWktEx( srs.to_c_hsrs(), &mut c_wkt, opts.as_ptr() as *const *const c_char);
        if rc != gdal_sys::OGRErr::OGRERR_NONE || c_wkt.is_null() {
            if !c_wkt.is_null() { gdal_sys::VSIFree(c_wkt as *mut c_void) }
            return Err(last_gdal_error())
        }

        let wkt = pc_char_to_string(c_wkt);
        gdal_sys::VSIFree(c_wkt as *mut c_void);
        Ok(wkt)
    }
}

pub fn epsg_to_wkt2 (epsg: u32) -> Result<String> {
    let srs = SpatialRef::from_epsg(epsg)?;
    to_wkt2(&srs)
}

/// get the EPSG code of a spatial reference, trying to identify it if it is not explicitly set
pub fn epsg_code (srs: &SpatialRef) -> Option<u32> {
    let code = match srs.auth_code() {
        Ok(code) => Some(code),
        Err(_) => {
            let mut srs = srs.clone();
            srs.auto_identify_epsg().ok().and_then(|_| srs.auth_code().ok())
        }
    };
    code.and_then(|c| u32::try_from(c).ok())
}
