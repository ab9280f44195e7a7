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

pub mod errors;
pub mod srs;
pub mod raster_info;
pub mod translate;
pub mod vsi;

pub use raster_info::RasterInfo;
pub use translate::{GdalTranslate, ToolOutput};

use std::ffi::CStr;
use libc::c_char;
use gdal::cpl::CslStringList;
use crate::errors::Result;

/// copy a (possibly null) GDAL owned C string into a Rust String. This does not free the C string
pub fn pc_char_to_string (pc: *const c_char) -> String {
    if pc.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(pc) }.to_string_lossy().into_owned()
    }
}

/// turn a list of "KEY=VALUE" strings into a GDAL string list
pub fn to_csl_string_list (items: &[String]) -> Result<CslStringList> {
    let mut csl = CslStringList::new();
    for s in items {
        csl.add_string(s.as_str())?;
    }
    Ok(csl)
}
