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

use std::ffi::CString;
use libc::c_int;

const VSI_STAT_EXISTS_FLAG: c_int = 0x1;
const VSI_STAT_SIZE_FLAG: c_int = 0x8;

/// map URLs into the respective GDAL virtual file system path. Other hrefs are returned unchanged
pub fn to_gdal_path (href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        format!("/vsicurl/{}", href)
    } else if let Some(path) = href.strip_prefix("s3://") {
        format!("/vsis3/{}", path)
    } else if let Some(path) = href.strip_prefix("gs://") {
        format!("/vsigs/{}", path)
    } else if let Some(path) = href.strip_prefix("file://") {
        path.to_string()
    } else {
        href.to_string()
    }
}

/// get the size of a file in bytes. Local paths are checked through std::fs, /vsi.. paths through GDAL.
/// Returns None if the size can't be determined, which is not an error for our purposes
pub fn file_size (path: &str) -> Option<u64> {
    if path.starts_with("/vsi") {
        vsi_file_size(path)
    } else {
        std::fs::metadata(path).ok()
            .filter(|md| md.is_file())
            .map(|md| md.len())
    }
}

fn vsi_file_size (path: &str) -> Option<u64> {
    let c_path = CString::new(path).ok()?;

    unsafe {
        let mut stat: gdal_sys::VSIStatBufL = std::mem::zeroed();
        let rc = gdal_sys::VSIStatExL( c_path.as_ptr(), &mut stat, VSI_STAT_EXISTS_FLAG | VSI_STAT_SIZE_FLAG);
        if rc == 0 {
            u64::try_from(stat.st_size).ok()
        } else {
            None
        }
    }
}
