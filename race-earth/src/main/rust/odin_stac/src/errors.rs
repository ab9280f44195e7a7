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

use thiserror::Error;
use odin_config::OdinConfigError;
use odin_gdal::errors::OdinGdalError;

pub type Result<T> = std::result::Result<T, OdinStacError>;

#[derive(Error,Debug)]
pub enum OdinStacError {

    #[error("conversion to {output_href} failed ({status}):\n{output}")]
    ConversionFailed { output_href: String, status: String, output: String },

    #[error("failed to open raster {href}: {reason}")]
    RasterOpenFailed { href: String, reason: String },

    #[error("unknown sampling type {0}")]
    UnknownSamplingConvention(String),

    #[error("year of collection could not be ascertained from {0}")]
    MissingAcquisitionYear(String),

    #[error("invalid YEAR tag value {0}")]
    InvalidAcquisitionYear(String),

    #[error("unexpected file naming convention for '{filename}': expected {expected} filename tokens, found {found}")]
    UnexpectedFileNamingConvention { filename: String, expected: String, found: usize },

    #[error("unknown dataset profile {0}")]
    UnknownProfile(String),

    // pass through for IO errors
    #[error("IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError( #[from] serde_json::Error),

    // pass through for profile config errors
    #[error("config error: {0}")]
    ConfigError( #[from] OdinConfigError),

    // pass through for OdinGdalErrors
    #[error("ODIN gdal error {0}")]
    OdinGdalError( #[from] OdinGdalError),
}
