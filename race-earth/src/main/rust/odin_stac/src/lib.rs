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

//! tools to create Cloud Optimized GeoTIFFs and STAC records for LidarBC raster datasets

pub mod errors;
pub mod stac;
pub mod profile;
pub mod cog;
pub mod extract;
pub mod collection;
pub mod item;

pub use errors::{OdinStacError, Result};
pub use profile::{DatasetProfile, DateRule, FileNaming};
pub use cog::{create_cog, create_cog_with, ConversionRequest};
pub use extract::{extract_geospatial_descriptor, GeospatialDescriptor, ReadHrefModifier};
pub use collection::create_collection;
pub use item::{create_item, create_item_from_href};
pub use stac::CatalogRecord;
