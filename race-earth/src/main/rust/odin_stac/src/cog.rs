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

use tracing::{info,error};
use odin_gdal::translate::{GdalTranslate, GDAL_TRANSLATE};
use crate::errors::{Result, OdinStacError};

/// what the converter needs to create a COG. Consumed by `create_cog_with`
#[derive(Debug,Clone,PartialEq)]
pub struct ConversionRequest {
    pub input: String,
    pub output: String,
    pub year: i32,
}

impl ConversionRequest {
    pub fn new (input: &str, output: &str, year: i32) -> ConversionRequest {
        ConversionRequest { input: input.to_string(), output: output.to_string(), year }
    }

    /// the gdal_translate invocation for this request. The COG profile is fixed:
    /// 512x512 blocks, max level deflate with predictor, regenerated overviews, all CPUs
    pub fn translate (&self, exe: &str) -> GdalTranslate {
        let mut translate = GdalTranslate::new( &self.input, &self.output);
        translate
            .set_executable(exe)
            .set_output_format("COG")
            .add_create_option("NUM_THREADS", "ALL_CPUS")
            .add_create_option("BLOCKSIZE", "512")
            .add_create_option("compress", "deflate")
            .add_create_option("LEVEL", "9")
            .add_create_option("PREDICTOR", "YES")
            .add_create_option("OVERVIEWS", "IGNORE_EXISTING")
            .add_metadata_item("YEAR", &self.year.to_string());
        translate
    }
}

/// create a COG from a GeoTIFF, tagging it with the year the data was collected.
/// Returns the output path
pub fn create_cog (input: &str, year: i32, output: &str) -> Result<String> {
    create_cog_with( &ConversionRequest::new(input, output, year), GDAL_TRANSLATE)
}

/// create a COG using the given gdal_translate executable. The tool output is always logged before
/// we return, failures include it in the returned `ConversionFailed` error
pub fn create_cog_with (request: &ConversionRequest, translate_exe: &str) -> Result<String> {
    let tool_output = match request.translate(translate_exe).exec() {
        Ok(tool_output) => tool_output,
        Err(e) => {
            error!("Failed to process {}: {}", request.output, e);
            return Err( OdinStacError::ConversionFailed {
                output_href: request.output.clone(),
                status: format!("could not run {}", translate_exe),
                output: e.to_string()
            })
        }
    };

    let output = tool_output.combined();
    info!("output: {}", output);

    if tool_output.success() {
        Ok(request.output.clone())
    } else {
        error!("Failed to process {}", request.output);
        let status = match tool_output.exit_code() {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string()
        };
        Err( OdinStacError::ConversionFailed { output_href: request.output.clone(), status, output })
    }
}
