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

use std::process::{Command, ExitStatus};
use tracing::debug;
use crate::errors::Result;

pub const GDAL_TRANSLATE: &str = "gdal_translate";

/// builder to run the external `gdal_translate` executable.
/// We go through the executable instead of GDALTranslate() so that callers get the complete tool output
/// (including driver warnings) and can point to a different GDAL installation at runtime.
///
/// currently supported options
///  -of <format>          : output format
///  -co <NAME=VALUE>      : creation option (can be repeated)
///  -mo <META-TAG=VALUE>  : metadata item set on the output dataset (can be repeated)
#[derive(Debug,Clone)]
pub struct GdalTranslate {
    exe: String,
    output_format: Option<String>,
    create_options: Vec<String>,
    metadata_items: Vec<String>,
    src: String,
    tgt: String,
}

impl GdalTranslate {
    pub fn new (src: &str, tgt: &str) -> GdalTranslate {
        GdalTranslate {
            exe: GDAL_TRANSLATE.to_string(),
            output_format: None,
            create_options: Vec::new(),
            metadata_items: Vec::new(),
            src: src.to_string(),
            tgt: tgt.to_string(),
        }
    }

    pub fn set_executable (&mut self, exe: &str) -> &mut GdalTranslate {
        self.exe = exe.to_string();
        self
    }

    pub fn set_output_format (&mut self, format: &str) -> &mut GdalTranslate {
        self.output_format = Some(format.to_string());
        self
    }

    pub fn add_create_option (&mut self, name: &str, value: &str) -> &mut GdalTranslate {
        self.create_options.push( format!("{}={}", name, value));
        self
    }

    pub fn add_metadata_item (&mut self, key: &str, value: &str) -> &mut GdalTranslate {
        self.metadata_items.push( format!("{}={}", key, value));
        self
    }

    pub fn executable (&self) -> &str { self.exe.as_str() }

    /// the command line arguments in the order they are passed to the executable
    pub fn args (&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(format) = &self.output_format {
            args.push("-of".to_string());
            args.push(format.clone());
        }
        for co in &self.create_options {
            args.push("-co".to_string());
            args.push(co.clone());
        }
        for mo in &self.metadata_items {
            args.push("-mo".to_string());
            args.push(mo.clone());
        }
        args.push(self.src.clone());
        args.push(self.tgt.clone());

        args
    }

    /// run the executable and wait for it to terminate. Note that a non-zero exit status is not an error
    /// at this level - callers have to check `ToolOutput::success()`. Only spawn failures are reported as errors
    pub fn exec (&self) -> Result<ToolOutput> {
        let args = self.args();
        debug!("running {} {}", self.exe, args.join(" "));

        let output = Command::new(&self.exe).args(&args).output()?;

        Ok( ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// captured result of an external tool run
#[derive(Debug,Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success (&self) -> bool { self.status.success() }

    /// None if the process was terminated by a signal
    pub fn exit_code (&self) -> Option<i32> { self.status.code() }

    /// stdout followed by stderr
    pub fn combined (&self) -> String {
        let mut s = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !s.is_empty() && !s.ends_with('\n') { s.push('\n') }
            s.push_str(&self.stderr);
        }
        s
    }
}
