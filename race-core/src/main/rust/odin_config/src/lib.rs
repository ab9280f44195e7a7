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
pub use crate::errors::{OdinConfigError,Result as ConfigResult};

use std::{path::Path, fs::File, io::{Read, Write}};
use serde::{Serialize, de::DeserializeOwned};

/// parse a RON formatted config from a string (e.g. an embedded resource)
pub fn config_from_str <C:DeserializeOwned> (contents: &str)->ConfigResult<C> {
    ron::from_str::<C>(contents).map_err(|e| OdinConfigError::ConfigParseError(format!("{}", e)))
}

pub fn load_config <C:DeserializeOwned> (pathname: impl AsRef<Path>)->ConfigResult<C> {
    let path = pathname.as_ref();
    if !path.is_file() {
        Err( OdinConfigError::ConfigFileNotFound(path.as_os_str().to_string_lossy().to_string()) )
    } else {
        let mut file = File::open(path)?;

        let len = file.metadata()?.len();
        let mut contents = String::with_capacity(len as usize);
        file.read_to_string(&mut contents)?;

        config_from_str(contents.as_str())
    }
}

/// serialize config as pretty RON and store it under the given pathname, which is returned on success
pub fn store_config <S: Serialize> (conf: &S, pathname: impl AsRef<Path>)->ConfigResult<String> {
    let pretty_config = ron::ser::PrettyConfig::default()
        .struct_names(true)
        .compact_arrays(true);

    let serialized = ron::ser::to_string_pretty(conf, pretty_config)?;

    let path = pathname.as_ref();
    let pathname = path.as_os_str().to_string_lossy().to_string();

    let mut file = File::create(path)
        .map_err(|e| OdinConfigError::ConfigWriteError(format!("{}: {}", pathname, e)))?;
    file.write_all(serialized.as_bytes())?;

    Ok(pathname)
}
