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

use std::io;
use std::fs;
use io::ErrorKind::*;
use std::fs::File;
use std::path::Path;

use crate::macros::io_error;

/// the last path element of a href, which can be a local pathname, a URL or a GDAL /vsi.. path.
/// Query and fragment parts of URLs are not part of the result
pub fn href_basename (href: &str) -> &str {
    let href = href.split(|c| c == '?' || c == '#').next().unwrap_or(href);
    href.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(href)
}

/// the basename of a href without its (last) extension
pub fn href_stem (href: &str) -> &str {
    let basename = href_basename(href);
    match basename.rfind('.') {
        Some(idx) if idx > 0 => &basename[..idx],
        _ => basename
    }
}

/// turn a relative local pathname into an absolute one, based on the current working directory.
/// URLs and absolute pathnames are returned unchanged
pub fn to_absolute_href (href: &str) -> io::Result<String> {
    let path = Path::new(href);
    if href.contains("://") || path.is_absolute() {
        Ok(href.to_string())
    } else {
        Ok( std::env::current_dir()?.join(path).to_string_lossy().to_string() )
    }
}

/// check if dir pathname exists and is writable, try to create dir (and its parents) otherwise
pub fn ensure_writable_dir (path: &Path) -> io::Result<()> {
    if path.is_dir() {
        let md = fs::metadata(path)?;
        if md.permissions().readonly() {
            Err(io_error!(PermissionDenied, "dir {:?} not writable", path))
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path)
    }
}

/// make sure the parent directory of a file path exists
pub fn ensure_parent_dir (path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => ensure_writable_dir(dir),
        _ => Ok(()) // relative to cwd
    }
}

pub fn existing_non_empty_file_from_path (path: impl AsRef<Path>) -> io::Result<File> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let md = file.metadata()?;

    if !md.is_file() {
        Err(io_error!(Other, "not a file: {:?}", path))
    } else if md.len() == 0 {
        Err(io_error!(Other, "file empty: {:?}", path))
    } else {
        Ok(file)
    }
}

/// write bytes to a file, creating parent dirs if required. Existing files are overwritten
pub fn set_filepath_contents (path: &Path, new_contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, new_contents)
}
