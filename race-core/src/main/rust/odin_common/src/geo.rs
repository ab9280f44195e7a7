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

use num::Num;
use serde::{Serialize,Deserialize};

/// a simple axis aligned rectangle in some (unspecified) coordinate reference system.
/// Note this does not imply the CRS is geographic, for projected systems west/east are min/max x and
/// south/north are min/max y
#[repr(C)]
#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn to_minmax_array (&self) -> [T;4] {
        [self.west,self.south,self.east,self.north]
    }

    /// closed ring of the bounding box corners, counter-clockwise starting at (east,south).
    /// This is the exterior ring of the GeoJSON polygon for this box
    pub fn to_closed_ring (&self) -> Vec<[T;2]> {
        vec![
            [self.east, self.south],
            [self.east, self.north],
            [self.west, self.north],
            [self.west, self.south],
            [self.east, self.south],
        ]
    }
}

/// get the bounding box of a north-up raster from its GDAL geotransform
/// (origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height) and its size in pixels.
/// Rotation terms are included so that the box covers all four raster corners
pub fn raster_bounds (gt: &[f64;6], width: usize, height: usize) -> BoundingBox<f64> {
    let w = width as f64;
    let h = height as f64;
    let xs = [gt[0], gt[0] + w*gt[1], gt[0] + h*gt[2], gt[0] + w*gt[1] + h*gt[2]];
    let ys = [gt[3], gt[3] + w*gt[4], gt[3] + h*gt[5], gt[3] + w*gt[4] + h*gt[5]];

    BoundingBox {
        west: xs.iter().cloned().fold(f64::INFINITY, f64::min),
        south: ys.iter().cloned().fold(f64::INFINITY, f64::min),
        east: xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        north: ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    }
}

/// turn a GDAL geotransform into the coefficients (a,b,c,d,e,f) of the affine row/col -> x/y mapping
/// `x = a*col + b*row + c`, `y = d*col + e*row + f`
pub fn geo_transform_to_affine (gt: &[f64;6]) -> [f64;6] {
    [gt[1], gt[2], gt[0], gt[4], gt[5], gt[3]]
}
