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

/// create an io::Error of given kind with a formatted message. The caller has to have `std::io` in scope
#[macro_export]
macro_rules! io_error {
    ( $kind:expr, $fmt:literal $(, $arg:expr)* ) =>
    {
        io::Error::new( $kind, format!($fmt $(,$arg)*))
    }
}
pub use io_error;
