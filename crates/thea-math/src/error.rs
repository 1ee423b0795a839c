// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the error types for operations that can fail numerically.

use std::fmt;

/// An error produced by a matrix or unprojection operation.
///
/// The two variants correspond to distinct numerical failures with distinct
/// remediations for the caller: a singular matrix means the transform itself
/// cannot be inverted, while a degenerate projection means a specific point
/// maps onto the plane at infinity under an otherwise valid transform.
///
/// These are never encoded as sentinel values (identity, zeroes, NaN);
/// operations that can fail return `Result` and leave no partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// The matrix determinant is numerically zero, so no inverse exists.
    SingularMatrix,
    /// The homogeneous `w` coordinate of an unprojected point is numerically
    /// zero, so the perspective divide is undefined.
    DegenerateProjection,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SingularMatrix => {
                write!(f, "Matrix is singular and cannot be inverted")
            }
            MathError::DegenerateProjection => {
                write!(
                    f,
                    "Unprojected point has a zero homogeneous w; perspective divide is undefined"
                )
            }
        }
    }
}

impl std::error::Error for MathError {}
