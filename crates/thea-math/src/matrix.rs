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

//! Defines the `Mat3` and `Mat4` types and associated operations.
//!
//! Both matrices are column-major. `Mat4` is the transform engine of the
//! crate: it carries the projection and view builders (OpenGL clip-space
//! convention, x/y/z in `[-1, 1]` after the perspective divide) as well as
//! determinant/inverse via cofactor expansion.

use crate::error::MathError;
use crate::{Quaternion, Vec3, Vec4, DEG_TO_RAD, EPSILON, PI};
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// Determinant of the 3x3 matrix whose columns are `a`, `b`, `c`.
#[inline]
fn det3(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    a.x * (b.y * c.z - c.y * b.z) - b.x * (a.y * c.z - c.y * a.z) + c.x * (a.y * b.z - b.y * a.z)
}

/// The `[y, z, w]` components of a column, as a `Vec3`.
#[inline]
fn yzw(v: Vec4) -> Vec3 {
    Vec3::new(v.y, v.z, v.w)
}

/// The basis axis along the smallest-magnitude component of `v`.
///
/// Used as the tie-break when a rotation axis must be picked perpendicular
/// to `v` and the cross product gives none.
#[inline]
fn least_aligned_axis(v: Vec3) -> Vec3 {
    let ax = v.x.abs();
    let ay = v.y.abs();
    let az = v.z.abs();
    if ax <= ay && ax <= az {
        Vec3::X
    } else if ay <= az {
        Vec3::Y
    } else {
        Vec3::Z
    }
}

// --- Mat3 ---

/// A 3x3 column-major matrix, used for rotations and normal transforms.
///
/// While it can represent any 3x3 matrix, its primary role is as the
/// upper-left rotation block of a [`Mat4`], extracted via [`Mat3::from_mat4`]
/// or [`Mat4::inverse_mat3`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec3::ZERO; 3],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a rotation matrix from a normalized axis and an angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector; the routine
    ///   does not renormalize it.
    /// * `angle_radians`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let (s, c) = angle_radians.sin_cos();
        let t = 1.0 - c;
        let x = axis.x;
        let y = axis.y;
        let z = axis.z;
        Self {
            cols: [
                Vec3::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y),
                Vec3::new(t * y * x - s * z, t * y * y + c, t * y * z + s * x),
                Vec3::new(t * z * x + s * y, t * z * y - s * x, t * z * z + c),
            ],
        }
    }

    /// Creates a rotation matrix from a quaternion using the closed-form
    /// conversion (no trigonometric calls).
    ///
    /// `q` must be unit-norm; a non-unit quaternion yields a scaled/skewed
    /// matrix rather than a rotation. The quaternion is deliberately not
    /// renormalized here.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let x = q.x;
        let y = q.y;
        let z = q.z;
        let w = q.w;
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::from_cols(
            Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }

    /// Creates a `Mat3` from the upper-left 3x3 corner of a [`Mat4`].
    /// This effectively extracts the rotation and scale components, discarding translation.
    #[inline]
    pub fn from_mat4(m4: &Mat4) -> Self {
        Self::from_cols(
            m4.cols[0].truncate(),
            m4.cols[1].truncate(),
            m4.cols[2].truncate(),
        )
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        det3(self.cols[0], self.cols[1], self.cols[2])
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vec3::new(self.cols[0].x, self.cols[1].x, self.cols[2].x),
            Vec3::new(self.cols[0].y, self.cols[1].y, self.cols[2].y),
            Vec3::new(self.cols[0].z, self.cols[1].z, self.cols[2].z),
        )
    }

    /// Computes the inverse of the matrix via the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is
    /// numerically zero. No partial result is produced on failure.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let m00 = c1.y * c2.z - c2.y * c1.z;
        let m10 = c2.y * c0.z - c0.y * c2.z;
        let m20 = c0.y * c1.z - c1.y * c0.z;
        let det = c0.x * m00 + c1.x * m10 + c2.x * m20;

        if det.abs() < EPSILON {
            return Err(MathError::SingularMatrix);
        }

        let inv_det = 1.0 / det;
        let m01 = c2.x * c1.z - c1.x * c2.z;
        let m11 = c0.x * c2.z - c2.x * c0.z;
        let m21 = c1.x * c0.z - c0.x * c1.z;
        let m02 = c1.x * c2.y - c2.x * c1.y;
        let m12 = c2.x * c0.y - c0.x * c2.y;
        let m22 = c0.x * c1.y - c1.x * c0.y;

        Ok(Self::from_cols(
            Vec3::new(m00, m10, m20) * inv_det,
            Vec3::new(m01, m11, m21) * inv_det,
            Vec3::new(m02, m12, m22) * inv_det,
        ))
    }

    /// Converts this `Mat3` into a [`Mat4`], preserving its values in the upper-left corner.
    /// The new fourth column and row are set to `(0, 0, 0, 1)`.
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(
            Vec4::from_vec3(self.cols[0], 0.0),
            Vec4::from_vec3(self.cols[1], 0.0),
            Vec4::from_vec3(self.cols[2], 0.0),
            Vec4::W,
        )
    }
}

// --- Operator Overloads ---

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    /// Transforms a `Vec3` by this matrix.
    #[inline]
    fn mul(self, v: Vec3) -> Self::Output {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

impl IndexMut<usize> for Mat3 {
    /// Allows mutably accessing a matrix column by index.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cols[index]
    }
}

impl fmt::Display for Mat3 {
    /// Formats the matrix as a listing of its columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.cols[0], self.cols[1], self.cols[2])
    }
}

// --- Mat4 ---

/// A 4x4 column-major matrix for affine and projective 3D transforms.
///
/// This is the primary type for model, view, and projection matrices. The
/// fourth column carries translation and the perspective-divide terms of a
/// homogeneous transform. The column-major memory layout is shared by every
/// routine in this crate: a matrix built by any constructor is directly
/// consumable, unmodified, by every other operation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Returns a row of the matrix as a `Vec4`.
    #[inline]
    pub fn get_row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
            w: self.cols[3].get(index),
        }
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(v.x, v.y, v.z, 1.0),
            ],
        }
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            cols: [
                Vec4::new(scale.x, 0.0, 0.0, 0.0),
                Vec4::new(0.0, scale.y, 0.0, 0.0),
                Vec4::new(0.0, 0.0, scale.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around the X-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, c, s, 0.0),
                Vec4::new(0.0, -s, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(c, 0.0, -s, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(s, 0.0, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a matrix for a rotation around the Z-axis.
    ///
    /// # Arguments
    ///
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                Vec4::new(c, s, 0.0, 0.0),
                Vec4::new(-s, c, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a rotation matrix from a normalized axis and an angle.
    ///
    /// Agrees with [`Mat3::from_axis_angle`] and the single-axis rotation
    /// constructors on direction of rotation.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. Must be a unit vector; the routine
    ///   does not renormalize it.
    /// * `angle`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let x = axis.x;
        let y = axis.y;
        let z = axis.z;

        Self {
            cols: [
                Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
                Vec4::new(t * y * x - s * z, t * y * y + c, t * y * z + s * x, 0.0),
                Vec4::new(t * z * x + s * y, t * z * y - s * x, t * z * z + c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// `q` must be unit-norm; a non-unit quaternion yields a scaled/skewed
    /// matrix rather than a rotation. The quaternion is not renormalized.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let x = q.x;
        let y = q.y;
        let z = q.z;
        let w = q.w;
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self::from_cols(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::W,
        )
    }

    /// Creates a matrix from a quaternion rotation and a translation vector.
    ///
    /// Equivalent to `Mat4::from_translation(v) * Mat4::from_quat(q)`,
    /// without the intermediate multiply.
    #[inline]
    pub fn from_rotation_translation(q: Quaternion, v: Vec3) -> Self {
        let mut m = Self::from_quat(q);
        m.cols[3] = Vec4::from_vec3(v, 1.0);
        m
    }

    /// Creates a rotation matrix that takes the direction of `source` to the
    /// direction of `target`.
    ///
    /// Both inputs are normalized internally, so only their directions
    /// matter. The degenerate configurations are handled explicitly:
    ///
    /// * `source` and `target` already parallel: returns the identity.
    /// * `source` and `target` anti-parallel: there are infinitely many
    ///   half-turn rotations; the axis is chosen perpendicular to `source`
    ///   by crossing it with the basis axis of its smallest-magnitude
    ///   component, and the rotation is pi radians about that axis.
    ///
    /// A zero-length input yields the identity matrix.
    pub fn from_rotation_between(source: Vec3, target: Vec3) -> Self {
        let s = source.normalize();
        let t = target.normalize();
        let axis = s.cross(t);

        if axis.length_squared() > EPSILON * EPSILON {
            let angle = crate::clamp(s.dot(t), -1.0, 1.0).acos();
            return Self::from_axis_angle(axis.normalize(), angle);
        }

        if s.dot(t) >= 0.0 {
            return Self::IDENTITY;
        }

        // Anti-parallel: the cross product vanishes, so pick the tie-break
        // axis and rotate half a turn.
        let perp = s.cross(least_aligned_axis(s)).normalize();
        Self::from_axis_angle(perp, PI)
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            self.get_row(0),
            self.get_row(1),
            self.get_row(2),
            self.get_row(3),
        )
    }

    /// Computes the determinant of the matrix by cofactor (Laplace)
    /// expansion along the first row.
    ///
    /// Branch-free and independent of any pivoting order, so the result is
    /// reproducible for a given input.
    pub fn determinant(&self) -> f32 {
        let c0 = self.cols[0];
        let c1 = self.cols[1];
        let c2 = self.cols[2];
        let c3 = self.cols[3];

        c0.x * det3(yzw(c1), yzw(c2), yzw(c3)) - c1.x * det3(yzw(c0), yzw(c2), yzw(c3))
            + c2.x * det3(yzw(c0), yzw(c1), yzw(c3))
            - c3.x * det3(yzw(c0), yzw(c1), yzw(c2))
    }

    /// Computes the inverse of the matrix as adjugate divided by determinant.
    ///
    /// All cofactors are derived from 2x2 sub-determinants of the original
    /// values before anything is written, so `m = m.inverse()?` is safe.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the determinant is
    /// numerically zero. No partial result is produced on failure.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let a00 = self.cols[0].x;
        let a01 = self.cols[0].y;
        let a02 = self.cols[0].z;
        let a03 = self.cols[0].w;
        let a10 = self.cols[1].x;
        let a11 = self.cols[1].y;
        let a12 = self.cols[1].z;
        let a13 = self.cols[1].w;
        let a20 = self.cols[2].x;
        let a21 = self.cols[2].y;
        let a22 = self.cols[2].z;
        let a23 = self.cols[2].w;
        let a30 = self.cols[3].x;
        let a31 = self.cols[3].y;
        let a32 = self.cols[3].z;
        let a33 = self.cols[3].w;

        // Pairwise 2x2 sub-determinants shared by the sixteen cofactors.
        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det.abs() < EPSILON {
            return Err(MathError::SingularMatrix);
        }
        let inv_det = 1.0 / det;

        Ok(Self::from_cols(
            Vec4::new(
                a11 * b11 - a12 * b10 + a13 * b09,
                a02 * b10 - a01 * b11 - a03 * b09,
                a31 * b05 - a32 * b04 + a33 * b03,
                a22 * b04 - a21 * b05 - a23 * b03,
            ) * inv_det,
            Vec4::new(
                a12 * b08 - a10 * b11 - a13 * b07,
                a00 * b11 - a02 * b08 + a03 * b07,
                a32 * b02 - a30 * b05 - a33 * b01,
                a20 * b05 - a22 * b02 + a23 * b01,
            ) * inv_det,
            Vec4::new(
                a10 * b10 - a11 * b08 + a13 * b06,
                a01 * b08 - a00 * b10 - a03 * b06,
                a30 * b04 - a31 * b02 + a33 * b00,
                a21 * b02 - a20 * b04 - a23 * b00,
            ) * inv_det,
            Vec4::new(
                a11 * b07 - a10 * b09 - a12 * b06,
                a00 * b09 - a01 * b07 + a02 * b06,
                a31 * b01 - a30 * b03 - a32 * b00,
                a20 * b03 - a21 * b01 + a22 * b00,
            ) * inv_det,
        ))
    }

    /// Returns the rotation/scale block of this matrix with the translation
    /// cleared.
    #[inline]
    pub fn rotation_part(&self) -> Self {
        Self::from_cols(
            Vec4::from_vec3(self.cols[0].truncate(), 0.0),
            Vec4::from_vec3(self.cols[1].truncate(), 0.0),
            Vec4::from_vec3(self.cols[2].truncate(), 0.0),
            Vec4::W,
        )
    }

    /// Computes the inverse of the upper-left 3x3 block as a [`Mat3`].
    ///
    /// Transposed, this is the classic normal matrix for transforming surface
    /// normals under a model matrix with non-uniform scale.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::SingularMatrix`] if the 3x3 block is not
    /// invertible.
    #[inline]
    pub fn inverse_mat3(&self) -> Result<Mat3, MathError> {
        Mat3::from_mat4(self).inverse()
    }

    /// Post-multiplies this matrix by a translation, moving the local frame.
    ///
    /// Equivalent to `*self * Mat4::from_translation(v)`.
    #[inline]
    pub fn translate(&self, v: Vec3) -> Self {
        let c3 = self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z + self.cols[3];
        Self::from_cols(self.cols[0], self.cols[1], self.cols[2], c3)
    }

    /// Post-multiplies this matrix by a non-uniform scale.
    ///
    /// Equivalent to `*self * Mat4::from_scale(s)`.
    #[inline]
    pub fn scale(&self, s: Vec3) -> Self {
        Self::from_cols(
            self.cols[0] * s.x,
            self.cols[1] * s.y,
            self.cols[2] * s.z,
            self.cols[3],
        )
    }

    /// Post-multiplies this matrix by a uniform scale.
    #[inline]
    pub fn scale_uniform(&self, s: f32) -> Self {
        self.scale(Vec3::new(s, s, s))
    }

    /// Post-multiplies this matrix by a rotation of `angle` radians around
    /// `axis` (which must be a unit vector).
    ///
    /// For rotations around a primary axis prefer [`Mat4::rotate_x`],
    /// [`Mat4::rotate_y`], or [`Mat4::rotate_z`].
    #[inline]
    pub fn rotate(&self, angle: f32, axis: Vec3) -> Self {
        *self * Self::from_axis_angle(axis, angle)
    }

    /// Post-multiplies this matrix by a rotation around the X-axis.
    #[inline]
    pub fn rotate_x(&self, angle: f32) -> Self {
        *self * Self::from_rotation_x(angle)
    }

    /// Post-multiplies this matrix by a rotation around the Y-axis.
    #[inline]
    pub fn rotate_y(&self, angle: f32) -> Self {
        *self * Self::from_rotation_y(angle)
    }

    /// Post-multiplies this matrix by a rotation around the Z-axis.
    #[inline]
    pub fn rotate_z(&self, angle: f32) -> Self {
        *self * Self::from_rotation_z(angle)
    }

    /// Transforms a point by this matrix, treating the fourth component as 1.
    ///
    /// The homogeneous `w` of the result is discarded without a perspective
    /// divide, which is exact for affine transforms. For projective
    /// transforms use `Mul<Vec4>` and divide explicitly.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(p, 1.0)).truncate()
    }

    /// Builds an asymmetric perspective frustum matrix with the given bounds
    /// (OpenGL clip-space convention, z in `[-1, 1]`).
    ///
    /// `right > left`, `top > bottom`, and `far > near > 0` are documented
    /// preconditions, not runtime checks: violating them (e.g. `near == far`)
    /// produces a degenerate matrix through division by zero, matching the
    /// unchecked-precondition contract of the rest of the crate.
    #[inline]
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_cols(
            Vec4::new(2.0 * near / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * near / tmb, 0.0, 0.0),
            Vec4::new(
                (right + left) / rml,
                (top + bottom) / tmb,
                -(far + near) / fmn,
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -(2.0 * far * near) / fmn, 0.0),
        )
    }

    /// Builds a symmetric perspective projection matrix.
    ///
    /// # Arguments
    ///
    /// * `fov_y_degrees`: Vertical field of view **in degrees** — the one
    ///   place in the crate that converts units.
    /// * `aspect`: Width divided by height of the viewport.
    /// * `near`, `far`: Positive distances to the clipping planes,
    ///   `far > near`.
    #[inline]
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let top = near * (fov_y_degrees * DEG_TO_RAD * 0.5).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Builds a parallel (orthographic) projection matrix with the given
    /// bounds (OpenGL clip-space convention, z in `[-1, 1]`).
    ///
    /// Same bound preconditions as [`Mat4::frustum`], without the
    /// perspective divide.
    #[inline]
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_cols(
            Vec4::new(2.0 / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / tmb, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / fmn, 0.0),
            Vec4::new(
                -(right + left) / rml,
                -(top + bottom) / tmb,
                -(far + near) / fmn,
                1.0,
            ),
        )
    }

    /// Builds a right-handed view matrix for a camera at `eye` looking at
    /// `center`.
    ///
    /// This is a total function: if `eye` coincides with `center`, or `up`
    /// is parallel to the view direction, the zero-vector behavior of
    /// [`Vec3::normalize`] makes the rotation block degenerate (zero rows)
    /// instead of propagating NaN. The result is well-defined but useless as
    /// a camera, and a warning is logged.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let forward = (eye - center).normalize();
        let side = up.cross(forward).normalize();
        let true_up = forward.cross(side);

        if forward == Vec3::ZERO || side == Vec3::ZERO {
            log::warn!(
                "look_at: eye coincides with center or up is parallel to the view direction; the view matrix is degenerate"
            );
        }

        Self::from_cols(
            Vec4::new(side.x, true_up.x, forward.x, 0.0),
            Vec4::new(side.y, true_up.y, forward.y, 0.0),
            Vec4::new(side.z, true_up.z, forward.z, 0.0),
            Vec4::new(-side.dot(eye), -true_up.dot(eye), -forward.dot(eye), 1.0),
        )
    }
}

// --- Operator Overloads ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`. Note that matrix multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self::from_cols(
            self * rhs.cols[0],
            self * rhs.cols[1],
            self * rhs.cols[2],
            self * rhs.cols[3],
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl fmt::Display for Mat4 {
    /// Formats the matrix as a listing of its columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.cols[0], self.cols[1], self.cols[2], self.cols[3]
        )
    }
}

// --- Tests ---
