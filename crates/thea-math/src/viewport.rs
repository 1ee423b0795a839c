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

//! Provides the screen-space viewport rectangle and unprojection.

use crate::error::MathError;
use crate::{Mat4, Vec3, Vec4, EPSILON};

/// A screen-space rectangle, as passed to the graphics API's viewport call.
///
/// `x` and `y` are the lower-left corner in pixels (window coordinates have
/// a bottom-left origin, matching the crate's OpenGL clip-space convention),
/// `width` and `height` the extent. A zero-area viewport is a documented
/// precondition violation for [`Viewport::unproject`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// The x-coordinate of the lower-left corner, in pixels.
    pub x: f32,
    /// The y-coordinate of the lower-left corner, in pixels.
    pub y: f32,
    /// The width of the rectangle, in pixels.
    pub width: f32,
    /// The height of the rectangle, in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a new viewport rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Maps a window-space point back into object space, inverting the
    /// combined view and projection transform (the Mesa `gluUnProject`
    /// algorithm).
    ///
    /// `win.x`/`win.y` are pixel coordinates inside this viewport and
    /// `win.z` is the depth in `[0, 1]` (0 = near plane, 1 = far plane).
    ///
    /// # Errors
    ///
    /// * [`MathError::SingularMatrix`] if `proj * view` cannot be inverted —
    ///   propagated from [`Mat4::inverse`], never silently replaced with an
    ///   identity-derived point.
    /// * [`MathError::DegenerateProjection`] if the unprojected point's
    ///   homogeneous `w` is numerically zero, which would make the
    ///   perspective divide meaningless. This failure is distinct from
    ///   singularity: the transform is invertible but this particular depth
    ///   maps onto the plane at infinity.
    pub fn unproject(&self, win: Vec3, view: &Mat4, proj: &Mat4) -> Result<Vec3, MathError> {
        let inverse = match (*proj * *view).inverse() {
            Ok(m) => m,
            Err(err) => {
                log::debug!("unproject: combined view-projection matrix is singular");
                return Err(err);
            }
        };

        // Window coordinates to normalized device coordinates. Window space
        // is bottom-left origin like clip space, so y is not flipped.
        let ndc = Vec4::new(
            (win.x - self.x) / self.width * 2.0 - 1.0,
            (win.y - self.y) / self.height * 2.0 - 1.0,
            win.z * 2.0 - 1.0,
            1.0,
        );

        let obj = inverse * ndc;
        if obj.w.abs() < EPSILON {
            log::debug!("unproject: point maps to zero homogeneous w at depth {}", win.z);
            return Err(MathError::DegenerateProjection);
        }

        Ok(obj.truncate() / obj.w)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq_eps;

    /// Forward projection through `proj * view` into window coordinates,
    /// the inverse of what unproject computes.
    fn project(world: Vec3, view: &Mat4, proj: &Mat4, vp: &Viewport) -> Vec3 {
        let clip = *proj * *view * Vec4::from_vec3(world, 1.0);
        let ndc = clip.truncate() / clip.w;
        Vec3::new(
            (ndc.x + 1.0) / 2.0 * vp.width + vp.x,
            (ndc.y + 1.0) / 2.0 * vp.height + vp.y,
            (ndc.z + 1.0) / 2.0,
        )
    }

    fn vec3_approx_eq_eps(a: Vec3, b: Vec3, eps: f32) -> bool {
        approx_eq_eps(a.x, b.x, eps) && approx_eq_eps(a.y, b.y, eps) && approx_eq_eps(a.z, b.z, eps)
    }

    #[test]
    fn test_unproject_round_trip() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective(45.0, 800.0 / 600.0, 0.1, 100.0);
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);

        for world in [
            Vec3::new(0.5, -0.3, 1.0),
            Vec3::new(-1.0, 0.8, -2.0),
            Vec3::ZERO,
        ] {
            let win = project(world, &view, &proj, &vp);
            let back = vp
                .unproject(win, &view, &proj)
                .expect("non-degenerate unprojection");
            assert!(
                vec3_approx_eq_eps(back, world, 1e-3),
                "{back} should round-trip to {world}"
            );
        }
    }

    #[test]
    fn test_unproject_offset_viewport() {
        let view = Mat4::look_at(Vec3::new(1.0, 2.0, 4.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective(60.0, 1.0, 0.5, 50.0);
        let vp = Viewport::new(100.0, 50.0, 400.0, 300.0);

        let world = Vec3::new(0.2, 0.4, -0.6);
        let win = project(world, &view, &proj, &vp);
        let back = vp
            .unproject(win, &view, &proj)
            .expect("non-degenerate unprojection");
        assert!(vec3_approx_eq_eps(back, world, 1e-3));
    }

    #[test]
    fn test_unproject_screen_center_near_plane() {
        // With an identity view, the center of the screen at depth 0 is the
        // middle of the near plane, one near-distance down the view axis.
        let proj = Mat4::perspective(90.0, 1.0, 1.0, 100.0);
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);

        let obj = vp
            .unproject(Vec3::new(400.0, 300.0, 0.0), &Mat4::IDENTITY, &proj)
            .expect("non-degenerate unprojection");
        assert!(vec3_approx_eq_eps(obj, Vec3::new(0.0, 0.0, -1.0), 1e-4));
    }

    #[test]
    fn test_unproject_singular_matrix_fails() {
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let result = vp.unproject(Vec3::new(400.0, 300.0, 0.5), &Mat4::ZERO, &Mat4::IDENTITY);
        assert_eq!(result, Err(MathError::SingularMatrix));
    }

    #[test]
    fn test_unproject_degenerate_w_fails() {
        // For a perspective projection with near=1, far=100, the inverse
        // maps NDC depth (far+near)/(far-near) onto the plane at infinity.
        // That corresponds to window depth far/(far-near), just past 1.
        let proj = Mat4::perspective(90.0, 1.0, 1.0, 100.0);
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);

        let result = vp.unproject(
            Vec3::new(400.0, 300.0, 100.0 / 99.0),
            &Mat4::IDENTITY,
            &proj,
        );
        assert_eq!(result, Err(MathError::DegenerateProjection));
    }

    #[test]
    fn test_unproject_failures_are_distinct() {
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let proj = Mat4::perspective(90.0, 1.0, 1.0, 100.0);

        let singular = vp
            .unproject(Vec3::new(0.0, 0.0, 0.5), &Mat4::ZERO, &Mat4::IDENTITY)
            .unwrap_err();
        let degenerate = vp
            .unproject(Vec3::new(400.0, 300.0, 100.0 / 99.0), &Mat4::IDENTITY, &proj)
            .unwrap_err();
        assert_ne!(singular, degenerate);
    }
}
