//! Camera for ray generation.
//!
//! The view plane passes through `look_at`, perpendicular to the view
//! direction, and spans `±dist·tan(fov/2)` on both axes. Pixel centers are
//! laid out symmetrically about `look_at` with spacing
//! `2·dist·tan(fov/2) / (n + 1)`.

use glint_core::CameraDesc;
use glint_math::{DVec3, Point3, EPSILON};
use rand::Rng;
use thiserror::Error;

/// Camera configurations that cannot produce a valid view basis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("look-from and look-at are the same point")]
    CoincidentEye,

    #[error("up vector is parallel to the view direction")]
    UpParallelToView,

    #[error("field of view must be within (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("image size must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// Pinhole camera with a precomputed orthonormal basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    look_from: Point3,
    look_at: Point3,
    fov: f64, // degrees, both axes

    // Gram-Schmidt basis: right, true up, forward
    e1: DVec3,
    e2: DVec3,
    e3: DVec3,

    // Half extent of the view plane (u_max == v_max)
    half_extent: f64,
}

impl Camera {
    /// Build the camera basis.
    ///
    /// `fov` is in degrees and applies to both axes (square pixels).
    pub fn new(look_from: Point3, look_at: Point3, up: DVec3, fov: f64) -> Result<Self, CameraError> {
        if !(fov.is_finite() && fov > 0.0 && fov < 180.0) {
            return Err(CameraError::InvalidFieldOfView(fov));
        }

        let view = look_at - look_from;
        let dist = view.length();
        if !dist.is_finite() || dist < EPSILON {
            return Err(CameraError::CoincidentEye);
        }
        let e3 = view / dist;

        let right = e3.cross(up);
        if !right.is_finite() || right.length() < EPSILON {
            return Err(CameraError::UpParallelToView);
        }
        let e1 = right.normalize();
        let e2 = e1.cross(e3).normalize();

        let half_extent = dist * (fov.to_radians() / 2.0).tan();

        log::debug!(
            "Camera basis: e1={:?} e2={:?} e3={:?}, view plane half extent {:.4}",
            e1,
            e2,
            e3,
            half_extent
        );

        Ok(Self {
            look_from,
            look_at,
            fov,
            e1,
            e2,
            e3,
            half_extent,
        })
    }

    pub fn look_from(&self) -> Point3 {
        self.look_from
    }

    pub fn look_at(&self) -> Point3 {
        self.look_at
    }

    /// Field of view in degrees.
    pub fn field_of_view(&self) -> f64 {
        self.fov
    }

    /// Orthonormal basis `[e1 (right), e2 (up), e3 (forward)]`.
    pub fn basis(&self) -> [DVec3; 3] {
        [self.e1, self.e2, self.e3]
    }

    /// Distance between neighbouring pixel centers on the view plane.
    pub fn pixel_spacing(&self, width: u32, height: u32) -> (f64, f64) {
        let extent = 2.0 * self.half_extent;
        (
            extent / (width as f64 + 1.0),
            extent / (height as f64 + 1.0),
        )
    }

    /// Point on the view plane at signed pixel offsets `(i, j)` (row, column),
    /// measured in pixels from `look_at`.
    fn view_plane_point(&self, i: f64, j: f64, spacing: (f64, f64)) -> Point3 {
        let (dist_u, dist_v) = spacing;
        self.look_at + dist_u * j * self.e1 + dist_v * i * self.e2
    }

    /// Unit direction through the center of grid cell `(row, col)`.
    ///
    /// Grid rows run bottom to top: row 0 is the lowest row of the view plane.
    pub fn ray_direction(&self, row: u32, col: u32, width: u32, height: u32) -> DVec3 {
        let (i, j) = signed_offsets(row, col, width, height);
        let s = self.view_plane_point(i + 0.5, j + 0.5, self.pixel_spacing(width, height));
        (s - self.look_from).normalize()
    }

    /// Four unit directions through grid cell `(row, col)`, one uniformly
    /// random point inside each quadrant of the cell.
    pub fn jittered_directions<R: Rng + ?Sized>(
        &self,
        row: u32,
        col: u32,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> [DVec3; 4] {
        let (i, j) = signed_offsets(row, col, width, height);
        let spacing = self.pixel_spacing(width, height);

        // Quadrant origins within the unit cell, as (row, column) offsets
        let quadrants = [(0.5, 0.0), (0.5, 0.5), (0.0, 0.0), (0.0, 0.5)];

        quadrants.map(|(qi, qj)| {
            let di = qi + rng.gen_range(0.0..0.5);
            let dj = qj + rng.gen_range(0.0..0.5);
            let s = self.view_plane_point(i + di, j + dj, spacing);
            (s - self.look_from).normalize()
        })
    }

    /// Generate one direction per pixel.
    pub fn generate_rays(&self, width: u32, height: u32) -> Result<RayGrid, CameraError> {
        if width == 0 || height == 0 {
            return Err(CameraError::EmptyImage { width, height });
        }

        let mut directions = Vec::with_capacity((width * height) as usize);
        for row in 0..height {
            for col in 0..width {
                directions.push(self.ray_direction(row, col, width, height));
            }
        }

        Ok(RayGrid {
            width,
            height,
            directions,
        })
    }
}

impl TryFrom<&CameraDesc> for Camera {
    type Error = CameraError;

    fn try_from(desc: &CameraDesc) -> Result<Self, Self::Error> {
        Camera::new(desc.look_from, desc.look_at, desc.up, desc.field_of_view)
    }
}

/// Signed pixel offsets from the view-plane center.
///
/// For even sizes the offsets run over `-n/2 .. n/2`; odd sizes extend one
/// past the midpoint.
fn signed_offsets(row: u32, col: u32, width: u32, height: u32) -> (f64, f64) {
    let i = row as i64 - (height / 2) as i64;
    let j = col as i64 - (width / 2) as i64;
    (i as f64, j as f64)
}

/// Per-pixel unit ray directions, row-major with rows running bottom to top.
#[derive(Debug, Clone)]
pub struct RayGrid {
    pub width: u32,
    pub height: u32,
    directions: Vec<DVec3>,
}

impl RayGrid {
    /// Direction for grid cell `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> DVec3 {
        self.directions[(row * self.width + col) as usize]
    }

    /// Iterate rows bottom to top, each a slice of `width` directions.
    pub fn rows(&self) -> impl Iterator<Item = &[DVec3]> {
        self.directions.chunks(self.width as usize)
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}
