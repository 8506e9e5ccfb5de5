//! Rotational extension: orientation plus a box inertia tensor
//!
//! A body that opts in carries a [`RigidExtension`] next to its translational
//! state instead of inheriting from it. The local tensor is the diagonal box
//! tensor derived from the full extents (2 x scale per axis):
//!
//! I_xx = m/12 ((2 s_y)^2 + (2 s_z)^2), and cyclically for yy / zz
//!
//! The tensor is re-derived on every mass or scale mutation, so a stale
//! tensor state cannot exist. World-space variants conjugate by the current
//! orientation: R I R^T.

use nalgebra::{Matrix3, Rotation3};

use crate::simulation::states::NVec3;

#[derive(Debug, Clone)]
pub struct RigidExtension {
    pub orientation: Rotation3<f64>,
    inertia: Matrix3<f64>, // diagonal, local space
}

impl RigidExtension {
    pub fn new(m: f64, scale: &NVec3) -> Self {
        Self {
            orientation: Rotation3::identity(),
            inertia: box_inertia_tensor(m, scale),
        }
    }

    /// Re-derive the local tensor after a mass or scale change.
    pub fn refresh(&mut self, m: f64, scale: &NVec3) {
        self.inertia = box_inertia_tensor(m, scale);
    }

    /// Local-space inertia tensor.
    pub fn inertia(&self) -> Matrix3<f64> {
        self.inertia
    }

    /// World-space inertia: R I R^T.
    pub fn world_inertia(&self) -> Matrix3<f64> {
        let r = self.orientation.matrix();
        r * self.inertia * r.transpose()
    }

    /// World-space inverse inertia: R I^-1 R^T.
    ///
    /// The local tensor is diagonal by construction, so the inverse is taken
    /// entry-wise on the diagonal.
    pub fn world_inverse_inertia(&self) -> Matrix3<f64> {
        let r = self.orientation.matrix();
        let inv = Matrix3::from_diagonal(&self.inertia.diagonal().map(|d| 1.0 / d));
        r * inv * r.transpose()
    }
}

/// Diagonal box inertia tensor from mass and per-axis half extents.
pub fn box_inertia_tensor(m: f64, scale: &NVec3) -> Matrix3<f64> {
    let (ex, ey, ez) = (2.0 * scale.x, 2.0 * scale.y, 2.0 * scale.z);
    let c = m / 12.0;

    Matrix3::from_diagonal(&NVec3::new(
        c * (ey * ey + ez * ez),
        c * (ex * ex + ez * ez),
        c * (ex * ex + ey * ey),
    ))
}
