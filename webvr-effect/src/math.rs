//! Matrix helpers over `euclid` for the column-major `[f32; 16]` layout
//! devices report.
//!
//! A device matrix `M` stored column-major has the same element order as
//! euclid's row-major storage of `Mᵀ`, so arrays go in and out of
//! `Transform3D` unchanged. Products are written in column-vector notation:
//! `multiply(a, b)` is `a × b`, which applies `b` first.

use euclid::default::{Rotation3D, Transform3D, Vector3D};

pub type Matrix4 = Transform3D<f32>;
pub type Quaternion = Rotation3D<f32>;
pub type Vector3 = Vector3D<f32>;

pub fn from_array(array: &[f32; 16]) -> Matrix4 {
    Transform3D::from_array(*array)
}

pub fn to_array(matrix: &Matrix4) -> [f32; 16] {
    matrix.to_array()
}

/// `a × b` in column-vector notation.
pub fn multiply(a: &Matrix4, b: &Matrix4) -> Matrix4 {
    b.then(a)
}

pub fn invert(matrix: &Matrix4) -> Option<Matrix4> {
    matrix.inverse()
}

/// Quaternion from an `[x, y, z, w]` array.
pub fn quaternion_from_array(q: &[f32; 4]) -> Quaternion {
    Rotation3D::quaternion(q[0], q[1], q[2], q[3])
}

pub fn rotation_matrix(q: &Quaternion) -> Matrix4 {
    compose(&Vector3::zero(), q, &Vector3::new(1.0, 1.0, 1.0))
}

/// Builds the matrix that scales, then rotates, then translates.
pub fn compose(position: &Vector3, q: &Quaternion, scale: &Vector3) -> Matrix4 {
    let (x, y, z, w) = (q.i, q.j, q.k, q.r);
    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, xy, xz) = (x * x2, x * y2, x * z2);
    let (yy, yz, zz) = (y * y2, y * z2, z * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    #[rustfmt::skip]
    let m = [
        (1.0 - (yy + zz)) * scale.x, (xy + wz) * scale.x,         (xz - wy) * scale.x,         0.0,
        (xy - wz) * scale.y,         (1.0 - (xx + zz)) * scale.y, (yz + wx) * scale.y,         0.0,
        (xz + wy) * scale.z,         (yz - wx) * scale.z,         (1.0 - (xx + yy)) * scale.z, 0.0,
        position.x,                  position.y,                  position.z,                  1.0,
    ];
    Transform3D::from_array(m)
}

/// Splits an affine matrix into translation, rotation and scale.
/// A negative determinant is attributed to the X scale.
pub fn decompose(matrix: &Matrix4) -> (Vector3, Quaternion, Vector3) {
    let m = matrix.to_array();

    let mut sx = Vector3::new(m[0], m[1], m[2]).length();
    let sy = Vector3::new(m[4], m[5], m[6]).length();
    let sz = Vector3::new(m[8], m[9], m[10]).length();
    if matrix.determinant() < 0.0 {
        sx = -sx;
    }

    let position = Vector3::new(m[12], m[13], m[14]);

    let inv = |s: f32| if s == 0.0 { 0.0 } else { 1.0 / s };
    let (ix, iy, iz) = (inv(sx), inv(sy), inv(sz));
    let rotation = [
        m[0] * ix, m[1] * ix, m[2] * ix,
        m[4] * iy, m[5] * iy, m[6] * iy,
        m[8] * iz, m[9] * iz, m[10] * iz,
    ];

    (position, rotation_to_quaternion(&rotation), Vector3::new(sx, sy, sz))
}

// Column-major 3x3 rotation to quaternion, branching on the largest diagonal
// term to keep the square root away from zero.
fn rotation_to_quaternion(r: &[f32; 9]) -> Quaternion {
    let (m11, m21, m31) = (r[0], r[1], r[2]);
    let (m12, m22, m32) = (r[3], r[4], r[5]);
    let (m13, m23, m33) = (r[6], r[7], r[8]);
    let trace = m11 + m22 + m33;

    if trace > 0.0 {
        let s = 0.5 / (trace + 1.0).sqrt();
        Rotation3D::quaternion((m32 - m23) * s, (m13 - m31) * s, (m21 - m12) * s, 0.25 / s)
    } else if m11 > m22 && m11 > m33 {
        let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
        Rotation3D::quaternion(0.25 * s, (m12 + m21) / s, (m13 + m31) / s, (m32 - m23) / s)
    } else if m22 > m33 {
        let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
        Rotation3D::quaternion((m12 + m21) / s, 0.25 * s, (m23 + m32) / s, (m13 - m31) / s)
    } else {
        let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
        Rotation3D::quaternion((m13 + m31) / s, (m23 + m32) / s, 0.25 * s, (m21 - m12) / s)
    }
}

/// Rotates `v` by the unit quaternion `q`.
pub fn rotate_vector(q: &Quaternion, v: &Vector3) -> Vector3 {
    let u = Vector3::new(q.i, q.j, q.k);
    let t = u.cross(*v) * 2.0;
    *v + t * q.r + u.cross(t)
}
