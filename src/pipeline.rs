//! The eye → clip → NDC → window pipeline.

use crate::matrix::{Matrix, Vector4};

/// A clip-space point with `w == 0`, which has no NDC position.
#[derive(Debug, thiserror::Error)]
#[error("cannot divide clip coordinates {0} by w = 0")]
pub struct DegenerateClip(pub Vector4);

/// Multiplies `matrices` left to right; an empty sequence is the identity.
pub fn compose<'a, I: IntoIterator<Item = &'a Matrix>>(matrices: I) -> Matrix {
    matrices
        .into_iter()
        .fold(Matrix::identity(), |acc, matrix| acc * *matrix)
}

/// Takes a point to clip coordinates, i.e., `transform · point`.
pub fn get_clip(transform: &Matrix, point: &Vector4) -> Vector4 {
    *transform * *point
}

/// The perspective divide: `(x/w, y/w, z/w, 1)`.
pub fn clip_to_ndc(clip: &Vector4) -> Result<Vector4, DegenerateClip> {
    if clip.w == 0. {
        return Err(DegenerateClip(*clip));
    }
    Ok(Vector4 {
        x: clip.x / clip.w,
        y: clip.y / clip.w,
        z: clip.z / clip.w,
        w: 1.,
    })
}

/// Takes an eye point all the way to NDC through `transform`.
pub fn eye_to_ndc(transform: &Matrix, eye: &Vector4) -> Result<Vector4, DegenerateClip> {
    clip_to_ndc(&get_clip(transform, eye))
}
