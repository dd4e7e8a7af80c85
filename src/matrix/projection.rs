use crate::matrix::Matrix;

// Useful references:
//   https://www.scratchapixel.com/lessons/3d-basic-rendering/perspective-and-orthographic-projection-matrix/building-basic-perspective-projection-matrix
//   glFrustum's documentation

/// The course's projection matrix.
///
/// Maps an eye point `(x, y, z, 1)` to the clip point `(x, y, 1, -z)`. The last row is the
/// perspective term: it copies `-z` into `w`, so the divide that follows projects onto the
/// `z = -1` plane.
pub const PROJECTION: Matrix = Matrix::from_rows([
    [1., 0., 0., 0.],
    [0., 1., 0., 0.],
    [0., 0., 0., 1.],
    [0., 0., -1., 0.],
]);

#[cfg(test)]
mod tests {
    use super::PROJECTION;
    use crate::matrix::Vector4;

    #[test]
    fn test_projection_moves_depth_into_w() {
        let clip = PROJECTION * Vector4::point(2., -3., -4.);
        assert_eq!(clip, Vector4::new(2., -3., 1., 4.));
    }

    #[test]
    fn test_projection_rows() {
        assert_eq!(PROJECTION.rows()[3], [0., 0., -1., 0.]);
        assert_eq!(PROJECTION.get(2, 3), 1.);
    }
}
