use crate::matrix::Matrix;

// https://www.cs.cornell.edu/courses/cs4620/2010fa/lectures/03transforms3d.pdf

/// `diag(x, y, z, w)`.
pub fn scale(x: f64, y: f64, z: f64, w: f64) -> Matrix {
    Matrix::from([
        [x, 0., 0., 0.],
        [0., y, 0., 0.],
        [0., 0., z, 0.],
        [0., 0., 0., w],
    ])
}

/// Scales x, y & z by `by`, leaving `w` alone.
pub fn uniform_scale(by: f64) -> Matrix {
    scale(by, by, by, 1.)
}
