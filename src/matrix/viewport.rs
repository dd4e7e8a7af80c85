use super::{Matrix, Vector4};

/// The OpenGL-style viewport transform for a `width` x `height` pixel window.
///
/// NDC x & y in [-1, 1] land on [-0.5, width - 0.5] and [-0.5, height - 0.5], i.e., the outer
/// edges of the first & last pixels (pixel `i` is centred on `i`); NDC z in [-1, 1] lands on a
/// depth in [0, 1]. Nothing is clipped.
pub fn viewport_matrix(width: u32, height: u32) -> Matrix {
    let w = f64::from(width);
    let h = f64::from(height);
    Matrix::from([
        [w / 2., 0., 0., (w - 1.) / 2.],
        [0., h / 2., 0., (h - 1.) / 2.],
        [0., 0., 0.5, 0.5],
        [0., 0., 0., 1.],
    ])
}

/// Undoes [`viewport_matrix`], taking window coordinates back to NDC.
pub fn inverse_viewport_matrix(width: u32, height: u32) -> Matrix {
    let w = f64::from(width);
    let h = f64::from(height);
    Matrix::from([
        [2. / w, 0., 0., -(w - 1.) / w],
        [0., 2. / h, 0., -(h - 1.) / h],
        [0., 0., 2., -1.],
        [0., 0., 0., 1.],
    ])
}

/// The pixel a window-space point falls in, clamped to the window.
pub fn pixel_containing(width: u32, height: u32, window: &Vector4) -> (u32, u32) {
    fn axis(coord: f64, extent: u32) -> u32 {
        let last = f64::from(extent.saturating_sub(1));
        let nearest = (coord + 0.5).floor();
        if nearest.is_nan() || nearest < 0. {
            0
        } else if last < nearest {
            last as u32
        } else {
            nearest as u32
        }
    }
    (axis(window.x, width), axis(window.y, height))
}
