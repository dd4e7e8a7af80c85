use std::fmt;

pub mod projection;
pub mod transformations;
mod viewport;

pub use viewport::{inverse_viewport_matrix, pixel_containing, viewport_matrix};

/// A 4x4 matrix of double-precision floats.
#[derive(Clone, Copy)]
pub struct Matrix {
    /// Column-major 2D matrix data
    data: [[f64; 4]; 4],
}

impl Matrix {
    /// Builds a matrix from row-major data; usable in `const` items.
    pub const fn from_rows(matrix: [[f64; 4]; 4]) -> Matrix {
        Matrix {
            data: [
                [matrix[0][0], matrix[1][0], matrix[2][0], matrix[3][0]],
                [matrix[0][1], matrix[1][1], matrix[2][1], matrix[3][1]],
                [matrix[0][2], matrix[1][2], matrix[2][2], matrix[3][2]],
                [matrix[0][3], matrix[1][3], matrix[2][3], matrix[3][3]],
            ],
        }
    }

    pub fn identity() -> Matrix {
        Matrix::from([
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    /// The element at `row`, `column`, in the usual mathematical (row-major) sense.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[column][row]
    }

    /// The matrix as a row-major array, i.e., the same layout `From` accepts.
    pub fn rows(&self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.get(r, c);
            }
        }
        rows
    }
}

impl From<[[f64; 4]; 4]> for Matrix {
    fn from(matrix: [[f64; 4]; 4]) -> Matrix {
        Matrix::from_rows(matrix)
    }
}

impl std::ops::Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let mut output = Matrix {
            data: [[0.0; 4], [0.0; 4], [0.0; 4], [0.0; 4]],
        };
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    output.data[j][i] += self.data[k][i] * rhs.data[j][k];
                }
            }
        }
        output
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.data == other.data
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Matrix {{ rows: [")?;
            for row in self.rows().iter() {
                writeln!(f, "\t{:?}", row)?;
            }
            writeln!(f, "]}}")
        } else {
            write!(f, "Matrix {{ rows: {:?} }}", &self.rows())
        }
    }
}

/// Prints one bracketed row per line, e.g.:
///
/// ```text
/// [[1.0, 0.0, 0.0, 0.0],
///  [0.0, 1.0, 0.0, 0.0],
///  [0.0, 0.0, 0.0, 1.0],
///  [0.0, 0.0, -1.0, 0.0]]
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self.rows();
        for (r, row) in rows.iter().enumerate() {
            let open = if r == 0 { "[" } else { " " };
            let close = if r == 3 { "]" } else { ",\n" };
            write!(
                f,
                "{}[{:?}, {:?}, {:?}, {:?}]{}",
                open, row[0], row[1], row[2], row[3], close
            )?;
        }
        Ok(())
    }
}

/// A homogeneous 4D column vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector4 {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Vector4 {
        Vector4 { x, y, z, w }
    }

    /// A point, i.e., `(x, y, z)` with a homogeneous `w` of 1.
    pub fn point(x: f64, y: f64, z: f64) -> Vector4 {
        Vector4 { x, y, z, w: 1. }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:?}, {:?}, {:?}, {:?}]", self.x, self.y, self.z, self.w)
    }
}

impl std::ops::Mul<Vector4> for Matrix {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Vector4 {
        let x = self.data[0][0] * rhs.x
            + self.data[1][0] * rhs.y
            + self.data[2][0] * rhs.z
            + self.data[3][0] * rhs.w;
        let y = self.data[0][1] * rhs.x
            + self.data[1][1] * rhs.y
            + self.data[2][1] * rhs.z
            + self.data[3][1] * rhs.w;
        let z = self.data[0][2] * rhs.x
            + self.data[1][2] * rhs.y
            + self.data[2][2] * rhs.z
            + self.data[3][2] * rhs.w;
        let w = self.data[0][3] * rhs.x
            + self.data[1][3] * rhs.y
            + self.data[2][3] * rhs.z
            + self.data[3][3] * rhs.w;
        Vector4 { x, y, z, w }
    }
}

#[cfg(test)]
mod tests {
    use super::{Matrix, Vector4};

    #[test]
    fn test_matrix_debug() {
        let a = Matrix::from([
            [1., 2., 3., 4.],
            [0., 1., 0., 5.],
            [0., 0., 1., 6.],
            [0., 0., 0., 7.],
        ]);
        let pretty = format!("{:#?}", a);
        assert!(pretty.contains("[1.0, 2.0, 3.0, 4.0]"));
        assert!(pretty.contains("[0.0, 0.0, 0.0, 7.0]"));
    }

    #[test]
    fn test_matrix_display() {
        let a = Matrix::from([
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 0., 1.],
            [0., 0., -1., 0.],
        ]);
        assert_eq!(
            a.to_string(),
            "[[1.0, 0.0, 0.0, 0.0],\n \
             [0.0, 1.0, 0.0, 0.0],\n \
             [0.0, 0.0, 0.0, 1.0],\n \
             [0.0, 0.0, -1.0, 0.0]]"
        );
    }

    #[test]
    fn test_matrix_rows_round_trip() {
        let rows = [
            [1., 2., 3., 4.],
            [5., 6., 7., 8.],
            [9., 10., 11., 12.],
            [13., 14., 15., 16.],
        ];
        let a = Matrix::from(rows);
        assert_eq!(a.rows(), rows);
        assert_eq!(a.get(0, 3), 4.);
        assert_eq!(a.get(3, 0), 13.);
    }

    #[test]
    fn test_matrix_mul() {
        // Test vector from: https://opentk.net/learn/chapter1/6-transformations.html
        let a = Matrix::from([
            [4., 2., 0., 0.],
            [0., 8., 1., 0.],
            [0., 1., 0., 0.],
            [0., 0., 0., 0.],
        ]);
        let b = Matrix::from([
            [4., 2., 1., 0.],
            [2., 0., 4., 0.],
            [9., 4., 2., 0.],
            [0., 0., 0., 0.],
        ]);
        let c = a * b;
        let expected = Matrix::from([
            [20., 8., 12., 0.],
            [25., 4., 34., 0.],
            [2., 0., 4., 0.],
            [0., 0., 0., 0.],
        ]);
        assert!(c == expected);
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = Matrix::from([
            [1., 2., 3., 4.],
            [5., 6., 7., 8.],
            [9., 10., 11., 12.],
            [13., 14., 15., 16.],
        ]);
        assert!(Matrix::identity() * a == a);
        assert!(a * Matrix::identity() == a);
    }

    #[test]
    fn test_matrix_vector_mul() {
        let a = Matrix::from([
            [1., 2., 3., 4.],
            [0., 1., 0., 5.],
            [0., 0., 1., 6.],
            [0., 0., 0., 7.],
        ]);
        let v = Vector4::new(1., 2., 3., 1.);
        assert_eq!(a * v, Vector4::new(18., 7., 9., 7.));
    }

    #[test]
    fn test_vector_display() {
        assert_eq!(
            Vector4::new(0., 0., 0.2, 1.).to_string(),
            "[0.0, 0.0, 0.2, 1.0]"
        );
        assert_eq!(Vector4::point(-1.5, 2., 3.).w, 1.);
    }
}
