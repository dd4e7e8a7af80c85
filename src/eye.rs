//! Reading eye coordinates, one `x y z` triple per line.

use std::io::{self, BufRead};
use std::num::ParseFloatError;

use log::{debug, trace};

use crate::matrix::Vector4;

/// An error while reading eye coordinates. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum EyeCoordsError {
    #[error("line {line}: expected 3 numbers (x y z), found {found}")]
    WrongTokenCount { line: usize, found: usize },
    #[error("line {line}: {token:?} is not a number: {source}")]
    BadNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reads every eye coordinate in `reader`, as points (`w` = 1), in input order.
///
/// Blank lines are skipped; any other line must be exactly three numbers.
pub fn read_eye_coords<R: BufRead>(reader: R) -> Result<Vec<Vector4>, EyeCoordsError> {
    let mut eye_coords = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_line(index + 1, &line)?;
        trace!("line {}: {}", index + 1, point);
        eye_coords.push(point);
    }
    debug!("Read {} eye coordinates.", eye_coords.len());
    Ok(eye_coords)
}

fn parse_line(line_no: usize, line: &str) -> Result<Vector4, EyeCoordsError> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != 3 {
        return Err(EyeCoordsError::WrongTokenCount {
            line: line_no,
            found: tokens.len(),
        });
    }
    let parse = |token: &str| {
        token
            .parse::<f64>()
            .map_err(|source| EyeCoordsError::BadNumber {
                line: line_no,
                token: token.to_owned(),
                source,
            })
    };
    Ok(Vector4::point(
        parse(tokens[0])?,
        parse(tokens[1])?,
        parse(tokens[2])?,
    ))
}
