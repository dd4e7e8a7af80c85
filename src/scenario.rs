//! The homework questions, one subcommand each.

use std::io::{BufRead, Write};

use anyhow::Context;
use log::{debug, info};
use structopt::StructOpt;

use crate::eye::read_eye_coords;
use crate::matrix::projection::PROJECTION;
use crate::matrix::transformations::{scale, uniform_scale};
use crate::matrix::{pixel_containing, viewport_matrix, Matrix, Vector4};
use crate::pipeline::{clip_to_ndc, compose, eye_to_ndc, get_clip};

/// The NDC point problem set 6 asks to take to the window.
pub const PS6_NDC: Vector4 = Vector4 {
    x: -0.1,
    y: 0.26,
    z: 0.,
    w: 1.,
};

#[derive(Clone, Copy, Debug, StructOpt)]
pub struct WindowSize {
    /// Window width, in pixels
    #[structopt(long, default_value = "512")]
    pub width: u32,
    /// Window height, in pixels
    #[structopt(long, default_value = "256")]
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize {
            width: 512,
            height: 256,
        }
    }
}

#[derive(Clone, Copy, Debug, StructOpt)]
pub enum Scenario {
    /// Q11.2: NDC through PROJECTION vs. PROJECTION · diag(k, k, k, 1)
    ProjTimesScale {
        #[structopt(long, default_value = "3")]
        factor: f64,
    },
    /// Q11.3: NDC through PROJECTION vs. PROJECTION · diag(k, k, k, k)
    ProjTimesHomogeneous {
        #[structopt(long, default_value = "3")]
        factor: f64,
    },
    /// Q11.4: NDC through diag(k, k, k, 1) · PROJECTION
    ScaleTimesProj {
        #[structopt(long, default_value = "3")]
        factor: f64,
    },
    /// Q12.3: window coordinates through V vs. diag(k, k, 1, 1) · V
    WindowScale {
        #[structopt(long, default_value = "3")]
        factor: f64,
        #[structopt(flatten)]
        size: WindowSize,
    },
    /// PS 6: the window coordinates of NDC (-0.1, 0.26, 0, 1)
    Window {
        #[structopt(flatten)]
        size: WindowSize,
    },
    /// eye → clip → NDC (→ window, given a size) for every input point
    Project {
        #[structopt(long, requires = "height")]
        width: Option<u32>,
        #[structopt(long, requires = "width")]
        height: Option<u32>,
    },
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario::Window {
            size: WindowSize::default(),
        }
    }
}

impl Scenario {
    /// Runs the scenario, reading eye coordinates from `input` if it needs any.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> anyhow::Result<()> {
        info!("Running {:?}", self);
        match *self {
            Scenario::ProjTimesScale { factor } => {
                let scaled = compose(&[PROJECTION, uniform_scale(factor)]);
                writeln!(out, "{}", scaled)?;
                print_ndc(
                    &read_points(input)?,
                    &[("ndc no q", PROJECTION), ("ndc q", scaled)],
                    out,
                )
            }
            Scenario::ProjTimesHomogeneous { factor } => {
                let s = scale(factor, factor, factor, factor);
                print_ndc(
                    &read_points(input)?,
                    &[("ndc no s", PROJECTION), ("ndc s", compose(&[PROJECTION, s]))],
                    out,
                )
            }
            Scenario::ScaleTimesProj { factor } => print_ndc(
                &read_points(input)?,
                &[("ndc q", compose(&[uniform_scale(factor), PROJECTION]))],
                out,
            ),
            Scenario::WindowScale { factor, size } => {
                let view = viewport_matrix(size.width, size.height);
                // Not the same q as the other questions: z is left alone.
                let q = scale(factor, factor, 1., 1.);
                print_windows(
                    &read_points(input)?,
                    &[("original window", view), ("q window", compose(&[q, view]))],
                    out,
                )
            }
            Scenario::Window { size } => {
                let window = viewport_matrix(size.width, size.height) * PS6_NDC;
                writeln!(out, "window: {}", window)?;
                let (px, py) = pixel_containing(size.width, size.height, &window);
                writeln!(out, "pixel: ({}, {})", px, py)?;
                Ok(())
            }
            Scenario::Project { width, height } => {
                let size = match (width, height) {
                    (Some(width), Some(height)) => Some(WindowSize { width, height }),
                    _ => None,
                };
                project(&read_points(input)?, size, out)
            }
        }
    }
}

fn read_points<R: BufRead>(input: R) -> anyhow::Result<Vec<Vector4>> {
    read_eye_coords(input).context("failed to read eye coordinates")
}

/// For each point, the NDC position through each labelled transform.
fn print_ndc<W: Write>(
    points: &[Vector4],
    transforms: &[(&str, Matrix)],
    out: &mut W,
) -> anyhow::Result<()> {
    for (label, transform) in transforms {
        debug!("{}:\n{}", label, transform);
    }
    for eye in points {
        writeln!(out)?;
        for (label, transform) in transforms {
            writeln!(out, "{}: {}", label, eye_to_ndc(transform, eye)?)?;
        }
    }
    Ok(())
}

/// For each point, its NDC position (through `PROJECTION`) taken through each labelled viewport.
fn print_windows<W: Write>(
    points: &[Vector4],
    viewports: &[(&str, Matrix)],
    out: &mut W,
) -> anyhow::Result<()> {
    for eye in points {
        let ndc = eye_to_ndc(&PROJECTION, eye)?;
        for (label, viewport) in viewports {
            writeln!(out, "{}: {}", label, *viewport * ndc)?;
        }
    }
    Ok(())
}

fn project<W: Write>(
    points: &[Vector4],
    size: Option<WindowSize>,
    out: &mut W,
) -> anyhow::Result<()> {
    let viewport = size.map(|size| viewport_matrix(size.width, size.height));
    for (index, eye) in points.iter().enumerate() {
        if index != 0 {
            writeln!(out)?;
        }
        let clip = get_clip(&PROJECTION, eye);
        let ndc = clip_to_ndc(&clip)?;
        writeln!(out, "eye: {}", eye)?;
        writeln!(out, "clip: {}", clip)?;
        writeln!(out, "ndc: {}", ndc)?;
        if let (Some(viewport), Some(size)) = (viewport, size) {
            let window = viewport * ndc;
            let (px, py) = pixel_containing(size.width, size.height, &window);
            writeln!(out, "window: {}", window)?;
            writeln!(out, "pixel: ({}, {})", px, py)?;
        }
    }
    Ok(())
}
