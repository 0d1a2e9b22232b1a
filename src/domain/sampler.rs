use crate::domain::error::{Result, SolverError};
use crate::domain::problem::ProblemInstance;
use crate::domain::validate::validate_instance;

/// Number of grid points used when the caller does not ask for a specific size.
pub const DEFAULT_GRID_SIZE: usize = 400;

/// Boundary data for plotting the feasible region over `x1`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeasibleRegionSample {
    /// Evenly spaced `x1` values from 0 to the plotting bound.
    pub x_grid: Vec<f64>,
    /// Per constraint, the `x2` value that saturates it at each grid point.
    /// `f64::INFINITY` where the constraint does not involve `x2`.
    pub boundary_curves: Vec<Vec<f64>>,
    /// Pointwise minimum of `boundary_curves`.
    pub envelope: Vec<f64>,
    /// Grid points where the envelope is strictly positive and the region is shaded.
    pub shaded: Vec<bool>,
}

/// Sample the constraint boundaries of `instance` on `grid_size` points.
///
/// The `x1` axis runs from 0 to the largest capacity. This is a plotting
/// range only; it says nothing about feasibility.
pub fn sample(instance: &ProblemInstance, grid_size: usize) -> Result<FeasibleRegionSample> {
    if grid_size < 2 {
        return Err(SolverError::InvalidGridSize { grid_size });
    }
    validate_instance(instance)?;

    let upper = instance.capacities.iter().copied().fold(0.0, f64::max);
    let x_grid = linspace(0.0, upper, grid_size);

    let boundary_curves: Vec<Vec<f64>> = instance
        .consumption
        .iter()
        .zip(&instance.capacities)
        .map(|(&[a1, a2], &capacity)| {
            x_grid
                .iter()
                .map(|&x1| {
                    if a2 == 0.0 {
                        f64::INFINITY
                    } else {
                        (capacity - a1 * x1) / a2
                    }
                })
                .collect()
        })
        .collect();

    let envelope: Vec<f64> = (0..grid_size)
        .map(|k| {
            boundary_curves
                .iter()
                .map(|curve| curve[k])
                .fold(f64::INFINITY, f64::min)
        })
        .collect();

    let shaded = envelope.iter().map(|&y| y > 0.0).collect();

    Ok(FeasibleRegionSample {
        x_grid,
        boundary_curves,
        envelope,
        shaded,
    })
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let last = (n - 1) as f64;
    (0..n)
        .map(|k| {
            if k == n - 1 {
                end
            } else {
                start + (end - start) * (k as f64) / last
            }
        })
        .collect()
}
