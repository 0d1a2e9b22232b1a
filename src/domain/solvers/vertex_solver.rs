use crate::domain::error::Result;
use crate::domain::problem::{Point, ProblemInstance, RESOURCES};
use crate::domain::solver::{Solution, Solver, FEASIBILITY_TOLERANCE};
use crate::domain::validate::validate_instance;

/// Lines whose normals are this close to collinear (relative to their
/// lengths) have no unique intersection.
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// Relative tolerance under which two objective values count as a tie.
const OBJECTIVE_TOLERANCE: f64 = 1e-9;

/// The line `normal . x = offset`.
#[derive(Debug, Clone, Copy)]
struct Line {
    normal: Point,
    offset: f64,
}

/// Exact solver for the two-product problem.
///
/// The feasible region is a convex polygon bounded by `x1 = 0`, `x2 = 0` and
/// the two resource constraints, so a linear objective attains its maximum
/// at one of the pairwise intersections of those four lines.
pub struct VertexSolver;

impl VertexSolver {
    pub fn new() -> Self {
        VertexSolver
    }
}

impl Default for VertexSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for VertexSolver {
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution> {
        solve(instance)
    }

    fn name(&self) -> &str {
        "vertex-enumeration"
    }
}

/// Find the profit-maximizing production plan.
///
/// Ties between vertices with the same objective value go to the larger
/// `x1`, then the larger `x2`.
pub fn solve(instance: &ProblemInstance) -> Result<Solution> {
    validate_instance(instance)?;

    let best = candidate_vertices(instance)
        .into_iter()
        .filter(|x| instance.is_feasible(x, FEASIBILITY_TOLERANCE))
        // Feasible vertices only go negative by rounding noise
        .map(|x| x.map(|q| q.max(0.0)))
        .map(|x| Solution {
            objective_value: instance.objective(&x),
            quantities: x,
        })
        .reduce(|incumbent, candidate| {
            if is_better(&candidate, &incumbent) {
                candidate
            } else {
                incumbent
            }
        });

    let solution = match best {
        Some(solution) => solution,
        None => {
            log::debug!("No feasible vertex survived the tolerance check, falling back to the origin");
            Solution::origin()
        }
    };

    log::debug!(
        "Solved production mix: quantities={:?} objective={}",
        solution.quantities,
        solution.objective_value,
    );

    Ok(solution)
}

/// Every unique pairwise intersection of the bounding lines, feasible or not.
pub fn candidate_vertices(instance: &ProblemInstance) -> Vec<Point> {
    let lines = bounding_lines(instance);

    let mut vertices = Vec::with_capacity(lines.len() * (lines.len() - 1) / 2);
    for (i, first) in lines.iter().enumerate() {
        for second in &lines[i + 1..] {
            if let Some(x) = intersect(first, second) {
                vertices.push(x);
            }
        }
    }
    vertices
}

fn bounding_lines(instance: &ProblemInstance) -> Vec<Line> {
    let axes = [
        Line {
            normal: [1.0, 0.0],
            offset: 0.0,
        },
        Line {
            normal: [0.0, 1.0],
            offset: 0.0,
        },
    ];
    let constraints = (0..RESOURCES).map(|i| Line {
        normal: instance.consumption[i],
        offset: instance.capacities[i],
    });

    axes.into_iter().chain(constraints).collect()
}

/// Solve the 2x2 system by Cramer's rule.
fn intersect(first: &Line, second: &Line) -> Option<Point> {
    let [a, b] = first.normal;
    let [c, d] = second.normal;

    let det = a * d - b * c;
    let scale = a.hypot(b) * c.hypot(d);
    if det.abs() <= PARALLEL_TOLERANCE * scale {
        return None;
    }

    let x1 = (first.offset * d - b * second.offset) / det;
    let x2 = (a * second.offset - first.offset * c) / det;

    // `+ 0.0` turns a signed zero into a plain zero
    Some([x1 + 0.0, x2 + 0.0])
}

fn is_better(candidate: &Solution, incumbent: &Solution) -> bool {
    let scale = candidate
        .objective_value
        .abs()
        .max(incumbent.objective_value.abs())
        .max(1.0);
    let difference = candidate.objective_value - incumbent.objective_value;

    if difference.abs() > OBJECTIVE_TOLERANCE * scale {
        return difference > 0.0;
    }

    let [cx1, cx2] = candidate.quantities;
    let [ix1, ix2] = incumbent.quantities;
    cx1 > ix1 || (cx1 == ix1 && cx2 > ix2)
}
