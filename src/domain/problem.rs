/// Number of products (decision variables) in a production-mix problem.
pub const PRODUCTS: usize = 2;

/// Number of resource constraints in a production-mix problem.
pub const RESOURCES: usize = 2;

/// A point in decision space: one quantity per product.
pub type Point = [f64; PRODUCTS];

/// A single product: its profit per unit produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub profit_per_unit: f64,
}

/// Immutable input to a single solve.
///
/// `consumption[i][j]` is the amount of resource `i` drawn by one unit of
/// product `j`, so each row is the left-hand side of constraint `i`:
///
/// ```text
/// consumption[i][0] * x1 + consumption[i][1] * x2 <= capacities[i]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    pub products: [Product; PRODUCTS],
    pub consumption: [[f64; PRODUCTS]; RESOURCES],
    pub capacities: [f64; RESOURCES],
}

impl ProblemInstance {
    pub fn new(
        profits: [f64; PRODUCTS],
        consumption: [[f64; PRODUCTS]; RESOURCES],
        capacities: [f64; RESOURCES],
    ) -> Self {
        ProblemInstance {
            products: profits.map(|profit_per_unit| Product { profit_per_unit }),
            consumption,
            capacities,
        }
    }

    pub fn profits(&self) -> Point {
        self.products.map(|p| p.profit_per_unit)
    }

    /// Total profit at `x`.
    pub fn objective(&self, x: &Point) -> f64 {
        self.products
            .iter()
            .zip(x)
            .map(|(p, q)| p.profit_per_unit * q)
            .sum()
    }

    /// Resource `i` drawn by the production plan `x`.
    pub fn constraint_lhs(&self, i: usize, x: &Point) -> f64 {
        self.consumption[i].iter().zip(x).map(|(a, q)| a * q).sum()
    }

    /// Whether `x` is non-negative and within every capacity.
    ///
    /// `tolerance` is relative: constraint `i` may be exceeded by
    /// `tolerance * max(capacity_i, 1)` and each quantity may dip below zero by
    /// `tolerance * max(largest capacity, 1)`.
    pub fn is_feasible(&self, x: &Point, tolerance: f64) -> bool {
        let floor = -tolerance * self.capacities.iter().copied().fold(1.0, f64::max);
        x.iter().all(|&q| q >= floor)
            && (0..RESOURCES).all(|i| {
                let capacity = self.capacities[i];
                self.constraint_lhs(i, x) <= capacity + tolerance * capacity.max(1.0)
            })
    }

    /// Iterate every coefficient and capacity together with a human-readable name.
    pub(crate) fn coefficients(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        let profits = self
            .products
            .iter()
            .enumerate()
            .map(|(j, p)| (format!("profit of product {}", j + 1), p.profit_per_unit));
        let consumption = self.consumption.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &a)| {
                (
                    format!("consumption of resource {} by product {}", i + 1, j + 1),
                    a,
                )
            })
        });
        let capacities = self
            .capacities
            .iter()
            .enumerate()
            .map(|(i, &c)| (format!("capacity of resource {}", i + 1), c));

        profits.chain(consumption).chain(capacities)
    }
}

impl Default for ProblemInstance {
    /// Two flours sharing production time (hours) and raw material (kg).
    fn default() -> Self {
        ProblemInstance::new(
            [15000.0, 12000.0],
            [[2.0, 1.5], [3.0, 2.5]],
            [120.0, 200.0],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance_matches_documented_defaults() {
        let instance = ProblemInstance::default();
        assert_eq!(instance.profits(), [15000.0, 12000.0]);
        assert_eq!(instance.consumption[0], [2.0, 1.5]);
        assert_eq!(instance.consumption[1], [3.0, 2.5]);
        assert_eq!(instance.capacities, [120.0, 200.0]);
    }

    #[test]
    fn test_objective_and_constraint_lhs() {
        let instance = ProblemInstance::default();
        let x = [10.0, 20.0];
        assert_eq!(instance.objective(&x), 15000.0 * 10.0 + 12000.0 * 20.0);
        assert_eq!(instance.constraint_lhs(0, &x), 2.0 * 10.0 + 1.5 * 20.0);
        assert_eq!(instance.constraint_lhs(1, &x), 3.0 * 10.0 + 2.5 * 20.0);
    }

    #[test]
    fn test_is_feasible_respects_tolerance() {
        let instance = ProblemInstance::default();
        assert!(instance.is_feasible(&[0.0, 0.0], 0.0));
        assert!(instance.is_feasible(&[60.0, 0.0], 0.0));
        assert!(!instance.is_feasible(&[60.1, 0.0], 1e-9));
        assert!(!instance.is_feasible(&[-1e-6, 0.0], 1e-9));
        assert!(instance.is_feasible(&[-1e-10, 0.0], 1e-9));
    }

    #[test]
    fn test_is_feasible_scales_tolerance_with_capacity() {
        let instance = ProblemInstance::new([3.0, 5.0], [[0.1, 0.1], [0.3, 0.3]], [1e8, 1e8]);
        // Residuals of a few ulps at this magnitude are far above 1e-9 in absolute terms.
        assert!(instance.is_feasible(&[0.0, 1e8 / 0.3 + 1e-6], 1e-9));
        assert!(instance.is_feasible(&[-1e-6, 1e8 / 0.3], 1e-9));
        assert!(!instance.is_feasible(&[0.0, 1e8 / 0.3 + 1.0], 1e-9));
        assert!(!instance.is_feasible(&[-1.0, 0.0], 1e-9));
    }

    #[test]
    fn test_coefficients_lists_every_input() {
        let instance = ProblemInstance::default();
        assert_eq!(instance.coefficients().count(), PRODUCTS + PRODUCTS * RESOURCES + RESOURCES);
    }
}
