use crate::domain::error::{Result, SolverError};
use crate::domain::problem::{ProblemInstance, PRODUCTS};

/// Reject instances the solver cannot handle before any computation happens.
///
/// Every coefficient and capacity must be finite and non-negative. A product
/// with a positive profit must also draw on at least one resource, otherwise
/// the feasible region is unbounded along that product's axis and no optimum
/// exists.
pub fn validate_instance(instance: &ProblemInstance) -> Result<()> {
    for (name, value) in instance.coefficients() {
        if !value.is_finite() {
            return Err(SolverError::invalid_input(format!(
                "{} must be finite, got {}",
                name, value,
            )));
        }
        if value < 0.0 {
            return Err(SolverError::invalid_input(format!(
                "{} must be non-negative, got {}",
                name, value,
            )));
        }
    }

    for j in 0..PRODUCTS {
        let draws_on_resource = instance.consumption.iter().any(|row| row[j] > 0.0);
        if instance.products[j].profit_per_unit > 0.0 && !draws_on_resource {
            return Err(SolverError::invalid_input(format!(
                "product {} has a positive profit but consumes no resource, so profit is unbounded",
                j + 1,
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_instance_given_defaults_should_return_ok() {
        assert!(validate_instance(&ProblemInstance::default()).is_ok());
    }

    #[test]
    fn test_validate_instance_given_negative_profit_should_return_error() {
        let instance = ProblemInstance::new([-1.0, 1.0], [[1.0, 1.0], [1.0, 1.0]], [1.0, 1.0]);
        let err = validate_instance(&instance).unwrap_err();
        assert!(err.to_string().contains("profit of product 1"));
    }

    #[test]
    fn test_validate_instance_given_nan_consumption_should_return_error() {
        let instance = ProblemInstance::new([1.0, 1.0], [[1.0, f64::NAN], [1.0, 1.0]], [1.0, 1.0]);
        assert!(matches!(
            validate_instance(&instance),
            Err(SolverError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_instance_given_infinite_capacity_should_return_error() {
        let instance = ProblemInstance::new([1.0, 1.0], [[1.0, 1.0], [1.0, 1.0]], [1.0, f64::INFINITY]);
        let err = validate_instance(&instance).unwrap_err();
        assert!(err.to_string().contains("capacity of resource 2"));
    }

    #[test]
    fn test_validate_instance_given_unbounded_product_should_return_error() {
        let instance = ProblemInstance::new([1.0, 1.0], [[1.0, 0.0], [2.0, 0.0]], [1.0, 1.0]);
        let err = validate_instance(&instance).unwrap_err();
        assert!(err.to_string().contains("product 2"));
    }

    #[test]
    fn test_validate_instance_given_free_product_without_profit_should_return_ok() {
        let instance = ProblemInstance::new([1.0, 0.0], [[1.0, 0.0], [2.0, 0.0]], [1.0, 1.0]);
        assert!(validate_instance(&instance).is_ok());
    }

    #[test]
    fn test_validate_instance_given_zero_capacities_should_return_ok() {
        let instance = ProblemInstance::new([1.0, 1.0], [[1.0, 1.0], [1.0, 1.0]], [0.0, 0.0]);
        assert!(validate_instance(&instance).is_ok());
    }
}
