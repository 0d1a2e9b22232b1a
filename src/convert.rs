use crate::domain::problem::{PRODUCTS, RESOURCES};
use crate::domain::{FeasibleRegionSample, ProblemInstance, Solution};
use crate::error::ApiError;
use crate::models::{
    ApiCurve, ApiProduct, ApiQuantity, ApiRegion, ApiResource, ApiSolution, SolveRequest,
    SolveResponse,
};
use crate::report::{format_currency, format_quantity};

/// Convert an API request into a problem instance, transposing per-product
/// consumption into per-resource constraint rows.
pub fn to_problem_instance(req: &SolveRequest) -> Result<ProblemInstance, ApiError> {
    if req.products.len() != PRODUCTS {
        return Err(ApiError::InvalidRequest(format!(
            "expected {} products, got {}",
            PRODUCTS,
            req.products.len(),
        )));
    }
    if req.resources.len() != RESOURCES {
        return Err(ApiError::InvalidRequest(format!(
            "expected {} resources, got {}",
            RESOURCES,
            req.resources.len(),
        )));
    }

    let mut consumption = [[0.0; PRODUCTS]; RESOURCES];
    for (j, product) in req.products.iter().enumerate() {
        if product.consumption.len() != RESOURCES {
            return Err(ApiError::InvalidRequest(format!(
                "product {} lists {} consumption values, expected one per resource ({})",
                j + 1,
                product.consumption.len(),
                RESOURCES,
            )));
        }
        for (i, &amount) in product.consumption.iter().enumerate() {
            consumption[i][j] = amount;
        }
    }

    let profits = [req.products[0].profit, req.products[1].profit];
    let capacities = [req.resources[0].capacity, req.resources[1].capacity];

    Ok(ProblemInstance::new(profits, consumption, capacities))
}

/// Build the response body from the solve and sample results.
pub fn to_solve_response(
    req: &SolveRequest,
    instance: &ProblemInstance,
    solution: &Solution,
    region: &FeasibleRegionSample,
) -> SolveResponse {
    let products = req
        .products
        .iter()
        .enumerate()
        .zip(solution.quantities)
        .map(|((j, product), quantity)| ApiQuantity {
            name: product_name(j, product),
            quantity,
            display: format_quantity(quantity, &product.unit),
        })
        .collect();

    let binding = solution
        .binding_constraints(instance)
        .into_iter()
        .map(|i| resource_name(i, &req.resources[i]))
        .collect();

    let curves = req
        .resources
        .iter()
        .enumerate()
        .zip(&region.boundary_curves)
        .map(|((i, resource), values)| ApiCurve {
            label: resource_name(i, resource),
            values: to_finite(values),
        })
        .collect();

    SolveResponse {
        solution: ApiSolution {
            products,
            objective: solution.objective_value,
            objective_display: format_currency(solution.objective_value, &req.currency),
            binding,
        },
        region: ApiRegion {
            x_label: axis_label(0, &req.products[0]),
            y_label: axis_label(1, &req.products[1]),
            x_grid: region.x_grid.clone(),
            curves,
            envelope: to_finite(&region.envelope),
            shaded: region.shaded.clone(),
        },
    }
}

fn product_name(index: usize, product: &ApiProduct) -> String {
    if product.name.is_empty() {
        format!("Product {}", index + 1)
    } else {
        product.name.clone()
    }
}

fn resource_name(index: usize, resource: &ApiResource) -> String {
    if resource.name.is_empty() {
        format!("Resource {}", index + 1)
    } else {
        resource.name.clone()
    }
}

fn axis_label(index: usize, product: &ApiProduct) -> String {
    let name = product_name(index, product);
    if product.unit.is_empty() {
        name
    } else {
        format!("{} ({})", name, product.unit)
    }
}

fn to_finite(values: &[f64]) -> Vec<Option<f64>> {
    values
        .iter()
        .map(|&v| if v.is_finite() { Some(v) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample, solve};

    #[test]
    fn test_to_problem_instance_given_defaults_matches_domain_defaults() {
        let instance = to_problem_instance(&SolveRequest::default()).unwrap();
        assert_eq!(instance, ProblemInstance::default());
    }

    #[test]
    fn test_to_problem_instance_given_three_products_should_return_error() {
        let mut req = SolveRequest::default();
        req.products.push(req.products[0].clone());
        let err = to_problem_instance(&req).unwrap_err();
        assert!(err.to_string().contains("expected 2 products, got 3"));
    }

    #[test]
    fn test_to_problem_instance_given_one_resource_should_return_error() {
        let mut req = SolveRequest::default();
        req.resources.pop();
        assert!(matches!(
            to_problem_instance(&req),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_to_problem_instance_given_short_consumption_should_return_error() {
        let mut req = SolveRequest::default();
        req.products[1].consumption = vec![1.0];
        let err = to_problem_instance(&req).unwrap_err();
        assert!(err.to_string().contains("product 2"));
    }

    #[test]
    fn test_to_solve_response_for_defaults() {
        let req = SolveRequest::default();
        let instance = to_problem_instance(&req).unwrap();
        let solution = solve(&instance).unwrap();
        let region = sample(&instance, 5).unwrap();

        let response = to_solve_response(&req, &instance, &solution, &region);

        assert_eq!(response.solution.products[0].name, "Tepung Ketan Hitam");
        assert_eq!(response.solution.products[0].display, "0.00 kg");
        assert_eq!(response.solution.products[1].display, "80.00 kg");
        assert_eq!(response.solution.objective_display, "Rp 960,000.00");
        assert_eq!(response.solution.binding, vec!["Waktu produksi", "Bahan baku"]);
        assert_eq!(response.region.x_label, "Tepung Ketan Hitam (kg)");
        assert_eq!(response.region.curves[1].label, "Bahan baku");
        assert_eq!(response.region.x_grid.len(), 5);
        assert_eq!(response.region.shaded.len(), 5);
    }

    #[test]
    fn test_to_solve_response_maps_infinite_boundary_to_none() {
        let mut req = SolveRequest::default();
        req.products[1].consumption = vec![0.0, 2.5];
        req.products[0].name.clear();
        req.resources[0].name.clear();
        let instance = to_problem_instance(&req).unwrap();
        let solution = solve(&instance).unwrap();
        let region = sample(&instance, 3).unwrap();

        let response = to_solve_response(&req, &instance, &solution, &region);

        assert!(response.region.curves[0].values.iter().all(Option::is_none));
        assert!(response.region.envelope.iter().all(Option::is_some));
        assert_eq!(response.region.curves[0].label, "Resource 1");
        assert_eq!(response.solution.products[0].name, "Product 1");
    }
}
