use serde::{Deserialize, Serialize};

// ---------- API (wire) types: owned & serde-friendly ----------

/// A product as collected by the input form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub profit: f64,
    /// Use of each resource per unit, in resource order.
    pub consumption: Vec<f64>,
}

/// A shared resource and its total capacity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub capacity: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolveRequest {
    pub products: Vec<ApiProduct>,
    pub resources: Vec<ApiResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<usize>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_unit() -> String {
    "kg".to_string()
}

fn default_currency() -> String {
    "Rp".to_string()
}

impl Default for SolveRequest {
    /// The form defaults: two rice flours sharing production time and raw material.
    fn default() -> Self {
        SolveRequest {
            products: vec![
                ApiProduct {
                    name: "Tepung Ketan Hitam".to_string(),
                    unit: default_unit(),
                    profit: 15000.0,
                    consumption: vec![2.0, 3.0],
                },
                ApiProduct {
                    name: "Tepung Ketan Putih".to_string(),
                    unit: default_unit(),
                    profit: 12000.0,
                    consumption: vec![1.5, 2.5],
                },
            ],
            resources: vec![
                ApiResource {
                    name: "Waktu produksi".to_string(),
                    unit: "jam".to_string(),
                    capacity: 120.0,
                },
                ApiResource {
                    name: "Bahan baku".to_string(),
                    unit: "kg".to_string(),
                    capacity: 200.0,
                },
            ],
            grid_size: None,
            currency: default_currency(),
        }
    }
}

// ---------- API response types (decoupled from the domain) ----------

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiQuantity {
    pub name: String,
    pub quantity: f64,
    pub display: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiSolution {
    pub products: Vec<ApiQuantity>,
    pub objective: f64,
    pub objective_display: String,
    /// Names of the resources used up completely.
    pub binding: Vec<String>,
}

/// One constraint boundary. `None` where the boundary is vertical.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiCurve {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiRegion {
    pub x_label: String,
    pub y_label: String,
    pub x_grid: Vec<f64>,
    pub curves: Vec<ApiCurve>,
    pub envelope: Vec<Option<f64>>,
    pub shaded: Vec<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolveResponse {
    pub solution: ApiSolution,
    pub region: ApiRegion,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
