use serde::{Deserialize, Serialize};

/// List envelope returned by paginated collection endpoints. Endpoints with
/// pagination disabled return a bare array instead; callers pick the shape
/// they expect when filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}
