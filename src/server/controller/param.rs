use serde::Deserialize;
use utoipa::IntoParams;

fn default_entries() -> u64 {
    10
}

/// Query parameters of paginated listings.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "default_entries")]
    pub entries: u64,
}
