//! Build-time configuration of the roster frontend.

/// Cohort whose roster this build manages.
pub const COHORT_NAME: &str = "2306-FSA-ET-WEB-FT-SF";

/// Host of the public puppy-bowl API.
pub const DEFAULT_API_HOST: &str = "https://fsa-puppy-bowl.herokuapp.com/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Cohort root, e.g. `https://fsa-puppy-bowl.herokuapp.com/api/<cohort>`.
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `ROSTER_API_URL` at compile time, falling back to the default cohort URL.
    pub fn from_build_env() -> Self {
        Self::with_override(option_env!("ROSTER_API_URL"))
    }

    fn with_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                base_url: url.to_string(),
            },
            None => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{}/{}", DEFAULT_API_HOST, COHORT_NAME),
        }
    }
}
