//! Numeric tolerances shared by comparisons and checks on `Vector`.

/// Tolerance configuration.
#[derive(Clone, Copy, Debug)]
pub struct VecCfg {
    /// Componentwise slack for `approx_eq_eps`.
    pub eps_eq: f64,
    /// Slack on `|v| − 1` for `is_unit_eps`.
    pub eps_unit: f64,
}

impl Default for VecCfg {
    fn default() -> Self {
        Self {
            eps_eq: 1e-9,
            eps_unit: 1e-9,
        }
    }
}
