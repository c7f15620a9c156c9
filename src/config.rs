use std::env;

use crate::data::Calendar;

/// Process configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Periods per day; one period is a 30-minute block.
    pub n_periods: i64,
    /// Days per week.
    pub n_days: i64,
    /// Upper bound on `n_solutions` a request may ask for.
    pub max_n_solutions: u32,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            n_periods: 26,
            n_days: 5,
            max_n_solutions: 999,
            port: 8080,
        }
    }
}

impl AppConfig {
    /// Reads `PERIODS_PER_DAY`, `DAYS_PER_WEEK`, `API_MAX_N_SOLUTIONS` and
    /// `PORT`; missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            n_periods: read_var("PERIODS_PER_DAY", defaults.n_periods),
            n_days: read_var("DAYS_PER_WEEK", defaults.n_days),
            max_n_solutions: read_var("API_MAX_N_SOLUTIONS", defaults.max_n_solutions),
            port: read_var("PORT", defaults.port),
        }
    }

    pub fn calendar(&self) -> Calendar {
        Calendar {
            n_days: self.n_days,
            n_periods: self.n_periods,
        }
    }
}

fn read_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
