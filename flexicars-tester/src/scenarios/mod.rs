mod contact;
mod forms;
mod listing;
mod notices;

use crate::timing::TokioSleep;
use anyhow::{Context, Result};
use flexicars_core::{Catalog, SiteConfig};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

const CARS_JSON: &str = include_str!("../../../flexicars-web/static/assets/data/cars.json");
const SITE_JSON: &str = include_str!("../../../flexicars-web/static/assets/data/site.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Listing,
    Contact,
    Notices,
    Forms,
}

impl Scenario {
    pub const ALL: [Self; 4] = [Self::Listing, Self::Contact, Self::Notices, Self::Forms];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Contact => "contact",
            Self::Notices => "notices",
            Self::Forms => "forms",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Listing => "Filter the bundled catalog through every dropdown",
            Self::Contact => "Contact form validation order and messages",
            Self::Notices => "Toast lifetimes and independent expiry",
            Self::Forms => "Simulated submissions on real timers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// Shared inputs for a run: the site bundle plus the scaled timer.
pub struct ScenarioContext {
    pub catalog: Catalog,
    pub config: SiteConfig,
    pub sleeper: TokioSleep,
    pub verbose: bool,
}

impl ScenarioContext {
    pub fn bundled(delay_scale: f64, verbose: bool) -> Result<Self> {
        let catalog = Catalog::from_json(CARS_JSON).context("parsing bundled cars.json")?;
        let config = SiteConfig::from_json(SITE_JSON).context("parsing bundled site.json")?;
        Ok(Self {
            catalog,
            config,
            sleeper: TokioSleep::new(delay_scale),
            verbose,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub name: String,
    pub error: Option<String>,
}

impl Check {
    pub fn new(name: impl Into<String>, outcome: Result<()>) -> Self {
        Self {
            name: name.into(),
            error: outcome.err().map(|e| format!("{e:#}")),
        }
    }

    pub const fn passed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub checks_run: usize,
    pub checks_passed: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    pub started_at: String,
}

impl ScenarioResult {
    fn from_checks(
        scenario: Scenario,
        checks: &[Check],
        duration: Duration,
        started_at: String,
    ) -> Self {
        let failures: Vec<String> = checks
            .iter()
            .filter_map(|check| {
                check
                    .error
                    .as_ref()
                    .map(|error| format!("{}: {error}", check.name))
            })
            .collect();
        Self {
            scenario_name: scenario.key().to_string(),
            passed: failures.is_empty(),
            checks_run: checks.len(),
            checks_passed: checks.iter().filter(|check| check.passed()).count(),
            failures,
            duration,
            started_at,
        }
    }
}

pub async fn run(scenario: Scenario, ctx: &ScenarioContext) -> ScenarioResult {
    let started_at = chrono::Utc::now().to_rfc3339();
    let start = Instant::now();
    let checks = match scenario {
        Scenario::Listing => listing::checks(ctx),
        Scenario::Contact => contact::checks(),
        Scenario::Notices => notices::checks(ctx).await,
        Scenario::Forms => forms::checks(ctx).await,
    };
    if ctx.verbose {
        for check in &checks {
            match &check.error {
                None => log::info!("[{}] ok: {}", scenario.key(), check.name),
                Some(error) => log::warn!("[{}] failed: {}: {error}", scenario.key(), check.name),
            }
        }
    }
    ScenarioResult::from_checks(scenario, &checks, start.elapsed(), started_at)
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
