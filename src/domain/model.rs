use serde::Deserialize;

/// Deliverability metadata for one address, projected from the API's
/// `results` object. Unknown keys in the payload are dropped; absent keys
/// stay `None` and serialize as empty CSV fields.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ValidationResult {
    /// The queried address, attached locally. Never comes from the payload.
    #[serde(skip)]
    pub email: String,
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub is_role: Option<bool>,
    #[serde(default)]
    pub is_disposable: Option<bool>,
    #[serde(default)]
    pub is_free: Option<bool>,
    #[serde(default)]
    pub did_you_mean: Option<String>,
}

/// Terminal per-address outcome of the validation client.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// 200 with a usable `results` payload.
    Row(ValidationResult),
    /// 200 whose body was not the expected shape. Logged, never retried.
    Skipped,
    /// Retries exhausted under a bounded policy.
    Abandoned { status: u16 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrecheckSummary {
    pub ok: usize,
    pub bad: usize,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    pub dispatched: usize,
    pub rows_written: usize,
    pub skipped: usize,
    pub abandoned: usize,
    pub failed: usize,
}
