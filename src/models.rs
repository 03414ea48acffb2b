use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub symbol: String,
    pub raw_score: f64,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConvictionScore {
    pub symbol: String,
    pub raw_score: f64,
    pub conviction: f64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub distinct: usize,
}
