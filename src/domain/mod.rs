//! Pure domain types for option scoring.

mod bins;
mod candidate;
pub mod error;
mod factor;
mod filter;
mod id;
mod recommendation;
mod score;
mod weights;

pub use bins::{DteBin, ProbabilityBin};
pub use candidate::{Candidate, CandidateContext, RawFactors};
pub use error::DomainError;
pub use factor::{Direction, Factor};
pub use filter::{
    FilterDefaults, PeakThreshold, ProbabilityMethod, RecommendationFilters, RollingPeriod,
};
pub use id::{OptionName, StockName};
pub use recommendation::{distance_to_support_pct, RecommendedOption, Recommendations};
pub use score::{
    DataStatus, Normalization, ScoreBreakdown, ScoreComponent, MAX_SCORE, NEUTRAL_SCORE,
};
pub use weights::{NormalizedWeights, ScoreWeights, MAX_USER_WEIGHT, WEIGHT_TOTAL};
