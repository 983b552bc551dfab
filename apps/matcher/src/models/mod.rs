pub mod documents;
pub mod match_result;

pub use documents::{JobDocument, ProfileDocument};
pub use match_result::{DimensionScores, MatchResult, MatchTier};
