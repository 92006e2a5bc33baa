//! Analysis domain - end-of-session scoring.

mod feedback;

pub use feedback::{
    DimensionScore, FeedbackDimension, FeedbackReport, FeedbackSynthesizer,
    IMPROVEMENT_THRESHOLD, MAX_SCORE, MIN_SCORE,
};
