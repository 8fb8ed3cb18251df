pub mod types;

pub use types::{
    AlignmentResult, ComplianceCriteria, ComplianceResult, Criterion, StandardsMatch,
};
