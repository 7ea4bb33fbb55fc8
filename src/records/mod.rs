//! Input records: the candidate profile and the position description

pub mod candidate;
pub mod position;

pub use candidate::CandidateProfile;
pub use position::{Description, PositionDescription};
