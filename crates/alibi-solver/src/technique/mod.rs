//! Deduction techniques.
//!
//! This module provides the deductions a human solver makes on the relation
//! grids. Each technique implements the [`Technique`] trait and can be
//! applied to a [`DeductionGrid`].

pub use self::{
    last_candidate::LastCandidate, line_exclusion::LineExclusion, traits::*,
    triangulation::Triangulation,
};
pub use crate::DeductionGrid;

mod last_candidate;
mod line_exclusion;
mod traits;
mod triangulation;

/// Returns all available techniques.
///
/// The order is the order a full pass applies them in: exclusion first so
/// that last-candidate checks see every exclusion the pass can produce.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(LineExclusion::new()),
        Box::new(LastCandidate::new()),
        Box::new(Triangulation::new()),
    ]
}
