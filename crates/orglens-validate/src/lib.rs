//! OrgLens validation - structural checks run before the hierarchy is trusted
//!
//! Four independent validators cover the defect taxonomy:
//! - record-level: empty input, duplicate IDs ([`validate_records`])
//! - [`ManagerReferenceValidator`]: unresolvable manager references
//! - [`RootCountValidator`]: exactly one root
//! - [`CycleValidator`]: cyclic manager chains, self-reference included
//!
//! [`CompositeValidator`] concatenates findings from an ordered set of
//! validators, and [`validate_and_index`] is the whole pipeline in one call.

pub mod composite;
pub mod cycle;
pub mod error;
pub mod manager;
pub mod records;
pub mod root;

pub use composite::{validate_and_index, CompositeValidator};
pub use cycle::CycleValidator;
pub use error::ValidationError;
pub use manager::ManagerReferenceValidator;
pub use records::validate_records;
pub use root::RootCountValidator;

use orglens_model::Organization;

/// Common signature for organization-level validators: inspect, never
/// mutate, return every finding.
pub trait OrganizationValidator {
    fn validate(&self, org: &Organization) -> Vec<ValidationError>;
}
