use serde::{Deserialize, Serialize};

/// Unique identifier of an employee within an [`Organization`](crate::Organization).
///
/// IDs come from the record source as positive integers and are only
/// meaningful relative to the organization's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl EmployeeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A node in the org chart.
///
/// Carries the raw record fields plus the relationship links resolved by
/// [`Organization::build_hierarchy`](crate::Organization::build_hierarchy).
/// `manager_id` is the reference as it appeared in the input; `manager` and
/// `subordinates` hold the resolved links. Both link fields are identifiers
/// into the organization's table, never owning references, so parent and
/// child relate through the table rather than through each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    /// Manager reference from the input. `None` marks a root candidate.
    pub manager_id: Option<EmployeeId>,
    /// Resolved parent link. Populated by the hierarchy build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<EmployeeId>,
    /// Resolved children links, in input order, no duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subordinates: Vec<EmployeeId>,
}

impl Employee {
    /// Create an employee from raw record fields. Pass `None` for
    /// `manager_id` if this is the root.
    pub fn new(
        id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        manager_id: Option<u32>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id: manager_id.map(EmployeeId::new),
            manager: None,
            subordinates: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True if anyone reports to this employee. Meaningful only after the
    /// hierarchy has been built.
    pub fn is_manager(&self) -> bool {
        !self.subordinates.is_empty()
    }

    /// True if this employee has no manager reference (the root candidate).
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.manager_id {
            Some(mid) => write!(
                f,
                "Employee {{ id: {}, name: {} {}, salary: {:.2}, manager_id: {} }}",
                self.id, self.first_name, self.last_name, self.salary, mid
            ),
            None => write!(
                f,
                "Employee {{ id: {}, name: {} {}, salary: {:.2}, manager_id: none }}",
                self.id, self.first_name, self.last_name, self.salary
            ),
        }
    }
}
