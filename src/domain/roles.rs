// ============================================================
// SEMANTIC ROLES
// ============================================================
// The dashboard's fixed vocabulary of column meanings, and the
// concrete columns chosen for each on a given dataset.

use serde::{Deserialize, Serialize};

/// Semantic meaning a column can take on in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Revenue,
    Cost,
    Gender,
    Age,
    Customer,
    Date,
    Category,
}

/// Concrete column chosen for each role, or None when nothing matched.
///
/// Bindings are resolved independently; an unbound role degrades only
/// the views that need it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleBindings {
    pub revenue: Option<String>,
    pub cost: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub customer: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl RoleBindings {
    /// Column bound to a role, for logging and inspection.
    pub fn get(&self, role: Role) -> Option<&str> {
        match role {
            Role::Revenue => self.revenue.as_deref(),
            Role::Cost => self.cost.as_deref(),
            Role::Gender => self.gender.as_deref(),
            Role::Age => self.age.as_deref(),
            Role::Customer => self.customer.as_deref(),
            Role::Date => self.date.as_deref(),
            Role::Category => self.category.as_deref(),
        }
    }

    pub fn bound_count(&self) -> usize {
        [
            &self.revenue,
            &self.cost,
            &self.gender,
            &self.age,
            &self.customer,
            &self.date,
            &self.category,
        ]
        .iter()
        .filter(|b| b.is_some())
        .count()
    }
}
