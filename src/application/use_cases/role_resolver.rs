// Centralized column-name alias configuration for role resolution.
//
// Goal: keep heuristic column matching in one place instead of
// scattering alias lists across the aggregators.
//
// Matching strategy: aliases are checked in priority order (first
// listed wins); a column matches when its lower-cased name contains
// the alias as a substring.

use crate::domain::roles::RoleBindings;
use crate::domain::schema::ColumnSchema;
use tracing::debug;

pub const REVENUE_ALIASES: &[&str] = &["revenue", "sales", "total", "amount"];

pub const COST_ALIASES: &[&str] = &["cost", "cogs", "expense"];

pub const GENDER_ALIASES: &[&str] = &["gender", "sex"];

pub const AGE_ALIASES: &[&str] = &["age"];

pub const CUSTOMER_ALIASES: &[&str] = &["customer", "name", "client"];

pub const DATE_ALIASES: &[&str] = &["date", "time", "month"];

pub const CATEGORY_ALIASES: &[&str] = &["category", "product", "type"];

/// Value column used when ranking customers. Same list as revenue,
/// with profit accepted as a last resort.
pub const RANKING_VALUE_ALIASES: &[&str] = &["revenue", "sales", "total", "amount", "profit"];

/// Value column accumulated by the temporal and category views.
pub const VALUE_ALIASES: &[&str] = &["revenue", "sales", "total", "amount"];

/// First column whose lower-cased name contains one of the aliases.
///
/// Aliases are tried in priority order and the scan stops at the first
/// hit anywhere, so an earlier alias always beats a later one even if
/// the later one would match an earlier column.
pub fn find_column(columns: &[String], preferences: &[&str]) -> Option<String> {
    for pref in preferences {
        for col in columns {
            if col.to_lowercase().contains(pref) {
                return Some(col.clone());
            }
        }
    }
    None
}

/// Resolve every role against the classified schema.
///
/// Each binding is independent; a miss here degrades only the views
/// that need that role.
pub fn resolve_roles(schema: &ColumnSchema) -> RoleBindings {
    let bindings = RoleBindings {
        revenue: find_column(&schema.numeric_columns, REVENUE_ALIASES),
        cost: find_column(&schema.numeric_columns, COST_ALIASES),
        gender: find_column(&schema.categorical_columns, GENDER_ALIASES),
        age: find_column(&schema.categorical_columns, AGE_ALIASES),
        customer: find_column(&schema.categorical_columns, CUSTOMER_ALIASES),
        date: find_column(&schema.categorical_columns, DATE_ALIASES),
        category: find_column(&schema.categorical_columns, CATEGORY_ALIASES),
    };

    debug!(
        bound = bindings.bound_count(),
        revenue = ?bindings.revenue,
        date = ?bindings.date,
        "resolved role bindings"
    );

    bindings
}
