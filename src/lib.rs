//! vortex-analytics: schema inference and aggregation for the Vortex
//! dashboard.
//!
//! Takes an untyped tabular dataset (rows of unknown shape) and
//! produces the seven chart-ready views the dashboard draws: KPIs,
//! gender split, age histogram, top customers, monthly trend, weekday
//! breakdown, and category breakdown. Column meaning is inferred from
//! column names; anything that cannot be inferred degrades to canned
//! defaults view-by-view, never all-or-nothing.
//!
//! ```
//! use vortex_analytics::application::assemble_dashboard;
//! use vortex_analytics::infrastructure::ingest::dataset_from_json;
//!
//! let rows = dataset_from_json(r#"[{"customer": "Ada", "revenue": 1200}]"#).unwrap();
//! let dashboard = assemble_dashboard(&rows);
//! assert_eq!(dashboard.kpi.revenue, 1200.0);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::assemble_dashboard;
pub use domain::dataset::Row;
pub use domain::error::{EngineError, Result};
pub use domain::views::DashboardData;
