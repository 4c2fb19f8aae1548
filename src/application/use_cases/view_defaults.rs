//! Canned fallback values for every view.
//!
//! Whenever inference is inconclusive (no data at all, or a role the
//! view needs stayed unbound), the view falls back to these literals.
//! They are the showcase numbers the dashboard shipped with, so a user
//! who uploads something unusable still sees a fully drawn dashboard.

use crate::domain::views::{
    AgeHistogram, CategorySlice, CustomerRanking, DashboardData, GenderSplit, KpiSummary,
    MonthlySeries, WeekdaySeries,
};
use once_cell::sync::Lazy;

pub const DEFAULT_REVENUE: f64 = 5_400_000.0;
pub const DEFAULT_COST: f64 = 3_100_000.0;
pub const DEFAULT_MARGIN: f64 = 42.18;

pub const DEFAULT_MALE_PCT: f64 = 51.47;
pub const DEFAULT_FEMALE_PCT: f64 = 48.53;

pub const AGE_BUCKET_LABELS: &[&str] = &["0-20", "21-30", "31-40", "41-50", "51+"];
const AGE_DEFAULT_DATA: &[f64] = &[41.2, 72.7, 421.5, 504.1, 598.0];

pub const MONTH_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHLY_DEFAULT_DATA: &[f64] = &[
    7.74, 7.74, 8.90, 8.40, 8.95, 7.95, 9.08, 8.27, 8.29, 8.37, 7.81, 0.0,
];

pub const WEEKDAY_LABELS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAY_DEFAULT_DATA: &[f64] = &[313.4, 324.3, 324.2, 313.6, 340.7, 319.6, 332.5];

const CUSTOMER_DEFAULT_LABELS: &[&str] = &[
    "John Brown",
    "Paul Nash",
    "Laura Gross",
    "Judith Simmons",
    "Kristine Barrett",
];
const CUSTOMER_DEFAULT_DATA: &[f64] = &[8.0, 8.0, 7.0, 7.0, 7.0];

const CATEGORY_DEFAULTS: &[(&str, f64)] = &[
    ("Mineral Water", 912.3),
    ("Espresso", 878.1),
    ("Green Tea", 805.6),
    ("Orange Juice", 744.9),
    ("Lemonade", 692.4),
    ("Iced Latte", 653.8),
    ("Smoothie", 601.2),
    ("Sparkling Soda", 548.7),
];

pub fn default_kpi() -> KpiSummary {
    KpiSummary {
        cogs: DEFAULT_COST,
        revenue: DEFAULT_REVENUE,
        profit: DEFAULT_REVENUE - DEFAULT_COST,
        profit_margin: DEFAULT_MARGIN,
    }
}

pub fn default_gender() -> GenderSplit {
    GenderSplit {
        male: DEFAULT_MALE_PCT,
        female: DEFAULT_FEMALE_PCT,
    }
}

pub fn default_age() -> AgeHistogram {
    AgeHistogram {
        labels: AGE_BUCKET_LABELS.iter().map(|s| s.to_string()).collect(),
        data: AGE_DEFAULT_DATA.to_vec(),
    }
}

pub fn default_customers() -> CustomerRanking {
    CustomerRanking {
        labels: CUSTOMER_DEFAULT_LABELS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        data: CUSTOMER_DEFAULT_DATA.to_vec(),
    }
}

pub fn default_trends() -> MonthlySeries {
    MonthlySeries {
        labels: MONTH_LABELS.iter().map(|s| s.to_string()).collect(),
        data: MONTHLY_DEFAULT_DATA.to_vec(),
    }
}

pub fn default_weekday() -> WeekdaySeries {
    WeekdaySeries {
        labels: WEEKDAY_LABELS.iter().map(|s| s.to_string()).collect(),
        data: WEEKDAY_DEFAULT_DATA.to_vec(),
    }
}

pub fn default_categories() -> Vec<CategorySlice> {
    CATEGORY_DEFAULTS
        .iter()
        .map(|(name, value)| CategorySlice {
            name: name.to_string(),
            value: *value,
        })
        .collect()
}

/// The complete fallback bundle returned for an empty dataset.
static DEFAULT_BUNDLE: Lazy<DashboardData> = Lazy::new(|| DashboardData {
    kpi: default_kpi(),
    gender: default_gender(),
    age: default_age(),
    customers: default_customers(),
    trends: default_trends(),
    weekday: default_weekday(),
    categories: default_categories(),
});

pub fn default_dashboard() -> DashboardData {
    DEFAULT_BUNDLE.clone()
}
