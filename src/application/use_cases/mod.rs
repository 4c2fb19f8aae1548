pub mod age_histogram;
pub mod bubble_scatter;
pub mod cash_flow_forecast;
pub mod category_aggregator;
pub mod column_classifier;
pub mod customer_ranking;
pub mod dashboard_assembler;
pub mod dataset_profiler;
pub mod demographic_aggregator;
pub mod kpi_aggregator;
pub mod role_resolver;
pub mod summary_stats;
pub mod temporal_aggregator;
pub mod view_defaults;
