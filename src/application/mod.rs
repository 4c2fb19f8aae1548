pub mod use_cases;

pub use use_cases::dashboard_assembler::assemble_dashboard;
pub use use_cases::dataset_profiler::profile_dataset;
