mod csv_loader;
mod json_loader;

pub use csv_loader::CsvLoader;
pub use json_loader::{dataset_from_json, dataset_from_value};
