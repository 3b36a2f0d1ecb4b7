//! CSV format reading and writing operations.

mod read;
mod write;

pub use read::{read_regions_csv, read_regions_csv_string};
pub use write::{write_apportionment_csv, write_apportionment_csv_string, write_sweep_csv};
