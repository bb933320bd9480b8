pub mod algorithm;
pub mod colour_table;
pub mod errors;
pub mod escape_time;
