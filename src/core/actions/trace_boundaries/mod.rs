pub mod trace_boundaries;
