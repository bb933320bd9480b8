pub mod viewport_mapping;
pub mod wrap_index;
