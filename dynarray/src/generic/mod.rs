pub mod dynamic_array;
pub mod growth;
pub mod sequence;
pub mod static_array;
