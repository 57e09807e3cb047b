pub mod coordinate_mapper;
pub mod sample_columns;
