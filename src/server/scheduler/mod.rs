pub mod data_retention;
