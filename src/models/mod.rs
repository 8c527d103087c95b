pub mod city;
pub mod csv_models;
pub mod filter;
pub mod trip;
