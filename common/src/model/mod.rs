pub mod employee;
pub mod statistics;
