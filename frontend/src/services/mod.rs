//! HTTP access to the employee backend.

pub mod employee_service;
pub mod error;
