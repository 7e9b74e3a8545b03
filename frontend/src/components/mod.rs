pub mod dashboard;
pub mod employees;
pub mod helpers;
pub mod layout;
