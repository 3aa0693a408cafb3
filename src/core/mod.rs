pub mod clock;
pub mod employee;
