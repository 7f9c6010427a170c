//! Wire models shared between the service and its clients

pub mod employee;

pub use employee::Employee;
