pub mod calculator;


pub use calculator::{AllocationResult, Calculator};
