// CLI Module - Main module file
// Command line surface for the attack tool

pub mod app;
pub mod tuples;

pub use app::run;
pub use tuples::{parse_tuples, TupleError};
