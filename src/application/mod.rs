pub mod args;
pub mod config;

pub use args::{parse_flag_lenient, parse_flag_strict, validate_permutation_input, ArgsError, SearchInvocation};
pub use config::Config;
