pub mod display;

pub use display::{
    format_duration, format_millis, print_match, print_permutation_run, PermutationRun, SearchSummary,
};
