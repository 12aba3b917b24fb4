pub mod file_search;
pub mod permutations;

pub use file_search::{search_directory, NameMatcher, SearchMatch, SearchOptions, SearchReport, SearchTarget};
pub use permutations::{
    expected_count, heap_permutations, permutations, permutations_of, recursive_permutations,
    HeapPermutations, PermutationSet, Strategy,
};
