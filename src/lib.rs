// 三层架构：领域逻辑、应用配置、基础设施（日志）、展示
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

// 重新导出主要类型
pub use domain::{
    heap_permutations, permutations, recursive_permutations, search_directory, PermutationSet,
    SearchOptions, SearchReport, SearchTarget, Strategy,
};
pub use application::{ArgsError, Config, SearchInvocation};
pub use infrastructure::{ErrorLogger, ErrorType, Logger, LoggerTrait};
pub use presentation::{PermutationRun, SearchSummary};
