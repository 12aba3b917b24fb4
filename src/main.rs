use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use recursive_toolkit::application::{Config, SearchInvocation};
use recursive_toolkit::domain::{search_directory, SearchOptions};
use recursive_toolkit::infrastructure::{ErrorLogger, Logger, LoggerTrait};
use recursive_toolkit::presentation::{print_match, SearchSummary};

/// 在目录及其所有子目录中查找并统计指定文件名
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// <目录> <文件名>... <是否区分大小写 true/false>
    #[clap(required = true, num_args = 3.., value_name = "DIR FILE... CASE_SENSITIVE")]
    positional: Vec<String>,

    /// 配置文件路径（默认读取程序目录下的 config.toml）
    #[clap(long)]
    config: Option<PathBuf>,

    /// 启用详细日志记录，日志文件写入配置的 log_dir
    #[clap(long)]
    log: bool,

    /// 遵循 .gitignore 规则，默认情况下会搜索所有文件
    #[clap(long)]
    respect_gitignore: bool,

    /// 跟随符号链接
    #[clap(long)]
    follow_links: bool,

    /// 不显示进度
    #[clap(long)]
    no_progress: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let invocation = SearchInvocation::from_positional(&args.positional)?;

    let config = Config::load(args.config.as_deref())?;
    let logger = Logger::new(args.log, config.log_dir())?;
    let errors = ErrorLogger::new(args.log, config.log_dir())?;

    let options = SearchOptions {
        case_sensitive: invocation.case_sensitive,
        respect_gitignore: args.respect_gitignore || config.search.respect_gitignore,
        follow_links: args.follow_links || config.search.follow_links,
        show_progress: !args.no_progress && config.search.show_progress,
    };

    println!(
        "在 {} 中搜索: {}",
        invocation.directory.display(),
        invocation.targets.join(", ")
    );
    println!("区分大小写: {}", options.case_sensitive);
    println!("遵循 .gitignore 规则: {}", options.respect_gitignore);
    println!();

    if logger.is_enabled() {
        logger.log_message(&format!("目标目录: {}", invocation.directory.display()))?;
        logger.log_message(&format!("目标文件: {}", invocation.targets.join(", ")))?;
        logger.log_message(&format!("区分大小写: {}", options.case_sensitive))?;
        logger.log_message(&format!("跟随符号链接: {}", options.follow_links))?;
        logger.log_message(&format!("遵循 .gitignore 规则: {}", options.respect_gitignore))?;
    }

    if !invocation.directory.is_dir() {
        println!("警告: 无效的目录路径 - {}", invocation.directory.display());
    }

    let start_time = Instant::now();
    let report = search_directory(
        &invocation.directory,
        &invocation.targets,
        &options,
        &logger,
        &errors,
        |found| print_match(&mut io::stdout().lock(), found),
    )?;
    let duration = start_time.elapsed();

    let mut stdout = io::stdout().lock();
    SearchSummary::new(&report, duration).write_to(&mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    errors.print_error_summary();
    errors.finalize()?;

    let mut stats: Vec<(&str, String)> = report
        .targets
        .iter()
        .map(|t| (t.name.as_str(), t.count.to_string()))
        .collect();
    stats.push(("扫描文件数", report.files_scanned.to_string()));
    stats.push(("无法读取", report.unreadable.to_string()));
    logger.finalize("搜索", &stats, duration)?;

    Ok(())
}
