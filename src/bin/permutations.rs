use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use recursive_toolkit::application::{parse_flag_strict, validate_permutation_input, Config};
use recursive_toolkit::domain::{expected_count, permutations, Strategy};
use recursive_toolkit::infrastructure::{Logger, LoggerTrait};
use recursive_toolkit::presentation::{print_permutation_run, PermutationRun};

/// 生成字符串的全部排列，比较递归与 Heap 迭代两种算法
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// 要生成排列的字符串（省略时从标准输入读取）
    input: Option<String>,

    /// 是否包含重复排列 true/false（省略时从标准输入读取）
    #[clap(long, value_parser = parse_flag_strict)]
    include_duplicates: Option<bool>,

    /// 配置文件路径（默认读取程序目录下的 config.toml）
    #[clap(long)]
    config: Option<PathBuf>,

    /// 启用详细日志记录，日志文件写入配置的 log_dir
    #[clap(long)]
    log: bool,
}

/// 输出提示并读取一行，去掉行尾换行；EOF 返回空串
fn prompt_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    reader.read_line(&mut line).context("无法读取标准输入")?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let logger = Logger::new(args.log, config.log_dir())?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let raw_input = match args.input {
        Some(input) => input,
        None => prompt_line(&mut reader, "请输入字符串: ")?,
    };

    let input = match validate_permutation_input(&raw_input, config.permutations.max_input_length) {
        Ok(input) => input,
        Err(err) => {
            println!("错误: {}", err);
            return Ok(());
        }
    };

    let include_duplicates = match args.include_duplicates {
        Some(flag) => flag,
        None => {
            let answer = prompt_line(&mut reader, "是否包含重复排列? (true/false): ")?;
            parse_flag_strict(&answer)?
        }
    };

    if logger.is_enabled() {
        logger.log_message(&format!("输入: {}", input))?;
        logger.log_message(&format!("包含重复排列: {}", include_duplicates))?;
    }

    let total_start = Instant::now();
    let mut runs = Vec::with_capacity(2);
    for strategy in [Strategy::Recursive, Strategy::Heap] {
        let start = Instant::now();
        let result = permutations(input, strategy, include_duplicates);
        let elapsed = start.elapsed();

        if logger.is_enabled() {
            logger.log_message(&format!(
                "{}: {} 个排列, 用时 {:?}",
                strategy.as_str(),
                result.len(),
                elapsed
            ))?;
        }

        runs.push(PermutationRun {
            strategy,
            result,
            elapsed,
        });
    }

    let expected = expected_count(input, include_duplicates);
    print_permutation_run(
        &mut io::stdout().lock(),
        &runs,
        expected,
        config.permutations.print_results,
    )?;

    let stats: Vec<(&str, String)> = runs
        .iter()
        .map(|run| (run.strategy.as_str(), run.result.len().to_string()))
        .collect();
    logger.finalize("排列生成", &stats, total_start.elapsed())?;

    Ok(())
}
