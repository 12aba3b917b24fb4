use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{PermutationSet, SearchMatch, SearchReport, Strategy};

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 以毫秒显示，保留四位小数
pub fn format_millis(duration: Duration) -> String {
    format!("{:.4} ms", duration.as_secs_f64() * 1000.0)
}

/// 输出一条匹配
pub fn print_match<W: Write>(out: &mut W, found: &SearchMatch) -> Result<()> {
    writeln!(out, "Found: {}", found.path.display())?;
    Ok(())
}

/// 搜索摘要
pub struct SearchSummary<'a> {
    pub report: &'a SearchReport,
    pub elapsed: Duration,
}

impl<'a> SearchSummary<'a> {
    pub fn new(report: &'a SearchReport, elapsed: Duration) -> Self {
        Self { report, elapsed }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n搜索摘要:")?;
        writeln!(out, "----------------------------")?;
        for target in &self.report.targets {
            writeln!(out, "{} 找到 {} 次", target.name, target.count)?;
        }
        writeln!(out, "----------------------------")?;
        writeln!(out, "扫描文件: {}", self.report.files_scanned)?;
        writeln!(out, "扫描目录: {}", self.report.directories)?;
        if self.report.unreadable > 0 {
            writeln!(out, "无法读取: {}", self.report.unreadable)?;
        }
        writeln!(out, "总用时: {}", format_duration(self.elapsed))?;
        Ok(())
    }
}

/// 一种算法的一次运行结果
pub struct PermutationRun {
    pub strategy: Strategy,
    pub result: PermutationSet,
    pub elapsed: Duration,
}

/// 依次输出每种算法的排列列表和数量，最后输出各自耗时
pub fn print_permutation_run<W: Write>(
    out: &mut W,
    runs: &[PermutationRun],
    expected: Option<u128>,
    print_results: bool,
) -> Result<()> {
    for run in runs {
        writeln!(out, "\n{}排列 ({}):", run.strategy.as_str(), run.result.len())?;
        if print_results {
            writeln!(out, "{}", run.result)?;
        }
    }

    if let Some(expected) = expected {
        writeln!(out, "\n预期数量: {}", expected)?;
    }

    writeln!(out)?;
    for run in runs {
        writeln!(out, "{}用时: {}", run.strategy.as_str(), format_millis(run.elapsed))?;
    }

    Ok(())
}
