use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use regex::{Regex, RegexBuilder};

use crate::infrastructure::{ErrorLogger, ErrorType, LoggerTrait};

/// 搜索选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// 文件名比较是否区分大小写
    pub case_sensitive: bool,
    /// 是否遵循 .gitignore / .ignore 规则，默认搜索所有文件
    pub respect_gitignore: bool,
    /// 是否跟随符号链接
    pub follow_links: bool,
    /// 是否在 stderr 显示进度
    pub show_progress: bool,
}

impl SearchOptions {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            respect_gitignore: false,
            follow_links: false,
            show_progress: false,
        }
    }
}

/// 目标文件名及其匹配次数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    pub name: String,
    pub count: u64,
}

impl SearchTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: 0,
        }
    }
}

/// 一次匹配：命中的目标名和文件绝对路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub target: String,
    pub path: PathBuf,
}

/// 一次搜索的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// 按输入顺序排列的目标，重复的名字只保留第一次出现
    pub targets: Vec<SearchTarget>,
    /// 检查过的普通文件数
    pub files_scanned: u64,
    /// 进入过的目录数（包括根目录）
    pub directories: u64,
    /// 无法读取的条目数
    pub unreadable: u64,
}

impl SearchReport {
    /// 为一组目标名创建全部为零的结果
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut targets: Vec<SearchTarget> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !targets.iter().any(|t| t.name == name) {
                targets.push(SearchTarget::new(name));
            }
        }

        Self {
            targets,
            ..Self::default()
        }
    }

    /// 某个目标的匹配次数
    pub fn count_for(&self, name: &str) -> Option<u64> {
        self.targets.iter().find(|t| t.name == name).map(|t| t.count)
    }

    /// 所有目标的匹配总数
    pub fn total_matches(&self) -> u64 {
        self.targets.iter().map(|t| t.count).sum()
    }
}

/// 文件名匹配器：整名匹配，可选忽略大小写（Unicode 简单大小写折叠）
#[derive(Debug, Clone)]
pub struct NameMatcher {
    regex: Regex,
}

impl NameMatcher {
    pub fn new(name: &str, case_sensitive: bool) -> Result<Self> {
        let pattern = format!("^{}$", regex::escape(name));
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .with_context(|| format!("无法创建文件名匹配器: {}", name))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

/// 将一个文件名与所有目标比较，命中的目标计数加一，返回命中目标的下标
fn record_matches(
    targets: &mut [SearchTarget],
    matchers: &[NameMatcher],
    file_name: &str,
) -> Vec<usize> {
    let mut hits = Vec::new();
    for (index, (target, matcher)) in targets.iter_mut().zip(matchers).enumerate() {
        if matcher.matches(file_name) {
            target.count += 1;
            hits.push(index);
        }
    }
    hits
}

fn build_progress(show: bool) -> Result<ProgressBar> {
    if !show {
        return Ok(ProgressBar::hidden());
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("无效的进度条模板")?,
    );
    progress.set_message("已扫描 0 文件");
    Ok(progress)
}

/// 深度优先遍历 `root`，统计每个目标文件名出现的次数
///
/// 根路径不存在或不是目录时，所有目标计数为零且不报错；无法读取的子目录
/// 视为空目录。每次匹配都会以文件绝对路径调用 `on_match`，回调返回的错误
/// 会直接向上传递。
pub fn search_directory<S, F>(
    root: &Path,
    names: &[S],
    options: &SearchOptions,
    logger: &dyn LoggerTrait,
    errors: &ErrorLogger,
    mut on_match: F,
) -> Result<SearchReport>
where
    S: AsRef<str>,
    F: FnMut(&SearchMatch) -> Result<()>,
{
    let mut report = SearchReport::new(names);
    let matchers = report
        .targets
        .iter()
        .map(|t| NameMatcher::new(&t.name, options.case_sensitive))
        .collect::<Result<Vec<_>>>()?;

    if !root.is_dir() {
        if logger.is_enabled() {
            let _ = logger.log_entry(root, "根路径不存在或不是目录");
        }
        errors.log_error(ErrorType::InvalidRoot, Some(root), "根路径不存在或不是目录")?;
        return Ok(report);
    }

    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    if logger.is_enabled() {
        logger.log_message(&format!("开始扫描目录: {}", root.display()))?;
    }

    let progress = build_progress(options.show_progress)?;

    let mut builder = WalkBuilder::new(&root);
    builder
        .hidden(false)
        .follow_links(options.follow_links)
        .parents(options.respect_gitignore)
        .ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_ignore(options.respect_gitignore)
        .git_exclude(options.respect_gitignore);

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                report.unreadable += 1;
                if logger.is_enabled() {
                    let _ = logger.log_message(&format!("遍历错误: {}", err));
                }
                errors.log_error(ErrorType::DirectoryRead, None, &err.to_string())?;
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            report.directories += 1;
            continue;
        }
        // 不跟随链接时，指向普通文件的符号链接也算文件，但不进入链接目录
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        report.files_scanned += 1;
        if report.files_scanned % 100 == 0 {
            progress.set_message(format!("已扫描 {} 文件", report.files_scanned));
            progress.tick();
        }

        // 非 UTF-8 文件名不可能等于任何目标名
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };

        for index in record_matches(&mut report.targets, &matchers, file_name) {
            let found = SearchMatch {
                target: report.targets[index].name.clone(),
                path: entry.path().to_path_buf(),
            };

            if logger.is_enabled() {
                let _ = logger.log_entry(&found.path, &format!("匹配 {}", found.target));
            }

            progress.suspend(|| on_match(&found))?;
        }
    }

    progress.finish_and_clear();

    if logger.is_enabled() {
        logger.log_message(&format!(
            "扫描结束: {} 文件, {} 目录, {} 个无法读取",
            report.files_scanned, report.directories, report.unreadable
        ))?;
    }

    Ok(report)
}
