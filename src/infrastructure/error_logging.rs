use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;

/// 错误类型分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// 目录无法读取（权限不足等）
    DirectoryRead,
    /// 搜索根路径不存在或不是目录
    InvalidRoot,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DirectoryRead => "目录读取",
            ErrorType::InvalidRoot => "无效根目录",
        }
    }
}

/// 错误日志记录器
///
/// 统计始终进行；只有启用时才写入 `error_<时间戳>.log`。
pub struct ErrorLogger {
    error_file: Arc<Mutex<Option<File>>>,
    error_path: PathBuf,
    enabled: bool,
    error_counts: Arc<Mutex<HashMap<ErrorType, usize>>>,
}

impl ErrorLogger {
    /// 创建新的错误日志记录器
    pub fn new(enabled: bool, log_dir: &Path) -> Result<Self> {
        if !enabled {
            return Ok(Self {
                error_file: Arc::new(Mutex::new(None)),
                error_path: PathBuf::new(),
                enabled: false,
                error_counts: Arc::new(Mutex::new(HashMap::new())),
            });
        }

        let now = Local::now();
        let timestamp = now.format("%Y%m%d_%H%M%S");

        let error_path = log_dir.join(format!("error_{}.log", timestamp));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&error_path)
            .with_context(|| format!("无法创建错误日志文件: {}", error_path.display()))?;

        let mut file_clone = file.try_clone()?;
        file_clone.write_all(&[0xEF, 0xBB, 0xBF])?; // UTF-8 BOM

        writeln!(file_clone, "# RecursiveToolkit 错误日志")?;
        writeln!(file_clone, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file_clone, "# ============================================")?;
        writeln!(file_clone)?;

        Ok(Self {
            error_file: Arc::new(Mutex::new(Some(file))),
            error_path,
            enabled: true,
            error_counts: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// 记录错误
    pub fn log_error(
        &self,
        error_type: ErrorType,
        path: Option<&Path>,
        message: &str,
    ) -> Result<()> {
        if let Ok(mut counts) = self.error_counts.lock() {
            *counts.entry(error_type).or_insert(0) += 1;
        }

        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if let Ok(mut file_guard) = self.error_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "[{}] {} - {}", timestamp, error_type.as_str(), message)?;
                if let Some(path) = path {
                    writeln!(file, "  路径: {}", path.display())?;
                }
                writeln!(file)?;
                file.flush()?;
            }
        }

        Ok(())
    }

    /// 获取错误统计信息
    pub fn get_error_summary(&self) -> HashMap<ErrorType, usize> {
        if let Ok(counts) = self.error_counts.lock() {
            counts.clone()
        } else {
            HashMap::new()
        }
    }

    /// 获取总错误数
    pub fn get_total_errors(&self) -> usize {
        if let Ok(counts) = self.error_counts.lock() {
            counts.values().sum()
        } else {
            0
        }
    }

    pub fn has_errors(&self) -> bool {
        self.get_total_errors() > 0
    }

    /// 完成错误日志记录
    pub fn finalize(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Ok(mut file_guard) = self.error_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "# ============================================")?;
                writeln!(file, "# 结束时间: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;

                let summary = self.get_error_summary();
                if summary.is_empty() {
                    writeln!(file, "# 无错误记录")?;
                } else {
                    writeln!(file, "# 错误统计:")?;
                    for (error_type, count) in &summary {
                        writeln!(file, "#   {}: {} 次", error_type.as_str(), count)?;
                    }
                    writeln!(file, "#   总计: {} 个错误", self.get_total_errors())?;
                }

                file.flush()?;
            }
        }

        Ok(())
    }

    /// 打印错误摘要到控制台
    pub fn print_error_summary(&self) {
        if !self.has_errors() {
            return;
        }

        println!("\n⚠️  搜索过程中发现错误:");
        println!("----------------------------");

        for (error_type, count) in &self.get_error_summary() {
            println!("  {}: {} 次", error_type.as_str(), count);
        }

        println!("  总计: {} 个错误", self.get_total_errors());
        if self.enabled {
            println!("  详细错误信息请查看: {}", self.error_path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_error_logger_creation() {
        let dir = tempdir().unwrap();
        let logger = ErrorLogger::new(false, dir.path()).unwrap();
        assert_eq!(logger.get_total_errors(), 0);
        assert!(!logger.has_errors());
    }

    #[test]
    fn test_error_logging() {
        let dir = tempdir().unwrap();
        let logger = ErrorLogger::new(true, dir.path()).unwrap();

        logger
            .log_error(ErrorType::DirectoryRead, Some(Path::new("/root/secret")), "权限不足")
            .unwrap();
        logger.finalize().unwrap();

        assert_eq!(logger.get_total_errors(), 1);
        let summary = logger.get_error_summary();
        assert_eq!(summary.get(&ErrorType::DirectoryRead), Some(&1));

        let content = std::fs::read_to_string(&logger.error_path).unwrap();
        assert!(content.contains("/root/secret"));
        assert!(content.contains("目录读取: 1 次"));
    }

    #[test]
    fn test_disabled_logger_still_counts() {
        let dir = tempdir().unwrap();
        let logger = ErrorLogger::new(false, dir.path()).unwrap();
        logger.log_error(ErrorType::InvalidRoot, None, "不存在").unwrap();
        assert!(logger.has_errors());
    }

    #[test]
    fn test_error_types() {
        assert_eq!(ErrorType::DirectoryRead.as_str(), "目录读取");
        assert_eq!(ErrorType::InvalidRoot.as_str(), "无效根目录");
    }
}
