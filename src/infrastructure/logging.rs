use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

/// 日志记录器trait
pub trait LoggerTrait: Send + Sync {
    fn is_enabled(&self) -> bool;
    fn log_message(&self, message: &str) -> Result<()>;
    fn log_entry(&self, path: &Path, status: &str) -> Result<()>;
    fn finalize(&self, title: &str, stats: &[(&str, String)], duration: Duration) -> Result<()>;
}

/// 调试日志记录器（记录运行参数、遍历过程和结果统计）
pub struct Logger {
    log_file: Arc<Mutex<Option<File>>>,
    log_path: PathBuf,
    enabled: bool,
}

impl Logger {
    /// 创建新的日志记录器，日志文件写入 `log_dir`
    pub fn new(enabled: bool, log_dir: &Path) -> Result<Self> {
        if !enabled {
            return Ok(Self::disabled());
        }

        let now = Local::now();
        let timestamp = now.format("%Y%m%d_%H%M%S");

        let log_path = log_dir.join(format!("debug_{}.log", timestamp));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("无法创建日志文件: {}", log_path.display()))?;

        let mut file_clone = file.try_clone()?;
        file_clone.write_all(&[0xEF, 0xBB, 0xBF])?; // UTF-8 BOM

        writeln!(file_clone, "# RecursiveToolkit 调试日志")?;
        writeln!(file_clone, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file_clone, "# --------------------------------------------")?;

        Ok(Self {
            log_file: Arc::new(Mutex::new(Some(file))),
            log_path,
            enabled: true,
        })
    }

    /// 不写任何文件的记录器
    pub fn disabled() -> Self {
        Self {
            log_file: Arc::new(Mutex::new(None)),
            log_path: PathBuf::new(),
            enabled: false,
        }
    }

    /// 获取日志文件路径
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn write_line(&self, line: &str) -> Result<()> {
        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "{}", line)?;
                file.flush()?;
            }
        }
        Ok(())
    }
}

impl LoggerTrait for Logger {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn log_message(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        self.write_line(&format!("[{}] {}", timestamp, message))
    }

    fn log_entry(&self, path: &Path, status: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        self.write_line(&format!(
            "[{}] 路径: {} | 状态: {}",
            timestamp,
            path.display(),
            status
        ))
    }

    fn finalize(&self, title: &str, stats: &[(&str, String)], duration: Duration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = Local::now();
        self.write_line("# --------------------------------------------")?;
        self.write_line(&format!("# {}完成时间: {}", title, now.format("%Y-%m-%d %H:%M:%S")))?;
        self.write_line(&format!("# 总用时: {:.3}秒", duration.as_secs_f64()))?;
        for (label, value) in stats {
            self.write_line(&format!("# {}: {}", label, value))?;
        }
        self.write_line("# ============================================")?;

        println!("完整日志已保存到: {}", self.log_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logger_creation() {
        let dir = tempdir().unwrap();

        let logger = Logger::new(false, dir.path()).unwrap();
        assert!(!logger.is_enabled());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        let logger = Logger::new(true, dir.path()).unwrap();
        assert!(logger.is_enabled());
        assert!(logger.log_path().starts_with(dir.path()));
    }

    #[test]
    fn test_logger_writes_messages() {
        let dir = tempdir().unwrap();
        let logger = Logger::new(true, dir.path()).unwrap();
        let logger_trait: &dyn LoggerTrait = &logger;

        logger_trait.log_message("开始搜索").unwrap();
        logger_trait.log_entry(Path::new("/tmp/a.txt"), "匹配").unwrap();
        logger_trait
            .finalize("搜索", &[("匹配总数", "3".to_string())], Duration::from_millis(5))
            .unwrap();

        let content = std::fs::read_to_string(logger.log_path()).unwrap();
        assert!(content.contains("开始搜索"));
        assert!(content.contains("/tmp/a.txt"));
        assert!(content.contains("# 匹配总数: 3"));
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = Logger::disabled();
        assert!(logger.log_message("ignored").is_ok());
        assert_eq!(logger.log_path(), Path::new(""));
    }
}
