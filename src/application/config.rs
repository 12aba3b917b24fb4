use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用程序配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 文件搜索相关配置
    pub search: SearchConfig,
    /// 排列生成相关配置
    pub permutations: PermutationConfig,
    /// 日志相关配置
    pub logging: LoggingConfig,
}

/// 文件搜索配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 是否遵循 .gitignore 规则
    pub respect_gitignore: bool,
    /// 是否跟随符号链接
    pub follow_links: bool,
    /// 是否显示进度
    pub show_progress: bool,
}

/// 排列生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermutationConfig {
    /// 允许的最大输入长度（n! 增长极快）
    pub max_input_length: usize,
    /// 是否打印完整的排列列表
    pub print_results: bool,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志文件目录
    pub log_dir: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            follow_links: false,
            show_progress: true,
        }
    }
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self {
            max_input_length: 10,
            print_results: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: ".".to_string(),
        }
    }
}

impl Config {
    /// 按优先级加载配置：显式指定的文件、程序目录下的 config.toml、默认值
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.is_file() => Self::load_from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(config)
    }

    /// 获取配置文件的默认路径
    pub fn default_config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe()
            .context("无法获取程序路径")?;

        let exe_dir = exe_path.parent()
            .context("无法获取程序目录")?;

        Ok(exe_dir.join("config.toml"))
    }

    pub fn log_dir(&self) -> &Path {
        Path::new(&self.logging.log_dir)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.permutations.max_input_length == 0 {
            anyhow::bail!("max_input_length 不能为 0");
        }

        if self.permutations.max_input_length > 12 {
            anyhow::bail!("max_input_length 不能超过 12");
        }

        if self.logging.log_dir.trim().is_empty() {
            anyhow::bail!("log_dir 不能为空");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.search.respect_gitignore);
        assert!(!config.search.follow_links);
        assert_eq!(config.permutations.max_input_length, 10);
        assert_eq!(config.log_dir(), Path::new("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[permutations]\nmax_input_length = 8\n\n[search]\nfollow_links = true\n",
        )
        .unwrap();

        let config = Config::load(Some(config_path.as_path())).unwrap();
        assert_eq!(config.permutations.max_input_length, 8);
        assert!(config.permutations.print_results);
        assert!(config.search.follow_links);
        assert_eq!(config.logging.log_dir, ".");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        assert!(Config::load(Some(temp_dir.path().join("missing.toml").as_path())).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.permutations.max_input_length = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.permutations.max_input_length = 13;
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.log_dir = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
