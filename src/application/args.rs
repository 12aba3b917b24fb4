use std::path::PathBuf;

use thiserror::Error;

/// 命令行输入错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("参数不足: 需要 <目录> <文件名>... <是否区分大小写>，实际只有 {0} 个")]
    TooFewArguments(usize),

    #[error("无效的布尔值: {0:?}（应为 true 或 false）")]
    InvalidBoolean(String),

    #[error("输入字符串不能为空")]
    EmptyInput,

    #[error("输入过长: {len} 个字符，最多允许 {max} 个")]
    InputTooLong { len: usize, max: usize },
}

/// 文件搜索的位置参数：目录、一个或多个文件名、末尾的大小写开关
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInvocation {
    pub directory: PathBuf,
    pub targets: Vec<String>,
    pub case_sensitive: bool,
}

impl SearchInvocation {
    pub fn from_positional(args: &[String]) -> Result<Self, ArgsError> {
        let [directory, targets @ .., flag] = args else {
            return Err(ArgsError::TooFewArguments(args.len()));
        };
        if targets.is_empty() {
            return Err(ArgsError::TooFewArguments(args.len()));
        }

        Ok(Self {
            directory: PathBuf::from(directory),
            targets: targets.to_vec(),
            case_sensitive: parse_flag_lenient(flag),
        })
    }
}

/// 宽松解析：忽略大小写等于 "true" 为真，其余一律为假
pub fn parse_flag_lenient(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// 严格解析：只接受 true / false（忽略大小写）
pub fn parse_flag_strict(value: &str) -> Result<bool, ArgsError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ArgsError::InvalidBoolean(trimmed.to_string()))
    }
}

/// 检查排列输入：非空且不超过 `max_len` 个字符
pub fn validate_permutation_input(input: &str, max_len: usize) -> Result<&str, ArgsError> {
    if input.is_empty() {
        return Err(ArgsError::EmptyInput);
    }

    let len = input.chars().count();
    if len > max_len {
        return Err(ArgsError::InputTooLong { len, max: max_len });
    }

    Ok(input)
}
