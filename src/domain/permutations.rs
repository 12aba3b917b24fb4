use std::collections::{HashMap, HashSet};
use std::fmt;

/// 排列生成算法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 前缀/剩余拆分的递归回溯
    Recursive,
    /// Heap 算法，非递归
    Heap,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Recursive => "递归",
            Strategy::Heap => "迭代 (Heap)",
        }
    }
}

/// 有序的排列结果
///
/// 每个元素都与输入拥有相同的字符多重集。保留重复时长度为 n!，
/// 去重后保持首次出现的顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermutationSet {
    items: Vec<String>,
}

impl PermutationSet {
    fn from_emitted(items: Vec<String>, include_duplicates: bool) -> Self {
        if include_duplicates {
            return Self { items };
        }

        let mut seen = HashSet::with_capacity(items.len());
        let items = items
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, permutation: &str) -> bool {
        self.items.iter().any(|p| p == permutation)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// 忽略顺序的集合视图，用于比较两种算法的结果
    pub fn to_set(&self) -> HashSet<&str> {
        self.items.iter().map(String::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a PermutationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// 以 `[AB, BA]` 的形式输出
impl fmt::Display for PermutationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.join(", "))
    }
}

/// 递归生成 `input` 的全部排列
///
/// 空输入返回空结果。`include_duplicates` 为 false 时去掉重复排列。
pub fn recursive_permutations(input: &str, include_duplicates: bool) -> PermutationSet {
    if input.is_empty() {
        return PermutationSet::default();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut emitted = Vec::new();
    let mut prefix = String::with_capacity(input.len());
    permute(&mut prefix, &chars, &mut emitted);

    PermutationSet::from_emitted(emitted, include_duplicates)
}

fn permute(prefix: &mut String, remaining: &[char], out: &mut Vec<String>) {
    if remaining.is_empty() {
        out.push(prefix.clone());
        return;
    }

    for i in 0..remaining.len() {
        let mut next = Vec::with_capacity(remaining.len() - 1);
        next.extend_from_slice(&remaining[..i]);
        next.extend_from_slice(&remaining[i + 1..]);

        prefix.push(remaining[i]);
        permute(prefix, &next, out);
        prefix.pop();
    }
}

/// Heap 算法的状态机，每次 `next` 产出一个排列
///
/// 先产出初始排列；之后在 `control[i] < i` 时按 `i` 的奇偶交换并产出，
/// 否则把 `control[i]` 清零并右移游标，游标到达 n 时结束。
#[derive(Debug, Clone)]
pub struct HeapPermutations {
    chars: Vec<char>,
    control: Vec<usize>,
    cursor: usize,
    started: bool,
}

impl HeapPermutations {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let control = vec![0; chars.len()];
        Self {
            chars,
            control,
            cursor: 0,
            started: false,
        }
    }

    fn current(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Iterator for HeapPermutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            return (!self.chars.is_empty()).then(|| self.current());
        }

        let n = self.chars.len();
        while self.cursor < n {
            let i = self.cursor;
            if self.control[i] < i {
                if i % 2 == 0 {
                    self.chars.swap(0, i);
                } else {
                    self.chars.swap(self.control[i], i);
                }
                self.control[i] += 1;
                self.cursor = 0;
                return Some(self.current());
            }

            self.control[i] = 0;
            self.cursor += 1;
        }

        None
    }
}

impl std::iter::FusedIterator for HeapPermutations {}

/// 用 Heap 算法（非递归）生成 `input` 的全部排列
pub fn heap_permutations(input: &str, include_duplicates: bool) -> PermutationSet {
    if input.is_empty() {
        return PermutationSet::default();
    }

    PermutationSet::from_emitted(HeapPermutations::new(input).collect(), include_duplicates)
}

/// 按算法分派
pub fn permutations(input: &str, strategy: Strategy, include_duplicates: bool) -> PermutationSet {
    match strategy {
        Strategy::Recursive => recursive_permutations(input, include_duplicates),
        Strategy::Heap => heap_permutations(input, include_duplicates),
    }
}

/// 输入可能缺失时使用；`None` 与空字符串一样返回空结果
pub fn permutations_of(
    input: Option<&str>,
    strategy: Strategy,
    include_duplicates: bool,
) -> PermutationSet {
    input
        .map(|s| permutations(s, strategy, include_duplicates))
        .unwrap_or_default()
}

/// 预期的排列数：n!，去重时为 n! / ∏(kᵢ!)
///
/// 空输入为 0；溢出时返回 `None`。
pub fn expected_count(input: &str, include_duplicates: bool) -> Option<u128> {
    let n = input.chars().count();
    if n == 0 {
        return Some(0);
    }

    let total = factorial(n)?;
    if include_duplicates {
        return Some(total);
    }

    let mut repeats: HashMap<char, usize> = HashMap::new();
    for ch in input.chars() {
        *repeats.entry(ch).or_insert(0) += 1;
    }

    repeats
        .values()
        .try_fold(total, |acc, &k| factorial(k).map(|f| acc / f))
}

fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}
