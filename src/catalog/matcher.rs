//! 标题相似度计算
//!
//! 归一化编辑距离：`1 - lev(a, b) / max(len(a), len(b))`，按字符比较，
//! 大小写敏感。值域 0.0 - 1.0，两个空串视为完全相同。

/// 计算两个字符串的相似度（0.0 - 1.0）
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    1.0 - distance as f64 / a.len().max(b.len()) as f64
}

/// 两行滚动数组的 Levenshtein 编辑距离
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = if ca == cb { diagonal } else { diagonal + 1 };
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }

    row[b.len()]
}
