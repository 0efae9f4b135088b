//! 频率统计工具
//!
//! 各分析器共用的计数与排序逻辑

use std::collections::HashMap;
use std::hash::Hash;

/// 统计元素出现次数并按频率降序排列
///
/// 频率相同的元素按首次出现顺序排列（稳定排序，不按内容比较）。
/// `most_common` 给出时只保留前 N 条。
pub fn rank_by_count<T, I>(items: I, most_common: Option<usize>) -> Vec<(T, u32)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (u32, usize)> = HashMap::new();
    for (idx, item) in items.into_iter().enumerate() {
        let entry = counts.entry(item).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut ranked: Vec<(T, u32, usize)> = counts
        .into_iter()
        .map(|(item, (count, first_seen))| (item, count, first_seen))
        .collect();
    // 频率降序，频率相同按首次出现顺序
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let mut result: Vec<(T, u32)> = ranked.into_iter().map(|(item, count, _)| (item, count)).collect();
    if let Some(n) = most_common {
        result.truncate(n);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_by_count_orders_by_frequency() {
        let items = vec!["b", "a", "a", "c", "a", "b"];
        let ranked = rank_by_count(items, None);
        assert_eq!(ranked, vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        // deep 和 learning 都出现 2 次，x 在 y 之前首次出现
        let items = vec!["deep", "learning", "x", "deep", "learning", "y", "work"];
        let ranked = rank_by_count(items, Some(3));
        assert_eq!(ranked, vec![("deep", 2), ("learning", 2), ("x", 1)]);
    }

    #[test]
    fn test_truncation() {
        let items = vec![1, 1, 2, 3];
        let ranked = rank_by_count(items, Some(1));
        assert_eq!(ranked, vec![(1, 2)]);
    }
}
