use serde::{Deserialize, Serialize};

use crate::utils::freq::rank_by_count;

/// 单篇论文记录
///
/// 字段均为页面展示的原始文本，顺序与页面展示一致，后续分析不重排
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// 论文标题
    pub title: String,
    /// 详情链接（如有）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// 页面展示的作者串（逗号分隔）
    pub raw_author_field: String,
    /// 引用数文本（已去除内嵌换行）
    pub citation_count: String,
    /// 年份原始文本，只有全数字时才参与年度统计
    pub year: String,
    /// 发表载体
    pub venue: String,
}

impl PublicationRecord {
    /// 解析年份，仅接受全数字的正整数，否则不参与年度聚合
    pub fn parsed_year(&self) -> Option<i32> {
        let y = self.year.trim();
        if y.is_empty() || !y.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match y.parse::<i32>() {
            Ok(v) if v > 0 => Some(v),
            _ => None,
        }
    }
}

/// 从页面平行读取的原始数据列
///
/// 同一下标对应同一篇论文，长度必须一致
#[derive(Debug, Clone, Default)]
pub struct RawColumns {
    pub titles: Vec<String>,
    pub links: Vec<String>,
    pub authors: Vec<String>,
    pub citations: Vec<String>,
    pub years: Vec<String>,
    pub venues: Vec<String>,
}

/// 每年发表数量统计
///
/// 只统计年份合法的记录；按数量降序排列，数量相同按首次出现顺序
pub fn pub_count_by_year(publications: &[PublicationRecord]) -> Vec<(String, u32)> {
    let years = publications
        .iter()
        .filter_map(|p| p.parsed_year())
        .map(|y| y.to_string());
    rank_by_count(years, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str) -> PublicationRecord {
        PublicationRecord {
            title: String::new(),
            link: None,
            raw_author_field: String::new(),
            citation_count: String::new(),
            year: year.to_string(),
            venue: String::new(),
        }
    }

    #[test]
    fn test_parsed_year() {
        assert_eq!(record("2019").parsed_year(), Some(2019));
        assert_eq!(record(" 2019 ").parsed_year(), Some(2019));
        assert_eq!(record("").parsed_year(), None);
        assert_eq!(record("n.d.").parsed_year(), None);
        assert_eq!(record("-2019").parsed_year(), None);
        assert_eq!(record("0").parsed_year(), None);
    }

    #[test]
    fn test_pub_count_by_year_skips_invalid() {
        let pubs = vec![
            record("2020"),
            record("2019"),
            record("2020"),
            record(""),
            record("forthcoming"),
        ];
        let counted = pub_count_by_year(&pubs);
        assert_eq!(
            counted,
            vec![("2020".to_string(), 2), ("2019".to_string(), 1)]
        );
    }
}
