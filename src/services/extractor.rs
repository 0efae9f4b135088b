//! 论文记录抽取服务 - 业务能力层
//!
//! 把平行数据列组装为结构化的论文记录。
//! 列长度不一致是数据完整性错误，必须显式报出，绝不按最短列静默截断。

use crate::error::{AppError, AppResult, ExtractError};
use crate::models::{PublicationRecord, RawColumns};

/// 论文记录抽取服务
pub struct RecordExtractor;

impl RecordExtractor {
    /// 把平行数据列转换为有序的论文记录列表
    ///
    /// 同一下标对应同一篇论文；除去除引用数中的内嵌换行外，
    /// 不对原始文本做任何其他转换
    pub fn extract(columns: RawColumns) -> AppResult<Vec<PublicationRecord>> {
        let RawColumns {
            titles,
            links,
            authors,
            citations,
            years,
            venues,
        } = columns;

        let len = titles.len();
        if links.len() != len
            || authors.len() != len
            || citations.len() != len
            || years.len() != len
            || venues.len() != len
        {
            return Err(AppError::Extract(ExtractError::ColumnMismatch {
                titles: len,
                links: links.len(),
                authors: authors.len(),
                citations: citations.len(),
                years: years.len(),
                venues: venues.len(),
            }));
        }

        let records = titles
            .into_iter()
            .zip(links)
            .zip(authors)
            .zip(citations)
            .zip(years)
            .zip(venues)
            .map(|(((((title, link), raw_author_field), citation), year), venue)| {
                PublicationRecord {
                    title,
                    link: if link.is_empty() { None } else { Some(link) },
                    raw_author_field,
                    citation_count: normalize_citation(&citation),
                    year,
                    venue,
                }
            })
            .collect();

        Ok(records)
    }
}

/// 去除引用数文本中的内嵌换行
fn normalize_citation(raw: &str) -> String {
    raw.replace(['\n', '\r'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(n: usize) -> RawColumns {
        RawColumns {
            titles: (0..n).map(|i| format!("title {}", i)).collect(),
            links: (0..n).map(|i| format!("https://x/{}", i)).collect(),
            authors: vec!["A, B".to_string(); n],
            citations: vec!["12".to_string(); n],
            years: vec!["2020".to_string(); n],
            venues: vec!["Journal".to_string(); n],
        }
    }

    #[test]
    fn test_extract_preserves_display_order() {
        let records = RecordExtractor::extract(columns(3)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "title 0");
        assert_eq!(records[2].title, "title 2");
    }

    #[test]
    fn test_column_mismatch_is_an_error() {
        let mut cols = columns(3);
        cols.years.pop();
        let err = RecordExtractor::extract(cols).unwrap_err();
        assert!(matches!(
            err,
            AppError::Extract(ExtractError::ColumnMismatch { .. })
        ));
    }

    #[test]
    fn test_citation_linebreaks_are_stripped() {
        let mut cols = columns(1);
        cols.citations[0] = "1\n234".to_string();
        let records = RecordExtractor::extract(cols).unwrap();
        assert_eq!(records[0].citation_count, "1234");
    }

    #[test]
    fn test_empty_link_becomes_none() {
        let mut cols = columns(1);
        cols.links[0] = String::new();
        let records = RecordExtractor::extract(cols).unwrap();
        assert!(records[0].link.is_none());
    }
}
