//! 作者贡献分析服务 - 业务能力层
//!
//! 1. 统计目标学者在各论文作者序中的排位频率（第一作者、第二作者…）
//! 2. 统计合作者（含学者本人）出现频率

use std::fmt;

use crate::utils::freq::rank_by_count;

/// 作者排位
///
/// 排位是作者串按逗号切分后的 1 起始下标；
/// 某篇论文没有匹配到姓氏时记为 NotApplicable 哨兵值，绝不报错
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorRank {
    /// 1 起始的作者序位置
    Position(usize),
    /// 未匹配到姓氏
    NotApplicable,
}

impl fmt::Display for AuthorRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorRank::Position(p) => write!(f, "{}", p),
            AuthorRank::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// 作者贡献分析结果
///
/// 内部保持结构化的三个部分；渲染时按固定顺序拼接成单个行序列，
/// 与报告的单节展示约定保持一致
#[derive(Debug, Clone)]
pub struct AuthorReport {
    /// 排位频率表（含哨兵值），频率降序
    pub rank_counts: Vec<(AuthorRank, u32)>,
    /// 论文总数
    pub total_publications: usize,
    /// 合作者频率表（含学者本人），频率降序
    pub coauthor_counts: Vec<(String, u32)>,
}

impl AuthorReport {
    /// 渲染为拼接的行序列：
    /// 排位表头、`#_<排位>` 行、总数行、空行、合作者表头、合作者行
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.rank_counts.len() + self.coauthor_counts.len() + 4);

        rows.push(vec!["Which author".to_string(), "Count".to_string()]);
        for (rank, count) in &self.rank_counts {
            rows.push(vec![format!("#_{}", rank), count.to_string()]);
        }
        rows.push(vec![
            "# of Pubs".to_string(),
            self.total_publications.to_string(),
        ]);
        rows.push(vec![String::new(), String::new()]);
        rows.push(vec!["Author".to_string(), "Count".to_string()]);
        for (author, count) in &self.coauthor_counts {
            rows.push(vec![author.clone(), count.to_string()]);
        }

        rows
    }
}

/// 作者贡献分析服务
pub struct AuthorContributionAnalyzer;

impl AuthorContributionAnalyzer {
    /// 分析学者的作者排位分布与合作者频率
    ///
    /// 姓氏匹配使用大小写不敏感的子串包含；短姓氏可能误匹配到
    /// 无关词元，这是已知局限，按原样保留
    pub fn analyze(raw_author_fields: &[String], researcher_surname: &str) -> AuthorReport {
        let surname_lc = researcher_surname.to_lowercase();

        let mut coauthor_pool: Vec<String> = Vec::new();
        let mut ranks: Vec<AuthorRank> = Vec::new();

        for field in raw_author_fields {
            let tokens: Vec<String> = field.split(',').map(|a| a.trim().to_string()).collect();

            let mut matched = false;
            if !surname_lc.is_empty() {
                for (idx, token) in tokens.iter().enumerate() {
                    if token.to_lowercase().contains(&surname_lc) {
                        ranks.push(AuthorRank::Position(idx + 1));
                        matched = true;
                    }
                }
            }
            if !matched {
                ranks.push(AuthorRank::NotApplicable);
            }

            coauthor_pool.extend(tokens);
        }

        AuthorReport {
            rank_counts: rank_by_count(ranks, None),
            total_publications: raw_author_fields.len(),
            coauthor_counts: rank_by_count(coauthor_pool, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_author_rank() {
        let report =
            AuthorContributionAnalyzer::analyze(&fields(&["Smith, J., Doe, A."]), "Smith");
        assert_eq!(report.rank_counts, vec![(AuthorRank::Position(1), 1)]);
    }

    #[test]
    fn test_no_match_yields_sentinel() {
        let report = AuthorContributionAnalyzer::analyze(&fields(&["Doe, A., Roe, B."]), "Smith");
        assert_eq!(report.rank_counts, vec![(AuthorRank::NotApplicable, 1)]);
    }

    #[test]
    fn test_rank_tally_across_records() {
        let report = AuthorContributionAnalyzer::analyze(
            &fields(&[
                "Smith J, Doe A",
                "Doe A, Smith J",
                "Smith J, Roe B",
                "Roe B, Doe A",
            ]),
            "Smith",
        );
        assert_eq!(
            report.rank_counts,
            vec![
                (AuthorRank::Position(1), 2),
                (AuthorRank::Position(2), 1),
                (AuthorRank::NotApplicable, 1),
            ]
        );
        assert_eq!(report.total_publications, 4);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let report = AuthorContributionAnalyzer::analyze(&fields(&["j smith, a doe"]), "Smith");
        assert_eq!(report.rank_counts, vec![(AuthorRank::Position(1), 1)]);
    }

    #[test]
    fn test_coauthor_pool_includes_researcher() {
        let report =
            AuthorContributionAnalyzer::analyze(&fields(&["Smith J, Doe A", "Smith J"]), "Smith");
        assert_eq!(report.coauthor_counts[0], ("Smith J".to_string(), 2));
        assert!(report
            .coauthor_counts
            .iter()
            .any(|(name, _)| name == "Doe A"));
    }

    #[test]
    fn test_rendered_rows_keep_concatenated_contract() {
        let report = AuthorContributionAnalyzer::analyze(&fields(&["Smith J, Doe A"]), "Smith");
        let rows = report.to_rows();

        assert_eq!(rows[0], vec!["Which author", "Count"]);
        assert_eq!(rows[1], vec!["#_1", "1"]);
        assert_eq!(rows[2], vec!["# of Pubs", "1"]);
        assert_eq!(rows[3], vec!["", ""]);
        assert_eq!(rows[4], vec!["Author", "Count"]);
        assert_eq!(rows[5], vec!["Smith J", "1"]);
    }

    #[test]
    fn test_sentinel_renders_as_na_label() {
        let report = AuthorContributionAnalyzer::analyze(&fields(&["Doe A"]), "Smith");
        let rows = report.to_rows();
        assert_eq!(rows[1], vec!["#_N/A", "1"]);
    }
}
