use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::publication::PublicationRecord;

/// 学者基本信息
///
/// 与汇总数据库的一行一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInfo {
    /// 姓名
    pub name: String,
    /// 所属机构，页面缺失时为 "Unknown"
    pub affiliation: String,
    /// 个人主页，页面缺失时为 "Not available"
    pub homepage: String,
    /// 学者主页 URL
    pub profile_url: String,
    /// 研究方向标签（保持页面顺序）
    pub specialization: Vec<String>,
    /// 全部引用数
    pub citation_all: String,
    /// 近五年引用数
    pub citation_recent: String,
    /// 记录日期（%Y-%m-%d）
    pub recorded_date: String,
}

impl BasicInfo {
    /// 姓氏（展示姓名的最后一个词），用于作者排位匹配
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
    }

    /// 转换为汇总数据库的一行
    pub fn ledger_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.affiliation.clone(),
            self.homepage.clone(),
            self.profile_url.clone(),
            self.specialization.join("; "),
            self.citation_all.clone(),
            self.citation_recent.clone(),
            self.recorded_date.clone(),
        ]
    }
}

/// 学者完整档案
///
/// 每次流水线运行时一次性构建，构建后只读，运行结束即丢弃，不跨运行缓存
#[derive(Debug, Clone)]
pub struct ResearcherProfile {
    pub basic: BasicInfo,
    /// 论文列表，保持页面展示顺序
    pub publications: Vec<PublicationRecord>,
    /// 年度引用数（按年份升序）
    pub citation_by_year: BTreeMap<i32, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surname_is_last_word() {
        let basic = BasicInfo {
            name: "Jane Q. Smith".to_string(),
            affiliation: "Unknown".to_string(),
            homepage: "Not available".to_string(),
            profile_url: String::new(),
            specialization: vec![],
            citation_all: "0".to_string(),
            citation_recent: "0".to_string(),
            recorded_date: "2020-01-01".to_string(),
        };
        assert_eq!(basic.surname(), "Smith");
    }

    #[test]
    fn test_ledger_row_joins_specialization() {
        let basic = BasicInfo {
            name: "A B".to_string(),
            affiliation: "X University".to_string(),
            homepage: "https://example.com".to_string(),
            profile_url: "https://scholar.google.com/citations?user=x".to_string(),
            specialization: vec!["NLP".to_string(), "IR".to_string()],
            citation_all: "100".to_string(),
            citation_recent: "40".to_string(),
            recorded_date: "2020-01-01".to_string(),
        };
        let row = basic.ledger_row();
        assert_eq!(row.len(), 8);
        assert_eq!(row[4], "NLP; IR");
    }
}
