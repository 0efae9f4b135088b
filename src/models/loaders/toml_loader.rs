//! 学者清单加载
//!
//! 从 TOML 文件读取待处理的学者条目，每个条目给出主页 URL 或查询词：
//!
//! ```toml
//! [[researchers]]
//! url = "https://scholar.google.com/citations?user=xxxx"
//!
//! [[researchers]]
//! query = "Jane Smith MIT"
//! ```

use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::{AppError, AppResult};

/// 单个学者条目
#[derive(Debug, Clone, Deserialize)]
pub struct ResearcherEntry {
    /// 学者主页 URL（优先使用）
    #[serde(default)]
    pub url: Option<String>,
    /// 查询词，需要先解析为唯一主页 URL
    #[serde(default)]
    pub query: Option<String>,
}

/// 条目的处理目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearcherTarget {
    /// 直接给出的主页 URL
    Url(String),
    /// 待解析的查询词
    Query(String),
}

impl ResearcherEntry {
    /// URL 和查询词同时存在时优先 URL；两者都缺失返回 None
    pub fn target(&self) -> Option<ResearcherTarget> {
        if let Some(url) = self.url.as_deref().filter(|s| !s.trim().is_empty()) {
            return Some(ResearcherTarget::Url(url.trim().to_string()));
        }
        self.query
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|q| ResearcherTarget::Query(q.trim().to_string()))
    }

    /// 用于日志的条目描述
    pub fn describe(&self) -> String {
        match self.target() {
            Some(ResearcherTarget::Url(url)) => url,
            Some(ResearcherTarget::Query(query)) => query,
            None => "(空条目)".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResearcherList {
    #[serde(default)]
    researchers: Vec<ResearcherEntry>,
}

/// 从 TOML 文件加载学者条目列表
pub async fn load_researcher_entries(path: &Path) -> AppResult<Vec<ResearcherEntry>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::read_failed(path.display().to_string(), e))?;

    let list: ResearcherList = toml::from_str(&content)
        .map_err(|e| AppError::Other(format!("无法解析TOML文件 {}: {}", path.display(), e)))?;

    Ok(list.researchers)
}
