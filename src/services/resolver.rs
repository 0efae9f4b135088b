//! 学者主页解析服务 - 业务能力层
//!
//! 把查询词解析为唯一的学者主页 URL。
//! 零个候选 → NotFound；多个候选 → Ambiguous，必须人工确认，绝不自动挑选。

use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::error::{AppError, AppResult, FetchError};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// 学者主页解析服务
pub struct ProfileResolver {
    client: reqwest::Client,
    base_url: String,
}

impl ProfileResolver {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Other(format!("构建 HTTP 客户端失败: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// 按查询词解析学者主页 URL
    pub async fn resolve(&self, query: &str) -> AppResult<String> {
        let keyword = query.split_whitespace().collect::<Vec<_>>().join("+");
        let search_url = format!(
            "{}/citations?hl=en&view_op=search_authors&mauthors={}",
            self.base_url, keyword
        );
        info!("🔍 正在搜索学者: {}", query);

        let response = self
            .client
            .get(&search_url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(&search_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(FetchError::BadStatus {
                url: search_url,
                status: status.as_u16(),
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(&search_url, e))?;

        let candidates = parse_candidates(&body);
        debug!("查询 '{}' 命中 {} 个候选", query, candidates.len());

        match candidates.len() {
            0 => Err(AppError::scholar_not_found(query)),
            1 => {
                let url = self.absolutize(&candidates[0]);
                info!("✓ 解析到学者主页: {}", url);
                Ok(url)
            }
            n => Err(AppError::scholar_ambiguous(query, search_url, n)),
        }
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            href.to_string()
        }
    }
}

/// 从搜索结果页提取候选学者的主页链接
fn parse_candidates(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let card_sel = Selector::parse(".gsc_1usr").expect("内置选择器必定合法");
    let link_sel = Selector::parse("a").expect("内置选择器必定合法");

    document
        .select(&card_sel)
        .filter_map(|card| {
            card.select(&link_sel)
                .filter_map(|a| a.value().attr("href"))
                .next()
                .map(|href| href.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_candidates() {
        let html = "<html><body><div id='gsc_sa_ccl'></div></body></html>";
        assert!(parse_candidates(html).is_empty());
    }

    #[test]
    fn test_single_candidate_link() {
        let html = r#"
            <div class="gsc_1usr">
                <a href="/citations?hl=en&amp;user=abc123">Jane Smith</a>
            </div>
        "#;
        let candidates = parse_candidates(html);
        assert_eq!(candidates, vec!["/citations?hl=en&user=abc123".to_string()]);
    }

    #[test]
    fn test_multiple_candidates_are_all_reported() {
        let html = r#"
            <div class="gsc_1usr"><a href="/citations?user=a">A</a></div>
            <div class="gsc_1usr"><a href="/citations?user=b">B</a></div>
        "#;
        assert_eq!(parse_candidates(html).len(), 2);
    }
}
