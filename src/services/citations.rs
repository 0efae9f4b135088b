//! 年度引用历史服务 - 业务能力层
//!
//! 独立于分页列表，直接请求学者主页文档并解析引用柱状图。
//! 获取失败只影响报告的"Citation by Year"一节，不阻塞其余部分。

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{AppError, AppResult, FetchError};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// 年度引用历史服务
pub struct CitationHistoryClient {
    client: reqwest::Client,
}

impl CitationHistoryClient {
    pub fn new() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Other(format!("构建 HTTP 客户端失败: {}", e)))?;
        Ok(Self { client })
    }

    /// 获取学者的年度引用数（按年份升序）
    pub async fn fetch(&self, profile_url: &str) -> AppResult<BTreeMap<i32, u64>> {
        let response = self
            .client
            .get(profile_url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(profile_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(FetchError::BadStatus {
                url: profile_url.to_string(),
                status: status.as_u16(),
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(profile_url, e))?;

        let history = parse_history(&body);
        debug!("解析到 {} 个年度引用数", history.len());
        Ok(history)
    }
}

/// 从主页文档解析年度引用柱状图
fn parse_history(html: &str) -> BTreeMap<i32, u64> {
    let document = Html::parse_document(html);
    let year_sel = Selector::parse("div.gsc_md_hist_w span.gsc_g_t").expect("内置选择器必定合法");
    let count_sel =
        Selector::parse("div.gsc_md_hist_w a.gsc_g_a span.gsc_g_al").expect("内置选择器必定合法");

    let years: Vec<i32> = document
        .select(&year_sel)
        .filter_map(|el| el.text().collect::<String>().trim().parse().ok())
        .collect();
    let counts: Vec<u64> = document
        .select(&count_sel)
        .filter_map(|el| el.text().collect::<String>().trim().parse().ok())
        .collect();

    years.into_iter().zip(counts).collect()
}
