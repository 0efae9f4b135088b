//! 主页信息抓取服务 - 业务能力层
//!
//! 集中维护学者主页的 CSS 定位符，向上层提供
//! "读基本信息"和"读论文数据列"两项能力

use tracing::debug;

use crate::error::{AppError, AppResult, PageError};
use crate::infrastructure::PageSource;
use crate::models::{BasicInfo, RawColumns};

/// 论文列表行
pub const PUBLICATION_ROWS: &str = "#gsc_a_b tr.gsc_a_tr";
/// "显示更多"按钮
pub const SHOW_MORE_BUTTON: &str = "#gsc_bpf_more";

const TITLE_LINKS: &str = "#gsc_a_b tr.gsc_a_tr td.gsc_a_t a.gsc_a_at";
const AUTHOR_FIELDS: &str = "#gsc_a_b tr.gsc_a_tr td.gsc_a_t div.gs_gray:nth-of-type(1)";
const VENUES: &str = "#gsc_a_b tr.gsc_a_tr td.gsc_a_t div.gs_gray:nth-of-type(2)";
const CITATION_CELLS: &str = "#gsc_a_b tr.gsc_a_tr td.gsc_a_c a.gsc_a_ac";
const YEAR_CELLS: &str = "#gsc_a_b tr.gsc_a_tr td.gsc_a_y span.gsc_a_h";

const PROFILE_NAME: &str = "#gsc_prf_in";
const AFFILIATION_LINK: &str = "#gsc_prf_i .gsc_prf_il a.gsc_prf_ila";
const HOMEPAGE_LINK: &str = "#gsc_prf_ivh a";
const SPECIALIZATION_TAGS: &str = "#gsc_prf_int a";
const CITATION_STATS: &str = "#gsc_rsb_st td.gsc_rsb_std";

/// 主页信息抓取服务
///
/// 职责：
/// - 读取学者基本信息（姓名、机构、主页、方向、引用统计）
/// - 读取论文列表的平行数据列
/// - 不做分页、不做分析
pub struct ProfileScraper {
    base_url: String,
}

impl ProfileScraper {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// 读取学者基本信息
    ///
    /// 机构缺失时记为 "Unknown"，个人主页缺失时记为 "Not available"；
    /// 姓名与引用统计缺失则视为页面异常
    pub async fn read_basic_info<P: PageSource>(&self, source: &P) -> AppResult<BasicInfo> {
        let name = source
            .get_texts_at(PROFILE_NAME)
            .await?
            .into_iter()
            .next()
            .filter(|s| !s.is_empty())
            .ok_or(AppError::Page(PageError::MissingField { field: "name" }))?;

        let affiliation = source
            .get_texts_at(AFFILIATION_LINK)
            .await?
            .into_iter()
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        let homepage = source
            .get_attrs_at(HOMEPAGE_LINK, "href")
            .await?
            .into_iter()
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Not available".to_string());

        let specialization = source.get_texts_at(SPECIALIZATION_TAGS).await?;

        let stats = source.get_texts_at(CITATION_STATS).await?;
        // 统计表依次为：总引用、近五年引用、h 指数、…，只取前两项
        let citation_all = stats
            .first()
            .cloned()
            .ok_or(AppError::Page(PageError::MissingField {
                field: "citation stats",
            }))?;
        let citation_recent =
            stats
                .get(1)
                .cloned()
                .ok_or(AppError::Page(PageError::MissingField {
                    field: "citation stats",
                }))?;

        let profile_url = source.current_location().await?;
        let recorded_date = chrono::Local::now().format("%Y-%m-%d").to_string();

        debug!("基本信息读取完成: {}", name);

        Ok(BasicInfo {
            name,
            affiliation,
            homepage,
            profile_url,
            specialization,
            citation_all,
            citation_recent,
            recorded_date,
        })
    }

    /// 读取论文列表的平行数据列
    ///
    /// 各列按页面顺序返回，对齐检查交给 RecordExtractor
    pub async fn read_raw_columns<P: PageSource>(&self, source: &P) -> AppResult<RawColumns> {
        let titles = source.get_texts_at(TITLE_LINKS).await?;
        let links = source
            .get_attrs_at(TITLE_LINKS, "href")
            .await?
            .into_iter()
            .map(|href| self.absolutize(href))
            .collect();
        let authors = source.get_texts_at(AUTHOR_FIELDS).await?;
        let citations = source.get_texts_at(CITATION_CELLS).await?;
        let years = source.get_texts_at(YEAR_CELLS).await?;
        let venues = source.get_texts_at(VENUES).await?;

        debug!("数据列读取完成: {} 条标题", titles.len());

        Ok(RawColumns {
            titles,
            links,
            authors,
            citations,
            years,
            venues,
        })
    }

    /// 相对链接补全为绝对链接
    fn absolutize(&self, href: String) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.base_url, href)
        } else {
            href
        }
    }
}
