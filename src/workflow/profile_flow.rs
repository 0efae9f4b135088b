//! 学者档案处理流程 - 流程层
//!
//! 流程顺序：
//! 1. 导航到主页，分页加载到稳定状态
//! 2. 抓取基本信息与论文数据列，抽取论文记录
//! 3. 获取年度引用历史（失败只丢该节，不阻塞报告）
//! 4. 标题 / 作者 / 年度三项分析
//! 5. 写出报告，再独立地更新汇总数据库

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageSource;
use crate::models::{pub_count_by_year, ResearcherProfile};
use crate::services::{
    AggregateStore, AuthorContributionAnalyzer, CitationHistoryClient, PaginationLoader,
    ProfileScraper, RecordExtractor, ReportAssembler, TabularReportWriter, TextTokenAnalyzer,
};
use crate::utils::logging::truncate_text;

/// 学者档案处理流程
///
/// - 编排完整的单学者处理流程
/// - 不持有任何页面资源
/// - 只依赖业务能力（services）
pub struct ProfileFlow {
    config: Config,
    scraper: ProfileScraper,
    pagination: PaginationLoader,
    tokens: TextTokenAnalyzer,
    citations: CitationHistoryClient,
    report_writer: TabularReportWriter,
    ledger: AggregateStore,
}

impl ProfileFlow {
    /// 创建新的学者档案处理流程
    pub fn new(config: &Config) -> AppResult<Self> {
        let ledger_path = std::path::Path::new(&config.output_dir).join(&config.ledger_file);
        Ok(Self {
            config: config.clone(),
            scraper: ProfileScraper::new(&config.base_url),
            pagination: PaginationLoader::new(),
            tokens: TextTokenAnalyzer::new(config.stem_tokens),
            citations: CitationHistoryClient::new()?,
            report_writer: TabularReportWriter::new(&config.output_dir),
            ledger: AggregateStore::new(ledger_path),
        })
    }

    /// 处理一位学者
    pub async fn run<P: PageSource>(
        &self,
        page: &P,
        ctx: &crate::workflow::ProfileCtx,
    ) -> AppResult<()> {
        info!(
            "[学者 {}/{}] 🌐 正在打开主页: {}",
            ctx.index, ctx.total, ctx.profile_url
        );
        page.goto(&ctx.profile_url).await?;

        // ========== 流程 1: 分页加载到稳定状态 ==========
        let loaded = self
            .pagination
            .load(
                page,
                Duration::from_secs(self.config.loading_delay_secs),
                self.config.pages_to_load,
            )
            .await?;
        if loaded.truncated {
            warn!(
                "[学者 {}] ⚠️ 列表未完全加载，继续处理部分结果 ({} 行)",
                ctx.index,
                loaded.rows.len()
            );
        } else {
            info!("[学者 {}] ✓ 列表加载稳定 ({} 行)", ctx.index, loaded.rows.len());
        }

        // ========== 流程 2: 抓取与抽取 ==========
        let basic = self.scraper.read_basic_info(page).await?;
        info!(
            "[学者 {}] ✓ 基本信息: {} ({})",
            ctx.index,
            basic.name,
            truncate_text(&basic.affiliation, 40)
        );

        let columns = self.scraper.read_raw_columns(page).await?;
        let publications = RecordExtractor::extract(columns)?;
        info!("[学者 {}] ✓ 抽取到 {} 篇论文", ctx.index, publications.len());

        // ========== 流程 3: 年度引用历史（独立请求，失败只丢该节） ==========
        let citation_by_year = match self.citations.fetch(&basic.profile_url).await {
            Ok(history) => history,
            Err(e) => {
                error!(
                    "[学者 {}] ⚠️ 年度引用历史获取失败，报告将缺少该节: {}",
                    ctx.index, e
                );
                BTreeMap::new()
            }
        };

        // 档案一次性构建，此后只读
        let profile = ResearcherProfile {
            basic,
            publications,
            citation_by_year,
        };

        // ========== 流程 4: 分析 ==========
        let titles: Vec<String> = profile.publications.iter().map(|p| p.title.clone()).collect();
        let ngram_tables = self
            .tokens
            .analyze(&titles, self.config.n_gram, self.config.most_used);

        let author_fields: Vec<String> = profile
            .publications
            .iter()
            .map(|p| p.raw_author_field.clone())
            .collect();
        let author_report =
            AuthorContributionAnalyzer::analyze(&author_fields, profile.basic.surname());

        let pub_years = pub_count_by_year(&profile.publications);

        if self.config.verbose_logging {
            self.log_top_phrases(ctx.index, &ngram_tables.unigrams);
        }

        // ========== 流程 5: 报告与汇总数据库（两个独立的副作用） ==========
        let sections =
            ReportAssembler::assemble(&profile, &ngram_tables, &pub_years, &author_report);
        self.report_writer.write_profile_report(
            &profile.basic.name,
            &profile.basic.recorded_date,
            &sections,
        )?;

        if self.config.add_to_database {
            // 数据库失败不回滚已写出的报告，错误照常上抛
            if let Err(e) = self.ledger.append(&profile.basic.ledger_row()) {
                error!(
                    "[学者 {}] ❌ 汇总数据库更新失败（报告已保留）: {}",
                    ctx.index, e
                );
                return Err(e);
            }
        }

        info!("[学者 {}] ✅ 处理完成: {}", ctx.index, profile.basic.name);
        Ok(())
    }

    // ========== 日志辅助方法 ==========

    /// 显示高频词预览
    fn log_top_phrases(&self, index: usize, unigrams: &[(String, u32)]) {
        for (i, (phrase, count)) in unigrams.iter().take(3).enumerate() {
            if phrase.is_empty() {
                continue;
            }
            info!("[学者 {}]   {}. {} × {}", index, i + 1, phrase, count);
        }
    }
}
