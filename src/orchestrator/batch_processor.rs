//! 批量学者处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量学者的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动日志、接入浏览器、创建 ScholarPage
//! 2. **清单加载**：读取学者清单（`Vec<ResearcherEntry>`）
//! 3. **目标解析**：把查询词条目解析为唯一主页 URL
//! 4. **顺序处理**：逐个学者处理，互不阻塞（单个失败不中断批次）
//! 5. **资源管理**：唯一持有 Browser，结束时关闭一次
//! 6. **全局统计**：汇总成功 / 跳过 / 失败数量
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个学者的细节
//! - **解析失败算跳过**：查不到或多候选的条目记为跳过，不算处理失败
//! - **向下委托**：委托 workflow::ProfileFlow 处理单个学者

use std::path::Path;

use chromiumoxide::Browser;
use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::ScholarPage;
use crate::models::{load_researcher_entries, ResearcherEntry, ResearcherTarget};
use crate::services::ProfileResolver;
use crate::utils::logging::init_log_file;
use crate::workflow::{ProfileCtx, ProfileFlow};

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    page: ScholarPage,
    resolver: ProfileResolver,
    flow: ProfileFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 接入浏览器：优先连接调试端口，否则启动无头浏览器
        let (browser, page) = match config.browser_debug_port {
            Some(port) => browser::connect_to_browser(port).await?,
            None => browser::launch_headless_browser().await?,
        };

        // 创建 ScholarPage（持有 page）
        let page = ScholarPage::new(page);
        let resolver = ProfileResolver::new(&config.base_url)?;
        let flow = ProfileFlow::new(&config)?;

        Ok(Self {
            config,
            browser,
            page,
            resolver,
            flow,
        })
    }

    /// 运行应用主逻辑
    ///
    /// 消耗 self，保证浏览器恰好关闭一次。
    pub async fn run(mut self) -> AppResult<()> {
        let result = self.process_entries().await;

        // 无论批次结果如何，浏览器都要关闭
        if let Err(e) = self.browser.close().await {
            warn!("⚠️ 关闭浏览器失败: {}", e);
        }

        result
    }

    async fn process_entries(&self) -> AppResult<()> {
        // 加载学者清单
        info!("\n📁 正在读取学者清单: {}", self.config.researchers_file);
        let entries = load_researcher_entries(Path::new(&self.config.researchers_file)).await?;

        if entries.is_empty() {
            warn!("⚠️ 学者清单为空，程序结束");
            return Ok(());
        }

        let total = entries.len();
        log_entries_loaded(total);

        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        // 逐个处理，单个失败不中断批次
        for (idx, entry) in entries.iter().enumerate() {
            let index = idx + 1;
            log_entry_start(index, total, &entry.describe());

            match self.process_entry(entry, index, total).await {
                Ok(()) => stats.success += 1,
                Err(AppError::Search(e)) => {
                    warn!("[学者 {}] ⏭️ 已跳过: {}", index, e);
                    stats.skipped += 1;
                }
                Err(e) => {
                    error!("[学者 {}] ❌ 处理失败: {}", index, e);
                    stats.failed += 1;
                }
            }
        }

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 处理单个学者条目
    async fn process_entry(
        &self,
        entry: &ResearcherEntry,
        index: usize,
        total: usize,
    ) -> AppResult<()> {
        // 空条目记为跳过
        let target = match entry.target() {
            Some(t) => t,
            None => {
                return Err(AppError::scholar_not_found("(空条目)"));
            }
        };

        // 查询词先解析为唯一主页 URL
        let profile_url = match target {
            ResearcherTarget::Url(url) => url,
            ResearcherTarget::Query(query) => self.resolver.resolve(&query).await?,
        };

        let ctx = ProfileCtx::new(index, total, profile_url);
        self.flow.run(&self.page, &ctx).await
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    skipped: usize,
    failed: usize,
    total: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 学者档案分析模式");
    info!("📊 标题分析: {}-gram / Top {}", config.n_gram, config.most_used);
    info!("📦 分页加载上限: {} 次", config.pages_to_load);
    info!("{}", "=".repeat(60));
}

fn log_entries_loaded(total: usize) {
    info!("✓ 清单中共 {} 位学者", total);
    info!("💡 将按顺序逐个处理\n");
}

fn log_entry_start(index: usize, total: usize, description: &str) {
    info!("\n{}", "=".repeat(60));
    info!("👤 开始处理学者 {}/{}: {}", index, total, description);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("⏭️ 跳过: {}", stats.skipped);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
