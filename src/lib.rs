//! # GS Profiler
//!
//! 一个用于批量分析 Google Scholar 学者档案的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `ScholarPage` - 唯一的 page owner，提供读文本 / 点击 / 取位置能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个学者
//! - `PaginationLoader` - 分页加载到稳定状态
//! - `ProfileScraper` / `RecordExtractor` - 抓取与论文记录抽取
//! - `TextTokenAnalyzer` / `AuthorContributionAnalyzer` - 标题与作者分析
//! - `CitationHistoryClient` / `ProfileResolver` - 独立 HTTP 能力
//! - `ReportAssembler` / `TabularReportWriter` / `AggregateStore` - 输出能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一位学者"的完整处理流程
//! - `ProfileCtx` - 上下文封装（序号 + 主页 URL）
//! - `ProfileFlow` - 流程编排（加载 → 抽取 → 分析 → 报告 → 汇总）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量学者处理器，管理浏览器资源与统计
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{PageSource, ScholarPage};
pub use models::{BasicInfo, PublicationRecord, ResearcherProfile};
pub use orchestrator::App;
pub use workflow::{ProfileCtx, ProfileFlow};
