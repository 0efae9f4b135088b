//! 流程层（Workflow Layer）
//!
//! 定义"一位学者"的完整处理流程：
//! 导航 → 分页加载 → 抓取 → 抽取 → 分析 → 报告 → 汇总数据库

pub mod profile_ctx;
pub mod profile_flow;

pub use profile_ctx::ProfileCtx;
pub use profile_flow::ProfileFlow;
