//! 基础设施层（Infrastructure Layer）
//!
//! 持有唯一的页面资源，只对上层暴露"读文本 / 点击 / 取位置"的能力。
//! 业务层通过 [`PageSource`] 抽象访问页面，不接触 chromiumoxide 的细节。

pub mod page_source;
pub mod scholar_page;

pub use page_source::PageSource;
pub use scholar_page::ScholarPage;
