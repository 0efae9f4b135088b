//! 页面源抽象
//!
//! 分页加载、信息抓取只依赖这个契约，方便在测试中用脚本化的假页面替代。

use crate::error::AppResult;

/// 页面源能力契约
///
/// 职责：
/// - 导航到指定 URL
/// - 按定位符读取文本列表 / 属性列表
/// - 按定位符点击元素
/// - 报告当前位置
///
/// 该资源是独占、有状态、不可重入的：同一时刻只能服务一个学者的流水线。
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// 导航到指定 URL
    async fn goto(&self, url: &str) -> AppResult<()>;

    /// 读取所有命中定位符的元素文本（按页面顺序）
    async fn get_texts_at(&self, locator: &str) -> AppResult<Vec<String>>;

    /// 读取所有命中定位符的元素属性（按页面顺序，缺失的属性为空串）
    async fn get_attrs_at(&self, locator: &str, attr: &str) -> AppResult<Vec<String>>;

    /// 点击第一个命中定位符的元素
    async fn click(&self, locator: &str) -> AppResult<()>;

    /// 返回当前页面 URL
    async fn current_location(&self) -> AppResult<String>;
}
