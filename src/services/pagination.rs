//! 分页加载服务 - 业务能力层
//!
//! 反复点击"显示更多"直到行数到达不动点，或达到步数上限。
//! 步数上限是对无限列表的唯一保护：宁可返回部分结果也不无限运行。

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::infrastructure::PageSource;
use crate::services::scrape;

/// 分页加载结果
#[derive(Debug, Clone)]
pub struct LoadedRows {
    /// 最后一次读取到的行文本（保持页面顺序）
    pub rows: Vec<String>,
    /// 达到步数上限仍未稳定时为 true（非致命，流水线继续处理部分结果）
    pub truncated: bool,
}

/// 分页加载服务
///
/// 职责：
/// - 驱动页面源加载到稳定状态或步数上限
/// - 不认识 PublicationRecord
/// - 不处理业务流程
pub struct PaginationLoader {
    row_locator: &'static str,
    more_locator: &'static str,
}

impl PaginationLoader {
    /// 使用学者主页的默认定位符创建
    pub fn new() -> Self {
        Self {
            row_locator: scrape::PUBLICATION_ROWS,
            more_locator: scrape::SHOW_MORE_BUTTON,
        }
    }

    /// 使用自定义定位符创建
    pub fn with_locators(row_locator: &'static str, more_locator: &'static str) -> Self {
        Self {
            row_locator,
            more_locator,
        }
    }

    /// 加载分页列表到稳定状态
    ///
    /// 算法：读取当前行集合；反复点击"显示更多"，等待 `settle_delay`，
    /// 重新读取并与上一次比较。两次连续读取行数相等（不动点）即停止，
    /// 不再触发任何点击；点击次数达到 `max_steps` 时返回最后一次读取的
    /// 行集合并标记 `truncated`。
    pub async fn load<P: PageSource>(
        &self,
        source: &P,
        settle_delay: Duration,
        max_steps: usize,
    ) -> AppResult<LoadedRows> {
        let mut prev_rows = source.get_texts_at(self.row_locator).await?;
        debug!("初始读取到 {} 行", prev_rows.len());

        let mut clicks = 0;
        while clicks < max_steps {
            source.click(self.more_locator).await?;
            clicks += 1;

            // 阻塞等待页面完成渲染
            sleep(settle_delay).await;

            let cur_rows = source.get_texts_at(self.row_locator).await?;
            debug!("第 {} 次点击后读取到 {} 行", clicks, cur_rows.len());

            if cur_rows.len() == prev_rows.len() {
                // 到达不动点，停止加载
                return Ok(LoadedRows {
                    rows: cur_rows,
                    truncated: false,
                });
            }
            prev_rows = cur_rows;
        }

        warn!(
            "⚠️ 点击 {} 次后行数仍在增长，返回部分结果 (共 {} 行)",
            clicks,
            prev_rows.len()
        );
        Ok(LoadedRows {
            rows: prev_rows,
            truncated: true,
        })
    }
}

impl Default for PaginationLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// 脚本化的假页面：每次读取按预设行数返回
    struct ScriptedPage {
        sizes: Vec<usize>,
        reads: Cell<usize>,
        clicks: Cell<usize>,
    }

    impl ScriptedPage {
        fn new(sizes: Vec<usize>) -> Self {
            Self {
                sizes,
                reads: Cell::new(0),
                clicks: Cell::new(0),
            }
        }
    }

    impl PageSource for ScriptedPage {
        async fn goto(&self, _url: &str) -> AppResult<()> {
            Ok(())
        }

        async fn get_texts_at(&self, _locator: &str) -> AppResult<Vec<String>> {
            let idx = self.reads.get().min(self.sizes.len() - 1);
            self.reads.set(self.reads.get() + 1);
            Ok(vec!["row".to_string(); self.sizes[idx]])
        }

        async fn get_attrs_at(&self, _locator: &str, _attr: &str) -> AppResult<Vec<String>> {
            Ok(vec![])
        }

        async fn click(&self, _locator: &str) -> AppResult<()> {
            self.clicks.set(self.clicks.get() + 1);
            Ok(())
        }

        async fn current_location(&self) -> AppResult<String> {
            Ok("about:blank".to_string())
        }
    }

    #[tokio::test]
    async fn test_stops_at_fixed_point_without_extra_clicks() {
        // 读取序列 [10, 20, 20, 30]：第三次读取与第二次相等即停止
        let page = ScriptedPage::new(vec![10, 20, 20, 30]);
        let loader = PaginationLoader::new();

        let loaded = loader
            .load(&page, Duration::from_millis(0), 5)
            .await
            .unwrap();

        assert_eq!(loaded.rows.len(), 20);
        assert!(!loaded.truncated);
        // 停止后绝不再触发加载
        assert_eq!(page.clicks.get(), 2);
        assert_eq!(page.reads.get(), 3);
    }

    #[tokio::test]
    async fn test_bound_hit_returns_partial_rows() {
        // 行数一直增长，达到步数上限后返回部分结果
        let page = ScriptedPage::new(vec![10, 20, 30, 40, 50, 60]);
        let loader = PaginationLoader::new();

        let loaded = loader
            .load(&page, Duration::from_millis(0), 3)
            .await
            .unwrap();

        assert!(loaded.truncated);
        assert_eq!(loaded.rows.len(), 40);
        assert_eq!(page.clicks.get(), 3);
    }

    #[tokio::test]
    async fn test_already_stable_listing() {
        // 第一次点击后行数不变，立即停止
        let page = ScriptedPage::new(vec![7, 7]);
        let loader = PaginationLoader::new();

        let loaded = loader
            .load(&page, Duration::from_millis(0), 5)
            .await
            .unwrap();

        assert_eq!(loaded.rows.len(), 7);
        assert!(!loaded.truncated);
        assert_eq!(page.clicks.get(), 1);
    }
}
