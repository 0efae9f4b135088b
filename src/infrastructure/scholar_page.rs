//! 学者主页页面 - 基础设施层
//!
//! 持有唯一的 page 资源，通过执行 JS 实现 [`PageSource`] 的各项能力

use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult, PageError};
use crate::infrastructure::page_source::PageSource;

/// 学者主页页面
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 暴露读文本 / 读属性 / 点击能力
/// - 不认识 PublicationRecord / ResearcherProfile
/// - 不处理业务流程
pub struct ScholarPage {
    page: Page,
}

impl ScholarPage {
    /// 创建新的学者主页页面
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }
}

impl PageSource for ScholarPage {
    async fn goto(&self, url: &str) -> AppResult<()> {
        self.page.goto(url).await.map_err(|e| {
            AppError::Page(PageError::NavigationFailed {
                url: url.to_string(),
                source: Box::new(e),
            })
        })?;
        // 等待页面完成加载，导航事件偶尔先于内容就绪
        self.page.wait_for_navigation().await.map_err(|e| {
            AppError::Page(PageError::NavigationFailed {
                url: url.to_string(),
                source: Box::new(e),
            })
        })?;
        Ok(())
    }

    async fn get_texts_at(&self, locator: &str) -> AppResult<Vec<String>> {
        let sel = serde_json::to_string(locator)?;
        let js_code = format!(
            "Array.from(document.querySelectorAll({})).map(el => el.innerText.trim())",
            sel
        );
        self.eval_as::<Vec<String>>(js_code).await
    }

    async fn get_attrs_at(&self, locator: &str, attr: &str) -> AppResult<Vec<String>> {
        let sel = serde_json::to_string(locator)?;
        let attr_js = serde_json::to_string(attr)?;
        let js_code = format!(
            "Array.from(document.querySelectorAll({})).map(el => el.getAttribute({}) || '')",
            sel, attr_js
        );
        self.eval_as::<Vec<String>>(js_code).await
    }

    async fn click(&self, locator: &str) -> AppResult<()> {
        let sel = serde_json::to_string(locator)?;
        let js_code = format!(
            "(() => {{ const el = document.querySelector({}); if (!el) return false; el.click(); return true; }})()",
            sel
        );
        let clicked: bool = self.eval_as(js_code).await?;
        if clicked {
            Ok(())
        } else {
            Err(AppError::Page(PageError::ElementNotFound {
                locator: locator.to_string(),
            }))
        }
    }

    async fn current_location(&self) -> AppResult<String> {
        self.eval_as::<String>("window.location.href").await
    }
}
