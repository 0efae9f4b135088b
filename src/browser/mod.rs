//! 浏览器接入
//!
//! 两种接入方式：
//! - [`connect_to_browser`]：连接已开启调试端口的浏览器
//! - [`launch_headless_browser`]：启动无头浏览器

use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult, PageError};

/// 连接到浏览器并获取页面
pub async fn connect_to_browser(port: u16) -> AppResult<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("连接浏览器失败: {}", e);
        AppError::Page(PageError::ConnectionFailed {
            port,
            source: Box::new(e),
        })
    })?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let pages = browser.pages().await?;
    debug!("获取到 {} 个页面", pages.len());

    // 复用第一个已打开的页面，否则创建空白页面
    let page = if let Some(p) = pages.into_iter().next() {
        p
    } else {
        debug!("创建空白页面");
        browser.new_page("about:blank").await.map_err(|e| {
            error!("创建空白页面失败: {}", e);
            AppError::Page(PageError::ConnectionFailed {
                port,
                source: Box::new(e),
            })
        })?
    };

    Ok((browser, page))
}

/// 启动无头浏览器
pub async fn launch_headless_browser() -> AppResult<(Browser, Page)> {
    info!("🚀 启动无头浏览器...");

    // 配置无头浏览器
    let config = BrowserConfig::builder()
        .new_headless_mode()
        .args(vec![
            "--disable-gpu",           // 无头模式下禁用 GPU
            "--no-sandbox",            // 禁用沙盒，防止权限问题导致的崩溃
            "--disable-dev-shm-usage", // 防止共享内存不足
        ])
        .build()
        .map_err(|e| {
            error!("配置无头浏览器失败: {}", e);
            AppError::Other(format!("配置无头浏览器失败: {}", e))
        })?;

    // 启动浏览器
    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        AppError::Page(PageError::LaunchFailed {
            source: Box::new(e),
        })
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 添加短暂延迟以等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        AppError::Page(PageError::LaunchFailed {
            source: Box::new(e),
        })
    })?;

    info!("✅ 无头浏览器就绪");

    Ok((browser, page))
}
