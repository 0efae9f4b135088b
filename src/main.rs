use gs_profiler::utils::logging;
use gs_profiler::{App, AppResult, Config};

#[tokio::main]
async fn main() -> AppResult<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
