//! # 演示应用程序
//!
//! 演示 Wirebox 容器的完整使用流程：组件标记、容器创建、
//! 类型查询、诊断快照与显式关闭。

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use wirebox::{component, Container};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "demo-app")]
#[command(about = "Wirebox 依赖注入容器演示")]
struct Args {
    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 报价来源接口
pub trait QuoteSource: Send + Sync + std::fmt::Debug {
    /// 返回一条报价
    fn quote(&self) -> String;
}

/// 固定报价来源
#[component(provides(dyn QuoteSource))]
#[derive(Debug, Default)]
pub struct StaticQuotes;

impl QuoteSource for StaticQuotes {
    fn quote(&self) -> String {
        "千里之行，始于足下".to_string()
    }
}

/// 报价播报组件，演示字段注入与销毁钩子
#[component(teardown(close))]
#[derive(Debug, Default)]
pub struct Announcer {
    #[inject]
    source: Option<Arc<dyn QuoteSource>>,
}

impl Announcer {
    fn announce(&self) -> String {
        self.source
            .as_ref()
            .map(|source| source.quote())
            .unwrap_or_default()
    }

    fn close(&self) {
        info!("播报组件已关闭");
    }
}

/// 命名空间标记类型
struct AppMarker;

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&args.log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("启动 Wirebox 演示应用");

    // 创建容器：扫描本模块命名空间下注册的全部组件
    let container = Container::create::<AppMarker>()?;
    info!(
        container_id = %container.id(),
        components = container.component_count(),
        "容器创建完成"
    );

    // 按 trait 与具体类型分别查询
    let source = container.get_bean::<dyn QuoteSource>()?;
    info!(quote = %source.quote(), "按 trait 查询");

    let announcer = container.get_bean::<Announcer>()?;
    info!(quote = %announcer.announce(), "按具体类型查询");

    // 导出诊断快照
    let snapshot = container.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    // 显式关闭：按实例化逆序执行销毁钩子
    container.close()?;
    info!("应用已退出");

    Ok(())
}
