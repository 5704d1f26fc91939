// ==========================================
// 制造成本估算引擎 - 命令行入口
// ==========================================
// 用途: 读取零件几何事实 JSON,跑完整估算管线,
//       输出成本记录与 ERP 导出行
// ==========================================

use anyhow::{bail, Context, Result};
use fab_cost_engine::config::cost_model::CostModelConfig;
use fab_cost_engine::config::options::ProcessingOptions;
use fab_cost_engine::domain::part::PartMetrics;
use fab_cost_engine::engine::router::CostRouter;
use fab_cost_engine::erp::description::describe;
use fab_cost_engine::erp::export::ErpExporter;
use fab_cost_engine::tables::source::{default_speed_table_path, resolve_speed_source};
use std::fs;
use std::sync::Arc;

fn main() -> Result<()> {
    // 初始化日志系统
    fab_cost_engine::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", fab_cost_engine::APP_NAME);
    tracing::info!("系统版本: {}", fab_cost_engine::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let Some(metrics_path) = args.next() else {
        bail!("用法: fab-cost-engine <part_metrics.json> [quantity]");
    };
    let quantity: u32 = match args.next() {
        Some(raw) => raw.parse().context("数量参数必须为正整数")?,
        None => 1,
    };

    // 加载几何事实
    let raw = fs::read_to_string(&metrics_path)
        .with_context(|| format!("无法读取几何事实文件: {}", metrics_path))?;
    let metrics: PartMetrics =
        serde_json::from_str(&raw).context("几何事实 JSON 解析失败")?;

    // 构造期选定配置与速度数据源（JSON 覆盖 → 内置兜底）
    let config = CostModelConfig::load_or_default(CostModelConfig::default_path().as_deref());
    let speed_source = resolve_speed_source(default_speed_table_path().as_deref());

    let options = ProcessingOptions {
        quantity_override: Some(quantity),
        nest_efficiency: config.default_nest_efficiency,
        ..ProcessingOptions::default()
    };

    let router = CostRouter::new(Arc::new(config), speed_source);
    let record = router.estimate_part(&metrics, &options, quantity)?;

    // 成本记录
    println!("{}", serde_json::to_string_pretty(&record)?);

    // ERP 导出行
    let description = describe(&metrics, record.classification);
    let quote_date = chrono::Local::now().date_naive();
    let csv = ErpExporter::export_csv(&[(&record, description)], quote_date)?;
    println!("{}", csv);

    Ok(())
}
