// ==========================================
// 制造成本估算引擎 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 估算管线的步骤边界打 info,规则求值打 debug,
// 兜底路径（BOM 缺失/配置回退）打 warn
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

// 默认过滤器: 引擎自身 info,其余依赖 warn
const DEFAULT_FILTER: &str = "warn,fab_cost_engine=info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn,fab_cost_engine=info）
///   例如: RUST_LOG=fab_cost_engine=debug 可观察逐条规则求值
///
/// # 示例
/// ```no_run
/// use fab_cost_engine::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 捕获到测试输出,仅失败用例回放;重复调用安全
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("fab_cost_engine=debug"))
        .with_test_writer()
        .try_init();
}
