// ==========================================
// 制造成本估算引擎 - 核心库
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 系统宪法
// 系统定位: CAD 自动化插件的成本估算核心
// 红线: 与宏系统输出逐位兼容;核心为纯计算,无 I/O
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 几何事实与成本记录
pub mod domain;

// 查找表层 - 密度/磅价/激光速度/管规格
pub mod tables;

// 引擎层 - 分类/路由/工作中心公式
pub mod engine;

// 配置层 - 费率与处理选项
pub mod config;

// ERP 映射层 - 描述生成与平面文件导出
pub mod erp;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{MaterialFamily, PartClass, TubeShape, WorkCenter};

// 领域实体
pub use domain::{
    AssemblyCostSummary, BomQuantityMap, MassComparisonResult, MaterialCost, PartCostRecord,
    PartMetrics, SheetFacts, TubeFacts, WorkCenterResult,
};

// 引擎
pub use engine::{
    CostAggregator, CostRouter, EstimateError, LaserSpeed, LaserSpeedProvider, MassValidator,
    PartClassifier,
};

// 配置
pub use config::{CostModelConfig, ProcessingOptions};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "制造成本估算引擎";
