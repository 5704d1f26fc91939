// ==========================================
// 制造成本估算引擎 - 领域层
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 3. 数据模型
// ==========================================
// 职责: 定义几何事实输入与成本记录输出
// 红线: 领域层无业务公式,公式全部在引擎层
// ==========================================

pub mod cost;
pub mod part;
pub mod types;

pub use cost::{
    AssemblyCostSummary, MassComparisonResult, MaterialCost, PartCostRecord, WorkCenterResult,
};
pub use part::{BomQuantityMap, PartMetrics, SheetFacts, TubeFacts, KG_TO_LB};
pub use types::{MaterialFamily, PartClass, TubeShape, WorkCenter};
