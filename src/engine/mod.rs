// ==========================================
// 制造成本估算引擎 - 引擎层
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4. 组件设计
// ==========================================
// 职责: 分类/路由/工作中心工时与成本公式
// 红线: 全部纯函数,无共享可变状态;所有规则必须输出 reason;
//       数值公式一律下限钳制,禁止 NaN/无穷大流入成本字段
// ==========================================

pub mod aggregator;
pub mod brake;
pub mod classifier;
pub mod deburr;
pub mod error;
pub mod laser;
pub mod mass_check;
pub mod material_cost;
pub mod rollform;
pub mod router;
pub mod saw;
pub mod speed_provider;
pub mod tap;

// 重导出核心引擎
pub use aggregator::CostAggregator;
pub use brake::BrakeCalculator;
pub use classifier::PartClassifier;
pub use deburr::DeburrCalculator;
pub use error::EstimateError;
pub use laser::LaserCalculator;
pub use mass_check::MassValidator;
pub use material_cost::MaterialCostCalculator;
pub use rollform::{RollFormCalculator, RollFormOutcome};
pub use router::CostRouter;
pub use saw::SawCalculator;
pub use speed_provider::{LaserSpeed, LaserSpeedProvider, GAUGE_TOLERANCE_IN};
pub use tap::TapCalculator;
