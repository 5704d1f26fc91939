// ==========================================
// 制造成本估算引擎 - 静态查找表层
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 2. 单位与材料表
// ==========================================
// 职责: 密度/磅价/激光速度/管规格/规格号等只读数据
// 红线: 全部不可变注入,禁止可变全局静态表
// ==========================================

pub mod error;
pub mod gauge;
pub mod material;
pub mod nps;
pub mod source;
pub mod speed;

pub use error::TableError;
pub use gauge::resolve_gauge;
pub use material::{classify_material_family, cost_per_lb, density_lb_per_in3};
pub use nps::resolve_nps;
pub use source::{
    default_speed_table_path, resolve_speed_source, BuiltinSpeedSource, JsonSpeedSource,
    SpeedDataSource,
};
pub use speed::{SpeedEntry, SpeedTable, SpeedTableSet};
