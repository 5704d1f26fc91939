// ==========================================
// 制造成本估算引擎 - ERP 映射层
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 2. Description/ERP mapping
// ==========================================
// 职责: 只读消费已终结成本记录 — 描述生成与平面文件导出
// 红线: 本层不得回写记录,不含成本公式
// ==========================================

pub mod description;
pub mod export;

pub use description::describe;
pub use export::{ErpExportError, ErpExporter};
