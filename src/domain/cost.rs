// ==========================================
// 制造成本估算引擎 - 成本结果模型
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 3. 数据模型 PartCostRecord
// 依据: Legacy_Macro_Parity_v0.9.md - 价格公式
// ==========================================
// 红线: 记录由聚合器终结后只读,下游不得回写
// ==========================================

use crate::domain::types::{PartClass, WorkCenter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// WorkCenterResult - 工作中心工时与价格
// ==========================================
// 价格公式: price = (setup_hours + run_hours × quantity) × 小时费率
// 红线: setup 不乘数量,run 乘数量;工时恒 ≥0
// 不适用的工作中心产出全零结果,而非缺失
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCenterResult {
    pub work_center: WorkCenter, // 工作中心代码
    pub setup_hours: f64,        // 准备工时（与数量无关）
    pub run_hours: f64,          // 单件运行工时
    pub price: f64,              // 批量价格（美元）
}

impl WorkCenterResult {
    /// 全零结果（工作中心不适用时的占位）
    pub fn zero(work_center: WorkCenter) -> Self {
        Self {
            work_center,
            setup_hours: 0.0,
            run_hours: 0.0,
            price: 0.0,
        }
    }

    /// 按价格公式定价
    ///
    /// # 规则
    /// - price = (setup + run × quantity) × hourly_rate
    pub fn priced(
        work_center: WorkCenter,
        setup_hours: f64,
        run_hours: f64,
        quantity: u32,
        hourly_rate: f64,
    ) -> Self {
        let price = (setup_hours + run_hours * quantity as f64) * hourly_rate;
        Self {
            work_center,
            setup_hours,
            run_hours,
            price,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.setup_hours == 0.0 && self.run_hours == 0.0 && self.price == 0.0
    }
}

// ==========================================
// MaterialCost - 原材料成本
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCost {
    pub cost_per_lb: f64,         // 磅价（美元/lb）
    pub adjusted_weight_lb: f64,  // 套料效率修正后重量（lb）
    pub cost_per_piece: f64,      // 单件材料成本
    pub total_material_cost: f64, // 批量材料成本（单件 × 数量）
}

impl MaterialCost {
    pub fn zero() -> Self {
        Self {
            cost_per_lb: 0.0,
            adjusted_weight_lb: 0.0,
            cost_per_piece: 0.0,
            total_material_cost: 0.0,
        }
    }
}

// ==========================================
// PartCostRecord - 零件成本记录
// ==========================================
// 生命周期: 每零件每次估算构造一次,聚合器终结后只读
// 下游: 属性回写层 / ERP 导出层（本引擎之外）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCostRecord {
    pub part_no: String,                                   // 零件号
    pub classification: PartClass,                         // 终结分类
    pub classification_reasons: Vec<String>,               // 分类决策原因（可解释性）
    pub quantity: u32,                                     // 估算数量
    pub work_centers: BTreeMap<WorkCenter, WorkCenterResult>, // 工作中心结果（按代码有序）
    pub material: MaterialCost,                            // 原材料成本
    pub total_processing_cost: f64,                        // 加工合计（Σ 工作中心价格）
    pub grand_total: f64,                                  // 总价（材料 + 加工）
}

impl PartCostRecord {
    /// 查询某工作中心结果
    pub fn work_center(&self, wc: WorkCenter) -> Option<&WorkCenterResult> {
        self.work_centers.get(&wc)
    }
}

// ==========================================
// AssemblyCostSummary - 装配/批量汇总
// ==========================================
// 规则: 总价 = Σ 子记录 grand_total × BOM 数量
// 红线: 除此之外不存在其他聚合路径
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyCostSummary {
    pub part_records: Vec<(PartCostRecord, u32)>, // (子记录, BOM 数量)
    pub failed_parts: Vec<(String, String)>,      // (零件号, 失败原因)
    pub total_cost: f64,                          // 数量加权总价
}

// ==========================================
// MassComparisonResult - 质量校验结果
// ==========================================
// 用途: QA 校验工具按需创建,无状态,不持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassComparisonResult {
    pub calculated_kg: f64,       // 计算质量
    pub measured_kg: f64,         // 实测质量
    pub percent_difference: f64,  // 百分比偏差
    pub within_tolerance: bool,   // 是否在容差内
    pub message: String,          // 校验说明
}
