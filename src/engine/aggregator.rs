// ==========================================
// 制造成本估算引擎 - 成本聚合器
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.6 Cost Aggregator
// ==========================================
// 红线: 加工合计 = Σ 工作中心价格,零值中心贡献恰为 0.000;
//       装配总价 = Σ 子记录 grand_total × BOM 数量,
//       除此之外不存在其他聚合路径
// ==========================================

use crate::domain::cost::{MaterialCost, PartCostRecord, WorkCenterResult};
use crate::domain::types::PartClass;
use std::collections::BTreeMap;
use tracing::info;

// ==========================================
// CostAggregator - 成本聚合器
// ==========================================
pub struct CostAggregator;

impl CostAggregator {
    /// 终结单件成本记录
    ///
    /// # 规则
    /// - 加工合计 = Σ 工作中心价格
    /// - 总价 = 材料批量成本 + 加工合计
    /// - 记录终结后只读
    pub fn finalize(
        part_no: &str,
        classification: PartClass,
        classification_reasons: Vec<String>,
        quantity: u32,
        work_centers: Vec<WorkCenterResult>,
        material: MaterialCost,
    ) -> PartCostRecord {
        let mut centers = BTreeMap::new();
        for result in work_centers {
            centers.insert(result.work_center, result);
        }

        let total_processing_cost: f64 = centers.values().map(|r| r.price).sum();
        let grand_total = material.total_material_cost + total_processing_cost;

        info!(
            part_no,
            %classification,
            quantity,
            total_processing_cost,
            grand_total,
            "成本记录终结"
        );

        PartCostRecord {
            part_no: part_no.to_string(),
            classification,
            classification_reasons,
            quantity,
            work_centers: centers,
            material,
            total_processing_cost,
            grand_total,
        }
    }
}
