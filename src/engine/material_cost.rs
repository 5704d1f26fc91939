// ==========================================
// 制造成本估算引擎 - 原材料成本计算器
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.5 Material Cost
// ==========================================
// 红线: 套料效率与名义重量禁止零除,下限钳制而非传播 NaN
// ==========================================

use crate::domain::cost::MaterialCost;
use crate::tables::material::cost_per_lb;

// 套料效率下限
const MIN_NEST_EFFICIENCY: f64 = 0.05;

// ==========================================
// MaterialCostCalculator - 原材料成本计算器
// ==========================================
pub struct MaterialCostCalculator;

impl MaterialCostCalculator {
    /// 原材料成本
    ///
    /// # 规则
    /// - 修正重量 = 毛重 / max(套料效率, 0.05)
    /// - 单件成本 = 修正重量 × 磅价;批量 = 单件 × 数量
    /// - 毛重 ≤0 → 全零结果
    pub fn calculate(
        weight_lb: f64,
        material_code: &str,
        quantity: u32,
        nest_efficiency: f64,
    ) -> MaterialCost {
        if weight_lb <= 0.0 {
            return MaterialCost::zero();
        }

        let nest = nest_efficiency.max(MIN_NEST_EFFICIENCY);
        let price_per_lb = cost_per_lb(material_code);
        let adjusted_weight_lb = weight_lb / nest;
        let cost_per_piece = adjusted_weight_lb * price_per_lb;

        MaterialCost {
            cost_per_lb: price_per_lb,
            adjusted_weight_lb,
            cost_per_piece,
            total_material_cost: cost_per_piece * quantity as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nest_efficiency_adjustment() {
        let cost = MaterialCostCalculator::calculate(10.0, "CS", 1, 0.85);
        assert!((cost.adjusted_weight_lb - 10.0 / 0.85).abs() < 1e-12);
        assert_eq!(cost.cost_per_lb, 0.62);
        assert!((cost.cost_per_piece - (10.0 / 0.85) * 0.62).abs() < 1e-12);
    }

    #[test]
    fn test_quantity_scaling() {
        let cost = MaterialCostCalculator::calculate(10.0, "CS", 4, 0.85);
        assert!((cost.total_material_cost - cost.cost_per_piece * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_nest_efficiency_is_floored() {
        let cost = MaterialCostCalculator::calculate(10.0, "CS", 1, 0.0);
        assert!(cost.cost_per_piece.is_finite()); // 零除钳制
        assert!((cost.adjusted_weight_lb - 10.0 / 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_is_zero() {
        let cost = MaterialCostCalculator::calculate(0.0, "CS", 5, 0.85);
        assert_eq!(cost, MaterialCost::zero());
    }
}
