// ==========================================
// 制造成本估算引擎 - 零件分类器
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.4 Classifier / Router
// ==========================================
// 状态机: Unclassified → {SheetMetal|Tube|Purchased|Generic} → 终态
// 红线: 钣金优先、管材其次 — 顺序承载业务语义,
//       调换顺序会改变歧义零件（如带展开图的薄壁方管）的归类
// 所有规则必须输出 reason
// ==========================================

use crate::domain::part::{PartMetrics, TubeFacts};
use crate::domain::types::PartClass;
use crate::engine::error::EstimateError;
use tracing::debug;

// ===== 退化几何下限 =====
const MIN_VALID_THICKNESS_IN: f64 = 1e-4;
const MIN_VALID_MASS_KG: f64 = 1e-6;
// ===== 管材启发式 =====
const MIN_TUBE_LENGTH_IN: f64 = 0.5;

// ==========================================
// PartClassifier - 零件分类器
// ==========================================
pub struct PartClassifier;

impl PartClassifier {
    /// 零件分类
    ///
    /// # 规则
    /// 1. 材料代码缺失 → 输入校验失败（终态 Failed）
    /// 2. 外购/客供覆盖标志 → Purchased（短路,不做几何判定）
    /// 3. 展开图有效 → SheetMetal（钣金优先）
    /// 4. 管材启发式命中 → Tube（含实心圆棒特例）
    /// 5. 厚度与质量均低于下限 → 几何无效（唯一主动拒绝路径）
    /// 6. 其他 → Generic
    ///
    /// # 返回
    /// - (PartClass, Vec<String>): 终态分类 + 决策原因
    pub fn classify(metrics: &PartMetrics) -> Result<(PartClass, Vec<String>), EstimateError> {
        let mut reasons = Vec::new();

        // 规则 1: 输入校验
        if metrics.material_code.trim().is_empty() {
            return Err(EstimateError::MissingMaterial(metrics.part_no.clone()));
        }

        // 规则 2: 外购/客供短路
        if metrics.purchased_flag || metrics.customer_supplied_flag {
            reasons.push(if metrics.customer_supplied_flag {
                "PURCHASED: customer_supplied_flag=1".to_string()
            } else {
                "PURCHASED: purchased_flag=1".to_string()
            });
            return Ok((PartClass::Purchased, reasons));
        }

        // 规则 3: 钣金优先
        if metrics.has_flat_pattern {
            reasons.push("SHEET_METAL: valid flat pattern".to_string());
            return Ok((PartClass::SheetMetal, reasons));
        }

        // 规则 4: 管材启发式
        if let Some(tube) = &metrics.tube {
            if Self::is_tube_candidate(tube) {
                reasons.push(format!(
                    "TUBE: shape={} od={:.3} wall={:.3} length={:.3}",
                    tube.shape, tube.outer_diameter_in, tube.wall_thickness_in, tube.length_in
                ));
                return Ok((PartClass::Tube, reasons));
            }
            debug!(
                part_no = %metrics.part_no,
                shape = %tube.shape,
                "管材启发式未命中,继续落入通用分类"
            );
        }

        // 规则 5: 退化几何拒绝
        if metrics.thickness_in < MIN_VALID_THICKNESS_IN && metrics.mass_kg < MIN_VALID_MASS_KG {
            return Err(EstimateError::InvalidGeometry(format!(
                "零件 {} 厚度与质量均低于下限",
                metrics.part_no
            )));
        }

        // 规则 6: 默认 Generic
        reasons.push("GENERIC: fallthrough with measurable mass".to_string());
        Ok((PartClass::Generic, reasons))
    }

    /// 管材启发式
    ///
    /// # 规则
    /// - 实心圆棒特例: 壁厚 0 但外径与长度有效
    /// - 常规: 壁厚 >0 且 长度 ≥0.5in 且 长度 > 2 × 壁厚
    fn is_tube_candidate(tube: &TubeFacts) -> bool {
        if tube.is_solid_round_bar() {
            return tube.outer_diameter_in > 0.0 && tube.length_in > 0.0;
        }
        tube.wall_thickness_in > 0.0
            && tube.length_in >= MIN_TUBE_LENGTH_IN
            && tube.length_in > 2.0 * tube.wall_thickness_in
    }
}
