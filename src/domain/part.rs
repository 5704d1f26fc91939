// ==========================================
// 制造成本估算引擎 - 零件几何事实模型
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 3. 数据模型 PartMetrics
// 依据: Field_Mapping_CAD_v1.1.md - CAD 属性字段映射
// ==========================================
// 用途: 几何提取层写入,估算引擎只读
// 红线: 单次估算内不可变,引擎不得回写几何事实
// ==========================================

use crate::domain::types::TubeShape;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

// 质量单位换算: CAD 质量属性为 kg,宏系统全程使用 lb
// 换算系数与宏系统常量逐位一致,不得四舍五入
pub const KG_TO_LB: f64 = 2.204_622_621_85;

// ==========================================
// PartMetrics - 零件几何事实
// ==========================================
// 对齐: CAD 几何提取层输出（展开图/折弯/管材识别结果）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartMetrics {
    // ===== 标识 =====
    pub part_no: String,                 // 零件号
    pub file_path: Option<String>,       // 源文件路径（BOM 数量查找键①）
    pub configuration: Option<String>,   // 配置名（BOM 数量查找键②）

    // ===== 基础几何 =====
    pub thickness_in: f64,               // 厚度（in）
    pub material_code: String,           // 材料代码（字符串匹配选族）
    pub cut_length_in: f64,              // 近似切割长度（in）
    pub pierce_count: u32,               // 穿孔数（≥0）
    pub mass_kg: f64,                    // 实测质量（kg，CAD 公制口径）
    pub bbox_length_in: f64,             // 包围盒长（in）
    pub bbox_width_in: f64,              // 包围盒宽（in）

    // ===== 分类输入 =====
    pub has_flat_pattern: bool,          // 展开图检查结果（外部几何检查,作为事实传入）
    pub purchased_flag: bool,            // 外购件覆盖标志（短路分类）
    pub customer_supplied_flag: bool,    // 客供件覆盖标志（短路分类）

    // ===== 子记录 =====
    pub sheet: Option<SheetFacts>,       // 钣金事实（展开图有效时提供）
    pub tube: Option<TubeFacts>,         // 管材事实（管材识别成功时提供）
}

impl PartMetrics {
    /// 原始重量（lb）
    ///
    /// CAD 质量为 kg,成本公式全部以 lb 计
    pub fn raw_weight_lb(&self) -> f64 {
        self.mass_kg * KG_TO_LB
    }
}

// ==========================================
// SheetFacts - 钣金子记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetFacts {
    pub bend_count: u32,           // 折弯数
    pub longest_bend_in: f64,      // 最长折弯线长度（in）
    pub max_bend_radius_in: f64,   // 最大折弯半径（in,>2.0 触发滚弯）
    pub needs_flip: bool,          // 折弯过程需要翻面
    pub tapped_hole_count: u32,    // 攻丝孔数
}

// ==========================================
// TubeFacts - 管材子记录
// ==========================================
// 红线: wall=0 且 outer_diameter>0 为实心圆棒特例,走锯切
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TubeFacts {
    pub shape: TubeShape,          // 截面形状
    pub outer_diameter_in: f64,    // 外径/外廓尺寸（in）
    pub wall_thickness_in: f64,    // 壁厚（in,实心圆棒为0）
    pub inner_diameter_in: f64,    // 内径（in）
    pub length_in: f64,            // 长度（in）
}

impl TubeFacts {
    /// 是否为实心圆棒变体
    pub fn is_solid_round_bar(&self) -> bool {
        self.shape == TubeShape::RoundBar
            || (self.wall_thickness_in <= 0.0
                && self.outer_diameter_in > 0.0
                && self.length_in > 0.0)
    }
}

// ==========================================
// BomQuantityMap - BOM 数量映射
// ==========================================
// 用途: 装配遍历层产出,(文件路径,配置) → 数量
// 缺失键按 1 兜底并记录日志,不视为错误
#[derive(Debug, Clone, Default)]
pub struct BomQuantityMap {
    quantities: HashMap<(String, String), u32>,
}

impl BomQuantityMap {
    pub fn new() -> Self {
        Self {
            quantities: HashMap::new(),
        }
    }

    /// 登记一条 BOM 数量
    pub fn insert(&mut self, file_path: &str, configuration: &str, quantity: u32) {
        self.quantities
            .insert((file_path.to_string(), configuration.to_string()), quantity);
    }

    /// 查询 BOM 数量
    ///
    /// # 规则
    /// - 命中 → 登记数量
    /// - 未命中 → 1（兜底,warn 日志,不是错误）
    pub fn quantity_for(&self, metrics: &PartMetrics) -> u32 {
        let key = (
            metrics.file_path.clone().unwrap_or_default(),
            metrics.configuration.clone().unwrap_or_default(),
        );
        match self.quantities.get(&key) {
            Some(qty) => *qty,
            None => {
                warn!(
                    part_no = %metrics.part_no,
                    file_path = %key.0,
                    configuration = %key.1,
                    "BOM 数量未登记,按 1 兜底"
                );
                1
            }
        }
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}
