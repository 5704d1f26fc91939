// ==========================================
// 制造成本估算引擎 - NPS 管规格表
// ==========================================
// 依据: Legacy_Macro_Parity_v0.9.md - 管规格反查表
// ==========================================
// 用途: 由实测外径/壁厚反查标准管规格（描述生成用）
// ==========================================

// 外径容差: 单位换算带来的浮点漂移
const OD_TOLERANCE_IN: f64 = 0.05;
// 壁厚容差
const WALL_TOLERANCE_IN: f64 = 0.02;

// ==========================================
// NPS 规格行 (label, OD, SCH40 壁厚, SCH80 壁厚)
// ==========================================
const NPS_CHART: &[(&str, f64, f64, f64)] = &[
    ("1/2", 0.840, 0.109, 0.147),
    ("3/4", 1.050, 0.113, 0.154),
    ("1", 1.315, 0.133, 0.179),
    ("1-1/4", 1.660, 0.140, 0.191),
    ("1-1/2", 1.900, 0.145, 0.200),
    ("2", 2.375, 0.154, 0.218),
    ("2-1/2", 2.875, 0.203, 0.276),
    ("3", 3.500, 0.216, 0.300),
    ("4", 4.500, 0.237, 0.337),
];

/// 反查 NPS 规格
///
/// # 规则
/// - 外径在 ±0.05in 内命中规格行
/// - 壁厚在 ±0.02in 内命中 SCH 40 或 SCH 80
/// - 均不命中 → None（调用方退回十进制描述）
pub fn resolve_nps(outer_diameter_in: f64, wall_thickness_in: f64) -> Option<String> {
    for (label, od, sch40, sch80) in NPS_CHART.iter() {
        if (outer_diameter_in - od).abs() > OD_TOLERANCE_IN {
            continue;
        }
        if (wall_thickness_in - sch40).abs() <= WALL_TOLERANCE_IN {
            return Some(format!("{} SCH 40", label));
        }
        if (wall_thickness_in - sch80).abs() <= WALL_TOLERANCE_IN {
            return Some(format!("{} SCH 80", label));
        }
    }
    None
}
