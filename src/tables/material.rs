// ==========================================
// 制造成本估算引擎 - 材料静态表
// ==========================================
// 依据: Legacy_Macro_Parity_v0.9.md - 材料密度/磅价表
// 依据: Cost_Engine_Specs_v1.4.md - 4.1 材料族匹配规则
// ==========================================
// 红线: 材料代码子串匹配顺序为 碳钢 → 铝 → 不锈钢(默认),
//       与宏系统一致,改动顺序会改变歧义代码的归族
// ==========================================

use crate::domain::types::MaterialFamily;

// ==========================================
// 材料族分类 (Material Family Classification)
// ==========================================

// 碳钢识别子串
const CARBON_MARKS: [&str; 5] = ["A36", "CS", "1018", "1020", "1045"];

// 铝合金识别子串
const ALUMINUM_MARKS: [&str; 4] = ["6061", "5052", "3003", "5083"];

/// 按材料代码归族
///
/// # 规则
/// 1. 代码含 A36/CS/1018/1020/1045（忽略大小写）→ 碳钢
/// 2. 代码含 6061/5052/3003/5083,或携带独立 AL 记号 → 铝
/// 3. 其他 → 不锈钢（默认族）
pub fn classify_material_family(material_code: &str) -> MaterialFamily {
    let code = material_code.trim().to_uppercase();

    if CARBON_MARKS.iter().any(|m| code.contains(m)) {
        return MaterialFamily::CarbonSteel;
    }

    if ALUMINUM_MARKS.iter().any(|m| code.contains(m)) || has_al_token(&code) {
        return MaterialFamily::Aluminum;
    }

    MaterialFamily::Stainless
}

// "AL" 仅在作为独立记号（全等/前缀/后缀）时判铝,
// 避免 "ALLOY"/"GALV" 这类代码误归族
fn has_al_token(code_upper: &str) -> bool {
    code_upper == "AL"
        || code_upper.starts_with("AL ")
        || code_upper.starts_with("AL-")
        || code_upper.ends_with(" AL")
        || code_upper.ends_with("-AL")
}

// ==========================================
// 密度表 (Density, lb/in³)
// ==========================================

/// 材料族密度（lb/in³）
pub fn density_lb_per_in3(family: MaterialFamily) -> f64 {
    match family {
        MaterialFamily::CarbonSteel => 0.2836,
        MaterialFamily::Stainless => 0.2890,
        MaterialFamily::Aluminum => 0.0975,
    }
}

// ==========================================
// 磅价表 (Cost per Pound, USD/lb)
// ==========================================

// 具体牌号优先表（有序,先命中先用）
const COST_OVERRIDES: [(&str, f64); 7] = [
    ("A36", 0.58),
    ("1018", 0.66),
    ("1045", 0.75),
    ("316", 2.85),
    ("304", 2.10),
    ("6061", 1.95),
    ("5052", 1.88),
];

/// 按材料代码查磅价
///
/// # 规则
/// 1. 牌号子串命中 → 牌号价
/// 2. 未命中 → 材料族兜底价
pub fn cost_per_lb(material_code: &str) -> f64 {
    let code = material_code.trim().to_uppercase();

    for (mark, price) in COST_OVERRIDES.iter() {
        if code.contains(mark) {
            return *price;
        }
    }

    match classify_material_family(material_code) {
        MaterialFamily::CarbonSteel => 0.62,
        MaterialFamily::Stainless => 2.15,
        MaterialFamily::Aluminum => 1.90,
    }
}
