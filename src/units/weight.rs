use super::UnitTable;

/// 질량 단위. 기준은 kg이다.
pub const WEIGHT_UNITS: UnitTable = UnitTable {
    category: "weight",
    initial: "kg",
    entries: &[
        ("kg", 1.0),
        ("g", 0.001),
        ("mg", 0.000001),
        ("t", 1000.0),
        ("lb", 0.45359237),
        ("oz", 0.028349523125),
        ("st", 6.35029318),
    ],
    aliases: &[("lbs", "lb"), ("ton", "t"), ("tonne", "t"), ("stone", "st")],
};
