use super::UnitTable;

/// 체적 단위. 기준은 리터이다.
pub const VOLUME_UNITS: UnitTable = UnitTable {
    category: "volume",
    initial: "L",
    entries: &[
        ("L", 1.0),
        ("mL", 0.001),
        ("m³", 1000.0),
        ("cm³", 0.000001),
        ("mm³", 0.000000001),
    ],
    aliases: &[
        ("liter", "L"),
        ("litre", "L"),
        ("m3", "m³"),
        ("m^3", "m³"),
        ("cm3", "cm³"),
        ("cc", "cm³"),
        ("mm3", "mm³"),
    ],
};
