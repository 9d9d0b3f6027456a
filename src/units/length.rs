use super::UnitTable;

/// 길이 단위. 기준은 미터이다.
pub const LENGTH_UNITS: UnitTable = UnitTable {
    category: "length",
    initial: "m",
    entries: &[
        ("km", 1000.0),
        ("m", 1.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("µm", 1e-6),
        ("nm", 1e-9),
        ("ft", 0.3048),
        ("in", 0.0254),
        ("yd", 0.9144),
        ("mi", 1609.34),
        ("nmi", 1852.0),
    ],
    aliases: &[
        ("um", "µm"),
        ("meter", "m"),
        ("metre", "m"),
        ("inch", "in"),
        ("foot", "ft"),
        ("yard", "yd"),
        ("mile", "mi"),
    ],
};
