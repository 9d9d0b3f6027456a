use super::UnitTable;

/// 통화 단위. 기준은 INR(인도 루피)이며 환율은 고정값이다.
///
/// 네트워크로 환율을 갱신하지 않는다. 값은 1 단위 통화가 몇 INR인지를 나타낸다.
pub const CURRENCY_UNITS: UnitTable = UnitTable {
    category: "currency",
    initial: "INR",
    entries: &[
        ("INR", 1.0),
        ("USD", 83.0),
        ("EUR", 90.0),
        ("GBP", 105.0),
        ("JPY", 0.56),
        ("AUD", 55.0),
        ("CAD", 61.0),
        ("CNY", 11.5),
        ("AED", 22.6),
    ],
    aliases: &[("rupee", "INR"), ("dollar", "USD"), ("euro", "EUR"), ("yen", "JPY")],
};
