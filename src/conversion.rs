use thiserror::Error;
use tracing::debug;

use crate::quantity::QuantityKind;

/// 단위 변환 시 발생 가능한 오류. 자유 입력(CLI 인자)에서만 발생한다.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("unknown unit for {kind}: {unit}")]
    UnknownUnit { kind: QuantityKind, unit: String },
    /// 알 수 없는 진법 이름
    #[error("unknown number base: {0}")]
    UnknownBase(String),
    /// 알 수 없는 변환기 이름
    #[error("unknown converter: {0}")]
    UnknownQuantity(String),
    /// 배율 변환을 지원하지 않는 변환기
    #[error("{0} is not a unit-ratio converter")]
    NotLinear(QuantityKind),
}

/// 입력 문자열을 숫자로 읽는다. 빈 문자열, 숫자가 아닌 값, NaN/무한대는 0으로 본다.
pub fn parse_input(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// 입력 단위 배율 / 출력 단위 배율.
pub fn net_factor(source_factor: f64, target_factor: f64) -> f64 {
    source_factor / target_factor
}

/// `value × (source_factor / target_factor)`. 입력을 읽지 못하면 0을 반환한다.
pub fn convert_linear(value: &str, source_factor: f64, target_factor: f64) -> f64 {
    parse_input(value) * net_factor(source_factor, target_factor)
}

/// 환산 힌트. 배율이 1이면 힌트가 없다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hint {
    Multiply(f64),
    Divide(f64),
}

impl Hint {
    pub fn from_net_factor(net: f64) -> Option<Hint> {
        if net > 1.0 {
            Some(Hint::Multiply(net))
        } else if net < 1.0 {
            Some(Hint::Divide(1.0 / net))
        } else {
            None
        }
    }
}

/// 두 단위 배율로부터 힌트를 계산한다.
pub fn hint(source_factor: f64, target_factor: f64) -> Option<Hint> {
    Hint::from_net_factor(net_factor(source_factor, target_factor))
}

/// 단위명 기반 변환 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub net_factor: f64,
    /// 테이블상의 정식 출력 단위명
    pub unit: &'static str,
}

impl Conversion {
    pub fn hint(&self) -> Option<Hint> {
        Hint::from_net_factor(self.net_factor)
    }
}

/// 단위 이름으로 배율을 찾아 변환한다.
///
/// 단위 문자열 예시는 `km`, `mL`, `m3`, `usd`, `lb` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: &str,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<Conversion, ConversionError> {
    let table = kind.table().ok_or(ConversionError::NotLinear(kind))?;
    let unknown = |unit: &str| ConversionError::UnknownUnit {
        kind,
        unit: unit.to_string(),
    };
    let (_, from) = table.resolve(from_unit_str).ok_or_else(|| unknown(from_unit_str))?;
    let (to_name, to) = table.resolve(to_unit_str).ok_or_else(|| unknown(to_unit_str))?;

    let result = Conversion {
        value: convert_linear(value, from, to),
        net_factor: net_factor(from, to),
        unit: to_name,
    };
    debug!(
        %kind,
        value,
        from_unit_str,
        to_unit_str,
        result = result.value,
        "linear conversion"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_degrades_to_zero() {
        assert_eq!(parse_input(""), 0.0);
        assert_eq!(parse_input("abc"), 0.0);
        assert_eq!(parse_input("1.2.3"), 0.0);
        assert_eq!(parse_input("NaN"), 0.0);
        assert_eq!(parse_input("inf"), 0.0);
        assert_eq!(parse_input(" 2.5 "), 2.5);
        assert_eq!(parse_input("-4"), -4.0);
        assert_eq!(parse_input("1e3"), 1000.0);
    }

    #[test]
    fn hint_direction_follows_net_factor() {
        assert_eq!(hint(1000.0, 1.0), Some(Hint::Multiply(1000.0)));
        assert_eq!(hint(1.0, 1000.0), Some(Hint::Divide(1000.0)));
        assert_eq!(hint(0.3048, 0.3048), None);
    }

    #[test]
    fn convert_by_name_rejects_number_kind() {
        let err = convert(QuantityKind::Number, "1", "Decimal", "Hex").unwrap_err();
        assert!(matches!(err, ConversionError::NotLinear(QuantityKind::Number)));
    }
}
