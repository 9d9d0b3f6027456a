//! 단위 테이블 정의 모음. 각 분류는 기준 단위(계수 1.0)에 대한 배율로 단위를 표현한다.

pub mod currency;
pub mod length;
pub mod volume;
pub mod weight;

pub use currency::CURRENCY_UNITS;
pub use length::LENGTH_UNITS;
pub use volume::VOLUME_UNITS;
pub use weight::WEIGHT_UNITS;

/// 단위 이름 → 기준 단위 대비 배율 테이블.
///
/// `entries`는 화면에 보여줄 순서를 그대로 유지한다.
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    /// 분류 이름 (예: "length")
    pub category: &'static str,
    /// 변환기를 열었을 때 처음 선택되는 단위
    pub initial: &'static str,
    pub entries: &'static [(&'static str, f64)],
    /// ASCII 입력용 별칭 (별칭, 실제 단위명)
    pub aliases: &'static [(&'static str, &'static str)],
}

impl UnitTable {
    /// 단위 이름으로 배율을 찾는다. 정확히 일치 → 대소문자 무시 → 별칭 순으로 찾는다.
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.resolve(name).map(|(_, factor)| factor)
    }

    /// 입력된 이름을 테이블상의 정식 단위명과 배율로 바꾼다.
    pub fn resolve(&self, name: &str) -> Option<(&'static str, f64)> {
        let name = name.trim();
        if let Some(&(unit, factor)) = self.entries.iter().find(|(u, _)| *u == name) {
            return Some((unit, factor));
        }
        if let Some(&(unit, factor)) = self
            .entries
            .iter()
            .find(|(u, _)| u.eq_ignore_ascii_case(name))
        {
            return Some((unit, factor));
        }
        self.aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .and_then(|(_, target)| self.entries.iter().find(|(u, _)| u == target))
            .map(|&(unit, factor)| (unit, factor))
    }

    /// 계수가 1.0인 기준 단위.
    pub fn base_unit(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, factor)| *factor == 1.0)
            .map(|(unit, _)| *unit)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(unit, _)| *unit)
    }
}

/// 모든 선형 단위 테이블.
pub const ALL_TABLES: [&UnitTable; 4] = [
    &LENGTH_UNITS,
    &VOLUME_UNITS,
    &CURRENCY_UNITS,
    &WEIGHT_UNITS,
];
