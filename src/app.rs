use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::format::format_result;
use crate::i18n::{self, Translator};
use crate::number_base::{convert_number_base, NumberBase};
use crate::quantity::QuantityKind;
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// 대화형 홈 메뉴 루프를 실행한다.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    tr: &Translator,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr, console)? {
            MenuChoice::Converter(QuantityKind::Number) => {
                ui_cli::handle_number_converter(tr, config, console)?
            }
            MenuChoice::Converter(kind) => {
                ui_cli::handle_linear_converter(tr, config, kind, console)?
            }
            MenuChoice::Exit => {
                console.println(tr.t(i18n::keys::APP_EXIT))?;
                break;
            }
        }
    }
    info!("home menu closed");
    Ok(())
}

/// `convert` 명령: 결과 줄과 (있다면) 힌트 줄을 돌려준다.
pub fn convert_command(
    tr: &Translator,
    kind: QuantityKind,
    value: &str,
    from: &str,
    to: &str,
) -> Result<Vec<String>, AppError> {
    let result = conversion::convert(kind, value, from, to)?;
    let formatted = format_result(result.value);
    let mut lines = vec![tr.tf(
        i18n::keys::RESULT,
        &[("value", formatted.as_str()), ("unit", result.unit)],
    )];
    lines.extend(ui_cli::hint_line(tr, result.hint()));
    Ok(lines)
}

/// `base` 명령: 진법 이름을 해석한 뒤 변환한다. 빈 입력이면 결과도 비어 있다.
pub fn base_command(value: &str, from: &str, to: &str) -> Result<String, AppError> {
    let source: NumberBase = from.parse()?;
    let target: NumberBase = to.parse()?;
    Ok(convert_number_base(value, source, target))
}

/// `units` 명령: 분류의 단위와 배율을 나열한다. 기준 단위에는 `*` 표시를 붙인다.
pub fn units_command(kind: QuantityKind) -> Vec<String> {
    match kind.table() {
        Some(table) => table
            .entries
            .iter()
            .map(|(unit, factor)| {
                let marker = if *factor == 1.0 { " *" } else { "" };
                format!("{unit}\t{factor}{marker}")
            })
            .collect(),
        None => NumberBase::ALL
            .iter()
            .map(|base| format!("{}\t{}", base.name(), base.radix()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_command_marks_base_unit() {
        let lines = units_command(QuantityKind::Currency);
        assert_eq!(lines[0], "INR\t1 *");
        assert_eq!(lines.iter().filter(|l| l.ends_with(" *")).count(), 1);
    }

    #[test]
    fn units_command_lists_bases_for_number() {
        let lines = units_command(QuantityKind::Number);
        assert_eq!(lines, vec!["Decimal\t10", "Binary\t2", "Octal\t8", "Hex\t16"]);
    }

    #[test]
    fn base_command_rejects_unknown_base() {
        let err = base_command("1", "decimal", "base3").unwrap_err();
        assert!(matches!(err, AppError::Conversion(ConversionError::UnknownBase(_))));
    }

    #[test]
    fn convert_command_prints_result_and_hint() {
        let tr = Translator::new("en");
        let lines = convert_command(&tr, QuantityKind::Length, "100", "km", "m").expect("convert");
        assert_eq!(lines, vec!["Result: 100000.00 m", "Hint: Multiply by 1000.00"]);

        let lines = convert_command(&tr, QuantityKind::Volume, "1", "mL", "L").expect("convert");
        assert_eq!(lines, vec!["Result: 0.001 L", "Hint: Divide by 1000.00"]);
    }

    #[test]
    fn convert_command_omits_hint_for_same_unit() {
        let tr = Translator::new("en");
        let lines = convert_command(&tr, QuantityKind::Weight, "3", "kg", "kg").expect("convert");
        assert_eq!(lines, vec!["Result: 3.00 kg"]);
    }

    #[test]
    fn convert_command_rejects_unknown_unit() {
        let tr = Translator::new("en");
        let err = convert_command(&tr, QuantityKind::Length, "1", "furlong", "m").unwrap_err();
        assert!(matches!(
            err,
            AppError::Conversion(ConversionError::UnknownUnit { .. })
        ));
    }
}
