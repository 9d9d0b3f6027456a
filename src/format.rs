//! 결과 표시 형식.

/// 변환 결과를 화면 표시용 문자열로 만든다.
///
/// 0과 1 사이(양 끝 제외)의 값은 소수점 10자리까지 표시하고 뒤쪽 0을 지운다.
/// 그 밖의 값은 항상 소수점 2자리로 표시한다. 소수점 구분자는 항상 '.' 이다.
pub fn format_result(value: f64) -> String {
    if value > 0.0 && value < 1.0 {
        let s = format!("{value:.10}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{value:.2}")
    }
}
