//! 진법 변환 회귀 테스트.
use units_converter::number_base::{convert_number_base, NumberBase};

#[test]
fn hex_to_binary() {
    assert_eq!(
        convert_number_base("FF", NumberBase::Hex, NumberBase::Binary),
        "11111111"
    );
}

#[test]
fn empty_input_has_no_result() {
    assert_eq!(convert_number_base("", NumberBase::Decimal, NumberBase::Binary), "");
    assert_eq!(convert_number_base("   ", NumberBase::Hex, NumberBase::Octal), "");
}

#[test]
fn zero_is_zero_in_every_base() {
    for from in NumberBase::ALL {
        for to in NumberBase::ALL {
            assert_eq!(convert_number_base("0", from, to), "0", "{from} -> {to}");
        }
    }
}

#[test]
fn output_is_uppercase() {
    assert_eq!(convert_number_base("255", NumberBase::Decimal, NumberBase::Hex), "FF");
    assert_eq!(convert_number_base("abc", NumberBase::Hex, NumberBase::Hex), "ABC");
    assert_eq!(convert_number_base("abc", NumberBase::Hex, NumberBase::Decimal), "2748");
}

#[test]
fn invalid_digits_become_zero() {
    assert_eq!(convert_number_base("102", NumberBase::Binary, NumberBase::Decimal), "0");
    assert_eq!(convert_number_base("8", NumberBase::Octal, NumberBase::Decimal), "0");
    assert_eq!(convert_number_base("G1", NumberBase::Hex, NumberBase::Decimal), "0");
    assert_eq!(convert_number_base("1.5", NumberBase::Decimal, NumberBase::Binary), "0");
}

#[test]
fn octal_and_binary_paths() {
    assert_eq!(convert_number_base("17", NumberBase::Octal, NumberBase::Decimal), "15");
    assert_eq!(convert_number_base("1010", NumberBase::Binary, NumberBase::Octal), "12");
    assert_eq!(convert_number_base("64", NumberBase::Decimal, NumberBase::Octal), "100");
}

#[test]
fn negative_decimal_uses_twos_complement() {
    assert_eq!(convert_number_base("-1", NumberBase::Decimal, NumberBase::Hex), "FFFFFFFF");
    assert_eq!(convert_number_base("-1", NumberBase::Decimal, NumberBase::Decimal), "-1");
}
