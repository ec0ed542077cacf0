//! Symbol table and encoding tests

use morse_core::{encode, letter_code, Reason, Symbol, SYMBOL_TABLE};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case('A', "*-")]
#[case('b', "-***")]
#[case('Q', "--*-")]
#[case('z', "--**")]
#[case('0', "-----")]
#[case('7', "--***")]
#[case('.', "*-*-*-")]
#[case(',', "--**--")]
#[case('?', "**--**")]
#[case('"', "*-**-*")]
#[case('/', "-**-*")]
#[case(' ', " ")]
fn test_letter_code_rendering(#[case] character: char, #[case] expected: &str) {
    let code = letter_code(character).unwrap();
    assert_eq!(code.to_string(), expected);
}

#[rstest]
#[case('#')]
#[case('!')]
#[case('\n')]
#[case('\0')]
#[case('\u{7f}')]
#[case('\u{ff}')]
fn test_unmapped_in_range(#[case] character: char) {
    let err = letter_code(character).unwrap_err();
    assert_eq!(err.character(), character);
    assert_eq!(err.reason(), Reason::Unmapped);
}

#[rstest]
#[case("SOS", "*** --- ***")]
#[case("sos", "*** --- ***")]
#[case("HELLO WORLD", "**** * *-** *-** ---   *-- --- *-* *-** -**")]
#[case("A B", "*-   -***")]
#[case("73", "--*** ***--")]
fn test_encode_rendering(#[case] message: &str, #[case] expected: &str) {
    let encoded = encode(message).unwrap();
    assert_eq!(encoded.to_string(), expected);
    assert_eq!(encoded.render::<64>().unwrap().as_str(), expected);
}

#[test]
fn test_error_display() {
    let err = encode("CQ#").unwrap_err();
    assert_eq!(err.to_string(), "character '#' at position 2 has no Morse code");

    let err = letter_code('Ω').unwrap_err();
    assert_eq!(
        err.to_string(),
        "character 'Ω' (U+03A9) at position 0 is outside the Morse table"
    );

    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_table_is_stable() {
    let first: Vec<_> = SYMBOL_TABLE.iter().collect();
    let second: Vec<_> = SYMBOL_TABLE.iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 42);
}

#[test]
fn test_only_space_contains_gap() {
    for (character, code) in SYMBOL_TABLE.iter() {
        let has_gap = code.symbols().contains(&Symbol::Gap);
        assert_eq!(has_gap, character == ' ', "unexpected gap in {:?}", character);
    }
}

proptest! {
    #[test]
    fn prop_case_folding(letter in prop::char::range('a', 'z')) {
        let lower = letter_code(letter).unwrap();
        let upper = letter_code(letter.to_ascii_uppercase()).unwrap();
        prop_assert_eq!(lower, upper);
        prop_assert!(!lower.is_empty());
    }

    #[test]
    fn prop_above_255_always_rejected(character in prop::char::range('\u{100}', char::MAX)) {
        let err = letter_code(character).unwrap_err();
        prop_assert_eq!(err.reason(), Reason::OutOfRange);
        prop_assert!(!SYMBOL_TABLE.contains(character));

        let message = format!("AB{}", character);
        let err = encode(&message).unwrap_err();
        prop_assert_eq!(err.character(), character);
        prop_assert_eq!(err.position(), 2);
    }

    #[test]
    fn prop_byte_domain_is_total(byte in any::<u8>()) {
        // Every byte either resolves or is reported as unmapped
        match letter_code(byte as char) {
            Ok(code) => prop_assert!(!code.is_empty()),
            Err(err) => prop_assert_eq!(err.reason(), Reason::Unmapped),
        }
    }
}
