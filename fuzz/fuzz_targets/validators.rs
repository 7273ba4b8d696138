//! Fuzz target for the format predicates.
//!
//! Every predicate must return without panicking on arbitrary input and
//! agree with the digit and whitespace helpers it is defined by.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use formcheck_text::{numbers_from_string, remove_whitespace};
use formcheck_validation::FormatValidator;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    value: String,
    search: String,
}

fuzz_target!(|input: FuzzInput| {
    let value = input.value.as_str();

    let _ = FormatValidator::is_email(value);
    let card = FormatValidator::is_credit_card(value);

    let digits = numbers_from_string(value).len();
    assert_eq!(FormatValidator::is_phone(value), digits >= 10);
    assert_eq!(FormatValidator::is_zip(value), digits == 5 || digits == 9);
    assert_eq!(FormatValidator::is_empty(value), remove_whitespace(value).is_empty());

    if card {
        assert!(value.bytes().all(|b| b.is_ascii_digit()));
        assert!((7..=19).contains(&value.len()));
    }

    assert_eq!(
        FormatValidator::contains(value, &input.search),
        value.contains(input.search.as_str())
    );
});
