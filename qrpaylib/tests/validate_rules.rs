mod common;

use common::{payload_with, sample_payload};
use qrpaylib::{decode, validate, SourceRecord, ValidRecord};
use rust_decimal::Decimal;

const NAME_MSG: &str = "Beneficiary name must be present and not exceed 70 characters";
const IBAN_MSG: &str = "Invalid IBAN format";
const AMOUNT_MSG: &str = "Amount must be a positive number not exceeding 999,999,999.99";
const PURPOSE_MSG: &str = "Purpose code must be 4 uppercase letters";
const REFERENCE_MSG: &str = "Reference must be present and not exceed 35 characters";
const DESCRIPTION_MSG: &str = "Description must not exceed 140 characters";

fn sample() -> SourceRecord {
    decode(&sample_payload()).expect("decode upn")
}

#[test]
fn sample_record_is_valid() {
    assert!(validate(&sample()).is_empty());
    assert!(ValidRecord::new(sample()).is_ok());
}

#[test]
fn every_rule_reports_in_declaration_order() {
    let mut rec = sample();
    rec.recipient.name = String::new();
    rec.payment.iban = "si56 0201".into();
    rec.payment.amount = None;
    rec.payment.purpose_code = "gdsv".into();
    rec.payment.reference = "R".repeat(36);
    rec.payment.description = "d".repeat(141);

    assert_eq!(
        validate(&rec),
        vec![NAME_MSG, IBAN_MSG, AMOUNT_MSG, PURPOSE_MSG, REFERENCE_MSG, DESCRIPTION_MSG]
    );
}

#[test]
fn rules_1_3_5_give_exactly_three_messages() {
    let mut rec = sample();
    rec.recipient.name = "N".repeat(80);
    rec.payment.amount = Some(Decimal::ZERO);
    rec.payment.reference = String::new();

    let errors = validate(&rec);
    assert_eq!(errors, vec![NAME_MSG, AMOUNT_MSG, REFERENCE_MSG]);
    // стабильность между вызовами
    assert_eq!(validate(&rec), errors);
}

#[test]
fn recipient_name_boundary() {
    let mut rec = sample();
    rec.recipient.name = "N".repeat(70);
    assert!(validate(&rec).is_empty());
    rec.recipient.name.push('N');
    assert_eq!(validate(&rec), vec![NAME_MSG]);
}

#[test]
fn iban_whitespace_is_ignored_but_case_is_not() {
    let mut rec = sample();
    rec.payment.iban = " SI56\t0201 0001 2345 678 ".into();
    assert!(validate(&rec).is_empty());

    for bad in ["si56020100012345678", "SI5", "S156020100012345678", "SI56-0201", ""] {
        rec.payment.iban = bad.into();
        assert_eq!(validate(&rec), vec![IBAN_MSG], "iban {bad:?}");
    }

    // 2 + 2 + 31 символ — слишком длинно
    rec.payment.iban = format!("SI56{}", "1".repeat(31));
    assert_eq!(validate(&rec), vec![IBAN_MSG]);
    rec.payment.iban = format!("SI56{}", "1".repeat(30));
    assert!(validate(&rec).is_empty());
}

#[test]
fn amount_bounds() {
    let mut rec = sample();
    for ok in ["0.01", "1234.5", "999999999.99"] {
        rec.payment.amount = Some(Decimal::from_str_exact(ok).unwrap());
        assert!(validate(&rec).is_empty(), "amount {ok}");
    }
    for bad in ["0", "-1.00", "1000000000.00", "999999999.991"] {
        rec.payment.amount = Some(Decimal::from_str_exact(bad).unwrap());
        assert_eq!(validate(&rec), vec![AMOUNT_MSG], "amount {bad}");
    }
}

#[test]
fn negative_and_garbage_amount_lines_fail_validation() {
    let rec = decode(&payload_with(8, "-00000000100")).expect("decode upn");
    assert_eq!(validate(&rec), vec![AMOUNT_MSG]);

    let rec = decode(&payload_with(8, "")).expect("decode upn");
    assert_eq!(validate(&rec), vec![AMOUNT_MSG]);
}

#[test]
fn purpose_code_is_optional_but_strict_when_present() {
    let mut rec = sample();
    rec.payment.purpose_code = String::new();
    assert!(validate(&rec).is_empty());

    for bad in ["GDS", "GDSVX", "GD5V", "Gdsv"] {
        rec.payment.purpose_code = bad.into();
        assert_eq!(validate(&rec), vec![PURPOSE_MSG], "purpose {bad:?}");
    }
}

#[test]
fn reference_boundary() {
    let mut rec = sample();
    rec.payment.reference = "R".repeat(35);
    assert!(validate(&rec).is_empty());
    rec.payment.reference = String::new();
    assert_eq!(validate(&rec), vec![REFERENCE_MSG]);
}

#[test]
fn description_is_optional_up_to_140_chars() {
    let mut rec = sample();
    rec.payment.description = String::new();
    assert!(validate(&rec).is_empty());
    rec.payment.description = "č".repeat(140);
    assert!(validate(&rec).is_empty());
    rec.payment.description.push('x');
    assert_eq!(validate(&rec), vec![DESCRIPTION_MSG]);
}

#[test]
fn valid_record_rejects_with_full_message_list() {
    let mut rec = sample();
    rec.recipient.name.clear();
    rec.payment.reference.clear();

    let err = ValidRecord::try_from(rec).unwrap_err();
    assert_eq!(err.messages, vec![NAME_MSG, REFERENCE_MSG]);
    assert_eq!(
        err.to_string(),
        format!("Validation errors: {NAME_MSG}, {REFERENCE_MSG}")
    );
}

#[test]
fn valid_record_derefs_to_source() {
    let valid = ValidRecord::new(sample()).expect("valid");
    assert_eq!(valid.recipient.name, "Acme d.o.o.");
    assert_eq!(valid.into_inner(), sample());
}
