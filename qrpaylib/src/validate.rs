//! Проверка записи против ограничений EPC QR. Собираем все нарушения, без раннего выхода.

use crate::{error::ValidationError, model::SourceRecord};
use regex::Regex;
use rust_decimal::Decimal;
use std::{ops::Deref, sync::LazyLock};
use tracing::debug;

pub const MAX_RECIPIENT_LEN: usize = 70;
pub const MAX_REFERENCE_LEN: usize = 35;
pub const MAX_TEXT_LEN: usize = 140;
pub const PURPOSE_CODE_LEN: usize = 4;

/// 999 999 999.99 (мантисса 99_999_999_999 = 23 * 2^32 + 1_215_752_191).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

// только структура: страна, контрольные цифры, BBAN; mod-97 не считаем
static IBAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").expect("IBAN regex"));
static PURPOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}$").expect("purpose code regex"));

struct Rule {
    message: &'static str,
    check: fn(&SourceRecord) -> bool,
}

/// Порядок важен: в нём же выдаются сообщения.
const RULES: [Rule; 6] = [
    Rule {
        message: "Beneficiary name must be present and not exceed 70 characters",
        check: recipient_name_ok,
    },
    Rule {
        message: "Invalid IBAN format",
        check: iban_ok,
    },
    Rule {
        message: "Amount must be a positive number not exceeding 999,999,999.99",
        check: amount_ok,
    },
    Rule {
        message: "Purpose code must be 4 uppercase letters",
        check: purpose_code_ok,
    },
    Rule {
        message: "Reference must be present and not exceed 35 characters",
        check: reference_ok,
    },
    Rule {
        message: "Description must not exceed 140 characters",
        check: description_ok,
    },
];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn recipient_name_ok(rec: &SourceRecord) -> bool {
    let name = &rec.recipient.name;
    !name.is_empty() && char_len(name) <= MAX_RECIPIENT_LEN
}

fn iban_ok(rec: &SourceRecord) -> bool {
    IBAN_RE.is_match(&strip_whitespace(&rec.payment.iban))
}

fn amount_ok(rec: &SourceRecord) -> bool {
    matches!(rec.payment.amount, Some(a) if a > Decimal::ZERO && a <= MAX_AMOUNT)
}

fn purpose_code_ok(rec: &SourceRecord) -> bool {
    let code = &rec.payment.purpose_code;
    code.is_empty() || PURPOSE_RE.is_match(code)
}

fn reference_ok(rec: &SourceRecord) -> bool {
    let r = &rec.payment.reference;
    !r.is_empty() && char_len(r) <= MAX_REFERENCE_LEN
}

fn description_ok(rec: &SourceRecord) -> bool {
    char_len(&rec.payment.description) <= MAX_TEXT_LEN
}

/// Все нарушения в порядке правил; пустой вектор — запись годится для EPC.
pub fn validate(rec: &SourceRecord) -> Vec<String> {
    let errors: Vec<String> = RULES
        .iter()
        .filter(|rule| !(rule.check)(rec))
        .map(|rule| rule.message.to_string())
        .collect();
    debug!(violations = errors.len(), "validated UPN record");
    errors
}

/// Запись, прошедшая `validate` без замечаний. Единственный вход кодировщика.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecord(SourceRecord);

impl ValidRecord {
    pub fn new(rec: SourceRecord) -> Result<Self, ValidationError> {
        let messages = validate(&rec);
        if messages.is_empty() {
            Ok(Self(rec))
        } else {
            Err(ValidationError { messages })
        }
    }

    pub fn into_inner(self) -> SourceRecord {
        self.0
    }
}

impl TryFrom<SourceRecord> for ValidRecord {
    type Error = ValidationError;

    fn try_from(rec: SourceRecord) -> Result<Self, Self::Error> {
        Self::new(rec)
    }
}

impl Deref for ValidRecord {
    type Target = SourceRecord;

    fn deref(&self) -> &SourceRecord {
        &self.0
    }
}
