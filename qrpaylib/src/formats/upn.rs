//! UPN QR: 20 строк через `\n`, строка 19 — контрольная сумма.

use crate::{
    error::{DecodeError, Result},
    model::SourceRecord,
};
use rust_decimal::Decimal;
use std::io::{BufRead, Read};
use tracing::{debug, trace};

/// Строк в бланке, включая контрольную.
pub const LINE_COUNT: usize = 20;
pub const CONTROL_SUM_LINE: usize = 19;
/// Сумма длин строк 0..=18 плюс это смещение (по одному `\n` на строку).
pub const CONTROL_SUM_OFFSET: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Format,
    PayerName,
    PayerAddress,
    PayerCity,
    Amount,
    PurposeCode,
    Description,
    DueDate,
    Iban,
    Reference,
    RecipientName,
    RecipientAddress,
    RecipientCity,
    /// Есть в бланке, но наружу не отдаётся.
    Reserved,
}

/// (индекс строки, имя, поле) — раскладка строк 0..=18.
const LAYOUT: [(usize, &str, Field); CONTROL_SUM_LINE] = [
    (0, "format", Field::Format),
    (1, "payer_iban", Field::Reserved),
    (2, "deposit", Field::Reserved),
    (3, "withdrawal", Field::Reserved),
    (4, "payer_reference", Field::Reserved),
    (5, "payer_name", Field::PayerName),
    (6, "payer_address", Field::PayerAddress),
    (7, "payer_city", Field::PayerCity),
    (8, "amount", Field::Amount),
    (9, "payment_date", Field::Reserved),
    (10, "urgent", Field::Reserved),
    (11, "purpose_code", Field::PurposeCode),
    (12, "description", Field::Description),
    (13, "due_date", Field::DueDate),
    (14, "iban", Field::Iban),
    (15, "reference", Field::Reference),
    (16, "recipient_name", Field::RecipientName),
    (17, "recipient_address", Field::RecipientAddress),
    (18, "recipient_city", Field::RecipientCity),
];

/// Контрольная сумма для строк 0..=18 (длина в символах, не в байтах).
pub fn control_sum<'a, I>(lines: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(CONTROL_SUM_OFFSET, |sum, line| sum + line.chars().count())
}

/// Разбор UPN-строки. Чистая функция: текст -> запись или ошибка.
pub fn decode(text: &str) -> std::result::Result<SourceRecord, DecodeError> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    debug!(lines = lines.len(), "decoding UPN payload");

    if lines.len() < LINE_COUNT {
        return Err(DecodeError::InsufficientLines {
            needed: LINE_COUNT,
            found: lines.len(),
        });
    }

    let expected = control_sum(lines[..CONTROL_SUM_LINE].iter().copied());
    let found = lines[CONTROL_SUM_LINE].trim();
    debug!(expected, found, "control sum");
    let control_sum = match found.parse::<usize>() {
        Ok(actual) if actual == expected => actual,
        _ => {
            return Err(DecodeError::ChecksumMismatch {
                expected,
                found: found.to_string(),
            })
        }
    };

    let mut rec = SourceRecord {
        control_sum,
        ..SourceRecord::default()
    };
    for (index, name, field) in LAYOUT {
        let value = lines[index].trim();
        trace!(line = index, field = name, value, "upn line");
        assign(&mut rec, field, value);
    }
    Ok(rec)
}

fn assign(rec: &mut SourceRecord, field: Field, value: &str) {
    let slot = match field {
        Field::Reserved => return,
        Field::Amount => {
            // минорные единицы (центы) -> евро, точно, без float
            rec.payment.amount = value.parse::<i64>().ok().map(|minor| Decimal::new(minor, 2));
            return;
        }
        Field::Format => &mut rec.format,
        Field::PayerName => &mut rec.payer.name,
        Field::PayerAddress => &mut rec.payer.address,
        Field::PayerCity => &mut rec.payer.city,
        Field::PurposeCode => &mut rec.payment.purpose_code,
        Field::Description => &mut rec.payment.description,
        Field::DueDate => &mut rec.payment.due_date,
        Field::Iban => &mut rec.payment.iban,
        Field::Reference => &mut rec.payment.reference,
        Field::RecipientName => &mut rec.recipient.name,
        Field::RecipientAddress => &mut rec.recipient.address,
        Field::RecipientCity => &mut rec.recipient.city,
    };
    *slot = value.to_string();
}

pub struct UpnQr;

impl crate::traits::ReadFormat for UpnQr {
    type Record = SourceRecord;

    fn read<R: BufRead>(mut r: R) -> Result<SourceRecord> {
        let mut text = String::new();
        r.read_to_string(&mut text)?;
        Ok(decode(&text)?)
    }
}
