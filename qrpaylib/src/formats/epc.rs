//! EPC QR (BCD / 002 / SCT): 12 строк через `\n`.

use crate::{
    error::Result,
    model::EpcQrData,
    validate::{
        strip_whitespace, ValidRecord, MAX_RECIPIENT_LEN, MAX_REFERENCE_LEN, MAX_TEXT_LEN,
        PURPOSE_CODE_LEN,
    },
};
use rust_decimal::Decimal;
use std::{fmt, io::Write};
use tracing::trace;

pub const SERVICE_TAG: &str = "BCD";
pub const VERSION: &str = "002";
/// 1 = UTF-8
pub const ENCODING: &str = "1";
pub const IDENTIFICATION: &str = "SCT";
pub const CURRENCY: &str = "EUR";

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Ровно два знака после точки, без разделителей тысяч.
fn format_amount(a: Decimal) -> String {
    let mut a = a.round_dp(2);
    a.rescale(2);
    format!("{CURRENCY}{a}")
}

impl From<&ValidRecord> for EpcQrData {
    fn from(rec: &ValidRecord) -> Self {
        let payment = &rec.payment;
        // ValidRecord гарантирует Some; ноль здесь недостижим
        let amount = payment.amount.unwrap_or(Decimal::ZERO);

        // обрезка — страховка, валидация уже ограничила длины
        EpcQrData {
            service_tag: SERVICE_TAG,
            version: VERSION,
            encoding: ENCODING,
            identification: IDENTIFICATION,
            bic: "",
            recipient: truncate(&rec.recipient.name.to_uppercase(), MAX_RECIPIENT_LEN),
            iban: strip_whitespace(&payment.iban),
            amount: format_amount(amount),
            purpose_code: truncate(&payment.purpose_code, PURPOSE_CODE_LEN),
            reference: truncate(&payment.reference, MAX_REFERENCE_LEN),
            text: truncate(&payment.description, MAX_TEXT_LEN),
            info: "",
        }
    }
}

impl EpcQrData {
    pub fn to_payload(&self) -> String {
        self.fields()
            .iter()
            .map(|(_, v)| *v)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for EpcQrData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_payload())
    }
}

/// Кодирование проверенной записи в текст EPC QR.
pub fn encode(rec: &ValidRecord) -> String {
    let payload = EpcQrData::from(rec).to_payload();
    trace!(len = payload.len(), "encoded EPC payload");
    payload
}

pub struct EpcQr;

impl crate::traits::WriteFormat for EpcQr {
    type Record = EpcQrData;

    fn write<W: Write>(mut w: W, rec: &EpcQrData) -> Result<()> {
        w.write_all(rec.to_payload().as_bytes())?;
        Ok(())
    }
}
