//! Доменные модели: разобранный UPN-бланк и проекция в EPC QR.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payer {
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    /// В евро (минорные единицы / 100). `None` — строка суммы не число.
    #[serde(with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub purpose_code: String,
    pub description: String,
    pub due_date: String,
    pub iban: String,
    pub reference: String,
}

impl Payment {
    /// Срок оплаты в форме бланка `DD.MM.YYYY`; пусто или мусор — `None`.
    pub fn due_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.due_date.trim(), "%d.%m.%Y").ok()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub address: String,
    pub city: String,
}

/// Результат `decode`: неизменяемая запись одного UPN QR.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceRecord {
    pub format: String,
    pub payer: Payer,
    pub payment: Payment,
    pub recipient: Recipient,
    pub control_sum: usize,
}

/// EPC QR (SEPA Credit Transfer). Строится только из `ValidRecord`,
/// поэтому поля закрыты: невалидного экземпляра не бывает.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EpcQrData {
    pub(crate) service_tag: &'static str,
    pub(crate) version: &'static str,
    pub(crate) encoding: &'static str,
    pub(crate) identification: &'static str,
    pub(crate) bic: &'static str,
    pub(crate) recipient: String,
    pub(crate) iban: String,
    pub(crate) amount: String,
    pub(crate) purpose_code: String,
    pub(crate) reference: String,
    pub(crate) text: String,
    pub(crate) info: &'static str,
}

impl EpcQrData {
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    /// Валюта + сумма, например `EUR100.50`.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn purpose_code(&self) -> &str {
        &self.purpose_code
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Все 12 полей в порядке записи, с подписями для отображения.
    pub fn fields(&self) -> [(&'static str, &str); 12] {
        [
            ("Service Tag", self.service_tag),
            ("Version", self.version),
            ("Character set", self.encoding),
            ("Identification", self.identification),
            ("BIC", self.bic),
            ("Name", &self.recipient),
            ("IBAN", &self.iban),
            ("Amount", &self.amount),
            ("Purpose", &self.purpose_code),
            ("Reference", &self.reference),
            ("Text", &self.text),
            ("Information", self.info),
        ]
    }
}
