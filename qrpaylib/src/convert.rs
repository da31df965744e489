//! Связка decode -> validate -> encode: то, что вызывает UI/CLI.

use crate::{
    error::Result,
    formats::{epc, upn},
    validate::ValidRecord,
};

/// UPN QR текст -> EPC QR текст. Ошибка валидации несёт все сообщения разом.
pub fn convert(text: &str) -> Result<String> {
    let rec = upn::decode(text)?;
    let valid = ValidRecord::new(rec)?;
    Ok(epc::encode(&valid))
}
