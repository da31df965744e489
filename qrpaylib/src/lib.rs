//! qrpaylib — разбор UPN QR (словенский платёжный бланк) и генерация EPC QR (SEPA)

pub mod convert;
pub mod error;
pub mod model;
pub mod traits;
pub mod validate;

pub mod formats {
    pub mod epc;
    pub mod upn;
}

pub use convert::convert;
pub use error::{DecodeError, QrPayError, Result, ValidationError};
pub use formats::{epc::encode, upn::decode};
pub use model::{EpcQrData, SourceRecord};
pub use validate::{validate, ValidRecord};
