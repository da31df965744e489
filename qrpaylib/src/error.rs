//! Типы ошибок публичного API: декодирование, валидация и общий QrPayError.

use thiserror::Error;

/// Фатальные ошибки разбора UPN-строки. Частичного восстановления нет.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed payload: insufficient lines (need {needed}, found {found})")]
    InsufficientLines { needed: usize, found: usize },

    /// `found` — сырой текст строки 19 (может вообще не быть числом).
    #[error("checksum mismatch: expected {expected}, found {found:?}")]
    ChecksumMismatch { expected: usize, found: String },
}

/// Все нарушения правил сразу, в порядке объявления правил.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation errors: {}", .messages.join(", "))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

#[derive(Debug, Error)]
pub enum QrPayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, QrPayError>;
