//! Унифицированные трэйты чтения/записи на основе std::io::{BufRead, Write}.

use crate::error::Result;
use std::io::{BufRead, Write};

pub trait ReadFormat {
    type Record;

    fn read<R: BufRead>(r: R) -> Result<Self::Record>;
}

pub trait WriteFormat {
    type Record;

    fn write<W: Write>(w: W, rec: &Self::Record) -> Result<()>;
}
