#![allow(dead_code)]

use qrpaylib::formats::upn::control_sum;

/// Строки 0..=18 типичного бланка.
pub fn sample_lines() -> Vec<String> {
    [
        "UPNQR",
        "",
        "",
        "",
        "",
        "Janez Novak",
        "Dunajska cesta 1",
        "1000 Ljubljana",
        "00000010050",
        "",
        "",
        "GDSV",
        "Invoice 123",
        "15.11.2026",
        "SI56 0201 0001 2345 678",
        "SI00123456",
        "Acme d.o.o.",
        "Trzaska cesta 5",
        "2000 Maribor",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Склеивает 19 строк и дописывает корректную контрольную сумму.
pub fn payload(lines: &[String]) -> String {
    let sum = control_sum(lines.iter().map(String::as_str));
    format!("{}\n{}\n", lines.join("\n"), sum)
}

pub fn sample_payload() -> String {
    payload(&sample_lines())
}

/// Бланк с заменённой строкой `index`.
pub fn payload_with(index: usize, value: &str) -> String {
    let mut lines = sample_lines();
    lines[index] = value.to_string();
    payload(&lines)
}
