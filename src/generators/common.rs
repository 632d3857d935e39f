//! Common utilities for document generation.
//!
//! Shared helpers for date formatting, filename assembly, number
//! formatting, and HTML escaping.

use chrono::{Datelike, Local};

/// Format current date in long Brazilian format (e.g., "7 de agosto de 2026").
pub fn format_data_extensa() -> String {
    let hoje = Local::now().date_naive();
    let meses = [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ];

    let dia = hoje.day();
    let mes = meses[(hoje.month0() as usize).min(meses.len() - 1)];
    let ano = hoje.year();

    format!("{dia} de {mes} de {ano}")
}

/// Timestamp compacto para nomes de arquivo (ex.: "20260807-154233").
pub fn timestamp_arquivo() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Sanitize a string for use in filenames.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut result = String::new();
    let mut last_dash = false;

    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' || ch == '.' {
            if !last_dash && !result.is_empty() {
                result.push('-');
                last_dash = true;
            }
        }
    }

    if result.is_empty() {
        return fallback.to_string();
    }

    result.trim_matches('-').to_string()
}

/// Monta o nome do artefato: `<prefixo>-<base>-<timestamp>.<ext>`.
pub fn build_filename(prefixo: &str, base: &str, extensao: &str) -> String {
    format!(
        "{}-{}-{}.{}",
        sanitize_filename(prefixo, "laudo"),
        sanitize_filename(base, "documento"),
        timestamp_arquivo(),
        extensao
    )
}

/// Escape special characters for HTML output.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formata uma área em m² com duas casas e vírgula decimal.
pub fn format_area(valor: f64) -> String {
    format!("{valor:.2}").replace('.', ",")
}
