//! Raw column label mapping
//!
//! The scraped table uses locale-specific, punctuation-sensitive headers.
//! This module owns the verbatim header -> canonical key table and the
//! normalization convention applied to free-form keys (cache overlays).

/// Verbatim header -> canonical key table for the raw result table.
/// Case- and punctuation-sensitive; these are the exact upstream headers.
pub const COLUMN_LABELS: &[(&str, &str)] = &[
    ("Papel", "papel"),
    ("Cotação", "cotacao"),
    ("P/L", "p_l"),
    ("P/VP", "p_vp"),
    ("PSR", "psr"),
    ("Div.Yield", "dividend_yield"),
    ("P/Ativo", "p_ativo"),
    ("P/Cap.Giro", "p_cap_giro"),
    ("P/EBIT", "p_ebit"),
    ("P/Ativ Circ.Liq", "p_ativo_circulante_liq"),
    ("EV/EBIT", "ev_ebit"),
    ("EV/EBITDA", "ev_ebitda"),
    ("Mrg Ebit", "margem_ebit"),
    ("Mrg. Líq.", "margem_liquida"),
    ("Liq. Corr.", "liquidez_corrente"),
    ("ROIC", "roic"),
    ("ROE", "roe"),
    ("Liq.2meses", "liquidez_2meses"),
    ("Patrim. Líq", "patrimonio_liquido"),
    ("Dív.Brut/ Patrim.", "div_bruta_patrimonio"),
    ("Cresc. Rec.5a", "crescimento_receita_5a"),
];

/// Canonical key of the ticker column
pub const TICKER_KEY: &str = "papel";

/// Canonical key of the quoted-price column
pub const PRICE_KEY: &str = "cotacao";

/// Normalize a free-form label to the canonical key convention:
/// lowercase, runs of non-alphanumeric characters collapsed to a single
/// `_`, no leading or trailing `_`.
pub fn canonical_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_sep = false;
    for c in label.trim().chars() {
        if c.is_alphanumeric() {
            if pending_sep && !key.is_empty() {
                key.push('_');
            }
            pending_sep = false;
            key.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    key
}

/// Resolve a raw header to its canonical key: the verbatim table first,
/// the normalization convention as fallback
pub fn resolve_label(label: &str) -> String {
    let trimmed = label.trim();
    for (raw, key) in COLUMN_LABELS {
        if *raw == trimmed {
            return (*key).to_string();
        }
    }
    canonical_key(trimmed)
}
