use std::sync::LazyLock;

use crate::entities::NumberLocale;

/// 1.234,56 (BRL).
pub static PT_BR: LazyLock<NumberLocale> =
    LazyLock::new(|| NumberLocale::new(',', '.').with_currency("BRL"));
/// 1.234,56 (EUR).
pub static DE_DE: LazyLock<NumberLocale> =
    LazyLock::new(|| NumberLocale::new(',', '.').with_currency("EUR"));
/// 1,234.56 (USD).
pub static EN_US: LazyLock<NumberLocale> =
    LazyLock::new(|| NumberLocale::new('.', ',').with_currency("USD"));
