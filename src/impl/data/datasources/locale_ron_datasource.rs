use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    entities::NumberLocale,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait LocaleRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<NumberLocale, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<NumberLocale, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct LocaleRonDatasourceImpl;

impl LocaleRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocaleRonDatasource for LocaleRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<NumberLocale, ServerError> {
        let locale: NumberLocale =
            from_str(s).map_err(|e| InvalidRon::with_debug("NumberLocale", &e))?;
        locale.validate()?;
        Ok(locale)
    }

    async fn from_file<P>(&self, path: P) -> Result<NumberLocale, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_locale_with_currency() {
        let locale = LocaleRonDatasourceImpl::new()
            .from_string(r#"(decimal_separator: '.', thousands_separator: ',', currency_code: Some("USD"))"#)
            .unwrap();
        assert_eq!(locale, NumberLocale::new('.', ',').with_currency("USD"));
    }

    #[test]
    fn currency_is_optional() {
        let locale = LocaleRonDatasourceImpl::new()
            .from_string("(decimal_separator: ',', thousands_separator: '.')")
            .unwrap();
        assert_eq!(locale, NumberLocale::default());
    }

    #[test]
    fn rejects_invalid_config() {
        let ds = LocaleRonDatasourceImpl::new();
        assert!(ds.from_string("(decimal_separator: ',')").is_err());
        assert!(ds
            .from_string("(decimal_separator: ',', thousands_separator: ',')")
            .is_err());
        assert!(ds
            .from_string(r#"(decimal_separator: ',', thousands_separator: '.', currency_code: Some("QQQ"))"#)
            .is_err());
    }
}
