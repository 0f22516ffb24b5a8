// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CONFIGURAÇÃO DO LINKIFY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Destino dos links de telefone (WhatsApp) e código do país.
// Todas as configurações podem ser definidas via .env
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Código do país prefixado aos telefones (Brasil).
pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Base dos deep links de WhatsApp.
pub const DEFAULT_WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Variável de ambiente do código do país.
pub const ENV_COUNTRY_CODE: &str = "AUTOLINK_COUNTRY_CODE";

/// Variável de ambiente da base do WhatsApp.
pub const ENV_WHATSAPP_BASE_URL: &str = "AUTOLINK_WHATSAPP_BASE_URL";

/// Erros de configuração
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Código do país fora do formato de 1 a 3 dígitos
    #[error("Invalid country code '{0}': expected 1 to 3 digits")]
    InvalidCountryCode(String),

    /// Prefixo de link sem esquema http(s) ou sem host
    #[error("Invalid WhatsApp base URL '{0}': expected http:// or https://")]
    InvalidWhatsappBase(String),
}

/// Configuração do rewriter de links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkifyConfig {
    /// Código do país prefixado ao número nacional.
    /// Padrão: "55"
    pub country_code: String,

    /// Prefixo dos links de telefone, usado como está.
    /// Padrão: "https://wa.me/"
    pub whatsapp_base_url: String,
}

impl Default for LinkifyConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            whatsapp_base_url: DEFAULT_WHATSAPP_BASE_URL.to_string(),
        }
    }
}

impl LinkifyConfig {
    /// Cria configuração padrão.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define o código do país
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Define o prefixo dos links de WhatsApp
    pub fn with_whatsapp_base_url(mut self, base: impl Into<String>) -> Self {
        self.whatsapp_base_url = normalize_base_url(base.into());
        self
    }

    /// Valida todos os campos.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_country_code(&self.country_code)?;
        validate_whatsapp_base(&self.whatsapp_base_url)?;
        Ok(())
    }

    /// Monta o deep link para um número nacional já sem separadores.
    ///
    /// `"4584016137"` → `"https://wa.me/554584016137"`
    pub fn whatsapp_link(&self, national_digits: &str) -> String {
        format!(
            "{}{}{}",
            self.whatsapp_base_url, self.country_code, national_digits
        )
    }
}

fn normalize_base_url(base: String) -> String {
    base.trim().to_string()
}

fn validate_country_code(code: &str) -> Result<(), ConfigError> {
    let valid = (1..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidCountryCode(code.to_string()))
    }
}

fn validate_whatsapp_base(base: &str) -> Result<(), ConfigError> {
    let has_host = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .map(|rest| !rest.trim_matches('/').is_empty())
        .unwrap_or(false);

    if has_host {
        Ok(())
    } else {
        Err(ConfigError::InvalidWhatsappBase(base.to_string()))
    }
}

/// Carrega configuração do linkify a partir das variáveis de ambiente.
///
/// Variáveis suportadas:
/// - `AUTOLINK_COUNTRY_CODE`: Código do país (padrão: 55)
/// - `AUTOLINK_WHATSAPP_BASE_URL`: Base dos links (padrão: https://wa.me/)
///
/// Valores inválidos são ignorados com um aviso no log.
///
/// # Exemplo
///
/// ```rust,ignore
/// // .env
/// AUTOLINK_COUNTRY_CODE=351
///
/// // código
/// let config = load_linkify_config();
/// assert_eq!(config.country_code, "351");
/// ```
pub fn load_linkify_config() -> LinkifyConfig {
    load_linkify_config_from(|key| std::env::var(key).ok())
}

/// Mesmo que [`load_linkify_config`], lendo de uma fonte arbitrária.
pub fn load_linkify_config_from<F>(lookup: F) -> LinkifyConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = LinkifyConfig::default();

    // AUTOLINK_COUNTRY_CODE: código do país
    if let Some(code) = lookup(ENV_COUNTRY_CODE) {
        let code = code.trim().to_string();
        match validate_country_code(&code) {
            Ok(()) => {
                log::info!("📦 {}={}", ENV_COUNTRY_CODE, code);
                config.country_code = code;
            }
            Err(e) => log::warn!("⚠ {} ignorado: {}", ENV_COUNTRY_CODE, e),
        }
    }

    // AUTOLINK_WHATSAPP_BASE_URL: base dos deep links
    if let Some(base) = lookup(ENV_WHATSAPP_BASE_URL) {
        let base = normalize_base_url(base);
        match validate_whatsapp_base(&base) {
            Ok(()) => {
                log::info!("📦 {}={}", ENV_WHATSAPP_BASE_URL, base);
                config.whatsapp_base_url = base;
            }
            Err(e) => log::warn!("⚠ {} ignorado: {}", ENV_WHATSAPP_BASE_URL, e),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_linkify_config_default() {
        let config = LinkifyConfig::default();
        assert_eq!(config.country_code, "55");
        assert_eq!(config.whatsapp_base_url, "https://wa.me/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_whatsapp_link() {
        let config = LinkifyConfig::default();
        assert_eq!(config.whatsapp_link("4584016137"), "https://wa.me/554584016137");
    }

    #[test]
    fn test_builder_trims_base() {
        let config = LinkifyConfig::new()
            .with_country_code("351")
            .with_whatsapp_base_url(" https://api.whatsapp.com/send?phone= ");
        assert_eq!(config.whatsapp_base_url, "https://api.whatsapp.com/send?phone=");
        assert_eq!(
            config.whatsapp_link("912345678"),
            "https://api.whatsapp.com/send?phone=351912345678"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = LinkifyConfig::new().with_country_code("+55");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCountryCode("+55".into()))
        );

        let config = LinkifyConfig::new().with_country_code("");
        assert!(config.validate().is_err());

        let config = LinkifyConfig::new().with_whatsapp_base_url("wa.me");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWhatsappBase(_))
        ));

        let config = LinkifyConfig::new().with_whatsapp_base_url("https://");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_env_values() {
        let config = load_linkify_config_from(lookup_from(&[
            (ENV_COUNTRY_CODE, " 1 "),
            (ENV_WHATSAPP_BASE_URL, "http://localhost:8080/wa/"),
        ]));
        assert_eq!(config.country_code, "1");
        assert_eq!(config.whatsapp_base_url, "http://localhost:8080/wa/");
    }

    #[test]
    fn test_load_ignores_invalid_values() {
        let config = load_linkify_config_from(lookup_from(&[
            (ENV_COUNTRY_CODE, "brasil"),
            (ENV_WHATSAPP_BASE_URL, "ftp://wa.me"),
        ]));
        assert_eq!(config, LinkifyConfig::default());
    }

    #[test]
    fn test_load_without_env() {
        let config = load_linkify_config_from(|_| None);
        assert_eq!(config, LinkifyConfig::default());
    }
}
