//! # Autolink
//!
//! Converte contatos presentes nas respostas de um chatbot em anotações de
//! link `[display](target)`, prontas para um renderizador de markdown.
//!
//! ## O que é detectado?
//!
//! | Padrão | Exemplo | Destino |
//! |--------|---------|---------|
//! | Email | `foo@bar.com` | `mailto:foo@bar.com` |
//! | Telefone | `(45) 8401-6137` | `https://wa.me/554584016137` |
//! | URL | `https://site.gov.br/x` | a própria URL |
//! | Domínio | `efoz.pmfi.pr.gov.br` | `https://efoz.pmfi.pr.gov.br` |
//!
//! ## Como funciona
//!
//! O texto passa por estágios em ordem fixa. Cada trecho detectado é trocado
//! por um placeholder (`__EMAIL_0__`) até o fim, para que um estágio posterior
//! nunca o veja de novo. Por último os placeholders viram anotações.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use autolink::prelude::*;
//!
//! let rewriter = LinkRewriter::with_defaults();
//! let out = rewriter.rewrite(Some("See https://example.gov.br/page."));
//! assert_eq!(out, "See [https://example.gov.br/page](https://example.gov.br/page).");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Tipos do chat: [`Message`], [`Sender`] e [`build_message`].
pub mod types;

/// Rewriter de links.
///
/// Contém:
/// - `LinkRewriter`: aplica o pipeline completo
/// - `stages`: estágios puros, testáveis isoladamente
/// - `reservation`: livro de placeholders
/// - `patterns`: regexes de detecção
pub mod linkify;

/// Configuração via variáveis de ambiente.
///
/// - `AUTOLINK_COUNTRY_CODE`: Código do país dos telefones (padrão: 55)
/// - `AUTOLINK_WHATSAPP_BASE_URL`: Prefixo dos links (padrão: https://wa.me/)
pub mod config;

// Re-exports principais
pub use config::{load_linkify_config, ConfigError, LinkifyConfig};
pub use linkify::{auto_linkify, LinkRewriter};
pub use types::*;

/// Versão da biblioteca.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude com imports comuns para uso rápido.
pub mod prelude {
    pub use crate::config::{LinkifyConfig, ConfigError};
    pub use crate::linkify::{auto_linkify, LinkRewriter};
    pub use crate::types::{build_message, Message, Sender};
}
