// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LINKIFY - Conversão automática de contatos em links
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Recebe o texto cru da resposta do bot e devolve o mesmo texto com anotações
// `[display](target)` para o renderizador de markdown:
// - Emails      → mailto:
// - Telefones   → https://wa.me/55...
// - URLs        → a própria URL (pontuação final fora do link)
// - Domínios    → https://dominio
//
// Trechos já convertidos ficam atrás de placeholders até o fim, para que um
// estágio posterior nunca case de novo com eles (ex.: o domínio de um email).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Regexes compiladas de detecção.
pub mod patterns;
/// Livro de placeholders de uma reescrita.
pub mod reservation;
/// Estágios puros do pipeline.
pub mod stages;

use rayon::prelude::*;

use crate::config::{ConfigError, LinkifyConfig};

pub use reservation::{PlaceholderKind, Reservation, Reservations};
pub use stages::{split_trailing_punctuation, Staged};

/// Reescreve texto livre adicionando anotações de link.
///
/// É `Send + Sync`: a mesma instância pode ser usada por várias threads.
///
/// # Exemplo
/// ```rust
/// use autolink::linkify::LinkRewriter;
///
/// let rewriter = LinkRewriter::with_defaults();
/// assert_eq!(
///     rewriter.rewrite(Some("Contact: foo@bar.com")),
///     "Contact: [foo@bar.com](mailto:foo@bar.com)"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinkRewriter {
    config: LinkifyConfig,
}

impl LinkRewriter {
    /// Cria um rewriter após validar a configuração.
    pub fn new(config: LinkifyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Rewriter com a configuração padrão (Brasil, wa.me).
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Configuração em uso
    pub fn config(&self) -> &LinkifyConfig {
        &self.config
    }

    /// Reescreve um texto. Texto ausente ou vazio resulta em `""`.
    ///
    /// Nunca falha: qualquer entrada sem padrões reconhecidos passa intacta.
    pub fn rewrite(&self, text: Option<&str>) -> String {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return String::new(),
        };

        let staged = stages::protect_existing_links(Staged::new(text));
        let staged = stages::park_emails(staged);
        let staged = stages::park_phones(staged, &self.config);
        let staged = stages::park_urls(staged);
        let staged = stages::link_bare_domains(staged);

        log::trace!(
            "linkify: {} reserva(s) para {} bytes",
            staged.reservations.len(),
            text.len()
        );

        stages::resolve(staged)
    }

    /// Reescreve vários textos em paralelo, mantendo a ordem de entrada.
    pub fn rewrite_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let rewritten: Vec<String> = texts
            .par_iter()
            .map(|t| self.rewrite(Some(t.as_ref())))
            .collect();

        log::debug!("linkify: batch de {} textos", rewritten.len());
        rewritten
    }
}

/// Atalho com a configuração padrão.
///
/// ```rust
/// assert_eq!(
///     autolink::auto_linkify(Some("Visit efoz.pmfi.pr.gov.br today")),
///     "Visit [efoz.pmfi.pr.gov.br](https://efoz.pmfi.pr.gov.br) today"
/// );
/// assert_eq!(autolink::auto_linkify(None), "");
/// ```
pub fn auto_linkify(text: Option<&str>) -> String {
    LinkRewriter::with_defaults().rewrite(text)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
