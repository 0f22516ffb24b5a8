// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ESTÁGIOS DO PIPELINE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Cada estágio recebe um `Staged` e devolve outro. Ordem fixa:
//   0. anotações existentes  → __LINK_n__
//   1. emails                → __EMAIL_n__
//   2. telefones             → __PHONE_n__
//   3. URLs com protocolo    → __URL_n__
//   4. domínios sem protocolo (substituição direta)
//   5. resolução dos placeholders
//
// Os estágios de detecção só olham o texto entre placeholders: um
// placeholder é sempre fronteira de palavra e nunca vira parte de um match.
// Exceção: a URL atravessa os emails que ela mesma absorve.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use regex::{Captures, Regex, Replacer};
use std::ops::Range;

use super::patterns::{
    ANNOTATION, DOMAIN, EMAIL, PHONE, PLACEHOLDER, PLACEHOLDER_MARKER, TRAILING_PUNCTUATION,
    URL,
};
use super::reservation::{PlaceholderKind, Reservations};
use crate::config::LinkifyConfig;

/// Texto intermediário e as reservas acumuladas até aqui.
#[derive(Debug, Clone)]
pub struct Staged {
    /// Texto com placeholders no lugar dos trechos já tratados
    pub text: String,
    /// Reservas pendentes, na ordem de criação
    pub reservations: Reservations,
}

impl Staged {
    /// Início do pipeline.
    pub fn new(text: &str) -> Self {
        Self {
            reservations: Reservations::for_input(text),
            text: text.to_string(),
        }
    }
}

/// Separa a pontuação final (`. , : ; ! ?`) do resto.
///
/// `"site.com."` → `("site.com", ".")`
pub fn split_trailing_punctuation(matched: &str) -> (&str, &str) {
    let trimmed = matched.trim_end_matches(TRAILING_PUNCTUATION);
    (trimmed, &matched[trimmed.len()..])
}

/// Posições dos placeholders de `text` aceitos por `is_boundary`.
fn boundaries<F>(text: &str, is_boundary: F) -> Vec<Range<usize>>
where
    F: Fn(&str) -> bool,
{
    PLACEHOLDER
        .find_iter(text)
        .filter(|m| is_boundary(m.as_str()))
        .map(|m| m.range())
        .collect()
}

/// `replace_all` aplicado separadamente em cada trecho entre fronteiras.
/// As fronteiras são copiadas sem alteração.
fn replace_between<F>(
    text: &str,
    bounds: &[Range<usize>],
    regex: &Regex,
    mut replacer: F,
) -> String
where
    F: FnMut(&Captures<'_>) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for bound in bounds {
        out.push_str(&regex.replace_all(&text[last..bound.start], replacer.by_ref()));
        out.push_str(&text[bound.clone()]);
        last = bound.end;
    }
    out.push_str(&regex.replace_all(&text[last..], replacer.by_ref()));
    out
}

/// Estágio 0: estaciona anotações `[x](y)` que já existem no texto.
pub fn protect_existing_links(staged: Staged) -> Staged {
    let Staged {
        text,
        mut reservations,
    } = staged;

    let text = ANNOTATION
        .replace_all(&text, |caps: &Captures<'_>| {
            let span = &caps[0];
            reservations.reserve(PlaceholderKind::Link, span, span.to_string())
        })
        .into_owned();

    Staged { text, reservations }
}

/// Estágio 1: emails viram `[x](mailto:x)`.
pub fn park_emails(staged: Staged) -> Staged {
    let Staged {
        text,
        mut reservations,
    } = staged;

    let bounds = boundaries(&text, |_| true);
    let text = replace_between(&text, &bounds, &EMAIL, |caps| {
        let email = &caps[0];
        let annotation = format!("[{}](mailto:{})", email, email);
        reservations.reserve(PlaceholderKind::Email, email, annotation)
    });

    Staged { text, reservations }
}

/// Estágio 2: telefones viram deep links de WhatsApp.
///
/// `(45) 8401-6137` → `[(45) 8401-6137](https://wa.me/554584016137)`
pub fn park_phones(staged: Staged, config: &LinkifyConfig) -> Staged {
    let Staged {
        text,
        mut reservations,
    } = staged;

    let bounds = boundaries(&text, |_| true);
    let text = replace_between(&text, &bounds, &PHONE, |caps| {
        let national = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
        let annotation = format!("[{}]({})", &caps[0], config.whatsapp_link(&national));
        reservations.reserve(PlaceholderKind::Phone, &caps[0], annotation)
    });

    Staged { text, reservations }
}

/// Estágio 3: URLs com protocolo.
///
/// A pontuação final fica fora do link. Emails dentro da URL voltam ao texto
/// bruto e passam a fazer parte dela. Qualquer outro placeholder encerra a
/// URL, e o texto depois dele continua sendo examinado.
pub fn park_urls(staged: Staged) -> Staged {
    let Staged {
        text,
        mut reservations,
    } = staged;

    let bounds = boundaries(&text, |id| reservations.ends_url(id));
    let text = replace_between(&text, &bounds, &URL, |caps| {
        let url = reservations.absorb(&caps[0]);
        let (link, punctuation) = split_trailing_punctuation(&url);
        let annotation = format!("[{}]({}){}", link, link, punctuation);
        reservations.reserve(PlaceholderKind::Url, &url, annotation)
    });

    Staged { text, reservations }
}

/// Estágio 4: domínios sem protocolo viram `[d](https://d)`.
///
/// Não usa reserva: substitui direto, pois é o último estágio de detecção.
pub fn link_bare_domains(staged: Staged) -> Staged {
    let Staged { text, reservations } = staged;

    let bounds = boundaries(&text, |_| true);
    let text = replace_between(&text, &bounds, &DOMAIN, |caps| {
        let matched = &caps[0];
        if matched.contains('@') || matched.contains(PLACEHOLDER_MARKER) {
            return matched.to_string();
        }

        let (domain, punctuation) = split_trailing_punctuation(matched);
        if domain.is_empty() {
            return matched.to_string();
        }
        format!("[{}](https://{}){}", domain, domain, punctuation)
    });

    Staged { text, reservations }
}

/// Estágio 5: troca os placeholders pelas anotações.
pub fn resolve(staged: Staged) -> String {
    staged.reservations.resolve(staged.text)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TESTES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
