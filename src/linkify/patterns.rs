// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PADRÕES DE DETECÇÃO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Regexes compiladas uma única vez por processo. Todas são imutáveis, então
// podem ser usadas por várias threads ao mesmo tempo (batch com Rayon).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use once_cell::sync::Lazy;
use regex::Regex;

/// Pontuação de fim de frase que nunca faz parte de um link.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?'];

/// Marcador que identifica um placeholder dentro do texto.
pub const PLACEHOLDER_MARKER: &str = "__";

/// Anotação já existente no formato `[display](target)`.
pub static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[\]\n]*\]\([^)\s]*\)").expect("valid annotation regex"));

/// Email: `local@dominio.sufixo`, como palavra inteira.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Telefone brasileiro `(AA) NNNN[N]-NNNN`.
///
/// Grupos: 1 = DDD, 2 = prefixo (4 ou 5 dígitos), 3 = sufixo.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([0-9]{2})\)\s*([0-9]{4,5})-([0-9]{4})").expect("valid phone regex")
});

/// URL com protocolo explícito. Para no primeiro espaço ou `)`.
pub static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s)]+").expect("valid url regex"));

/// Domínio sem protocolo terminado em sufixo conhecido.
///
/// Rótulos intermediários são aceitos (`efoz.pmfi.pr.gov.br`). Os sufixos
/// compostos `pr.gov.br` e `gov.br` são cobertos pela repetição de sufixos.
/// Um último grupo `.letras` opcional cobre domínios como `google.com.mx`.
pub static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.(?:com|org|net|gov|edu|br)(?:\.(?:com|org|net|gov|edu|br))*(?:\.[A-Za-z]{2,})?\b",
    )
    .expect("valid domain regex")
});

/// Placeholder gerado pelo rewriter: `__KIND_<ordinal>__`.
///
/// Grupos: 1 = tipo, 2 = ordinal.
pub static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"__(LINK|EMAIL|PHONE|URL)_([0-9]+)__").expect("valid placeholder regex")
});
