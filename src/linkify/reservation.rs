// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RESERVAS (PLACEHOLDERS)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Cada trecho já convertido em link é "estacionado" atrás de um placeholder
// `__KIND_<ordinal>__` para que os estágios seguintes não o vejam. O livro de
// reservas guarda, na ordem de criação, o texto bruto e a anotação final.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use regex::Captures;
use std::collections::HashSet;

use super::patterns::PLACEHOLDER;

/// Tipo de trecho reservado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// Anotação `[x](y)` que já existia no texto de entrada
    Link,
    /// Endereço de email
    Email,
    /// Telefone no formato `(AA) NNNN-NNNN`
    Phone,
    /// URL com `http://` ou `https://`
    Url,
}

impl PlaceholderKind {
    /// Tag usada dentro do placeholder.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Link => "LINK",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Url => "URL",
        }
    }

    /// Se o texto bruto deste tipo pode aparecer no meio de uma URL.
    ///
    /// Emails só usam caracteres válidos em URL. Telefones contêm espaço e
    /// `)`, e anotações contêm `)`, então uma URL termina antes deles.
    pub fn fits_in_url(&self) -> bool {
        matches!(self, Self::Email)
    }
}

/// Um trecho reservado atrás de um placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Placeholder inserido no texto (`__EMAIL_0__`)
    pub id: String,
    /// Tipo do trecho
    pub kind: PlaceholderKind,
    /// Texto original que foi substituído
    pub raw: String,
    /// Anotação que substitui o placeholder na resolução
    pub annotation: String,
}

/// Livro ordenado de reservas de uma única reescrita.
///
/// Os ordinais vêm de um contador compartilhado entre todos os tipos. Um id
/// que já aparece literalmente no texto de entrada é pulado, então um id
/// gerado nunca colide com texto literal.
#[derive(Debug, Clone, Default)]
pub struct Reservations {
    entries: Vec<Reservation>,
    next_ordinal: usize,
    taken: HashSet<String>,
}

impl Reservations {
    /// Cria um livro vazio com contador a partir de zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um livro que nunca gera um placeholder já presente em `text`.
    pub fn for_input(text: &str) -> Self {
        Self {
            taken: PLACEHOLDER
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect(),
            ..Self::default()
        }
    }

    /// Registra uma reserva e retorna o placeholder a inserir no texto.
    pub fn reserve(&mut self, kind: PlaceholderKind, raw: &str, annotation: String) -> String {
        // Termina: cada id literal bloqueia no máximo um ordinal
        let id = loop {
            let candidate = format!("__{}_{}__", kind.tag(), self.next_ordinal);
            self.next_ordinal += 1;
            if !self.taken.contains(&candidate) {
                break candidate;
            }
        };

        self.entries.push(Reservation {
            id: id.clone(),
            kind,
            raw: raw.to_string(),
            annotation,
        });

        id
    }

    /// Busca uma reserva pelo placeholder.
    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.entries.iter().find(|r| r.id == id)
    }

    /// Número de reservas pendentes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Retorna true se não há reservas
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Se um placeholder encerra uma URL: qualquer um, exceto emails deste
    /// livro.
    pub fn ends_url(&self, id: &str) -> bool {
        self.get(id).map(|r| !r.kind.fits_in_url()).unwrap_or(true)
    }

    /// Devolve `text` com os placeholders deste livro trocados pelo texto
    /// bruto original. As reservas expandidas são removidas do livro: o
    /// trecho que as contém passa a ser dono delas.
    pub fn absorb(&mut self, text: &str) -> String {
        let entries = &mut self.entries;
        PLACEHOLDER
            .replace_all(text, |caps: &Captures<'_>| {
                let id = &caps[0];
                match entries.iter().position(|r| r.id == id) {
                    Some(pos) => entries.remove(pos).raw,
                    None => id.to_string(),
                }
            })
            .into_owned()
    }

    /// Troca cada placeholder pela sua anotação, na ordem de criação.
    pub fn resolve(self, mut text: String) -> String {
        for reservation in self.entries {
            text = text.replacen(&reservation.id, &reservation.annotation, 1);
        }
        text
    }
}
