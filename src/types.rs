// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// TIPOS COMPARTILHADOS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

use crate::linkify::LinkRewriter;

/// Autor de uma mensagem do chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Resposta do assistente
    Bot,
    /// Texto digitado pelo usuário
    User,
}

/// Mensagem do chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Instante de criação em milissegundos desde a época, como string
    pub timestamp: String,
    /// Autor
    pub sender: Sender,
    /// Texto cru (sem anotações de link)
    pub text: String,
}

impl Message {
    /// Texto com anotações de link, pronto para o renderizador de markdown.
    pub fn render(&self, rewriter: &LinkRewriter) -> String {
        rewriter.rewrite(Some(self.text.as_str()))
    }
}

/// Monta uma mensagem com timestamp atual.
///
/// Texto ausente vira `""` e gera um aviso no log.
pub fn build_message(text: Option<&str>, sender: Sender) -> Message {
    let text = match text {
        Some(t) => t.to_string(),
        None => {
            log::warn!("build_message recebeu texto ausente (sender: {:?})", sender);
            String::new()
        }
    };

    Message {
        timestamp: chrono::Utc::now().timestamp_millis().to_string(),
        sender,
        text,
    }
}
