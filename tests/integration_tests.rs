//! # Testes de Integração
//!
//! Valida o fluxo completo pela API pública:
//! - Mensagem do bot → texto com anotações de link
//! - Propriedades do rewriter (identidade, idempotência, nenhum placeholder vaza)
//! - Configuração customizada vinda do ambiente

use autolink::config::{load_linkify_config_from, ENV_COUNTRY_CODE};
use autolink::linkify::patterns::PLACEHOLDER;
use autolink::prelude::*;

// ============================================================================
// TESTE 1: Exemplos de referência
// ============================================================================

#[test]
fn test_reference_examples() {
    let cases = [
        (
            "Contact: foo@bar.com",
            "Contact: [foo@bar.com](mailto:foo@bar.com)",
        ),
        (
            "Call (45) 8401-6137 now.",
            "Call [(45) 8401-6137](https://wa.me/554584016137) now.",
        ),
        (
            "See https://example.gov.br/page.",
            "See [https://example.gov.br/page](https://example.gov.br/page).",
        ),
        (
            "Visit efoz.pmfi.pr.gov.br today",
            "Visit [efoz.pmfi.pr.gov.br](https://efoz.pmfi.pr.gov.br) today",
        ),
        (
            "user@site.gov.br",
            "[user@site.gov.br](mailto:user@site.gov.br)",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(auto_linkify(Some(input)), expected, "input: {}", input);
    }
}

// ============================================================================
// TESTE 2: Mensagem do bot completa
// ============================================================================

#[test]
fn test_bot_message_end_to_end() {
    let reply = "Para atendimento jurídico gratuito:\n\
        - Email: juridico@pmfi.pr.gov.br\n\
        - Telefone: (45) 99876-5432\n\
        - Site: https://www.pmfi.pr.gov.br/defensoria?ref=chat!\n\
        Mais detalhes em cidadao.gov.br.";

    let message = build_message(Some(reply), Sender::Bot);
    let rendered = message.render(&LinkRewriter::with_defaults());

    assert_eq!(
        rendered,
        "Para atendimento jurídico gratuito:\n\
        - Email: [juridico@pmfi.pr.gov.br](mailto:juridico@pmfi.pr.gov.br)\n\
        - Telefone: [(45) 99876-5432](https://wa.me/5545998765432)\n\
        - Site: [https://www.pmfi.pr.gov.br/defensoria?ref=chat](https://www.pmfi.pr.gov.br/defensoria?ref=chat)!\n\
        Mais detalhes em [cidadao.gov.br](https://cidadao.gov.br)."
    );
}

// ============================================================================
// TESTE 3: Propriedades
// ============================================================================

const SAMPLES: &[&str] = &[
    "Fale com ouvidoria@pmfi.pr.gov.br ou (45) 3521-1000.",
    "Veja https://pmfi.pr.gov.br/ e também efoz.pmfi.pr.gov.br!",
    "Link já pronto: [portal](https://portal.gov.br) e outro site.com",
    "https://a.com/?to=x@y.com, (11) 2345-6789; b@c.org",
    "Nenhum contato aqui, apenas texto comum.",
    "__URL_0__ literal e https://x.org",
    "Veja [portal](https://a.gov.br).contato@b.com hoje",
    "[a](https://b.com)x@y.com",
    "[a](https://b.com)site.com",
    "(45) 8401-6137site.com",
    "https://a.com/(45) 8401-6137,https://b.org/x",
    "id __EMAIL_18446744073709551615__ e a@b.com e c@d.com",
];

#[test]
fn test_plain_text_identity() {
    let text = "Bom dia! O horário de atendimento é das 8h às 17h.";
    assert_eq!(auto_linkify(Some(text)), text);
}

#[test]
fn test_idempotence() {
    for sample in SAMPLES {
        let once = auto_linkify(Some(*sample));
        let twice = auto_linkify(Some(once.as_str()));
        assert_eq!(twice, once, "sample: {}", sample);
    }
}

#[test]
fn test_no_generated_placeholder_leaks() {
    for sample in SAMPLES {
        let out = auto_linkify(Some(*sample));
        let literal_in_input = PLACEHOLDER.find_iter(sample).count();
        let in_output = PLACEHOLDER.find_iter(&out).count();
        assert_eq!(in_output, literal_in_input, "sample: {} → {}", sample, out);
    }
}

#[test]
fn test_existing_markdown_link_untouched() {
    assert_eq!(
        auto_linkify(Some("Link já pronto: [portal](https://portal.gov.br) e outro site.com")),
        "Link já pronto: [portal](https://portal.gov.br) e outro [site.com](https://site.com)"
    );
}

#[test]
fn test_contacts_glued_to_other_links() {
    let cases = [
        (
            "Veja [portal](https://a.gov.br).contato@b.com hoje",
            "Veja [portal](https://a.gov.br).[contato@b.com](mailto:contato@b.com) hoje",
        ),
        (
            "[a](https://b.com)site.com",
            "[a](https://b.com)[site.com](https://site.com)",
        ),
        (
            "https://a.com/(45) 8401-6137,https://b.org/x",
            "[https://a.com/](https://a.com/)[(45) 8401-6137](https://wa.me/554584016137),[https://b.org/x](https://b.org/x)",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(auto_linkify(Some(input)), expected, "input: {}", input);
    }
}

#[test]
fn test_huge_literal_placeholder_ordinal() {
    assert_eq!(
        auto_linkify(Some("id __EMAIL_18446744073709551615__ e a@b.com e c@d.com")),
        "id __EMAIL_18446744073709551615__ e [a@b.com](mailto:a@b.com) e [c@d.com](mailto:c@d.com)"
    );
}

// ============================================================================
// TESTE 4: Configuração
// ============================================================================

#[test]
fn test_config_from_env_flows_into_links() {
    let config = load_linkify_config_from(|key| {
        (key == ENV_COUNTRY_CODE).then(|| "1".to_string())
    });
    let rewriter = LinkRewriter::new(config).unwrap();

    assert_eq!(
        rewriter.rewrite(Some("(21) 2345-6789")),
        "[(21) 2345-6789](https://wa.me/12123456789)"
    );
}

#[test]
fn test_batch_matches_sequential() {
    let rewriter = LinkRewriter::with_defaults();
    let batch = rewriter.rewrite_batch(SAMPLES);
    let sequential: Vec<String> = SAMPLES.iter().map(|s| rewriter.rewrite(Some(*s))).collect();
    assert_eq!(batch, sequential);
}
