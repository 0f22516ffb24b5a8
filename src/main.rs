// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// AUTOLINK CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// CLI para converter contatos de um texto em links markdown.
//
// Uso:
//   autolink-cli "Fale com ouvidoria@pmfi.pr.gov.br"
//   echo "Ligue (45) 3521-1000" | autolink-cli
//   autolink-cli --json "Veja https://pmfi.pr.gov.br/."
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use anyhow::Context;
use autolink::prelude::*;
use std::io::Read;
use std::path::PathBuf;

/// Tenta carregar o arquivo .env de múltiplos locais possíveis
fn load_dotenv() {
    let possible_paths = [
        // Diretório atual
        PathBuf::from(".env"),
        // Diretório do crate (fallback)
        {
            let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            p.push(".env");
            p
        },
    ];

    for path in &possible_paths {
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => return,
                Err(e) => {
                    eprintln!("⚠ Erro ao carregar {:?}: {}", path, e);
                }
            }
        }
    }
}

/// Opções da linha de comando
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    json: bool,
    help: bool,
    text: Option<String>,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut parsed = CliArgs::default();
    let mut words = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            "-" => {}
            _ => words.push(arg.as_str()),
        }
    }

    if !words.is_empty() {
        parsed.text = Some(words.join(" "));
    }
    parsed
}

fn print_usage(program: &str) {
    eprintln!("Autolink CLI v{}", autolink::VERSION);
    eprintln!();
    eprintln!("Uso: {} [--json] [texto...]", program);
    eprintln!();
    eprintln!("Sem texto (ou com -), lê da entrada padrão.");
    eprintln!();
    eprintln!("Opções:");
    eprintln!("  --json      Imprime uma mensagem JSON do bot com o texto convertido");
    eprintln!("  -h, --help  Mostra esta ajuda");
    eprintln!();
    eprintln!("Variáveis de ambiente:");
    eprintln!("  AUTOLINK_COUNTRY_CODE       Código do país (padrão: 55)");
    eprintln!("  AUTOLINK_WHATSAPP_BASE_URL  Prefixo dos links (padrão: https://wa.me/)");
    eprintln!();
    eprintln!("Exemplos:");
    eprintln!("  {} \"Fale com ouvidoria@pmfi.pr.gov.br\"", program);
    eprintln!("  echo \"Ligue (45) 3521-1000\" | {}", program);
}

fn main() -> anyhow::Result<()> {
    // Carregar .env PRIMEIRO, antes de qualquer coisa
    load_dotenv();

    // Inicializar logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("autolink-cli");
    let cli = parse_args(args.get(1..).unwrap_or_default());

    if cli.help {
        print_usage(program);
        return Ok(());
    }

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("falha ao ler a entrada padrão")?;
            buf
        }
    };

    let config = autolink::load_linkify_config();
    let rewriter = LinkRewriter::new(config)?;

    if cli.json {
        let mut message = build_message(Some(text.as_str()), Sender::Bot);
        message.text = message.render(&rewriter);
        println!("{}", serde_json::to_string_pretty(&message)?);
    } else {
        print!("{}", rewriter.rewrite(Some(text.as_str())));
        if !text.ends_with('\n') {
            println!();
        }
    }

    Ok(())
}
