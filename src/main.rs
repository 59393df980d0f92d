use anyhow::{Context, Result};
use bestmatch_chatbot::{
    ChatConfig, KnowledgeBase, LexicalSimilarity, Responder, ResponderConfig, chat, config,
    countries, datagen,
};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Question/answer chatbot that replies with the closest known question's answer.
#[derive(Debug, Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    chat: ChatArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Chat interactively (default)
    Chat(ChatArgs),
    /// Write the country list as JSON
    GenCountries {
        #[arg(long, default_value = "capitulo_2/countries.json")]
        output: PathBuf,
    },
    /// Write random sentences mentioning countries
    GenText {
        #[arg(long, default_value = "capitulo_2/paises.txt")]
        output: PathBuf,
        #[arg(long, default_value_t = 100)]
        lines: usize,
    },
    /// Download world capitals and write them as JSON
    GenCapitals {
        #[arg(long, default_value = "capitals.json")]
        output: PathBuf,
        #[arg(long, default_value = datagen::CAPITALS_URL)]
        url: String,
    },
}

#[derive(Debug, Args)]
struct ChatArgs {
    /// JSON object mapping questions to answers
    #[arg(long, env = "CHATBOT_KNOWLEDGE_BASE")]
    knowledge_base: Option<PathBuf>,
    /// Score an answer must strictly exceed [default: 0.6]
    #[arg(long, env = "CHATBOT_THRESHOLD")]
    threshold: Option<f64>,
    #[arg(long)]
    fallback: Option<String>,
    #[arg(long)]
    exit_word: Option<String>,
}

fn load_knowledge_base(path: Option<PathBuf>) -> Result<KnowledgeBase> {
    let path = path.or_else(config::default_knowledge_base_path);
    let kb = match &path {
        Some(path) => KnowledgeBase::load(path)?,
        None => KnowledgeBase::builtin(),
    };
    info!(
        source = %path.as_deref().map_or("built-in".into(), |p| p.display().to_string()),
        entries = kb.len(),
        "knowledge base loaded"
    );
    Ok(kb)
}

fn build_responder(args: ChatArgs) -> Result<(Responder<LexicalSimilarity>, ChatConfig)> {
    let kb = load_knowledge_base(args.knowledge_base)?;

    let mut responder_config = ResponderConfig::default();
    if let Some(threshold) = args.threshold {
        responder_config.threshold = threshold;
    }
    if let Some(fallback) = args.fallback {
        responder_config.fallback = fallback;
    }
    let mut chat_config = ChatConfig::default();
    if let Some(exit_word) = args.exit_word {
        chat_config.exit_word = exit_word;
    }

    let similarity = LexicalSimilarity::fit(kb.questions());
    let responder = Responder::with_config(kb, similarity, responder_config)?;
    info!(threshold = responder.config().threshold, "responder ready");
    Ok((responder, chat_config))
}

fn run_chat(args: ChatArgs) -> Result<()> {
    let (responder, chat_config) = build_responder(args)?;

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Chatbot pronto! Digite '{}' para encerrar.",
        chat_config.exit_word
    )?;
    chat::run(&responder, &chat_config, io::stdin().lock(), &mut stdout)?;
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Chat(cli.chat)) {
        Command::Chat(args) => run_chat(args),
        Command::GenCountries { output } => {
            datagen::write_countries_json(&output, countries::COUNTRIES)
        }
        Command::GenText { output, lines } => datagen::generate_country_text(
            &output,
            lines,
            countries::COUNTRIES,
            &mut rand::thread_rng(),
        ),
        Command::GenCapitals { output, url } => {
            let capitals = datagen::fetch_capitals(&url)
                .await
                .context("failed to fetch capitals")?;
            datagen::write_capitals_json(&output, &capitals)
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestmatch_chatbot::ResponderError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn chat_args(argv: &[&str]) -> ChatArgs {
        match Cli::try_parse_from(argv).unwrap() {
            Cli { command: None, chat } => chat,
            Cli {
                command: Some(Command::Chat(chat)),
                ..
            } => chat,
            other => panic!("expected chat arguments, got {other:?}"),
        }
    }

    fn knowledge_base_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"Oi": "Olá.", "Tchau": "Até logo."}}"#).unwrap();
        file
    }

    #[test]
    fn test_chat_flags_without_subcommand() {
        let args = chat_args(&[
            "bestmatch-chatbot",
            "--knowledge-base",
            "kb.json",
            "--threshold",
            "0.75",
            "--fallback",
            "no match found",
            "--exit-word",
            "quit",
        ]);
        assert_eq!(args.knowledge_base, Some(PathBuf::from("kb.json")));
        assert_eq!(args.threshold, Some(0.75));
        assert_eq!(args.fallback.as_deref(), Some("no match found"));
        assert_eq!(args.exit_word.as_deref(), Some("quit"));
    }

    #[test]
    fn test_chat_subcommand_flags() {
        let args = chat_args(&["bestmatch-chatbot", "chat", "--threshold", "0.2"]);
        assert_eq!(args.threshold, Some(0.2));
    }

    #[test]
    fn test_env_applies_with_and_without_subcommand() {
        // SAFETY: the only test in this binary that touches CHATBOT_THRESHOLD.
        unsafe { std::env::set_var("CHATBOT_THRESHOLD", "0.9") };
        let implicit = chat_args(&["bestmatch-chatbot"]);
        let explicit = chat_args(&["bestmatch-chatbot", "chat"]);
        let overridden = chat_args(&["bestmatch-chatbot", "--threshold", "0.3"]);
        unsafe { std::env::remove_var("CHATBOT_THRESHOLD") };

        assert_eq!(implicit.threshold, Some(0.9));
        assert_eq!(explicit.threshold, Some(0.9));
        assert_eq!(overridden.threshold, Some(0.3));
    }

    #[test]
    fn test_generator_subcommands() {
        let cli = Cli::try_parse_from(["bestmatch-chatbot", "gen-text", "--lines", "5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::GenText { lines: 5, ref output }) if output == &PathBuf::from("capitulo_2/paises.txt")
        ));

        let cli = Cli::try_parse_from(["bestmatch-chatbot", "gen-capitals"]).unwrap();
        assert!(matches!(cli.command, Some(Command::GenCapitals { ref url, .. }) if url == datagen::CAPITALS_URL));
    }

    #[test]
    fn test_chat_flags_conflict_with_other_subcommands() {
        let result = Cli::try_parse_from(["bestmatch-chatbot", "--fallback", "x", "gen-countries"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_responder_from_flags() {
        let file = knowledge_base_file();
        let path = file.path().to_str().unwrap();
        let args = chat_args(&[
            "bestmatch-chatbot",
            "--knowledge-base",
            path,
            "--threshold",
            "0.5",
            "--fallback",
            "no match found",
            "--exit-word",
            "quit",
        ]);

        let (responder, chat_config) = build_responder(args).unwrap();
        assert_eq!(responder.knowledge_base().len(), 2);
        assert_eq!(responder.config().threshold, 0.5);
        assert_eq!(chat_config.exit_word, "quit");
        assert_eq!(responder.answer("tchau").unwrap(), "Até logo.");
        assert_eq!(responder.answer("bom dia").unwrap(), "no match found");
    }

    #[test]
    fn test_build_responder_rejects_out_of_range_threshold() {
        let file = knowledge_base_file();
        let path = file.path().to_str().unwrap();
        let args = chat_args(&["bestmatch-chatbot", "--knowledge-base", path, "--threshold", "1.5"]);

        let err = build_responder(args).map(|_| ()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResponderError>(),
            Some(ResponderError::Config(_))
        ));
    }

    #[test]
    fn test_build_responder_missing_knowledge_base() {
        let args = chat_args(&["bestmatch-chatbot", "--knowledge-base", "/definitely/not/here.json"]);
        assert!(build_responder(args).is_err());
    }
}
