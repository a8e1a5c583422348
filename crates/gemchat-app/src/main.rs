//! gemchat: a terminal chat client for the Gemini API.
//!
//! Thin presentation layer over `gemchat_ai::Session`: reads lines from
//! stdin, routes commands, submits everything else, and renders the
//! transcript as it grows. All conversation state lives in the session;
//! this binary only reads it and calls the defined operations.

mod render;

use clap::Parser;
use tokio::io::AsyncBufReadExt;

use gemchat_ai::{GeminiClient, GeminiConfig, Session, DEFAULT_MODEL};
use gemchat_keystore::{FileKeyStore, KeyStore, MemoryKeyStore, CREDENTIAL_KEY};

/// Canned conversation starters, sent with `/try <n>`.
const SUGGESTIONS: [&str; 3] = [
    "I'm stuck making my game...",
    "What party games are good for a group?",
    "I want to learn how to build a website!",
];

#[derive(Parser)]
#[command(name = "gemchat", about = "Terminal chat client for the Gemini API")]
struct Args {
    /// Model to target.
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API key. Falls back to the stored credential when omitted.
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Persist the credential for future runs.
    #[arg(long)]
    remember: bool,

    /// Remove any stored credential before starting.
    #[arg(long)]
    forget: bool,

    /// Suggested first message, sent when the first input line is empty.
    #[arg(long)]
    starter: Option<String>,
}

/// One REPL input line, classified.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    SetModel(&'a str),
    SetKey(&'a str),
    Try(usize),
    Invalid(&'static str),
    Message(&'a str),
}

/// Classify an input line. Commands with a missing or blank argument are
/// rejected here so an empty value never reaches the session.
fn parse_command(input: &str) -> Command<'_> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Command::Message(trimmed);
    }
    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (trimmed, ""),
    };
    match name {
        "/quit" | "/exit" => Command::Quit,
        "/model" if !rest.is_empty() => Command::SetModel(rest),
        "/model" => Command::Invalid("usage: /model <id>"),
        "/key" if !rest.is_empty() => Command::SetKey(rest),
        "/key" => Command::Invalid("usage: /key <value>"),
        "/try" => match rest.parse::<usize>() {
            Ok(n) if (1..=SUGGESTIONS.len()).contains(&n) => Command::Try(n),
            _ => Command::Invalid("usage: /try <number>"),
        },
        _ => Command::Invalid("unknown command"),
    }
}

/// Submit one message and render the outcome.
async fn exchange(session: &mut Session, client: &GeminiClient, text: &str) {
    render::thinking();
    session.submit(client, text).await;
    match session.last_error() {
        // On failure only the error is shown; the transcript never grows
        // a fabricated assistant line.
        Some(err) => eprintln!("error: {err}"),
        None => {
            if let Some(turn) = session.history().last() {
                render::print_turn(turn);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemchat=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut store: Box<dyn KeyStore> = match FileKeyStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("keystore unavailable, credential will not persist: {e}");
            Box::new(MemoryKeyStore::new())
        }
    };

    if args.forget {
        if let Err(e) = store.remove(CREDENTIAL_KEY) {
            tracing::warn!("failed to remove stored credential: {e}");
        }
    }

    let credential = args
        .api_key
        .clone()
        .or_else(|| store.get(CREDENTIAL_KEY))
        .unwrap_or_default();
    if args.remember && !credential.is_empty() {
        if let Err(e) = store.set(CREDENTIAL_KEY, &credential) {
            tracing::warn!("failed to persist credential: {e}");
        }
    }

    let mut session = Session::new()
        .with_model(&args.model)
        .with_credential(credential);
    let client = GeminiClient::new(GeminiConfig::new());

    render::print_transcript(session.history());
    if let Some(starter) = &args.starter {
        println!("(press enter to send the starter: {starter})");
    }
    println!("(commands: /model <id>, /key <value>, /try <n>, /quit)");
    for (i, text) in SUGGESTIONS.iter().enumerate() {
        println!("  {}. {text}", i + 1);
    }

    let mut starter = args.starter.clone();
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        render::prompt();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("stdin read failed: {e}");
                break;
            }
        };

        // An empty line sends the pending starter, once.
        let input = if line.trim().is_empty() {
            match starter.take() {
                Some(text) => text,
                None => continue,
            }
        } else {
            line
        };

        match parse_command(&input) {
            Command::Quit => break,
            Command::SetModel(id) => {
                session.set_model(id);
                println!("(model set to {id})");
            }
            Command::SetKey(value) => {
                session.set_credential(value);
                if args.remember {
                    if let Err(e) = store.set(CREDENTIAL_KEY, value) {
                        tracing::warn!("failed to persist credential: {e}");
                    }
                }
                println!("(credential updated)");
            }
            Command::Try(n) => {
                let text = SUGGESTIONS[n - 1];
                println!("you> {text}");
                exchange(&mut session, &client, text).await;
            }
            Command::Invalid(usage) => println!("({usage})"),
            Command::Message(text) => exchange(&mut session, &client, text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, SUGGESTIONS};

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(parse_command("hello there"), Command::Message("hello there"));
        assert_eq!(parse_command("  hello  "), Command::Message("hello"));
    }

    #[test]
    fn quit_aliases() {
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("/exit"), Command::Quit);
    }

    #[test]
    fn model_requires_a_value() {
        assert_eq!(
            parse_command("/model gemini-2.5-pro"),
            Command::SetModel("gemini-2.5-pro")
        );
        assert!(matches!(parse_command("/model"), Command::Invalid(_)));
        assert!(matches!(parse_command("/model   "), Command::Invalid(_)));
    }

    #[test]
    fn key_requires_a_value() {
        assert_eq!(parse_command("/key abc123"), Command::SetKey("abc123"));
        assert!(matches!(parse_command("/key"), Command::Invalid(_)));
        assert!(matches!(parse_command("/key    "), Command::Invalid(_)));
    }

    #[test]
    fn try_selects_a_suggestion_in_range() {
        assert_eq!(parse_command("/try 1"), Command::Try(1));
        let last = format!("/try {}", SUGGESTIONS.len());
        assert_eq!(parse_command(&last), Command::Try(SUGGESTIONS.len()));
        assert!(matches!(parse_command("/try 0"), Command::Invalid(_)));
        assert!(matches!(parse_command("/try 99"), Command::Invalid(_)));
        assert!(matches!(parse_command("/try x"), Command::Invalid(_)));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert!(matches!(parse_command("/frobnicate"), Command::Invalid(_)));
    }
}
