use std::io::{BufRead, Write};

use color_eyre::Result;
use tokio::sync::oneshot;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use medivibe::bmi;
use medivibe::booking;
use medivibe::chat::{ChatClient, DEFAULT_BASE_URL};
use medivibe::cli::{parse_args, CliCommand};
use medivibe::error::VibeError;
use medivibe::models::{AssistantKind, Conversation};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
medivibe - health assistant client

USAGE:
    medivibe [chat] [--health|--meal]   interactive chat (default)
    medivibe bmi <height-cm> <weight-kg>
    medivibe directory [state] [city]
    medivibe --version
    medivibe --help

The backend URL can be overridden with MEDIVIBE_BASE_URL.";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("medivibe {}", VERSION);
        }
        CliCommand::Help => {
            println!("{}", USAGE);
        }
        CliCommand::Invalid { message } => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Bmi { height_cm, weight_kg } => run_bmi(height_cm, weight_kg),
        CliCommand::Directory { state, city } => run_directory(state.as_deref(), city.as_deref()),
        CliCommand::Chat { kind } => run_chat(kind).await?,
    }

    Ok(())
}

fn run_bmi(height_cm: f64, weight_kg: f64) {
    match bmi::bmi(height_cm, weight_kg) {
        Ok(reading) => {
            println!("BMI: {:.1} ({})", reading.value, reading.category);
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    }
}

fn run_directory(state: Option<&str>, city: Option<&str>) {
    match (state, city) {
        (None, _) => {
            for state in booking::states() {
                println!("{}", state);
                if let Some(cities) = booking::cities(state) {
                    for city in cities {
                        println!("  {}", city);
                    }
                }
            }
        }
        (Some(state), None) => match booking::cities(state) {
            Some(cities) => {
                for city in cities {
                    println!("{}", city);
                }
            }
            None => {
                eprintln!("unknown state '{}'", state);
                std::process::exit(1);
            }
        },
        (Some(state), Some(city)) => match booking::hospitals(state, city) {
            Some(hospitals) => {
                for hospital in hospitals {
                    println!("{}", hospital);
                }
            }
            None => {
                eprintln!("unknown state/city '{}'/'{}'", state, city);
                std::process::exit(1);
            }
        },
    }
}

fn base_url() -> String {
    std::env::var("MEDIVIBE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

async fn run_chat(kind: AssistantKind) -> Result<()> {
    let client = ChatClient::with_base_url(base_url());
    let mut conversation = Conversation::new();

    println!(
        "MediVibe {} assistant. Type a message, or 'quit' to exit.",
        kind.as_str()
    );

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == "quit" || text == "exit" {
            break;
        }

        stream_reply(&client, &mut conversation, kind, text).await;
    }

    Ok(())
}

/// Send one message and print the reply incrementally. Ctrl-C abandons the
/// stream but keeps the partial reply in the conversation.
async fn stream_reply(
    client: &ChatClient,
    conversation: &mut Conversation,
    kind: AssistantKind,
    text: &str,
) {
    conversation.push_user(text);
    let request = medivibe::models::ChatRequest::new(conversation.messages().to_vec(), kind);
    conversation.begin_assistant();

    let (cancel_tx, cancel_rx) = oneshot::channel();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(());
        }
    });

    // The sink receives the full running content; track how much is already
    // on screen and print only the new tail.
    let mut printed = 0usize;
    let mut latest = String::new();
    let result = client
        .stream_chat_cancellable(
            &request,
            |content| {
                print!("{}", &content[printed..]);
                let _ = std::io::stdout().flush();
                printed = content.len();
                latest.clear();
                latest.push_str(content);
            },
            cancel_rx,
        )
        .await;
    ctrl_c.abort();

    conversation.apply_content(&latest);
    conversation.finalize();
    println!();

    match result {
        Ok(_) => {}
        Err(err) => {
            debug!(code = err.error_code(), "chat request failed");
            report_error(&err);
        }
    }
}

fn report_error(err: &VibeError) {
    eprintln!("[{}] {}", err.error_code(), err.user_message());
    if err.is_retryable() {
        eprintln!("{}", err.recovery_hint());
    }
}
