use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use campus_agents::ConciergeAgent;
use campus_core::{BuildingId, ChatInput, Language};
use campus_observability::{init_tracing, AppMetrics};
use campus_storage::Store;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "campus")]
#[command(about = "Campus Concierge CLI")]
struct Cli {
    #[arg(long, default_value = "en")]
    language: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat,
    Ask {
        text: String,
    },
    Buildings,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("campus_cli");
    let cli = Cli::parse();

    let language = Language::from_optional_str(Some(&cli.language));
    let agent = build_agent().await?;

    match cli.command {
        Command::Chat => run_chat(agent, language).await?,
        Command::Ask { text } => {
            let reply = agent
                .handle_chat(ChatInput {
                    session_id: None,
                    text,
                    language: Some(language.as_code().to_string()),
                    user_id: None,
                })
                .await?;

            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Buildings => {
            for building in BuildingId::ALL {
                println!("{:<16} {}", building.as_str(), building.display_name(language));
            }
        }
    }

    Ok(())
}

async fn run_chat(agent: ConciergeAgent<Store>, language: Language) -> Result<()> {
    let mut session_id: Option<String> = None;

    let welcome = agent.welcome(language, None);
    println!("{}\n", welcome.response);
    println!("Campus Concierge chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = agent
            .handle_chat(ChatInput {
                session_id: session_id.clone(),
                text: message.to_string(),
                language: Some(language.as_code().to_string()),
                user_id: None,
            })
            .await?;

        session_id = Some(reply.session_id.clone());

        println!("\n{}\n", reply.response);

        if !reply.suggestions.is_empty() {
            println!("Suggestions:");
            for suggestion in &reply.suggestions {
                println!("- {suggestion}");
            }
            println!();
        }
    }

    Ok(())
}

async fn build_agent() -> Result<ConciergeAgent<Store>> {
    let metrics = AppMetrics::shared();

    let store = if let Ok(database_url) = env::var("CAMPUS_DATABASE_URL") {
        Store::sqlite(&database_url).await?
    } else {
        Store::memory()
    };

    Ok(ConciergeAgent::new(Arc::new(store), metrics))
}
