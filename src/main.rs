use clap::{Parser, Subcommand};
#[cfg(target_family = "windows")]
use colored::control::set_virtual_terminal;
use colored::Colorize;
use futures::future::join_all;
use heroes_client::config::{parse_base_url, Config};
use heroes_client::logs::setup_logging;
use heroes_client::{Hero, HeroService, HttpTransport, MessageLog, NewHero, Result};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "heroes", about = "Manage heroes on a remote api")]
struct Cli {
    /// Base url of the api, overrides HEROES_API_URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every hero
    List,
    /// Fetch one or more heroes by id
    Get {
        #[arg(required = true)]
        ids: Vec<i32>,
    },
    /// Create a hero, the server picks the id
    Add { name: String },
    /// Rename an existing hero
    Update { id: i32, name: String },
    /// Delete a hero by id
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let api_url = match cli.base_url {
        Some(raw) => parse_base_url(&raw)?,
        None => Config::from_env()?.api_url,
    };
    tracing::debug!(%api_url, "using api");

    #[cfg(target_family = "windows")]
    {
        if set_virtual_terminal(true).is_err() {
            eprintln!("failed to print colorfully.")
        };
    }

    let log = MessageLog::new();
    let service = HeroService::new(
        Arc::new(HttpTransport::new(api_url)),
        Arc::new(log.clone()),
    );

    match cli.command {
        Command::List => {
            for hero in service.list_heroes().await {
                print_hero(&hero);
            }
        }
        Command::Get { ids } => {
            // all lookups are in flight at once
            let heroes = join_all(ids.iter().map(|&id| service.get_hero(id))).await;
            for hero in heroes.iter().flatten() {
                print_hero(hero);
            }
        }
        Command::Add { name } => {
            if let Some(hero) = service.add_hero(&NewHero::new(name)).await {
                print_hero(&hero);
            }
        }
        Command::Update { id, name } => {
            service.update_hero(&Hero { id, name }).await;
        }
        Command::Delete { id } => {
            service.delete_hero(id).await;
        }
    }

    for message in log.messages() {
        let line = format!("HeroService: {message}");
        if message.contains(" failed: ") {
            println!("{}", line.red());
        } else {
            println!("{}", line.green());
        }
    }

    Ok(())
}

fn print_hero(hero: &Hero) {
    println!("{:>4}  {}", hero.id.to_string().yellow(), hero.name);
}
