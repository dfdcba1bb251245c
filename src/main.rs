use clap::Parser;
use log::{debug, error};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use use_it_up::config::load_config;
use use_it_up::display::{format_detail, format_inventory, format_results};
use use_it_up::{AddOutcome, Message, SearchOutcome, Session, SpoonacularClient};

const HELP: &str = "Commands:
  add <item>       add an ingredient to your inventory
  remove <item>    remove an ingredient
  list             show your inventory
  key <api-key>    save your Spoonacular API key
  change-key       show the key entry prompt again
  search           find recipes for your inventory
  open <id>        show full details for a recipe
  close            close the recipe details
  help             show this help
  quit             exit";

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn your food inventory into recipes", long_about = None)]
struct Args {
    /// Spoonacular API key (defaults to config or SPOONACULAR_API_KEY)
    #[arg(short, long)]
    api_key: Option<String>,

    /// Config file name, without extension
    #[arg(short, long, default_value = "use-it-up")]
    config: String,

    /// Show full details for one recipe and exit
    #[arg(short, long)]
    recipe: Option<u64>,

    /// Ingredients to search for; omit to start the interactive prompt
    ingredients: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;
    let client = SpoonacularClient::new(&config)?;

    let mut session = Session::new();
    if let Some(key) = args.api_key.clone().or_else(|| config.resolve_api_key()) {
        session.set_api_key(key);
        session.save_api_key();
    }

    if let Some(recipe_id) = args.recipe {
        let detail = session.open_recipe(&client, recipe_id).await?;
        println!("{}", format_detail(detail));
        return Ok(());
    }

    if !args.ingredients.is_empty() {
        for ingredient in &args.ingredients {
            if let Err(e) = session.add_item(ingredient) {
                debug!("{}", e);
            }
        }
        match session.search(&client).await {
            Ok(SearchOutcome::Found(_)) => print!("{}", format_results(session.results())),
            Ok(SearchOutcome::NoMatches) => print_message(&session),
            Err(e) => {
                error!("Search failed: {}", e);
                return Err(e.into());
            }
        }
        return Ok(());
    }

    run_prompt(&mut session, &client).await
}

async fn run_prompt(
    session: &mut Session,
    client: &SpoonacularClient,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("USE IT UP - add your ingredients and discover recipes!");
    if session.credential().form_visible() {
        println!("Enter your Spoonacular API key with `key <api-key>` (get one at spoonacular.com/food-api)");
    }
    println!("{}", HELP);

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);
                if !handle_command(session, client, input).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!("Prompt error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

/// Run one prompt command; returns false when the user asked to quit
async fn handle_command(session: &mut Session, client: &SpoonacularClient, input: &str) -> bool {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "add" => match session.add_item(rest) {
            Ok(AddOutcome::Added(item)) => println!("Added {}", item),
            Ok(AddOutcome::Ignored) => {}
            Err(e) => println!("{}", e),
        },
        "remove" => {
            if session.remove_item(&rest.trim().to_lowercase()) {
                println!("Removed {}", rest);
            }
        }
        "list" => print!("{}", format_inventory(session.inventory())),
        "key" => {
            session.set_api_key(rest);
            if session.save_api_key() {
                println!("API key saved");
            }
        }
        "change-key" => {
            session.show_credential_form();
            println!("Enter your new key with `key <api-key>`");
        }
        "search" => {
            println!("Searching...");
            match session.search(client).await {
                Ok(SearchOutcome::Found(_)) => print!("{}", format_results(session.results())),
                Ok(SearchOutcome::NoMatches) | Err(_) => print_message(session),
            }
        }
        "open" => match rest.parse::<u64>() {
            Ok(recipe_id) => match session.open_recipe(client, recipe_id).await {
                Ok(detail) => println!("{}", format_detail(detail)),
                Err(e) => eprintln!("{}", e),
            },
            Err(_) => println!("Usage: open <recipe id>"),
        },
        "close" => session.close_recipe(),
        "help" => println!("{}", HELP),
        "quit" | "exit" => return false,
        other => println!("Unknown command '{}'. Type `help` for commands.", other),
    }
    true
}

fn print_message(session: &Session) {
    match session.message() {
        Some(Message::Error(text)) => eprintln!("{}", text),
        Some(Message::Notice(text)) => println!("{}", text),
        None => {}
    }
}
