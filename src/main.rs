use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use recipe_ideas::view::{render_detail, render_quick_ingredients, render_search_state};
use recipe_ideas::{AppConfig, MealDbProvider, RecipeSource, SearchController};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser)]
#[command(name = "recipe-ideas")]
#[command(about = "Find recipes by ingredient", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    /// Override the recipe API base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes that use an ingredient
    #[command(alias = "s")]
    Search {
        /// Ingredient to search for
        ingredient: String,
    },

    /// Show the full recipe for an id
    Show {
        /// Recipe id as listed by `search`
        id: String,
    },

    /// Search one of the quick ingredients, or list them
    Quick {
        /// Ingredient to search for
        term: Option<String>,
    },

    /// Start an interactive session (default)
    #[command(alias = "i")]
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let config = AppConfig::load()?.with_overrides(cli.base_url, cli.timeout);
    debug!("{:?}", config);
    let provider = MealDbProvider::new(&config)?;
    debug!("Using recipe source '{}'", provider.source_name());
    let controller = SearchController::new(provider);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Search { ingredient } => {
            controller.set_query(ingredient.as_str());
            controller.submit_search(&ingredient).await;
            println!("{}", render_search_state(&controller.search_state()));
        }
        Commands::Show { id } => {
            controller.select_recipe(&id).await;
            match controller.detail() {
                Some(detail) => println!("{}", render_detail(&detail)),
                None => eprintln!("Recipe {} is not available.", id),
            }
        }
        Commands::Quick { term: None } => println!("{}", render_quick_ingredients()),
        Commands::Quick { term: Some(term) } => {
            controller.quick_search(&term).await;
            println!("{}", render_search_state(&controller.search_state()));
        }
        Commands::Interactive => run_session(&controller).await?,
    }

    Ok(())
}

/// One line of input in an interactive session
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Search(String),
    Open(String),
    Close,
    Quick(Option<String>),
    Help,
    Quit,
    Nothing,
}

impl SessionCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("", _) => SessionCommand::Nothing,
            ("quit" | "exit", "") => SessionCommand::Quit,
            ("help" | "?", "") => SessionCommand::Help,
            ("close", "") => SessionCommand::Close,
            ("quick", "") => SessionCommand::Quick(None),
            ("quick", term) => SessionCommand::Quick(Some(term.to_string())),
            ("open", target) if !target.is_empty() => SessionCommand::Open(target.to_string()),
            ("search", query) => SessionCommand::Search(query.to_string()),
            _ => SessionCommand::Search(line.to_string()),
        }
    }
}

const SESSION_HELP: &str = "\
Commands:
  <ingredient>        search recipes that use an ingredient
  search <ingredient> same as above
  open <n|id>         show the n-th result, or a recipe by id
  close               close the open recipe
  quick [ingredient]  list quick ingredients, or search one
  help                show this help
  quit                leave";

async fn run_session<S: RecipeSource>(
    controller: &SearchController<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render_search_state(&controller.search_state()));
    println!("{}", render_quick_ingredients());
    println!("Type `help` for commands.");

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match SessionCommand::parse(&line) {
            SessionCommand::Nothing => {}
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{}", SESSION_HELP),
            SessionCommand::Search(query) => {
                controller.set_query(query.as_str());
                controller.submit_search(&query).await;
                println!("{}", render_search_state(&controller.search_state()));
            }
            SessionCommand::Quick(None) => println!("{}", render_quick_ingredients()),
            SessionCommand::Quick(Some(term)) => {
                controller.quick_search(&term).await;
                println!("{}", render_search_state(&controller.search_state()));
            }
            SessionCommand::Open(target) => {
                let id = resolve_target(controller.search_state().results(), &target);
                controller.select_recipe(&id).await;
                if let Some(detail) = controller.detail().filter(|d| d.id == id) {
                    println!("{}", render_detail(&detail));
                }
            }
            SessionCommand::Close => controller.dismiss_detail(),
        }
    }

    Ok(())
}

/// Map a 1-based result position to its recipe id; anything else is taken as an id
fn resolve_target(results: &[recipe_ideas::RecipeSummary], target: &str) -> String {
    target
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=results.len()).contains(n))
        .map(|n| results[n - 1].id.clone())
        .unwrap_or_else(|| target.to_string())
}
