use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use routinist::config::Config;
use routinist::editor::{EditorSession, HttpGenerateClient, RoutineStore};
use routinist::rest::{self, ApiState};
use routinist::routine::Routine;
use routinist::logging;

#[derive(Parser)]
#[command(name = "routinist")]
#[command(about = "AI-assisted routine builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server for routine generation
    Serve {
        /// Port to listen on (default: 7311)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate a routine and save it locally
    Generate {
        /// Free-text description of the desired routine
        prompt: Vec<String>,

        /// Reference image file (5 MiB maximum)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Generation service URL (default: local server port)
        #[arg(short, long)]
        server: Option<String>,
    },

    /// Print the saved routine
    Show,

    /// Replace the saved routine with manually edited JSON
    Edit {
        /// File holding the edited routine JSON
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_server_mode = matches!(cli.command, Commands::Serve { .. });
    let _logging_handle = logging::init_logging(&config, is_server_mode, cli.debug)?;

    match cli.command {
        Commands::Serve { port } => {
            cmd_serve(&config, port).await?;
        }
        Commands::Generate {
            prompt,
            image,
            server,
        } => {
            cmd_generate(&config, prompt, image, server).await?;
        }
        Commands::Show => {
            cmd_show(&config)?;
        }
        Commands::Edit { file } => {
            cmd_edit(&config, &file)?;
        }
    }

    Ok(())
}

async fn cmd_serve(config: &Config, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);

    println!("Starting routinist API server...");
    println!("  Port: {}", port);
    println!("  Model: {}", config.ai.model);
    println!("  Endpoints:");
    println!("    GET  /api/v1/health        Health check");
    println!("    GET  /api/v1/status        Server status");
    println!("    POST /api/v1/generate      Generate a routine");
    println!("    GET  /api/v1/openapi.json  OpenAPI document");
    println!();

    let state = ApiState::new(config.clone());
    rest::serve(state, port).await?;

    Ok(())
}

async fn cmd_generate(
    config: &Config,
    prompt: Vec<String>,
    image: Option<PathBuf>,
    server: Option<String>,
) -> Result<()> {
    let server =
        server.unwrap_or_else(|| format!("http://localhost:{}", config.server.port));

    let client = HttpGenerateClient::new(server)?;
    let mut session = EditorSession::start(RoutineStore::new(config), client);

    session.set_input(prompt.join(" "));

    if let Some(path) = image {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read image file {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        session.select_image(filename, bytes)?;
    }

    session.generate().await?;
    session.save()?;

    if let Some(routine) = session.routine() {
        print_routine(routine);
    }

    Ok(())
}

fn cmd_show(config: &Config) -> Result<()> {
    let store = RoutineStore::new(config);

    match store.load()? {
        Some(routine) => print_routine(&routine),
        None => println!("No saved routine yet. Use 'routinist generate' to create one."),
    }

    Ok(())
}

fn cmd_edit(config: &Config, file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    // Edits go through the session so they get the same validation the
    // interactive edit mode applies: malformed JSON aborts with storage
    // untouched.
    let client = HttpGenerateClient::new(format!("http://localhost:{}", config.server.port))?;
    let mut session = EditorSession::start(RoutineStore::new(config), client);

    session.toggle_edit()?;
    session.set_raw_json(contents);
    session.save()?;

    if let Some(routine) = session.routine() {
        println!("Saved edited routine: {}", routine.title);
    }

    Ok(())
}

fn print_routine(routine: &Routine) {
    println!("{}", routine.title);
    println!("{}", "─".repeat(60));

    if !routine.description.is_empty() {
        println!("{}", routine.description);
        println!();
    }

    for step in &routine.steps {
        match &step.duration {
            Some(duration) => println!("{}. {} ({})", step.step, step.action, duration),
            None => println!("{}. {}", step.step, step.action),
        }
        if let Some(notes) = &step.notes {
            println!("   {}", notes);
        }
    }
}
