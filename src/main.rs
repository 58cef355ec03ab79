use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use deckmark::{Config, ContentKind};

#[derive(Parser)]
#[command(name = "deckmark")]
#[command(about = "Compile Markdown into presentation styling directives")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Content kind: title, body, list or table
    #[arg(short, long, default_value = "body")]
    kind: ContentKind,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = Config::load(&cli.config);
    info!("compiling {} as {}", cli.input.display(), cli.kind);

    let directives = match deckmark::compile(&markdown, cli.kind, &config) {
        Ok(directives) => directives,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The envelope is what a transport adapter would translate into the
    // remote service's request schema; lists also carry the bullet preset.
    let mut envelope = serde_json::json!({
        "kind": cli.kind.as_str(),
        "directives": directives,
    });
    if cli.kind == ContentKind::List {
        envelope["bullet"] = serde_json::json!(config.list.bullet);
    }

    let json = match serde_json::to_string_pretty(&envelope) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializing directives: {}", e);
            std::process::exit(1);
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, json) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            println!("Created {}", path.display());
        }
        None => println!("{}", json),
    }
}
