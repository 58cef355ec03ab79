fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "Hello **world** and *friend*".to_string()
    };

    // Load config from current directory
    let config = deckmark::Config::load(std::path::Path::new("config.toml"));

    println!("segments:");
    for segment in deckmark::format(&md) {
        println!("  {:?}", segment);
    }

    match deckmark::compile(&md, deckmark::ContentKind::Body, &config) {
        Ok(directives) => {
            println!("directives:");
            println!("{}", serde_json::to_string_pretty(&directives).unwrap());
        }
        Err(e) => eprintln!("compile failed: {}", e),
    }
}
