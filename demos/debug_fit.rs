use deckmark::{Config, ContentKind};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "A short paragraph.\n\nA much longer paragraph that keeps going and \
         going until the default size no longer fits the content box width."
            .to_string()
    };

    let config = Config::load(std::path::Path::new("config.toml"));
    let frame = config.frame(ContentKind::Body);
    let range = config.font_range(ContentKind::Body);

    for (i, chunk) in deckmark::partition(&md, config.text.max_chunk_chars)
        .iter()
        .enumerate()
    {
        let size = deckmark::fit_font_size(chunk, frame.width, frame.height, &range);
        let dims = deckmark::estimate_size(chunk, size);
        let preview: String = chunk.chars().take(30).collect();
        println!(
            "chunk {} {:33} -> {}pt ({:.0}x{:.0} in {:.0}x{:.0})",
            i + 1,
            preview,
            size,
            dims.width,
            dims.height,
            frame.width,
            frame.height
        );
    }
}
