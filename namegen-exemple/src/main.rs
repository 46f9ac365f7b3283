use namegen_core::SamplerConfig;
use namegen_core::model::generator::Generator;
use tracing_subscriber::EnvFilter;

/// Corpora shown side by side, in column order.
const COLUMNS: [&str; 4] = ["european", "arabic", "indian", "hispanic"];

const ROWS: usize = 10;
const COLUMN_WIDTH: usize = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Loads every .txt corpus of the "data" directory.
    // The first run trains each corpus and writes a .bin cache next to it,
    // later runs load the cache directly.
    let generator = Generator::new("./data")?;

    // 0.0 follows the letter statistics only, 1.0 draws every letter at random
    // (still filtered by the digram and trigram sets).
    let config = SamplerConfig::default().with_noise(0.2);

    let mut header = String::new();
    for column in COLUMNS {
        header.push_str(&cell(&capitalized(column)));
    }
    println!("{}", header.trim_end());
    println!("{}", "-".repeat(COLUMN_WIDTH * COLUMNS.len()));

    let mut rng = rand::rng();
    for _ in 0..ROWS {
        let mut row = String::new();
        for column in COLUMNS {
            row.push_str(&cell(&generator.generate(column, config, &mut rng)?));
        }
        println!("{}", row.trim_end());
    }

    Ok(())
}

/// Truncates to 15 characters and pads to the column width.
fn cell(text: &str) -> String {
    let truncated: String = text.chars().take(COLUMN_WIDTH - 1).collect();
    format!("{truncated:<width$}", width = COLUMN_WIDTH)
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
