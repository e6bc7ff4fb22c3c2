//! Demo catalog snapshot generator.
//!
//! Generates a deterministic movie catalog and writes it to a snapshot file
//! the GUI can open offline. Compression is optional; `-brotli` writes a
//! `.br` file.

use anyhow::Result;
use rflicks::{CatalogQuery, CatalogSource, SnapshotWriter, VirtualCatalog};

struct Config {
    movie_count: usize,
    seed: u64,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            movie_count: 600,
            seed: 42,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n <count>     Number of movies to generate (default: 600)");
    eprintln!("  -seed <seed>   Generator seed (default: 42)");
    eprintln!("  -o <file>      Output file (default: catalog.rfcat)");
    eprintln!("  -brotli        Compress the output with Brotli (.br suffix)");
    eprintln!("  -h, --help     Show this help");
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| anyhow::anyhow!("-n needs a value"))?;
                config.movie_count = value.parse()?;
            }
            "-seed" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| anyhow::anyhow!("-seed needs a value"))?;
                config.seed = value.parse()?;
            }
            "-o" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| anyhow::anyhow!("-o needs a value"))?;
                config.output_file = Some(value.clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                print_usage(&args[0]);
                anyhow::bail!("Unknown argument: {}", other);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = parse_args()?;

    let mut output = config
        .output_file
        .unwrap_or_else(|| "catalog.rfcat".to_string());
    if config.use_brotli && !output.ends_with(".br") {
        output.push_str(".br");
    }

    println!(
        "Generating {} movies (seed {}) -> {}",
        config.movie_count, config.seed, output
    );

    let catalog = VirtualCatalog::with_config(config.movie_count, config.seed);

    let mut writer = SnapshotWriter::create(&output)?;
    writer.write_header("Generated Catalog", catalog.genres()?)?;

    // Page through the source the same way the GUI would
    let mut query = CatalogQuery::popular(1);
    loop {
        let page = catalog.fetch_page(&query)?;
        let has_more = page.has_more();
        for movie in &page.results {
            writer.write_movie(movie)?;
        }
        if !has_more {
            break;
        }
        query = query.next_page();
    }

    let total = writer.finish()?;
    println!("Wrote {} movies to {}", total, output);

    Ok(())
}
