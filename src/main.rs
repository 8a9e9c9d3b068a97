use clap::Parser;
use tagsmith::application::{init, ConfigService, EnrichOptions, EnrichService, PreviewService};
use tagsmith::cli::{format_enrich_report, format_tag_list, Cli, Commands};
use tagsmith::error::TagsmithError;
use tagsmith::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagsmithError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("input = {}", config.input);
                println!("output = {}", config.output);
                println!("synonyms = {}", config.synonyms);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: tagsmith config [--list | <key> [<value>]]");
                println!("Valid keys: input, output, synonyms, created");
                Ok(())
            }
        }
        Some(Commands::Enrich {
            input,
            output,
            synonyms,
            dry_run,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = EnrichService::new(repo);

            let report = service.execute(EnrichOptions {
                input,
                output,
                synonyms,
                dry_run,
            })?;

            println!("{}", format_enrich_report(&report));
            Ok(())
        }
        Some(Commands::Preview { name, description }) => {
            let repo = FileSystemRepository::discover()?;
            let service = PreviewService::new(repo);

            let tags = service.execute(&name, &description)?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        None => {
            // No command given, show help
            println!("tagsmith - Search-tag enrichment for product catalogs");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
