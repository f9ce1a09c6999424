//! Nick Gen - nickname generator
//!
//! Main entry point for the command-line application.

use std::io;
use std::process;

use nick_gen::cli::Args;
use nick_gen::config::Config;
use nick_gen::display::{print_banner, print_error, print_header, print_info};
use nick_gen::generator::Generator;
use nick_gen::output::{print_words, GridWriter, NoPager, Pager, StdinPager};

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Set up logging
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Validate arguments
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => Args::usage_error(e).exit(),
    };

    // Run the application
    if let Err(e) = run(config) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    if config.verbose {
        print_banner();
        print_config(&config);
    }

    let mut rng = config.rng();
    let mut generator = Generator::new(config);
    let words = generator.generate(&mut rng)?;

    let config = generator.config();
    let pager: Box<dyn Pager> = if config.paginate {
        Box::new(StdinPager)
    } else {
        Box::new(NoPager)
    };

    let mut grid = GridWriter::new(io::stdout().lock(), pager);
    let printed = print_words(words.as_ref(), config.leet_ratio, &mut rng, &mut grid)?;
    grid.finish()?;

    generator.stats_mut().set_printed(printed);
    log::info!("Printed {} nicknames", generator.stats().printed());

    if generator.config().verbose {
        generator.stats().print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &Config) {
    print_header("Configuration");

    print_info(&format!("Mode:         {}", config.mode));
    print_info(&format!("Word lists:   {:?}", config.word_dir()));

    match config.weight {
        Some(weight) => print_info(&format!("Weight:       {}", weight)),
        None => print_info(&format!(
            "Length:       {}-{}",
            config.min_length, config.max_length
        )),
    }

    if let Some(ref first) = config.first {
        print_info(&format!("First:        {}", first.as_str()));
    }

    print_info(&format!("L33t ratio:   {}", config.leet_ratio));
    print_info(&format!(
        "Seed:         {}",
        config.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    ));
    print_info(&format!("Pause:        {}", config.paginate));
    println!();
}
