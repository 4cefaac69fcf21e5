//! Pass Forge - rule-based random password generation
//!
//! A simple and elegant CLI tool for generating random passwords that satisfy
//! configurable composition rules.

use std::collections::BTreeSet;
use std::env;
use std::process;

use inquire::{InquireError, MultiSelect, Text};
use serde::Serialize;

use pass_forge::{
    CharacterCategory, EffectiveAlphabet, GeneratorConfig, PasswordGenerator, Result,
};

fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = pass_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let mut options = match CliOptions::from_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("❌ {}", message);
            eprintln!("💡 Use --help for usage information");
            process::exit(1);
        }
    };

    if options.interactive {
        options = prompt_options(options);
    }

    // Run the main flow
    if let Err(e) = run_pass_forge(&options) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Resolved command line options
struct CliOptions {
    length: usize,
    count: usize,
    categories: BTreeSet<CharacterCategory>,
    excluded: String,
    json: bool,
    interactive: bool,
}

impl CliOptions {
    /// Built-in defaults, overridable through environment variables
    fn defaults() -> Self {
        Self {
            length: env_usize("PASS_FORGE_LENGTH").unwrap_or(16),
            count: env_usize("PASS_FORGE_COUNT").unwrap_or(1),
            categories: CharacterCategory::ALL.into_iter().collect(),
            excluded: env::var("PASS_FORGE_EXCLUDE").unwrap_or_default(),
            json: false,
            interactive: false,
        }
    }

    fn from_args(args: &[String]) -> std::result::Result<Self, String> {
        let mut options = Self::defaults();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--count" | "-n" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--count needs a value".to_string())?;
                    options.count = value
                        .parse()
                        .map_err(|_| format!("invalid count: {}", value))?;
                }
                "--exclude" | "-x" => {
                    options.excluded = iter
                        .next()
                        .ok_or_else(|| "--exclude needs a value".to_string())?
                        .clone();
                }
                "--categories" | "-c" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| "--categories needs a value".to_string())?;
                    options.categories = parse_categories(value)?;
                }
                "--json" => options.json = true,
                "--interactive" | "-i" => options.interactive = true,
                other if !other.starts_with('-') => {
                    options.length = other
                        .parse()
                        .map_err(|_| format!("invalid length: {}", other))?;
                }
                other => return Err(format!("unknown flag: {}", other)),
            }
        }

        Ok(options)
    }
}

fn env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

/// Parse a comma-separated category list
fn parse_categories(value: &str) -> std::result::Result<BTreeSet<CharacterCategory>, String> {
    let mut categories = BTreeSet::new();

    for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let category = match name.to_lowercase().as_str() {
            "digits" | "digit" | "numbers" | "d" => CharacterCategory::Digits,
            "uppercase" | "upper" | "u" => CharacterCategory::Uppercase,
            "lowercase" | "lower" | "l" => CharacterCategory::Lowercase,
            "special" | "symbols" | "s" => CharacterCategory::Special,
            other => return Err(format!("unknown category: {}", other)),
        };
        categories.insert(category);
    }

    Ok(categories)
}

/// Interactively refine the options
fn prompt_options(defaults: CliOptions) -> CliOptions {
    let all = CharacterCategory::ALL.to_vec();
    let default_indexes: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, category)| defaults.categories.contains(category))
        .map(|(index, _)| index)
        .collect();

    let prompted = (|| -> std::result::Result<CliOptions, InquireError> {
        let length = Text::new("Password length:")
            .with_default(&defaults.length.to_string())
            .prompt()?;

        let categories = MultiSelect::new("Character categories:", all.clone())
            .with_default(&default_indexes)
            .prompt()?;

        let excluded = Text::new("Excluded characters:")
            .with_default(&defaults.excluded)
            .prompt()?;

        let count = Text::new("How many passwords:")
            .with_default(&defaults.count.to_string())
            .prompt()?;

        Ok(CliOptions {
            length: length.trim().parse().unwrap_or(defaults.length),
            count: count.trim().parse().unwrap_or(defaults.count),
            categories: categories.into_iter().collect(),
            excluded,
            json: defaults.json,
            interactive: false,
        })
    })();

    match prompted {
        Ok(options) => options,
        Err(e) => {
            eprintln!("❌ {}", e);
            process::exit(1);
        }
    }
}

/// Main pass forge workflow
fn run_pass_forge(options: &CliOptions) -> Result<()> {
    let config = GeneratorConfig::new(options.length, options.categories.iter().copied())
        .with_excluded(&options.excluded);
    let alphabet = EffectiveAlphabet::derive(&config.categories, &config.excluded);

    let generator = PasswordGenerator::new(config);
    let passwords = generator.generate_batch(options.count)?;

    if options.json {
        print_json(&passwords, options, alphabet.len());
    } else {
        display_passwords(&passwords, generator.config(), alphabet.len());
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passwords: &'a [String],
    length: usize,
    categories: Vec<String>,
    excluded: &'a str,
    alphabet_size: usize,
}

/// Print a machine-readable report
fn print_json(passwords: &[String], options: &CliOptions, alphabet_size: usize) {
    let report = JsonReport {
        passwords,
        length: options.length,
        categories: options.categories.iter().map(|c| c.to_string()).collect(),
        excluded: &options.excluded,
        alphabet_size,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to encode JSON: {}", e);
            process::exit(1);
        }
    }
}

/// Display generated passwords in a clean format
fn display_passwords(passwords: &[String], config: &GeneratorConfig, alphabet_size: usize) {
    println!();
    println!("🔑 Generated Passwords ({}):", passwords.len());
    println!("═══════════════════════════");
    for (index, password) in passwords.iter().enumerate() {
        println!("{:2}. {}", index + 1, password);
    }
    println!();

    let categories: Vec<String> = config.categories.iter().map(|c| c.to_string()).collect();

    println!("📈 Summary:");
    println!("   📏 Length: {}", config.length);
    println!("   🔠 Categories: {}", categories.join(", "));
    if !config.excluded.is_empty() {
        println!("   🚫 Excluded characters: {}", config.excluded.len());
    }
    println!("   🔤 Usable alphabet: {} characters", alphabet_size);
}

/// Print help information
fn print_help() {
    println!("🔑 Pass Forge - rule-based random password generation");
    println!("═════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    pass-forge [LENGTH] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --count <N>            Generate N passwords (default: 1)");
    println!("    -x, --exclude <CHARS>      Characters that must not appear");
    println!("    -c, --categories <LIST>    Comma-separated categories to require");
    println!("                               (digits, uppercase, lowercase, special)");
    println!("    -i, --interactive          Prompt for every option");
    println!("        --json                 Print a JSON report instead of text");
    println!("    -h, --help                 Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    pass-forge                             # One 16-character password");
    println!("    pass-forge 24 --count 5                # Five 24-character passwords");
    println!("    pass-forge 10 -c digits,lowercase      # Digits and lowercase only");
    println!("    pass-forge 12 -x \"0OIl1\"               # Avoid look-alike characters");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PASS_FORGE_LENGTH   Default password length");
    println!("    PASS_FORGE_COUNT    Default number of passwords");
    println!("    PASS_FORGE_EXCLUDE  Default excluded characters");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
