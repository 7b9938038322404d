use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use country_translator::{Config, Query};

#[derive(Parser, Debug)]
#[command(
    name = "country-translator",
    version,
    about = "Translate country names between languages using ISO codes"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Country code table (overrides settings [data].countries)
    #[arg(long = "countries", global = true)]
    countries: Option<String>,

    /// Language code table (overrides settings [data].languages)
    #[arg(long = "languages", global = true)]
    languages: Option<String>,

    /// Translations JSON document (overrides settings [data].translations)
    #[arg(long = "translations", global = true)]
    translations: Option<String>,

    /// Read extra settings from a local TOML file
    #[arg(short = 'r', long = "read-settings", global = true)]
    read_settings: Option<String>,

    /// Enable verbose logging
    #[arg(long = "verbose", global = true)]
    verbose: bool,

    /// Interactive mode (default when no command is given)
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries that have at least one translation
    Countries,
    /// List the languages a country name is translated into
    Languages {
        #[arg(value_name = "COUNTRY")]
        country: String,
    },
    /// Print the name of a country in a language
    Translate {
        #[arg(value_name = "COUNTRY")]
        country: String,
        #[arg(value_name = "LANGUAGE")]
        language: String,
    },
    /// Print the code(s) for a country or language name
    Code {
        #[arg(value_name = "NAME")]
        name: String,
        /// Look the name up in the language table
        #[arg(short = 'l', long = "language")]
        language: bool,
    },
    /// Print the name for an alpha-3 country code or a language code
    Name {
        #[arg(value_name = "CODE")]
        code: String,
        /// Look the code up in the language table
        #[arg(short = 'l', long = "language")]
        language: bool,
    },
    /// Check that every code used by the translations resolves to a name
    Check,
}

impl From<Command> for Query {
    fn from(command: Command) -> Self {
        match command {
            Command::Countries => Query::Countries,
            Command::Languages { country } => Query::Languages { country },
            Command::Translate { country, language } => Query::Translate { country, language },
            Command::Code { name, language } => {
                if language {
                    Query::LanguageCode { name }
                } else {
                    Query::CountryCode { name }
                }
            }
            Command::Name { code, language } => {
                if language {
                    Query::LanguageName { code }
                } else {
                    Query::CountryName { code }
                }
            }
            Command::Check => Query::Check,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    country_translator::logging::init(cli.verbose)?;

    let config = Config {
        settings_path: cli.read_settings,
        countries_path: cli.countries,
        languages_path: cli.languages,
        translations_path: cli.translations,
    };

    match cli.command {
        Some(command) if !cli.interactive => {
            let output = country_translator::run(&config, command.into())?;
            println!("{}", output);
        }
        _ => {
            let (settings, translator) = country_translator::load(&config)?;
            let stdin = io::stdin();
            country_translator::interactive::run_session(
                &translator,
                &settings,
                stdin.lock(),
                io::stdout(),
            )?;
        }
    }
    Ok(())
}
