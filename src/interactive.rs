//! Prompt loop: pick a country, pick a language, print the translation.
//!
//! The quit word ends the session at any prompt, as does end of input.
//! Names that do not resolve are reported and the same prompt is shown again.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::Error;
use crate::settings::Settings;
use crate::translator::Translator;
use crate::format_names;

enum Reply {
    Quit,
    Line(String),
}

struct Session<'a, R, W> {
    translator: &'a Translator,
    settings: &'a Settings,
    input: R,
    output: W,
}

pub fn run_session<R, W>(
    translator: &Translator,
    settings: &Settings,
    input: R,
    output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        translator,
        settings,
        input,
        output,
    };
    session.run()
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            let Some((country, country_code)) = self.select_country()? else {
                break;
            };
            let Some((language, language_code)) = self.select_language(&country, &country_code)?
            else {
                break;
            };

            let translation = self
                .translator
                .translate(&country_code, &language_code)
                .unwrap_or("no translation");
            writeln!(self.output, "{} in {} is {}", country, language, translation)?;
            writeln!(
                self.output,
                "Press enter to continue or {} to exit.",
                self.settings.quit_word
            )?;
            if let Reply::Quit = self.read_reply()? {
                break;
            }
        }
        Ok(())
    }

    fn select_country(&mut self) -> Result<Option<(String, String)>> {
        loop {
            let names = self.translator.available_country_names()?;
            writeln!(self.output, "{}", format_names(names, self.settings.sort_names))?;
            writeln!(self.output, "select a country from above:")?;

            let Reply::Line(name) = self.read_reply()? else {
                return Ok(None);
            };
            let code = match self.translator.resolve_country_code(&name) {
                Ok(code) => code.to_string(),
                Err(err @ Error::NotFound { .. }) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if self.translator.translations().languages_for(&code).is_empty() {
                writeln!(self.output, "no languages available for {}", name)?;
                continue;
            }
            return Ok(Some((name, code)));
        }
    }

    fn select_language(
        &mut self,
        country: &str,
        country_code: &str,
    ) -> Result<Option<(String, String)>> {
        loop {
            let names = self.translator.available_language_names(country_code)?;
            writeln!(self.output, "{}", format_names(names, self.settings.sort_names))?;
            writeln!(self.output, "select a language for {} from above:", country)?;

            let Reply::Line(name) = self.read_reply()? else {
                return Ok(None);
            };
            match self.translator.resolve_language_code(&name) {
                Ok(code) => return Ok(Some((name, code.to_string()))),
                Err(err @ Error::NotFound { .. }) => {
                    writeln!(self.output, "{}", err)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn read_reply(&mut self) -> Result<Reply> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Reply::Quit);
        }
        let line = line.trim();
        if line == self.settings.quit_word {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Line(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_translator;
    use std::io::Cursor;

    fn session_output(script: &str, settings: &Settings) -> String {
        let translator = load_translator(settings).expect("bundled translator");
        let mut output = Vec::new();
        run_session(&translator, settings, Cursor::new(script), &mut output).expect("session");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn translates_selected_pair() {
        let output = session_output("France\nGerman\nquit\n", &Settings::default());
        assert!(output.contains("select a country from above:"));
        assert!(output.contains("select a language for France from above:"));
        assert!(output.contains("France in German is Frankreich"));
        assert_eq!(output.matches("select a country from above:").count(), 1);
    }

    #[test]
    fn enter_starts_another_round() {
        let output = session_output(
            "France\nGerman\n\nJapan\nKorean\nquit\n",
            &Settings::default(),
        );
        assert!(output.contains("France in German is Frankreich"));
        assert!(output.contains("Japan in Korean is 일본"));
    }

    #[test]
    fn unknown_names_prompt_again() {
        let output = session_output(
            "Atlantis\nfrance\nFrance\nKlingon\nSpanish\n",
            &Settings::default(),
        );
        assert!(output.contains("country name not found: 'Atlantis'"));
        assert!(output.contains("country name not found: 'france'"));
        assert!(output.contains("language name not found: 'Klingon'"));
        assert!(output.contains("France in Spanish is Francia"));
    }

    #[test]
    fn missing_translation_is_reported() {
        let output = session_output("Kenya\nJapanese\nquit\n", &Settings::default());
        assert!(output.contains("Kenya in Japanese is no translation"));
    }

    #[test]
    fn country_without_languages_is_refused() {
        let output = session_output("Andorra\nquit\n", &Settings::default());
        assert!(output.contains("no languages available for Andorra"));
        assert!(!output.contains(" is "));
    }

    #[test]
    fn custom_quit_word_ends_language_prompt() {
        let settings = Settings {
            quit_word: "exit".to_string(),
            ..Settings::default()
        };
        let output = session_output("Canada\nexit\nFrench\n", &settings);
        assert!(output.contains("select a language for Canada from above:"));
        assert!(!output.contains("Canada in"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let output = session_output("", &Settings::default());
        assert!(output.ends_with("select a country from above:\n"));
    }

    #[test]
    fn listing_is_sorted_by_default() {
        let output = session_output("quit\n", &Settings::default());
        assert!(output.starts_with("Brazil\nCanada\nChina\n"));
    }
}
