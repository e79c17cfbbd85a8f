// Rust guideline compliant 2026-10-13

//! Interactive credential acquisition.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use ticketview_core::{Config, CredentialSource, Credentials, Error, Result};

/// Prompts for an email and API token on the given streams.
///
/// Values already present in the configuration are offered as defaults and
/// kept when the user enters an empty line.
pub struct PromptCredentials<R, W> {
    streams: RefCell<(R, W)>,
    default_email: Option<String>,
}

impl<R: BufRead, W: Write> PromptCredentials<R, W> {
    /// Creates a prompting strategy.
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            streams: RefCell::new((input, output)),
            default_email: config.email.clone().filter(|e| !e.trim().is_empty()),
        }
    }

    fn ask(&self, label: &str, default: Option<&str>) -> Result<String> {
        let mut streams = self.streams.borrow_mut();
        let (input, output) = &mut *streams;

        match default {
            Some(default) => write!(output, "{} [{}]: ", label, default)?,
            None => write!(output, "{}: ", label)?,
        }
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let answer = line.trim();

        if answer.is_empty() {
            return default.map(str::to_string).ok_or_else(|| {
                Error::MissingCredentials(format!("no {} entered", label.to_lowercase()))
            });
        }
        Ok(answer.to_string())
    }
}

impl<R: BufRead, W: Write> CredentialSource for PromptCredentials<R, W> {
    fn credentials(&self) -> Result<Credentials> {
        let email = self.ask("Email", self.default_email.as_deref())?;
        let token = self.ask("API token", None)?;
        Credentials::new(&email, &token)
    }
}

/// Prompts for a helpdesk subdomain when no API host is configured.
///
/// # Errors
///
/// Returns an error if the streams fail or the user enters nothing.
pub fn prompt_subdomain<R: BufRead, W: Write>(
    config: &mut Config,
    mut input: R,
    mut output: W,
) -> Result<()> {
    if config.api_base_url().is_ok() {
        return Ok(());
    }

    write!(output, "Helpdesk subdomain: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let subdomain = line.trim();
    if subdomain.is_empty() {
        return Err(Error::InvalidConfig("no subdomain entered".to_string()));
    }

    config.subdomain = Some(subdomain.to_string());
    config.api_base_url().map(|_| ())
}

/// Ensures the configuration names a helpdesk host.
///
/// On an interactive terminal a missing host is prompted for; otherwise the
/// configuration error is returned unchanged.
///
/// # Errors
///
/// Returns an error if no host is configured and none can be prompted for.
pub fn resolve_base_url<R: BufRead, W: Write>(
    config: &mut Config,
    interactive: bool,
    input: R,
    output: W,
) -> Result<()> {
    if !interactive {
        return config.api_base_url().map(|_| ());
    }
    prompt_subdomain(config, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_email_and_token() {
        let config = Config::default();
        let prompt = PromptCredentials::new(
            Cursor::new("agent@acme.test\nsecret\n"),
            Vec::new(),
            &config,
        );
        let creds = prompt.credentials().unwrap();
        assert_eq!(creds.email(), "agent@acme.test");
        assert_eq!(creds.token(), "secret");
    }

    #[test]
    fn test_prompt_keeps_configured_email_on_empty_line() {
        let config = Config {
            email: Some("agent@acme.test".to_string()),
            ..Config::default()
        };
        let prompt = PromptCredentials::new(Cursor::new("\nsecret\n"), Vec::new(), &config);
        assert_eq!(prompt.credentials().unwrap().email(), "agent@acme.test");
    }

    #[test]
    fn test_prompt_without_token_fails() {
        let config = Config::default();
        let prompt = PromptCredentials::new(Cursor::new("agent@acme.test\n"), Vec::new(), &config);
        assert!(matches!(
            prompt.credentials(),
            Err(Error::MissingCredentials(_))
        ));
    }

    #[test]
    fn test_prompt_subdomain_sets_config() {
        let mut config = Config::default();
        let mut output = Vec::new();
        prompt_subdomain(&mut config, Cursor::new("acme\n"), &mut output).unwrap();
        assert_eq!(config.subdomain.as_deref(), Some("acme"));
        assert!(String::from_utf8(output).unwrap().contains("subdomain"));
    }

    #[test]
    fn test_prompt_subdomain_skipped_when_configured() {
        let mut config = Config {
            base_url: Some("http://127.0.0.1:9".to_string()),
            ..Config::default()
        };
        let mut output = Vec::new();
        prompt_subdomain(&mut config, Cursor::new(""), &mut output).unwrap();
        assert!(output.is_empty());
        assert!(config.subdomain.is_none());
    }

    #[test]
    fn test_resolve_base_url_prompts_when_interactive() {
        let mut config = Config::default();
        let mut output = Vec::new();
        resolve_base_url(&mut config, true, Cursor::new("acme\n"), &mut output).unwrap();
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "https://acme.zendesk.com/"
        );
    }

    #[test]
    fn test_resolve_base_url_fails_without_terminal() {
        let mut config = Config::default();
        let mut output = Vec::new();
        let result = resolve_base_url(&mut config, false, Cursor::new("acme\n"), &mut output);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        assert!(output.is_empty());
    }
}
