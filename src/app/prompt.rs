//! Credential prompts on stderr.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use luster_core::Credentials;

/// Builds credentials from the given values, prompting for whatever is missing.
///
/// The password prompt hides input when stdin is a terminal; piped stdin is
/// read line by line.
pub(crate) fn resolve_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<Credentials> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();
    let mut stderr = io::stderr();

    let email = match email {
        Some(email) => email,
        None => prompt_line(&mut input, &mut stderr, "Email: ")?,
    };
    let password = match password {
        Some(password) => password,
        None if interactive => {
            rpassword::prompt_password("Password: ").context("Failed to read password")?
        }
        None => prompt_line(&mut input, &mut stderr, "Password: ")?,
    };

    credentials_from(email, password)
}

fn credentials_from(email: String, password: String) -> Result<Credentials> {
    let email = email.trim().to_string();
    if email.is_empty() {
        bail!("No email provided. Pass -u EMAIL or enter it at the prompt");
    }
    if password.is_empty() {
        bail!("No password provided. Pass -p PASSWORD or enter it at the prompt");
    }
    Ok(Credentials::new(email, password))
}

fn prompt_line(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {}", label.trim_end_matches(": ")))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompt_line_writes_label_and_strips_newline() {
        let mut input = Cursor::new("me@example.com\r\nrest\n");
        let mut output = Vec::new();

        let value = prompt_line(&mut input, &mut output, "Email: ").unwrap();

        assert_eq!(value, "me@example.com");
        assert_eq!(String::from_utf8(output).unwrap(), "Email: ");
    }

    #[test]
    fn test_prompt_line_eof_yields_empty() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut output, "Email: ").unwrap(), "");
    }

    #[test]
    fn test_credentials_from_rejects_empty_values() {
        let err = credentials_from("  ".to_string(), "pw".to_string()).unwrap_err();
        assert!(err.to_string().contains("No email"));

        let err = credentials_from("me@example.com".to_string(), String::new()).unwrap_err();
        assert!(err.to_string().contains("No password"));
    }

    #[test]
    fn test_credentials_from_keeps_password_verbatim() {
        let credentials =
            credentials_from(" me@example.com ".to_string(), " spaced pw ".to_string()).unwrap();
        assert_eq!(credentials.email, "me@example.com");
        assert_eq!(credentials.password(), " spaced pw ");
    }
}
