//! Decision providers that talk to the outside world.

use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::process::Command;
use tracing::{debug, warn};

use lad_core::provider::CompletionSession;
use lad_core::{Decision, DecisionProvider};

/// Environment variable carrying the full completion endpoint.
pub const ENDPOINT_ENV: &str = "LAD_ENDPOINT";

/// Asks a completion service for the AI's move through a shell command.
///
/// The command receives the request JSON on stdin and the endpoint in
/// `LAD_ENDPOINT`, and must print the response body on stdout. Any bearer
/// token is expected in the inherited `LAD_API_KEY`.
pub struct CommandProvider {
    command: String,
    base_url: String,
    session: CompletionSession,
}

impl CommandProvider {
    pub fn new(command: impl Into<String>, base_url: impl Into<String>, app_id: &str) -> Self {
        Self {
            command: command.into(),
            base_url: base_url.into(),
            session: CompletionSession::new(app_id),
        }
    }

    async fn call(&self, prompt: &str) -> Result<String, String> {
        let request = serde_json::to_string(&self.session.request(prompt))
            .map_err(|e| format!("cannot encode request: {e}"))?;

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env(ENDPOINT_ENV, self.session.endpoint(&self.base_url))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("cannot start AI command: {e}"))?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(request.as_bytes()).await {
                Ok(()) => {}
                // The command may answer without reading its input.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("AI command closed its input early");
                }
                Err(e) => return Err(format!("cannot send request: {e}")),
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| format!("AI command failed: {e}"))?;
        if !output.status.success() {
            return Err(format!("AI command exited with {}", output.status));
        }
        String::from_utf8(output.stdout).map_err(|e| format!("response is not UTF-8: {e}"))
    }
}

#[async_trait]
impl DecisionProvider for CommandProvider {
    async fn decide(&mut self, prompt: &str) -> Option<Decision> {
        match self.call(prompt).await {
            Ok(body) => self.session.absorb(&body),
            Err(error) => {
                warn!(%error, "AI command did not produce a response");
                None
            }
        }
    }
}

/// Reads the human's moves from standard input, one per line.
pub struct StdinProvider {
    lines: Lines<BufReader<Stdin>>,
    closed: bool,
}

impl StdinProvider {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            closed: false,
        }
    }

    /// Whether stdin has reached end of file.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Default for StdinProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionProvider for StdinProvider {
    async fn decide(&mut self, _prompt: &str) -> Option<Decision> {
        if self.closed {
            return None;
        }
        match self.lines.next_line().await {
            Ok(Some(line)) => Some(Decision::new(line.trim())),
            Ok(None) => {
                self.closed = true;
                None
            }
            Err(error) => {
                warn!(%error, "cannot read from stdin");
                self.closed = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn command_response_becomes_a_decision() {
        let body = r#"{"output":{"session_id":"s-1","text":"{\"action\": \"b\", \"message\": \"after you\"}"}}"#;
        let mut provider = CommandProvider::new(
            format!("cat > /dev/null; printf '%s' '{body}'"),
            "http://localhost",
            "role-oracle",
        );
        let decision = provider.decide("status").await.unwrap();
        assert_eq!(decision.action, "b");
        assert_eq!(decision.commentary.as_deref(), Some("after you"));
        assert_eq!(provider.session.session_id(), Some("s-1"));
    }

    #[tokio::test]
    async fn command_sees_request_and_endpoint() {
        // Echo the endpoint back as the action's message.
        let mut provider = CommandProvider::new(
            r#"grep -q '"prompt":"status"' && printf '%s%s%s' '{"output":{"text":"{\"action\":\"a\",\"message\":\"' "$LAD_ENDPOINT" '\"}"}}'"#,
            "http://localhost",
            "role-oracle",
        );
        let decision = provider.decide("status").await.unwrap();
        assert_eq!(decision.action, "a");
        assert_eq!(
            decision.commentary.as_deref(),
            Some("http://localhost/api/v1/apps/role-oracle/completion")
        );
    }

    #[tokio::test]
    async fn failing_command_yields_nothing() {
        let mut provider = CommandProvider::new("exit 3", "http://localhost", "role-oracle");
        assert_eq!(provider.decide("status").await, None);
    }
}
