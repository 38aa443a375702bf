//! OpenAI-compatible legacy completions client.

use super::{GenerationError, GenerationResult, GenerationSettings, TextGenerator};
use crate::credential::Credential;
use crate::prompt::RenderedPrompt;
use reqwest::blocking::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};

/// Blocking client for `POST {api_base}/completions`.
#[derive(Debug)]
pub struct OpenAiCompletions {
    settings: GenerationSettings,
    client: Client,
}

impl OpenAiCompletions {
    /// Build a client with the configured timeout.
    pub fn new(settings: GenerationSettings) -> Result<Self, GenerationError> {
        let client = client_builder(&settings)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self { settings, client })
    }

    fn map_send_error(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::TimedOut {
                seconds: self.settings.timeout.as_secs(),
            }
        } else {
            GenerationError::Transport(err.without_url().to_string())
        }
    }
}

fn client_builder(settings: &GenerationSettings) -> ClientBuilder {
    Client::builder().timeout(settings.timeout)
}

/// Completions request body.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Completions response body. Only the generated text is read.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

impl TextGenerator for OpenAiCompletions {
    fn generate(
        &self,
        prompt: &RenderedPrompt,
        credential: &Credential,
    ) -> Result<GenerationResult, GenerationError> {
        let request = CompletionRequest {
            model: &self.settings.model,
            prompt: prompt.as_str(),
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_output_tokens,
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "completion response received");

        let body = response.text().map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(error_response) => error_response.error.message,
                Err(_) => body,
            };
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| GenerationResult::new(choice.text))
            .ok_or(GenerationError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.settings.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;
    use std::time::Duration;

    fn settings(endpoint: String, timeout: Duration) -> GenerationSettings {
        GenerationSettings {
            endpoint,
            model: "gpt-3.5-turbo-instruct".to_string(),
            temperature: 0.7,
            max_output_tokens: Some(1024),
            timeout,
        }
    }

    /// Client that ignores proxy environment so loopback requests stay local.
    fn local_client(settings: GenerationSettings) -> OpenAiCompletions {
        let client = client_builder(&settings).no_proxy().build().unwrap();
        OpenAiCompletions { settings, client }
    }

    fn credential() -> Credential {
        Credential::from_input("test-key".to_string()).unwrap()
    }

    fn prompt() -> RenderedPrompt {
        use crate::prompt::{PromptRequest, PromptTemplate};
        PromptTemplate::luxury_car()
            .render(&PromptRequest {
                content: "A sleek red coupe.".to_string(),
                features: vec![],
                budget: None,
            })
            .unwrap()
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    /// Read one HTTP request (headers plus content-length body).
    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find(&buf, b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .map(|v| v.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    /// Serve one canned response; the handle yields the raw request.
    fn serve_once(status_line: &'static str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (format!("http://{}/v1/completions", addr), handle)
    }

    #[test]
    fn test_success_returns_first_choice_text() {
        let (url, handle) = serve_once(
            "200 OK",
            r#"{"id":"cmpl-1","choices":[{"text":"\n\nCAR DESCRIPTION: fast.","index":0}]}"#,
        );
        let client = local_client(settings(url, Duration::from_secs(5)));

        let result = client.generate(&prompt(), &credential()).unwrap();
        assert_eq!(result.as_str(), "\n\nCAR DESCRIPTION: fast.");

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /v1/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer test-key"));
        assert!(request.contains(r#""model":"gpt-3.5-turbo-instruct""#));
        assert!(request.contains(r#""temperature":0.7"#));
        assert!(request.contains(r#""max_tokens":1024"#));
        assert!(request.contains("A sleek red coupe."));
    }

    #[test]
    fn test_unset_ceiling_is_omitted_from_request() {
        let (url, handle) = serve_once("200 OK", r#"{"choices":[{"text":"ok"}]}"#);
        let mut settings = settings(url, Duration::from_secs(5));
        settings.max_output_tokens = None;
        let client = local_client(settings);

        client.generate(&prompt(), &credential()).unwrap();

        let request = handle.join().unwrap();
        assert!(!request.contains("max_tokens"));
    }

    #[test]
    fn test_api_error_message_is_extracted() {
        let (url, handle) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#,
        );
        let client = local_client(settings(url, Duration::from_secs(5)));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            }
        );
        handle.join().unwrap();
    }

    #[test]
    fn test_api_error_with_plain_body() {
        let (url, handle) = serve_once("503 Service Unavailable", "overloaded");
        let client = local_client(settings(url, Duration::from_secs(5)));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert_eq!(
            err,
            GenerationError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }
        );
        handle.join().unwrap();
    }

    #[test]
    fn test_malformed_body_is_reported() {
        let (url, handle) = serve_once("200 OK", "not json");
        let client = local_client(settings(url, Duration::from_secs(5)));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
        handle.join().unwrap();
    }

    #[test]
    fn test_no_choices_is_empty_response() {
        let (url, handle) = serve_once("200 OK", r#"{"choices":[]}"#);
        let client = local_client(settings(url, Duration::from_secs(5)));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
        handle.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(settings(
            format!("http://{}/v1/completions", addr),
            Duration::from_secs(5),
        ));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
    }

    #[test]
    fn test_slow_service_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let _ = read_request(&mut stream);
                thread::sleep(Duration::from_secs(3));
            }
        });

        let client = local_client(settings(
            format!("http://{}/v1/completions", addr),
            Duration::from_millis(300),
        ));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert!(matches!(err, GenerationError::TimedOut { .. }));
    }

    #[test]
    fn test_error_text_does_not_leak_credential() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(settings(
            format!("http://{}/v1/completions", addr),
            Duration::from_secs(5),
        ));

        let err = client.generate(&prompt(), &credential()).unwrap_err();
        assert!(!err.to_string().contains("test-key"));
    }
}
