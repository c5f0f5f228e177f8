use linkshelf_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Executes core requests with a blocking ureq agent.
///
/// Status codes are never treated as errors here: 4xx/5xx come back as
/// `HttpResponse` values and the core decides what they mean.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = req.method.as_str(), path = %req.path, "sending request");

        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, body) => {
                let mut post = self.agent.post(&req.path);
                for (name, value) in &req.headers {
                    post = post.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => post.send(body.as_bytes()),
                    None => post.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(status, "received response");

        Ok(HttpResponse { status, body })
    }
}
