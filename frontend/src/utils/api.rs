use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use crate::config;
use serde::Serialize;

/// Builds requests against the relay backend.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

impl RequestWrapper {
    fn post(path: &str) -> Self {
        Self {
            request: Request::post(&endpoint(&config::get_backend_url(), path)),
            path: path.to_string(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    /// Sends once. Any HTTP status counts as a completed request; only
    /// network-level failures come back as `Err`.
    pub async fn send(self) -> Result<gloo_net::http::Response, GlooError> {
        let response = self.request.send().await;
        match &response {
            Ok(resp) => gloo_console::log!(format!("POST {} -> {}", self.path, resp.status())),
            Err(e) => gloo_console::log!(format!("POST {} failed: {}", self.path, e)),
        }
        response
    }
}

impl Api {
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::post(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_keeps_the_path_relative() {
        assert_eq!(endpoint("", "/api/submit-form"), "/api/submit-form");
    }

    #[test]
    fn backend_base_is_joined_without_doubling_slashes() {
        assert_eq!(
            endpoint("http://localhost:3000/", "/api/submit-form"),
            "http://localhost:3000/api/submit-form"
        );
        assert_eq!(
            endpoint("http://localhost:3000", "/api/submit-form"),
            "http://localhost:3000/api/submit-form"
        );
    }
}
