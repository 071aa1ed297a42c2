/// Base URL of the relay backend.
///
/// The Trunk dev server runs on :8080 and the backend on :3000; everywhere else
/// the backend serves the page itself, so requests stay on the current origin.
pub fn get_backend_url() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.to_string();
    }
    let host = web_sys::window().and_then(|w| w.location().host().ok());
    match host.as_deref() {
        Some("localhost:8080") | Some("127.0.0.1:8080") => "http://localhost:3000".to_string(),
        _ => String::new(),
    }
}
