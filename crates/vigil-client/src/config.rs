// Configuration for ConsoleClient

/// Configuration for the console API client
#[derive(Clone, Debug)]
pub struct ConsoleClientConfig {
    /// Base URL of the console API (e.g. "http://127.0.0.1:8000")
    pub base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Additional attempts after a transient failure (default: 3)
    pub max_retries: u32,
    /// Fixed delay between attempts in milliseconds (default: 1000)
    pub retry_delay_ms: u64,
}

impl Default for ConsoleClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}
