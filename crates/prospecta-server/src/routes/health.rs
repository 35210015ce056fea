pub const LIVENESS_MESSAGE: &str = "Market Research Backend is Running!";

pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
