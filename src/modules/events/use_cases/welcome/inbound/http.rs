pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

pub async fn handle() -> &'static str {
    WELCOME_MESSAGE
}
