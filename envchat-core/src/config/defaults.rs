pub const DEFAULT_RECENT_LIMIT: usize = envchat_session::DEFAULT_RECENT_LIMIT;
pub const DEFAULT_EXPORT_DIRECTORY: &str = ".";
pub const DEFAULT_UPSTREAM_ENDPOINT: &str = "https://api.openai.com";
pub const DEFAULT_UPSTREAM_API_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_UPSTREAM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_UPSTREAM_API_KEY: &str = "${OPENAI_API_KEY}";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an AI expert in Nuclear Energy, Green Environment, and Waste Management.";

pub const DEFAULT_QUICK_QUESTIONS: [&str; 6] = [
    "What are the benefits of nuclear energy?",
    "How does nuclear waste get managed?",
    "Compare nuclear vs renewable energy",
    "What is carbon footprint reduction?",
    "Explain nuclear safety measures",
    "Best practices for environmental sustainability",
];
