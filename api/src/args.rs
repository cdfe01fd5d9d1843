use clap::Parser;
use heal_core::domain::common::{
    DEFAULT_OPENAI_BASE_URL, DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL, GatewayConfig, HealConfig,
    LLMConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "heal-api", version, about = "Heal nutrition API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix added to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins, `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_BASE_URL)]
    pub base_url: Url,

    #[arg(long = "vision-model", env = "OPENAI_VISION_MODEL", default_value = DEFAULT_VISION_MODEL)]
    pub vision_model: String,

    #[arg(long = "text-model", env = "OPENAI_TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directives.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for HealConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url.to_string(),
            },
            gateway: GatewayConfig::with_models(&args.llm.vision_model, &args.llm.text_model),
        }
    }
}
