//! Push Render CLI
//!
//! 判断推送消息是显示为系统通知还是转发给应用，
//! 每次界面调用以 JSON 行的形式输出到 stdout

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use push_render::{
    DataKeyReceiver, EngineConfig, IncomingMessage, JsonLinesSurface, MessagingService, Payload,
    ProcessState,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pushr")]
#[command(about = "Push Render - decide how push messages are presented")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/push-render/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one push message
    Process {
        /// Message JSON file, or `-` for stdin
        message: String,
        /// App is in the foreground
        #[arg(long)]
        foreground: bool,
        /// A consumer is registered for raw message data
        #[arg(long)]
        consumer: bool,
        /// Override the configured API level
        #[arg(long)]
        api_level: Option<u32>,
        /// Claim messages whose data contains this key (repeatable)
        #[arg(long = "claim-key")]
        claim_keys: Vec<String>,
    },
    /// Forward a refreshed push token to the application
    Token {
        token: String,
    },
    /// Replay a tapped notification payload
    Open {
        /// Payload JSON file, or `-` for stdin
        payload: String,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("push_render=info,pushr=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();
    let mut config = EngineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Process {
            message,
            foreground,
            consumer,
            api_level,
            claim_keys,
        } => {
            if let Some(level) = api_level {
                config.api_level = level;
            }
            let service = build_service(&config, &claim_keys);

            let message: IncomingMessage = serde_json::from_str(&read_input(&message)?)
                .context("Failed to parse message JSON")?;
            let state = ProcessState {
                is_app_in_foreground: foreground,
                has_registered_notification_consumer: consumer,
            };
            debug!(api_level = config.api_level, state = ?state, "Processing message");

            let outcome = service.on_message_received(&message, &state);
            info!(outcome = ?outcome, "Message processed");
            println!(
                "{}",
                serde_json::json!({"event": "outcome", "result": outcome})
            );
        }
        Commands::Token { token } => {
            build_service(&config, &[]).on_new_token(&token);
        }
        Commands::Open { payload } => {
            let payload: Payload = serde_json::from_str(&read_input(&payload)?)
                .context("Failed to parse payload JSON")?;
            build_service(&config, &[]).on_notification_opened(payload);
        }
    }

    Ok(())
}

fn build_service(config: &EngineConfig, claim_keys: &[String]) -> MessagingService {
    let surface = Arc::new(JsonLinesSurface::stdout());
    let mut service = MessagingService::from_config(config, surface.clone(), surface);
    for key in claim_keys {
        service
            .receivers_mut()
            .register(Arc::new(DataKeyReceiver::new(format!("claim:{}", key), key)));
    }
    service
}

/// 读取文件；`-` 表示 stdin
fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
}
