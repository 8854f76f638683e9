use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Terminal client for the chat gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message and print the assistant reply
    Chat {
        /// The message to send
        message: String,

        /// Prior exchange, formatted as "User: ...\nAssistant: ..." lines
        #[arg(long, default_value = "")]
        history: String,
    },
    /// Acknowledge a history reset
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Chat { message, history } => {
            let res = client
                .post(format!("{}/chat", cli.url))
                .form(&[("message", message.as_str()), ("chat_history", history.as_str())])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Reset => {
            let res = client.post(format!("{}/reset", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
