use anyhow::Context;
use cep_lookup::utils::logger::{self, LogFormat};
use cep_lookup::utils::validation::Validate;
use cep_lookup::{CepClient, CliConfig};
use clap::Parser;
use std::io::{self, BufRead, Write};

fn prompt_for_cep() -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Digite o CEP (formato: 00000000 ou 00000-000): ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read CEP from stdin")?;
    Ok(line)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, format);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let raw = match &config.cep {
        Some(cep) => cep.clone(),
        None => prompt_for_cep()?,
    };

    let client = CepClient::from_config(&config)?;

    match client.lookup(&raw).await {
        Ok(record) => {
            println!("\n=== Dados do CEP ===");
            println!("{}", record.to_pretty_json()?);
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
