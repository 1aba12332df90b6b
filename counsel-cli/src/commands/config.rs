//! Config command - show the effective configuration

use clap::Args;
use counsel_core::{Config, Secrets};

/// Show current configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Create a template secrets file if none exists
    #[arg(long)]
    pub init_secrets: bool,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if self.init_secrets {
            let path = Secrets::create_template()?;
            println!("Created secrets template at {}", path.display());
            println!();
        }

        let secrets = Secrets::load()?;
        let set = |value: Option<String>| if value.is_some() { "set" } else { "unset" };

        println!("Counsel Configuration");
        println!("=====================");
        println!();
        println!("Model Settings:");
        println!("  base_url: {}", config.model.base_url);
        println!("  model: {}", config.model.model);
        println!("  temperature: {}", config.model.temperature);
        println!("  timeout: {:?}", config.model.timeout);
        println!();
        println!("Notifier Settings:");
        println!("  base_url: {}", config.notifier.base_url);
        println!("  api_version: {}", config.notifier.api_version);
        println!(
            "  phone_number_id: {}",
            config.notifier.phone_number_id.as_deref().unwrap_or("(unset)")
        );
        println!(
            "  recipient: {}",
            config.notifier.recipient.as_deref().unwrap_or("(unset)")
        );
        println!(
            "  template: {} ({})",
            config.notifier.template_name, config.notifier.language_code
        );
        println!("  enabled: {}", config.notifier.is_enabled());
        println!();
        println!("Server Settings:");
        println!("  addr: {}", config.server.addr);
        println!("  max_upload_bytes: {}", config.server.max_upload_bytes);
        println!();
        println!("Secrets:");
        println!("  MISTRAL_API_KEY: {}", set(secrets.model_api_key()));
        println!("  WHATSAPP_ACCESS_TOKEN: {}", set(secrets.whatsapp_token()));
        println!();

        for (label, path) in [
            ("Config file", Config::default_config_path()),
            ("Secrets file", Secrets::default_secrets_path()),
        ] {
            if let Some(path) = path {
                println!("{}: {}", label, path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }

        Ok(())
    }
}
