//! Gravatar CLI - Bridge interface for scripts
//!
//! Commands: url, img, profile, hash
//! Outputs JSON to stdout
//! Returns non-zero on error

use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use gravatar_helper::{
    avatar_url, email_hash, img_tag, profile_url, AvatarOptions, GravatarConfig, GravatarError,
    HashAlgorithm, ProfileFormat, ProfileOptions,
};

#[derive(Parser)]
#[command(name = "gravatar-cli")]
#[command(about = "Gravatar CLI - avatar and profile URL builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON file with default options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat the request as arriving over https
    #[arg(short, long, global = true)]
    secure: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an avatar URL
    Url {
        #[arg(short, long)]
        email: String,

        /// JSON payload (AvatarOptions)
        #[arg(short, long)]
        options: Option<String>,
    },

    /// Build an avatar img tag
    Img {
        #[arg(short, long)]
        email: String,

        /// JSON payload (AvatarOptions)
        #[arg(short, long)]
        options: Option<String>,

        /// Extra attribute as name=value, repeatable
        #[arg(short, long = "attr", value_parser = parse_pair)]
        attrs: Vec<(String, String)>,
    },

    /// Build a profile URL
    Profile {
        #[arg(short, long)]
        email: String,

        /// json, xml, vcf, qr or php
        #[arg(short, long)]
        format: Option<ProfileFormat>,

        /// Extra query parameter as name=value, repeatable
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
    },

    /// Print the hash of an email address
    Hash {
        #[arg(short, long)]
        email: String,

        #[arg(long)]
        sha256: bool,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got {}", s))
}

fn load_options(
    payload: Option<&str>,
    config: Option<&GravatarConfig>,
) -> Result<AvatarOptions, GravatarError> {
    let options = match payload {
        Some(json) => serde_json::from_str(json)?,
        None => AvatarOptions::default(),
    };
    Ok(match config {
        Some(config) => config.apply(options),
        None => options,
    })
}

fn run(cli: Cli) -> Result<serde_json::Value, GravatarError> {
    let config = cli.config.as_deref().map(GravatarConfig::load).transpose()?;
    if let Some(path) = &cli.config {
        info!("loaded defaults from {}", path.display());
    }
    let secure = cli.secure;

    match cli.command {
        Commands::Url { email, options } => {
            let options = load_options(options.as_deref(), config.as_ref())?;
            let url = avatar_url(&email, &options, &secure)?;
            Ok(serde_json::json!({ "url": url }))
        }

        Commands::Img { email, options, attrs } => {
            let options = load_options(options.as_deref(), config.as_ref())?;
            let img = img_tag(&email, &options, attrs.as_slice(), &secure)?;
            Ok(serde_json::json!({ "url": img.src(), "html": img.as_html() }))
        }

        Commands::Profile { email, format, params } => {
            let options = ProfileOptions {
                format,
                parameters: params,
                ..Default::default()
            };
            let options = match &config {
                Some(config) => config.apply_profile(options),
                None => options,
            };
            let url = profile_url(&email, &options, &secure)?;
            Ok(serde_json::json!({ "url": url }))
        }

        Commands::Hash { email, sha256 } => {
            gravatar_helper::validation::validate_email(&email)?;
            let algorithm = if sha256 { HashAlgorithm::Sha256 } else { HashAlgorithm::Md5 };
            Ok(serde_json::json!({ "hash": email_hash(&email, algorithm) }))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
            ExitCode::SUCCESS
        }
        Err(e) => {
            let output = serde_json::json!({ "error": e.to_string() });
            println!("{}", serde_json::to_string(&output).unwrap());
            ExitCode::FAILURE
        }
    }
}
