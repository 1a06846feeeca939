use crate::model::ConfigError;
use clap::Parser;
use std::path::PathBuf;

const URL_VARS: [&str; 2] = ["VITE_SUPABASE_URL", "SUPABASE_URL"];
// Checked in order: server-side service keys first, public anon key last.
const KEY_VARS: [&str; 3] = [
    "SUPABASE_SERVICE_ROLE_KEY",
    "SUPABASE_SERVICE_KEY",
    "VITE_SUPABASE_ANON_KEY",
];

/// Seed general-education courses into the Supabase course table.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Course listing CSV with course, title and fall_2023_attribute columns
    #[arg(long, default_value = "gen_ed_courses.csv")]
    pub csv: PathBuf,

    /// Target table
    #[arg(long, default_value = "courses")]
    pub table: String,
}

#[derive(Debug)]
pub struct AppConfig {
    pub supabase_url: String,
    pub api_key: String,
    pub csv_path: PathBuf,
    pub table: String,
}

/// Resolves settings from the process environment.
pub fn load_config(cli: Cli) -> Result<AppConfig, ConfigError> {
    resolve_config(cli, |name| std::env::var(name).ok())
}

fn resolve_config<F>(cli: Cli, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let first_set = |names: &[&str]| {
        names
            .iter()
            .filter_map(|&name| lookup(name))
            .find(|value| !value.trim().is_empty())
    };

    let (Some(supabase_url), Some(api_key)) =
        (first_set(&URL_VARS[..]), first_set(&KEY_VARS[..]))
    else {
        return Err(ConfigError::Missing(
            "Need VITE_SUPABASE_URL and either SUPABASE_SERVICE_ROLE_KEY (preferred) \
             or VITE_SUPABASE_ANON_KEY."
                .to_string(),
        ));
    };

    Ok(AppConfig {
        supabase_url,
        api_key,
        csv_path: cli.csv,
        table: cli.table,
    })
}
