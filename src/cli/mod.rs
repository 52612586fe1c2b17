//! Command-line interface for edu-library.
//!
//! Admin commands (upload, add, update, delete, admin-list) act on behalf
//! of the configured user id. Viewer commands read materials, stats and
//! the merged catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{AdminClient, MaterialFilter, ViewerClient};
use crate::config::{self, resolve_api_base, ResolvedConfig};
use crate::domain::{Material, MaterialType, MaterialUpdate, NewMaterial};
use crate::library::Catalog;

/// edu-library - learning materials library client
#[derive(Parser, Debug)]
#[command(name = "edu-library")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API origin (overrides config and EDU_LIBRARY_SERVER)
    #[arg(long, global = true, conflicts_with = "page_url")]
    pub server: Option<String>,

    /// Hosting page URL; its `server` parameter or origin picks the API
    #[arg(long, global = true)]
    pub page_url: Option<String>,

    /// User id admin writes are attributed to
    #[arg(long, global = true)]
    pub user_id: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a video, audio or PDF file
    Upload {
        /// File to upload
        path: PathBuf,
    },

    /// Create a material record
    Add {
        #[arg(long)]
        subject: String,

        #[arg(long)]
        level: String,

        /// video, pdf or audio
        #[arg(long = "type")]
        material_type: MaterialType,

        #[arg(long)]
        title: String,

        /// e.g. "45 min"
        #[arg(long)]
        duration: Option<String>,

        /// URL returned by `upload`
        #[arg(long)]
        file_url: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Size in bytes
        #[arg(long)]
        file_size: Option<u64>,
    },

    /// List every material (admin view)
    AdminList,

    /// Update fields of a material
    Update {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        file_url: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Re-activate (true) or hide (false)
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a material
    Delete { id: i64 },

    /// List materials with optional filters
    Materials {
        #[arg(short, long)]
        subject: Option<String>,

        #[arg(short, long)]
        level: Option<String>,

        #[arg(short = 't', long = "type")]
        material_type: Option<MaterialType>,

        /// Title substring
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        skip: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show material counts for a subject
    Stats { subject: String },

    /// Show one material (counts as a view)
    Show { id: i64 },

    /// Print the catalog merged with backend materials
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Skip the backend and print the built-in catalog
        #[arg(long)]
        offline: bool,
    },

    /// List subjects known to the backend
    Subjects,

    /// List levels known to the backend
    Levels,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Resolve configuration with command-line overrides applied
    fn resolved_config(&self) -> Result<ResolvedConfig> {
        let mut config = config::config()?.clone();

        if let Some(server) = &self.server {
            config = config.with_base_url(server);
        } else if let Some(page_url) = &self.page_url {
            config = config.with_base_url(&resolve_api_base(page_url)?);
        }
        if let Some(user_id) = self.user_id {
            config = config.with_user_id(user_id);
        }

        Ok(config)
    }

    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = self.resolved_config()?;

        match self.command {
            Commands::Upload { path } => upload(&config, path).await,
            Commands::Add {
                subject,
                level,
                material_type,
                title,
                duration,
                file_url,
                description,
                file_size,
            } => {
                let material = NewMaterial {
                    subject,
                    level,
                    material_type,
                    title,
                    duration,
                    file_url,
                    description,
                    file_size,
                };
                add(&config, material).await
            }
            Commands::AdminList => admin_list(&config).await,
            Commands::Update {
                id,
                title,
                duration,
                file_url,
                description,
                active,
            } => {
                let update = MaterialUpdate {
                    title,
                    duration,
                    file_url,
                    description,
                    is_active: active,
                };
                update_material(&config, id, update).await
            }
            Commands::Delete { id } => delete(&config, id).await,
            Commands::Materials {
                subject,
                level,
                material_type,
                search,
                skip,
                limit,
            } => {
                let filter = MaterialFilter {
                    subject,
                    level,
                    material_type,
                    search,
                    skip,
                    limit,
                };
                list_materials(&config, &filter).await
            }
            Commands::Stats { subject } => show_stats(&config, &subject).await,
            Commands::Show { id } => show_material(&config, id).await,
            Commands::Catalog { json, offline } => show_catalog(&config, json, offline).await,
            Commands::Subjects => {
                let viewer = ViewerClient::from_config(&config)?;
                print_key_names("SUBJECT", &viewer.list_subjects().await);
                Ok(())
            }
            Commands::Levels => {
                let viewer = ViewerClient::from_config(&config)?;
                print_key_names("LEVEL", &viewer.list_levels().await);
                Ok(())
            }
            Commands::Config => show_config(&config),
        }
    }
}

async fn upload(config: &ResolvedConfig, path: PathBuf) -> Result<()> {
    let admin = AdminClient::from_config(config)?;
    let uploaded = admin
        .upload_file(&path)
        .await
        .with_context(|| format!("Failed to upload {}", path.display()))?;

    eprintln!("Uploaded {} ({} bytes, {})", uploaded.filename, uploaded.file_size, uploaded.file_type);
    println!("{}", uploaded.file_url);
    Ok(())
}

async fn add(config: &ResolvedConfig, material: NewMaterial) -> Result<()> {
    let admin = AdminClient::from_config(config)?;
    let created = admin
        .add_material(&material)
        .await
        .context("Failed to add material")?;

    eprintln!("Created material {}", created.id);
    print_material(&created);
    Ok(())
}

async fn admin_list(config: &ResolvedConfig) -> Result<()> {
    let admin = AdminClient::from_config(config)?;
    print_material_table(&admin.get_materials().await);
    Ok(())
}

async fn update_material(config: &ResolvedConfig, id: i64, update: MaterialUpdate) -> Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one of --title, --duration, --file-url, --description, --active");
    }

    let admin = AdminClient::from_config(config)?;
    let updated = admin
        .update_material(id, &update)
        .await
        .with_context(|| format!("Failed to update material {}", id))?;

    print_material(&updated);
    Ok(())
}

async fn delete(config: &ResolvedConfig, id: i64) -> Result<()> {
    let admin = AdminClient::from_config(config)?;
    let ack = admin
        .delete_material(id)
        .await
        .with_context(|| format!("Failed to delete material {}", id))?;

    if ack.message.is_empty() {
        println!("Material {} deleted", id);
    } else {
        println!("{}", ack.message);
    }
    Ok(())
}

async fn list_materials(config: &ResolvedConfig, filter: &MaterialFilter) -> Result<()> {
    let viewer = ViewerClient::from_config(config)?;
    print_material_table(&viewer.fetch_materials(filter).await);
    Ok(())
}

async fn show_stats(config: &ResolvedConfig, subject: &str) -> Result<()> {
    let viewer = ViewerClient::from_config(config)?;
    let stats = viewer.fetch_subject_stats(subject).await;

    println!("Subject: {}", subject);
    println!("  Total: {}", stats.total_materials);
    println!("  Video: {}", stats.video_count);
    println!("  PDF:   {}", stats.pdf_count);
    println!("  Audio: {}", stats.audio_count);
    Ok(())
}

async fn show_material(config: &ResolvedConfig, id: i64) -> Result<()> {
    let viewer = ViewerClient::from_config(config)?;
    match viewer.get_material(id).await {
        Some(material) => {
            print_material(&material);
            Ok(())
        }
        None => anyhow::bail!("Material {} not found", id),
    }
}

async fn show_catalog(config: &ResolvedConfig, json: bool, offline: bool) -> Result<()> {
    let mut catalog = Catalog::builtin();
    if !offline {
        ViewerClient::from_config(config)?
            .merge_library_data(&mut catalog)
            .await;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for subject in &catalog.subjects {
        println!("{} {} [{}]", subject.icon, subject.title, subject.key);
        for level in &subject.levels {
            println!("  {} ({}): {} materials", level.name, level.key, level.materials.len());
            for material in &level.materials {
                let extent = match (&material.duration, material.pages) {
                    (Some(duration), _) => duration.clone(),
                    (None, Some(pages)) => format!("{} pages", pages),
                    (None, None) => String::new(),
                };
                println!("    - [{}] {} {}", material.kind, material.title, extent);
            }
        }
    }

    println!("\nTotal: {} materials", catalog.material_count());
    Ok(())
}

fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("API base:      {}", config.base_url);
    println!("User id:       {}", config.user_id);
    match config.timeout {
        Some(timeout) => println!("Timeout:       {}s", timeout.as_secs()),
        None => println!("Timeout:       none"),
    }
    println!("Tunnel bypass: {}", config.skip_tunnel_warning);
    match &config.config_file {
        Some(path) => println!("Config file:   {}", path.display()),
        None => println!("Config file:   (none, using defaults)"),
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn print_material_table(materials: &[Material]) {
    if materials.is_empty() {
        println!("No materials found");
        return;
    }

    println!("{:<6} {:<18} {:<13} {:<6} {:<40} {:>6}", "ID", "SUBJECT", "LEVEL", "TYPE", "TITLE", "VIEWS");
    println!("{}", "-".repeat(94));

    for m in materials {
        println!(
            "{:<6} {:<18} {:<13} {:<6} {:<40} {:>6}",
            m.id,
            truncate(&m.subject, 18),
            truncate(&m.level, 13),
            m.material_type.to_string(),
            truncate(&m.title, 40),
            m.views_count
        );
    }

    println!("\nTotal: {} materials", materials.len());
}

fn print_material(m: &Material) {
    println!("ID:          {}", m.id);
    println!("Title:       {}", m.title);
    println!("Subject:     {} / {}", m.subject, m.level);
    println!("Type:        {}", m.material_type);
    if let Some(duration) = &m.duration {
        println!("Duration:    {}", duration);
    }
    if let Some(pages) = m.pages {
        println!("Pages:       {}", pages);
    }
    if let Some(url) = &m.file_url {
        println!("File:        {}", url);
    }
    if let Some(description) = &m.description {
        println!("Description: {}", description);
    }
    println!("Views:       {}", m.views_count);
    if !m.is_active {
        println!("Status:      inactive");
    }
}

fn print_key_names(heading: &str, entries: &std::collections::BTreeMap<String, String>) {
    if entries.is_empty() {
        println!("Nothing returned by the server");
        return;
    }

    println!("{:<20} NAME", heading);
    println!("{}", "-".repeat(50));
    for (key, name) in entries {
        println!("{:<20} {}", key, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Algebra", 40), "Algebra");
        assert_eq!(truncate("O'zbekiston tarixi", 10), "O'zbeki...");
        assert_eq!(truncate("Ko'paytirish 📐📐📐", 14), "Ko'paytiris...");
    }

    #[test]
    fn test_parse_materials_command() {
        let cli = Cli::try_parse_from([
            "edu-library",
            "materials",
            "--subject",
            "physics",
            "-t",
            "pdf",
            "--limit",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Materials {
                subject,
                material_type,
                limit,
                level,
                ..
            } => {
                assert_eq!(subject.as_deref(), Some("physics"));
                assert_eq!(material_type, Some(MaterialType::Pdf));
                assert_eq!(limit, Some(5));
                assert!(level.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "edu-library",
            "delete",
            "12",
            "--server",
            "https://abc.ngrok-free.app",
            "--user-id",
            "777",
        ])
        .unwrap();

        assert_eq!(cli.server.as_deref(), Some("https://abc.ngrok-free.app"));
        assert_eq!(cli.user_id, Some(777));
        assert!(matches!(cli.command, Commands::Delete { id: 12 }));
    }

    #[test]
    fn test_server_conflicts_with_page_url() {
        let result = Cli::try_parse_from([
            "edu-library",
            "--server",
            "http://a",
            "--page-url",
            "http://b/?server=http://c",
            "levels",
        ]);
        assert!(result.is_err());
    }
}
