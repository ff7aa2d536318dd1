// ABOUTME: Wellness tips seeding utility
// ABOUTME: Creates the default tips catalog in the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default tips seeder.
//!
//! Usage:
//! ```bash
//! # Seed tips (uses DATABASE_URL from environment)
//! cargo run --bin seed-tips
//!
//! # Override database URL
//! cargo run --bin seed-tips -- --database-url sqlite:./data/wellness.db
//!
//! # Force re-seed (skip existing check)
//! cargo run --bin seed-tips -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use wellness_data::config::{DatabaseConfig, DatabaseUrl};
use wellness_data::database::Database;
use wellness_data::models::NewTip;

#[derive(Parser)]
#[command(
    name = "seed-tips",
    about = "Wellness Data Tips Seeder",
    long_about = "Create the default wellness tips catalog"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Force re-seed even if tips already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Default tip definition
struct DefaultTip {
    title: &'static str,
    content: &'static str,
    category: &'static str,
}

const DEFAULT_TIPS: &[DefaultTip] = &[
    DefaultTip {
        title: "Start the day with water",
        content: "Drink a full glass of water within an hour of waking up to replace fluids lost overnight.",
        category: "hydration",
    },
    DefaultTip {
        title: "Keep a bottle in sight",
        content: "A visible water bottle on your desk is the simplest reminder to sip throughout the day.",
        category: "hydration",
    },
    DefaultTip {
        title: "Fixed wake-up time",
        content: "Getting up at the same time every day, weekends included, stabilizes your sleep rhythm.",
        category: "sleep",
    },
    DefaultTip {
        title: "Screens off before bed",
        content: "Put phones and laptops away 30 minutes before sleeping to make falling asleep easier.",
        category: "sleep",
    },
    DefaultTip {
        title: "Walk after meals",
        content: "A 10 minute walk after lunch or dinner adds steps and helps with digestion.",
        category: "activity",
    },
    DefaultTip {
        title: "Take the stairs",
        content: "Short stair climbs spread across the day add up to meaningful activity.",
        category: "activity",
    },
    DefaultTip {
        title: "Half a plate of vegetables",
        content: "Filling half your plate with vegetables is an easy rule for balanced meals.",
        category: "nutrition",
    },
    DefaultTip {
        title: "One minute of breathing",
        content: "Slow breathing for one minute, four seconds in and six seconds out, lowers stress quickly.",
        category: "mindfulness",
    },
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Wellness Data Tips Seeder ===");

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.url = DatabaseUrl::parse_url(url)?;
    }
    config.auto_migrate = true;

    info!("Connecting to database: {}", config.url);
    let db = Database::from_config(&config).await?;

    let existing = db.count_tips().await?;
    if existing > 0 && !args.force {
        info!("Tips already seeded ({existing} tips found). Use --force to re-seed.");
        return Ok(());
    }

    info!("Seeding {} tips...", DEFAULT_TIPS.len());
    for tip in DEFAULT_TIPS {
        let created = db
            .create_tip(&NewTip {
                title: tip.title.to_owned(),
                content: tip.content.to_owned(),
                category: tip.category.to_owned(),
                date: None,
            })
            .await?;
        info!("  [{}] {}", created.category, created.title);
    }

    info!("=== Seeding Complete ===");
    info!("Catalog now holds {} tips", db.count_tips().await?);

    db.close().await;
    Ok(())
}
