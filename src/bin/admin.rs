//! CLI administration tool for the gatelink core.
//!
//! Drives the library in-process: lists and creates gated links through the
//! guided workflow, toggles status, records demo traffic, inspects forms and
//! submissions, and prints the analytics overview.
//!
//! # Usage
//!
//! ```bash
//! # List seeded links
//! cargo run --bin admin -- links list
//!
//! # Create a link through the three-step workflow
//! cargo run --bin admin -- links create --url https://example.com/guide --form 1
//!
//! # Flip a link between active and paused
//! cargo run --bin admin -- links toggle 3
//!
//! # Delete with confirmation prompt
//! cargo run --bin admin -- links delete 3
//!
//! # Analytics overview
//! cargo run --bin admin -- analytics --range 30d --link all
//! ```
//!
//! Stores are seeded from the embedded fixtures at startup and live only for
//! the lifetime of the process; there is no persistence.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use gatelink::config::Config;
use gatelink::domain::entities::LinkStatus;
use gatelink::domain::repositories::{LinkScope, TimeRange};
use gatelink::prelude::{WorkflowAdvance, WorkflowStep};
use gatelink::state::AppContext;

/// CLI tool for managing gated links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage gated links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Inspect lead-capture forms
    Forms {
        #[command(subcommand)]
        action: FormsAction,
    },

    /// Inspect form submissions
    Submissions {
        /// Restrict to one link id
        #[arg(short, long)]
        link: Option<i64>,
    },

    /// Show the analytics overview
    Analytics {
        /// Time range: 7d, 30d, or 90d
        #[arg(short, long, default_value = "7d")]
        range: String,

        /// Link filter: "all" or a link id
        #[arg(short, long, default_value = "all")]
        link: String,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List all gated links
    List,

    /// Create a gated link through the guided workflow
    Create {
        /// Destination URL to gate
        #[arg(short, long)]
        url: String,

        /// Form id to attach (defaults to the newest form)
        #[arg(short, long)]
        form: Option<i64>,

        /// Landing page headline
        #[arg(long)]
        headline: Option<String>,
    },

    /// Flip a link between active and paused
    Toggle {
        /// Link id
        id: i64,
    },

    /// Record one demo click against a link
    Click {
        /// Link id
        id: i64,
    },

    /// Delete a link
    Delete {
        /// Link id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Form inspection subcommands.
#[derive(Subcommand)]
enum FormsAction {
    /// List all forms
    List,

    /// Show one form with its field definitions
    Show {
        /// Form id
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    let context = AppContext::seeded(&config).context("Failed to seed stores")?;

    match cli.command {
        Commands::Links { action } => handle_links_action(action, &context).await?,
        Commands::Forms { action } => handle_forms_action(action, &context).await?,
        Commands::Submissions { link } => list_submissions(&context, link).await?,
        Commands::Analytics { range, link } => show_analytics(&context, &range, &link).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_links_action(action: LinksAction, context: &AppContext) -> Result<()> {
    match action {
        LinksAction::List => list_links(context).await?,
        LinksAction::Create {
            url,
            form,
            headline,
        } => create_link(context, url, form, headline).await?,
        LinksAction::Toggle { id } => {
            let link = context.link_service.toggle_status(id).await?;
            println!(
                "{} link {} is now {}",
                "✓".green(),
                link.id,
                status_label(link.status)
            );
        }
        LinksAction::Click { id } => {
            let link = context.link_service.record_click(id).await?;
            println!(
                "{} link {} now has {} clicks",
                "✓".green(),
                link.id,
                link.clicks
            );
        }
        LinksAction::Delete { id, yes } => delete_link(context, id, yes).await?,
    }

    Ok(())
}

async fn list_links(context: &AppContext) -> Result<()> {
    let links = context.link_service.get_all().await?;

    if links.is_empty() {
        println!("{}", "No links yet.".yellow());
        return Ok(());
    }

    println!(
        "{:<4} {:<8} {:>7} {:>6} {:>6} {}",
        "ID".bold(),
        "STATUS".bold(),
        "CLICKS".bold(),
        "SUBS".bold(),
        "RATE".bold(),
        "GATED URL".bold()
    );
    for link in links {
        println!(
            "{:<4} {:<8} {:>7} {:>6} {:>5.1}% {}",
            link.id,
            status_label(link.status),
            link.clicks,
            link.submissions,
            link.conversion_rate(),
            link.gated_url.cyan()
        );
    }

    Ok(())
}

/// Drives the three-step creation workflow from the command line.
async fn create_link(
    context: &AppContext,
    url: String,
    form: Option<i64>,
    headline: Option<String>,
) -> Result<()> {
    let mut creator = context.link_creator();

    creator.set_original_url(url);
    creator.advance().await.context("Step 1 (URL) failed")?;
    debug_assert_eq!(creator.step(), WorkflowStep::SelectForm);

    let form_id = match form {
        Some(id) => id,
        None => creator
            .available_forms()
            .first()
            .map(|form| form.id)
            .context("No forms available; create a form first")?,
    };
    creator.select_form(form_id);
    creator
        .advance()
        .await
        .context("Step 2 (form selection) failed")?;

    if let Some(headline) = headline {
        creator.customization_mut().headline = headline;
    }

    match creator.advance().await.context("Link creation failed")? {
        WorkflowAdvance::Submitted(link) => {
            println!("{} gated link created", "✓".green());
            println!("  id:        {}", link.id);
            println!("  gated url: {}", link.gated_url.cyan());
            println!("  form:      {}", link.form_id);
        }
        WorkflowAdvance::Moved(step) => {
            anyhow::bail!("workflow did not complete, stuck at {step:?}");
        }
    }

    Ok(())
}

async fn delete_link(context: &AppContext, id: i64, yes: bool) -> Result<()> {
    let link = context.link_service.get_by_id(id).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete link {} ({})?", link.id, link.gated_url))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    context.link_service.delete(id).await?;
    println!("{} link {} deleted", "✓".green(), id);

    Ok(())
}

/// Dispatches form inspection commands.
async fn handle_forms_action(action: FormsAction, context: &AppContext) -> Result<()> {
    match action {
        FormsAction::List => {
            let forms = context.form_service.get_all().await?;

            println!("{:<4} {:<24} {}", "ID".bold(), "NAME".bold(), "FIELDS".bold());
            for form in forms {
                println!("{:<4} {:<24} {}", form.id, form.name, form.fields.len());
            }
        }
        FormsAction::Show { id } => {
            let form = context.form_service.get_by_id(id).await?;

            println!("{} {}", form.name.bold(), format!("(id {})", form.id).dimmed());
            if !form.description.is_empty() {
                println!("{}", form.description);
            }
            for field in &form.fields {
                let required = if field.required { "required" } else { "optional" };
                println!(
                    "  - {} [{}] {}",
                    field.label,
                    field.field_type,
                    required.dimmed()
                );
            }
        }
    }

    Ok(())
}

async fn list_submissions(context: &AppContext, link: Option<i64>) -> Result<()> {
    let submissions = match link {
        Some(link_id) => context.submission_service.get_by_link_id(link_id).await?,
        None => context.submission_service.get_all().await?,
    };

    if submissions.is_empty() {
        println!("{}", "No submissions.".yellow());
        return Ok(());
    }

    for submission in submissions {
        println!(
            "{} link={} at {}",
            format!("#{}", submission.id).bold(),
            submission.link_id,
            submission.submitted_at.format("%Y-%m-%d %H:%M")
        );
        for (field, value) in &submission.data {
            println!("    {field}: {value}");
        }
    }

    Ok(())
}

async fn show_analytics(context: &AppContext, range: &str, link: &str) -> Result<()> {
    let range: TimeRange = range.parse()?;
    let scope: LinkScope = link.parse()?;

    let snapshot = context.analytics_service.get_overview(range, scope).await?;

    println!("{}", format!("Overview ({})", range.as_str()).bold());
    println!("  total clicks:      {}", snapshot.overview.total_clicks);
    println!(
        "  total submissions: {}",
        snapshot.overview.total_submissions
    );
    println!(
        "  conversion rate:   {:.1}%",
        snapshot.overview.conversion_rate
    );

    println!("{}", "Clicks per day".bold());
    for point in &snapshot.charts.clicks_over_time {
        if point.value > 0.0 {
            let day = chrono::DateTime::from_timestamp_millis(point.timestamp_ms)
                .map(|ts| ts.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| point.timestamp_ms.to_string());
            println!("  {} {}", day, "▪".repeat(point.value as usize).cyan());
        }
    }

    println!("{}", "Top locations".bold());
    for share in &snapshot.charts.top_locations {
        println!("  {:<16} {:>3}%", share.name, share.value);
    }

    Ok(())
}

fn status_label(status: LinkStatus) -> ColoredString {
    match status {
        LinkStatus::Active => "active".green(),
        LinkStatus::Paused => "paused".yellow(),
    }
}
