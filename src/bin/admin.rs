//! CLI administration tool for supplier-portal.
//!
//! Talks to the same backend and postal code providers as the web service,
//! using the same configuration, without going through the pages.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a postal code through the provider chain
//! cargo run --bin admin -- postal 01310-100
//!
//! # List companies and suppliers
//! cargo run --bin admin -- companies
//! cargo run --bin admin -- suppliers --name maria
//!
//! # Show the suppliers linked to a company
//! cargo run --bin admin -- links 3
//!
//! # Delete records (asks for confirmation)
//! cargo run --bin admin -- delete-company 3
//! cargo run --bin admin -- delete-supplier 7 -y
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `supplier_portal::config`.

use supplier_portal::config;
use supplier_portal::domain::entities::{PostalLookupResult, SupplierFilter};
use supplier_portal::domain::{Outcome, Severity};
use supplier_portal::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for supplier-portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a postal code
    Postal {
        /// Postal code, with or without punctuation
        code: String,
    },

    /// List companies
    Companies,

    /// List suppliers
    Suppliers {
        /// Case-insensitive name filter
        #[arg(short, long)]
        name: Option<String>,

        /// Case-insensitive CPF/CNPJ filter
        #[arg(short, long)]
        tax_id: Option<String>,
    },

    /// List the suppliers linked to a company
    Links { company_id: i64 },

    /// Delete a company
    DeleteCompany {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a supplier
    DeleteSupplier {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let state = AppState::from_config(&config)?;

    match cli.command {
        Commands::Postal { code } => resolve_postal(&state, &code).await,
        Commands::Companies => list_companies(&state).await,
        Commands::Suppliers { name, tax_id } => {
            list_suppliers(&state, SupplierFilter { name, tax_id }).await
        }
        Commands::Links { company_id } => list_links(&state, company_id).await,
        Commands::DeleteCompany { id, yes } => {
            if confirm(&format!("Delete company #{id}?"), yes)? {
                print_outcome(&state.company_service.delete(id).await);
            }
        }
        Commands::DeleteSupplier { id, yes } => {
            if confirm(&format!("Delete supplier #{id}?"), yes)? {
                print_outcome(&state.supplier_service.delete(id).await);
            }
        }
    }

    Ok(())
}

/// Runs the provider chain and prints the verdict with any address detail.
async fn resolve_postal(state: &AppState, code: &str) {
    println!("{}", "📮 Postal code lookup".bright_blue().bold());
    println!();

    let result = state.postal_service.resolve(code).await;

    let verdict = match &result {
        PostalLookupResult::Valid { .. } => "VALID".green(),
        PostalLookupResult::Invalid { .. } => "INVALID".red(),
        PostalLookupResult::Unknown { .. } => "UNVERIFIED".yellow(),
    };
    println!("  Code:    {}", code.cyan());
    println!("  Result:  {}", verdict.bold());

    if let Some(message) = result.message() {
        println!("  Note:    {}", message.bright_black());
    }

    if let Some(address) = result.address().filter(|a| !a.is_empty()) {
        println!("  State:   {}", address.state.as_deref().unwrap_or("-"));
        println!("  City:    {}", address.city.as_deref().unwrap_or("-"));
        println!("  Area:    {}", address.neighborhood.as_deref().unwrap_or("-"));
    }
    println!();
}

async fn list_companies(state: &AppState) {
    println!("{}", "🏢 Companies".bright_blue().bold());
    println!();

    let listing = state.company_service.list(&()).await;
    if let Some(warning) = &listing.warning {
        print_outcome(warning);
        return;
    }
    if listing.items.is_empty() {
        println!("{}", "  No companies found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<20} {:<30} {:<10} {:<3}",
        "ID".bright_white().bold(),
        "CNPJ".bright_white().bold(),
        "Trade name".bright_white().bold(),
        "CEP".bright_white().bold(),
        "UF".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for company in &listing.items {
        println!(
            "  {:<5} {:<20} {:<30} {:<10} {:<3}",
            company.id.to_string().bright_black(),
            company.tax_id,
            company.trade_name.cyan(),
            company.postal_code,
            company.state.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!(
        "  Total: {}",
        listing.items.len().to_string().bright_white().bold()
    );
}

async fn list_suppliers(state: &AppState, filter: SupplierFilter) {
    println!("{}", "📦 Suppliers".bright_blue().bold());
    println!();

    let listing = state.supplier_service.list(&filter).await;
    if let Some(warning) = &listing.warning {
        print_outcome(warning);
        return;
    }
    print_suppliers(&listing.items);
}

async fn list_links(state: &AppState, company_id: i64) {
    println!(
        "{}",
        format!("🔗 Suppliers linked to company #{company_id}")
            .bright_blue()
            .bold()
    );
    println!();

    let listing = state.association_service.list_for_company(company_id).await;
    if let Some(warning) = &listing.warning {
        print_outcome(warning);
        return;
    }
    print_suppliers(&listing.items);
}

fn print_suppliers(suppliers: &[supplier_portal::domain::entities::Supplier]) {
    if suppliers.is_empty() {
        println!("{}", "  No suppliers found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<30} {:<20} {:<4}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "CPF/CNPJ".bright_white().bold(),
        "Type".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for supplier in suppliers {
        println!(
            "  {:<5} {:<30} {:<20} {:<4}",
            supplier.id.to_string().bright_black(),
            supplier.name.cyan(),
            supplier.tax_id,
            supplier
                .person_type
                .map(|p| p.code())
                .unwrap_or("-")
        );
    }

    println!();
    println!("  Total: {}", suppliers.len().to_string().bright_white().bold());
}

fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
    }
    Ok(confirmed)
}

fn print_outcome(outcome: &Outcome) {
    let line = match outcome.severity {
        Severity::Ok => format!("✅ {}", outcome.message).green(),
        Severity::Warning => format!("⚠️  {}", outcome.message).yellow(),
        Severity::Error => format!("❌ {}", outcome.message).red(),
    };
    println!("{}", line.bold());
}
