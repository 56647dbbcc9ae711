use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jiggly_fruitz::cli::{Cli, Command};
use jiggly_fruitz::config::{KioskConfig, StoreConfig};
use jiggly_fruitz::error::Result;
use jiggly_fruitz::export::write_orders_csv;
use jiggly_fruitz::interface::{
    collect_profile, display_bmi, display_order_list, display_recommendation, prompt_yes_no,
};
use jiggly_fruitz::models::OrderStatus;
use jiggly_fruitz::recommender::{format_rupiah, FRUITS};
use jiggly_fruitz::state::{load_profile, OrderBoard, Session};
use jiggly_fruitz::storage::{JsonFileStore, OrderStore, SupabaseStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "jiggly_fruitz=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = KioskConfig::from_env()?;
    let board = OrderBoard::new(open_store(&config, &cli.file), config.offset);

    match cli.command.unwrap_or_default() {
        Command::Recommend { profile, yes } => cmd_recommend(board, profile.as_deref(), yes).await,
        Command::Orders => cmd_orders(board).await,
        Command::Done { id } => cmd_done(board, &id).await,
        Command::Export { path } => cmd_export(board, &path).await,
    }
}

fn open_store(config: &KioskConfig, file: &Path) -> Box<dyn OrderStore> {
    match &config.store {
        StoreConfig::Supabase { url, anon_key } => {
            tracing::info!(url = %url, "using Supabase order store");
            Box::new(SupabaseStore::new(url.clone(), anon_key.clone()))
        }
        StoreConfig::LocalFile => {
            tracing::info!(path = %file.display(), "using local order file");
            Box::new(JsonFileStore::new(file))
        }
    }
}

/// Collect preferences, show the recommendation, and optionally place the order.
async fn cmd_recommend(
    mut board: OrderBoard<Box<dyn OrderStore>>,
    profile_path: Option<&Path>,
    auto_confirm: bool,
) -> Result<()> {
    let profile = match profile_path {
        Some(path) => load_profile(path)?,
        None => collect_profile(&FRUITS)?,
    };

    let mut session = Session::new(profile);
    display_bmi(session.bmi(), session.bmi_category());

    let rec = session.submit().clone();
    display_recommendation(&rec, session.caption().unwrap_or_default());

    let confirmed = auto_confirm || prompt_yes_no("Lanjut pembayaran?", true)?;
    if !confirmed {
        println!("Pesanan belum dikirim. Silakan ubah preferensi kapan saja.");
        return Ok(());
    }

    let order = board.confirm(&session.profile, &rec).await?;
    println!(
        "Pesanan {} tercatat ({}). Tunjukkan kode ini ke tim Jiggly Fruitz.",
        order.code,
        format_rupiah(Some(order.price))
    );

    Ok(())
}

/// Show the kitchen's order list.
async fn cmd_orders(mut board: OrderBoard<Box<dyn OrderStore>>) -> Result<()> {
    board.refresh().await?;
    display_order_list(board.orders());
    Ok(())
}

/// Mark one order as done.
async fn cmd_done(mut board: OrderBoard<Box<dyn OrderStore>>, id: &str) -> Result<()> {
    board.refresh().await?;
    board.update_status(id, OrderStatus::Done).await?;

    if let Some(order) = board.get(id) {
        println!("{} • {} ditandai {}", order.code, order.name, order.status.label());
    }
    Ok(())
}

async fn cmd_export(mut board: OrderBoard<Box<dyn OrderStore>>, path: &Path) -> Result<()> {
    board.refresh().await?;
    write_orders_csv(board.orders(), path)?;
    println!("Exported {} orders to {}", board.len(), path.display());
    Ok(())
}
