use cartkeep::application::engine::CartEngine;
use cartkeep::domain::line::{ProductSnapshot, UnitPrice};
use cartkeep::domain::ports::CartStoreBox;
use cartkeep::infrastructure::in_memory::InMemoryCartStore;
use cartkeep::infrastructure::json_file::JsonFileCartStore;
#[cfg(feature = "storage-rocksdb")]
use cartkeep::infrastructure::rocksdb::RocksDbCartStore;
use cartkeep::interfaces::csv::action_reader::{ActionKind, ActionReader, ActionRecord};
use cartkeep::interfaces::csv::receipt_writer::ReceiptWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input cart actions CSV file
    input: PathBuf,

    /// Path to the persisted cart file (optional). If provided, the cart
    /// survives across runs until a clear action deletes it.
    #[arg(long)]
    state_file: Option<PathBuf>,

    /// Path to a persistent RocksDB database (optional).
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn build_store(cli: &Cli) -> Result<CartStoreBox> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        let store = RocksDbCartStore::open(db_path).into_diagnostic()?;
        return Ok(Box::new(store));
    }
    if let Some(path) = &cli.state_file {
        return Ok(Box::new(JsonFileCartStore::new(path)));
    }
    Ok(Box::new(InMemoryCartStore::new()))
}

async fn apply_action(engine: &mut CartEngine, record: ActionRecord) {
    match record.action {
        ActionKind::Add => {
            let (Some(id), Some(price)) = (record.id, record.price) else {
                eprintln!("Skipping action: add requires id and price");
                return;
            };
            let price = match UnitPrice::new(price) {
                Ok(price) => price,
                Err(e) => {
                    eprintln!("Skipping action: {}", e);
                    return;
                }
            };
            let product = ProductSnapshot {
                id,
                name: record.name.unwrap_or_default(),
                description: record.description.unwrap_or_default(),
                price,
                image: record.image.unwrap_or_default(),
            };
            engine.add_line(product, record.quantity.unwrap_or(1)).await;
        }
        ActionKind::Remove => match record.id {
            Some(id) => engine.remove_line(id).await,
            None => eprintln!("Skipping action: remove requires id"),
        },
        ActionKind::Set => match (record.id, record.quantity) {
            (Some(id), Some(quantity)) => engine.set_quantity(id, quantity).await,
            _ => eprintln!("Skipping action: set requires id and quantity"),
        },
        ActionKind::Clear => engine.clear().await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let store = build_store(&cli)?;
    let mut engine = CartEngine::load(store).await;

    // Apply actions
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = ActionReader::new(file);
    for action_result in reader.actions() {
        match action_result {
            Ok(record) => apply_action(&mut engine, record).await,
            Err(e) => eprintln!("Error reading action: {}", e),
        }
    }

    // Output final cart state as a receipt
    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());
    writer
        .write_receipt(engine.lines(), engine.totals())
        .into_diagnostic()?;

    Ok(())
}
