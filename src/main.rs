//! # catalog-sync
//!
//! Command-line front end for the catalog store.
//!
//! Each invocation starts a [`CatalogSystem`] against the configured products
//! collection, runs one command and shuts the system down again.

use catalog_sync::clients::{ActorClient, CatalogClient};
use catalog_sync::detail::{DetailSynchronizer, Notice};
use catalog_sync::lifecycle::{setup_tracing, CatalogConfig, CatalogSystem};
use catalog_sync::model::{CommentId, Product, ProductDraft, ProductId, Size};
use catalog_sync::projection::SortMode;
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "catalog-sync", about = "Manage a remote product catalog")]
struct Cli {
    /// URL of the products collection; overrides CATALOG_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds; overrides CATALOG_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List products, filtered by name and sorted
    List {
        /// Case-insensitive substring of the name
        #[arg(long, short, default_value = "")]
        query: String,

        /// nameAsc_countAsc, nameAsc_countDesc, nameDesc_countAsc or nameDesc_countDesc
        #[arg(long, short, default_value_t = SortMode::default())]
        sort: SortMode,
    },
    /// Show one product with its comments
    Show { id: ProductId },
    /// Create a product
    Create(ProductArgs),
    /// Change the fields of a product; comments are kept
    Edit {
        id: ProductId,

        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete a product
    Delete { id: ProductId },
    /// Add a comment to a product
    Comment { id: ProductId, text: String },
    /// Remove a comment from a product
    Uncomment { id: ProductId, comment_id: CommentId },
}

#[derive(Debug, Args)]
struct ProductArgs {
    #[arg(long)]
    name: String,

    #[arg(long, default_value_t = 0)]
    count: i64,

    #[arg(long, default_value = "")]
    image_url: String,

    #[arg(long, default_value = "")]
    weight: String,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,
}

#[derive(Debug, Args)]
struct EditArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    count: Option<i64>,

    #[arg(long)]
    image_url: Option<String>,

    #[arg(long)]
    weight: Option<String>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,
}

impl ProductArgs {
    fn into_draft(self) -> ProductDraft {
        ProductDraft::new(self.name)
            .with_count(self.count)
            .with_image_url(self.image_url)
            .with_weight(self.weight)
            .with_size(Size {
                width: self.width,
                height: self.height,
            })
    }
}

impl EditArgs {
    fn apply(self, mut draft: ProductDraft) -> ProductDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(count) = self.count {
            draft.count = count;
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = image_url;
        }
        if let Some(weight) = self.weight {
            draft.weight = weight;
        }
        if self.width.is_some() {
            draft.size.width = self.width;
        }
        if self.height.is_some() {
            draft.size.height = self.height;
        }
        draft
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let mut config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }

    let system = CatalogSystem::new(&config).map_err(|e| e.to_string())?;
    let result = run(&system, cli.command).await;
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }

    system.shutdown().await?;
    info!("Done");
    result
}

async fn run(system: &CatalogSystem, command: Command) -> Result<(), String> {
    let catalog = &system.catalog_client;
    match command {
        Command::List { query, sort } => {
            catalog.fetch_all().await.map_err(|e| e.to_string())?;
            for product in catalog.project(&query, sort) {
                print_row(&product);
            }
        }
        Command::Show { id } => {
            let mut detail = system.synchronizer(id);
            let loaded = detail.load().await;
            let product = finish(&mut detail, loaded)?;
            print_product(&product);
        }
        Command::Create(args) => {
            let created = catalog
                .create(args.into_draft())
                .await
                .map_err(|e| e.to_string())?;
            reconcile(catalog).await;
            println!("Product created");
            print_row(&created);
        }
        Command::Edit { id, fields } => {
            let mut detail = system.synchronizer(id);
            let loaded = detail.load().await;
            finish(&mut detail, loaded)?;
            let draft = detail.begin_edit().map_err(|e| e.to_string())?;
            let saved = detail.save_product(fields.apply(draft)).await;
            let product = finish(&mut detail, saved)?;
            print_row(&product);
        }
        Command::Delete { id } => {
            catalog.delete(id.clone()).await.map_err(|e| e.to_string())?;
            println!("Product {id} deleted");
        }
        Command::Comment { id, text } => {
            let mut detail = system.synchronizer(id);
            let loaded = detail.load().await;
            finish(&mut detail, loaded)?;
            let saved = detail.add_comment(&text).await;
            let product = finish(&mut detail, saved)?;
            print_product(&product);
        }
        Command::Uncomment { id, comment_id } => {
            let mut detail = system.synchronizer(id);
            let loaded = detail.load().await;
            finish(&mut detail, loaded)?;
            let saved = detail.remove_comment(&comment_id).await;
            let product = finish(&mut detail, saved)?;
            print_product(&product);
        }
    }
    Ok(())
}

/// Print the pending notice and turn the outcome into the binary's error type.
fn finish<E: std::fmt::Display>(
    detail: &mut DetailSynchronizer,
    outcome: Result<Product, E>,
) -> Result<Product, String> {
    if let Some(Notice { message, .. }) = detail.take_notice() {
        println!("{message}");
    }
    outcome.map_err(|e| e.to_string())
}

/// Refresh the cached list after a create; a failure here is only logged.
async fn reconcile(catalog: &CatalogClient) {
    if let Err(e) = catalog.fetch_all().await {
        error!(error = %e, "Refetch after create failed");
    }
}

fn print_row(product: &Product) {
    println!(
        "{}\t{}\t{}\t{} comment(s)",
        product.id,
        product.name,
        product.count,
        product.comments.len()
    );
}

fn print_product(product: &Product) {
    println!("id:      {}", product.id);
    println!("name:    {}", product.name);
    println!("count:   {}", product.count);
    if !product.image_url.is_empty() {
        println!("image:   {}", product.image_url);
    }
    if product.size.width.is_some() || product.size.height.is_some() {
        let show = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        println!("size:    {} x {}", show(product.size.width), show(product.size.height));
    }
    if !product.weight.is_empty() {
        println!("weight:  {}", product.weight);
    }
    for comment in &product.comments {
        println!("  [{}] {}  ({})", comment.id, comment.description, comment.date);
    }
}
