use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use picture_cache::application::{ImageCacheService, LoadGalleryUseCase};
use picture_cache::domain::ports::{CacheIndexPort, CacheStoragePort};
use picture_cache::infrastructure::{
    AppConfig, CacheDirectory, CliArgs, ConfigStorage, HttpImageDownloader, HttpUrlSource,
    MemoryCacheIndex, TomlCacheIndex, UuidFileIds, build_client,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let storage = match &args.config {
        Some(path) => ConfigStorage::with_dir(
            path.parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or_default(),
        ),
        None => ConfigStorage::new().wrap_err("Failed to locate config directory")?,
    };
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("Failed to load configuration")?;
    config.merge_with_args(args);

    Ok(config)
}

async fn create_service(config: &AppConfig, client: reqwest::Client) -> ImageCacheService {
    let downloader = Arc::new(HttpImageDownloader::new(client));

    let storage = if config.no_cache {
        info!("Disk cache disabled");
        None
    } else {
        CacheDirectory::bootstrap_or_disable(config.effective_cache_dir()).await
    };

    let index: Arc<dyn CacheIndexPort> = match (&storage, config.effective_index_path()) {
        (Some(_), Some(path)) => match TomlCacheIndex::open(path).await {
            Ok(index) => Arc::new(index),
            Err(e) => {
                warn!(error = %e, "Cache index unavailable, using in-memory index");
                Arc::new(MemoryCacheIndex::new())
            }
        },
        _ => Arc::new(MemoryCacheIndex::new()),
    };

    let storage = storage.map(|dir| Arc::new(dir) as Arc<dyn CacheStoragePort>);

    ImageCacheService::new(downloader, index, storage, Arc::new(UuidFileIds))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = picture_cache::VERSION, "Starting {}", picture_cache::NAME);

    let client = build_client(config.http.timeout_secs, &config.http.user_agent)?;
    let images = Arc::new(create_service(&config, client.clone()).await);
    let url_source = Arc::new(HttpUrlSource::new(client, config.source_url.clone()));

    let gallery = LoadGalleryUseCase::new(url_source, images, config.max_concurrent_fetches)
        .execute()
        .await
        .wrap_err("Failed to download image URLs")?;

    for loaded in &gallery {
        println!(
            "{}x{}\t{}\t{}",
            loaded.image.width(),
            loaded.image.height(),
            loaded.source,
            loaded.url
        );
    }

    info!(loaded = gallery.len(), "Gallery loaded");

    Ok(())
}
