// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::error::Error;

use axum_server::tls_rustls::RustlsConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kudiswap_ussd_server::{
    api::router,
    config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER},
    state::AppState,
    storage::{StoragePaths, UserDatabase},
};

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    if config.uses_default_jwt_secret() {
        tracing::warn!("JWT_SECRET is not set; using the development secret");
    }

    let paths = StoragePaths::new(&config.data_dir);
    let db = UserDatabase::open(&paths.users_db())?;
    tracing::info!(
        path = %paths.users_db().display(),
        users = db.user_count()?,
        "User database opened"
    );

    let state = AppState::new(db, &config)?;
    let app = router(state);
    let addr = config.bind_addr;

    match &config.tls {
        Some(tls) => {
            rustls::crypto::ring::default_provider()
                .install_default()
                .map_err(|_| "failed to install rustls crypto provider")?;

            let tls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            tracing::info!(%addr, "KudiSwap USSD gateway listening on https (docs at /docs)");

            axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            tracing::info!(%addr, "KudiSwap USSD gateway listening on http (docs at /docs)");

            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
