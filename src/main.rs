use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use herxv_shop::{
    app::build_app, config::AppConfig, mailer::SmtpMailer, order_log::OrderLog, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,herxv_shop=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let mailer = SmtpMailer::new(&config.smtp)?;
    let order_log = OrderLog::new(&config.log);
    tracing::info!(
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        logging = order_log.is_enabled(),
        "order processing configured"
    );

    let state = AppState::new(config.mail, Arc::new(mailer), order_log);
    let app = build_app(state);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
