mod assets;
mod config;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::parse();
    let url = config.url();

    if !config.no_browser {
        let browser_url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&browser_url) {
                warn!("Could not open a browser at {}: {}", browser_url, err);
            }
        });
    }

    info!("Roster frontend served at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(assets::serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
