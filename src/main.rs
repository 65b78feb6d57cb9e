//! InternMitra - Internship Recommendation Client
//!
//! A desktop application that matches students with internship vacancies.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use internmitra::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("internmitra=info".parse().unwrap()))
        .init();

    info!("Starting InternMitra v{}", env!("CARGO_PKG_VERSION"));

    // Launch Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("InternMitra")
                    .with_inner_size(LogicalSize::new(960.0, 720.0)),
            ),
        )
        .launch(App);
}
