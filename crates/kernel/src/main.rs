//! Nova menu tool
//!
//! Loads plugin menu manifests and prints the backend view data a request
//! would receive.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use nova_kernel::menu::MenuAssembler;
use nova_kernel::plugin::PluginRuntime;
use nova_kernel::tap::{RequestContext, TapDispatcher, TapRegistry, UserContext};
use nova_kernel::{BackendController, Config};

#[derive(Parser)]
#[command(name = "nova-menu")]
#[command(about = "Assemble the Nova backend menu for a request")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Current request URL
    #[arg(short, long, default_value = "/admin")]
    url: String,

    /// Plugins directory (overrides PLUGINS_DIR)
    #[arg(short, long)]
    plugins_dir: Option<PathBuf>,

    /// Menu event to fire (overrides MENU_EVENT)
    #[arg(short, long)]
    event: Option<String>,

    /// Name of the authenticated user
    #[arg(long, default_value = "admin")]
    user: String,

    /// Permission granted to the user (repeatable)
    #[arg(long = "permission")]
    permissions: Vec<String>,

    /// Render the menu for an anonymous request
    #[arg(long, conflicts_with_all = ["user", "permissions"])]
    anonymous: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(dir) = cli.plugins_dir {
        config.plugins_dir = dir;
    }
    if let Some(event) = cli.event {
        config.menu_event = event;
    }
    info!(
        plugins_dir = %config.plugins_dir.display(),
        event = %config.menu_event,
        scan = %config.active_scan,
        prefix = %config.prefix_match,
        "Configuration loaded"
    );

    let runtime = PluginRuntime::discover(&config.plugins_dir)
        .context("failed to discover plugin manifests")?;

    let mut registry = TapRegistry::new();
    runtime.register_all(&mut registry);
    info!(
        plugins = runtime.plugin_count(),
        providers = registry.handler_count(&config.menu_event),
        "Menu providers registered"
    );

    let dispatcher = TapDispatcher::new(Arc::new(registry));
    let assembler = MenuAssembler::new(dispatcher, config.menu_options());
    let controller = BackendController::from_config(assembler, &config);
    debug!(
        event = controller.menu_event(),
        theme = controller.theme(),
        layout = controller.layout(),
        "Backend controller ready"
    );

    let user = (!cli.anonymous).then(|| UserContext::new(Uuid::nil(), cli.user, cli.permissions));
    let request = RequestContext::new(&cli.url, user);

    let mut view = tera::Context::new();
    controller
        .initialize(&request, &mut view)
        .context("failed to assemble backend menu")?;

    let output =
        serde_json::to_string_pretty(&view.into_json()).context("failed to encode view data")?;
    println!("{output}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
