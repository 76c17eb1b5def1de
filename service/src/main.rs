#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use repfinder::{
    app::{App, Command, Outcome},
    civic::{Representative, Tier},
    compose::Delivery,
    config::Config,
    render::{render_card, render_results, FavoritesView},
};
use tracing_subscriber::EnvFilter;

/// Look up and contact your elected representatives.
#[derive(Debug, Parser)]
#[command(name = "repfinder", version, about)]
struct Cli {
    /// YAML configuration file (default: repfinder.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the representatives for a ZIP code
    Lookup {
        zip: String,
        /// Only show one tier (federal, state, local)
        #[arg(long)]
        tier: Option<Tier>,
    },
    /// Manage saved representatives
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// List available message templates
    Templates,
    /// Write to a representative
    Compose {
        zip: String,
        /// Representative's name as shown by `lookup`
        #[arg(long)]
        name: String,
        /// Disambiguate when the same person holds several offices
        #[arg(long)]
        office: Option<String>,
        /// Template id to start from (see `templates`)
        #[arg(long)]
        template: Option<String>,
        /// Subject line; overrides the template's
        #[arg(long)]
        subject: Option<String>,
        /// Message body; overrides the template's
        #[arg(long)]
        body: Option<String>,
        /// Launch the default mail client when falling back to mailto
        #[arg(long)]
        open: bool,
    },
}

#[derive(Debug, Subcommand)]
enum FavoritesAction {
    /// Show saved representatives
    List,
    /// Save a representative from a lookup
    Add {
        zip: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        office: Option<String>,
    },
    /// Forget a saved representative
    Remove {
        #[arg(long)]
        name: String,
        #[arg(long)]
        office: String,
    },
    /// Save a representative from a lookup, or forget it if already saved
    Toggle {
        zip: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        office: Option<String>,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow!("{e}"))?;

    init_tracing(&config.logging.level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "repfinder starting up");

    let mut app = App::from_config(&config);

    match cli.command {
        Commands::Lookup { zip, tier } => {
            lookup(&mut app, &zip).await?;
            let reps: Vec<Representative> = app
                .state()
                .reps
                .iter()
                .filter(|rep| tier.map_or(true, |tier| rep.tier == tier))
                .cloned()
                .collect();
            if reps.is_empty() {
                println!("No representatives found for {zip}.");
            }
            let favorites = app.favorites().map(|store| store.list_all());
            print!("{}", render_results(&reps, view(favorites.as_deref())));
        }
        Commands::Favorites { action } => favorites(&mut app, action).await?,
        Commands::Templates => {
            for (id, template) in app.templates() {
                println!("{id:<12} {}", template.subject);
            }
        }
        Commands::Compose {
            zip,
            name,
            office,
            template,
            subject,
            body,
            open,
        } => {
            lookup(&mut app, &zip).await?;
            let rep = select(&app, &name, office.as_deref())?;
            compose(&mut app, rep, template, subject, body, open).await?;
        }
    }

    Ok(())
}

fn view(favorites: Option<&[Representative]>) -> FavoritesView<'_> {
    favorites.map_or(FavoritesView::Disabled, FavoritesView::Enabled)
}

async fn lookup(app: &mut App, zip: &str) -> anyhow::Result<()> {
    app.dispatch(Command::Lookup(zip.to_string())).await?;
    Ok(())
}

fn select(app: &App, name: &str, office: Option<&str>) -> anyhow::Result<Representative> {
    app.state()
        .find(name, office)
        .cloned()
        .ok_or_else(|| match office {
            Some(office) => anyhow!("No representative named '{name}' holding '{office}'."),
            None => anyhow!("No representative named '{name}'."),
        })
}

async fn favorites(app: &mut App, action: FavoritesAction) -> anyhow::Result<()> {
    let Some(store) = app.favorites().cloned() else {
        bail!("Favorites are disabled.");
    };

    match action {
        FavoritesAction::List => {
            let list = store.list_all();
            if list.is_empty() {
                println!("No favorites saved.");
            }
            print!("{}", render_results(&[], FavoritesView::Enabled(&list)));
        }
        FavoritesAction::Add { zip, name, office } => {
            lookup(app, &zip).await?;
            let rep = select(app, &name, office.as_deref())?;
            let label = format!("{} ({})", rep.name, rep.office);
            if store.add(rep)? {
                println!("★ Saved {label}.");
            } else {
                println!("{label} is already a favorite.");
            }
        }
        FavoritesAction::Remove { name, office } => {
            if store.remove(&name, &office)? {
                println!("Removed {name} ({office}).");
            } else {
                println!("{name} ({office}) is not a favorite.");
            }
        }
        FavoritesAction::Toggle { zip, name, office } => {
            lookup(app, &zip).await?;
            let rep = select(app, &name, office.as_deref())?;
            if let Outcome::FavoriteToggled {
                name,
                office,
                favorite,
            } = app.dispatch(Command::ToggleFavorite(rep)).await?
            {
                let verb = if favorite { "★ Saved" } else { "Removed" };
                println!("{verb} {name} ({office}).");
            }
        }
    }

    Ok(())
}

async fn compose(
    app: &mut App,
    rep: Representative,
    template: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    open: bool,
) -> anyhow::Result<()> {
    let favorites = app.favorites().map(|store| store.list_all());
    print!("{}", render_card(&rep, view(favorites.as_deref())));

    if let Outcome::ComposerOpened { recipient, address } =
        app.dispatch(Command::OpenComposer(rep)).await?
    {
        println!("\nTo: {recipient} <{address}>");
    }

    if let Some(id) = template {
        app.dispatch(Command::ApplyTemplate(id)).await?;
    }

    let draft = app
        .state()
        .composer
        .as_ref()
        .map(|composer| composer.draft.clone())
        .unwrap_or_default();
    let subject = subject.unwrap_or(draft.subject);
    let body = body.unwrap_or(draft.body);

    match app.dispatch(Command::Send { subject, body }).await? {
        Outcome::Delivered(Delivery::Sent { to }) => {
            println!("✅ Email sent successfully to {to}!");
        }
        Outcome::Delivered(Delivery::MailTo(uri)) => {
            println!("{uri}");
            if open {
                if let Err(err) = launch_mail_client(&uri) {
                    tracing::warn!(error = %err, "could not open mail client");
                }
            }
        }
        other => tracing::debug!(?other, "unexpected compose outcome"),
    }

    Ok(())
}

/// Hand a `mailto:` URI to the platform's default handler.
fn launch_mail_client(uri: &str) -> anyhow::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        std::process::Command::new("xdg-open")
    };

    command
        .arg(uri)
        .spawn()
        .context("failed to launch the default mail client")?;
    Ok(())
}
