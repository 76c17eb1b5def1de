//! Application state and command dispatch.
//!
//! All mutable session state lives in [`AppState`], owned by [`App`] and
//! changed only through [`App::dispatch`]. Rendering reads the state but
//! never changes it, so the transform logic can be exercised without any
//! output surface.

use rf_civic::{normalize, CivicApiClient, CivicApiError, HttpCivicClient, Representative};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::compose::{self, ComposeError, Delivery, Draft, GmailSender, MessageSender, Template};
use crate::config::Config;
use crate::favorites::{FavoritesError, FavoritesStore};
use crate::store::FileStore;
use crate::validation::ZipCode;

/// User-facing failures. Each variant's message is what the user sees.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter a valid 5-digit ZIP code.")]
    InvalidZip,

    #[error("Unable to find representatives. Please check your ZIP code and try again.")]
    LookupFailed(#[source] CivicApiError),

    #[error("Favorites are disabled.")]
    FavoritesDisabled,

    #[error("Unable to save favorites: {0}")]
    Favorites(#[from] FavoritesError),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// A message being written to one representative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub recipient: Representative,
    pub address: String,
    pub draft: Draft,
}

/// Everything that changes during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Records from the most recent lookup.
    pub reps: Vec<Representative>,
    /// Open composer, if any.
    pub composer: Option<Composer>,
    /// Whether an authorized sender is available.
    pub email_authorized: bool,
}

impl AppState {
    /// Find a looked-up record by name, optionally narrowed by office.
    #[must_use]
    pub fn find(&self, name: &str, office: Option<&str>) -> Option<&Representative> {
        self.reps
            .iter()
            .find(|rep| rep.name == name && office.map_or(true, |office| rep.office == office))
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    /// Replace the record list with the representatives for a ZIP code.
    Lookup(String),
    ToggleFavorite(Representative),
    OpenComposer(Representative),
    /// Fill the open composer from a template id.
    ApplyTemplate(String),
    Send { subject: String, body: String },
    CloseComposer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    LookedUp { zip: String, count: usize },
    FavoriteToggled { name: String, office: String, favorite: bool },
    ComposerOpened { recipient: String, address: String },
    DraftUpdated(Draft),
    Delivered(Delivery),
    ComposerClosed,
    /// The command needed an open composer and there was none.
    NoComposer,
}

pub struct App {
    state: AppState,
    civic: Arc<dyn CivicApiClient>,
    favorites: Option<FavoritesStore>,
    sender: Option<Arc<dyn MessageSender>>,
    email_enabled: bool,
    templates: BTreeMap<String, Template>,
}

impl App {
    /// App with only a civic client: favorites off, email off, built-in templates.
    pub fn new(civic: Arc<dyn CivicApiClient>) -> Self {
        Self {
            state: AppState::default(),
            civic,
            favorites: None,
            sender: None,
            email_enabled: false,
            templates: compose::default_templates(),
        }
    }

    #[must_use]
    pub fn with_favorites(mut self, favorites: FavoritesStore) -> Self {
        self.favorites = Some(favorites);
        self
    }

    /// Enable authorized sending. `sender` is `None` while unauthorized.
    #[must_use]
    pub fn with_email(mut self, sender: Option<Arc<dyn MessageSender>>) -> Self {
        self.email_enabled = true;
        self.state.email_authorized = sender.is_some();
        self.sender = sender;
        self
    }

    #[must_use]
    pub fn with_templates(mut self, templates: BTreeMap<String, Template>) -> Self {
        self.templates = templates;
        self
    }

    /// Wire real clients and storage from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let civic = Arc::new(HttpCivicClient::new(
            config.civic.base_url.clone(),
            config.civic.api_key.clone(),
        ));
        let mut app = Self::new(civic).with_templates(config.templates.clone());

        if config.favorites.enabled {
            let store = Arc::new(FileStore::new(config.favorites.storage_dir.clone()));
            app = app.with_favorites(FavoritesStore::new(store, config.favorites.slot.clone()));
        }

        if config.email.enabled {
            let sender = config
                .email
                .access_token
                .as_deref()
                .filter(|_| config.email.is_authorized())
                .map(|token| {
                    Arc::new(GmailSender::new(config.email.base_url.clone(), token))
                        as Arc<dyn MessageSender>
                });
            if sender.is_none() {
                tracing::warn!("email enabled but no access token configured; sending is unauthorized");
            }
            app = app.with_email(sender);
        }

        app
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn favorites(&self) -> Option<&FavoritesStore> {
        self.favorites.as_ref()
    }

    #[must_use]
    pub const fn templates(&self) -> &BTreeMap<String, Template> {
        &self.templates
    }

    /// Apply one command to the session state.
    ///
    /// # Errors
    /// Returns an [`AppError`] whose message is suitable to show the user.
    /// No command is retried.
    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, AppError> {
        match command {
            Command::Lookup(zip) => self.lookup(&zip).await,
            Command::ToggleFavorite(rep) => self.toggle_favorite(rep),
            Command::OpenComposer(rep) => self.open_composer(rep),
            Command::ApplyTemplate(id) => self.apply_template(&id),
            Command::Send { subject, body } => self.send(&subject, &body).await,
            Command::CloseComposer => {
                self.state.composer = None;
                Ok(Outcome::ComposerClosed)
            }
        }
    }

    async fn lookup(&mut self, zip: &str) -> Result<Outcome, AppError> {
        let zip = ZipCode::parse(zip).map_err(|_| AppError::InvalidZip)?;

        self.state.reps.clear();
        tracing::info!(%zip, "looking up representatives");

        let payload = self.civic.representatives(zip.as_str()).await.map_err(|err| {
            tracing::error!(%zip, error = %err, "representative lookup failed");
            AppError::LookupFailed(err)
        })?;

        self.state.reps = normalize(&payload);
        let count = self.state.reps.len();
        tracing::info!(%zip, count, "representatives loaded");

        Ok(Outcome::LookedUp {
            zip: zip.to_string(),
            count,
        })
    }

    fn toggle_favorite(&self, rep: Representative) -> Result<Outcome, AppError> {
        let favorites = self.favorites.as_ref().ok_or(AppError::FavoritesDisabled)?;

        let name = rep.name.clone();
        let office = rep.office.clone();
        let favorite = favorites.toggle(rep)?;

        Ok(Outcome::FavoriteToggled {
            name,
            office,
            favorite,
        })
    }

    fn open_composer(&mut self, rep: Representative) -> Result<Outcome, AppError> {
        let address =
            compose::recipient_address(&rep, self.email_enabled, self.state.email_authorized)?
                .to_string();

        let outcome = Outcome::ComposerOpened {
            recipient: rep.name.clone(),
            address: address.clone(),
        };
        self.state.composer = Some(Composer {
            recipient: rep,
            address,
            draft: Draft::default(),
        });

        Ok(outcome)
    }

    fn apply_template(&mut self, id: &str) -> Result<Outcome, AppError> {
        let Some(composer) = self.state.composer.as_mut() else {
            return Ok(Outcome::NoComposer);
        };
        let template = self
            .templates
            .get(id)
            .ok_or_else(|| ComposeError::UnknownTemplate(id.to_string()))?;

        composer.draft = template.apply(&composer.recipient.name);
        Ok(Outcome::DraftUpdated(composer.draft.clone()))
    }

    async fn send(&mut self, subject: &str, body: &str) -> Result<Outcome, AppError> {
        let Some(composer) = self.state.composer.as_ref() else {
            return Ok(Outcome::NoComposer);
        };

        let sender = if self.email_enabled {
            self.sender.as_deref()
        } else {
            None
        };
        let delivery = compose::deliver(sender, &composer.recipient, subject, body).await?;

        self.state.composer = None;
        Ok(Outcome::Delivered(delivery))
    }
}
