//! The widget controller: the detect, resolve, fill state machine.
//!
//! The controller owns no UI and no network code of its own. It is wired at
//! mount time with a [`Geolocator`], a [`ResolverApi`], a [`FormSink`] and a
//! [`WidgetUi`], and drives them through one detection run per trigger.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error_handling::get_widget_retry_strategy;
use crate::form::{discover, fill, DiscoveredForm, FillReport, FormSink};
use crate::widget::client::ResolverApi;
use crate::widget::geolocator::{acquire, GeolocationOptions, Geolocator};
use crate::widget::messages::{Language, MessageKey, MessageKind};

/// Where a detection run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Ready for a trigger.
    Idle,
    /// Acquiring a position.
    Detecting,
    /// Waiting on the resolver.
    Resolving,
    /// Writing the address into the form.
    Filling,
    /// The run completed and the form is filled.
    Success,
    /// The run failed after all retries.
    Failed,
}

/// The widget's visual surface.
///
/// Hosts implement this over their rendering machinery; the controller calls
/// it on every state change and message.
pub trait WidgetUi {
    /// A detection run moved to `state`.
    fn state_changed(&mut self, state: WidgetState);

    /// Show `text` to the user.
    ///
    /// `auto_hide` is how long the message should stay visible; `None` means
    /// it stays until replaced.
    fn show_message(
        &mut self,
        key: MessageKey,
        kind: MessageKind,
        text: &'static str,
        auto_hide: Option<Duration>,
    );

    /// Enable or disable the trigger button.
    fn set_trigger_enabled(&mut self, enabled: bool);
}

/// Widget behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct WidgetConfig {
    /// Start a detection run right after mounting. Hosts read this through
    /// [`WidgetController::auto_detect`]; the controller itself never
    /// self-triggers.
    pub auto_detect: bool,
    /// Show user-facing messages. Disabling silences the message surface
    /// without affecting state changes.
    pub show_messages: bool,
    /// Options handed to the geolocation source.
    pub geolocation: GeolocationOptions,
    /// Retries after a failed run, on top of the initial attempt.
    pub retry_count: usize,
    /// Language used when the page does not declare one.
    pub language: Language,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            auto_detect: false,
            show_messages: true,
            geolocation: GeolocationOptions::default(),
            retry_count: crate::config::WIDGET_RETRY_COUNT,
            language: Language::Ar,
        }
    }
}

/// The mounted widget.
///
/// Wires the pipeline stages together and owns the discovered form snapshot.
/// One controller serves one page.
pub struct WidgetController<S: FormSink, U: WidgetUi> {
    geolocator: Box<dyn Geolocator>,
    resolver: Box<dyn ResolverApi>,
    form: DiscoveredForm,
    sink: S,
    ui: U,
    config: WidgetConfig,
    language: Language,
    state: WidgetState,
    busy: AtomicBool,
}

impl<S: FormSink, U: WidgetUi> WidgetController<S, U> {
    /// Mounts the widget against a checkout page.
    ///
    /// Returns `None` when the page has no recognizable shipping form; the
    /// widget stays out of pages it cannot serve. The widget language comes
    /// from the page's declared language, falling back to the configured one.
    pub fn mount(
        page_html: &str,
        geolocator: Box<dyn Geolocator>,
        resolver: Box<dyn ResolverApi>,
        sink: S,
        ui: U,
        config: WidgetConfig,
    ) -> Option<Self> {
        let form = match discover(page_html) {
            Some(form) => form,
            None => {
                log::debug!("no shipping form found; widget not mounted");
                return None;
            }
        };

        let language = form
            .page_language()
            .map(Language::from_tag)
            .unwrap_or(config.language);

        log::info!(
            "widget mounted: {} field(s) located, language '{}'",
            form.located_count(),
            language.as_str()
        );

        Some(Self {
            geolocator,
            resolver,
            form,
            sink,
            ui,
            config,
            language,
            state: WidgetState::Idle,
            busy: AtomicBool::new(false),
        })
    }

    /// Runs one detection cycle: acquire a position, resolve it, fill the
    /// form. Retries the whole cycle on failure per the configured retry
    /// count, with a fixed pause between attempts.
    ///
    /// Returns the run's terminal state. A trigger while a run is already in
    /// flight is a no-op that reports the current state.
    pub async fn trigger(&mut self) -> WidgetState {
        if self.busy.swap(true, Ordering::SeqCst) {
            log::debug!("detection already running; trigger ignored");
            return self.state;
        }
        self.ui.set_trigger_enabled(false);

        let mut outcome = self.attempt().await;
        if outcome.is_err() {
            for (retry, delay) in get_widget_retry_strategy(self.config.retry_count).enumerate() {
                tokio::time::sleep(delay).await;
                log::info!(
                    "retrying detection ({}/{})",
                    retry + 1,
                    self.config.retry_count
                );
                outcome = self.attempt().await;
                if outcome.is_ok() {
                    break;
                }
            }
        }

        let terminal = match outcome {
            Ok(report) => {
                log::info!("detection run filled {} field(s)", report.filled_count);
                self.show(MessageKey::Success);
                self.set_state(WidgetState::Success);
                WidgetState::Success
            }
            Err(key) => {
                self.show(key);
                self.set_state(WidgetState::Failed);
                WidgetState::Failed
            }
        };

        self.ui.set_trigger_enabled(true);
        // Ready for the next run; the UI keeps showing the outcome
        self.state = WidgetState::Idle;
        self.busy.store(false, Ordering::SeqCst);
        terminal
    }

    async fn attempt(&mut self) -> Result<FillReport, MessageKey> {
        self.show(MessageKey::Loading);
        self.set_state(WidgetState::Detecting);
        let position = acquire(self.geolocator.as_ref(), self.config.geolocation)
            .await
            .map_err(|e| {
                log::warn!("geolocation failed: {}", e);
                MessageKey::for_geolocation_error(e)
            })?;

        self.set_state(WidgetState::Resolving);
        let address = self
            .resolver
            .resolve(position, self.language.as_str())
            .await
            .map_err(|e| {
                log::warn!("resolution failed: {}", e);
                MessageKey::Error
            })?;

        self.set_state(WidgetState::Filling);
        Ok(fill(&self.form, &address, &mut self.sink))
    }

    fn set_state(&mut self, state: WidgetState) {
        self.state = state;
        self.ui.state_changed(state);
    }

    fn show(&mut self, key: MessageKey) {
        if !self.config.show_messages {
            return;
        }
        let kind = key.kind();
        self.ui
            .show_message(key, kind, key.text(self.language), kind.auto_hide());
    }

    /// Current readiness state. Mid-run this reports the stage in progress;
    /// between runs it reports `Idle` regardless of the last outcome.
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// The form sink, for reading back what was filled.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The UI surface.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// The language the widget speaks on this page.
    pub fn language(&self) -> Language {
        self.language
    }

    /// True when the host should start a detection run right after mounting.
    pub fn auto_detect(&self) -> bool {
        self.config.auto_detect
    }
}
