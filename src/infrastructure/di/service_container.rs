//! Service container for dependency injection
//!
//! Wires settings and the styling backend together for the CLI.

use std::sync::Arc;

use crate::application::TreeRenderer;
use crate::config::Settings;
use crate::infrastructure::traits::{ColoredStyler, Styler};

/// Container holding the shared services of one run.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Styling backend handed to every renderer
    pub styler: Arc<dyn Styler>,
}

impl ServiceContainer {
    /// Create a container with terminal colors, installing the configured color mode.
    pub fn new(settings: Settings) -> Self {
        settings.color.apply();
        Self::with_deps(settings, Arc::new(ColoredStyler))
    }

    /// Create a container with a custom styler (for testing).
    pub fn with_deps(settings: Settings, styler: Arc<dyn Styler>) -> Self {
        Self {
            settings: Arc::new(settings),
            styler,
        }
    }

    pub fn renderer(&self) -> TreeRenderer<'_> {
        TreeRenderer::new(self.styler.as_ref())
    }
}
