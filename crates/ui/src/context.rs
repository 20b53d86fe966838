use std::sync::{Arc, Mutex};

use quiz_core::model::{ExamId, QuizSettings};
use services::QuizController;
use storage::Storage;

pub trait UiApp: Send + Sync {
    fn storage(&self) -> Storage;
    fn settings(&self) -> QuizSettings;
    fn initial_exam(&self) -> Option<ExamId>;
}

#[derive(Clone)]
pub struct AppContext {
    storage: Storage,
    settings: QuizSettings,
    initial_exam_configured: Option<ExamId>,
    initial_exam_once: Arc<Mutex<Option<ExamId>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_exam_configured = app.initial_exam();

        Self {
            storage: app.storage(),
            settings: app.settings(),
            initial_exam_once: Arc::new(Mutex::new(initial_exam_configured.clone())),
            initial_exam_configured,
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// The exam to open on launch, handed out once.
    #[must_use]
    pub fn take_initial_exam(&self) -> Option<ExamId> {
        self.initial_exam_once
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }

    /// The configured value (not the one-shot value). Useful for diagnostics/UI.
    #[must_use]
    pub fn initial_exam_configured(&self) -> Option<&ExamId> {
        self.initial_exam_configured.as_ref()
    }

    /// A fresh controller over this context's storage and settings.
    #[must_use]
    pub fn quiz_controller(&self) -> QuizController {
        QuizController::new(&self.storage, self.settings)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
