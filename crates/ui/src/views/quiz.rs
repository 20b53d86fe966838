use dioxus::core::Task;
use dioxus::prelude::*;
use quiz_core::TICK_INTERVAL;
use services::{QuizController, QuizEvent, QuizOutcome};
use tracing::{debug, warn};

use super::active::ActiveQuizScreen;
use super::catalog::CatalogScreen;
use super::results::ResultsScreen;
use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizPageVm, build_page};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut error = use_signal(|| None::<ViewError>);
    let mut quiz = use_signal(|| {
        let mut controller = ctx.quiz_controller();
        debug!(
            time_limit_secs = ctx.settings().time_limit_secs(),
            "quiz controller created"
        );
        if let Some(exam) = ctx.take_initial_exam() {
            if let Err(err) = controller.dispatch(QuizEvent::SelectExam(exam)) {
                warn!(error = %err, "failed to open initial exam");
            }
        }
        controller
    });

    let dispatch = use_callback(move |event: QuizEvent| {
        let result = quiz.write().dispatch(event);
        match result {
            Ok(QuizOutcome::Submitted { forced: true }) => {
                debug!("time limit reached");
                error.set(None);
            }
            Ok(_) => error.set(None),
            Err(err) => {
                warn!(error = %err, "quiz event failed");
                error.set(Some(ViewError::Unknown));
            }
        }
    });

    // One tick source per countdown epoch. A new epoch (exam switch, retry) or a
    // stopped countdown (submit, go back) cancels the previous task first.
    let timer_epoch = use_memo(move || quiz.read().timer_epoch());
    let mut ticker = use_signal(|| None::<Task>);
    use_effect(move || {
        let epoch = timer_epoch();
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        let Some(epoch) = epoch else {
            return;
        };
        let task = spawn(async move {
            loop {
                tokio::time::sleep(TICK_INTERVAL).await;
                if quiz.peek().timer_epoch() != Some(epoch) {
                    break;
                }
                dispatch.call(QuizEvent::Tick(epoch));
            }
        });
        ticker.set(Some(task));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, quiz);
            }
        }
    }

    let page = build_page(&quiz.read());
    let error_message = error().map(ViewError::message);

    rsx! {
        if let Some(message) = error_message {
            p { class: "error", "{message}" }
        }
        match page {
            Ok(QuizPageVm::Catalog { exams }) => rsx! {
                CatalogScreen { exams, dispatch }
            },
            Ok(QuizPageVm::Active { title, time_taken, questions }) => rsx! {
                div { class: "quiz-container",
                    QuizHeader { title, time_taken }
                    ActiveQuizScreen { questions, dispatch }
                }
            },
            Ok(QuizPageVm::Results { title, time_taken, results, questions }) => rsx! {
                div { class: "quiz-container",
                    QuizHeader { title, time_taken }
                    ResultsScreen { results, questions, dispatch }
                }
            },
            Err(err) => {
                warn!(error = %err, "failed to build quiz page");
                let message = ViewError::Unknown.message();
                rsx! {
                    p { class: "error", "{message}" }
                }
            }
        }
    }
}

#[component]
fn QuizHeader(title: String, time_taken: String) -> Element {
    rsx! {
        h1 { "{title}" }
        div { class: "timer", "{time_taken}" }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizEvent>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizController>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizEvent>, quiz: Signal<QuizController>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizEvent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizController> {
        (*self.quiz.borrow()).expect("quiz signal registered")
    }
}
