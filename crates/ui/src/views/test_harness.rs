use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{AnswerOption, Exam, ExamId, OptionId, Question, QuizSettings};
use services::{QuizController, QuizEvent};
use storage::{InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    storage: Storage,
    settings: QuizSettings,
    initial_exam: Option<ExamId>,
}

impl UiApp for TestApp {
    fn storage(&self) -> Storage {
        self.storage.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn initial_exam(&self) -> Option<ExamId> {
        self.initial_exam.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Let the dom run its tasks until `duration` of tokio time has passed.
    pub async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        for _ in 0..10_000 {
            let now = tokio::time::Instant::now();
            if now >= deadline {
                break;
            }
            let _ = tokio::time::timeout(deadline - now, self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn time_left(&self) -> u32 {
        self.with_quiz(|q| q.session().time_left())
    }

    pub fn dispatch(&mut self, event: QuizEvent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    pub fn with_quiz<T>(&self, f: impl FnOnce(&QuizController) -> T) -> T {
        let quiz = self.handles.quiz();
        self.dom.in_runtime(|| f(&quiz.peek()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Catalog with `ssc` (two questions, both answered by option 2) and `bank` (no set).
pub fn sample_storage() -> Storage {
    let repo = InMemoryRepository::new();
    repo.upsert_exam(
        Exam::new(ExamId::new("ssc"), "SSC CGL", "Staff Selection Commission")
            .expect("ssc exam"),
    )
    .expect("upsert ssc");
    repo.upsert_exam(Exam::new(ExamId::new("bank"), "Bank PO", "Banking exams").expect("bank exam"))
        .expect("upsert bank");
    repo.put_questions(
        ExamId::new("ssc"),
        vec![
            Question::new(
                None,
                "Capital of India?",
                vec![
                    AnswerOption::new(OptionId::new(1), "Mumbai"),
                    AnswerOption::new(OptionId::new(2), "New Delhi"),
                ],
                OptionId::new(2),
            ),
            Question::new(
                None,
                "2 + 2 = ?",
                vec![
                    AnswerOption::new(OptionId::new(1), "3"),
                    AnswerOption::new(OptionId::new(2), "4"),
                ],
                OptionId::new(2),
            ),
        ],
    )
    .expect("put ssc questions");
    Storage::from_in_memory(repo)
}

pub fn setup_view_harness(initial_exam: Option<&str>) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        storage: sample_storage(),
        settings: QuizSettings::default(),
        initial_exam: initial_exam.map(ExamId::new),
    });
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
