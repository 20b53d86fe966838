use dioxus::prelude::*;
use services::QuizEvent;

use super::question::QuestionCard;
use crate::vm::{QuestionVm, ResultsVm};

#[component]
pub fn ResultsScreen(
    results: ResultsVm,
    questions: Vec<QuestionVm>,
    dispatch: Callback<QuizEvent>,
) -> Element {
    rsx! {
        div { class: "results",
            h2 { "Exam Finished!" }
            p { "Your Score: {results.score} / {results.total_questions}" }
            p { "Answered: {results.answered} Wrong: {results.wrong}" }
        }
        for question in questions.iter() {
            QuestionCard { key: "{question.index}", question: question.clone(), locked: true, dispatch }
        }
        div { class: "results__actions",
            button {
                r#type: "button",
                onclick: move |_| dispatch.call(QuizEvent::GoBack),
                "Go Back"
            }
            button {
                r#type: "button",
                onclick: move |_| dispatch.call(QuizEvent::Retry),
                "Retry"
            }
        }
    }
}
