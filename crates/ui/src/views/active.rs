use dioxus::prelude::*;
use services::QuizEvent;

use super::question::QuestionCard;
use crate::vm::QuestionVm;

#[component]
pub fn ActiveQuizScreen(questions: Vec<QuestionVm>, dispatch: Callback<QuizEvent>) -> Element {
    rsx! {
        for question in questions.iter() {
            QuestionCard { key: "{question.index}", question: question.clone(), locked: false, dispatch }
        }
        button {
            class: "submit-btn",
            r#type: "button",
            onclick: move |_| dispatch.call(QuizEvent::Submit),
            "Submit Exam"
        }
    }
}
