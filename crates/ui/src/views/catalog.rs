use dioxus::prelude::*;
use services::QuizEvent;

use crate::vm::ExamCardVm;

#[component]
pub fn CatalogScreen(exams: Vec<ExamCardVm>, dispatch: Callback<QuizEvent>) -> Element {
    rsx! {
        div { class: "exam-selection",
            h2 { "Choose Exam Category" }
            if exams.is_empty() {
                p { class: "exam-selection__empty", "No exams available." }
            }
            for exam in exams.iter() {
                ExamCard { key: "{exam.id}", exam: exam.clone(), dispatch }
            }
        }
    }
}

#[component]
fn ExamCard(exam: ExamCardVm, dispatch: Callback<QuizEvent>) -> Element {
    let id = exam.id.clone();
    rsx! {
        div { class: "exam-card",
            h3 { "{exam.title}" }
            p { class: "exam-card__description", "{exam.description}" }
            button {
                r#type: "button",
                onclick: move |_| dispatch.call(QuizEvent::SelectExam(id.clone())),
                "Open"
            }
        }
    }
}
