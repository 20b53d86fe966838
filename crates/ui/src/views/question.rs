use dioxus::prelude::*;
use services::QuizEvent;

use crate::vm::{OptionVm, QuestionVm};

/// One question with its options. `locked` renders the options read-only.
#[component]
pub fn QuestionCard(question: QuestionVm, locked: bool, dispatch: Callback<QuizEvent>) -> Element {
    let index = question.index;
    rsx! {
        div { class: "question-card",
            h4 { "{question.label} {question.prompt}" }
            for option in question.options.iter() {
                OptionRow {
                    key: "{option.option_id}",
                    question: index,
                    option: option.clone(),
                    locked,
                    dispatch,
                }
            }
        }
    }
}

#[component]
fn OptionRow(question: usize, option: OptionVm, locked: bool, dispatch: Callback<QuizEvent>) -> Element {
    let option_id = option.option_id;
    rsx! {
        label { class: option.class(),
            input {
                r#type: "radio",
                name: "q{question}",
                value: "{option_id}",
                checked: option.checked,
                disabled: locked,
                onchange: move |_| {
                    dispatch.call(QuizEvent::SelectOption {
                        question,
                        option: option_id,
                    });
                },
            }
            "{option.text}"
        }
    }
}
