use dioxus::prelude::*;

use crate::views::QuizView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Exam Quiz" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizView {}
            }
        }
    }
}
