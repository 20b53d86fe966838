use std::time::Duration;

use quiz_core::QuizScreen;
use quiz_core::model::{ExamId, OptionId};
use services::QuizEvent;

use super::test_harness::setup_view_harness;

fn select(question: usize, option: u32) -> QuizEvent {
    QuizEvent::SelectOption {
        question,
        option: OptionId::new(option),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn catalog_lists_every_exam() {
    let harness = setup_view_harness(None);
    let html = harness.render();
    assert!(html.contains("Choose Exam Category"), "missing heading in {html}");
    assert!(html.contains("SSC CGL"), "missing ssc in {html}");
    assert!(html.contains("Banking exams"), "missing bank description in {html}");
    assert!(html.contains("Open"), "missing open button in {html}");
    assert!(
        html.contains("exam-card__description"),
        "description not styled in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn initial_exam_opens_active_screen() {
    let harness = setup_view_harness(Some("ssc"));
    let html = harness.render();
    assert!(html.contains("SSC CGL"), "missing title in {html}");
    assert!(html.contains("Time Taken: 0:00"), "missing timer in {html}");
    assert!(html.contains("Q1: Capital of India?"), "missing question in {html}");
    assert!(html.contains("Submit Exam"), "missing submit in {html}");
    assert!(!html.contains("Choose Exam Category"), "catalog still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_button_flow_reaches_results() {
    let mut harness = setup_view_harness(None);
    harness.dispatch(QuizEvent::SelectExam(ExamId::new("ssc")));
    assert_eq!(harness.with_quiz(|q| q.session().screen()), QuizScreen::Active);

    harness.dispatch(select(0, 2));
    harness.dispatch(select(1, 1));
    harness.dispatch(QuizEvent::Submit);

    let html = harness.render();
    assert!(html.contains("Exam Finished!"), "missing results in {html}");
    assert!(html.contains("Your Score: 1 / 2"), "wrong score in {html}");
    assert!(html.contains("Answered: 2 Wrong: 1"), "wrong totals in {html}");
    assert!(html.contains("option correct"), "missing correct mark in {html}");
    assert!(html.contains("option wrong"), "missing wrong mark in {html}");
    assert!(!html.contains("Submit Exam"), "submit still shown in {html}");

    let last_question = html.find("Q2: 2 + 2 = ?").expect("last question rendered");
    let go_back = html.find("Go Back").expect("go back rendered");
    assert!(last_question < go_back, "actions render before the review in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answers_are_frozen_after_submit() {
    let mut harness = setup_view_harness(Some("ssc"));
    harness.dispatch(select(0, 1));
    harness.dispatch(QuizEvent::Submit);
    harness.dispatch(select(0, 2));
    let chosen = harness.with_quiz(|q| q.session().answers().get(0));
    assert_eq!(chosen, Some(OptionId::new(1)));
    assert!(harness.with_quiz(|q| q.timer_epoch().is_none()));
}

#[tokio::test(flavor = "current_thread")]
async fn go_back_returns_to_catalog() {
    let mut harness = setup_view_harness(Some("ssc"));
    harness.dispatch(select(0, 2));
    harness.dispatch(QuizEvent::Submit);
    harness.dispatch(QuizEvent::GoBack);

    let html = harness.render();
    assert!(html.contains("Choose Exam Category"), "catalog not shown in {html}");
    assert!(harness.with_quiz(|q| q.session().answers().is_empty()));
}

#[tokio::test(flavor = "current_thread")]
async fn retry_keeps_exam_and_clears_answers() {
    let mut harness = setup_view_harness(Some("ssc"));
    harness.dispatch(select(0, 2));
    harness.dispatch(QuizEvent::Submit);
    harness.dispatch(QuizEvent::Retry);

    let html = harness.render();
    assert!(html.contains("Submit Exam"), "active screen not shown in {html}");
    assert!(html.contains("SSC CGL"), "exam lost in {html}");
    assert!(harness.with_quiz(|q| q.session().answers().is_empty()));
    assert_eq!(harness.with_quiz(|q| q.session().time_left()), 600);
}

#[tokio::test(flavor = "current_thread")]
async fn exam_without_questions_renders_empty_quiz() {
    let mut harness = setup_view_harness(Some("bank"));
    harness.dispatch(QuizEvent::Submit);
    let html = harness.render();
    assert!(html.contains("Your Score: 0 / 0"), "missing empty score in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_ticks_once_per_second_while_active() {
    let mut harness = setup_view_harness(Some("ssc"));
    assert_eq!(harness.time_left(), 600);

    harness.run_for(Duration::from_millis(3_500)).await;
    assert_eq!(harness.time_left(), 597);
    assert!(harness.render().contains("Time Taken: 0:03"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_stops_on_submit_and_restarts_on_retry() {
    let mut harness = setup_view_harness(Some("ssc"));
    harness.run_for(Duration::from_millis(2_500)).await;
    assert_eq!(harness.time_left(), 598);

    harness.dispatch(QuizEvent::Submit);
    harness.run_for(Duration::from_secs(3)).await;
    assert_eq!(harness.time_left(), 598);
    assert!(harness.render().contains("Time Taken: 0:02"));

    harness.dispatch(QuizEvent::Retry);
    assert_eq!(harness.time_left(), 600);
    harness.run_for(Duration::from_millis(2_500)).await;
    assert_eq!(harness.time_left(), 598);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn switching_exam_replaces_the_tick_source() {
    let mut harness = setup_view_harness(Some("ssc"));
    harness.run_for(Duration::from_millis(1_500)).await;
    assert_eq!(harness.time_left(), 599);

    harness.dispatch(QuizEvent::SelectExam(ExamId::new("ssc")));
    assert_eq!(harness.time_left(), 600);
    harness.run_for(Duration::from_millis(2_500)).await;
    assert_eq!(harness.time_left(), 598);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_stays_idle_after_go_back() {
    let mut harness = setup_view_harness(Some("ssc"));
    harness.run_for(Duration::from_millis(1_500)).await;
    harness.dispatch(QuizEvent::GoBack);
    harness.run_for(Duration::from_secs(3)).await;
    assert_eq!(harness.time_left(), 600);
    assert!(harness.with_quiz(|q| q.timer_epoch().is_none()));
}
