#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_net::http::Request;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use crate::{
    Outcome, Question, QuestionBank, Session, TickOutcome, demo_questions, format_clock,
    percentage,
};

/// How long the copy-blocked banner stays visible.
const COPY_WARNING_SECONDS: u64 = 3;

/// Location of the external question bank, relative to the page.
const BANK_URL: &str = "questions/bank.json";

async fn fetch_bank() -> Result<Vec<Question>, String> {
    let body = Request::get(BANK_URL)
        .send()
        .await
        .map_err(|error| error.to_string())?
        .text()
        .await
        .map_err(|error| error.to_string())?;

    QuestionBank::from_json_str(&body)
        .map(QuestionBank::into_questions)
        .map_err(|error| error.to_string())
}

fn fresh_session(questions: &[Question]) -> Option<Session> {
    let mut rng = StdRng::from_entropy();
    Session::new(&mut rng, questions, js_sys::Date::now()).ok()
}

#[component]
fn ActivePanel(
    session: Session,
    on_select: Callback<String>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
    on_jump: Callback<usize>,
) -> impl IntoView {
    let total = session.deck().len();
    let current = session.current_index();
    let answered = session.answered_count();
    let remaining = session.remaining_seconds();
    let question = session.current_question().clone();
    let chosen = session.answer(current).map(str::to_string);
    let next_label = if session.is_last() { "Submit" } else { "Next" };
    let answered_flags: Vec<bool> = (0..total).map(|index| session.answer(index).is_some()).collect();

    let options = question
        .options
        .iter()
        .map(|option| {
            let is_chosen = chosen.as_deref() == Some(option.as_str());
            let class = if is_chosen {
                "option-btn selected"
            } else {
                "option-btn"
            };
            let value = option.clone();

            view! {
                <button class=class type="button" on:click=move |_| on_select.call(value.clone())>
                    {option.clone()}
                </button>
            }
        })
        .collect_view();

    let jump_buttons = answered_flags
        .iter()
        .enumerate()
        .map(|(index, has_answer)| {
            let class = if index == current {
                "jump-btn current"
            } else if *has_answer {
                "jump-btn answered"
            } else {
                "jump-btn"
            };

            view! {
                <button class=class type="button" on:click=move |_| on_jump.call(index)>
                    {(index + 1).to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="quiz-panel">
            <div class="panel-top">
                <div class="clock">"Time Remaining: " {format_clock(remaining)}</div>
                <div class="attempted">{format!("{}/{} Attempted", answered, total)}</div>
            </div>
            <h2 class="question-title">{format!("Question {} of {}", current + 1, total)}</h2>
            <p class="question-text">{question.text.clone()}</p>
            <div class="options">{options}</div>
            <div class="panel-nav">
                <button
                    class="nav-btn"
                    type="button"
                    disabled=current == 0
                    on:click=move |_| on_prev.call(())
                >
                    "Previous"
                </button>
                <div class="jump-row">{jump_buttons}</div>
                <button class="nav-btn primary" type="button" on:click=move |_| on_next.call(())>
                    {next_label}
                </button>
            </div>
        </section>
    }
}

#[component]
fn SummaryPanel(session: Session, outcome: Outcome, on_reset: Callback<()>) -> impl IntoView {
    let tab_switches = session.tab_switches();

    let review = session
        .deck()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = session.answer(index).map(str::to_string);

            let options = question
                .options
                .iter()
                .map(|option| {
                    let is_chosen = chosen.as_deref() == Some(option.as_str());
                    let class = match (is_chosen, question.is_correct(option)) {
                        (true, true) => "review-option chosen correct",
                        (true, false) => "review-option chosen wrong",
                        (false, true) => "review-option correct",
                        (false, false) => "review-option",
                    };

                    view! { <div class=class>{option.clone()}</div> }
                })
                .collect_view();

            let explanation = (!question.explanation.is_empty()).then(|| {
                view! {
                    <p class="review-explanation">
                        <strong>"Explanation: "</strong>
                        {question.explanation.clone()}
                    </p>
                }
            });

            view! {
                <div class="review-card">
                    <h3 class="review-title">
                        {format!("Question {}: {}", index + 1, question.text)}
                    </h3>
                    <div class="review-options">{options}</div>
                    {explanation}
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="summary-panel">
            <div class="result-card">
                <h2 class="result-title">"Quiz Complete!"</h2>
                <p class="result-line">
                    {format!(
                        "Your score is {}/{} ({}% accuracy)",
                        outcome.correct,
                        outcome.total,
                        percentage(outcome.correct, outcome.total),
                    )}
                </p>
                <p class="result-line">"Time taken: " {format_clock(outcome.elapsed_seconds)}</p>
                {(tab_switches > 0).then(|| view! {
                    <p class="result-warning">
                        {format!(
                            "Suspicious activity detected: switched tabs {} times",
                            tab_switches,
                        )}
                    </p>
                })}
            </div>
            <button class="nav-btn primary" type="button" on:click=move |_| on_reset.call(())>
                "Retry Quiz"
            </button>
            <div class="review-list">{review}</div>
        </section>
    }
}

#[component]
fn App() -> impl IntoView {
    let (bank, set_bank) = create_signal::<Option<Vec<Question>>>(None);
    let (session, set_session) = create_signal::<Option<Session>>(None);
    let (copy_warning, set_copy_warning) = create_signal(false);
    let timer = store_value::<Option<IntervalHandle>>(None);

    let stop_timer = move || {
        timer.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    let start_timer = move || {
        stop_timer();

        let handle = set_interval_with_handle(
            move || {
                let mut expired = false;
                set_session.update(|slot| {
                    if let Some(active) = slot {
                        expired = active.tick(js_sys::Date::now()) == TickOutcome::Expired;
                    }
                });
                if expired {
                    stop_timer();
                }
            },
            Duration::from_secs(1),
        )
        .ok();

        timer.set_value(handle);
    };

    // Fetch the external bank once; fall back to the built-in set.
    spawn_local(async move {
        let questions = match fetch_bank().await {
            Ok(questions) => questions,
            Err(message) => {
                leptos::logging::warn!(
                    "question bank fetch failed ({message}); using the built-in demo set"
                );
                demo_questions()
            }
        };

        set_bank.set(Some(questions));
    });

    // Start the first session as soon as questions arrive.
    create_effect(move |_| {
        if let Some(questions) = bank.get() {
            if session.with_untracked(Option::is_none) {
                if let Some(fresh) = fresh_session(&questions) {
                    set_session.set(Some(fresh));
                    start_timer();
                }
            }
        }
    });

    // Integrity monitors live for the component's mounted lifetime,
    // independent of session resets.
    let visibility = window_event_listener(
        ev::Custom::<web_sys::Event>::new("visibilitychange"),
        move |_| {
            if document().hidden() {
                set_session.update(|slot| {
                    if let Some(active) = slot {
                        active.record_hidden();
                    }
                });
            }
        },
    );

    let copy_block = window_event_listener(
        ev::Custom::<web_sys::Event>::new("copy"),
        move |event| {
            event.prevent_default();
            set_copy_warning.set(true);
            set_timeout(
                move || set_copy_warning.set(false),
                Duration::from_secs(COPY_WARNING_SECONDS),
            );
        },
    );

    on_cleanup(move || {
        visibility.remove();
        copy_block.remove();
        stop_timer();
    });

    let finish_if_complete = move || {
        if session.with_untracked(|slot| slot.as_ref().is_some_and(Session::is_complete)) {
            stop_timer();
        }
    };

    let choose_option = Callback::new(move |option: String| {
        set_session.update(|slot| {
            if let Some(active) = slot {
                active.select(&option);
            }
        });
    });

    let go_previous = Callback::new(move |_: ()| {
        set_session.update(|slot| {
            if let Some(active) = slot {
                active.retreat();
            }
        });
    });

    let go_next = Callback::new(move |_: ()| {
        set_session.update(|slot| {
            if let Some(active) = slot {
                active.advance(js_sys::Date::now());
            }
        });
        finish_if_complete();
    });

    let jump_to = Callback::new(move |index: usize| {
        set_session.update(|slot| {
            if let Some(active) = slot {
                active.jump_to(index);
            }
        });
    });

    let restart = Callback::new(move |_: ()| {
        let Some(questions) = bank.get_untracked() else {
            return;
        };

        if let Some(fresh) = fresh_session(&questions) {
            set_session.set(Some(fresh));
            start_timer();
        }
    });

    view! {
        <main class="quiz-shell">
            <Show when=move || copy_warning.get()>
                <div class="copy-warning" role="alert">
                    <strong>"Warning: "</strong>
                    "Copying content is not allowed during the quiz."
                </div>
            </Show>

            {move || match session.get() {
                Some(active) => match active.outcome() {
                    Some(outcome) => view! {
                        <SummaryPanel session=active outcome=outcome on_reset=restart />
                    }
                    .into_view(),
                    None => view! {
                        <ActivePanel
                            session=active
                            on_select=choose_option
                            on_prev=go_previous
                            on_next=go_next
                            on_jump=jump_to
                        />
                    }
                    .into_view(),
                },
                None => view! {
                    <section class="placeholder-card">
                        <p class="lede">"Loading questions..."</p>
                    </section>
                }
                .into_view(),
            }}
        </main>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> });
}
