use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::{format, platform, timing};
use crate::i18n::use_localized;
use crate::site::{Section, DIRECTIONS_URL, SHARE_NOTICE_MS};

use super::engine::{DessertBuilder, WizardStep};
use super::options::Choice;

/// Outcome of the last share attempt, shown under the summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShareStatus {
    Idle,
    Copied,
    Failed,
}

#[component]
pub fn CustomBuilder() -> Element {
    let localized = use_localized();
    let copy = &localized.content().builder;

    let mut builder = use_signal(DessertBuilder::new);
    let mut share_status = use_signal(|| ShareStatus::Idle);
    // Bumped per share so an older reset timer cannot hide a newer notice.
    let mut share_generation = use_signal(|| 0_u64);

    let step = builder.read().step();
    let selection = builder.read().selection().clone();
    let score = builder.read().completion_score();
    let none = copy.none.clone();

    let base_label = selection
        .base
        .map(|base| base.label().to_string())
        .unwrap_or_else(|| "---".to_string());
    let mixins_label = if selection.mixins.is_empty() {
        none.clone()
    } else {
        selection
            .mixins
            .iter()
            .map(|mixin| mixin.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let drizzle_label = selection
        .drizzle
        .map(|drizzle| drizzle.label().to_string())
        .unwrap_or_else(|| none.clone());
    let toppings_label = if selection.toppings.is_empty() {
        none.clone()
    } else {
        selection
            .toppings
            .iter()
            .map(|topping| topping.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let share_prefix = copy.share_msg.clone();
    let on_share = move |_: MouseEvent| {
        let text = builder.read().share_text(&share_prefix);
        let generation = share_generation() + 1;
        share_generation.set(generation);
        spawn(async move {
            match platform::copy_to_clipboard(text).await {
                Ok(()) => {
                    info!("combo copied to clipboard");
                    share_status.set(ShareStatus::Copied);
                }
                Err(err) => {
                    warn!(%err, "combo could not be copied");
                    share_status.set(ShareStatus::Failed);
                }
            }
            timing::sleep_ms(SHARE_NOTICE_MS).await;
            if share_generation() == generation {
                share_status.set(ShareStatus::Idle);
            }
        });
    };

    let [base_step, mixins_step, drizzle_step, toppings_step] = &copy.steps;
    let score_label = format::format_percent(score);
    let next_label = if step.is_last() {
        copy.review.clone()
    } else {
        copy.next.clone()
    };

    rsx! {
        section { id: Section::Builder.id(), class: "section builder",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", "{copy.title}" }
                    p { class: "section__subtitle", "{copy.subtitle}" }
                }

                div { class: "builder__layout",
                    div { class: "builder__panel",
                        ol { class: "builder__steps",
                            for (candidate, label) in WizardStep::ALL.into_iter().zip(copy.steps.iter()) {
                                li {
                                    key: "{label}",
                                    class: step_class(candidate, step),
                                    button {
                                        r#type: "button",
                                        onclick: move |_| {
                                            builder.write().go_to_step(candidate.index());
                                        },
                                        span { class: "builder__step-number", {(candidate.index() + 1).to_string()} }
                                        span { class: "builder__step-label", "{label}" }
                                    }
                                }
                            }
                        }

                        div { class: "builder__options",
                            for choice in Choice::for_step(step) {
                                button {
                                    key: "{choice:?}",
                                    r#type: "button",
                                    class: option_class(selection.is_selected(choice)),
                                    aria_pressed: selection.is_selected(choice).to_string(),
                                    onclick: move |_| builder.write().choose(choice),
                                    {choice.label()}
                                }
                            }
                        }

                        div { class: "builder__nav",
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                disabled: step.is_first(),
                                onclick: move |_| {
                                    builder.write().retreat();
                                },
                                "{copy.back}"
                            }
                            button {
                                r#type: "button",
                                class: "button button--primary",
                                onclick: move |_| {
                                    builder.write().advance();
                                },
                                "{next_label}"
                            }
                        }
                    }

                    aside { class: "builder__summary",
                        h3 { class: "builder__summary-title", "{copy.creation}" }
                        dl { class: "builder__summary-list",
                            dt { "{base_step}" }
                            dd { "{base_label}" }
                            dt { "{mixins_step}" }
                            dd { "{mixins_label}" }
                            dt { "{drizzle_step}" }
                            dd { "{drizzle_label}" }
                            dt { "{toppings_step}" }
                            dd { "{toppings_label}" }
                        }

                        div { class: "builder__score",
                            div { class: "builder__score-head",
                                span { "{copy.score}" }
                                strong { "{score_label}" }
                            }
                            div { class: "builder__score-track",
                                div {
                                    class: "builder__score-fill",
                                    style: format::bar_width(f64::from(score) / 100.0),
                                }
                            }
                        }

                        div { class: "builder__actions",
                            button {
                                r#type: "button",
                                class: "button button--secondary",
                                onclick: on_share,
                                "{copy.share}"
                            }
                            a {
                                class: "button button--primary",
                                href: DIRECTIONS_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{copy.visit}"
                            }
                        }

                        match share_status() {
                            ShareStatus::Idle => rsx! {},
                            ShareStatus::Copied => rsx! {
                                p { class: "builder__notice", role: "status", "{copy.copied}" }
                            },
                            ShareStatus::Failed => rsx! {
                                p { class: "builder__notice builder__notice--error", role: "alert", "{copy.copy_failed}" }
                            },
                        }
                    }
                }
            }
        }
    }
}

fn step_class(candidate: WizardStep, current: WizardStep) -> &'static str {
    if candidate == current {
        "builder__step builder__step--active"
    } else if candidate.index() < current.index() {
        "builder__step builder__step--done"
    } else {
        "builder__step"
    }
}

fn option_class(selected: bool) -> &'static str {
    if selected {
        "builder__option builder__option--selected"
    } else {
        "builder__option"
    }
}
