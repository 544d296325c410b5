use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Share of a row that must be on screen before it animates in.
const REVEAL_THRESHOLD: f64 = 0.2;

struct ShowcaseStep {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const SHOWCASE_STEPS: &[ShowcaseStep] = &[
    ShowcaseStep {
        title: "Browse Services Near You",
        description: "See available service providers on an interactive map. Filter by category, distance, and ratings to find the perfect professional for your needs.",
        image: "/screen-home.png",
    },
    ShowcaseStep {
        title: "Choose Your Service",
        description: "Select from a wide range of home services including plumbing, electrical, cleaning, painting, and more. Each category is verified and trusted.",
        image: "/screen-register.png",
    },
    ShowcaseStep {
        title: "Book a Professional",
        description: "View detailed provider profiles with ratings, reviews, and pricing. Check availability and book instantly with transparent upfront costs.",
        image: "/screen-booking.png",
    },
    ShowcaseStep {
        title: "Track in Real-Time",
        description: "Watch your service provider's arrival in real-time. Get live updates, communicate directly, and know exactly when help will arrive.",
        image: "/screen-service.png",
    },
    ShowcaseStep {
        title: "Pay & Rate Securely",
        description: "Complete payment seamlessly through the app. Rate your experience and help others find quality service providers in your community.",
        image: "/screen-payment.png",
    },
];

/// Rows that have been on screen at least once. Rows never hide again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealedRows(BTreeSet<usize>);

impl RevealedRows {
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl Reducible for RevealedRows {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        if self.contains(index) {
            return self;
        }
        let mut next = (*self).clone();
        next.0.insert(index);
        Rc::new(next)
    }
}

pub fn row_class(index: usize, visible: bool) -> String {
    let side = if index % 2 == 0 { "row-normal" } else { "row-reverse" };
    if visible {
        format!("showcase-row {} is-visible", side)
    } else {
        format!("showcase-row {}", side)
    }
}

#[function_component(AppShowcase)]
pub fn app_showcase() -> Html {
    let revealed = use_reducer(RevealedRows::default);
    let row_refs = use_memo(
        |_| (0..SHOWCASE_STEPS.len()).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |row_refs: &Rc<Vec<NodeRef>>| {
                let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        if let Some(index) = entry
                            .target()
                            .get_attribute("data-index")
                            .and_then(|v| v.parse::<usize>().ok())
                        {
                            revealed.dispatch(index);
                        }
                    }
                }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        log::warn!("IntersectionObserver unavailable: {:?}", e);
                        None
                    }
                };

                if let Some(observer) = observer.as_ref() {
                    for row in row_refs.iter().filter_map(|r| r.cast::<Element>()) {
                        observer.observe(&row);
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            row_refs.clone(),
        );
    }

    html! {
        <section class="app-showcase">
            <div class="container">
                { SHOWCASE_STEPS.iter().enumerate().map(|(index, step)| html! {
                    <div
                        key={step.title}
                        class={row_class(index, revealed.contains(index))}
                        ref={row_refs[index].clone()}
                        data-index={index.to_string()}
                    >
                        <div class="showcase-text">
                            <span class="step-badge">{format!("Step 0{}", index + 1)}</span>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                        <div class="showcase-visual">
                            <img src={step.image} alt={step.title} />
                        </div>
                    </div>
                }).collect::<Html>() }
            </div>
            <style>
                {r#"
.app-showcase {
    padding: 6rem 0;
    background: #fff;
}
.showcase-row {
    display: flex;
    align-items: center;
    gap: 4rem;
    margin-bottom: 6rem;
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}
.showcase-row.row-reverse {
    flex-direction: row-reverse;
}
.showcase-row.is-visible {
    opacity: 1;
    transform: translateY(0);
}
.showcase-text {
    flex: 1;
}
.showcase-text h3 {
    font-size: 1.8rem;
    margin: 0.75rem 0;
}
.showcase-text p {
    color: #667085;
    line-height: 1.7;
}
.step-badge {
    display: inline-block;
    padding: 0.3rem 0.8rem;
    border-radius: 999px;
    background: rgba(255, 122, 0, 0.1);
    color: #ff7a00;
    font-weight: 600;
    font-size: 0.8rem;
}
.showcase-visual {
    flex: 1;
    display: flex;
    justify-content: center;
}
.showcase-visual img {
    max-width: 280px;
    width: 100%;
    border-radius: 32px;
    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.12);
}
@media (max-width: 768px) {
    .showcase-row, .showcase-row.row-reverse {
        flex-direction: column;
        gap: 2rem;
    }
}
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate_sides() {
        assert_eq!(row_class(0, false), "showcase-row row-normal");
        assert_eq!(row_class(1, true), "showcase-row row-reverse is-visible");
    }

    #[test]
    fn revealing_is_monotonic() {
        let rows = Rc::new(RevealedRows::default());
        let rows = rows.reduce(2);
        let rows = rows.reduce(0);
        let again = rows.clone().reduce(2);
        assert!(Rc::ptr_eq(&rows, &again));
        assert!(rows.contains(0) && rows.contains(2));
        assert!(!rows.contains(1));
    }
}
