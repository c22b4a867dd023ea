use yew::prelude::*;

/// Outcome flavor of a mutation, controls the modal accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Message shown in the feedback modal after a create/update/delete call.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub title: String,
    pub message: String,
}

impl Feedback {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Feedback {
            kind: FeedbackKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Feedback {
            kind: FeedbackKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedbackModalProps {
    /// `None` renders nothing.
    pub feedback: Option<Feedback>,
    pub on_close: Callback<()>,
}

/// Success/error dialog used by every CRUD tab after a mutation.
#[function_component(FeedbackModal)]
pub fn feedback_modal(props: &FeedbackModalProps) -> Html {
    let Some(feedback) = props.feedback.clone() else {
        return Html::default();
    };

    let accent = match feedback.kind {
        FeedbackKind::Success => classes!("border-emerald-500/40", "text-emerald-700"),
        FeedbackKind::Error => classes!("border-red-500/40", "text-red-700"),
    };
    let icon = match feedback.kind {
        FeedbackKind::Success => "✔",
        FeedbackKind::Error => "✖",
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };
    let backdrop_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed", "inset-0", "z-50", "flex", "items-center",
                "justify-center", "bg-black/40"
            )}
            onclick={backdrop_close}
        >
            <div
                class={classes!(
                    "w-full", "max-w-md", "rounded-2xl", "border-2",
                    "bg-[var(--surface)]", "p-6", "shadow-2xl", accent
                )}
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class={classes!("flex", "items-center", "gap-3", "mb-3")}>
                    <span class="text-2xl" aria-hidden="true">{ icon }</span>
                    <h2 class={classes!("text-lg", "font-bold")}>{ feedback.title }</h2>
                </div>
                <p class={classes!("text-sm", "text-[var(--text)]", "whitespace-pre-wrap")}>
                    { feedback.message }
                </p>
                <div class={classes!("mt-5", "flex", "justify-end")}>
                    <button
                        type="button"
                        class={classes!(
                            "rounded-lg", "px-4", "py-2", "text-sm", "font-semibold",
                            "bg-[var(--primary)]", "text-white"
                        )}
                        onclick={close}
                    >
                        { "ಸರಿ" }
                    </button>
                </div>
            </div>
        </div>
    }
}
