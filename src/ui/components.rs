/// Reusable form widgets

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::listing_data::{Attachment, BulletList, BULLET_SLOTS};
use crate::operations::WordBudget;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    pub subtitle: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <div>
                <h2 class="section-title">{&props.title}</h2>
                <p class="section-subtitle">{&props.subtitle}</p>
            </div>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or("text".to_string())]
    pub input_type: String,
    #[prop_or(false)]
    pub required: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div class="field">
            <label for={props.id.clone()} class="field-label">
                {&props.label}
                if props.required {
                    <span class="field-required">{" *"}</span>
                }
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
                class="field-input"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub id: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or(4)]
    pub rows: u32,
    /// Shows a live word counter under the textarea
    #[prop_or_default]
    pub word_limit: Option<usize>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_change.emit(textarea.value());
            }
        })
    };

    html! {
        <div class="field">
            if let Some(label) = &props.label {
                <label for={props.id.clone()} class="field-label">{label}</label>
            }
            <textarea
                id={props.id.clone()}
                rows={props.rows.to_string()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
                class="field-textarea"
            />
            if let Some(limit) = props.word_limit {
                <WordCounter text={props.value.clone()} limit={limit} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WordCounterProps {
    pub text: String,
    pub limit: usize,
}

/// "n/limit words", highlighted once the advisory limit is passed
#[function_component(WordCounter)]
pub fn word_counter(props: &WordCounterProps) -> Html {
    let budget = WordBudget::measure(&props.text, props.limit);

    html! {
        <p class={classes!("word-counter", budget.is_over().then_some("word-counter-over"))}>
            {format!("{}/{} words", budget.count, budget.limit)}
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct BulletInputsProps {
    pub list: BulletList,
    pub values: [String; BULLET_SLOTS],
    pub on_change: Callback<(usize, String)>,
}

#[function_component(BulletInputs)]
pub fn bullet_inputs(props: &BulletInputsProps) -> Html {
    let list = props.list;

    html! {
        <div class="bullet-list">
            {for props.values.iter().enumerate().map(|(index, value)| {
                let on_change = props.on_change.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                        on_change.emit((index, input.value()));
                    }
                });

                html! {
                    <div key={format!("{:?}-{}", list, index)} class="bullet-row">
                        <span class="bullet-dot"></span>
                        <input
                            type="text"
                            placeholder={list.slot_placeholder(index)}
                            value={value.clone()}
                            {oninput}
                            class="field-input"
                        />
                    </div>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScreenshotListProps {
    pub files: Vec<Attachment>,
}

#[function_component(ScreenshotList)]
pub fn screenshot_list(props: &ScreenshotListProps) -> Html {
    if props.files.is_empty() {
        return html! {
            <p class="screenshot-empty">{"No screenshots selected"}</p>
        };
    }

    html! {
        <ul class="screenshot-list">
            {for props.files.iter().enumerate().map(|(index, file)| html! {
                <li key={format!("{}-{}", index, file.file_name)} class="screenshot-item">
                    <span class="screenshot-name">{&file.file_name}</span>
                    <span class="screenshot-size">{format_size(file.size())}</span>
                </li>
            })}
        </ul>
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
