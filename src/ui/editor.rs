/// Listing editor page

use std::time::Duration;

use gloo_file::futures::read_as_bytes;
use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::listing_data::{
    Attachment, BulletList, ListingDraft, ScalarField, MAX_SCREENSHOTS, MINI_BLOG_WORD_LIMIT,
    SPECIAL_FEATURE_WORD_LIMIT,
};
use crate::operations::{check_selection_size, DraftAction};
use crate::submit::{submit_listing, SubmitGuard, SubmitIntent, SubmitPhase};
use crate::supabase::SupabaseClient;
use crate::ui::components::{
    BulletInputs, ScreenshotList, SectionHeader, TextAreaField, TextField, WordCounter,
};

const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn from_error(error: &EditorError) -> Notice {
        match error {
            EditorError::Validation { .. }
            | EditorError::TooManyFiles { .. }
            | EditorError::Busy => Notice::Warning(error.user_message()),
            _ => Notice::Error(error.user_message()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ListingEditorProps {
    pub config: EditorConfig,
}

#[function_component(ListingEditor)]
pub fn listing_editor(props: &ListingEditorProps) -> Html {
    let draft = use_reducer(ListingDraft::default);
    let phase = use_state(SubmitPhase::default);
    let guard = use_mut_ref(SubmitGuard::default);
    let notice = use_state(|| None::<Notice>);
    let selection_generation = use_mut_ref(|| 0u64);
    let client = use_memo(props.config.clone(), |config| SupabaseClient::new(config));
    let has_attachments = props.config.has_attachments;

    // Notices are transient
    {
        let notice = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let timeout = current.as_ref().map(|_| {
                Timeout::new(NOTICE_TIMEOUT.as_millis() as u32, move || notice.set(None))
            });
            move || drop(timeout)
        });
    }

    let on_field = {
        let dispatcher = draft.dispatcher();
        move |field: ScalarField| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |value: String| {
                dispatcher.dispatch(DraftAction::SetField(field, value));
            })
        }
    };

    let on_bullet = {
        let dispatcher = draft.dispatcher();
        move |list: BulletList| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |(index, value): (usize, String)| {
                dispatcher.dispatch(DraftAction::SetBullet(list, index, value));
            })
        }
    };

    // Screenshot selection handler
    let on_screenshots = {
        let dispatcher = draft.dispatcher();
        let notice = notice.clone();
        let selection_generation = selection_generation.clone();

        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let files = input.files().map(collect_files).unwrap_or_default();
            input.set_value("");

            if let Err(err) = check_selection_size(files.len()) {
                log::warn!("Rejected screenshot selection: {}", err);
                notice.set(Some(Notice::from_error(&err)));
                return;
            }

            let ticket = {
                let mut generation = selection_generation.borrow_mut();
                *generation += 1;
                *generation
            };

            let dispatcher = dispatcher.clone();
            let notice = notice.clone();
            let selection_generation = selection_generation.clone();
            spawn_local(async move {
                match read_attachments(files).await {
                    Ok(attachments) => {
                        // A newer selection replaced this one while reading
                        if *selection_generation.borrow() == ticket {
                            dispatcher.dispatch(DraftAction::ReplaceScreenshots(attachments));
                        }
                    }
                    Err(err) => {
                        log::error!("Could not read screenshots: {}", err);
                        notice.set(Some(Notice::from_error(&err)));
                    }
                }
            });
        })
    };

    // Save draft / publish handler
    let on_submit = {
        let draft = draft.clone();
        let phase = phase.clone();
        let guard = guard.clone();
        let notice = notice.clone();
        let client = client.clone();

        move |intent: SubmitIntent| {
            let draft = draft.clone();
            let phase = phase.clone();
            let guard = guard.clone();
            let notice = notice.clone();
            let client = client.clone();

            Callback::from(move |_: MouseEvent| {
                if let Err(err) = guard.borrow_mut().try_begin() {
                    log::warn!("Submit ignored: {}", err);
                    notice.set(Some(Notice::from_error(&err)));
                    return;
                }

                let snapshot = (*draft).clone();
                let dispatcher = draft.dispatcher();
                let phase = phase.clone();
                let guard = guard.clone();
                let notice = notice.clone();
                let client = client.clone();

                log::info!("Submitting listing {:?} ({:?})", snapshot.domain, intent);
                spawn_local(async move {
                    let result = submit_listing(&*client, &snapshot, intent, has_attachments, |next| {
                        guard.borrow_mut().advance(next.clone());
                        phase.set(next);
                    })
                    .await;

                    match result {
                        Ok(receipt) => {
                            dispatcher.dispatch(DraftAction::Reset);
                            notice.set(Some(Notice::Success(
                                receipt.intent.success_message().to_string(),
                            )));
                        }
                        Err(err) => notice.set(Some(Notice::from_error(&err))),
                    }
                });
            })
        }
    };

    let is_busy = phase.is_busy();

    html! {
        <div class="editor-page">
            <div class="editor-header">
                <h1 class="editor-title">{"Domain Editor"}</h1>
                <p class="editor-subtitle">{"Create and publish domain listings"}</p>
            </div>

            // Notifications
            if let Some(current) = (*notice).clone() {
                {match current {
                    Notice::Success(msg) => html! {
                        <Alert r#type={AlertType::Success} title={msg} inline={true}>
                        </Alert>
                    },
                    Notice::Warning(msg) => html! {
                        <Alert r#type={AlertType::Warning} title={msg} inline={true}>
                        </Alert>
                    },
                    Notice::Error(msg) => html! {
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {msg}
                        </Alert>
                    },
                }}
            }

            // Submission status
            {match &*phase {
                SubmitPhase::Uploading { done, total } => html! {
                    <div class="message-top-margin">
                        <p class="message-text">
                            {format!("Uploading screenshots ({}/{})...", done, total)}
                        </p>
                        <Progress value={phase.upload_progress().unwrap_or(0) as f64} />
                    </div>
                },
                SubmitPhase::Validating | SubmitPhase::Inserting => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Saving listing..."}</p>
                    </div>
                },
                _ => html! {}
            }}

            <fieldset class="editor-card" disabled={is_busy}>
                // Basic information
                <section class="editor-section">
                    <SectionHeader title="Basic Information" subtitle="Primary domain details" />

                    <TextField
                        id="domain"
                        label={ScalarField::Domain.label()}
                        placeholder="example.com"
                        value={draft.domain.clone()}
                        on_change={on_field(ScalarField::Domain)}
                        required={true}
                    />
                    <TextField
                        id="overview"
                        label={ScalarField::Overview.label()}
                        placeholder="A compelling description of the domain"
                        value={draft.overview.clone()}
                        on_change={on_field(ScalarField::Overview)}
                        required={true}
                    />

                    <div class="field-grid">
                        <TextField
                            id="price"
                            label={ScalarField::Price.label()}
                            placeholder="$10,000"
                            value={draft.price.clone()}
                            on_change={on_field(ScalarField::Price)}
                            required={true}
                        />
                        <TextField
                            id="domainAge"
                            label={ScalarField::DomainAge.label()}
                            input_type="number"
                            placeholder="5"
                            value={draft.domain_age.clone()}
                            on_change={on_field(ScalarField::DomainAge)}
                        />
                        <TextField
                            id="monthlyVisits"
                            label={ScalarField::MonthlyVisits.label()}
                            input_type="number"
                            placeholder="50000"
                            value={draft.monthly_visits.clone()}
                            on_change={on_field(ScalarField::MonthlyVisits)}
                        />
                    </div>

                    <div class="field-grid">
                        <TextField
                            id="seoRating"
                            label={ScalarField::SeoRating.label()}
                            placeholder="8.5/10"
                            value={draft.seo_rating.clone()}
                            on_change={on_field(ScalarField::SeoRating)}
                        />
                        if has_attachments {
                            <TextField
                                id="backlinkCounter"
                                label={ScalarField::BacklinkCounter.label()}
                                input_type="number"
                                placeholder="1200"
                                value={draft.backlink_counter.clone()}
                                on_change={on_field(ScalarField::BacklinkCounter)}
                            />
                        }
                    </div>
                </section>

                if has_attachments {
                    <section class="editor-section">
                        <SectionHeader
                            title="Screenshots"
                            subtitle={format!("Up to {} images", MAX_SCREENSHOTS)}
                        />
                        <input
                            id="screenshots"
                            type="file"
                            accept="image/*"
                            multiple={true}
                            onchange={on_screenshots}
                            class="file-input"
                        />
                        <ScreenshotList files={draft.screenshots.clone()} />
                    </section>
                }

                // About
                <section class="editor-section">
                    <SectionHeader title="About" subtitle="3-line description" />
                    <TextAreaField
                        id="about"
                        placeholder="Enter a compelling 3-line description about this domain..."
                        rows={3}
                        value={draft.about.clone()}
                        on_change={on_field(ScalarField::About)}
                    />
                </section>

                <section class="editor-section">
                    <SectionHeader title="Perfect For" subtitle="5 bullet points" />
                    <BulletInputs
                        list={BulletList::PerfectFor}
                        values={draft.bullets(BulletList::PerfectFor).clone()}
                        on_change={on_bullet(BulletList::PerfectFor)}
                    />
                </section>

                <section class="editor-section">
                    <SectionHeader title="Market Opportunity" subtitle="5 bullet points" />
                    <BulletInputs
                        list={BulletList::MarketOpportunity}
                        values={draft.bullets(BulletList::MarketOpportunity).clone()}
                        on_change={on_bullet(BulletList::MarketOpportunity)}
                    />
                </section>

                // Mini blog, counter sits in the header
                <section class="editor-section">
                    <SectionHeader
                        title={ScalarField::MiniBlog.label()}
                        subtitle={format!("Maximum {} words", MINI_BLOG_WORD_LIMIT)}
                    >
                        <WordCounter text={draft.mini_blog.clone()} limit={MINI_BLOG_WORD_LIMIT} />
                    </SectionHeader>
                    <TextAreaField
                        id="miniBlog"
                        placeholder="Write your mini blog content here..."
                        rows={8}
                        value={draft.mini_blog.clone()}
                        on_change={on_field(ScalarField::MiniBlog)}
                    />
                </section>

                <section class="editor-section">
                    <SectionHeader
                        title="Special Features"
                        subtitle={format!("Maximum {} words each", SPECIAL_FEATURE_WORD_LIMIT)}
                    />
                    <TextAreaField
                        id="feature1"
                        label={ScalarField::SpecialFeature1.label().to_string()}
                        placeholder="Describe the first special feature..."
                        value={draft.special_feature_1.clone()}
                        on_change={on_field(ScalarField::SpecialFeature1)}
                        word_limit={SPECIAL_FEATURE_WORD_LIMIT}
                    />
                    <TextAreaField
                        id="feature2"
                        label={ScalarField::SpecialFeature2.label().to_string()}
                        placeholder="Describe the second special feature..."
                        value={draft.special_feature_2.clone()}
                        on_change={on_field(ScalarField::SpecialFeature2)}
                        word_limit={SPECIAL_FEATURE_WORD_LIMIT}
                    />
                </section>

                <div class="editor-actions">
                    <Button
                        onclick={on_submit(SubmitIntent::SaveDraft)}
                        disabled={is_busy}
                        variant={ButtonVariant::Primary}
                        block={true}
                    >
                        {"💾 Save Draft"}
                    </Button>
                    <Button
                        onclick={on_submit(SubmitIntent::Publish)}
                        disabled={is_busy}
                        variant={ButtonVariant::Secondary}
                        block={true}
                    >
                        {"🚀 Publish"}
                    </Button>
                </div>
            </fieldset>
        </div>
    }
}

// Helper functions

fn collect_files(list: FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

async fn read_attachments(files: Vec<web_sys::File>) -> Result<Vec<Attachment>, EditorError> {
    let mut attachments = Vec::with_capacity(files.len());

    for raw in files {
        let file = gloo_file::File::from(raw);
        let bytes = read_as_bytes(&file)
            .await
            .map_err(|e| EditorError::FileRead {
                file_name: file.name(),
                reason: format!("{:?}", e),
            })?;
        attachments.push(Attachment::new(file.name(), file.raw_mime_type(), bytes));
    }

    Ok(attachments)
}
