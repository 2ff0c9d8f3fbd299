//! Presentation: project the current state into a renderable view.
//!
//! Nothing here touches the network or validates input; it only reads the
//! snapshot handed in and the static page content.

pub mod text;

use crate::api::FaviconEntry;
use crate::fetch::RequestState;
use crate::form::FormBinder;
use crate::i18n::Translate;
use crate::preview::PreviewImage;

pub const APP_NAME: &str = "favgrab";

const FAQ_COUNT: usize = 5;

/// One FAQ entry, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Static page content supplied from outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub app_name: String,
    pub markdown_block: Option<String>,
    pub faq_title: String,
    pub faqs: Vec<Faq>,
}

impl PageContent {
    /// Standard page content: FAQ from the catalog plus an optional markdown block.
    pub fn from_catalog(tr: &dyn Translate, markdown_block: Option<String>) -> Self {
        let faqs = (1..=FAQ_COUNT)
            .map(|i| Faq {
                question: tr.t(&format!("frontend.home.faq.qa{i}.question")),
                answer: tr.t(&format!("frontend.home.faq.qa{i}.answer")),
            })
            .collect();
        Self {
            app_name: APP_NAME.to_string(),
            markdown_block,
            faq_title: tr.t("frontend.home.faq.title"),
            faqs,
        }
    }
}

/// Everything the composer reads.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub form: &'a FormBinder,
    pub state: &'a RequestState,
    pub previews: &'a [PreviewImage],
}

/// The input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    pub message: Option<String>,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub loading: bool,
}

/// Rendered lookup result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub title: String,
    pub icons: Vec<FaviconEntry>,
    /// Pretty JSON, present when no icons could be recognized in the payload.
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub heading: String,
    pub tagline: String,
    pub prompt: String,
    pub field: FieldView,
    pub error_banner: Option<String>,
    pub loading: Option<String>,
    pub results: Option<ResultsView>,
    pub previews_title: String,
    pub previews: Vec<PreviewImage>,
    pub markdown: Option<String>,
    pub faq_title: String,
    pub faqs: Vec<Faq>,
}

pub fn compose(snapshot: &Snapshot<'_>, content: &PageContent, tr: &dyn Translate) -> View {
    let fetching = snapshot.state.is_fetching();

    let results = snapshot.state.info().map(|info| {
        let icons = info.favicons();
        let raw = icons.is_empty().then(|| info.pretty());
        ResultsView {
            title: tr.t("frontend.home.results"),
            icons,
            raw,
        }
    });

    View {
        heading: content.app_name.clone(),
        tagline: tr.t("frontend.home.h1"),
        prompt: tr.t("frontend.home.sub_to_h1"),
        field: FieldView {
            value: snapshot.form.value().to_string(),
            message: snapshot.form.inline_message().map(str::to_string),
            submit_label: tr.t("frontend.home.get_favicons"),
            submit_enabled: snapshot.form.can_submit(fetching),
            loading: fetching,
        },
        error_banner: snapshot.state.error().map(|e| e.message.clone()),
        loading: fetching.then(|| tr.t("frontend.home.loading")),
        results,
        previews_title: tr.t("frontend.home.previews"),
        previews: snapshot.previews.to_vec(),
        markdown: content.markdown_block.clone(),
        faq_title: content.faq_title.clone(),
        faqs: content.faqs.clone(),
    }
}
