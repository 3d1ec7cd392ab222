/// Draft operations: field updates, validation and record building
use std::rc::Rc;

use yew::functional::Reducible;

use crate::error::EditorError;
use crate::listing_data::{
    Attachment, BulletList, ListingDraft, ListingRecord, ScalarField, BULLET_SLOTS,
    MAX_SCREENSHOTS,
};
use crate::text::{is_blank, non_blank, parse_int_prefix, word_count};

/// Fields that must be filled in before anything is sent
pub const REQUIRED_FIELDS: [ScalarField; 3] =
    [ScalarField::Domain, ScalarField::Overview, ScalarField::Price];

impl ListingDraft {
    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Domain => &self.domain,
            ScalarField::Overview => &self.overview,
            ScalarField::Price => &self.price,
            ScalarField::DomainAge => &self.domain_age,
            ScalarField::MonthlyVisits => &self.monthly_visits,
            ScalarField::SeoRating => &self.seo_rating,
            ScalarField::BacklinkCounter => &self.backlink_counter,
            ScalarField::About => &self.about,
            ScalarField::MiniBlog => &self.mini_blog,
            ScalarField::SpecialFeature1 => &self.special_feature_1,
            ScalarField::SpecialFeature2 => &self.special_feature_2,
        }
    }

    fn field_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Domain => &mut self.domain,
            ScalarField::Overview => &mut self.overview,
            ScalarField::Price => &mut self.price,
            ScalarField::DomainAge => &mut self.domain_age,
            ScalarField::MonthlyVisits => &mut self.monthly_visits,
            ScalarField::SeoRating => &mut self.seo_rating,
            ScalarField::BacklinkCounter => &mut self.backlink_counter,
            ScalarField::About => &mut self.about,
            ScalarField::MiniBlog => &mut self.mini_blog,
            ScalarField::SpecialFeature1 => &mut self.special_feature_1,
            ScalarField::SpecialFeature2 => &mut self.special_feature_2,
        }
    }

    pub fn bullets(&self, list: BulletList) -> &[String; BULLET_SLOTS] {
        match list {
            BulletList::PerfectFor => &self.perfect_for,
            BulletList::MarketOpportunity => &self.market_opportunity,
        }
    }

    /// Copy of the draft with one scalar field replaced
    pub fn with_field(&self, field: ScalarField, value: String) -> ListingDraft {
        let mut next = self.clone();
        *next.field_mut(field) = value;
        next
    }

    /// Copy of the draft with one bullet slot replaced
    ///
    /// Out-of-range indices leave the draft untouched.
    pub fn with_bullet(&self, list: BulletList, index: usize, value: String) -> ListingDraft {
        let mut next = self.clone();
        let slots = match list {
            BulletList::PerfectFor => &mut next.perfect_for,
            BulletList::MarketOpportunity => &mut next.market_opportunity,
        };

        match slots.get_mut(index) {
            Some(slot) => *slot = value,
            None => log::warn!("Ignoring update to {:?} slot {}", list, index),
        }
        next
    }

    /// Copy of the draft with the screenshot selection replaced
    pub fn with_screenshots(&self, files: Vec<Attachment>) -> Result<ListingDraft, EditorError> {
        check_selection_size(files.len())?;
        Ok(ListingDraft {
            screenshots: files,
            ..self.clone()
        })
    }
}

/// Reject oversize selections before any file gets read
pub fn check_selection_size(selected: usize) -> Result<(), EditorError> {
    if selected > MAX_SCREENSHOTS {
        Err(EditorError::TooManyFiles {
            selected,
            max: MAX_SCREENSHOTS,
        })
    } else {
        Ok(())
    }
}

/// Updates dispatched by the editor inputs
#[derive(Debug, Clone, PartialEq)]
pub enum DraftAction {
    SetField(ScalarField, String),
    SetBullet(BulletList, usize, String),
    ReplaceScreenshots(Vec<Attachment>),
    Reset,
}

impl Reducible for ListingDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: DraftAction) -> Rc<Self> {
        match action {
            DraftAction::SetField(field, value) => Rc::new(self.with_field(field, value)),
            DraftAction::SetBullet(list, index, value) => {
                Rc::new(self.with_bullet(list, index, value))
            }
            DraftAction::ReplaceScreenshots(files) => match self.with_screenshots(files) {
                Ok(next) => Rc::new(next),
                Err(e) => {
                    log::warn!("Keeping previous screenshots: {}", e);
                    self
                }
            },
            DraftAction::Reset => Rc::new(ListingDraft::default()),
        }
    }
}

/// Check the required fields, reporting every missing one in form order
pub fn validate_required(draft: &ListingDraft) -> Result<(), EditorError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| is_blank(draft.field(**field)))
        .map(|field| field.label())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EditorError::Validation { missing })
    }
}

/// Turn a draft into the row that gets inserted
///
/// `screenshot_urls` must already be in upload order. With attachments
/// disabled the backlink counter and screenshot columns are left out.
pub fn build_record(
    draft: &ListingDraft,
    screenshot_urls: Vec<String>,
    has_attachments: bool,
) -> ListingRecord {
    ListingRecord {
        domain: draft.domain.clone(),
        overview: draft.overview.clone(),
        price: draft.price.clone(),
        domain_age: parse_int_prefix(&draft.domain_age),
        monthly_visits: parse_int_prefix(&draft.monthly_visits),
        seo_rating: draft.seo_rating.clone(),
        backlink_counter: has_attachments.then(|| parse_int_prefix(&draft.backlink_counter)),
        screenshot_urls: has_attachments.then_some(screenshot_urls),
        about: draft.about.clone(),
        perfect_for: non_blank(&draft.perfect_for),
        market_opportunity: non_blank(&draft.market_opportunity),
        mini_blog: draft.mini_blog.clone(),
        special_feature_1: draft.special_feature_1.clone(),
        special_feature_2: draft.special_feature_2.clone(),
    }
}

/// Live word count against an advisory limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBudget {
    pub count: usize,
    pub limit: usize,
}

impl WordBudget {
    pub fn measure(text: &str, limit: usize) -> WordBudget {
        WordBudget {
            count: word_count(text),
            limit,
        }
    }

    pub fn is_over(&self) -> bool {
        self.count > self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing_data::{MINI_BLOG_WORD_LIMIT, SPECIAL_FEATURE_WORD_LIMIT};

    fn create_test_attachment(name: &str) -> Attachment {
        Attachment::new(name.to_string(), "image/png".to_string(), vec![0, 1, 2])
    }

    fn create_valid_draft() -> ListingDraft {
        ListingDraft::default()
            .with_field(ScalarField::Domain, "example.com".to_string())
            .with_field(ScalarField::Overview, "Great domain".to_string())
            .with_field(ScalarField::Price, "$5,000".to_string())
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let draft = ListingDraft::default();
        let next = draft.with_field(ScalarField::SeoRating, "8.5/10".to_string());

        assert_eq!(next.seo_rating, "8.5/10");
        assert!(draft.seo_rating.is_empty());
    }

    #[test]
    fn test_with_bullet_replaces_single_slot() {
        let draft = ListingDraft::default()
            .with_bullet(BulletList::PerfectFor, 1, "Startups".to_string())
            .with_bullet(BulletList::PerfectFor, 3, "Agencies".to_string());

        assert_eq!(draft.perfect_for, ["", "Startups", "", "Agencies", ""].map(String::from));
        assert!(draft.market_opportunity.iter().all(String::is_empty));
    }

    #[test]
    fn test_with_bullet_out_of_range_is_ignored() {
        let draft = ListingDraft::default();
        let next = draft.with_bullet(BulletList::MarketOpportunity, BULLET_SLOTS, "x".to_string());

        assert_eq!(next, draft);
    }

    #[test]
    fn test_with_screenshots_replaces_selection() {
        let draft = ListingDraft::default()
            .with_screenshots(vec![create_test_attachment("a.png")])
            .unwrap()
            .with_screenshots(vec![create_test_attachment("b.png"), create_test_attachment("c.png")])
            .unwrap();

        let names: Vec<&str> = draft.screenshots.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "c.png"]);
    }

    #[test]
    fn test_too_many_screenshots_keeps_previous() {
        let draft = ListingDraft::default()
            .with_screenshots(vec![create_test_attachment("a.png")])
            .unwrap();

        let result = draft.with_screenshots(vec![
            create_test_attachment("b.png"),
            create_test_attachment("c.png"),
            create_test_attachment("d.png"),
        ]);

        assert_eq!(result, Err(EditorError::TooManyFiles { selected: 3, max: 2 }));
        assert_eq!(draft.screenshots.len(), 1);
        assert_eq!(draft.screenshots[0].file_name, "a.png");
    }

    #[test]
    fn test_reducer_rejects_oversize_selection() {
        let draft = Rc::new(
            ListingDraft::default()
                .with_screenshots(vec![create_test_attachment("a.png")])
                .unwrap(),
        );
        let files = vec![
            create_test_attachment("b.png"),
            create_test_attachment("c.png"),
            create_test_attachment("d.png"),
        ];

        let next = draft.clone().reduce(DraftAction::ReplaceScreenshots(files));

        assert!(Rc::ptr_eq(&draft, &next));
    }

    #[test]
    fn test_reducer_reset() {
        let draft = Rc::new(
            create_valid_draft().with_bullet(BulletList::PerfectFor, 0, "A".to_string()),
        );

        let next = draft.reduce(DraftAction::Reset);

        assert_eq!(*next, ListingDraft::default());
    }

    #[test]
    fn test_validate_required_ok() {
        assert_eq!(validate_required(&create_valid_draft()), Ok(()));
    }

    #[test]
    fn test_validate_required_whitespace_only() {
        let draft = create_valid_draft()
            .with_field(ScalarField::Overview, "   ".to_string())
            .with_field(ScalarField::Price, String::new());

        assert_eq!(
            validate_required(&draft),
            Err(EditorError::Validation {
                missing: vec!["One Line Overview", "Price"]
            })
        );
    }

    #[test]
    fn test_build_record_coerces_and_filters() {
        let draft = create_valid_draft()
            .with_field(ScalarField::DomainAge, "abc".to_string())
            .with_field(ScalarField::MonthlyVisits, "1000".to_string())
            .with_field(ScalarField::BacklinkCounter, "7".to_string())
            .with_bullet(BulletList::PerfectFor, 0, "First".to_string())
            .with_bullet(BulletList::PerfectFor, 2, "  ".to_string())
            .with_bullet(BulletList::PerfectFor, 3, "Second".to_string());

        let record = build_record(&draft, vec!["https://cdn/1.png".to_string()], true);

        assert_eq!(record.domain_age, 0);
        assert_eq!(record.monthly_visits, 1000);
        assert_eq!(record.backlink_counter, Some(7));
        assert_eq!(record.perfect_for, vec!["First".to_string(), "Second".to_string()]);
        assert!(record.market_opportunity.is_empty());
        assert_eq!(record.screenshot_urls, Some(vec!["https://cdn/1.png".to_string()]));
    }

    #[test]
    fn test_build_record_without_attachments() {
        let draft = create_valid_draft().with_field(ScalarField::BacklinkCounter, "7".to_string());

        let record = build_record(&draft, Vec::new(), false);

        assert_eq!(record.backlink_counter, None);
        assert_eq!(record.screenshot_urls, None);
    }

    #[test]
    fn test_word_budget_is_advisory() {
        let over = WordBudget::measure(&"word ".repeat(51), SPECIAL_FEATURE_WORD_LIMIT);
        let under = WordBudget::measure("a few words", MINI_BLOG_WORD_LIMIT);

        assert_eq!(over.count, 51);
        assert!(over.is_over());
        assert_eq!(under.count, 3);
        assert!(!under.is_over());
    }
}
