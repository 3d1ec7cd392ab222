/// Data structures for the listing editor
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Number of fixed slots in each bullet list
pub const BULLET_SLOTS: usize = 5;

/// Maximum number of screenshots per submission
pub const MAX_SCREENSHOTS: usize = 2;

/// Advisory word limits shown next to the long-form fields
pub const MINI_BLOG_WORD_LIMIT: usize = 300;
pub const SPECIAL_FEATURE_WORD_LIMIT: usize = 50;

/// A file picked by the user, read into memory at selection time
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Rc<[u8]>,
}

impl Attachment {
    pub fn new(file_name: String, content_type: String, bytes: Vec<u8>) -> Attachment {
        Attachment {
            file_name,
            content_type,
            bytes: Rc::from(bytes),
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The listing being edited, held only in UI memory
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingDraft {
    pub domain: String,
    pub overview: String,
    pub price: String,
    pub domain_age: String,
    pub monthly_visits: String,
    pub seo_rating: String,
    pub backlink_counter: String,
    pub about: String,
    pub perfect_for: [String; BULLET_SLOTS],
    pub market_opportunity: [String; BULLET_SLOTS],
    pub mini_blog: String,
    pub special_feature_1: String,
    pub special_feature_2: String,
    pub screenshots: Vec<Attachment>,
}

/// Scalar (single string) fields of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Domain,
    Overview,
    Price,
    DomainAge,
    MonthlyVisits,
    SeoRating,
    BacklinkCounter,
    About,
    MiniBlog,
    SpecialFeature1,
    SpecialFeature2,
}

impl ScalarField {
    /// Label shown next to the input and in validation messages
    pub fn label(self) -> &'static str {
        match self {
            ScalarField::Domain => "Domain",
            ScalarField::Overview => "One Line Overview",
            ScalarField::Price => "Price",
            ScalarField::DomainAge => "Domain Age (years)",
            ScalarField::MonthlyVisits => "Monthly Visits",
            ScalarField::SeoRating => "SEO Rating",
            ScalarField::BacklinkCounter => "Backlink Counter",
            ScalarField::About => "About",
            ScalarField::MiniBlog => "Mini Blog Content",
            ScalarField::SpecialFeature1 => "Special Feature 1",
            ScalarField::SpecialFeature2 => "Special Feature 2",
        }
    }
}

/// The two five-slot bullet lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletList {
    PerfectFor,
    MarketOpportunity,
}

impl BulletList {
    /// Placeholder prefix for each slot ("Point 1", "Opportunity 1", ...)
    pub fn slot_placeholder(self, index: usize) -> String {
        match self {
            BulletList::PerfectFor => format!("Point {}", index + 1),
            BulletList::MarketOpportunity => format!("Opportunity {}", index + 1),
        }
    }
}

/// Row inserted into the listings table
///
/// The extended-only columns are left out of the JSON when the editor runs
/// without attachments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    pub domain: String,
    pub overview: String,
    pub price: String,
    pub domain_age: i64,
    pub monthly_visits: i64,
    pub seo_rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlink_counter: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_urls: Option<Vec<String>>,
    pub about: String,
    pub perfect_for: Vec<String>,
    pub market_opportunity: Vec<String>,
    pub mini_blog: String,
    pub special_feature_1: String,
    pub special_feature_2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(extended: bool) -> ListingRecord {
        ListingRecord {
            domain: "example.com".to_string(),
            overview: "Great domain".to_string(),
            price: "$5,000".to_string(),
            domain_age: 0,
            monthly_visits: 1000,
            seo_rating: "9/10".to_string(),
            backlink_counter: extended.then_some(12),
            screenshot_urls: extended.then(|| vec!["https://cdn/a.png".to_string()]),
            about: String::new(),
            perfect_for: vec!["A".to_string()],
            market_opportunity: vec![],
            mini_blog: String::new(),
            special_feature_1: String::new(),
            special_feature_2: String::new(),
        }
    }

    #[test]
    fn test_default_draft_is_empty() {
        let draft = ListingDraft::default();

        assert!(draft.domain.is_empty());
        assert_eq!(draft.perfect_for.len(), BULLET_SLOTS);
        assert_eq!(draft.market_opportunity.len(), BULLET_SLOTS);
        assert!(draft.perfect_for.iter().all(String::is_empty));
        assert!(draft.screenshots.is_empty());
    }

    #[test]
    fn test_record_uses_column_names() {
        let json = serde_json::to_value(create_test_record(true)).unwrap();

        assert_eq!(json["domain_age"], 0);
        assert_eq!(json["monthly_visits"], 1000);
        assert_eq!(json["backlink_counter"], 12);
        assert_eq!(json["screenshot_urls"][0], "https://cdn/a.png");
        assert_eq!(json["special_feature_1"], "");
        assert_eq!(json["perfect_for"], serde_json::json!(["A"]));
    }

    #[test]
    fn test_basic_record_omits_extended_columns() {
        let json = serde_json::to_value(create_test_record(false)).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("backlink_counter"));
        assert!(!object.contains_key("screenshot_urls"));
        assert_eq!(object.len(), 12);
    }

    #[test]
    fn test_slot_placeholders() {
        assert_eq!(BulletList::PerfectFor.slot_placeholder(0), "Point 1");
        assert_eq!(BulletList::MarketOpportunity.slot_placeholder(4), "Opportunity 5");
    }

    #[test]
    fn test_attachment_size() {
        let attachment = Attachment::new("a.png".to_string(), "image/png".to_string(), vec![1, 2, 3]);
        assert_eq!(attachment.size(), 3);
    }
}
