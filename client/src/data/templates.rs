//! In-memory template catalog for the marketplace pages.
//!
//! There is no persistence behind the marketplace; the catalog is a static
//! list and the browse page filters and sorts it locally.

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;

/// Document category a template belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Resume,
    Invoice,
    Letter,
    Proposal,
    Contract,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Resume,
        Self::Invoice,
        Self::Letter,
        Self::Proposal,
        Self::Contract,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Invoice => "Invoice",
            Self::Letter => "Letter",
            Self::Proposal => "Proposal",
            Self::Contract => "Contract",
        }
    }

    /// Parse a select-box value back into a category. `"all"` and anything
    /// unrecognized mean no category filter.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Resume" => Some(Self::Resume),
            "Invoice" => Some(Self::Invoice),
            "Letter" => Some(Self::Letter),
            "Proposal" => Some(Self::Proposal),
            "Contract" => Some(Self::Contract),
            _ => None,
        }
    }
}

/// A marketplace template.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    /// Stable identifier used in `/templates/{id}` routes.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub creator_name: &'static str,
    /// Average rating out of 5.
    pub average_rating: f64,
    pub number_of_ratings: u32,
    pub downloads: u32,
    pub tags: &'static [&'static str],
}

/// Sort orders offered by the browse page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    PopularityDesc,
    PopularityAsc,
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "popularity_desc" => Some(Self::PopularityDesc),
            "popularity_asc" => Some(Self::PopularityAsc),
            "rating_desc" => Some(Self::RatingDesc),
            "rating_asc" => Some(Self::RatingAsc),
            "name_asc" => Some(Self::NameAsc),
            "name_desc" => Some(Self::NameDesc),
            _ => None,
        }
    }
}

/// The full catalog.
pub fn catalog() -> Vec<Template> {
    vec![
        Template {
            id: "tpl-modern-resume",
            name: "Modern Professional Resume",
            description: "Clean two-column resume with a skills sidebar, suited for tech and product roles.",
            category: Category::Resume,
            creator_name: "Ava Lindqvist",
            average_rating: 4.8,
            number_of_ratings: 214,
            downloads: 12840,
            tags: &["modern", "two-column", "tech"],
        },
        Template {
            id: "tpl-classic-resume",
            name: "Classic Chronological Resume",
            description: "Traditional single-column resume favored by conservative industries.",
            category: Category::Resume,
            creator_name: "Marcus Webb",
            average_rating: 4.5,
            number_of_ratings: 167,
            downloads: 9310,
            tags: &["classic", "ats-friendly"],
        },
        Template {
            id: "tpl-freelance-invoice",
            name: "Freelancer Invoice",
            description: "Hourly-rate invoice with itemized lines, tax field, and payment terms.",
            category: Category::Invoice,
            creator_name: "Ava Lindqvist",
            average_rating: 4.7,
            number_of_ratings: 98,
            downloads: 7225,
            tags: &["freelance", "hourly", "tax"],
        },
        Template {
            id: "tpl-agency-invoice",
            name: "Agency Retainer Invoice",
            description: "Monthly retainer invoice with project breakdown sections.",
            category: Category::Invoice,
            creator_name: "Studio North",
            average_rating: 4.2,
            number_of_ratings: 41,
            downloads: 2980,
            tags: &["agency", "retainer"],
        },
        Template {
            id: "tpl-cover-letter",
            name: "Tailored Cover Letter",
            description: "Three-paragraph cover letter frame with role-specific hooks.",
            category: Category::Letter,
            creator_name: "Marcus Webb",
            average_rating: 4.6,
            number_of_ratings: 132,
            downloads: 8640,
            tags: &["cover-letter", "job-search"],
        },
        Template {
            id: "tpl-resignation-letter",
            name: "Graceful Resignation Letter",
            description: "Short, professional resignation letter with notice-period wording.",
            category: Category::Letter,
            creator_name: "Priya Shah",
            average_rating: 4.4,
            number_of_ratings: 56,
            downloads: 3475,
            tags: &["resignation", "formal"],
        },
        Template {
            id: "tpl-project-proposal",
            name: "Project Proposal Deck",
            description: "Scope, timeline, and budget proposal for client projects.",
            category: Category::Proposal,
            creator_name: "Studio North",
            average_rating: 4.9,
            number_of_ratings: 77,
            downloads: 5120,
            tags: &["proposal", "budget", "timeline"],
        },
        Template {
            id: "tpl-service-contract",
            name: "Service Agreement",
            description: "General services contract with deliverables and payment schedule clauses.",
            category: Category::Contract,
            creator_name: "Priya Shah",
            average_rating: 4.3,
            number_of_ratings: 63,
            downloads: 4095,
            tags: &["contract", "services", "legal"],
        },
    ]
}

/// Look up a template by route id.
pub fn find(id: &str) -> Option<Template> {
    catalog().into_iter().find(|t| t.id == id)
}

/// Case-insensitive search over name, description, and tags, combined with
/// an optional category filter. `None` category admits every template.
pub fn filter_templates(
    templates: &[Template],
    search: &str,
    category: Option<Category>,
) -> Vec<Template> {
    let needle = search.trim().to_lowercase();
    templates
        .iter()
        .filter(|t| {
            let matches_search = needle.is_empty()
                || t.name.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            let matches_category = category.is_none_or(|c| t.category == c);
            matches_search && matches_category
        })
        .cloned()
        .collect()
}

/// Stable sort by the selected key. Popularity means download count.
pub fn sort_templates(templates: &mut [Template], key: SortKey) {
    match key {
        SortKey::PopularityDesc => templates.sort_by(|a, b| b.downloads.cmp(&a.downloads)),
        SortKey::PopularityAsc => templates.sort_by(|a, b| a.downloads.cmp(&b.downloads)),
        SortKey::RatingDesc => {
            templates.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
        }
        SortKey::RatingAsc => {
            templates.sort_by(|a, b| a.average_rating.total_cmp(&b.average_rating));
        }
        SortKey::NameAsc => templates.sort_by(|a, b| a.name.cmp(b.name)),
        SortKey::NameDesc => templates.sort_by(|a, b| b.name.cmp(a.name)),
    }
}
