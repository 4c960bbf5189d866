//! In-memory catalog queries over an already-fetched university list.

use std::cmp::Ordering;

use crate::display::availability_label;
use crate::types::{HostelSummary, University};

/// Queries shorter than this return no quick-search hits.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SEARCH_HITS: usize = 6;
pub const MAX_FEATURED: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Hostel,
    University,
}

/// A quick-search suggestion with the route it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub subtitle: String,
    pub link: String,
    pub kind: HitKind,
    /// 0 when the name starts with the query, 1 otherwise.
    pub score: u8,
}

fn normalize_query(term: &str) -> String {
    term.trim().to_lowercase()
}

fn contains(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

fn score(name: &str, query: &str) -> u8 {
    if name.to_lowercase().starts_with(query) {
        0
    } else {
        1
    }
}

fn hostel_matches(hostel: &HostelSummary, query: &str) -> bool {
    contains(&hostel.name, query)
        || contains(&hostel.address, query)
        || contains(&hostel.description, query)
}

fn university_matches(university: &University, query: &str) -> bool {
    contains(&university.name, query)
        || contains(&university.code, query)
        || contains(&university.address, query)
}

/// Quick search across hostels and universities.
pub fn search(universities: &[University], term: &str) -> Vec<SearchHit> {
    let query = normalize_query(term);
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let hostel_hits = universities.iter().flat_map(|university| {
        let query = query.as_str();
        let university_hit = contains(&university.name, query);
        university
            .hostels
            .iter()
            .filter(move |hostel| university_hit || hostel_matches(hostel, query))
            .map(move |hostel| SearchHit {
                id: hostel.id,
                name: hostel.name.clone(),
                subtitle: format!(
                    "{} • {}",
                    university.name,
                    availability_label(hostel.available_rooms)
                ),
                link: format!("/hostels/{}", hostel.id),
                kind: HitKind::Hostel,
                score: score(&hostel.name, query),
            })
    });

    let university_hits = universities
        .iter()
        .filter(|university| university_matches(university, &query))
        .map(|university| SearchHit {
            id: university.id,
            name: university.name.clone(),
            subtitle: format!("{} hostels • {}", university.hostels.len(), university.code),
            link: format!("/universities/{}", university.id),
            kind: HitKind::University,
            score: score(&university.name, &query),
        });

    let mut hits: Vec<SearchHit> = hostel_hits.chain(university_hits).collect();
    hits.sort_by(|a, b| match a.score.cmp(&b.score) {
        Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        other => other,
    });
    hits.truncate(MAX_SEARCH_HITS);
    hits
}

/// Universities matching `term` on their own fields or any of their hostels.
/// A blank term keeps everything.
pub fn filter_universities<'a>(universities: &'a [University], term: &str) -> Vec<&'a University> {
    let query = normalize_query(term);
    if query.is_empty() {
        return universities.iter().collect();
    }
    universities
        .iter()
        .filter(|university| {
            university_matches(university, &query)
                || university.hostels.iter().any(|h| hostel_matches(h, &query))
        })
        .collect()
}

/// Hostels that have a cover image, in catalog order.
pub fn featured_hostels(universities: &[University]) -> Vec<&HostelSummary> {
    universities
        .iter()
        .flat_map(|university| university.hostels.iter())
        .filter(|hostel| hostel.primary_image.is_some())
        .take(MAX_FEATURED)
        .collect()
}
