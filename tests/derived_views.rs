use admission_core::catalog::Catalog;
use admission_core::matching::{
    match_institutions, ChanceBand, QuotaFilter, RecommendationViews, StateFilter,
};
use admission_core::types::{Category, Quota, Recommendation};

const CATALOG_JSON: &str = include_str!("fixtures/catalog.json");

fn names(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter()
        .map(|r| r.institution.name.split(',').next().unwrap_or_default())
        .collect()
}

fn recommendations() -> Vec<Recommendation> {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    match_institutions(
        1_100,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        catalog.institutions(),
    )
}

#[test]
fn chance_bands_partition_in_list_order() {
    let recs = recommendations();
    let views = RecommendationViews::build(&recs, None);

    assert_eq!(
        names(&views.high),
        vec![
            "Lady Hardinge Medical College",
            "Bangalore Medical College",
            "Kasturba Medical College (KMC)",
        ]
    );
    assert_eq!(
        names(&views.good),
        vec![
            "Government Medical College",
            "St. John's Medical College",
            "Grant Medical College",
        ]
    );
    assert!(views.moderate.is_empty());
    assert!(views.band(ChanceBand::Low).is_empty());
}

#[test]
fn type_views() {
    let views = RecommendationViews::build(&recommendations(), None);

    assert_eq!(views.government.len(), 5);
    assert_eq!(names(&views.private), vec!["St. John's Medical College"]);
    assert_eq!(names(&views.deemed), vec!["Kasturba Medical College (KMC)"]);
}

#[test]
fn quota_views() {
    let views = RecommendationViews::build(&recommendations(), None);

    assert_eq!(
        names(&views.by_quota[&Quota::State]),
        vec![
            "King George's Medical University",
            "Government Medical College",
            "Grant Medical College",
            "Bangalore Medical College",
        ]
    );
    assert_eq!(names(&views.by_quota[&Quota::AllIndia]), vec!["Lady Hardinge Medical College"]);
    assert_eq!(names(&views.by_quota[&Quota::NRI]), vec!["St. John's Medical College"]);
    assert_eq!(
        names(&views.by_quota[&Quota::Management]),
        vec!["Kasturba Medical College (KMC)"]
    );
}

#[test]
fn home_state_view() {
    let recs = recommendations();

    let views = RecommendationViews::build(&recs, Some("Karnataka"));
    assert_eq!(
        names(&views.home_state),
        vec![
            "St. John's Medical College",
            "Bangalore Medical College",
            "Kasturba Medical College (KMC)",
        ]
    );

    let without_home = RecommendationViews::build(&recs, None);
    assert!(without_home.home_state.is_empty());
}

#[test]
fn band_boundaries() {
    assert_eq!(ChanceBand::of(95), ChanceBand::High);
    assert_eq!(ChanceBand::of(70), ChanceBand::High);
    assert_eq!(ChanceBand::of(69), ChanceBand::Good);
    assert_eq!(ChanceBand::of(40), ChanceBand::Good);
    assert_eq!(ChanceBand::of(39), ChanceBand::Moderate);
    assert_eq!(ChanceBand::of(20), ChanceBand::Moderate);
    assert_eq!(ChanceBand::of(15), ChanceBand::Low);
}

#[test]
fn empty_list_yields_empty_views() {
    let views = RecommendationViews::build(&[], Some("Delhi"));
    assert_eq!(views, RecommendationViews::default());
}
