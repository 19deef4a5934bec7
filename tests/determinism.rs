use admission_core::catalog::{Catalog, Institution};
use admission_core::estimation::estimate_rank;
use admission_core::matching::{
    match_institutions, InstitutionMatcher, MatchQuery, QuotaFilter, RecommendationViews,
    StateFilter,
};
use admission_core::scores::ScoreSet;
use admission_core::types::Category;

const CATALOG_JSON: &str = include_str!("fixtures/catalog.json");

#[test]
fn estimate_is_byte_identical_across_calls() {
    for (p, c, b) in [(170, 170, 340), (90, 45, 200), (0, 0, 0), (180, 180, 360)] {
        let scores = ScoreSet::new(p, c, b).unwrap();
        for category in Category::ALL {
            let first = serde_json::to_string(&estimate_rank(&scores, category)).unwrap();
            let second = serde_json::to_string(&estimate_rank(&scores, category)).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn match_is_byte_identical_across_catalog_instances() {
    let catalog1 = Catalog::from_json(CATALOG_JSON).unwrap();
    let catalog2 = Catalog::from_json(CATALOG_JSON).unwrap();
    assert_eq!(catalog1.version(), catalog2.version());

    let matcher = InstitutionMatcher::default();
    let query = MatchQuery::new(1_100, Category::OBC).unwrap();

    let json1 = serde_json::to_string_pretty(&matcher.match_catalog(&catalog1, &query)).unwrap();
    let json2 = serde_json::to_string_pretty(&matcher.match_catalog(&catalog2, &query)).unwrap();

    assert_eq!(json1, json2, "Match output is not deterministic");
}

#[test]
fn provider_order_does_not_change_result() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let mut shuffled: Vec<Institution> = catalog.institutions().to_vec();
    shuffled.rotate_left(3);
    shuffled.swap(0, 5);
    let shuffled = Catalog::new(shuffled).unwrap();

    for rank in [50, 700, 1_100, 4_000, 12_000] {
        for category in Category::ALL {
            let a = match_institutions(
                rank,
                category,
                &StateFilter::All,
                &QuotaFilter::All,
                catalog.institutions(),
            );
            let b = match_institutions(
                rank,
                category,
                &StateFilter::All,
                &QuotaFilter::All,
                shuffled.institutions(),
            );
            assert_eq!(a, b, "rank {rank} {category}");
        }
    }
}

#[test]
fn views_are_deterministic() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    let recs = match_institutions(
        2_000,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        catalog.institutions(),
    );

    let first = serde_json::to_string(&RecommendationViews::build(&recs, Some("Delhi"))).unwrap();
    let second = serde_json::to_string(&RecommendationViews::build(&recs, Some("Delhi"))).unwrap();
    assert_eq!(first, second);
}
