use std::collections::BTreeMap;

use admission_core::catalog::Institution;
use admission_core::matching::{
    admission_chance, match_institutions, QuotaFilter, StateFilter, CHANCE_BANDS,
};
use admission_core::types::{Category, InstitutionType, Quota};

fn institution(
    name: &str,
    location: &str,
    quota: Quota,
    cutoffs: &[(Category, u32)],
) -> Institution {
    Institution {
        name: name.to_string(),
        location: location.to_string(),
        kind: InstitutionType::Government,
        quota,
        cutoff_ranks: cutoffs.iter().copied().collect::<BTreeMap<_, _>>(),
        fees: "₹25,000/year".to_string(),
        seats: 150,
    }
}

fn general(name: &str, location: &str, cutoff: u32) -> Institution {
    institution(name, location, Quota::AllIndia, &[(Category::General, cutoff)])
}

#[test]
fn single_institution_at_ninety_percent_of_cutoff() {
    let catalog = vec![general("X", "Delhi", 1_000)];

    let result = match_institutions(
        900,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        &catalog,
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].institution.name, "X");
    assert_eq!(result[0].cutoff_rank, 1_000);
    assert_eq!(result[0].admission_chance, 75);
}

#[test]
fn chance_band_upper_bounds_are_inclusive() {
    let table = [
        (700, 95),
        (701, 85),
        (800, 85),
        (801, 75),
        (900, 75),
        (901, 65),
        (1_000, 65),
        (1_001, 50),
        (1_100, 50),
        (1_101, 35),
        (1_200, 35),
        (1_201, 25),
        (1_300, 25),
        (1_301, 15),
        (1_500, 15),
        (1_501, 5),
        (2_000, 5),
        (2_001, 0),
    ];

    for (rank, chance) in table {
        assert_eq!(admission_chance(rank, 1_000), chance, "rank {rank}");
    }
}

#[test]
fn seventy_percent_boundary_is_exact_for_awkward_cutoffs() {
    // 0.7 * cutoff is not representable exactly for these cutoffs
    let table = [
        (63, 90, 95),
        (64, 90, 85),
        (119, 170, 95),
        (120, 170, 85),
        (126, 180, 95),
        (231, 330, 95),
        (232, 330, 85),
    ];

    for (rank, cutoff, chance) in table {
        assert_eq!(
            admission_chance(rank, cutoff),
            chance,
            "rank {rank} cutoff {cutoff}"
        );
    }
}

#[test]
fn chance_bands_hold_at_every_exact_boundary() {
    for cutoff in 1..=2_000u32 {
        for (tenths, chance) in CHANCE_BANDS {
            let scaled = u64::from(cutoff) * tenths;
            if scaled % 10 == 0 {
                let rank = u32::try_from(scaled / 10).unwrap();
                assert_eq!(
                    admission_chance(rank, cutoff),
                    chance,
                    "rank {rank} cutoff {cutoff}"
                );
            }
        }
    }
}

#[test]
fn out_of_reach_institutions_are_dropped() {
    let catalog = vec![general("Near", "Delhi", 1_000), general("Far", "Delhi", 400)];

    let result = match_institutions(
        1_000,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        &catalog,
    );

    let names: Vec<&str> = result.iter().map(|r| r.institution.name.as_str()).collect();
    assert_eq!(names, vec!["Near"]);
}

#[test]
fn missing_cutoff_excludes_institution_regardless_of_rank() {
    let catalog = vec![
        institution("OBC only", "Delhi", Quota::AllIndia, &[(Category::OBC, 50_000)]),
        institution("Zero", "Delhi", Quota::AllIndia, &[(Category::General, 0)]),
    ];

    let result = match_institutions(
        1,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        &catalog,
    );

    assert!(result.is_empty());
}

#[test]
fn uses_the_cutoff_of_the_queried_category() {
    let catalog = vec![institution(
        "AIIMS",
        "Delhi",
        Quota::AllIndia,
        &[(Category::General, 50), (Category::SC, 150)],
    )];

    let result = match_institutions(
        140,
        Category::SC,
        &StateFilter::All,
        &QuotaFilter::All,
        &catalog,
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].cutoff_rank, 150);
    assert_eq!(result[0].admission_chance, 65);
}

#[test]
fn state_filter_matches_location_exactly() {
    let catalog = vec![
        general("Delhi College", "Delhi", 1_000),
        general("Pune College", "Maharashtra", 1_000),
    ];

    let state: StateFilter = "Maharashtra".parse().unwrap();
    let result = match_institutions(
        900,
        Category::General,
        &state,
        &QuotaFilter::All,
        &catalog,
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].institution.name, "Pune College");
}

#[test]
fn quota_filter_matches_quota() {
    let catalog = vec![
        institution("Central", "Delhi", Quota::AllIndia, &[(Category::General, 1_000)]),
        institution("Local", "Delhi", Quota::State, &[(Category::General, 1_000)]),
        institution("Paid", "Delhi", Quota::Management, &[(Category::General, 1_000)]),
    ];

    let quota: QuotaFilter = "State Quota".parse().unwrap();
    let result = match_institutions(
        900,
        Category::General,
        &StateFilter::All,
        &quota,
        &catalog,
    );

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].institution.name, "Local");
}

#[test]
fn all_labels_disable_filters() {
    assert_eq!("All".parse::<StateFilter>().unwrap(), StateFilter::All);
    assert_eq!("All States".parse::<StateFilter>().unwrap(), StateFilter::All);
    assert_eq!("All".parse::<QuotaFilter>().unwrap(), QuotaFilter::All);

    // For quotas "All India" is a channel, not a wildcard
    assert_eq!(
        "All India".parse::<QuotaFilter>().unwrap(),
        QuotaFilter::Only(Quota::AllIndia)
    );
    assert!("Sports".parse::<QuotaFilter>().is_err());
}

#[test]
fn sorted_by_cutoff_then_name() {
    let catalog = vec![
        general("Zeta", "Delhi", 2_000),
        general("Beta", "Delhi", 1_500),
        general("Alpha", "Delhi", 2_000),
        general("Gamma", "Delhi", 1_000),
    ];

    let result = match_institutions(
        1_200,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        &catalog,
    );

    let order: Vec<(&str, u32, u8)> = result
        .iter()
        .map(|r| (r.institution.name.as_str(), r.cutoff_rank, r.admission_chance))
        .collect();

    assert_eq!(
        order,
        vec![
            ("Gamma", 1_000, 35),
            ("Beta", 1_500, 85),
            ("Alpha", 2_000, 95),
            ("Zeta", 2_000, 95),
        ]
    );
}

#[test]
fn empty_catalog_yields_empty_result() {
    let result = match_institutions(
        500,
        Category::General,
        &StateFilter::All,
        &QuotaFilter::All,
        &[],
    );
    assert!(result.is_empty());
}
