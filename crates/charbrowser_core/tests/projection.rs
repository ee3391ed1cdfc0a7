use charbrowser_core::{
    project, AnnotationMap, AnnotationPatch, Character, Projection, SortOrder, SpeciesFilter,
    TypeFilter, ViewParams,
};
use std::collections::HashSet;

fn names(items: &[&Character]) -> Vec<String> {
    items.iter().map(|character| character.name.clone()).collect()
}

fn flat_names(projection: Projection<'_>) -> Vec<String> {
    match projection {
        Projection::Flat(items) => names(&items),
        Projection::Grouped { .. } => panic!("expected a flat projection"),
    }
}

fn params(type_filter: TypeFilter) -> ViewParams {
    ViewParams {
        type_filter,
        ..ViewParams::default()
    }
}

fn cast() -> Vec<Character> {
    vec![
        Character::new("1", "Rick Sanchez", "Human"),
        Character::new("2", "Birdperson", "Alien"),
        Character::new("3", "Morty Smith", "Human"),
        Character::new("4", "Squanchy", "Alien"),
        Character::new("5", "Summer Smith", "human"),
    ]
}

#[test]
fn grouped_scenario_splits_favorites_from_others() {
    let items = vec![
        Character::new("1", "Rick", "Human"),
        Character::new("2", "Birdperson", "Alien"),
    ];
    let annotations = AnnotationMap::new().with_patch("1", &AnnotationPatch::favorite(true));

    let projection = project(&items, &annotations, &ViewParams::default());
    let Projection::Grouped { favorites, others } = projection else {
        panic!("the all view is grouped");
    };
    assert_eq!(names(&favorites), vec!["Rick"]);
    assert_eq!(names(&others), vec!["Birdperson"]);
}

#[test]
fn deleted_scenario_lists_only_deleted_items() {
    let items = vec![
        Character::new("1", "Rick", "Human"),
        Character::new("2", "Birdperson", "Alien"),
    ];
    let annotations = AnnotationMap::new().with_patch("2", &AnnotationPatch::deleted(true));

    let projection = project(&items, &annotations, &params(TypeFilter::Deleted));
    assert_eq!(flat_names(projection), vec!["Birdperson"]);
}

#[test]
fn deleted_items_only_appear_in_deleted_view() {
    let items = cast();
    let annotations = AnnotationMap::new()
        .with_patch("1", &AnnotationPatch::deleted(true))
        .with_patch("1", &AnnotationPatch::favorite(true))
        .with_patch("4", &AnnotationPatch::deleted(true));

    for filter in [TypeFilter::All, TypeFilter::Starred, TypeFilter::Others] {
        let projection = project(&items, &annotations, &params(filter));
        assert!(
            projection.iter().all(|character| character.id != "1" && character.id != "4"),
            "{filter} view leaked a deleted item"
        );
    }

    let deleted = project(&items, &annotations, &params(TypeFilter::Deleted));
    let ids = deleted
        .iter()
        .map(|character| character.id.as_str())
        .collect::<HashSet<_>>();
    assert_eq!(ids, HashSet::from(["1", "4"]));
}

#[test]
fn deleted_view_still_applies_species_and_search() {
    let items = cast();
    let annotations = AnnotationMap::new()
        .with_patch("1", &AnnotationPatch::deleted(true))
        .with_patch("2", &AnnotationPatch::deleted(true));

    let mut view = params(TypeFilter::Deleted);
    view.species_filter = SpeciesFilter::Exact("alien".to_string());
    assert_eq!(flat_names(project(&items, &annotations, &view)), vec!["Birdperson"]);

    view.species_filter = SpeciesFilter::All;
    view.search_term = "sanchez".to_string();
    assert_eq!(flat_names(project(&items, &annotations, &view)), vec!["Rick Sanchez"]);
}

#[test]
fn sort_ignores_case_and_reverses_for_descending() {
    let items = vec![
        Character::new("1", "Beta", "Human"),
        Character::new("2", "alpha", "Human"),
        Character::new("3", "Gamma", "Human"),
    ];

    let mut view = params(TypeFilter::Others);
    assert_eq!(
        flat_names(project(&items, &AnnotationMap::new(), &view)),
        vec!["alpha", "Beta", "Gamma"]
    );

    view.sort_order = SortOrder::Descending;
    assert_eq!(
        flat_names(project(&items, &AnnotationMap::new(), &view)),
        vec!["Gamma", "Beta", "alpha"]
    );
}

#[test]
fn sort_places_accented_names_by_their_base_letter() {
    let items = vec![
        Character::new("1", "Zed", "Human"),
        Character::new("2", "Éclair", "Human"),
        Character::new("3", "Fred", "Human"),
        Character::new("4", "Eclair", "Human"),
    ];

    let mut view = params(TypeFilter::Others);
    assert_eq!(
        flat_names(project(&items, &AnnotationMap::new(), &view)),
        vec!["Eclair", "Éclair", "Fred", "Zed"]
    );

    view.sort_order = SortOrder::Descending;
    assert_eq!(
        flat_names(project(&items, &AnnotationMap::new(), &view)),
        vec!["Zed", "Fred", "Éclair", "Eclair"]
    );
}

#[test]
fn grouped_view_covers_every_visible_item_once() {
    let items = cast();
    let annotations = AnnotationMap::new()
        .with_patch("2", &AnnotationPatch::favorite(true))
        .with_patch("5", &AnnotationPatch::favorite(true))
        .with_patch("4", &AnnotationPatch::deleted(true));
    let view = ViewParams {
        search_term: "s".to_string(),
        ..ViewParams::default()
    };

    let Projection::Grouped { favorites, others } = project(&items, &annotations, &view) else {
        panic!("the all view is grouped");
    };
    let mut seen = favorites
        .iter()
        .chain(others.iter())
        .map(|character| character.id.as_str())
        .collect::<Vec<_>>();
    seen.sort_unstable();
    assert_eq!(seen, vec!["1", "2", "3", "5"]);
    assert_eq!(names(&favorites), vec!["Birdperson", "Summer Smith"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let items = vec![
        Character::new("1", "Rick Sanchez", "Human"),
        Character::new("2", "Morty Smith", "Human"),
    ];

    for term in ["rick", "SANCHEZ", "ck San"] {
        let view = ViewParams {
            search_term: term.to_string(),
            type_filter: TypeFilter::Others,
            ..ViewParams::default()
        };
        assert_eq!(
            flat_names(project(&items, &AnnotationMap::new(), &view)),
            vec!["Rick Sanchez"],
            "term {term:?}"
        );
    }

    let view = ViewParams {
        search_term: "Morty".to_string(),
        type_filter: TypeFilter::Others,
        ..ViewParams::default()
    };
    assert_eq!(
        flat_names(project(&items, &AnnotationMap::new(), &view)),
        vec!["Morty Smith"]
    );
}

#[test]
fn species_filter_is_exact_and_case_insensitive() {
    let items = cast();
    let view = ViewParams {
        type_filter: TypeFilter::Others,
        species_filter: SpeciesFilter::Exact("HUMAN".to_string()),
        ..ViewParams::default()
    };

    assert_eq!(
        flat_names(project(&items, &AnnotationMap::new(), &view)),
        vec!["Morty Smith", "Rick Sanchez", "Summer Smith"]
    );

    let partial = ViewParams {
        species_filter: SpeciesFilter::Exact("Hum".to_string()),
        ..view
    };
    assert!(project(&items, &AnnotationMap::new(), &partial).is_empty());
}

#[test]
fn starred_and_others_split_non_deleted_items() {
    let items = cast();
    let annotations = AnnotationMap::new()
        .with_patch("3", &AnnotationPatch::favorite(true))
        .with_patch("3", &AnnotationPatch::favorite(false))
        .with_patch("1", &AnnotationPatch::favorite(true));

    assert_eq!(
        flat_names(project(&items, &annotations, &params(TypeFilter::Starred))),
        vec!["Rick Sanchez"]
    );
    assert_eq!(
        flat_names(project(&items, &annotations, &params(TypeFilter::Others))),
        vec!["Birdperson", "Morty Smith", "Squanchy", "Summer Smith"]
    );
}

#[test]
fn projection_leaves_inputs_untouched() {
    let items = cast();
    let annotations = AnnotationMap::new().with_patch("2", &AnnotationPatch::favorite(true));
    let items_before = items.clone();
    let annotations_before = annotations.clone();

    let view = ViewParams {
        sort_order: SortOrder::Descending,
        ..ViewParams::default()
    };
    let _ = project(&items, &annotations, &view);

    assert_eq!(items, items_before);
    assert_eq!(annotations, annotations_before);
}
