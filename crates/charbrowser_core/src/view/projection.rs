//! Filter, group and sort pipeline for list views.
//!
//! # Responsibility
//! - Derive the display list from raw items, annotations and view params.
//!
//! # Invariants
//! - Deleted-state partition runs before every other filter.
//! - `TypeFilter::All` yields favorites and others; other filters yield one
//!   flat list.
//! - Sorting is stable, so equal names keep their input order.

use super::collate::compare_names;
use super::params::{SortOrder, TypeFilter, ViewParams};
use crate::model::annotation::{effective_annotation, AnnotationMap};
use crate::model::character::Character;
use std::cmp::Ordering;

/// Ordered display groups borrowed from the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection<'a> {
    Grouped {
        favorites: Vec<&'a Character>,
        others: Vec<&'a Character>,
    },
    Flat(Vec<&'a Character>),
}

impl<'a> Projection<'a> {
    /// Every projected item in display order (favorites before others).
    pub fn iter(&self) -> impl Iterator<Item = &'a Character> + '_ {
        let (first, second): (&[&'a Character], &[&'a Character]) = match self {
            Self::Grouped { favorites, others } => (favorites.as_slice(), others.as_slice()),
            Self::Flat(items) => (items.as_slice(), &[]),
        };
        first.iter().chain(second.iter()).copied()
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Grouped { favorites, others } => favorites.len() + others.len(),
            Self::Flat(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Projects `items` through the annotation overlay and `params`.
pub fn project<'a>(
    items: &'a [Character],
    annotations: &AnnotationMap,
    params: &ViewParams,
) -> Projection<'a> {
    let search = params.search_term.to_lowercase();

    let filtered = items
        .iter()
        .filter(|character| {
            let annotation = effective_annotation(annotations, &character.id);

            let in_partition = if params.type_filter == TypeFilter::Deleted {
                annotation.deleted
            } else {
                !annotation.deleted
            };
            if !in_partition {
                return false;
            }

            let type_match = match params.type_filter {
                TypeFilter::Starred => annotation.favorite,
                TypeFilter::Others => !annotation.favorite,
                TypeFilter::All | TypeFilter::Deleted => true,
            };

            type_match
                && params.species_filter.matches(&character.species)
                && character.name.to_lowercase().contains(&search)
        })
        .collect::<Vec<_>>();

    if params.type_filter != TypeFilter::All {
        return Projection::Flat(sorted(filtered, params.sort_order));
    }

    let (favorites, others): (Vec<_>, Vec<_>) = filtered
        .into_iter()
        .partition(|character| effective_annotation(annotations, &character.id).favorite);

    Projection::Grouped {
        favorites: sorted(favorites, params.sort_order),
        others: sorted(others, params.sort_order),
    }
}

fn sorted(mut group: Vec<&Character>, order: SortOrder) -> Vec<&Character> {
    group.sort_by(|left, right| directed(compare_names(&left.name, &right.name), order));
    group
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::{project, Projection};
    use crate::model::annotation::{AnnotationMap, AnnotationPatch};
    use crate::model::character::Character;
    use crate::view::params::{SortOrder, TypeFilter, ViewParams};

    fn names(items: &[&Character]) -> Vec<String> {
        items.iter().map(|character| character.name.clone()).collect()
    }

    #[test]
    fn equal_names_keep_input_order_in_both_directions() {
        let items = vec![
            Character::new("1", "Morty", "Human"),
            Character::new("2", "Morty", "Robot"),
            Character::new("3", "Abradolf", "Human"),
        ];

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let params = ViewParams {
                type_filter: TypeFilter::Others,
                sort_order: order,
                ..ViewParams::default()
            };
            let Projection::Flat(list) = project(&items, &AnnotationMap::new(), &params) else {
                panic!("non-all filters project flat lists");
            };
            let mortys = list
                .iter()
                .filter(|character| character.name == "Morty")
                .map(|character| character.id.as_str())
                .collect::<Vec<_>>();
            assert_eq!(mortys, vec!["1", "2"]);
        }
    }

    #[test]
    fn starred_view_ignores_deleted_favorites() {
        let items = vec![
            Character::new("1", "Rick", "Human"),
            Character::new("2", "Summer", "Human"),
        ];
        let annotations = AnnotationMap::new()
            .with_patch("1", &AnnotationPatch::favorite(true))
            .with_patch("2", &AnnotationPatch::favorite(true))
            .with_patch("2", &AnnotationPatch::deleted(true));
        let params = ViewParams {
            type_filter: TypeFilter::Starred,
            ..ViewParams::default()
        };

        let projection = project(&items, &annotations, &params);
        assert_eq!(projection, Projection::Flat(vec![&items[0]]));
    }

    #[test]
    fn grouped_iter_lists_favorites_first() {
        let items = vec![
            Character::new("1", "Abe", "Human"),
            Character::new("2", "Zed", "Human"),
        ];
        let annotations = AnnotationMap::new().with_patch("2", &AnnotationPatch::favorite(true));

        let projection = project(&items, &annotations, &ViewParams::default());
        let ordered = projection.iter().collect::<Vec<_>>();
        assert_eq!(names(&ordered), vec!["Zed", "Abe"]);
        assert_eq!(projection.len(), 2);
    }
}
