// Unit tests for Shelter Match

use chrono::Utc;
use shelter_match::core::{
    format_range, FavoriteChange, PageControls, PageToken, PaginationError, SearchSession,
    SessionError, PAGE_SIZE, VISIBLE_WINDOW,
};
use shelter_match::models::{Dog, SortOrder};

fn page_numbers(range: &[PageToken]) -> Vec<i64> {
    range.iter().filter_map(PageToken::target).collect()
}

#[test]
fn test_range_examples() {
    use PageToken::{Ellipsis as E, Page as P};

    assert_eq!(format_range(3, 5).unwrap(), vec![P(1), P(2), P(3), P(4), P(5)]);
    assert_eq!(format_range(1, 20).unwrap(), vec![P(1), P(2), P(3), P(4), P(5), E, P(20)]);
    assert_eq!(format_range(4, 20).unwrap(), vec![P(1), P(2), P(3), P(4), P(5), E, P(20)]);
    assert_eq!(format_range(18, 20).unwrap(), vec![P(1), E, P(16), P(17), P(18), P(19), P(20)]);
    assert_eq!(format_range(10, 20).unwrap(), vec![P(1), E, P(9), P(10), P(11), E, P(20)]);
}

#[test]
fn test_range_is_idempotent() {
    for total in 0..40 {
        for current in 1..=total.max(1) {
            assert_eq!(format_range(current, total), format_range(current, total));
        }
    }
}

#[test]
fn test_range_invariants() {
    for total in 1..60 {
        for current in 1..=total {
            let range = format_range(current, total).unwrap();
            let pages = page_numbers(&range);

            assert!(range.len() as i64 <= VISIBLE_WINDOW, "({}, {}) too long", current, total);
            assert!(pages.contains(&current), "({}, {}) hides current page", current, total);
            assert!(pages.windows(2).all(|w| w[0] < w[1]), "({}, {}) not ascending", current, total);
            assert!(
                range.windows(2).all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())),
                "({}, {}) has adjacent ellipses",
                current,
                total
            );

            if total > VISIBLE_WINDOW {
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
                assert_eq!(range.len() as i64, VISIBLE_WINDOW);
            } else {
                assert_eq!(pages, (1..=total).collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn test_ellipsis_only_hides_gaps() {
    for total in 8..40 {
        for current in 1..=total {
            let range = format_range(current, total).unwrap();
            for (i, token) in range.iter().enumerate() {
                if token.is_ellipsis() {
                    let before = range[i - 1].target().unwrap();
                    let after = range[i + 1].target().unwrap();
                    assert!(after - before > 1, "({}, {}) ellipsis hides nothing", current, total);
                }
            }
        }
    }
}

#[test]
fn test_range_rejects_out_of_contract_input() {
    assert!(matches!(format_range(1, -5), Err(PaginationError::InvalidArgument(_))));
    assert!(matches!(format_range(0, 3), Err(PaginationError::InvalidArgument(_))));
    assert!(matches!(format_range(4, 3), Err(PaginationError::InvalidArgument(_))));
}

#[test]
fn test_controls_for_result_counts() {
    let controls = PageControls::new(20, 500, PAGE_SIZE).unwrap();
    assert_eq!(controls.summary.start_result, 476);
    assert_eq!(controls.summary.end_result, 500);
    assert_eq!(controls.next, None);

    let empty = PageControls::new(1, 0, PAGE_SIZE).unwrap();
    assert!(empty.range.is_empty());
    assert!(!empty.visible);
}

fn dog(id: &str, breed: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: String::new(),
        name: id.to_uppercase(),
        age: 2,
        zip_code: "60601".to_string(),
        breed: breed.to_string(),
    }
}

#[test]
fn test_session_round_trip() {
    let mut session = SearchSession::new(PAGE_SIZE);
    session.set_filters(Some("Pug".to_string()), Some(SortOrder::Desc));

    let params = session.search_params(1).unwrap();
    assert_eq!(params.sort.as_deref(), Some("breed:desc"));

    session.apply_search(1, 30, vec![dog("a", "Pug"), dog("b", "Pug")]);
    let (change, _) = session.toggle_favorite("a", Utc::now());
    assert_eq!(change, FavoriteChange::Added);

    let view = session.view().unwrap();
    assert_eq!(view.breed.as_deref(), Some("Pug"));
    assert_eq!(view.pagination.summary.total_pages, 2);
    assert_eq!(view.pagination.next, Some(2));
    assert!(view.dogs.iter().any(|card| card.dog.id == "a" && card.is_favorite));

    session.apply_match(dog("a", "Pug"));
    let (change, _) = session.toggle_favorite("a", Utc::now());
    assert_eq!(change, FavoriteChange::Removed);
    assert_eq!(session.match_candidates(), Err(SessionError::NoFavorites));
    assert!(session.matched().is_some());
}
