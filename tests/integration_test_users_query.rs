mod common;

use common::api_user;
use lending_dashboard::domain::models::filters::Filters;
use lending_dashboard::domain::models::user::{UserRecord, UserStatus};
use lending_dashboard::domain::services::query::{
    filtered_view, page_range, paginate, summary_counters, PageItem, UsersView,
    DEFAULT_PAGE_SIZE,
};
use lending_dashboard::domain::services::user_mapper::map_api_user;

fn sample_collection() -> Vec<UserRecord> {
    vec![
        map_api_user(api_user("u1", "Grace Effiom", "Lendsqr", UserStatus::Active)),
        map_api_user(api_user("u2", "Sani Bello", "Lendsqr", UserStatus::Inactive)),
        map_api_user(api_user("u3", "Ngozi Eze", "Irorun", UserStatus::Active)),
        map_api_user(api_user("u4", "Bola Aina", "Irorun", UserStatus::Blacklisted)),
        map_api_user(api_user("u5", "Adedeji Musa", "Lendstar", UserStatus::Pending)),
    ]
}

#[test]
fn test_empty_filters_pass_everything() {
    let users = sample_collection();
    assert_eq!(filtered_view(&users, &Filters::default()).len(), users.len());
}

#[test]
fn test_text_filters_match_case_insensitive_substrings() {
    let users = sample_collection();

    let filters = Filters {
        organization: "LENDS".to_string(),
        ..Filters::default()
    };
    let hits = filtered_view(&users, &filters);
    assert_eq!(hits.len(), 3); // Lendsqr x2 + Lendstar

    let filters = Filters {
        username: "  grace  ".to_string(),
        ..Filters::default()
    };
    assert_eq!(filtered_view(&users, &filters).len(), 1);
}

#[test]
fn test_status_filter_is_exact() {
    let users = sample_collection();
    let filters = Filters {
        status: Some(UserStatus::Active),
        ..Filters::default()
    };
    let hits = filtered_view(&users, &filters);
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|u| u.status == UserStatus::Active));
}

#[test]
fn test_filters_are_conjunctive() {
    let users = sample_collection();

    let status_only = Filters {
        status: Some(UserStatus::Active),
        ..Filters::default()
    };
    let both = Filters {
        status: Some(UserStatus::Active),
        organization: "Irorun".to_string(),
        ..Filters::default()
    };

    let wide: Vec<&str> = filtered_view(&users, &status_only)
        .iter()
        .map(|u| u.id.as_str())
        .collect();
    let narrow = filtered_view(&users, &both);

    assert_eq!(narrow.len(), 1);
    assert!(narrow.iter().all(|u| wide.contains(&u.id.as_str())));
}

#[test]
fn test_date_filter_matches_calendar_day_not_timestamp() {
    let mut users = sample_collection();
    users[0].date_joined = "2020-05-15T23:59:59Z".to_string();
    users[1].date_joined = "2021-01-01T00:00:00Z".to_string();

    let filters = Filters {
        date: "2020-05-15".to_string(),
        ..Filters::default()
    };
    let hits = filtered_view(&users, &filters);
    // u1 plus the three untouched records that keep the 2020-05-15 fixture date
    assert!(hits.iter().any(|u| u.id == "u1"));
    assert!(hits.iter().all(|u| u.id != "u2"));
}

#[test]
fn test_unparseable_date_joined_passes_the_date_filter() {
    let mut users = sample_collection();
    users[2].date_joined = "not-a-date".to_string();

    let filters = Filters {
        date: "1999-01-01".to_string(),
        ..Filters::default()
    };
    let hits = filtered_view(&users, &filters);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "u3");
}

#[test]
fn test_paginate_clamps_out_of_range_pages() {
    let rows: Vec<usize> = (0..47).collect();

    let first = paginate(&rows, 10, 0);
    assert_eq!(first.page, 1);
    assert_eq!(first.rows, (0..10).collect::<Vec<_>>());

    let last = paginate(&rows, 10, 999);
    assert_eq!(last.page, 5);
    assert_eq!(last.total_pages, 5);
    assert_eq!(last.rows, (40..47).collect::<Vec<_>>());
}

#[test]
fn test_paginate_empty_collection_yields_one_empty_page() {
    let rows: Vec<usize> = Vec::new();
    let page = paginate(&rows, 15, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.rows.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_paginate_reports_display_indexes() {
    let rows: Vec<usize> = (0..47).collect();
    let page = paginate(&rows, 10, 3);
    assert_eq!(page.start_index, 20);
    assert_eq!(page.end_index, 30);
    assert_eq!(page.total, 47);
}

#[test]
fn test_page_range_lists_everything_up_to_seven() {
    let range = page_range(3, 7);
    let expected: Vec<PageItem> = (1..=7).map(PageItem::Num).collect();
    assert_eq!(range, expected);
}

#[test]
fn test_page_range_windows_large_counts() {
    assert_eq!(
        page_range(5, 20),
        vec![
            PageItem::Num(1),
            PageItem::Ellipsis,
            PageItem::Num(4),
            PageItem::Num(5),
            PageItem::Num(6),
            PageItem::Ellipsis,
            PageItem::Num(20),
        ]
    );

    assert_eq!(
        page_range(1, 20),
        vec![
            PageItem::Num(1),
            PageItem::Num(2),
            PageItem::Ellipsis,
            PageItem::Num(20),
        ]
    );

    assert_eq!(
        page_range(20, 20),
        vec![
            PageItem::Num(1),
            PageItem::Ellipsis,
            PageItem::Num(19),
            PageItem::Num(20),
        ]
    );
}

#[test]
fn test_summary_counters() {
    let mut users = sample_collection();
    users[1].account_balance = 0.0;
    users[3].details.employment.loan_repayment = "₦0".to_string();
    users[4].details.employment.loan_repayment = "no repayment".to_string();

    let summary = summary_counters(&users);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.with_savings, 4);
    assert_eq!(summary.with_loans, 3);
}

#[test]
fn test_apply_filters_commits_draft_and_resets_page() {
    let mut view = UsersView::new();
    view.page = 4;
    view.filters_open = true;
    view.draft.organization = "Lendsqr".to_string();

    view.apply_filters();

    assert_eq!(view.applied.organization, "Lendsqr");
    assert!(!view.filters_open);
    assert_eq!(view.page, 1);
}

#[test]
fn test_abandoning_the_draft_leaves_the_query_untouched() {
    let mut view = UsersView::new();
    view.draft.organization = "Lendsqr".to_string();
    view.apply_filters();

    view.toggle_filters();
    view.draft.organization = "Irorun".to_string();
    view.toggle_filters(); // closed without applying

    assert_eq!(view.applied.organization, "Lendsqr");
}

#[test]
fn test_reset_filters_clears_both_instances() {
    let mut view = UsersView::new();
    view.draft.email = "gmail".to_string();
    view.apply_filters();
    view.page = 3;

    view.reset_filters();

    assert!(view.draft.is_empty());
    assert!(view.applied.is_empty());
    assert_eq!(view.page, 1);
}

#[test]
fn test_page_size_change_does_not_reset_page() {
    let mut view = UsersView::new();
    assert_eq!(view.page_size, DEFAULT_PAGE_SIZE);
    view.page = 3;

    view.set_page_size(50);
    assert_eq!(view.page, 3);
    assert_eq!(view.page_size, 50);

    view.set_page_size(0); // rejected, not clamped to zero
    assert_eq!(view.page_size, 50);
}

#[test]
fn test_go_to_page_clamps() {
    let mut view = UsersView::new();
    view.go_to_page(99, 5);
    assert_eq!(view.page, 5);
    view.go_to_page(0, 5);
    assert_eq!(view.page, 1);
}

#[test]
fn test_row_menu_toggles_per_row() {
    let mut view = UsersView::new();

    view.toggle_row_menu("u1");
    assert_eq!(view.open_menu_id.as_deref(), Some("u1"));

    view.toggle_row_menu("u2");
    assert_eq!(view.open_menu_id.as_deref(), Some("u2"));

    view.toggle_row_menu("u2");
    assert!(view.open_menu_id.is_none());

    view.toggle_row_menu("u3");
    view.close_row_menu();
    assert!(view.open_menu_id.is_none());
}
