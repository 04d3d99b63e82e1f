use chrono::NaiveDate;
use revise_core::db::open_db_in_memory;
use revise_core::{
    Agenda, ReviewService, ReviewServiceError, SqliteReviewStore, UserDirectory,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn add_topic_trims_and_persists_five_reviews() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), UserDirectory::default());

    let added = service
        .add_topic("1", "  Functions in JS ", ymd(2025, 7, 19))
        .unwrap();
    assert_eq!(added.len(), 5);
    assert!(added.iter().all(|r| r.topic() == "Functions in JS"));

    assert_eq!(service.reviews("1").unwrap(), added);
}

#[test]
fn agenda_shows_upcoming_reviews_only() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), UserDirectory::default());
    service
        .add_topic("2", "Functions in JS", ymd(2025, 7, 19))
        .unwrap();

    let agenda = service.agenda("2", ymd(2025, 8, 19)).unwrap();
    let lines: Vec<&str> = agenda.lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "Functions in JS, 19th Aug 2025",
            "Functions in JS, 19th Oct 2025",
            "Functions in JS, 19th Jan 2026",
            "Functions in JS, 19th Jul 2026",
        ]
    );
}

#[test]
fn agenda_for_user_without_reviews_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), UserDirectory::default());

    assert_eq!(service.agenda("3", ymd(2025, 1, 1)).unwrap(), Agenda::Empty);
}

#[test]
fn clear_resets_agenda() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), UserDirectory::default());
    service.add_topic("4", "Traits", ymd(2025, 7, 19)).unwrap();

    service.clear("4").unwrap();
    assert!(service.agenda("4", ymd(2025, 7, 19)).unwrap().is_empty());
}

#[test]
fn unknown_user_and_blank_topic_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), UserDirectory::default());

    let err = service.add_topic("9", "Traits", ymd(2025, 7, 19)).unwrap_err();
    assert!(matches!(err, ReviewServiceError::UnknownUser(id) if id == "9"));

    let err = service.add_topic("1", "   ", ymd(2025, 7, 19)).unwrap_err();
    assert!(matches!(err, ReviewServiceError::EmptyTopic));

    assert!(matches!(
        service.clear(""),
        Err(ReviewServiceError::UnknownUser(_))
    ));
    assert!(service.reviews("1").unwrap().is_empty());
}

#[test]
fn custom_directory_limits_known_users() {
    let conn = open_db_in_memory().unwrap();
    let users = UserDirectory::from_ids(["alice", "bob"]).unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), users);

    service.add_topic("bob", "Lifetimes", ymd(2025, 7, 19)).unwrap();
    assert!(matches!(
        service.add_topic("1", "Lifetimes", ymd(2025, 7, 19)),
        Err(ReviewServiceError::UnknownUser(_))
    ));
    assert_eq!(service.users().len(), 2);
}

#[test]
fn start_date_whose_reviews_pass_year_9999_is_a_schedule_error() {
    let conn = open_db_in_memory().unwrap();
    let service = ReviewService::new(SqliteReviewStore::new(&conn), UserDirectory::default());

    let err = service.add_topic("1", "far", ymd(9999, 6, 1)).unwrap_err();
    assert!(matches!(err, ReviewServiceError::Schedule(_)));
    assert!(service.reviews("1").unwrap().is_empty());
}
