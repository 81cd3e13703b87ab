//! Scenarios that walk a user's week through the application object,
//! backed by a real (temporary) data folder

use tempfile::TempDir;

use zen_week::app::Action;
use zen_week::app::App;
use zen_week::notice::NoticeKind;
use zen_week::store::Store;
use zen_week::DateKey;
use zen_week::TaskId;

fn open_app(folder: &TempDir) -> App {
    App::new(Store::open(folder.path()))
}

fn day(s: &str) -> DateKey {
    s.parse().unwrap()
}

fn add(app: &mut App, day_key: DateKey, text: &str) {
    app.apply(Action::AddTask { day: day_key, text: text.to_string() });
}

fn task_ids(app: &App, day_key: DateKey) -> Vec<TaskId> {
    app.board().tasks_for(day_key).iter().map(|task| task.id().clone()).collect()
}

#[test]
fn the_daily_limit_is_enforced_with_a_notice() {
    let folder = TempDir::new().unwrap();
    let mut app = open_app(&folder);
    let monday = day("2024-06-03");

    for text in &["write report", "buy milk", "call the bank"] {
        add(&mut app, monday, text);
    }
    assert_eq!(app.board().tasks_for(monday).len(), 3);
    app.take_notices();

    add(&mut app, monday, "x");
    assert_eq!(app.board().tasks_for(monday).len(), 3);

    let notices = app.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind(), NoticeKind::Validation);
    assert!(notices[0].text().contains("limit"));
}

#[test]
fn empty_text_is_rejected_with_a_notice() {
    let folder = TempDir::new().unwrap();
    let mut app = open_app(&folder);

    add(&mut app, day("2024-06-03"), "   ");
    assert!(app.board().is_empty());

    let notices = app.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind(), NoticeKind::Validation);
}

#[test]
fn completing_the_whole_day_fires_both_notices() {
    let folder = TempDir::new().unwrap();
    let mut app = open_app(&folder);
    let monday = day("2024-06-03");

    for text in &["a", "b", "c"] {
        add(&mut app, monday, text);
    }
    let ids = task_ids(&app, monday);
    app.apply(Action::ToggleCompleted { day: monday, id: ids[0].clone() });
    app.apply(Action::ToggleCompleted { day: monday, id: ids[1].clone() });
    app.take_notices();

    app.apply(Action::ToggleCompleted { day: monday, id: ids[2].clone() });
    let notices = app.take_notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].kind(), NoticeKind::Encouragement);
    assert_eq!(notices[1].kind(), NoticeKind::DayComplete);
    assert!(notices[1].text().contains("Monday"));
}

#[test]
fn uncompleting_a_task_stays_silent() {
    let folder = TempDir::new().unwrap();
    let mut app = open_app(&folder);
    let monday = day("2024-06-03");

    add(&mut app, monday, "a");
    let ids = task_ids(&app, monday);
    app.apply(Action::ToggleCompleted { day: monday, id: ids[0].clone() });
    app.take_notices();

    app.apply(Action::ToggleCompleted { day: monday, id: ids[0].clone() });
    assert!(app.take_notices().is_empty());
}

#[test]
fn state_survives_a_restart() {
    let folder = TempDir::new().unwrap();

    let saved_board = {
        let mut app = open_app(&folder);
        add(&mut app, day("2024-06-03"), "write report");
        add(&mut app, day("2024-06-03"), "buy milk");
        add(&mut app, day("2024-06-07"), "water the plants");
        let ids = task_ids(&app, day("2024-06-03"));
        app.apply(Action::ToggleCompleted { day: day("2024-06-03"), id: ids[0].clone() });
        app.board().clone()
    };

    let app = open_app(&folder);
    assert_eq!(app.board(), &saved_board);
    assert_eq!(app.board().tasks_for(day("2024-06-03")).len(), 2);
    assert!(app.board().tasks_for(day("2024-06-03"))[0].completed());
}

#[test]
fn deleting_every_task_prunes_the_day_everywhere() {
    let folder = TempDir::new().unwrap();
    {
        let mut app = open_app(&folder);
        let friday = day("2024-06-07");
        add(&mut app, friday, "only one");
        let ids = task_ids(&app, friday);
        app.apply(Action::DeleteTask { day: friday, id: ids[0].clone() });
        assert!(app.board().is_empty());
    }
    // the pruned key is gone from the file too
    let app = open_app(&folder);
    assert!(app.board().is_empty());
}

#[test]
fn an_unusable_folder_degrades_but_keeps_working() {
    let folder = TempDir::new().unwrap();
    let blocking_file = folder.path().join("not-a-folder");
    std::fs::write(&blocking_file, b"blocking").unwrap();

    let mut app = App::new(Store::open(&blocking_file));
    let notices = app.take_notices();
    assert!(notices.iter().any(|notice| notice.kind() == NoticeKind::Storage));

    let monday = day("2024-06-03");
    add(&mut app, monday, "still works");
    assert_eq!(app.board().tasks_for(monday).len(), 1);

    // the degradation notice does not repeat
    assert!(app.take_notices().iter().all(|notice| notice.kind() != NoticeKind::Storage));
}

#[test]
fn the_accordion_keeps_one_day_open() {
    let folder = TempDir::new().unwrap();
    let mut app = open_app(&folder);
    let days = app.week().days();

    app.apply(Action::CollapseAll);
    app.apply(Action::ToggleDay { day: days[2] });
    let view = app.view();
    assert!(view.days[2].expanded);
    assert_eq!(view.days.iter().filter(|d| d.expanded).count(), 1);

    app.apply(Action::ToggleDay { day: days[5] });
    let view = app.view();
    assert!(view.days[5].expanded);
    assert!(!view.days[2].expanded);
    assert_eq!(view.days.iter().filter(|d| d.expanded).count(), 1);

    // closing the open day leaves the whole week collapsed
    app.apply(Action::ToggleDay { day: days[5] });
    let view = app.view();
    assert_eq!(view.days.iter().filter(|d| d.expanded).count(), 0);

    app.apply(Action::ExpandAll);
    let view = app.view();
    assert_eq!(view.days.iter().filter(|d| d.expanded).count(), 7);
}

#[test]
fn week_navigation_moves_the_window() {
    let folder = TempDir::new().unwrap();
    let mut app = open_app(&folder);
    let start = *app.week();

    app.apply(Action::NextWeek);
    assert_eq!(*app.week(), start.next());

    app.apply(Action::PreviousWeek);
    app.apply(Action::PreviousWeek);
    assert_eq!(*app.week(), start.previous());

    app.apply(Action::CurrentWeek);
    assert_eq!(*app.week(), start);
}
