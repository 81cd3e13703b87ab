///! Some utility functions

use crate::notice::Notice;
use crate::view::DayView;
use crate::view::WeekView;
use crate::view::EMPTY_WEEK_TITLE;

/// A utility that pretty-prints a rendered week
pub fn print_week(view: &WeekView) {
    println!();
    println!(
        "Week {}    {}% done ({}/{})",
        view.range_label, view.progress.percent, view.progress.completed, view.progress.total
    );
    if let Some(hint) = view.empty_week_hint {
        println!("  {}. {}", EMPTY_WEEK_TITLE, hint);
    }
    for (position, day) in view.days.iter().enumerate() {
        print_day(position + 1, day);
    }
}

fn print_day(position: usize, day: &DayView) {
    let marker = if day.expanded { "▾" } else { "▸" };
    let today = if day.is_today { " · today" } else { "" };
    println!(
        "{} [{}] {} {}{}   ({}/{})",
        marker, position, day.weekday_label, day.date_label, today, day.task_count, day.capacity
    );
    if !day.expanded {
        return;
    }
    for (index, task) in day.tasks.iter().enumerate() {
        let completion = if task.completed { "✓" } else { " " };
        println!("      {}. [{}] {}", index + 1, completion, task.text);
    }
    if let Some(warning) = day.warning {
        println!("      ! {}", warning);
    }
}

/// A utility that prints queued notices
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        println!("  * {}", notice);
    }
}
