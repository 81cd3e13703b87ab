//! Interactive terminal front-end for the zen-week library.
//!
//! Reads one command per line and re-renders the week after each one.
//! You can set the RUST_LOG environment variable to display more info about
//! what the store is doing.

use std::io::BufRead;
use std::io::Write;

use zen_week::app::Action;
use zen_week::app::App;
use zen_week::store::Store;
use zen_week::utils;
use zen_week::view::WeekView;
use zen_week::TaskId;

const HELP: &str = "\
Commands:
  add <day> <text...>   add a task (day is 1-7, Monday first)
  done <day> <n>        toggle completion of the n-th task of that day
  del <day> <n>         delete the n-th task of that day
  open <day>            expand or collapse a day
  all | none            expand or collapse every day of the week
  next | prev           move to the next or previous week
  today                 jump back to the current week
  help                  show this list
  quit                  exit";

fn main() {
    env_logger::init();

    let folder = Store::default_folder();
    let mut app = App::new(Store::open(&folder));

    println!("zen-week: up to three focused tasks a day.");
    println!("Data folder: {:?}", folder);
    println!("{}", HELP);

    let stdin = std::io::stdin();
    loop {
        let view = app.view();
        utils::print_week(&view);
        utils::print_notices(&app.take_notices());

        print!("> ");
        if std::io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            _ => match parse_command(line, &view) {
                Ok(action) => app.apply(action),
                Err(message) => println!("  ! {}", message),
            },
        }
    }
}

/// Turn one input line into an [`Action`], resolving day and task positions
/// against the week that is currently displayed
fn parse_command(line: &str, view: &WeekView) -> Result<Action, String> {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(word) => word,
        None => return Err("empty command".to_string()),
    };

    match command {
        "add" => {
            let day_index = parse_day(words.next(), view)?;
            let text: Vec<&str> = words.collect();
            Ok(Action::AddTask {
                day: view.days[day_index].date,
                text: text.join(" "),
            })
        }
        "done" => {
            let day_index = parse_day(words.next(), view)?;
            let id = task_id_at(view, day_index, words.next())?;
            Ok(Action::ToggleCompleted { day: view.days[day_index].date, id })
        }
        "del" => {
            let day_index = parse_day(words.next(), view)?;
            let id = task_id_at(view, day_index, words.next())?;
            Ok(Action::DeleteTask { day: view.days[day_index].date, id })
        }
        "open" => {
            let day_index = parse_day(words.next(), view)?;
            Ok(Action::ToggleDay { day: view.days[day_index].date })
        }
        "all" => Ok(Action::ExpandAll),
        "none" => Ok(Action::CollapseAll),
        "next" => Ok(Action::NextWeek),
        "prev" => Ok(Action::PreviousWeek),
        "today" => Ok(Action::CurrentWeek),
        other => Err(format!("unknown command {:?}, try 'help'", other)),
    }
}

fn parse_day(arg: Option<&str>, view: &WeekView) -> Result<usize, String> {
    let arg = match arg {
        Some(arg) => arg,
        None => return Err("missing day number (1-7)".to_string()),
    };
    let number: usize = arg
        .parse()
        .map_err(|_| format!("{:?} is not a day number (1-7)", arg))?;
    if number < 1 || number > view.days.len() {
        return Err(format!("day {} is out of range (1-7)", number));
    }
    Ok(number - 1)
}

fn task_id_at(view: &WeekView, day_index: usize, arg: Option<&str>) -> Result<TaskId, String> {
    let arg = match arg {
        Some(arg) => arg,
        None => return Err("missing task number".to_string()),
    };
    let number: usize = arg
        .parse()
        .map_err(|_| format!("{:?} is not a task number", arg))?;
    let day = &view.days[day_index];
    match number.checked_sub(1).and_then(|index| day.tasks.get(index)) {
        Some(task) => Ok(task.id.clone()),
        None => Err(format!("day {} holds {} task(s)", day_index + 1, day.tasks.len())),
    }
}
