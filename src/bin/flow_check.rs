use dailyflow::config::FlowConfig;
use dailyflow::core::filter::TaskFilter;
use dailyflow::core::summary::completed_this_week;
use dailyflow::ui::message::Message;
use dailyflow::ui::state::DailyFlow;

/// Walk a session through every gesture path and print the store after each
/// step. Useful for eyeballing the state transitions without a renderer.
fn main() {
    systemd_journal_logger::JournalLog::new()
        .unwrap()
        .with_syslog_identifier("dailyflow-check".to_string())
        .install()
        .unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let config = FlowConfig::load();
    dailyflow::set_debug_logging(config.debug_logging);

    // The walkthrough needs rows to swipe, so always start from the samples.
    let config = FlowConfig {
        seed_sample_tasks: true,
        ..config
    };
    let mut app = DailyFlow::new(&config);

    println!("=== DailyFlow Walkthrough ===\n");
    print_state("Initial (sample data)", &app);

    let first_pending = app
        .visible_tasks()
        .iter()
        .find(|t| !t.is_complete)
        .map(|t| t.id)
        .expect("Sample data has pending tasks");
    app.update(Message::DragUpdate(first_pending, 150.0, 0.0));
    app.update(Message::DragEnd(first_pending));
    log::info!("Swiped right on {first_pending}");
    print_state("After right swipe (complete)", &app);

    let next_pending = app
        .visible_tasks()
        .iter()
        .find(|t| !t.is_complete)
        .map(|t| t.id)
        .expect("Sample data has pending tasks");
    app.update(Message::DragUpdate(next_pending, -150.0, 0.0));
    app.update(Message::DragEnd(next_pending));
    log::info!("Swiped left on pending {next_pending}");
    print_state("After left swipe on a pending task (snooze to end)", &app);

    let done = app
        .visible_tasks()
        .iter()
        .find(|t| t.is_complete)
        .map(|t| t.id)
        .expect("A task was just completed");
    app.update(Message::DragUpdate(done, -150.0, 0.0));
    app.update(Message::DragEnd(done));
    log::info!("Swiped left on done {done}");
    print_state("After left swipe on a done task (uncomplete)", &app);

    app.update(Message::ShowAddTask);
    app.update(Message::NameChanged("Review weekly goals".to_string()));
    app.update(Message::NotesChanged("Before Friday standup".to_string()));
    app.update(Message::SubmitAddTask);
    print_state("After adding a task through the form", &app);

    app.update(Message::SetFilter(TaskFilter::Done));
    print_state("Done filter", &app);
    app.update(Message::SetFilter(TaskFilter::Pending));
    print_state("Pending filter", &app);

    let week = completed_this_week(app.store().tasks(), chrono::Local::now().naive_local());
    println!("Tasks completed this week: {week}");

    println!("\n=== Done ===");
}

fn print_state(label: &str, app: &DailyFlow) {
    println!("--- {label} ---");
    for task in app.visible_tasks() {
        let mark = if task.is_complete { "x" } else { " " };
        println!(
            "  [{}] {} ({}, {})",
            mark,
            task.name,
            task.priority.as_label(),
            task.due_date
        );
    }
    let summary = app.summary();
    println!(
        "  Total: {}  Done: {}  Pending: {}  ({}%)\n",
        summary.total,
        summary.done,
        summary.pending,
        summary.percent()
    );
}
