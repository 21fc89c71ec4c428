use lifebook::cli::run_once;
use lifebook::commands::Command;
use lifebook::config::Config;
use lifebook::models::task::{parse_input_date, parse_input_time, parse_output_date_time};
use lifebook::models::{Link, TaskKind};
use lifebook::storage::JsonStorage;
use lifebook::{CommandError, CommandParser, ListKind, Logic, LogicError, Model, ModelManager};
use tempfile::TempDir;

fn run(parser: &CommandParser, model: &mut ModelManager, line: &str) -> Result<String, CommandError> {
    let command = parser.parse_command(line)?;
    command.execute(model).map(|r| r.feedback)
}

fn populated() -> (CommandParser, ModelManager) {
    let parser = CommandParser::new().unwrap();
    let mut model = ModelManager::new();
    for line in [
        "add contact n/Alice Pauline p/94351253 e/alice@example.com a/123, Jurong West Ave 6 t/friends",
        "add contact n/Benson Meier p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/owesMoney",
        "add todo desc/Chores date/05-01-2025 time/1200",
        "add todo desc/Submit report date/01-01-2025 time/1800",
        "add event desc/Team meeting startdate/03-01-2025 starttime/0900 enddate/03-01-2025 endtime/1000",
    ] {
        run(&parser, &mut model, line).unwrap();
    }
    (parser, model)
}

#[test]
fn add_todo_on_empty_model() {
    let parser = CommandParser::new().unwrap();
    let mut model = ModelManager::new();

    let command = parser
        .parse_command("add todo desc/Submit report date/01-01-2025 time/1800")
        .unwrap();
    let Command::AddTodo(ref todo) = command else {
        panic!("expected a todo, got {command:?}");
    };
    let expected = parse_input_date("01-01-2025")
        .unwrap()
        .and_time(parse_input_time("1800").unwrap());
    assert_eq!(todo.description(), "Submit report");
    assert_eq!(todo.kind(), &TaskKind::Todo { deadline: expected });

    command.execute(&mut model).unwrap();
    assert_eq!(model.tasks().len(), 1);
}

#[test]
fn todo_deadline_display_parses_back() {
    let (_, model) = populated();
    let todo = &model.tasks()[1];
    let shown = todo.deadline_to_string();
    assert_eq!(shown, "Jan 1 2025 1800");
    assert_eq!(parse_output_date_time(&shown).unwrap(), todo.due());
}

#[test]
fn done_out_of_range() {
    let (parser, mut model) = populated();
    assert_eq!(model.filtered_task_list().len(), 3);
    assert_eq!(
        run(&parser, &mut model, "done 5"),
        Err(CommandError::InvalidDisplayedIndex(ListKind::Task))
    );
}

#[test]
fn unknown_command_word() {
    let (parser, mut model) = populated();
    assert_eq!(
        run(&parser, &mut model, "remind me later"),
        Err(CommandError::UnknownCommand("remind me later".to_string()))
    );
}

#[test]
fn duplicate_contact_ignores_address_and_tags() {
    let (parser, mut model) = populated();
    let err = run(
        &parser,
        &mut model,
        "add contact n/Alice Pauline p/94351253 e/alice@example.com a/Elsewhere t/colleague",
    )
    .unwrap_err();
    assert_eq!(err, CommandError::DuplicateEntity(ListKind::Contact));
    assert_eq!(model.persons().len(), 2);
}

#[test]
fn tag_with_invalid_index_changes_nothing() {
    let (parser, mut model) = populated();
    let persons = model.persons().to_vec();
    let tasks = model.tasks().to_vec();

    assert_eq!(
        run(&parser, &mut model, "tag c/1 task/7 t/projectX"),
        Err(CommandError::InvalidDisplayedIndex(ListKind::Task))
    );
    assert_eq!(model.persons(), persons.as_slice());
    assert_eq!(model.tasks(), tasks.as_slice());

    run(&parser, &mut model, "tag c/2 task/3 t/projectX").unwrap();
    assert_eq!(model.persons()[1].tags.len(), 1);
    assert_eq!(model.tasks()[2].tags().len(), 1);
}

#[test]
fn indices_follow_the_displayed_list() {
    let (parser, mut model) = populated();
    run(&parser, &mut model, "find task report").unwrap();
    run(&parser, &mut model, "done 1").unwrap();
    assert!(model.tasks()[1].is_done());
    assert!(!model.tasks()[0].is_done());

    run(&parser, &mut model, "list").unwrap();
    run(&parser, &mut model, "sort task").unwrap();
    run(&parser, &mut model, "delete task 1").unwrap();
    let remaining: Vec<_> = model.tasks().iter().map(|t| t.description().to_string()).collect();
    assert_eq!(remaining, ["Chores", "Team meeting"]);
}

#[test]
fn links_and_snooze() {
    let (parser, mut model) = populated();
    run(&parser, &mut model, "link meeting 3 link/https://zoom.us/j/123456").unwrap();
    assert_eq!(
        model.tasks()[2].link(),
        Some(&Link::parse("https://zoom.us/j/123456").unwrap())
    );

    run(&parser, &mut model, "link collab 3 label/Notes link/https://docs.example.com/x").unwrap();
    assert_eq!(model.tasks()[2].collaborative_link().map(|c| c.label()), Some("Notes"));

    assert!(matches!(
        run(&parser, &mut model, "snooze 3 date/08-01-2025 time/0900"),
        Err(CommandError::InvalidEdit(_))
    ));
    run(&parser, &mut model, "snooze 1 date/08-01-2025 time/0900").unwrap();
    assert_eq!(model.tasks()[0].deadline_to_string(), "Jan 8 2025 0900");
}

#[test]
fn due_queries() {
    let (parser, mut model) = populated();
    assert_eq!(
        run(&parser, &mut model, "duebefore date/04-01-2025").unwrap(),
        "2 tasks listed!"
    );
    assert_eq!(run(&parser, &mut model, "dueat date/03-01-2025").unwrap(), "1 tasks listed!");
    assert_eq!(
        run(&parser, &mut model, "showtag t/owesMoney").unwrap(),
        "1 contacts listed! 0 tasks listed!"
    );
}

#[test]
fn logic_persists_between_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lifebook.json");

    let mut logic = Logic::new(ModelManager::new(), Some(JsonStorage::new(&path))).unwrap();
    logic
        .execute("add contact n/Amy Bee p/11111111 e/amy@example.com a/Block 312")
        .unwrap();
    logic.execute("add todo desc/Pay rent date/31-01-2025 time/0900").unwrap();
    logic.execute("done 1").unwrap();

    let snapshot = JsonStorage::new(&path).load().unwrap().unwrap();
    assert_eq!(snapshot.persons.len(), 1);
    assert!(snapshot.tasks[0].is_done());

    logic.execute("clear").unwrap();
    let snapshot = JsonStorage::new(&path).load().unwrap().unwrap();
    assert!(snapshot.persons.is_empty());
    assert_eq!(snapshot.tasks.len(), 1);
}

#[test]
fn completing_a_repeated_todo_keeps_data_loadable() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        data_file: dir.path().join("lifebook.json"),
        log_level: "warn".to_string(),
        due_soon_days: 7,
    };

    let mut logic = Logic::open(&config).unwrap();
    logic.execute("add todo desc/Pay rent date/31-01-2025 time/0900").unwrap();
    logic.execute("done 1").unwrap();
    logic.execute("add todo desc/Pay rent date/28-02-2025 time/0900").unwrap();
    assert!(matches!(
        logic.execute("done 2"),
        Err(LogicError::Command(CommandError::DuplicateEntity(ListKind::Task)))
    ));

    let reopened = Logic::open(&config).unwrap();
    assert_eq!(reopened.model().tasks().len(), 2);
    assert!(!reopened.model().tasks()[1].is_done());
}

#[test]
fn failed_save_keeps_change_in_memory() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let storage = JsonStorage::new(blocker.join("lifebook.json"));
    let mut logic = Logic::new(ModelManager::new(), Some(storage)).unwrap();
    let err = logic
        .execute("add todo desc/Pay rent date/31-01-2025 time/0900")
        .unwrap_err();
    assert!(matches!(err, LogicError::Storage(_)));
    assert_eq!(logic.model().tasks().len(), 1);
}

#[test]
fn one_shot_reports_failure() {
    let mut logic = Logic::new(ModelManager::new(), None).unwrap();
    assert!(matches!(
        run_once(&mut logic, "done 1"),
        Err(LogicError::Command(CommandError::InvalidDisplayedIndex(ListKind::Task)))
    ));
    assert!(run_once(&mut logic, "add todo desc/Chores date/05-01-2025 time/1200").is_ok());
}
