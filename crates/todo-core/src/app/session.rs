//! Session - the menu loop.
//!
//! Reads a menu choice, applies it to the owned `TaskList`, prints the
//! outcome, repeats. All user-input problems are reported and recovered here;
//! only console failures leave `run`.

use std::ops::ControlFlow;

use tracing::{debug, info};

use super::messages;
use crate::domain::TodoError;
use crate::list::{Listing, TaskList};
use crate::menu::MenuChoice;
use crate::ports::Console;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked Quit.
    Quit,
    /// Input was closed before the user quit.
    InputClosed,
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    Complete,
    Delete,
}

type Step = ControlFlow<SessionEnd>;

pub struct Session<C> {
    list: TaskList,
    console: C,
}

impl<C: Console> Session<C> {
    /// Start with an empty list.
    pub fn new(console: C) -> Self {
        Self::with_list(TaskList::new(), console)
    }

    pub fn with_list(list: TaskList, console: C) -> Self {
        Self { list, console }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (TaskList, C) {
        (self.list, self.console)
    }

    /// Run the menu loop until Quit or end of input.
    pub async fn run(&mut self) -> Result<SessionEnd, TodoError> {
        info!("session started");
        loop {
            let step = match self.read_choice().await? {
                Some(choice) => self.handle(choice).await?,
                None => ControlFlow::Break(SessionEnd::InputClosed),
            };
            if let ControlFlow::Break(end) = step {
                info!(?end, tasks = self.list.len(), "session ended");
                return Ok(end);
            }
        }
    }

    /// Show the menu and prompt until a valid choice is entered.
    ///
    /// `Ok(None)` when input closes.
    async fn read_choice(&mut self) -> Result<Option<MenuChoice>, TodoError> {
        for line in MenuChoice::menu_lines() {
            self.console.say(&line).await?;
        }
        loop {
            let Some(input) = self.console.prompt(messages::CHOICE_PROMPT).await? else {
                return Ok(None);
            };
            match MenuChoice::parse(&input) {
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    return Ok(Some(choice));
                }
                Err(err) => {
                    debug!(input = %input, %err, "menu choice rejected");
                    self.report(err).await?;
                }
            }
        }
    }

    async fn handle(&mut self, choice: MenuChoice) -> Result<Step, TodoError> {
        match choice {
            MenuChoice::AddTask => self.add_task().await,
            MenuChoice::CompleteTask => self.edit_task(Edit::Complete).await,
            MenuChoice::ListTasks => self.list_tasks().await,
            MenuChoice::DeleteTask => self.edit_task(Edit::Delete).await,
            MenuChoice::Quit => {
                self.console.say(messages::FAREWELL).await?;
                Ok(ControlFlow::Break(SessionEnd::Quit))
            }
        }
    }

    async fn add_task(&mut self) -> Result<Step, TodoError> {
        let Some(description) = self.console.prompt(messages::DESCRIPTION_PROMPT).await? else {
            return Ok(ControlFlow::Break(SessionEnd::InputClosed));
        };
        self.list.add(description);
        self.console.say(messages::TASK_ADDED).await?;
        Ok(ControlFlow::Continue(()))
    }

    async fn list_tasks(&mut self) -> Result<Step, TodoError> {
        match self.list.list() {
            Listing::Empty => self.console.say(messages::NO_TASKS).await?,
            Listing::Tasks(entries) => {
                for entry in entries {
                    self.console.say(&entry.to_string()).await?;
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Complete or delete. An empty list short-circuits before asking for a
    /// task number.
    async fn edit_task(&mut self, edit: Edit) -> Result<Step, TodoError> {
        if self.list.is_empty() {
            self.console.say(messages::NO_TASKS).await?;
            return Ok(ControlFlow::Continue(()));
        }

        let Some(input) = self.console.prompt(messages::POSITION_PROMPT).await? else {
            return Ok(ControlFlow::Break(SessionEnd::InputClosed));
        };
        let Some(position) = parse_position(&input) else {
            debug!(input = %input, "task number is not a number");
            self.console.say(messages::INVALID_POSITION).await?;
            return Ok(ControlFlow::Continue(()));
        };

        let result = match edit {
            Edit::Complete => self.list.complete(position).map(|_| messages::TASK_COMPLETED),
            Edit::Delete => self.list.delete(position).map(|_| messages::TASK_DELETED),
        };
        match result {
            Ok(message) => self.console.say(message).await?,
            Err(err) => {
                debug!(?edit, %err, "edit rejected");
                self.report(err).await?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Print the message for a recoverable error, or propagate it.
    async fn report(&mut self, err: TodoError) -> Result<(), TodoError> {
        let message = messages::for_error(&err).ok_or(err)?;
        self.console.say(message).await
    }
}

/// Parse a task number. Negative numbers map to 0, which is never a valid
/// position; `None` only when the input is not an integer at all.
fn parse_position(input: &str) -> Option<usize> {
    let n: i64 = input.trim().parse().ok()?;
    Some(usize::try_from(n).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;
    use crate::impls::ScriptedConsole;
    use rstest::rstest;

    const MENU: [&str; 6] = [
        "Todo List Application",
        "1. Add Task",
        "2. Mark Task as Complete",
        "3. List Tasks",
        "4. Delete Task",
        "5. Quit",
    ];

    async fn run_script(input: &[&str]) -> (SessionEnd, TaskList, ScriptedConsole) {
        let mut session = Session::new(ScriptedConsole::new(input.iter().copied()));
        let end = session.run().await.unwrap();
        let (list, console) = session.into_parts();
        (end, list, console)
    }

    /// Printed lines with the menu blocks removed.
    fn replies(console: &ScriptedConsole) -> Vec<&str> {
        console
            .output()
            .iter()
            .map(String::as_str)
            .filter(|line| !MENU.contains(line))
            .collect()
    }

    #[tokio::test]
    async fn quit_prints_farewell() {
        let (end, list, console) = run_script(&["5"]).await;

        assert_eq!(end, SessionEnd::Quit);
        assert!(list.is_empty());
        assert_eq!(&console.output()[..6], MENU);
        assert_eq!(replies(&console), vec![messages::FAREWELL]);
    }

    #[tokio::test]
    async fn full_round_trip() {
        let (end, list, console) = run_script(&[
            "1", "buy milk", //
            "1", "walk dog", //
            "3", //
            "2", "1", //
            "3", //
            "4", "1", //
            "3", //
            "5",
        ])
        .await;

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(list.len(), 1);
        assert_eq!(
            replies(&console),
            vec![
                messages::TASK_ADDED,
                messages::TASK_ADDED,
                "1. buy milk - Incomplete",
                "2. walk dog - Incomplete",
                messages::TASK_COMPLETED,
                "1. buy milk - Complete",
                "2. walk dog - Incomplete",
                messages::TASK_DELETED,
                "1. walk dog - Incomplete",
                messages::FAREWELL,
            ]
        );
    }

    #[tokio::test]
    async fn invalid_choices_reprompt_without_redrawing_menu() {
        let (end, _, console) = run_script(&["abc", "9", "0", "5"]).await;

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(
            replies(&console),
            vec![
                messages::NOT_A_NUMBER,
                messages::OUT_OF_RANGE,
                messages::OUT_OF_RANGE,
                messages::FAREWELL,
            ]
        );
        let menus = console.output().iter().filter(|l| *l == MENU[0]).count();
        assert_eq!(menus, 1);
        let prompts = console
            .transcript()
            .iter()
            .filter(|l| *l == messages::CHOICE_PROMPT)
            .count();
        assert_eq!(prompts, 4);
    }

    #[rstest]
    #[case::complete("2")]
    #[case::delete("4")]
    #[tokio::test]
    async fn edits_on_empty_list_skip_the_number_prompt(#[case] choice: &str) {
        let (_, _, console) = run_script(&[choice, "5"]).await;

        assert_eq!(replies(&console), vec![messages::NO_TASKS, messages::FAREWELL]);
        assert!(
            !console
                .transcript()
                .iter()
                .any(|l| l == messages::POSITION_PROMPT)
        );
    }

    #[tokio::test]
    async fn listing_empty_list_reports_no_tasks() {
        let (_, _, console) = run_script(&["3", "5"]).await;
        assert_eq!(replies(&console), vec![messages::NO_TASKS, messages::FAREWELL]);
    }

    #[rstest]
    #[case::complete_past_end("2", "5")]
    #[case::complete_zero("2", "0")]
    #[case::complete_negative("2", "-1")]
    #[case::complete_word("2", "first")]
    #[case::delete_past_end("4", "3")]
    #[case::delete_word("4", "")]
    #[tokio::test]
    async fn bad_task_numbers_leave_list_unchanged(#[case] choice: &str, #[case] number: &str) {
        let (end, list, console) =
            run_script(&["1", "buy milk", "1", "walk dog", choice, number, "5"]).await;

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(list.len(), 2);
        assert!(list.list().entries().unwrap().all(|e| e.status == TaskStatus::Incomplete));
        assert_eq!(
            replies(&console),
            vec![
                messages::TASK_ADDED,
                messages::TASK_ADDED,
                messages::INVALID_POSITION,
                messages::FAREWELL,
            ]
        );
    }

    #[tokio::test]
    async fn empty_description_is_accepted() {
        let (_, list, console) = run_script(&["1", "", "3", "5"]).await;

        assert_eq!(list.get(1).unwrap().description(), "");
        assert!(replies(&console).contains(&"1.  - Incomplete"));
    }

    #[rstest]
    #[case::at_menu(&[])]
    #[case::after_invalid_choice(&["x"])]
    #[case::at_description(&["1"])]
    #[case::at_task_number(&["1", "a", "2"])]
    #[tokio::test]
    async fn end_of_input_closes_session(#[case] input: &[&str]) {
        let (end, _, console) = run_script(input).await;

        assert_eq!(end, SessionEnd::InputClosed);
        assert!(!console.output().iter().any(|l| l == messages::FAREWELL));
    }

    #[tokio::test]
    async fn session_can_start_from_existing_list() {
        let mut list = TaskList::new();
        list.add("water plants");
        let mut session = Session::with_list(list, ScriptedConsole::new(["2", "1", "5"]));

        session.run().await.unwrap();

        assert!(session.list().get(1).unwrap().is_completed());
        assert_eq!(session.console().remaining_input(), 0);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn typos_stay_below_warn() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (end, _, _) =
            run_script(&["abc", "9", "2", "1", "x", "4", "", "2", "7", "5"]).await;

        assert_eq!(end, SessionEnd::Quit);
        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged, "");
    }

    #[rstest]
    #[case::plain("3", Some(3))]
    #[case::padded(" 2 ", Some(2))]
    #[case::negative("-4", Some(0))]
    #[case::word("two", None)]
    fn task_numbers_parse(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(parse_position(input), expected);
    }
}
