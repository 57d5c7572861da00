//! End-to-end CLI tests
//!
//! Drives the calculator through the clac_cli Session the way the binary does.

use clac_cli::session::EMPTY_STACK;
use clac_cli::Session;
use interpreter::Status;

#[test]
fn test_e2e_echoes_top_after_each_line() {
    let mut session = Session::new(0);
    session.execute_line("3 4 +");
    assert_eq!(session.report(), vec!["7"]);
    session.execute_line("drop");
    assert_eq!(session.report(), vec![EMPTY_STACK]);
}

#[test]
fn test_e2e_errors_precede_stack() {
    let mut session = Session::new(0);
    session.execute_line("1 swap");
    assert_eq!(
        session.report(),
        vec!["Error: Stack not high enough: need 2, have 1".to_string(), "1".to_string()]
    );
}

#[test]
fn test_e2e_stack_view_with_kinds() {
    let mut session = Session::new(3);
    session.execute_line("1/2 (1,1) #a");
    assert_eq!(
        session.report(),
        vec![" 2: RAT : 1/2", " 1: CPX : (1.000, 1.000)", " 0: BIN : #Ah"]
    );
}

#[test]
fn test_e2e_info_and_exit_messages() {
    let mut session = Session::new(0);
    session.execute_line("exit");
    assert_eq!(
        session.report(),
        vec!["Use 'quit' to terminate Clac", EMPTY_STACK]
    );
    session.execute_line("info");
    let lines = session.report();
    assert!(lines[0].starts_with("Clac version "));
}

#[test]
fn test_e2e_quit_ends_session() {
    let mut session = Session::new(0);
    assert_eq!(session.execute_line("5 quit"), Status::Stopped);
    assert_eq!(session.execute_line("6"), Status::Stopped);
    assert_eq!(session.top_line(), "5");
}
